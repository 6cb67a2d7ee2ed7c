use storefront::ApiConfig;
use storefront::config::DEFAULT_API_BASE_URL;
use storefront::shared::Item;

/// 构建时由 `STOREFRONT_API_BASE_URL` 写入的 API 根地址
pub fn config() -> ApiConfig {
    ApiConfig::new(option_env!("STOREFRONT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// 商品图片的绝对地址；图片与 API 根目录同级提供
pub fn image_url(item: &Item) -> Option<String> {
    let path = item.path.as_deref()?.trim();
    if path.is_empty() {
        return None;
    }
    let config = config();
    let host = config
        .base_url()
        .strip_suffix("/api")
        .unwrap_or(config.base_url());
    ApiConfig::new(host).url(path).ok().map(String::from)
}

/// 格式化为印尼盾金额，如 `Rp 1.250.000`
pub fn rupiah(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_groups_thousands() {
        assert_eq!(rupiah(0.0), "Rp 0");
        assert_eq!(rupiah(950.0), "Rp 950");
        assert_eq!(rupiah(1_250_000.0), "Rp 1.250.000");
        assert_eq!(rupiah(-12_000.4), "-Rp 12.000");
    }
}
