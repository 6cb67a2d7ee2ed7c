use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::protocol::{CreateOrderRequest, ListCartRequest};
use storefront_shared::{CartItem, CustomerInfo};

use crate::api::rupiah;
use crate::auth::use_auth;
use crate::components::toast::{Notice, Toast};
use crate::web::router::use_navigate;

/// 小计超过该金额免运费
const FREE_SHIPPING_ABOVE: f64 = 500_000.0;
const SHIPPING_FEE: f64 = 25_000.0;
/// PPN（增值税）
const TAX_RATE: f64 = 0.11;

const PAYMENT_METHODS: [(&str, &str); 4] = [
    ("credit_card", "Credit Card"),
    ("bank_transfer", "Bank Transfer"),
    ("ewallet", "E-Wallet"),
    ("cod", "Cash on Delivery"),
];

fn shipping_for(subtotal: f64) -> f64 {
    if subtotal > FREE_SHIPPING_ABOVE {
        0.0
    } else {
        SHIPPING_FEE
    }
}

fn missing_contact(customer: &CustomerInfo) -> bool {
    [&customer.name, &customer.email, &customer.phone]
        .iter()
        .any(|field| field.trim().is_empty())
}

/// 信号已释放说明下单页面已卸载
fn still_mounted(submitting: RwSignal<bool>) -> bool {
    submitting.try_get().is_some()
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let cart = RwSignal::new(Vec::<CartItem>::new());
    let submitting = RwSignal::new(false);
    let notice = RwSignal::new(Option::<Notice>::None);
    let payment = RwSignal::new(String::new());

    // prefill contact details from the profile
    let profile = auth.user().unwrap_or_default();
    let name = RwSignal::new(profile.name.clone().unwrap_or_default());
    let email = RwSignal::new(profile.email.clone().unwrap_or_default());
    let phone = RwSignal::new(profile.phone.clone().unwrap_or_default());
    let address = RwSignal::new(profile.address.clone().unwrap_or_default());

    let api = auth.api();
    spawn_local(async move {
        match api.call(&ListCartRequest).await {
            Ok(resp) => {
                cart.try_set(resp.data);
            }
            Err(e) => {
                notice.try_set(Some(Notice::error(format!("Gagal memuat keranjang: {e}"))));
            }
        }
    });

    let subtotal = move || cart.with(|c| c.iter().map(CartItem::line_total).sum::<f64>());
    let shipping = move || shipping_for(subtotal());
    let tax = move || subtotal() * TAX_RATE;

    let place_order = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let customer = CustomerInfo {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: Some(address.get_untracked()).filter(|a| !a.trim().is_empty()),
        };
        if payment.with_untracked(String::is_empty) {
            notice.set(Some(Notice::error("Pilih metode pembayaran.")));
            return;
        }
        if missing_contact(&customer) {
            notice.set(Some(Notice::error("Lengkapi nama, email, dan nomor telepon.")));
            return;
        }

        let request = cart.with_untracked(|lines| {
            let subtotal: f64 = lines.iter().map(CartItem::line_total).sum();
            CreateOrderRequest::from_cart(
                customer,
                payment.get_untracked(),
                lines,
                shipping_for(subtotal),
                TAX_RATE,
            )
        });
        if request.items.is_empty() {
            notice.set(Some(Notice::error("Keranjang Anda kosong.")));
            return;
        }

        submitting.set(true);
        let api = auth.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.call(&request).await {
                // the user may have moved on while the order was in flight
                Ok(_) if still_mounted(submitting) => navigate("/transactions"),
                Ok(_) => {}
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Pesanan gagal dibuat: {e}"))));
                    submitting.try_set(false);
                }
            }
        });
    };

    let text_field = move |label: &'static str, value: RwSignal<String>, kind: &'static str| {
        view! {
            <div class="form-control">
                <label class="label"><span class="label-text">{label}</span></label>
                <input
                    type=kind
                    class="input input-bordered"
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <Toast notice=notice />
        <form class="grid grid-cols-1 lg:grid-cols-3 gap-6" on:submit=place_order>
            <div class="lg:col-span-2 space-y-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Informasi Pelanggan"</h2>
                        {text_field("Nama", name, "text")}
                        {text_field("Email", email, "email")}
                        {text_field("Telepon", phone, "tel")}
                        {text_field("Alamat", address, "text")}
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Metode Pembayaran"</h2>
                        {PAYMENT_METHODS
                            .into_iter()
                            .map(|(id, label)| view! {
                                <label class="label cursor-pointer justify-start gap-4">
                                    <input
                                        type="radio"
                                        name="payment"
                                        class="radio radio-primary"
                                        value=id
                                        prop:checked=move || payment.with(|p| p == id)
                                        on:change=move |_| payment.set(id.to_string())
                                    />
                                    <span class="label-text">{label}</span>
                                </label>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow h-fit">
                <div class="card-body space-y-2">
                    <h2 class="card-title">"Ringkasan Pesanan"</h2>
                    <div class="flex justify-between"><span>"Subtotal"</span><span>{move || rupiah(subtotal())}</span></div>
                    <div class="flex justify-between"><span>"Ongkos kirim"</span><span>{move || rupiah(shipping())}</span></div>
                    <div class="flex justify-between"><span>"PPN 11%"</span><span>{move || rupiah(tax())}</span></div>
                    <div class="flex justify-between font-bold text-lg">
                        <span>"Total"</span>
                        <span>{move || rupiah(subtotal() + shipping() + tax())}</span>
                    </div>
                    <button class="btn btn-primary w-full" disabled=move || submitting.get()>
                        "Buat Pesanan"
                    </button>
                </div>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipping_is_free_above_threshold() {
        assert_eq!(shipping_for(100_000.0), SHIPPING_FEE);
        assert_eq!(shipping_for(500_000.0), SHIPPING_FEE);
        assert_eq!(shipping_for(500_001.0), 0.0);
    }

    #[test]
    fn contact_requires_name_email_and_phone() {
        let mut customer = CustomerInfo {
            name: "Budi".into(),
            email: "budi@example.com".into(),
            phone: " ".into(),
            address: None,
        };
        assert!(missing_contact(&customer));
        customer.phone = "0812".into();
        assert!(!missing_contact(&customer));
    }

    #[test]
    fn late_order_result_is_ignored_after_unmount() {
        let owner = Owner::new();
        let submitting = owner.with(|| RwSignal::new(true));
        assert!(still_mounted(submitting));

        owner.cleanup();

        assert!(!still_mounted(submitting));
    }
}
