use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::Order;
use storefront_shared::protocol::ListOrdersRequest;

use crate::api::rupiah;
use crate::auth::use_auth;

const FILTERS: [&str; 6] = ["all", "pending", "processing", "shipped", "delivered", "cancelled"];

/// Label and badge class for an order status.
fn status_badge(status: Option<&str>) -> (&'static str, &'static str) {
    match status {
        Some("pending") | None => ("Pending Payment", "badge-warning"),
        Some("processing") => ("Processing", "badge-info"),
        Some("shipped") => ("Shipped", "badge-primary"),
        Some("delivered") => ("Delivered", "badge-success"),
        Some("cancelled") => ("Cancelled", "badge-error"),
        Some(_) => ("Unknown", "badge-ghost"),
    }
}

fn matches_filter(order: &Order, filter: &str) -> bool {
    filter == "all" || order.status.as_deref() == Some(filter)
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let auth = use_auth();

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let filter = RwSignal::new("all".to_string());

    let api = auth.api();
    spawn_local(async move {
        match api.call(&ListOrdersRequest).await {
            Ok(resp) => {
                orders.try_set(resp.orders);
            }
            Err(e) => {
                error.try_set(Some(format!("Gagal memuat transaksi: {e}")));
            }
        }
        loading.try_set(false);
    });

    let visible = move || {
        let filter = filter.get();
        orders.with(|all| {
            all.iter()
                .filter(|o| matches_filter(o, &filter))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Riwayat Transaksi"</h1>
                <select class="select select-bordered" on:change=move |ev| filter.set(event_target_value(&ev))>
                    {FILTERS
                        .into_iter()
                        .map(|f| {
                            let label = if f == "all" { "Semua" } else { status_badge(Some(f)).0 };
                            view! { <option value=f>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"No. Pesanan"</th>
                                <th>"Tanggal"</th>
                                <th>"Produk"</th>
                                <th>"Total"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=visible key=|o| o.id let:order>
                                {
                                    let (label, badge) = status_badge(order.status.as_deref());
                                    view! {
                                        <tr>
                                            <td class="font-mono">{format!("#{}", order.id)}</td>
                                            <td>{order.created_at.clone().unwrap_or_default()}</td>
                                            <td>{format!("{} produk", order.items.len())}</td>
                                            <td>{rupiah(order.total)}</td>
                                            <td><span class=format!("badge {badge}")>{label}</span></td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: Option<&str>) -> Order {
        Order {
            id: 1,
            status: status.map(str::to_string),
            total: 0.0,
            created_at: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn filter_matches_exact_status() {
        assert!(matches_filter(&order(Some("shipped")), "all"));
        assert!(matches_filter(&order(Some("shipped")), "shipped"));
        assert!(!matches_filter(&order(None), "pending"));
        assert_eq!(status_badge(Some("refunded")).0, "Unknown");
    }
}
