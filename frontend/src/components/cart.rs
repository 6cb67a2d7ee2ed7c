use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::CartItem;
use storefront_shared::protocol::{DeleteCartRequest, ListCartRequest, UpdateCartRequest};

use crate::api::rupiah;
use crate::auth::use_auth;
use crate::components::toast::{Notice, Toast};
use crate::web::router::Link;

#[component]
pub fn CartPage() -> impl IntoView {
    let auth = use_auth();

    let lines = RwSignal::new(Vec::<CartItem>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(Option::<Notice>::None);

    let reload = move || {
        let api = auth.api();
        spawn_local(async move {
            match api.call(&ListCartRequest).await {
                Ok(resp) => {
                    lines.try_set(resp.data);
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Gagal memuat keranjang: {e}"))));
                }
            }
            loading.try_set(false);
        });
    };
    reload();

    let update_quantity = move |id: i64, quantity: u32| {
        let api = auth.api();
        spawn_local(async move {
            match api.call(&UpdateCartRequest { id, quantity }).await {
                Ok(_) => {
                    lines.try_update(|lines| {
                        if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
                            line.quantity = quantity;
                        }
                    });
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Gagal memperbarui jumlah: {e}"))));
                }
            }
        });
    };

    let remove = move |id: i64| {
        let api = auth.api();
        spawn_local(async move {
            match api.call(&DeleteCartRequest { ids: vec![id] }).await {
                Ok(_) => {
                    lines.try_update(|lines| lines.retain(|l| l.id != id));
                    notice.try_set(Some(Notice::success("Produk dihapus dari keranjang.")));
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Gagal menghapus produk: {e}"))));
                }
            }
        });
    };

    let subtotal = move || lines.with(|l| l.iter().map(CartItem::line_total).sum::<f64>());

    view! {
        <Toast notice=notice />
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">"Keranjang Belanja"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <Show
                    when=move || lines.with(|l| !l.is_empty())
                    fallback=|| view! {
                        <div class="text-center py-12 space-y-4">
                            <p class="text-base-content/50">"Keranjang Anda kosong."</p>
                            <Link to="/products" class="btn btn-primary">"Lanjut belanja"</Link>
                        </div>
                    }
                >
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"Produk"</th>
                                    <th>"Harga"</th>
                                    <th>"Jumlah"</th>
                                    <th>"Subtotal"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || lines.get()
                                    key=|line| (line.id, line.quantity)
                                    children=move |line| {
                                        let id = line.id;
                                        let name = line.item.as_ref().map(|i| i.name.clone()).unwrap_or_default();
                                        let price = line.item.as_ref().map_or(0.0, |i| i.price);
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>{rupiah(price)}</td>
                                                <td>
                                                    <input
                                                        type="number"
                                                        min="1"
                                                        class="input input-bordered input-sm w-20"
                                                        prop:value=line.quantity.to_string()
                                                        on:change=move |ev| {
                                                            if let Ok(q) = event_target_value(&ev).parse::<u32>() {
                                                                update_quantity(id, q.max(1));
                                                            }
                                                        }
                                                    />
                                                </td>
                                                <td>{rupiah(line.line_total())}</td>
                                                <td>
                                                    <button class="btn btn-ghost btn-sm text-error" on:click=move |_| remove(id)>
                                                        "Hapus"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                    <div class="flex justify-between items-center">
                        <Link to="/products" class="btn btn-ghost">"Lanjut belanja"</Link>
                        <div class="flex items-center gap-4">
                            <span class="text-xl font-bold">{move || rupiah(subtotal())}</span>
                            <Link to="/checkout" class="btn btn-primary">"Checkout"</Link>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
