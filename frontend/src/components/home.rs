use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::Item;
use storefront_shared::protocol::ListItemsRequest;

use crate::auth::use_auth;
use crate::components::products::ProductCard;
use crate::web::router::Link;

const FEATURED: u32 = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let featured = RwSignal::new(Vec::<Item>::new());

    let api = auth.api();
    spawn_local(async move {
        match api.call(&ListItemsRequest::page(1, FEATURED)).await {
            Ok(resp) => {
                featured.try_set(resp.data);
            }
            Err(e) => log::warn!("[Home] featured products unavailable: {e}"),
        }
    });

    view! {
        <div class="space-y-12">
            <div class="hero bg-base-100 rounded-box shadow py-12">
                <div class="hero-content text-center">
                    <div class="max-w-xl space-y-4">
                        <h1 class="text-4xl font-bold">
                            {move || match auth.user() {
                                Some(user) => format!("Selamat datang, {}", user.display_name()),
                                None => "Selamat datang di Storefront".to_string(),
                            }}
                        </h1>
                        <p class="text-base-content/70">"Temukan produk terbaik dengan harga terjangkau."</p>
                        <Link to="/products" class="btn btn-primary">"Belanja sekarang"</Link>
                    </div>
                </div>
            </div>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Produk Unggulan"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    <For each=move || featured.get() key=|item| item.id let:item>
                        <ProductCard item=item />
                    </For>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="hero bg-base-100 rounded-box shadow py-16">
            <div class="hero-content text-center">
                <div class="max-w-2xl space-y-4">
                    <h1 class="text-5xl font-bold">"Tentang Kami"</h1>
                    <p class="text-lg text-base-content/70">
                        "Storefront adalah toko daring untuk kebutuhan elektronik, furnitur, dan pakaian, "
                        "dengan pengiriman ke seluruh Indonesia."
                    </p>
                </div>
            </div>
        </div>
    }
}
