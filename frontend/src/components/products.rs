use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::Item;
use storefront_shared::protocol::{AddToCartRequest, GetItemRequest, ListItemsRequest};

use crate::api::{image_url, rupiah};
use crate::auth::use_auth;
use crate::components::toast::{Notice, Toast};
use crate::web::router::{Link, use_navigate, use_router};

pub const PER_PAGE: u32 = 12;

const SORT_OPTIONS: [(&str, &str); 4] = [
    ("", "Terbaru"),
    ("price_asc", "Harga terendah"),
    ("price_desc", "Harga tertinggi"),
    ("name", "Nama"),
];

fn page_count(total: u64, per_page: u32) -> u32 {
    let pages = total.div_ceil(u64::from(per_page.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

#[component]
pub fn ProductCard(item: Item) -> impl IntoView {
    let href = format!("/products/{}", item.id);
    let image = image_url(&item);
    let in_stock = item.in_stock();

    view! {
        <div class="card bg-base-100 shadow-xl">
            {image.map(|src| view! { <figure><img src=src alt=item.name.clone() class="h-48 w-full object-cover" /></figure> })}
            <div class="card-body">
                <h2 class="card-title">{item.name.clone()}</h2>
                <p class="text-base-content/70 text-sm">{item.category.clone().unwrap_or_default()}</p>
                <p class="text-lg font-bold text-primary">{rupiah(item.price)}</p>
                <div class="card-actions justify-between items-center">
                    <Show when=move || !in_stock>
                        <span class="badge badge-ghost">"Stok habis"</span>
                    </Show>
                    <Link to=href class="btn btn-primary btn-sm">"Detail"</Link>
                </div>
            </div>
        </div>
    }
}

/// 商品列表，分类过滤来自 `?category=`
#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let items = RwSignal::new(Vec::<Item>::new());
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(String::new());
    let category = Memo::new(move |_| router.query("category"));

    // a new filter starts from the first page
    Effect::new(move |_| {
        category.track();
        search.track();
        sort.track();
        if page.get_untracked() != 1 {
            page.set(1);
        }
    });

    Effect::new(move |_| {
        let mut request = ListItemsRequest::page(page.get(), PER_PAGE);
        request.category = category.get();
        request.search = Some(search.get()).filter(|s| !s.trim().is_empty());
        request.sort = Some(sort.get()).filter(|s| !s.is_empty());

        loading.set(true);
        let api = auth.api();
        spawn_local(async move {
            match api.call(&request).await {
                Ok(resp) => {
                    total.try_set(resp.total());
                    items.try_set(resp.data);
                    error.try_set(None);
                }
                Err(e) => {
                    error.try_set(Some(format!("Gagal memuat produk: {e}")));
                }
            }
            loading.try_set(false);
        });
    });

    let pages = move || page_count(total.get(), PER_PAGE);

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row gap-4 justify-between">
                <h1 class="text-2xl font-bold">
                    {move || category.get().unwrap_or_else(|| "Semua Produk".to_string())}
                </h1>
                <div class="flex gap-2">
                    <input
                        type="search"
                        placeholder="Cari produk..."
                        class="input input-bordered"
                        prop:value=search
                        on:change=move |ev| search.set(event_target_value(&ev))
                    />
                    <select class="select select-bordered" on:change=move |ev| sort.set(event_target_value(&ev))>
                        {SORT_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="flex justify-center py-12"><span class="loading loading-spinner loading-lg"></span></div> }
            >
                <Show
                    when=move || items.with(|i| !i.is_empty())
                    fallback=|| view! { <p class="text-center py-12 text-base-content/50">"Produk tidak ditemukan."</p> }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        <For each=move || items.get() key=|item| item.id let:item>
                            <ProductCard item=item />
                        </For>
                    </div>
                </Show>
            </Show>

            <div class="join flex justify-center">
                <button
                    class="join-item btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "«"
                </button>
                <button class="join-item btn">{move || format!("Halaman {} / {}", page.get(), pages())}</button>
                <button
                    class="join-item btn"
                    disabled=move || page.get() >= pages()
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "»"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetailPage(id: i64) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let navigate = use_navigate();

    let item = RwSignal::new(Option::<Item>::None);
    let error = RwSignal::new(Option::<String>::None);
    let quantity = RwSignal::new(1u32);
    let adding = RwSignal::new(false);
    let notice = RwSignal::new(Option::<Notice>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.call(&GetItemRequest { id }).await {
            Ok(resp) => {
                item.try_set(Some(resp.data));
            }
            Err(e) => {
                error.try_set(Some(format!("Produk tidak dapat dimuat: {e}")));
            }
        }
    });

    let add_to_cart = move |_: leptos::ev::MouseEvent| {
        if !auth.is_authenticated() {
            // come back here after signing in
            auth.store()
                .set_redirect_intent(&router.current_route().get_untracked().to_path());
            navigate("/login");
            return;
        }

        adding.set(true);
        let api = auth.api();
        let request = AddToCartRequest {
            item_id: id,
            quantity: quantity.get_untracked().max(1),
        };
        spawn_local(async move {
            let result = match api.call(&request).await {
                Ok(_) => Notice::success("Produk ditambahkan ke keranjang."),
                Err(e) => Notice::error(format!("Gagal menambahkan ke keranjang: {e}")),
            };
            notice.try_set(Some(result));
            adding.try_set(false);
        });
    };

    view! {
        <Toast notice=notice />
        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
        </Show>
        {move || item.get().map(|item| {
            let image = image_url(&item);
            let in_stock = item.in_stock();
            let add_to_cart = add_to_cart.clone();
            view! {
                <div class="card lg:card-side bg-base-100 shadow-xl">
                    {image.map(|src| view! { <figure class="lg:w-1/2"><img src=src alt=item.name.clone() /></figure> })}
                    <div class="card-body">
                        <h1 class="card-title text-3xl">{item.name.clone()}</h1>
                        <p class="text-2xl font-bold text-primary">{rupiah(item.price)}</p>
                        <p>{item.description.clone().unwrap_or_default()}</p>
                        <p class="text-sm text-base-content/70">
                            {item.stock.map(|s| format!("Stok: {s}")).unwrap_or_default()}
                        </p>
                        <div class="card-actions items-center">
                            <input
                                type="number"
                                min="1"
                                class="input input-bordered w-24"
                                prop:value=move || quantity.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(q) = event_target_value(&ev).parse::<u32>() {
                                        quantity.set(q.max(1));
                                    }
                                }
                            />
                            <button
                                class="btn btn-primary"
                                disabled=move || adding.get() || !in_stock
                                on:click=add_to_cart
                            >
                                "Tambah ke keranjang"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(0, PER_PAGE), 1);
        assert_eq!(page_count(12, PER_PAGE), 1);
        assert_eq!(page_count(13, PER_PAGE), 2);
        assert_eq!(page_count(5, 0), 5);
    }
}
