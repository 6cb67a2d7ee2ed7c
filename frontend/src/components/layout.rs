//! 页面布局：商城页头页脚与管理后台框架

use leptos::prelude::*;
use storefront::{AdminSection, AppRoute};
use storefront_shared::protocol::ListCategoriesRequest;

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

/// 分类接口不可用时显示
const FALLBACK_CATEGORIES: [&str; 3] = ["Electronics", "Furniture", "Clothing"];

#[component]
fn CategoryMenu() -> impl IntoView {
    let auth = use_auth();
    let categories = RwSignal::new(Vec::<String>::new());

    let api = auth.api();
    leptos::task::spawn_local(async move {
        let list = match api.call(&ListCategoriesRequest).await {
            Ok(resp) => resp.data,
            Err(e) => {
                log::warn!("[Header] categories unavailable: {e}");
                FALLBACK_CATEGORIES.iter().map(|c| c.to_string()).collect()
            }
        };
        let mut unique: Vec<String> = Vec::with_capacity(list.len());
        for category in list {
            if !category.trim().is_empty() && !unique.contains(&category) {
                unique.push(category);
            }
        }
        categories.try_set(unique);
    });

    view! {
        <div class="dropdown">
            <div tabindex="0" role="button" class="btn btn-ghost">"Produk"</div>
            <ul tabindex="0" class="dropdown-content menu z-[1] p-2 shadow bg-base-100 rounded-box w-52">
                <li><Link to="/products">"Semua Kategori"</Link></li>
                <For
                    each=move || categories.get()
                    key=|c| c.clone()
                    children=|category| {
                        let to = format!("/products?category={}", urlencoding::encode(&category));
                        view! { <li><Link to=to>{category}</Link></li> }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let on_logout = move |_| router.sign_out();

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1 gap-2">
                <Link to="/" class="btn btn-ghost text-xl">"Storefront"</Link>
                <CategoryMenu />
                <Link to="/about" class="btn btn-ghost">"Tentang"</Link>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! { <Link to="/login" class="btn btn-primary btn-sm">"Login"</Link> }
                >
                    <Link to="/cart" class="btn btn-ghost btn-sm">"Keranjang"</Link>
                    <Link to="/transactions" class="btn btn-ghost btn-sm">"Transaksi"</Link>
                    <Show when=move || auth.is_admin()>
                        <Link to="/admin" class="btn btn-ghost btn-sm">"Admin"</Link>
                    </Show>
                    <Link to="/profile" class="btn btn-ghost btn-sm">
                        {move || auth.user().map(|u| u.display_name()).unwrap_or_default()}
                    </Link>
                    <button class="btn btn-outline btn-error btn-sm" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ShopLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Header />
            <main class="flex-1 w-full max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
            <footer class="footer footer-center p-4 bg-base-300 text-base-content">
                <p>"Storefront"</p>
            </footer>
        </div>
    }
}

#[component]
pub fn AdminLayout(section: AdminSection, children: Children) -> impl IntoView {
    let router = use_router();

    let is_active = move |s: AdminSection| router.current_route().get() == AppRoute::Admin(s);

    view! {
        <div class="min-h-screen flex bg-base-200">
            <aside class="w-60 bg-base-100 shadow-xl p-4 flex flex-col gap-2">
                <h2 class="text-xl font-bold mb-4">"Admin Panel"</h2>
                <ul class="menu">
                    {AdminSection::ALL
                        .into_iter()
                        .map(|s| {
                            let class = move || if is_active(s) { "active" } else { "" };
                            view! {
                                <li>
                                    <a
                                        class=class
                                        href=AppRoute::Admin(s).to_path()
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            router.navigate(&AppRoute::Admin(s).to_path());
                                        }
                                    >
                                        {s.title()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="mt-auto flex flex-col gap-2">
                    <Link to="/" class="btn btn-ghost btn-sm">"Kembali ke toko"</Link>
                    <button class="btn btn-outline btn-error btn-sm" on:click=move |_| router.sign_out()>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-4 md:p-8">
                <h1 class="text-2xl font-bold mb-6">{section.title()}</h1>
                {children()}
            </main>
        </div>
    }
}
