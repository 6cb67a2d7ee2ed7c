//! Storefront 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `web::router`: 路由服务（核心引擎），每个位置都经过核心路由守卫
//! - `web::storage` / `web::http`: 核心存储与 HTTP 抽象的浏览器实现
//! - `auth`: 会话存储到信号的桥接
//! - `components`: 页面与布局

mod api;
mod auth;
mod components {
    pub mod admin;
    pub mod cart;
    pub mod checkout;
    pub mod home;
    pub mod layout;
    pub mod login;
    pub mod products;
    pub mod profile;
    mod toast;
    pub mod transactions;
}

pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use leptos::prelude::*;
use storefront::{AppRoute, RouteGuard, SessionStore};

use crate::auth::AuthContext;
use crate::components::admin::AdminPage;
use crate::components::cart::CartPage;
use crate::components::checkout::CheckoutPage;
use crate::components::home::{AboutPage, HomePage};
use crate::components::layout::{AdminLayout, ShopLayout};
use crate::components::login::LoginPage;
use crate::components::products::{ProductDetailPage, ProductsPage};
use crate::components::profile::ProfilePage;
use crate::components::transactions::TransactionsPage;
use crate::web::BrowserStorage;
use crate::web::router::{Router, RouterOutlet};

fn shop_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Checkout => view! { <CheckoutPage /> }.into_any(),
        AppRoute::Transactions => view! { <TransactionsPage /> }.into_any(),
        // the router never renders NotFound, it redirects home first
        _ => view! { <HomePage /> }.into_any(),
    }
}

/// 路由到视图的映射
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Admin(section) => view! {
            <AdminLayout section=section>
                <AdminPage section=section />
            </AdminLayout>
        }
        .into_any(),
        other => view! { <ShopLayout>{shop_page(other)}</ShopLayout> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. session store backed by localStorage, not yet restored
    let store = SessionStore::new(BrowserStorage);
    let auth_ctx = AuthContext::new(store.clone());
    provide_context(auth_ctx);

    // 2. restore after the first render; the router shows a loading view
    //    until then and re-guards the location once the session is known
    Effect::new(move |_| auth_ctx.store().restore());

    view! {
        <Router guard=RouteGuard::new(store) session=auth_ctx.session_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
