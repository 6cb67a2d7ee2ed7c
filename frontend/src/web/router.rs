//! 路由服务模块 - 核心引擎
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 每次导航都经过核心 [`RouteGuard`]："监听 -> 守卫 -> 重定向或加载"。

use leptos::prelude::*;
use log::{info, warn};
use storefront::{AppRoute, GuardDecision, RouteGuard, Session};
use storefront_shared::HOME_PATH;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 守卫重定向可以串联（登录页 -> 记住的页面 -> 首页）；
/// 超过此次数说明路由表不一致
const MAX_REDIRECTS: usize = 4;

/// 当前位置（路径加查询串）
fn current_location() -> String {
    let Some(window) = web_sys::window() else {
        return HOME_PATH.to_string();
    };
    let location = window.location();
    let path = location
        .pathname()
        .unwrap_or_else(|_| HOME_PATH.to_string());
    let search = location.search().unwrap_or_default();
    format!("{path}{search}")
}

fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        warn!("[Router] history rejected {path}");
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 已渲染路由的位置（含查询串）
    location: RwSignal<String>,
    pending: RwSignal<bool>,
    guard: StoredValue<RouteGuard, LocalStorage>,
}

impl RouterService {
    fn new(guard: RouteGuard) -> Self {
        let (current_route, set_route) = signal(AppRoute::Home);
        Self {
            current_route,
            set_route,
            location: RwSignal::new(HOME_PATH.to_string()),
            pending: RwSignal::new(false),
            guard: StoredValue::new_local(guard),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 会话是否仍在恢复中
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// 读取当前位置的查询参数
    pub fn query(&self, name: &str) -> Option<String> {
        self.location.with(|location| {
            let search = location.find('?').map(|i| &location[i..])?;
            web_sys::UrlSearchParams::new_with_str(search)
                .ok()?
                .get(name)
                .filter(|v| !v.is_empty())
        })
    }

    pub fn navigate(&self, path: &str) {
        self.resolve(path, true);
    }

    /// 主动退出登录
    ///
    /// 不记住目标页，直接显示登录页。之后会话 effect 重新守卫 `/login`，仍然放行。
    pub fn sign_out(&self) {
        let target = self.guard.with_value(RouteGuard::sign_out);
        self.navigate(&target);
    }

    /// 解析并加载路径
    ///
    /// # 参数
    /// - `path`: 目标位置；先经过守卫并跟随重定向，再更新 history 与当前路由
    /// - `use_push`: `true` 时 pushState，否则 replaceState
    fn resolve(&self, path: &str, use_push: bool) {
        let mut location = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            let route = AppRoute::from_path(&location);
            let decision = self.guard.with_value(|guard| guard.check(&route, &location));

            match decision {
                GuardDecision::Redirect(target) => {
                    info!("[Router] {location} -> {target}");
                    location = target;
                }
                decision => {
                    write_history(&location, use_push);
                    self.pending.set(decision == GuardDecision::Pending);
                    self.location.set(location);
                    self.set_route.set(route);
                    return;
                }
            }
        }

        warn!("[Router] redirect loop near {location}, falling back to home");
        write_history(HOME_PATH, use_push);
        self.pending.set(false);
        self.location.set(HOME_PATH.to_string());
        self.set_route.set(AppRoute::Home);
    }

    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.resolve(&current_location(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    }

    /// 每次会话变化时重新守卫当前位置
    ///
    /// 包括恢复完成、登录（登录后跳转）、退出、401 强制退出以及其他标签页的修改。
    fn setup_session_redirect(&self, session: Signal<Session>) {
        let router = *self;
        Effect::new(move |_| {
            session.track();
            router.resolve(&router.location.get_untracked(), false);
        });
    }
}

fn provide_router(guard: RouteGuard, session: Signal<Session>) -> RouterService {
    let router = RouterService::new(guard);

    router.resolve(&current_location(), false);
    router.init_popstate_listener();
    router.setup_session_redirect(session);

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| router.navigate(to)
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(guard: RouteGuard, session: Signal<Session>, children: Children) -> impl IntoView {
    provide_router(guard, session);
    children()
}

/// 渲染当前路由；会话恢复期间显示加载视图
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        if router.is_pending() {
            return view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any();
        }
        matcher(router.current_route().get())
    }
}

#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
