//! 认证上下文
//!
//! 将核心 [`SessionStore`] 接入 Leptos：存储本身放在本地 `StoredValue` 中，
//! 每次会话变化都镜像到信号上以触发视图更新。路由器读取同一信号重新执行守卫。

use leptos::prelude::*;
use storefront::{ApiClient, Session, SessionStore};
use storefront_shared::UserProfile;

use crate::api;
use crate::web::FetchHttpClient;

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: StoredValue<SessionStore, LocalStorage>,
    session: RwSignal<Session>,
}

impl AuthContext {
    pub fn new(store: SessionStore) -> Self {
        let session = RwSignal::new(store.current_session());

        store
            .on_session_change(move |next| {
                session.try_set(next.clone());
            })
            .detach();

        Self {
            store: StoredValue::new_local(store),
            session,
        }
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    /// 会话信号，注入路由器
    pub fn session_signal(&self) -> Signal<Session> {
        self.session.into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(Session::is_admin)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user().cloned())
    }

    /// 绑定当前会话的 API 客户端
    pub fn api(&self) -> ApiClient<FetchHttpClient> {
        ApiClient::new(api::config(), FetchHttpClient, self.store())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
