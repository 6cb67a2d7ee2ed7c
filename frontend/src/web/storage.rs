//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`。所有失败都以 [`StorageError`] 报告，由会话存储决定如何处理。

use storefront::{DurableStorage, StorageChange, StorageError, StorageListener, StorageResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn rejected(err: JsValue) -> StorageError {
    StorageError::Rejected(format!("{err:?}"))
}

impl DurableStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(rejected)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?.set_item(key, value).map_err(rejected)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::storage()?.remove_item(key).map_err(rejected)
    }

    /// 转发 `window` 的 `storage` 事件
    ///
    /// 浏览器只在写入方以外的标签页触发该事件。
    fn watch(&self, listener: StorageListener) {
        let Some(window) = web_sys::window() else {
            log::warn!("[Storage] no window, cross-tab sync disabled");
            return;
        };

        let closure = Closure::<dyn Fn(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                let change = match event.key() {
                    Some(key) => StorageChange::key(key),
                    None => StorageChange::cleared(),
                };
                listener(&change);
            },
        );

        if window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[Storage] could not subscribe to storage events");
        }

        // the listener lives as long as the page
        closure.forget();
    }
}
