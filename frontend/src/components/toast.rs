use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// 数秒后自动消失的提示
#[component]
pub fn Toast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    Effect::new(move |_| {
        if notice.with(Option::is_some) {
            Timeout::new(DISMISS_AFTER_MS, move || {
                notice.try_set(None);
            })
            .forget();
        }
    });

    view! {
        {move || notice.get().map(|n| {
            let class = if n.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class>
                        <span>{n.text}</span>
                    </div>
                </div>
            }
        })}
    }
}
