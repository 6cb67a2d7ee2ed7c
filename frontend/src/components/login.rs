use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::ApiError;
use storefront_shared::Credentials;

use crate::auth::use_auth;

fn login_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Status { .. } | ApiError::Unauthorized => {
            "Username atau password salah.".to_string()
        }
        ApiError::Transport(_) => {
            "Tidak dapat terhubung ke server. Pastikan backend berjalan dan CORS diizinkan."
                .to_string()
        }
        other => format!("Terjadi kesalahan yang tidak terduga: {other}"),
    }
}

/// 登录表单；登录成功后会话变化，由路由器跳转到记住的目标页
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            set_error_msg.set(Some("Username dan password wajib diisi.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        spawn_local(async move {
            if let Err(e) = api.login(credentials).await {
                log::warn!("[Login] {e}");
                set_error_msg.try_set(Some(login_error(&e)));
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Login"</h1>
                    <p class="text-base-content/70">"Masuk untuk melanjutkan belanja"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                disabled=move || is_submitting.get()
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                disabled=move || is_submitting.get()
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Loading..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_generic_text() {
        let err = ApiError::Status {
            status: 401,
            message: "Akun dinonaktifkan.".into(),
        };
        assert_eq!(login_error(&err), "Akun dinonaktifkan.");

        let err = ApiError::Status {
            status: 401,
            message: String::new(),
        };
        assert_eq!(login_error(&err), "Username atau password salah.");
        assert!(login_error(&ApiError::Transport("refused".into())).starts_with("Tidak dapat"));
    }
}
