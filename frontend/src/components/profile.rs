use leptos::prelude::*;
use storefront_shared::UserProfile;

use crate::auth::use_auth;

fn rows(user: &UserProfile) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Username", user.username.clone()),
        ("Full Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Phone", user.phone.clone()),
        ("Address", user.address.clone()),
        ("Role", user.role.clone()),
        ("Status", user.status.clone()),
        ("Google ID", user.google_id.clone()),
        ("Member Since", user.created_at.clone()),
        ("Account Number", user.account_number.clone()),
        ("Bank", user.bank.clone()),
        ("Work Area", user.work_area.clone()),
    ];
    rows.retain(|(_, value)| value.as_deref().is_some_and(|v| !v.trim().is_empty()));
    rows.into_iter()
        .map(|(label, value)| (label, value.unwrap_or_default()))
        .collect()
}

/// Read-only view of the signed-in profile.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <div class="card-body">
                <h1 class="card-title text-2xl">
                    {move || auth.user().map(|u| u.display_name()).unwrap_or_default()}
                    <Show when=move || auth.is_admin()>
                        <span class="badge badge-secondary">"Admin"</span>
                    </Show>
                </h1>
                <dl class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-4">
                    {move || {
                        auth.user()
                            .map(|u| rows(&u))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div>
                                    <dt class="text-sm text-base-content/60">{label}</dt>
                                    <dd class="font-medium">{value}</dd>
                                </div>
                            })
                            .collect_view()
                    }}
                </dl>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_filled_fields_are_listed() {
        let user = UserProfile {
            id: 1,
            username: Some("ani".into()),
            email: Some("  ".into()),
            work_area: Some("Bandung".into()),
            ..UserProfile::default()
        };
        let labels: Vec<_> = rows(&user).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Username", "Work Area"]);
    }
}
