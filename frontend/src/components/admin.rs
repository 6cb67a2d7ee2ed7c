//! 管理后台页面
//!
//! 在 `AdminLayout` 内渲染；进入前已由路由守卫校验管理员权限。
//! 每个资源页面由三部分组成：`TableState`（列表）、`Editor`（新建 / 编辑表单）
//! 以及删除前的确认框。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::AdminSection;
use storefront_shared::protocol::{
    ApiRequest, CreateInvoiceRequest, CreateItemRequest, CreateRoleRequest, CreateUserRequest,
    DeleteInvoiceRequest, DeleteItemRequest, DeleteRoleRequest, DeleteUserRequest,
    ListInvoicesRequest, ListItemsRequest, ListRolesRequest, ListUsersRequest,
    UpdateInvoiceRequest, UpdateItemRequest, UpdateRoleRequest, UpdateUserRequest,
};
use storefront_shared::{
    Invoice, InvoiceForm, Item, ItemForm, ListResponse, Role, RoleForm, UserForm, UserProfile,
};

use crate::api::rupiah;
use crate::auth::{AuthContext, use_auth};
use crate::components::toast::{Notice, Toast};

const PAGE_SIZE: u32 = 50;

const USER_STATUSES: &[(&str, &str)] = &[("active", "Aktif"), ("inactive", "Nonaktif")];
const ITEM_STATUSES: &[(&str, &str)] = &[("active", "Aktif"), ("inactive", "Nonaktif")];
const INVOICE_STATUSES: &[(&str, &str)] = &[
    ("pending", "Menunggu"),
    ("paid", "Lunas"),
    ("overdue", "Jatuh tempo"),
];
const ITEM_CATEGORIES: &[(&str, &str)] = &[
    ("", "Pilih kategori"),
    ("Electronics", "Electronics"),
    ("Furniture", "Furniture"),
    ("Clothing", "Clothing"),
    ("Books", "Books"),
    ("Sports", "Sports"),
];
const PERMISSIONS: [&str; 17] = [
    "users_read",
    "users_create",
    "users_update",
    "users_delete",
    "items_read",
    "items_create",
    "items_update",
    "items_delete",
    "invoices_read",
    "invoices_create",
    "invoices_update",
    "invoices_delete",
    "roles_read",
    "roles_create",
    "roles_update",
    "roles_delete",
    "admin_access",
];

// =========================================================
// Rows & forms
// =========================================================

/// 带服务端 ID 的表格行
trait Row: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

impl Row for UserProfile {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Row for Item {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Row for Invoice {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Row for Role {
    fn id(&self) -> i64 {
        self.id
    }
}

/// 表单载荷及其客户端校验
trait AdminForm: Clone + Default + Send + Sync + 'static {
    /// 阻止保存的第一个问题
    ///
    /// # 返回
    /// - `Some(&str)` 需要展示给用户的错误提示
    /// - `None` 表单可以提交
    fn problem(&self) -> Option<&'static str>;
}

impl AdminForm for UserForm {
    fn problem(&self) -> Option<&'static str> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            Some("Username dan email wajib diisi.")
        } else if !self.email.contains('@') {
            Some("Format email tidak valid.")
        } else {
            None
        }
    }
}

impl AdminForm for ItemForm {
    fn problem(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Nama produk wajib diisi.")
        } else if !(self.price > 0.0) {
            Some("Harga harus lebih dari nol.")
        } else if self.stock < 0 {
            Some("Stok tidak boleh negatif.")
        } else {
            None
        }
    }
}

impl AdminForm for InvoiceForm {
    fn problem(&self) -> Option<&'static str> {
        if self.customer_name.trim().is_empty() || self.customer_email.trim().is_empty() {
            Some("Nama dan email pelanggan wajib diisi.")
        } else if !(self.amount > 0.0) {
            Some("Jumlah harus lebih dari nol.")
        } else {
            None
        }
    }
}

impl AdminForm for RoleForm {
    fn problem(&self) -> Option<&'static str> {
        self.name
            .trim()
            .is_empty()
            .then_some("Nama role wajib diisi.")
    }
}

/// `users_read` -> `Users Read`
fn permission_label(permission: &str) -> String {
    permission
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn toggle_permission(permissions: &mut Vec<String>, permission: &str) {
    if let Some(pos) = permissions.iter().position(|p| p == permission) {
        permissions.remove(pos);
    } else {
        permissions.push(permission.to_string());
    }
}

/// 浏览器确认框；无法弹出时视为取消
fn confirmed(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// =========================================================
// Table state
// =========================================================

/// 一个管理表格的数据行与加载状态
struct TableState<T: Send + Sync + 'static> {
    auth: AuthContext,
    rows: RwSignal<Vec<T>>,
    total: RwSignal<u64>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for TableState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableState<T> {}

impl<T: Row> TableState<T> {
    fn new() -> Self {
        Self {
            auth: use_auth(),
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// 页面已卸载时信号已被释放
    fn alive(self) -> bool {
        self.loading.try_get_untracked().is_some()
    }

    fn load<R>(self, request: R)
    where
        R: ApiRequest<Response = ListResponse<T>> + 'static,
    {
        if !self.alive() {
            return;
        }
        let api = self.auth.api();
        self.loading.set(true);
        spawn_local(async move {
            match api.call(&request).await {
                Ok(resp) => {
                    self.total.try_set(resp.total());
                    self.rows.try_set(resp.data);
                    self.error.try_set(None);
                }
                Err(e) => {
                    self.error.try_set(Some(format!("Gagal memuat data: {e}")));
                }
            }
            self.loading.try_set(false);
        });
    }

    /// 确认后删除一行
    ///
    /// # 参数
    /// - `notice`: 结果提示
    /// - `request`: 删除请求
    /// - `id`: 成功后从表格移除的行
    fn remove<D>(self, notice: RwSignal<Option<Notice>>, request: D, id: i64)
    where
        D: ApiRequest + 'static,
    {
        if !confirmed("Yakin ingin menghapus data ini?") {
            return;
        }
        let api = self.auth.api();
        spawn_local(async move {
            match api.call(&request).await {
                Ok(_) => {
                    self.rows.try_update(|rows| rows.retain(|row| row.id() != id));
                    self.total.try_update(|total| *total = total.saturating_sub(1));
                    notice.try_set(Some(Notice::success("Data dihapus.")));
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Gagal menghapus data: {e}"))));
                }
            }
        });
    }

    fn status_view(self) -> impl IntoView {
        view! {
            <Show when=move || self.loading.get()>
                <span class="loading loading-spinner loading-md"></span>
            </Show>
            <Show when=move || self.error.get().is_some()>
                <div role="alert" class="alert alert-error">{move || self.error.get().unwrap_or_default()}</div>
            </Show>
        }
    }
}

// =========================================================
// Editor
// =========================================================

/// 新建 / 编辑表单状态；`editing` 为 `Some(id)` 时表示正在编辑该行
struct Editor<F: AdminForm> {
    form: RwSignal<F>,
    editing: RwSignal<Option<i64>>,
}

impl<F: AdminForm> Clone for Editor<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: AdminForm> Copy for Editor<F> {}

impl<F: AdminForm> Editor<F> {
    fn new() -> Self {
        Self {
            form: RwSignal::new(F::default()),
            editing: RwSignal::new(None),
        }
    }

    fn edit(self, id: i64, form: F) {
        self.editing.set(Some(id));
        self.form.set(form);
    }

    fn reset(self) {
        self.editing.set(None);
        self.form.set(F::default());
    }

    /// 校验并提交表单：编辑中发送 `update`，否则发送 `create`
    ///
    /// # 参数
    /// - `create` / `update`: 由表单构造对应请求
    /// - `saved`: 保存成功且页面仍在时调用（通常为重新加载表格）
    fn save<C, U>(
        self,
        auth: AuthContext,
        notice: RwSignal<Option<Notice>>,
        create: impl FnOnce(F) -> C + 'static,
        update: impl FnOnce(i64, F) -> U + 'static,
        saved: impl Fn() + 'static,
    ) where
        C: ApiRequest + 'static,
        U: ApiRequest + 'static,
    {
        let form = self.form.get_untracked();
        if let Some(problem) = form.problem() {
            notice.set(Some(Notice::error(problem)));
            return;
        }
        let editing = self.editing.get_untracked();
        let api = auth.api();
        spawn_local(async move {
            let result = match editing {
                Some(id) => api.call(&update(id, form)).await.map(|_| ()),
                None => api.call(&create(form)).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    let text = if editing.is_some() {
                        "Perubahan disimpan."
                    } else {
                        "Data ditambahkan."
                    };
                    notice.try_set(Some(Notice::success(text)));
                    if self.editing.try_set(None).is_none() {
                        self.form.try_set(F::default());
                        saved();
                    }
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Gagal menyimpan data: {e}"))));
                }
            }
        });
    }

    /// 表单外框：标题、字段与保存 / 取消按钮
    fn frame(
        self,
        noun: &'static str,
        fields: AnyView,
        on_submit: impl FnMut(SubmitEvent) + 'static,
    ) -> impl IntoView {
        view! {
            <form class="card bg-base-100 shadow mb-6" on:submit=on_submit>
                <div class="card-body">
                    <h2 class="card-title">
                        {move || match self.editing.get() {
                            Some(id) => format!("Edit {noun} #{id}"),
                            None => format!("Tambah {noun}"),
                        }}
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-2">{fields}</div>
                    <div class="card-actions justify-end">
                        <Show when=move || self.editing.get().is_some()>
                            <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| self.reset()>
                                "Batal"
                            </button>
                        </Show>
                        <button class="btn btn-primary btn-sm">
                            {move || if self.editing.get().is_some() { "Perbarui" } else { "Simpan" }}
                        </button>
                    </div>
                </div>
            </form>
        }
    }
}

fn text_input<F: AdminForm>(
    form: RwSignal<F>,
    label: &'static str,
    kind: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <input
            type=kind
            class="input input-bordered input-sm"
            placeholder=label
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

/// 数字输入在失焦时才写回，避免输入中途（如 `12.`）被格式化
fn number_input<F: AdminForm>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <input
            type="number"
            min="0"
            class="input input-bordered input-sm"
            placeholder=label
            prop:value=move || form.with(get)
            on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

fn select_input<F: AdminForm>(
    form: RwSignal<F>,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView {
    view! {
        <select
            class="select select-bordered select-sm"
            aria-label=label
            on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        >
            {options
                .iter()
                .map(|&(value, text)| {
                    view! {
                        <option value=value prop:selected=move || form.with(|f| get(f) == value)>
                            {text}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

fn row_actions(on_edit: impl Fn() + 'static, on_delete: impl Fn() + 'static) -> impl IntoView {
    view! {
        <td class="flex gap-1">
            <button class="btn btn-ghost btn-xs" on:click=move |_| on_edit()>"Edit"</button>
            <button class="btn btn-ghost btn-xs text-error" on:click=move |_| on_delete()>"Hapus"</button>
        </td>
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

// =========================================================
// Pages
// =========================================================

#[component]
pub fn AdminPage(section: AdminSection) -> impl IntoView {
    match section {
        AdminSection::Dashboard => view! { <AdminDashboard /> }.into_any(),
        AdminSection::Users => view! { <AdminUsers /> }.into_any(),
        AdminSection::Items => view! { <AdminItems /> }.into_any(),
        AdminSection::Invoices => view! { <AdminInvoices /> }.into_any(),
        AdminSection::Roles => view! { <AdminRoles /> }.into_any(),
    }
}

#[component]
fn StatCard(title: &'static str, value: RwSignal<u64>, class: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {class}")>{move || value.get()}</div>
        </div>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let users = TableState::<UserProfile>::new();
    let items = TableState::<Item>::new();
    let invoices = TableState::<Invoice>::new();

    // only the totals are shown, one row per request is enough
    users.load(ListUsersRequest { limit: 1, offset: 0 });
    items.load(ListItemsRequest::page(1, 1));
    invoices.load(ListInvoicesRequest { limit: 1, offset: 0 });

    view! {
        <p class="text-lg mb-6">
            {move || format!(
                "Selamat datang di panel admin, {}!",
                auth.user().map(|u| u.display_name()).unwrap_or_default()
            )}
        </p>
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard title="Total Pengguna" value=users.total class="text-primary" />
            <StatCard title="Produk" value=items.total class="text-success" />
            <StatCard title="Invoice" value=invoices.total class="text-warning" />
        </div>
    }
}

#[component]
fn AdminUsers() -> impl IntoView {
    let auth = use_auth();
    let table = TableState::<UserProfile>::new();
    let roles = TableState::<Role>::new();
    let editor = Editor::<UserForm>::new();
    let notice = RwSignal::new(Option::<Notice>::None);
    let form = editor.form;

    let reload = move || table.load(ListUsersRequest { limit: PAGE_SIZE, offset: 0 });
    reload();
    roles.load(ListRolesRequest);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        editor.save(
            auth,
            notice,
            CreateUserRequest,
            |id, form| UpdateUserRequest { id, form },
            reload,
        );
    };

    let fields = view! {
        {text_input(form, "Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
        {text_input(form, "Nama", "text", |f| f.name.clone(), |f, v| f.name = v)}
        {text_input(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
        {text_input(form, "Telepon", "tel", |f| f.phone.clone().unwrap_or_default(), |f, v| f.phone = non_empty(v))}
        {text_input(form, "Alamat", "text", |f| f.address.clone().unwrap_or_default(), |f, v| f.address = non_empty(v))}
        {text_input(form, "Password", "password", |f| f.password.clone().unwrap_or_default(), |f, v| f.password = non_empty(v))}
        <select
            class="select select-bordered select-sm"
            aria-label="Role"
            on:change=move |ev| form.update(|f| f.role_id = event_target_value(&ev).parse().ok())
        >
            <option value="" prop:selected=move || form.with(|f| f.role_id.is_none())>"Pilih role"</option>
            <For each=move || roles.rows.get() key=|r| r.id let:role>
                {
                    let id = role.id;
                    view! {
                        <option value=id.to_string() prop:selected=move || form.with(|f| f.role_id == Some(id))>
                            {role.name.clone()}
                        </option>
                    }
                }
            </For>
        </select>
        {select_input(form, "Status", USER_STATUSES, |f| f.status.clone().unwrap_or_default(), |f, v| f.status = non_empty(v))}
    }
    .into_any();

    view! {
        <Toast notice=notice />
        {editor.frame("Pengguna", fields, submit)}
        {table.status_view()}
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"ID"</th><th>"Nama"</th><th>"Email"</th><th>"Role"</th><th>"Status"</th><th></th></tr>
                </thead>
                <tbody>
                    <For each=move || table.rows.get() key=|u| u.id let:user>
                        {
                            let id = user.id;
                            let form = UserForm::from(&user);
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{user.display_name()}</td>
                                    <td>{user.email.clone().unwrap_or_default()}</td>
                                    <td>{user.role.clone().unwrap_or_default()}</td>
                                    <td>{user.status.clone().unwrap_or_default()}</td>
                                    {row_actions(
                                        move || editor.edit(id, form.clone()),
                                        move || table.remove(notice, DeleteUserRequest { id }, id),
                                    )}
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AdminItems() -> impl IntoView {
    let auth = use_auth();
    let table = TableState::<Item>::new();
    let editor = Editor::<ItemForm>::new();
    let notice = RwSignal::new(Option::<Notice>::None);
    let form = editor.form;

    let reload = move || table.load(ListItemsRequest::page(1, PAGE_SIZE));
    reload();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        editor.save(
            auth,
            notice,
            CreateItemRequest,
            |id, form| UpdateItemRequest { id, form },
            reload,
        );
    };

    let fields = view! {
        {text_input(form, "Nama produk", "text", |f| f.name.clone(), |f, v| f.name = v)}
        {text_input(form, "Deskripsi", "text", |f| f.description.clone().unwrap_or_default(), |f, v| f.description = non_empty(v))}
        {number_input(form, "Harga", |f| f.price.to_string(), |f, v| f.price = v.parse().unwrap_or_default())}
        {select_input(form, "Kategori", ITEM_CATEGORIES, |f| f.category.clone().unwrap_or_default(), |f, v| f.category = non_empty(v))}
        {number_input(form, "Stok", |f| f.stock.to_string(), |f, v| f.stock = v.parse().unwrap_or_default())}
        {select_input(form, "Status", ITEM_STATUSES, |f| f.status.clone(), |f, v| f.status = v)}
    }
    .into_any();

    view! {
        <Toast notice=notice />
        {editor.frame("Produk", fields, submit)}
        {table.status_view()}
        <p class="mb-2 text-sm text-base-content/60">{move || format!("{} produk", table.total.get())}</p>
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"ID"</th><th>"Nama"</th><th>"Kategori"</th><th>"Harga"</th><th>"Stok"</th><th>"Status"</th><th></th></tr>
                </thead>
                <tbody>
                    <For each=move || table.rows.get() key=|i| i.id let:item>
                        {
                            let id = item.id;
                            let form = ItemForm::from(&item);
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{item.name.clone()}</td>
                                    <td>{item.category.clone().unwrap_or_default()}</td>
                                    <td>{rupiah(item.price)}</td>
                                    <td>{item.stock.map(|s| s.to_string()).unwrap_or_default()}</td>
                                    <td>{item.status.clone().unwrap_or_default()}</td>
                                    {row_actions(
                                        move || editor.edit(id, form.clone()),
                                        move || table.remove(notice, DeleteItemRequest { id }, id),
                                    )}
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AdminInvoices() -> impl IntoView {
    let auth = use_auth();
    let table = TableState::<Invoice>::new();
    let editor = Editor::<InvoiceForm>::new();
    let notice = RwSignal::new(Option::<Notice>::None);
    let form = editor.form;

    let reload = move || {
        table.load(ListInvoicesRequest {
            limit: PAGE_SIZE,
            offset: 0,
        })
    };
    reload();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        editor.save(
            auth,
            notice,
            CreateInvoiceRequest,
            |id, form| UpdateInvoiceRequest { id, form },
            reload,
        );
    };

    let fields = view! {
        {text_input(form, "Nama pelanggan", "text", |f| f.customer_name.clone(), |f, v| f.customer_name = v)}
        {text_input(form, "Email pelanggan", "email", |f| f.customer_email.clone(), |f, v| f.customer_email = v)}
        {number_input(form, "Jumlah", |f| f.amount.to_string(), |f, v| f.amount = v.parse().unwrap_or_default())}
        {text_input(form, "Jatuh tempo", "date", |f| f.due_date.clone().unwrap_or_default(), |f, v| f.due_date = non_empty(v))}
        {text_input(form, "Keterangan", "text", |f| f.description.clone().unwrap_or_default(), |f, v| f.description = non_empty(v))}
        {select_input(form, "Status", INVOICE_STATUSES, |f| f.status.clone(), |f, v| f.status = v)}
    }
    .into_any();

    view! {
        <Toast notice=notice />
        {editor.frame("Invoice", fields, submit)}
        {table.status_view()}
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"No."</th><th>"Pelanggan"</th><th>"Jumlah"</th><th>"Jatuh Tempo"</th><th>"Status"</th><th></th></tr>
                </thead>
                <tbody>
                    <For each=move || table.rows.get() key=|i| i.id let:invoice>
                        {
                            let id = invoice.id;
                            let form = InvoiceForm::from(&invoice);
                            view! {
                                <tr>
                                    <td class="font-mono">{format!("INV-{id:04}")}</td>
                                    <td>
                                        <div>{invoice.customer_name.clone().unwrap_or_default()}</div>
                                        <div class="text-xs opacity-60">{invoice.customer_email.clone().unwrap_or_default()}</div>
                                    </td>
                                    <td>{rupiah(invoice.amount)}</td>
                                    <td>{invoice.due_date.clone().unwrap_or_default()}</td>
                                    <td>{invoice.status.clone().unwrap_or_default()}</td>
                                    {row_actions(
                                        move || editor.edit(id, form.clone()),
                                        move || table.remove(notice, DeleteInvoiceRequest { id }, id),
                                    )}
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AdminRoles() -> impl IntoView {
    let auth = use_auth();
    let table = TableState::<Role>::new();
    let editor = Editor::<RoleForm>::new();
    let notice = RwSignal::new(Option::<Notice>::None);
    let form = editor.form;

    let reload = move || table.load(ListRolesRequest);
    reload();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        editor.save(
            auth,
            notice,
            CreateRoleRequest,
            |id, form| UpdateRoleRequest { id, form },
            reload,
        );
    };

    let fields = view! {
        {text_input(form, "Nama role", "text", |f| f.name.clone(), |f, v| f.name = v)}
        {text_input(form, "Deskripsi", "text", |f| f.description.clone().unwrap_or_default(), |f, v| f.description = non_empty(v))}
        <div class="md:col-span-3 grid grid-cols-2 md:grid-cols-4 gap-1">
            {PERMISSIONS
                .into_iter()
                .map(|permission| {
                    view! {
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                prop:checked=move || form.with(|f| f.permissions.iter().any(|p| p == permission))
                                on:change=move |_| form.update(|f| toggle_permission(&mut f.permissions, permission))
                            />
                            <span class="label-text">{permission_label(permission)}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any();

    view! {
        <Toast notice=notice />
        {editor.frame("Role", fields, submit)}
        {table.status_view()}
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            <For each=move || table.rows.get() key=|r| r.id let:role>
                {
                    let id = role.id;
                    let form = RoleForm::from(&role);
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">
                                    {role.name.clone()}
                                    {role.level.map(|l| view! { <span class="badge badge-outline">{format!("Level {l}")}</span> })}
                                </h2>
                                <p>{role.description.clone().unwrap_or_default()}</p>
                                <p class="text-sm opacity-60">
                                    {role.user_count.map(|n| format!("{n} pengguna")).unwrap_or_default()}
                                </p>
                                <div class="flex flex-wrap gap-1">
                                    {role
                                        .permissions
                                        .iter()
                                        .map(|p| view! { <span class="badge badge-ghost badge-sm">{permission_label(p)}</span> })
                                        .collect_view()}
                                </div>
                                <div class="card-actions justify-end">
                                    <button class="btn btn-ghost btn-xs" on:click=move |_| editor.edit(id, form.clone())>
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-ghost btn-xs text-error"
                                        on:click=move |_| table.remove(notice, DeleteRoleRequest { id }, id)
                                    >
                                        "Hapus"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_form_needs_username_and_valid_email() {
        let mut form = UserForm {
            username: "rina".into(),
            email: "rina".into(),
            ..UserForm::default()
        };
        assert_eq!(form.problem(), Some("Format email tidak valid."));
        form.email = "rina@toko.id".into();
        assert_eq!(form.problem(), None);
        form.username = " ".into();
        assert!(form.problem().is_some());
    }

    #[test]
    fn item_form_rejects_missing_price_and_negative_stock() {
        let mut form = ItemForm {
            name: "Meja".into(),
            ..ItemForm::default()
        };
        assert_eq!(form.problem(), Some("Harga harus lebih dari nol."));
        form.price = f64::NAN;
        assert!(form.problem().is_some());
        form.price = 250_000.0;
        form.stock = -1;
        assert_eq!(form.problem(), Some("Stok tidak boleh negatif."));
        form.stock = 5;
        assert_eq!(form.problem(), None);
    }

    #[test]
    fn invoice_and_role_forms_need_names() {
        let invoice = InvoiceForm {
            customer_name: "PT Maju".into(),
            customer_email: "finance@maju.id".into(),
            amount: 1_500_000.0,
            ..InvoiceForm::default()
        };
        assert_eq!(invoice.problem(), None);
        assert!(InvoiceForm::default().problem().is_some());
        assert!(RoleForm::default().problem().is_some());
    }

    #[test]
    fn permissions_toggle_and_read_nicely() {
        let mut granted = vec!["users_read".to_string()];
        toggle_permission(&mut granted, "items_create");
        toggle_permission(&mut granted, "users_read");
        assert_eq!(granted, vec!["items_create".to_string()]);

        assert_eq!(permission_label("invoices_delete"), "Invoices Delete");
        assert_eq!(permission_label("admin_access"), "Admin Access");
    }
}
