mod state;

use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::system::users::ui::details::CreateUserForm;
pub use state::UsersViewModel;

impl Searchable for User {
    fn search_text(&self) -> String {
        [
            self.username.as_str(),
            self.full_name.as_str(),
            self.role.code(),
            self.outlet.as_str(),
        ]
        .join(" ")
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UsersPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = use_context::<UsersViewModel>().expect("UsersViewModel not found in context");
    let search = RwSignal::new(String::new());
    let visible = move || {
        let query = search.get();
        vm.rows.with(|rows| filter_list(rows, &query))
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Users"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reload()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <CreateUserForm vm=vm />

            <SearchInput
                on_change=move |query: String| search.set(query)
                debounce_ms=ctx.config().search_debounce_ms
                placeholder="Search users..."
            />

            <Show when=move || vm.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Table attr:id="users-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Username"</TableHeaderCell>
                        <TableHeaderCell>"Full Name"</TableHeaderCell>
                        <TableHeaderCell>"Role"</TableHeaderCell>
                        <TableHeaderCell>"Outlet"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=visible
                        key=|user| user.id
                        children=move |user| {
                            let actions = if user.is_protected() {
                                view! {
                                    <span class="user-protected">{icon("lock")}"Protected"</span>
                                }
                                .into_any()
                            } else {
                                let password = user.role.default_password();
                                let target = user.clone();
                                view! {
                                    <button
                                        class="button button--danger button--small"
                                        on:click=move |_| vm.remove(target.clone())
                                    >
                                        {icon("trash")}
                                        "Remove"
                                    </button>
                                    <small class="user-default-password">
                                        {format!("Default pwd: {}", password)}
                                    </small>
                                }
                                .into_any()
                            };
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{user.username.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{user.full_name.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                                {user.role.code()}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{user.outlet.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{actions}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
