use contracts::domain::common::OUTLETS;
use contracts::shared::validation::{validate_full_name, validate_username};
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::users::ui::list::UsersViewModel;

fn username_invalid(value: &str) -> bool {
    !value.is_empty() && validate_username(value.trim()).is_err()
}

fn full_name_invalid(value: &str) -> bool {
    !value.is_empty() && validate_full_name(value).is_err()
}

/// "Add user" form; the role's default password is announced on success.
#[component]
#[allow(non_snake_case)]
pub fn CreateUserForm(vm: UsersViewModel) -> impl IntoView {
    let default_password = move || {
        vm.form
            .with(|f| Role::from_code(&f.role).map(|r| r.default_password()))
    };

    view! {
        <form
            class="entry-form"
            id="user-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <h2 class="section-title">"Add User"</h2>
            <div class="entry-form__grid">
                <div class="form-group">
                    <label for="new-username">"Username"</label>
                    <input
                        type="text"
                        id="new-username"
                        placeholder="Letters, numbers and underscores"
                        class:invalid=move || vm.form.with(|f| username_invalid(&f.username))
                        prop:value=move || vm.form.get().username
                        on:input=move |ev| vm.form.update(|f| f.username = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="new-full-name">"Full Name"</label>
                    <input
                        type="text"
                        id="new-full-name"
                        class:invalid=move || vm.form.with(|f| full_name_invalid(&f.full_name))
                        prop:value=move || vm.form.get().full_name
                        on:input=move |ev| vm.form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="new-role">"Role"</label>
                    <select
                        id="new-role"
                        prop:value=move || vm.form.get().role
                        on:change=move |ev| vm.form.update(|f| f.role = event_target_value(&ev))
                    >
                        <option value="">"Select Role"</option>
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.code()>{r.code()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="new-outlet">"Outlet"</label>
                    <select
                        id="new-outlet"
                        prop:value=move || vm.form.get().outlet
                        on:change=move |ev| vm.form.update(|f| f.outlet = event_target_value(&ev))
                    >
                        <option value="">"Select Outlet"</option>
                        {OUTLETS
                            .iter()
                            .map(|o| view! { <option value=*o>{*o}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            {move || default_password().map(|pwd| view! {
                <p class="form-hint">{format!("Default password for this role: {}", pwd)}</p>
            })}
            <div class="entry-form__actions">
                <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                    {icon("plus")}
                    {move || if vm.saving.get() { "Saving..." } else { "Add User" }}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| vm.clear()>
                    "Clear"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_flags() {
        assert!(!username_invalid(""));
        assert!(username_invalid("anita rao"));
        assert!(!username_invalid("anita_rao"));
        assert!(full_name_invalid("A"));
        assert!(!full_name_invalid("Al"));
    }
}
