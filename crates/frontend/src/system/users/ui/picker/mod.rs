use contracts::system::users::User;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Keeps `current` only while the reloaded directory still lists it.
pub fn retain_selection(current: &str, reps: &[User]) -> String {
    if reps.iter().any(|rep| rep.username == current) {
        current.to_string()
    } else {
        String::new()
    }
}

/// Employee dropdown fed by the sales-rep directory in the app context.
#[component]
#[allow(non_snake_case)]
pub fn SalesRepSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// Label of the empty option
    placeholder: &'static str,
    #[prop(optional)] id: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    Effect::new(move |_| {
        let current = value.get_untracked();
        if current.is_empty() {
            ctx.sales_reps.track();
            return;
        }
        let kept = ctx.sales_reps.with(|reps| retain_selection(&current, reps));
        if kept != current {
            on_change.run(kept);
        }
    });

    view! {
        <select
            id=id
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            <For
                each=move || ctx.sales_reps.get()
                key=|rep| rep.username.clone()
                children=move |rep| {
                    view! { <option value=rep.username.clone()>{rep.picker_label()}</option> }
                }
            />
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn rep(username: &str) -> User {
        User {
            id: 1,
            username: username.into(),
            full_name: "Anita Rao".into(),
            role: Role::Sales,
            outlet: "SKY_BLUE_WOMEN".into(),
            is_active: Some(true),
        }
    }

    #[test]
    fn selection_survives_only_when_still_listed() {
        let reps = vec![rep("anita"), rep("kiran")];
        assert_eq!(retain_selection("kiran", &reps), "kiran");
        assert_eq!(retain_selection("ravi", &reps), "");
        assert_eq!(retain_selection("", &reps), "");
    }

    #[test]
    fn picker_label_shows_outlet() {
        assert_eq!(rep("anita").picker_label(), "Anita Rao (SKY_BLUE_WOMEN)");
    }
}
