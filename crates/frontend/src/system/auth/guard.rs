use contracts::shared::role_policy::AppTab;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Renders `children` only while the active policy allows `tab`.
#[component]
pub fn RequireTab(tab: AppTab, children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <Show
            when=move || ctx.policy.with(|p| p.as_ref().is_some_and(|p| p.allows(tab)))
            fallback=|| view! { <div class="access-denied">"Access denied for your role."</div> }
        >
            {children()}
        </Show>
    }
}
