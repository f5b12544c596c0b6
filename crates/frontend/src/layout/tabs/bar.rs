use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_app_context;

/// One button per tab the active policy shows.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let tabs = move || ctx.policy.with(|p| p.as_ref().map(|p| p.tabs.clone()).unwrap_or_default());

    view! {
        <nav class="tab-bar no-print">
            <For
                each=tabs
                key=|tab| tab.key()
                children=move |tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ctx.active_tab.get() == tab
                            id=format!("tab-{}", tab.key())
                            on:click=move |_| {
                                ctx.navigate(tab);
                            }
                        >
                            {icon(tab.icon())}
                            <span>{tab.label()}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
