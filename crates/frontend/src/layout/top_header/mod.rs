//! Top bar: brand, outlet selector, signed-in user and session actions.

use contracts::domain::common::OutletSelection;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_app_context};
use crate::system::bootstrap::refresh::refresh_all;
use crate::system::bootstrap::Panels;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let panels = use_context::<Panels>().expect("Panels not found in context");

    let show_outlet_selector =
        move || ctx.policy.with(|p| p.as_ref().is_some_and(|p| p.outlet_selector));
    let user = move || ctx.session.with(|s| s.as_ref().map(|s| s.user.clone()));

    view! {
        <div class="top-header no-print">
            <div class="top-header__brand">
                <span class="top-header__title">"Dress Showroom"</span>
            </div>

            <div class="top-header__actions">
                <Show when=show_outlet_selector>
                    <select
                        class="top-header__outlet"
                        id="outlet-selector"
                        prop:value=move || ctx.outlet.get().as_str().to_string()
                        on:change=move |ev| {
                            ctx.select_outlet(&event_target_value(&ev));
                        }
                    >
                        {OutletSelection::choices()
                            .into_iter()
                            .map(|choice| view! { <option value=choice>{choice}</option> })
                            .collect_view()}
                    </select>
                </Show>

                <div class="top-header__user">
                    {icon("user")}
                    {move || user().map(|u| view! {
                        <span class="top-header__user-name">{u.full_name}</span>
                        <span class="top-header__user-meta">{format!("{} · {}", u.role, u.outlet)}</span>
                    })}
                </div>

                <button
                    class="top-header__icon-btn"
                    title="Refresh all (F5)"
                    on:click=move |_| refresh_all(ctx, panels)
                >
                    {icon("refresh")}
                </button>
                <button class="top-header__icon-btn" title="Logout" on:click=move |_| sign_out(ctx)>
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
