use leptos::prelude::*;
use std::rc::Rc;

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::today;
use crate::system::auth::context::restore_session;
use crate::system::bootstrap::{self, Panels};
use crate::system::policy::guards::GuardTargets;
use crate::system::policy::PolicyHost;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    log::info!("API base: {}", config.api_base);

    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);

    let panels = Panels::new(ctx);
    provide_context(panels);
    provide_context(panels.dashboard);
    provide_context(panels.sales);
    provide_context(panels.expenses);
    provide_context(panels.salary);
    provide_context(panels.users);

    let notices = ctx.notices;
    let policy_host = PolicyHost::new(GuardTargets {
        dashboard_range: panels.dashboard.range_guards(),
        sale_datetime: panels.sales.datetime_guards(),
        warn: Rc::new(move |message: String| notices.warning(message)),
        today,
    });
    policy_host.follow(ctx);

    // panels start from scratch after a logout
    Effect::new(move |was_signed_in: Option<bool>| {
        let signed_in = ctx.session.with(|s| s.is_some());
        if was_signed_in == Some(true) && !signed_in {
            panels.reset();
        }
        signed_in
    });

    restore_session(ctx);
    bootstrap::install(ctx, panels);

    view! { <AppShell /> }
}
