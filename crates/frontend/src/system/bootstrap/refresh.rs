//! "Refresh all": every panel the role can see, reloaded at once.

use contracts::system::auth::Role;
use futures::future::{join_all, FutureExt, LocalBoxFuture};
use leptos::task::spawn_local;

use super::Panels;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::system::users::directory;

type Outcome = (&'static str, Result<(), ApiError>);

fn labelled<F>(label: &'static str, fut: F) -> LocalBoxFuture<'static, Outcome>
where
    F: std::future::Future<Output = Result<(), ApiError>> + 'static,
{
    fut.map(move |result| (label, result)).boxed_local()
}

/// Notice text for a finished refresh: `Ok` when every call succeeded.
pub fn summarize(outcomes: &[Outcome]) -> Result<String, String> {
    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|(_, result)| result.is_err())
        .map(|(label, _)| *label)
        .collect();
    if failed.is_empty() {
        Ok("All data refreshed successfully!".to_string())
    } else {
        Err(format!("Some data failed to refresh: {}", failed.join(", ")))
    }
}

pub fn refresh_all(ctx: AppGlobalContext, panels: Panels) {
    let Some(user) = ctx.current_user() else {
        return;
    };

    let mut calls = vec![
        labelled("dashboard", panels.dashboard.load()),
        labelled("sales", panels.sales.load()),
        labelled("sales reps", directory::reload_sales_reps(ctx)),
    ];
    if matches!(user.role, Role::Owner | Role::Manager) {
        calls.push(labelled("expenses", panels.expenses.load()));
    }
    if user.role == Role::Owner {
        calls.push(labelled("users", panels.users.load()));
    }

    log::info!("Refreshing {} data sources", calls.len());
    spawn_local(async move {
        let outcomes = join_all(calls).await;
        for (label, result) in &outcomes {
            if let Err(e) = result {
                log::warn!("Refresh of {} failed: {}", label, e);
                if e.is_unauthorized() {
                    ctx.handle_error("Session expired", e);
                    return;
                }
            }
        }
        match summarize(&outcomes) {
            Ok(message) => ctx.notices.success(message),
            Err(message) => ctx.notices.error(message),
        }
    });
}
