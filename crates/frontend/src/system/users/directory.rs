//! Sales-rep directory behind every employee dropdown.

use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::system::users::api;

/// Reloads the reps of the effective outlet into the app context.
pub async fn reload_sales_reps(ctx: AppGlobalContext) -> Result<(), ApiError> {
    let Some(outlet) = ctx.effective_outlet() else {
        return Ok(());
    };
    let reps = api::fetch_sales_reps(&ctx.api(), &outlet).await?;
    log::debug!("Loaded {} sales reps for {}", reps.len(), outlet);
    ctx.set_sales_reps(reps);
    Ok(())
}

pub fn spawn_reload(ctx: AppGlobalContext) {
    spawn_local(async move {
        if let Err(e) = reload_sales_reps(ctx).await {
            ctx.handle_error("Failed to load sales reps", &e);
        }
    });
}
