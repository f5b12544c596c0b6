//! Login, restore and logout flows on top of the app context.

use leptos::prelude::*;

use super::{api, storage};
use crate::layout::global_context::{AppGlobalContext, Session};

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password.";

/// Trimmed username, or the message shown when a field is blank.
pub fn check_credentials(username: &str, password: &str) -> Result<String, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(username.to_string())
}

/// Signs in and opens the session. The error is the text shown on the form.
pub async fn sign_in(ctx: AppGlobalContext, username: &str, password: &str) -> Result<(), String> {
    let username = check_credentials(username, password).map_err(str::to_string)?;
    let response = api::login(&ctx.config().api_base, username, password.to_string())
        .await
        .map_err(|e| {
            log::warn!("Login failed: {}", e);
            e.to_string()
        })?;

    storage::save_session(&response.token, &response.user);
    let greeting = format!("Welcome back, {}!", response.user.full_name);
    ctx.start_session(Session {
        token: response.token,
        user: response.user,
    });
    ctx.notices.success(greeting);
    Ok(())
}

/// Reopens the session kept in local storage. Returns whether one was found.
pub fn restore_session(ctx: AppGlobalContext) -> bool {
    match storage::load_session() {
        Some((token, user)) => {
            ctx.start_session(Session { token, user });
            ctx.notices
                .success("Welcome back! Session restored successfully.");
            true
        }
        None => false,
    }
}

pub fn sign_out(ctx: AppGlobalContext) {
    ctx.end_session();
    ctx.notices.info("Logged out successfully.");
}

/// App context from the component tree.
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_trimmed_and_required() {
        assert_eq!(check_credentials("  owner ", "pw"), Ok("owner".to_string()));
        assert_eq!(check_credentials("   ", "pw"), Err(MISSING_CREDENTIALS));
        assert_eq!(check_credentials("owner", ""), Err(MISSING_CREDENTIALS));
    }
}
