//! Background health probe and window-level event handlers.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::probe;

pub const CONNECTION_ISSUES: &str = "Server connection issues detected";

/// Probes the server every `health_interval_ms` while a session is open.
pub fn install_health_probe(ctx: AppGlobalContext) {
    let timer = StoredValue::new_local(None::<Interval>);

    Effect::new(move |_| {
        let authenticated = ctx.is_authenticated();
        let running = timer.with_value(|t| t.is_some());
        if authenticated && !running {
            let config = ctx.config();
            let url = config.health_url();
            log::debug!("Health probe every {} ms", config.health_interval_ms);
            let interval = Interval::new(config.health_interval_ms, move || {
                let url = url.clone();
                spawn_local(async move {
                    if let Err(e) = probe(&url).await {
                        log::warn!("Health check failed: {}", e);
                        ctx.notices.warning(CONNECTION_ISSUES);
                    }
                });
            });
            timer.set_value(Some(interval));
        } else if !authenticated && running {
            log::debug!("Health probe stopped");
            // dropping the interval cancels it
            timer.set_value(None);
        }
    });
}

/// Uncaught errors and connectivity changes become notices; the session stays.
pub fn install_window_handlers(ctx: AppGlobalContext) {
    let _ = window_event_listener_untyped("error", move |ev: web_sys::Event| {
        log::error!("Uncaught error: {:?}", ev);
        ctx.notices.error("An unexpected error occurred");
    });
    let _ = window_event_listener_untyped("unhandledrejection", move |ev: web_sys::Event| {
        log::error!("Unhandled promise rejection: {:?}", ev);
        ctx.notices.error("An unexpected error occurred");
    });
    let _ = window_event_listener_untyped("online", move |_| {
        log::info!("Connection restored");
        ctx.notices.success("Connection restored");
    });
    let _ = window_event_listener_untyped("offline", move |_| {
        log::warn!("Connection lost");
        ctx.notices.warning("You are offline. Some features may not work.");
    });
}
