//! Auth gate: the login page until a session exists, then the main layout.

use leptos::prelude::*;

use crate::layout::MainLayout;
use crate::system::auth::context::use_app_context;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
    }
}
