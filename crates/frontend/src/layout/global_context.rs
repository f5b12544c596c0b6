use contracts::domain::common::OutletSelection;
use contracts::shared::role_policy::{AppTab, RolePolicy};
use contracts::system::auth::UserInfo;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::layout::notices::NoticeCenter;
use crate::layout::tabs::navigator::next_tab;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::AppConfig;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Submit,
    Clear,
}

/// A keyboard-issued command for the form of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRequest {
    pub tab: AppTab,
    pub command: FormCommand,
}

/// Application state shared by every view.
///
/// Views read the signals directly; all writes go through the methods below.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
    pub session: RwSignal<Option<Session>>,
    pub policy: RwSignal<Option<RolePolicy>>,
    pub outlet: RwSignal<OutletSelection>,
    pub active_tab: RwSignal<AppTab>,
    pub sales_reps: RwSignal<Vec<User>>,
    pub form_request: RwSignal<Option<FormRequest>>,
    pub notices: NoticeCenter,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        let notices = NoticeCenter::new(config.notice_lifetime_ms);
        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(None),
            policy: RwSignal::new(None),
            outlet: RwSignal::new(OutletSelection::default()),
            active_tab: RwSignal::new(AppTab::Dashboard),
            sales_reps: RwSignal::new(Vec::new()),
            form_request: RwSignal::new(None),
            notices,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Request context for the API layer: configured base plus the
    /// current session token.
    pub fn api(&self) -> ApiClient {
        let base = self.config.with_value(|c| c.api_base.clone());
        let token = self
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(base, token)
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.session.with_untracked(|s| s.is_some())
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Installs a session and the policy of its role, landing on the dashboard.
    pub fn start_session(&self, session: Session) {
        let policy = RolePolicy::for_role(session.user.role, &self.config.get_value().policy);
        log::info!(
            "Session started for {} ({})",
            session.user.username,
            session.user.role
        );
        self.outlet.set(OutletSelection::default());
        self.sales_reps.set(Vec::new());
        self.active_tab.set(policy.landing_tab());
        self.policy.set(Some(policy));
        self.session.set(Some(session));
    }

    /// Drops session, policy and outlet choice, and clears local storage.
    pub fn end_session(&self) {
        if let Some(user) = self.current_user() {
            log::info!("Session ended for {}", user.username);
        }
        storage::clear_session();
        self.session.set(None);
        self.policy.set(None);
        self.outlet.set(OutletSelection::default());
        self.sales_reps.set(Vec::new());
        self.form_request.set(None);
        self.active_tab.set(AppTab::Dashboard);
    }

    // ------------------------------------------------------------------
    // Outlet
    // ------------------------------------------------------------------

    /// Applies an outlet choice; ignored unless the policy shows the selector.
    pub fn select_outlet(&self, choice: &str) -> bool {
        let allowed = self
            .policy
            .with_untracked(|p| p.as_ref().is_some_and(|p| p.outlet_selector));
        if !allowed {
            return false;
        }
        let selection = OutletSelection::from_choice(choice);
        log::info!("Outlet changed to {}", selection.as_str());
        self.outlet.set(selection);
        true
    }

    /// `outlet` query parameter for list and stats endpoints.
    pub fn outlet_param(&self) -> Option<String> {
        let user = self.current_user()?;
        self.outlet.with_untracked(|o| o.query_param_for(&user))
    }

    /// Outlet whose sales reps populate the employee pickers.
    pub fn effective_outlet(&self) -> Option<String> {
        let user = self.current_user()?;
        Some(self.outlet.with_untracked(|o| o.effective_for(&user)))
    }

    pub fn set_sales_reps(&self, reps: Vec<User>) {
        self.sales_reps.set(reps);
    }

    // ------------------------------------------------------------------
    // Navigation and commands
    // ------------------------------------------------------------------

    /// Switches to `tab` when the policy allows it. Returns whether it did.
    pub fn navigate(&self, tab: AppTab) -> bool {
        let next = self.policy.with_untracked(|p| next_tab(tab, p.as_ref()));
        match next {
            Some(tab) => {
                log::debug!("Tab -> {}", tab.key());
                self.active_tab.set(tab);
                true
            }
            None => {
                log::debug!("Tab {} not permitted, ignored", tab.key());
                false
            }
        }
    }

    pub fn request_form(&self, command: FormCommand) {
        let tab = self.active_tab.get_untracked();
        self.form_request.set(Some(FormRequest { tab, command }));
    }

    /// Reports a failed call. A 401 ends the session.
    pub fn handle_error(&self, action: &str, err: &ApiError) {
        log::error!("{}: {}", action, err);
        if err.is_unauthorized() {
            self.end_session();
            self.notices.error(err.to_string());
            return;
        }
        match err {
            ApiError::Status { .. } | ApiError::Rejected(_) => self.notices.error(err.to_string()),
            _ => self.notices.error(action.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn owner_session() -> Session {
        Session {
            token: "tok-1".to_string(),
            user: UserInfo {
                id: Some(1),
                username: "owner".to_string(),
                full_name: "Owner".to_string(),
                role: Role::Owner,
                outlet: "SKY_BLUE_WOMEN".to_string(),
                is_active: Some(true),
            },
        }
    }

    #[test]
    fn api_client_carries_base_and_session_token() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new(AppConfig::for_hostname("localhost"));
            assert_eq!(ctx.api(), ApiClient::new("http://localhost:8080/api", None));

            ctx.session.set(Some(owner_session()));
            let api = ctx.api();
            assert_eq!(api.base(), "http://localhost:8080/api");
            assert_eq!(api.bearer().as_deref(), Some("Bearer tok-1"));
        });
    }
}
