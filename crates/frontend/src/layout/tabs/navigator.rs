//! Tab switching rules.
//!
//! Any tab may be requested from any tab; the role policy is the only guard.

use contracts::shared::role_policy::{AppTab, RolePolicy};

/// Tab to activate for `requested`, or `None` when the request is ignored.
///
/// Re-requesting the active tab is allowed and reloads it.
pub fn next_tab(requested: AppTab, policy: Option<&RolePolicy>) -> Option<AppTab> {
    match policy {
        Some(policy) if policy.allows(requested) => Some(requested),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::role_policy::PolicyConfig;
    use contracts::system::auth::Role;

    fn policy(role: Role) -> RolePolicy {
        RolePolicy::for_role(role, &PolicyConfig::default())
    }

    #[test]
    fn sales_cannot_open_users() {
        let sales = policy(Role::Sales);
        let mut active = AppTab::Dashboard;
        if let Some(tab) = next_tab(AppTab::Users, Some(&sales)) {
            active = tab;
        }
        assert_eq!(active, AppTab::Dashboard);
    }

    #[test]
    fn owner_reaches_every_tab() {
        let owner = policy(Role::Owner);
        for tab in AppTab::ALL {
            assert_eq!(next_tab(tab, Some(&owner)), Some(tab));
        }
    }

    #[test]
    fn manager_blocked_from_salary() {
        let manager = policy(Role::Manager);
        assert_eq!(next_tab(AppTab::Expenses, Some(&manager)), Some(AppTab::Expenses));
        assert_eq!(next_tab(AppTab::Salary, Some(&manager)), None);
    }

    #[test]
    fn no_session_no_navigation() {
        assert_eq!(next_tab(AppTab::Dashboard, None), None);
    }
}
