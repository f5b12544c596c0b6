//! Declarative description of what each role may see and edit.
//!
//! Views never branch on [`Role`] directly; they read a [`RolePolicy`].

use crate::shared::date_window::{DashboardRangeRule, SaleDateTimeRule};
use crate::system::auth::Role;

/// Thresholds for the role date rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    /// How far back a sales rep may look on the dashboard.
    pub sales_lookback_days: i64,
    /// Whether managers may only record sales dated today.
    pub manager_same_day_lock: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            sales_lookback_days: 3,
            manager_same_day_lock: true,
        }
    }
}

/// Top-level panels of the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppTab {
    Dashboard,
    Sales,
    Expenses,
    Users,
    Salary,
}

impl AppTab {
    pub const ALL: [AppTab; 5] = [
        AppTab::Dashboard,
        AppTab::Sales,
        AppTab::Expenses,
        AppTab::Users,
        AppTab::Salary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "dashboard",
            AppTab::Sales => "sales",
            AppTab::Expenses => "expenses",
            AppTab::Users => "users",
            AppTab::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Dashboard",
            AppTab::Sales => "Sales",
            AppTab::Expenses => "Expenses",
            AppTab::Users => "Users",
            AppTab::Salary => "Salary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "bar-chart",
            AppTab::Sales => "cash",
            AppTab::Expenses => "receipt",
            AppTab::Users => "users",
            AppTab::Salary => "wallet",
        }
    }

    /// Alt+1..Alt+5 map onto the tabs in declaration order.
    pub fn from_shortcut_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

/// Visibility and constraint descriptor for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy {
    pub role: Role,
    /// Visible tabs in display order.
    pub tabs: Vec<AppTab>,
    pub outlet_selector: bool,
    pub sales_entry_form: bool,
    pub created_by_column: bool,
    pub sales_rep_filter: bool,
    pub dashboard_range: DashboardRangeRule,
    pub sale_datetime: SaleDateTimeRule,
}

impl RolePolicy {
    pub fn for_role(role: Role, config: &PolicyConfig) -> Self {
        match role {
            Role::Owner => Self {
                role,
                tabs: AppTab::ALL.to_vec(),
                outlet_selector: true,
                sales_entry_form: true,
                created_by_column: true,
                sales_rep_filter: true,
                dashboard_range: DashboardRangeRule::Free,
                sale_datetime: SaleDateTimeRule::Free,
            },
            Role::Manager => Self {
                role,
                tabs: vec![AppTab::Dashboard, AppTab::Sales, AppTab::Expenses],
                outlet_selector: false,
                sales_entry_form: true,
                created_by_column: false,
                sales_rep_filter: true,
                dashboard_range: DashboardRangeRule::Free,
                sale_datetime: if config.manager_same_day_lock {
                    SaleDateTimeRule::SameDay
                } else {
                    SaleDateTimeRule::Free
                },
            },
            Role::Sales => Self {
                role,
                tabs: vec![AppTab::Dashboard],
                outlet_selector: false,
                sales_entry_form: false,
                created_by_column: false,
                sales_rep_filter: false,
                dashboard_range: DashboardRangeRule::TrailingWindow {
                    lookback_days: config.sales_lookback_days,
                },
                sale_datetime: SaleDateTimeRule::Free,
            },
        }
    }

    pub fn allows(&self, tab: AppTab) -> bool {
        self.tabs.contains(&tab)
    }

    pub fn landing_tab(&self) -> AppTab {
        AppTab::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_sees_everything_unrestricted() {
        let policy = RolePolicy::for_role(Role::Owner, &PolicyConfig::default());
        assert!(AppTab::ALL.iter().all(|tab| policy.allows(*tab)));
        assert!(policy.outlet_selector);
        assert!(policy.created_by_column);
        assert_eq!(policy.dashboard_range, DashboardRangeRule::Free);
        assert_eq!(policy.sale_datetime, SaleDateTimeRule::Free);
    }

    #[test]
    fn manager_has_sales_and_expenses_with_same_day_lock() {
        let policy = RolePolicy::for_role(Role::Manager, &PolicyConfig::default());
        assert!(policy.allows(AppTab::Sales));
        assert!(policy.allows(AppTab::Expenses));
        assert!(!policy.allows(AppTab::Users));
        assert!(!policy.allows(AppTab::Salary));
        assert!(!policy.outlet_selector);
        assert!(policy.sales_entry_form);
        assert_eq!(policy.sale_datetime, SaleDateTimeRule::SameDay);
    }

    #[test]
    fn sales_only_gets_dashboard_with_trailing_window() {
        let policy = RolePolicy::for_role(Role::Sales, &PolicyConfig::default());
        assert_eq!(policy.tabs, vec![AppTab::Dashboard]);
        assert!(!policy.sales_entry_form);
        assert!(!policy.sales_rep_filter);
        assert_eq!(
            policy.dashboard_range,
            DashboardRangeRule::TrailingWindow { lookback_days: 3 }
        );
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = PolicyConfig {
            sales_lookback_days: 7,
            manager_same_day_lock: false,
        };
        let sales = RolePolicy::for_role(Role::Sales, &config);
        assert_eq!(
            sales.dashboard_range,
            DashboardRangeRule::TrailingWindow { lookback_days: 7 }
        );
        let manager = RolePolicy::for_role(Role::Manager, &config);
        assert_eq!(manager.sale_datetime, SaleDateTimeRule::Free);
    }

    #[test]
    fn shortcut_digits_follow_tab_order() {
        assert_eq!(AppTab::from_shortcut_digit('1'), Some(AppTab::Dashboard));
        assert_eq!(AppTab::from_shortcut_digit('5'), Some(AppTab::Salary));
        assert_eq!(AppTab::from_shortcut_digit('0'), None);
        assert_eq!(AppTab::from_shortcut_digit('6'), None);
    }
}
