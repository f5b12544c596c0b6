//! Applies role policies and owns the guards they install.

use contracts::shared::role_policy::RolePolicy;

use super::subscription::Subscription;

struct AppliedPolicy {
    policy: RolePolicy,
    guards: Vec<Subscription>,
}

/// Holds at most one applied policy. Entering a policy always tears the
/// previous one down first, so no guard outlives its role.
#[derive(Default)]
pub struct RolePolicyEngine {
    applied: Option<AppliedPolicy>,
}

impl RolePolicyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tears down the current policy, then installs `policy` via `install`.
    pub fn enter<F>(&mut self, policy: RolePolicy, install: F)
    where
        F: FnOnce(&RolePolicy) -> Vec<Subscription>,
    {
        self.teardown();
        let guards = install(&policy);
        log::info!(
            "Role policy {} applied with {} guard(s)",
            policy.role,
            guards.len()
        );
        self.applied = Some(AppliedPolicy { policy, guards });
    }

    /// Disposes every guard of the current policy. Safe to call repeatedly.
    pub fn teardown(&mut self) -> Option<RolePolicy> {
        let applied = self.applied.take()?;
        let count = applied.guards.len();
        for guard in applied.guards {
            guard.dispose();
        }
        log::info!("Role policy {} removed ({} guard(s) disposed)", applied.policy.role, count);
        Some(applied.policy)
    }

    pub fn active(&self) -> Option<&RolePolicy> {
        self.applied.as_ref().map(|a| &a.policy)
    }

    pub fn guard_count(&self) -> usize {
        self.applied.as_ref().map_or(0, |a| a.guards.len())
    }
}

impl Drop for RolePolicyEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::date_window::{DashboardRangeRule, SaleDateTimeRule};
    use contracts::shared::role_policy::PolicyConfig;
    use contracts::system::auth::Role;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Constraint flags a guard would enforce in the page.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Page {
        to_date_locked: u32,
        from_window: u32,
        same_day_lock: u32,
    }

    fn installer(page: Rc<RefCell<Page>>) -> impl FnOnce(&RolePolicy) -> Vec<Subscription> {
        move |policy: &RolePolicy| {
            let mut guards = Vec::new();
            if let DashboardRangeRule::TrailingWindow { .. } = policy.dashboard_range {
                page.borrow_mut().to_date_locked += 1;
                page.borrow_mut().from_window += 1;
                let p = page.clone();
                guards.push(Subscription::new(move || {
                    p.borrow_mut().to_date_locked -= 1;
                    p.borrow_mut().from_window -= 1;
                }));
            }
            if policy.sale_datetime == SaleDateTimeRule::SameDay {
                page.borrow_mut().same_day_lock += 1;
                let p = page.clone();
                guards.push(Subscription::new(move || p.borrow_mut().same_day_lock -= 1));
            }
            guards
        }
    }

    fn policy(role: Role) -> RolePolicy {
        RolePolicy::for_role(role, &PolicyConfig::default())
    }

    #[test]
    fn manager_sales_manager_equals_manager() {
        let page = Rc::new(RefCell::new(Page::default()));
        let mut engine = RolePolicyEngine::new();
        engine.enter(policy(Role::Manager), installer(page.clone()));
        engine.enter(policy(Role::Sales), installer(page.clone()));
        engine.enter(policy(Role::Manager), installer(page.clone()));

        let clean = Rc::new(RefCell::new(Page::default()));
        let mut reference = RolePolicyEngine::new();
        reference.enter(policy(Role::Manager), installer(clean.clone()));

        assert_eq!(*page.borrow(), *clean.borrow());
        assert_eq!(engine.active(), reference.active());
        assert_eq!(engine.guard_count(), reference.guard_count());
    }

    #[test]
    fn sales_guards_disposed_when_leaving() {
        let page = Rc::new(RefCell::new(Page::default()));
        let mut engine = RolePolicyEngine::new();
        engine.enter(policy(Role::Sales), installer(page.clone()));
        assert_eq!(page.borrow().from_window, 1);

        engine.enter(policy(Role::Owner), installer(page.clone()));
        assert_eq!(*page.borrow(), Page::default());
        assert_eq!(engine.guard_count(), 0);
    }

    #[test]
    fn teardown_is_idempotent() {
        let page = Rc::new(RefCell::new(Page::default()));
        let mut engine = RolePolicyEngine::new();
        engine.enter(policy(Role::Manager), installer(page.clone()));
        assert_eq!(engine.teardown().map(|p| p.role), Some(Role::Manager));
        assert!(engine.teardown().is_none());
        assert_eq!(*page.borrow(), Page::default());
        assert!(engine.active().is_none());
    }

    #[test]
    fn dropping_engine_disposes_guards() {
        let page = Rc::new(RefCell::new(Page::default()));
        {
            let mut engine = RolePolicyEngine::new();
            engine.enter(policy(Role::Sales), installer(page.clone()));
        }
        assert_eq!(*page.borrow(), Page::default());
    }
}
