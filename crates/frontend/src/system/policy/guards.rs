//! Runtime constraints a role policy attaches to form inputs.
//!
//! An input owns an [`InputGuards`] list and runs every value change through
//! it. Guards are installed per policy and removed by disposing the returned
//! [`Subscription`].

use chrono::NaiveDate;
use contracts::dashboards::d400_sales_dashboard::dto::DashboardFilter;
use contracts::shared::date_window::{
    format_date_input, format_datetime_input, parse_date_input, parse_datetime_input,
    DashboardRangeRule, SaleDateTimeRule,
};
use contracts::shared::role_policy::RolePolicy;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::subscription::Subscription;

type Guard<T> = Rc<dyn Fn(T) -> T>;

/// Ordered list of rewrite hooks for one input.
pub struct InputGuards<T> {
    slots: Rc<RefCell<Vec<(u64, Guard<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T> Clone for InputGuards<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<T> Default for InputGuards<T> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }
}

impl<T: 'static> InputGuards<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, guard: impl Fn(T) -> T + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().push((id, Rc::new(guard)));

        let slots = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().retain(|(slot, _)| *slot != id);
            }
        })
    }

    /// Runs `value` through every installed guard in order.
    pub fn apply(&self, value: T) -> T {
        let guards: Vec<Guard<T>> = self.slots.borrow().iter().map(|(_, g)| g.clone()).collect();
        guards.iter().fold(value, |value, guard| guard(value))
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inputs a policy can constrain, plus how to report a correction.
#[derive(Clone)]
pub struct GuardTargets {
    pub dashboard_range: InputGuards<DashboardFilter>,
    pub sale_datetime: InputGuards<String>,
    pub warn: Rc<dyn Fn(String)>,
    pub today: fn() -> NaiveDate,
}

pub fn install_guards(policy: &RolePolicy, targets: &GuardTargets) -> Vec<Subscription> {
    let mut guards = Vec::new();

    if let rule @ DashboardRangeRule::TrailingWindow { .. } = policy.dashboard_range {
        let warn = targets.warn.clone();
        let today = targets.today;
        guards.push(targets.dashboard_range.install(move |filter| {
            correct_dashboard_range(&rule, filter, today(), &*warn)
        }));
    }

    if let rule @ SaleDateTimeRule::SameDay = policy.sale_datetime {
        let warn = targets.warn.clone();
        let today = targets.today;
        guards.push(targets.sale_datetime.install(move |value| {
            correct_sale_datetime(&rule, value, today(), &*warn)
        }));
    }

    guards
}

fn correct_dashboard_range(
    rule: &DashboardRangeRule,
    filter: DashboardFilter,
    today: NaiveDate,
    warn: &dyn Fn(String),
) -> DashboardFilter {
    let to = parse_date_input(&filter.to_date).unwrap_or(today);
    let from = parse_date_input(&filter.from_date).unwrap_or(to);
    let corrected = rule.correct(from, to, today);
    if let Some(adjustment) = corrected.adjustment {
        warn(adjustment.to_string());
    }
    DashboardFilter {
        from_date: format_date_input(corrected.from),
        to_date: format_date_input(corrected.to),
    }
}

fn correct_sale_datetime(
    rule: &SaleDateTimeRule,
    value: String,
    today: NaiveDate,
    warn: &dyn Fn(String),
) -> String {
    let Some(candidate) = parse_datetime_input(&value) else {
        return value;
    };
    match rule.correct(candidate, today) {
        Some(fixed) => {
            warn("Sales can only be recorded for today. The date has been reset.".to_string());
            format_datetime_input(fixed)
        }
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::role_policy::PolicyConfig;
    use contracts::system::auth::Role;

    fn june_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn targets(warnings: Rc<RefCell<Vec<String>>>) -> GuardTargets {
        GuardTargets {
            dashboard_range: InputGuards::new(),
            sale_datetime: InputGuards::new(),
            warn: Rc::new(move |m| warnings.borrow_mut().push(m)),
            today: june_10,
        }
    }

    fn filter(from: &str, to: &str) -> DashboardFilter {
        DashboardFilter {
            from_date: from.into(),
            to_date: to.into(),
        }
    }

    #[test]
    fn sales_window_raises_from_and_warns() {
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let t = targets(warnings.clone());
        let policy = RolePolicy::for_role(Role::Sales, &PolicyConfig::default());
        let subs = install_guards(&policy, &t);
        assert_eq!(subs.len(), 1);

        let fixed = t.dashboard_range.apply(filter("2024-06-01", "2024-06-10"));
        assert_eq!(fixed, filter("2024-06-07", "2024-06-10"));
        assert_eq!(warnings.borrow().len(), 1);

        let fixed = t.dashboard_range.apply(filter("2024-06-12", "2024-06-10"));
        assert_eq!(fixed.from_date, "2024-06-10");

        let kept = t.dashboard_range.apply(filter("2024-06-08", "2024-06-10"));
        assert_eq!(kept, filter("2024-06-08", "2024-06-10"));
        assert_eq!(warnings.borrow().len(), 2);
    }

    #[test]
    fn disposed_guards_stop_constraining() {
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let t = targets(warnings);
        let policy = RolePolicy::for_role(Role::Sales, &PolicyConfig::default());
        for sub in install_guards(&policy, &t) {
            sub.dispose();
        }
        assert!(t.dashboard_range.is_empty());
        let value = filter("2024-01-01", "2024-06-10");
        assert_eq!(t.dashboard_range.apply(value.clone()), value);
    }

    #[test]
    fn manager_datetime_reset_to_today_keeps_time() {
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let t = targets(warnings.clone());
        let policy = RolePolicy::for_role(Role::Manager, &PolicyConfig::default());
        let _subs = install_guards(&policy, &t);
        assert!(t.dashboard_range.is_empty());

        assert_eq!(t.sale_datetime.apply("2024-06-09T14:30".into()), "2024-06-10T14:30");
        assert_eq!(t.sale_datetime.apply("2024-06-10T09:15".into()), "2024-06-10T09:15");
        assert_eq!(warnings.borrow().len(), 1);
    }

    #[test]
    fn owner_installs_nothing() {
        let t = targets(Rc::new(RefCell::new(Vec::new())));
        let policy = RolePolicy::for_role(Role::Owner, &PolicyConfig::default());
        assert!(install_guards(&policy, &t).is_empty());
    }
}
