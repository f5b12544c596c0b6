use contracts::dashboards::d400_sales_dashboard::dto::{
    DashboardFilter, DashboardStats, RECENT_SALES_LIMIT,
};
use contracts::domain::a001_sales_entry::aggregate::SalesEntry;
use contracts::shared::date_window::{parse_date_input, DashboardRangeRule};
use contracts::shared::validation::{validate_date_range, ValidationError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_sales_dashboard::api;
use crate::domain::a001_sales_entry::api::fetch_sales;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::shared::date_utils::today;
use crate::system::policy::guards::InputGuards;

/// Dashboard state: the range filter, the four totals and the latest sales.
#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    ctx: AppGlobalContext,
    pub filter: RwSignal<DashboardFilter>,
    pub stats: RwSignal<Option<DashboardStats>>,
    pub recent: RwSignal<Vec<SalesEntry>>,
    pub loading: RwSignal<bool>,
    range_guards: StoredValue<InputGuards<DashboardFilter>, LocalStorage>,
}

impl DashboardViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            ctx,
            filter: RwSignal::new(DashboardFilter::for_day(today())),
            stats: RwSignal::new(None),
            recent: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            range_guards: StoredValue::new_local(InputGuards::new()),
        }
    }

    /// Back to today/today with nothing loaded.
    pub fn reset(&self) {
        self.filter.set(DashboardFilter::for_day(today()));
        self.stats.set(None);
        self.recent.set(Vec::new());
    }

    /// Hook list the active policy installs its range guard into.
    pub fn range_guards(&self) -> InputGuards<DashboardFilter> {
        self.range_guards.get_value()
    }

    fn range_rule(&self) -> DashboardRangeRule {
        self.ctx.policy.with_untracked(|p| {
            p.as_ref()
                .map(|p| p.dashboard_range)
                .unwrap_or(DashboardRangeRule::Free)
        })
    }

    /// Whether the "to" date is fixed to today for the current role.
    pub fn locks_to_date(&self) -> bool {
        self.ctx.policy.with(|p| {
            p.as_ref()
                .is_some_and(|p| p.dashboard_range.locks_to_date())
        })
    }

    pub fn set_from(&self, value: String) {
        let next = DashboardFilter {
            from_date: value,
            to_date: self.filter.with_untracked(|f| f.to_date.clone()),
        };
        self.set_filter(next);
    }

    pub fn set_to(&self, value: String) {
        let next = DashboardFilter {
            from_date: self.filter.with_untracked(|f| f.from_date.clone()),
            to_date: value,
        };
        self.set_filter(next);
    }

    fn set_filter(&self, next: DashboardFilter) {
        let fixed = self.range_guards.with_value(|guards| guards.apply(next));
        self.filter.set(fixed);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (from, to) = self.filter.with_untracked(|f| {
            (parse_date_input(&f.from_date), parse_date_input(&f.to_date))
        });
        match (from, to) {
            (Some(from), Some(to)) => validate_date_range(from, to, &self.range_rule()),
            _ => Err(ValidationError::MissingPeriod),
        }
    }

    /// Fetches totals and recent sales together; on failure the previous
    /// figures stay on screen.
    pub async fn load(self) -> Result<(), ApiError> {
        let query = self
            .filter
            .with_untracked(|f| f.to_query(self.ctx.outlet_param()));
        self.loading.set(true);
        let client = self.ctx.api();
        let result = futures::try_join!(
            api::fetch_stats(&client, &query),
            fetch_sales(&client, &query)
        );
        self.loading.set(false);
        let (stats, mut sales) = result?;

        sales.truncate(RECENT_SALES_LIMIT);
        log::debug!("Dashboard loaded: {} recent sales", sales.len());
        self.stats.set(Some(stats));
        self.recent.set(sales);
        Ok(())
    }

    pub fn reload(self) {
        spawn_local(async move {
            if let Err(e) = self.load().await {
                self.ctx.handle_error("Failed to load dashboard data", &e);
            }
        });
    }

    /// "Apply" on the filter bar: validate the range, then load.
    pub fn apply_filter(self) {
        if let Err(e) = self.validate() {
            self.ctx.notices.error(e.to_string());
            return;
        }
        self.reload();
    }
}
