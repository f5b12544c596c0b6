use chrono::NaiveDateTime;
use contracts::domain::a001_sales_entry::aggregate::{
    generate_bill_number, SalesEntry, SalesEntryDraft, SalesFilter,
};
use contracts::shared::date_window::{format_datetime_input, parse_date_input, DashboardRangeRule};
use contracts::shared::validation::{validate_date_range, ValidationError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_sales_dashboard::ui::DashboardViewModel;
use crate::domain::a001_sales_entry::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::shared::date_utils::{now_to_minute, today};
use crate::shared::export::export_to_csv;
use crate::shared::list_utils::filter_list;
use crate::system::policy::guards::InputGuards;

/// Empty entry form with the sale time preset to `now`.
fn fresh_draft(now: NaiveDateTime) -> SalesEntryDraft {
    SalesEntryDraft {
        date_time: format_datetime_input(now),
        ..SalesEntryDraft::default()
    }
}

/// Sales tab: filter, loaded rows, search box and the entry form.
#[derive(Clone, Copy)]
pub struct SalesViewModel {
    ctx: AppGlobalContext,
    dashboard: DashboardViewModel,
    pub filter: RwSignal<SalesFilter>,
    pub rows: RwSignal<Vec<SalesEntry>>,
    pub search: RwSignal<String>,
    pub form: RwSignal<SalesEntryDraft>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    datetime_guards: StoredValue<InputGuards<String>, LocalStorage>,
}

impl SalesViewModel {
    pub fn new(ctx: AppGlobalContext, dashboard: DashboardViewModel) -> Self {
        Self {
            ctx,
            dashboard,
            filter: RwSignal::new(SalesFilter::for_day(today())),
            rows: RwSignal::new(Vec::new()),
            search: RwSignal::new(String::new()),
            form: RwSignal::new(fresh_draft(now_to_minute())),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            datetime_guards: StoredValue::new_local(InputGuards::new()),
        }
    }

    pub fn reset(&self) {
        self.filter.set(SalesFilter::for_day(today()));
        self.rows.set(Vec::new());
        self.search.set(String::new());
        self.form.set(fresh_draft(now_to_minute()));
    }

    pub fn datetime_guards(&self) -> InputGuards<String> {
        self.datetime_guards.get_value()
    }

    /// Rows left after the search box.
    pub fn visible_rows(&self) -> Vec<SalesEntry> {
        let query = self.search.get();
        self.rows.with(|rows| filter_list(rows, &query))
    }

    /// `min`/`max` of the datetime input under the active policy.
    pub fn datetime_bounds(&self) -> Option<(String, String)> {
        self.ctx
            .policy
            .with(|p| p.as_ref().and_then(|p| p.sale_datetime.bounds(today())))
            .map(|(min, max): (NaiveDateTime, NaiveDateTime)| {
                (format_datetime_input(min), format_datetime_input(max))
            })
    }

    /// Every datetime edit passes through the installed guards.
    pub fn set_date_time(&self, value: String) {
        let fixed = self.datetime_guards.with_value(|guards| guards.apply(value));
        self.form.update(|f| f.date_time = fixed);
    }

    pub fn auto_bill_number(&self) {
        let bill = generate_bill_number(now_to_minute());
        self.form.update(|f| f.bill_number = bill);
    }

    pub fn validate_filter(&self) -> Result<(), ValidationError> {
        self.filter.with_untracked(|f| {
            match (parse_date_input(&f.from_date), parse_date_input(&f.to_date)) {
                (Some(from), Some(to)) => validate_date_range(from, to, &DashboardRangeRule::Free),
                _ => Ok(()),
            }
        })
    }

    pub async fn load(self) -> Result<(), ApiError> {
        let query = self
            .filter
            .with_untracked(|f| f.to_query(self.ctx.outlet_param()));
        self.loading.set(true);
        let result = api::fetch_sales(&self.ctx.api(), &query).await;
        self.loading.set(false);
        let rows = result?;
        log::debug!("Loaded {} sales", rows.len());
        self.rows.set(rows);
        Ok(())
    }

    pub fn reload(self) {
        spawn_local(async move {
            if let Err(e) = self.load().await {
                self.ctx.handle_error("Failed to load sales data", &e);
            }
        });
    }

    pub fn apply_filter(self) {
        if let Err(e) = self.validate_filter() {
            self.ctx.notices.error(e.to_string());
            return;
        }
        self.reload();
    }

    pub fn submit(self) {
        let allowed = self
            .ctx
            .policy
            .with_untracked(|p| p.as_ref().is_some_and(|p| p.sales_entry_form));
        if !allowed || self.saving.get_untracked() {
            return;
        }
        let entry = match self.form.with_untracked(|f| f.validate()) {
            Ok(entry) => entry,
            Err(e) => {
                self.ctx.notices.error(e.to_string());
                return;
            }
        };

        self.saving.set(true);
        spawn_local(async move {
            let result = api::create_sale(&self.ctx.api(), &entry).await;
            self.saving.set(false);
            match result {
                Ok(_) => {
                    log::info!("Sale {} recorded", entry.bill_number);
                    self.ctx.notices.success("Sales entry added successfully!");
                    self.clear();
                    self.reload();
                    self.dashboard.reload();
                }
                Err(e) => self.ctx.handle_error("Failed to add sales entry", &e),
            }
        });
    }

    pub fn clear(&self) {
        self.form.set(fresh_draft(now_to_minute()));
    }

    pub fn export_csv(&self) {
        let filename = format!("sales_data_{}.csv", today().format("%Y-%m-%d"));
        let result = self.rows.with_untracked(|rows| export_to_csv(rows, &filename));
        match result {
            Ok(()) => self.ctx.notices.success("Sales data exported successfully!"),
            Err(e) => self.ctx.notices.error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    #[test]
    fn fresh_draft_presets_only_the_sale_time() {
        let now = NaiveDateTime::parse_from_str("2024-06-10 14:30", "%Y-%m-%d %H:%M").unwrap();
        let draft = fresh_draft(now);
        assert_eq!(draft.date_time, "2024-06-10T14:30");
        assert!(draft.bill_number.is_empty());
        assert!(draft.sales_rep_username.is_empty());
    }

    #[test]
    fn new_form_starts_with_current_time() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new(AppConfig::for_hostname("localhost"));
            let vm = SalesViewModel::new(ctx, DashboardViewModel::new(ctx));
            let date_time = vm.form.with_untracked(|f| f.date_time.clone());
            assert!(!date_time.is_empty());
            assert!(contracts::shared::date_window::parse_datetime_input(&date_time).is_some());
        });
    }
}
