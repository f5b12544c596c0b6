use contracts::domain::a002_expense_entry::aggregate::{ExpenseDraft, ExpenseEntry, ExpenseFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_sales_dashboard::ui::DashboardViewModel;
use crate::domain::a002_expense_entry::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::shared::date_utils::today;
use crate::shared::export::export_to_csv;
use crate::shared::list_utils::filter_list;

#[derive(Clone, Copy)]
pub struct ExpensesViewModel {
    ctx: AppGlobalContext,
    dashboard: DashboardViewModel,
    pub filter: RwSignal<ExpenseFilter>,
    pub rows: RwSignal<Vec<ExpenseEntry>>,
    pub search: RwSignal<String>,
    pub form: RwSignal<ExpenseDraft>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ExpensesViewModel {
    pub fn new(ctx: AppGlobalContext, dashboard: DashboardViewModel) -> Self {
        let day = today();
        Self {
            ctx,
            dashboard,
            filter: RwSignal::new(ExpenseFilter::month_to_date(day)),
            rows: RwSignal::new(Vec::new()),
            search: RwSignal::new(String::new()),
            form: RwSignal::new(ExpenseDraft::for_day(day)),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        let day = today();
        self.filter.set(ExpenseFilter::month_to_date(day));
        self.rows.set(Vec::new());
        self.search.set(String::new());
        self.form.set(ExpenseDraft::for_day(day));
    }

    pub fn visible_rows(&self) -> Vec<ExpenseEntry> {
        let query = self.search.get();
        self.rows.with(|rows| filter_list(rows, &query))
    }

    pub fn set_type(&self, code: String) {
        self.form.update(|f| f.set_type(&code));
    }

    pub async fn load(self) -> Result<(), ApiError> {
        let query = self
            .filter
            .with_untracked(|f| f.to_query(self.ctx.outlet_param()));
        self.loading.set(true);
        let result = api::fetch_expenses(&self.ctx.api(), &query).await;
        self.loading.set(false);
        let rows = result?;
        log::debug!("Loaded {} expenses", rows.len());
        self.rows.set(rows);
        Ok(())
    }

    pub fn reload(self) {
        spawn_local(async move {
            if let Err(e) = self.load().await {
                self.ctx.handle_error("Failed to load expense data", &e);
            }
        });
    }

    pub fn submit(self) {
        if self.saving.get_untracked() {
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
            let result = api::create_expense(&self.ctx.api(), &entry).await;
            self.saving.set(false);
            match result {
                Ok(_) => {
                    log::info!("Expense {} recorded", entry.expense_type.code());
                    self.ctx.notices.success("Expense added successfully!");
                    self.clear();
                    self.reload();
                    self.dashboard.reload();
                }
                Err(e) => self.ctx.handle_error("Failed to add expense", &e),
            }
        });
    }

    pub fn clear(&self) {
        self.form.set(ExpenseDraft::for_day(today()));
    }

    pub fn export_csv(&self) {
        let filename = format!("expense_data_{}.csv", today().format("%Y-%m-%d"));
        let result = self.rows.with_untracked(|rows| export_to_csv(rows, &filename));
        match result {
            Ok(()) => self.ctx.notices.success("Expense data exported successfully!"),
            Err(e) => self.ctx.notices.error(e),
        }
    }
}
