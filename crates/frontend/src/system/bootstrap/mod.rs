//! One-time wiring of window-level behaviour once the app is mounted.

pub mod health;
pub mod refresh;
pub mod shortcuts;

use crate::dashboards::d400_sales_dashboard::ui::DashboardViewModel;
use crate::domain::a001_sales_entry::ui::SalesViewModel;
use crate::domain::a002_expense_entry::ui::ExpensesViewModel;
use crate::domain::a003_salary_statement::ui::SalaryViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::UsersViewModel;

/// View models of every panel, as handed to the window-level handlers.
#[derive(Clone, Copy)]
pub struct Panels {
    pub dashboard: DashboardViewModel,
    pub sales: SalesViewModel,
    pub expenses: ExpensesViewModel,
    pub salary: SalaryViewModel,
    pub users: UsersViewModel,
}

impl Panels {
    pub fn new(ctx: AppGlobalContext) -> Self {
        let dashboard = DashboardViewModel::new(ctx);
        Self {
            dashboard,
            sales: SalesViewModel::new(ctx, dashboard),
            expenses: ExpensesViewModel::new(ctx, dashboard),
            salary: SalaryViewModel::new(ctx),
            users: UsersViewModel::new(ctx),
        }
    }

    pub fn reset(&self) {
        self.dashboard.reset();
        self.sales.reset();
        self.expenses.reset();
        self.salary.reset();
        self.users.reset();
    }
}

pub fn install(ctx: AppGlobalContext, panels: Panels) {
    shortcuts::install(ctx, panels);
    health::install_health_probe(ctx);
    health::install_window_handlers(ctx);
}
