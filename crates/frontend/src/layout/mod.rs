pub mod global_context;
pub mod notices;
pub mod tabs;
pub mod top_header;

use contracts::shared::role_policy::AppTab;
use leptos::prelude::*;

use crate::dashboards::SalesDashboard;
use crate::domain::a001_sales_entry::ui::SalesPanel;
use crate::domain::a002_expense_entry::ui::ExpensesPanel;
use crate::domain::a003_salary_statement::ui::SalaryPanel;
use crate::system::auth::context::use_app_context;
use crate::system::auth::guard::RequireTab;
use crate::system::bootstrap::Panels;
use crate::system::users::directory;
use crate::system::users::ui::UsersPanel;
use notices::NoticeStack;
use tabs::TabBar;
use top_header::TopHeader;

fn panel_view(tab: AppTab) -> AnyView {
    match tab {
        AppTab::Dashboard => view! { <SalesDashboard /> }.into_any(),
        AppTab::Sales => view! { <SalesPanel /> }.into_any(),
        AppTab::Expenses => view! { <ExpensesPanel /> }.into_any(),
        AppTab::Users => view! { <UsersPanel /> }.into_any(),
        AppTab::Salary => view! { <SalaryPanel /> }.into_any(),
    }
}

/// Authenticated shell: top bar, tab bar, notices and the active panel.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              TabBar                      |
/// +------------------------------------------+
/// |              active panel                |
/// +------------------------------------------+
/// ```
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    let panels = use_context::<Panels>().expect("Panels not found in context");

    // sales-rep directory follows the session and the outlet choice
    Effect::new(move |_| {
        let signed_in = ctx.session.with(|s| s.is_some());
        ctx.outlet.track();
        if signed_in {
            directory::spawn_reload(ctx);
        }
    });

    // the visible panel reloads on every tab request and outlet change
    Effect::new(move |_| {
        let tab = ctx.active_tab.get();
        ctx.outlet.track();
        match tab {
            AppTab::Dashboard => panels.dashboard.reload(),
            AppTab::Sales => panels.sales.reload(),
            AppTab::Expenses => panels.expenses.reload(),
            AppTab::Users => panels.users.reload(),
            AppTab::Salary => {}
        }
    });

    view! {
        <div class="app-layout">
            <TopHeader />
            <TabBar />
            <NoticeStack notices=ctx.notices />
            <main class="app-main">
                {move || {
                    let tab = ctx.active_tab.get();
                    view! { <RequireTab tab=tab>{move || panel_view(tab)}</RequireTab> }
                }}
            </main>
        </div>
    }
}
