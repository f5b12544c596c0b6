use contracts::dashboards::d400_sales_dashboard::dto::DashboardStats;
use contracts::shared::date_window::DashboardRangeRule;
use leptos::prelude::*;
use thaw::*;

use super::view_model::DashboardViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn SalesDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = use_context::<DashboardViewModel>().expect("DashboardViewModel not found in context");

    let stat = move |read: fn(&DashboardStats) -> f64| {
        Signal::derive(move || vm.stats.with(|s| s.as_ref().map(read)))
    };
    let transactions = Signal::derive(move || {
        vm.stats
            .with(|s| s.as_ref().map(|s| s.total_transactions() as f64))
    });

    let window_hint = move || {
        ctx.policy.with(|p| match p.as_ref().map(|p| p.dashboard_range) {
            Some(DashboardRangeRule::TrailingWindow { lookback_days }) => Some(format!(
                "You can view sales from the last {} days only.",
                lookback_days
            )),
            _ => None,
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reload()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="filter-bar">
                <label class="form-group">
                    <span>"From"</span>
                    <input
                        type="date"
                        id="dashboard-from-date"
                        prop:value=move || vm.filter.get().from_date
                        on:change=move |ev| vm.set_from(event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    <span>"To"</span>
                    <input
                        type="date"
                        id="dashboard-to-date"
                        prop:value=move || vm.filter.get().to_date
                        readonly=move || vm.locks_to_date()
                        on:change=move |ev| vm.set_to(event_target_value(&ev))
                    />
                </label>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.apply_filter()>
                    "Apply"
                </Button>
                {move || window_hint().map(|hint| view! { <span class="filter-bar__hint">{hint}</span> })}
            </div>

            <div class="stat-grid">
                <StatCard label="Total Sales" icon_name="cash" value=stat(DashboardStats::total_sales) format=StatFormat::Currency />
                <StatCard label="Total Expenses" icon_name="receipt" value=stat(DashboardStats::total_expenses) format=StatFormat::Currency />
                <StatCard label="Net Profit" icon_name="wallet" value=stat(DashboardStats::net_profit) format=StatFormat::Currency />
                <StatCard label="Transactions" icon_name="bar-chart" value=transactions format=StatFormat::Count />
            </div>

            <h2 class="section-title">"Recent Sales"</h2>
            <Show when=move || vm.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show
                when=move || !vm.recent.with(|r| r.is_empty())
                fallback=|| view! { <div class="empty-state">"No sales found for the selected period"</div> }
            >
                <Table attr:id="recent-sales-table" attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Sales Rep"</TableHeaderCell>
                            <TableHeaderCell>"Bill Number"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Payment"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.recent.get()
                            key=|sale| sale.id
                            children=move |sale| {
                                let date_time = format_datetime(&sale.date_time);
                                let payment = sale.payment_type.label();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{date_time}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{sale.sales_rep_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{sale.bill_number}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=sale.amount />
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge>{payment}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
