use contracts::domain::a003_salary_statement::aggregate::SalaryStatement;
use contracts::shared::date_window::parse_date_input;
use contracts::shared::validation::{
    parse_number, validate_base_salary, validate_incentive_percentage,
};
use leptos::prelude::*;
use thaw::*;

use super::statement::calculation_line;
use super::view_model::SalaryViewModel;
use crate::shared::components::table::format_currency;
use crate::shared::date_utils::{format_naive_date, today};
use crate::shared::icons::icon;
use crate::system::users::ui::picker::SalesRepSelect;

fn incentive_invalid(value: &str) -> bool {
    !value.trim().is_empty() && validate_incentive_percentage(parse_number(value)).is_err()
}

fn base_invalid(value: &str) -> bool {
    !value.trim().is_empty() && validate_base_salary(parse_number(value)).is_err()
}

fn period_invalid(from: &str, to: &str) -> bool {
    matches!(
        (parse_date_input(from), parse_date_input(to)),
        (Some(from), Some(to)) if from > to
    )
}

#[component]
#[allow(non_snake_case)]
pub fn SalaryPanel() -> impl IntoView {
    let vm = use_context::<SalaryViewModel>().expect("SalaryViewModel not found in context");
    let period_bad = move || vm.form.with(|f| period_invalid(&f.from_date, &f.to_date));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Salary"</h1>
                </div>
            </div>

            <form
                class="entry-form no-print"
                id="salary-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.generate();
                }
            >
                <div class="entry-form__grid">
                    <div class="form-group">
                        <label for="salary-employee">"Employee"</label>
                        <SalesRepSelect
                            id="salary-employee"
                            value=Signal::derive(move || vm.form.get().employee_username)
                            on_change=move |value: String| vm.form.update(|f| f.employee_username = value)
                            placeholder="Select Employee"
                        />
                    </div>
                    <div class="form-group">
                        <label for="salary-incentive">"Incentive (%)"</label>
                        <input
                            type="number"
                            id="salary-incentive"
                            min="0"
                            max="100"
                            step="0.1"
                            class:invalid=move || vm.form.with(|f| incentive_invalid(&f.incentive_percentage))
                            prop:value=move || vm.form.get().incentive_percentage
                            on:input=move |ev| vm.form.update(|f| f.incentive_percentage = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="salary-from">"From"</label>
                        <input
                            type="date"
                            id="salary-from"
                            class:invalid=period_bad
                            prop:value=move || vm.form.get().from_date
                            on:change=move |ev| vm.form.update(|f| f.from_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="salary-to">"To"</label>
                        <input
                            type="date"
                            id="salary-to"
                            class:invalid=period_bad
                            prop:value=move || vm.form.get().to_date
                            on:change=move |ev| vm.form.update(|f| f.to_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="salary-base">"Base Salary (₹)"</label>
                        <input
                            type="number"
                            id="salary-base"
                            min="0"
                            class:invalid=move || vm.form.with(|f| base_invalid(&f.base_salary))
                            prop:value=move || vm.form.get().base_salary
                            on:input=move |ev| vm.form.update(|f| f.base_salary = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="entry-form__actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.generating.get()>
                        {move || if vm.generating.get() { "Generating..." } else { "Generate Statement" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| vm.clear()>
                        "Clear"
                    </button>
                </div>
            </form>

            {move || vm.statement.get().map(|statement| view! { <StatementView statement=statement vm=vm /> })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn StatementView(statement: SalaryStatement, vm: SalaryViewModel) -> impl IntoView {
    let calculation = calculation_line(&statement);
    let advances = statement.advances.clone();
    let has_advances = statement.has_advances();

    view! {
        <div class="salary-statement">
            <div class="salary-statement__header">
                <h2>"Salary Statement"</h2>
                <p><strong>"Employee: "</strong>{statement.employee_name.clone()}</p>
                <p><strong>"Employee ID: "</strong>{statement.employee_username.clone()}</p>
                <p>
                    <strong>"Period: "</strong>
                    {format!("{} - {}", format_naive_date(statement.from_date), format_naive_date(statement.to_date))}
                </p>
                <p><strong>"Outlet: "</strong>{statement.outlet.clone()}</p>
                <p><strong>"Generated On: "</strong>{format_naive_date(today())}</p>
            </div>

            <div class="salary-statement__details">
                <div>
                    <h4>"Earnings"</h4>
                    <p><strong>"Base Salary: "</strong>{format_currency(statement.base_salary)}</p>
                    <p><strong>"Total Sales: "</strong>{format_currency(statement.total_sales)}</p>
                    <p><strong>"Number of Transactions: "</strong>{statement.transaction_count}</p>
                    <p><strong>"Incentive Rate: "</strong>{format!("{}%", statement.incentive_percentage)}</p>
                    <p><strong>"Incentive Amount: "</strong>{format_currency(statement.incentive_amount)}</p>
                    <hr />
                    <p><strong>"Gross Earnings: "</strong>{format_currency(statement.gross_earnings())}</p>
                </div>
                <div>
                    <h4>"Deductions"</h4>
                    <p><strong>"Total Advances: "</strong>{format_currency(statement.total_advances)}</p>
                    {has_advances.then(|| view! {
                        <div class="salary-statement__advances">
                            <strong>"Advance Details:"</strong>
                            {advances
                                .into_iter()
                                .map(|advance| view! {
                                    <p class="salary-statement__advance">
                                        {format!("• {}: {}", format_naive_date(advance.date), format_currency(advance.amount))}
                                    </p>
                                })
                                .collect_view()}
                        </div>
                    })}
                </div>
            </div>

            <div class="salary-statement__total">
                <h3>{format!("Net Salary: {}", format_currency(statement.net_salary))}</h3>
                <p class="salary-statement__calculation">{calculation}</p>
            </div>

            <div class="salary-statement__actions no-print">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.print()>
                    {icon("printer")}
                    "Print Statement"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.download()>
                    {icon("download")}
                    "Download"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_flags_skip_blank_values() {
        assert!(!incentive_invalid(""));
        assert!(incentive_invalid("120"));
        assert!(!incentive_invalid("5"));
        assert!(base_invalid("-1"));
        assert!(!base_invalid("0"));
    }

    #[test]
    fn period_flag_needs_both_dates() {
        assert!(period_invalid("2024-07-01", "2024-06-30"));
        assert!(!period_invalid("2024-06-01", "2024-06-30"));
        assert!(!period_invalid("", "2024-06-30"));
    }
}
