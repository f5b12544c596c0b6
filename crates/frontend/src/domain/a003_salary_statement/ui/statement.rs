//! Plain-text rendering of a salary statement, used for the download.

use chrono::NaiveDate;
use contracts::domain::a003_salary_statement::aggregate::SalaryStatement;
use std::fmt::Write;

use crate::shared::components::table::format_currency;
use crate::shared::date_utils::format_naive_date;

pub fn statement_text(statement: &SalaryStatement, generated_on: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Salary Statement");
    let _ = writeln!(out, "Employee: {}", statement.employee_name);
    let _ = writeln!(out, "Employee ID: {}", statement.employee_username);
    let _ = writeln!(
        out,
        "Period: {} - {}",
        format_naive_date(statement.from_date),
        format_naive_date(statement.to_date)
    );
    let _ = writeln!(out, "Outlet: {}", statement.outlet);
    let _ = writeln!(out, "Generated On: {}", format_naive_date(generated_on));

    let _ = writeln!(out);
    let _ = writeln!(out, "Earnings");
    let _ = writeln!(out, "Base Salary: {}", format_currency(statement.base_salary));
    let _ = writeln!(out, "Total Sales: {}", format_currency(statement.total_sales));
    let _ = writeln!(out, "Number of Transactions: {}", statement.transaction_count);
    let _ = writeln!(out, "Incentive Rate: {}%", statement.incentive_percentage);
    let _ = writeln!(
        out,
        "Incentive Amount: {}",
        format_currency(statement.incentive_amount)
    );
    let _ = writeln!(
        out,
        "Gross Earnings: {}",
        format_currency(statement.gross_earnings())
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Deductions");
    let _ = writeln!(
        out,
        "Total Advances: {}",
        format_currency(statement.total_advances)
    );
    if statement.has_advances() {
        let _ = writeln!(out, "Advance Details:");
        for advance in &statement.advances {
            let _ = writeln!(
                out,
                "  - {}: {}",
                format_naive_date(advance.date),
                format_currency(advance.amount)
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Net Salary: {}", format_currency(statement.net_salary));
    let _ = writeln!(out, "{}", calculation_line(statement));
    out
}

/// `Calculation: Base Salary (₹x) + Incentive (₹y) - Advances (₹z)`
pub fn calculation_line(statement: &SalaryStatement) -> String {
    format!(
        "Calculation: Base Salary ({}) + Incentive ({}) - Advances ({})",
        format_currency(statement.base_salary),
        format_currency(statement.incentive_amount),
        format_currency(statement.total_advances)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_expense_entry::aggregate::{ExpenseEntry, ExpenseType};

    fn statement() -> SalaryStatement {
        SalaryStatement {
            employee_name: "Anita Rao".into(),
            employee_username: "anita".into(),
            outlet: "SKY_BLUE_WOMEN".into(),
            from_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            base_salary: 20000.0,
            total_sales: 30000.0,
            transaction_count: 12,
            incentive_percentage: 5.0,
            incentive_amount: 1500.0,
            total_advances: 3000.0,
            net_salary: 18500.0,
            advances: vec![ExpenseEntry {
                id: 9,
                outlet: "SKY_BLUE_WOMEN".into(),
                date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                expense_type: ExpenseType::Advance,
                amount: 3000.0,
                description: None,
                advance_to_username: Some("anita".into()),
                advance_to_name: Some("Anita Rao".into()),
                created_by: None,
                created_at: None,
            }],
        }
    }

    #[test]
    fn text_lists_sections_and_advances() {
        let text = statement_text(&statement(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(text.starts_with("Salary Statement\n"));
        assert!(text.contains("Period: 01/06/2024 - 30/06/2024"));
        assert!(text.contains("Generated On: 01/07/2024"));
        assert!(text.contains("Incentive Rate: 5%"));
        assert!(text.contains("Gross Earnings: ₹21,500"));
        assert!(text.contains("  - 15/06/2024: ₹3,000"));
        assert!(text.contains("Net Salary: ₹18,500"));
    }

    #[test]
    fn calculation_line_shows_components() {
        assert_eq!(
            calculation_line(&statement()),
            "Calculation: Base Salary (₹20,000) + Incentive (₹1,500) - Advances (₹3,000)"
        );
    }
}
