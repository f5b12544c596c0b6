use contracts::domain::a002_expense_entry::aggregate::ExpenseEntry;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{format_currency, TableCellMoney};
use crate::shared::date_utils::format_naive_date;
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::Searchable;

impl Searchable for ExpenseEntry {
    fn search_text(&self) -> String {
        [
            format_naive_date(self.date),
            self.expense_type.label(),
            format_currency(self.amount),
            self.description_text().to_string(),
            self.advance_to_label().to_string(),
            self.outlet.clone(),
        ]
        .join(" ")
    }
}

impl CsvExportable for ExpenseEntry {
    fn header() -> &'static str {
        "Date,Type,Amount,Description,Advance To,Outlet"
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_naive_date(self.date),
            self.expense_type.label(),
            self.amount.to_string(),
            self.description_text().to_string(),
            self.advance_to_label().to_string(),
            self.outlet.clone(),
        ]
    }

    fn quoted_columns() -> &'static [usize] {
        &[3]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ExpensesTable(#[prop(into)] rows: Signal<Vec<ExpenseEntry>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <div class="empty-state">"No expenses found"</div> }
        >
            <Table attr:id="expenses-table" attr:style="width: 100%; min-width: 800px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell>"Advance To"</TableHeaderCell>
                        <TableHeaderCell>"Outlet"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|expense| expense.id
                        children=move |expense| {
                            let badge_color = if expense.expense_type.is_advance() {
                                BadgeColor::Warning
                            } else {
                                BadgeColor::Informative
                            };
                            let date = format_naive_date(expense.date);
                            let type_label = expense.expense_type.label();
                            let amount = expense.amount;
                            let description = expense.description_text().to_string();
                            let advance_to = expense.advance_to_label().to_string();
                            let outlet = expense.outlet;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{date}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=badge_color>
                                                {type_label}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCellMoney value=amount />
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {description}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{advance_to}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{outlet}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv_content;
    use chrono::NaiveDate;
    use contracts::domain::a002_expense_entry::aggregate::ExpenseType;

    fn expense(expense_type: ExpenseType, advance_to: Option<&str>) -> ExpenseEntry {
        ExpenseEntry {
            id: 3,
            outlet: "SKY_BLUE_WOMEN".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            expense_type,
            amount: 150.0,
            description: Some("Evening tea".into()),
            advance_to_username: advance_to.map(|_| "anita".into()),
            advance_to_name: advance_to.map(Into::into),
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn csv_quotes_description_and_dashes_missing_recipient() {
        let csv = build_csv_content(&[
            expense(ExpenseType::Tea, None),
            expense(ExpenseType::Advance, Some("Anita Rao")),
        ]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Type,Amount,Description,Advance To,Outlet");
        assert_eq!(lines[1], "03/06/2024,TEA,150,\"Evening tea\",-,SKY_BLUE_WOMEN");
        assert_eq!(
            lines[2],
            "03/06/2024,ADVANCE,150,\"Evening tea\",Anita Rao,SKY_BLUE_WOMEN"
        );
    }

    #[test]
    fn csv_type_column_uses_display_label() {
        let csv = build_csv_content(&[expense(ExpenseType::ChitFund, None)]);
        assert_eq!(
            csv.lines().nth(1),
            Some("03/06/2024,CHIT FUND,150,\"Evening tea\",-,SKY_BLUE_WOMEN")
        );
    }

    #[test]
    fn search_uses_display_label() {
        let chit = expense(ExpenseType::ChitFund, None);
        assert!(chit.matches_filter("chit fund"));
        assert!(!chit.matches_filter("advance"));
    }
}
