use contracts::domain::a001_sales_entry::aggregate::SalesEntry;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{format_currency, TableCellMoney};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::Searchable;

impl Searchable for SalesEntry {
    fn search_text(&self) -> String {
        [
            format_datetime(&self.date_time),
            self.sales_rep_name.clone(),
            self.bill_number.clone(),
            format_currency(self.amount),
            self.payment_type.label().to_string(),
            self.outlet.clone(),
            self.created_by_label().to_string(),
        ]
        .join(" ")
    }
}

impl CsvExportable for SalesEntry {
    fn header() -> &'static str {
        "Date,Sales Rep,Bill Number,Amount,Payment Type,Outlet"
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.date_time),
            self.sales_rep_name.clone(),
            self.bill_number.clone(),
            self.amount.to_string(),
            self.payment_type.code().to_string(),
            self.outlet.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SalesTable(
    #[prop(into)] rows: Signal<Vec<SalesEntry>>,
    #[prop(into)] show_created_by: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <div class="empty-state">"No sales found"</div> }
        >
            <Table attr:id="sales-table" attr:style="width: 100%; min-width: 900px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Sales Rep"</TableHeaderCell>
                        <TableHeaderCell>"Bill Number"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Payment Type"</TableHeaderCell>
                        <TableHeaderCell>"Outlet"</TableHeaderCell>
                        <Show when=move || show_created_by.get()>
                            <TableHeaderCell>"Created By"</TableHeaderCell>
                        </Show>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|sale| sale.id
                        children=move |sale| {
                            let created_by = StoredValue::new(sale.created_by_label().to_string());
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
                                    <TableCell>
                                        <TableCellLayout>{sale.outlet}</TableCellLayout>
                                    </TableCell>
                                    <Show when=move || show_created_by.get()>
                                        <TableCell>
                                            <TableCellLayout>{created_by.get_value()}</TableCellLayout>
                                        </TableCell>
                                    </Show>
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
    use contracts::domain::a001_sales_entry::aggregate::PaymentType;

    fn sale() -> SalesEntry {
        SalesEntry {
            id: 7,
            sales_rep_username: "anita".into(),
            sales_rep_name: "Anita Rao".into(),
            outlet: "SKY_BLUE_WOMEN".into(),
            date_time: "2024-06-10T14:30:00".into(),
            bill_number: "BILL2406101430".into(),
            amount: 2500.0,
            payment_type: PaymentType::Cash,
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn csv_uses_literal_header_and_day_first_dates() {
        let csv = build_csv_content(&[sale()]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Sales Rep,Bill Number,Amount,Payment Type,Outlet")
        );
        assert_eq!(
            lines.next(),
            Some("10/06/2024,Anita Rao,BILL2406101430,2500,CASH,SKY_BLUE_WOMEN")
        );
    }

    #[test]
    fn search_matches_rendered_text() {
        let sale = sale();
        assert!(sale.matches_filter("anita"));
        assert!(sale.matches_filter("10/06/2024"));
        assert!(sale.matches_filter("unknown"));
        assert!(!sale.matches_filter("account"));
    }
}
