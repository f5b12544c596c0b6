//! Table cell for rupee amounts
//!
//! ```text
//! <TableCellMoney value=sale.amount />
//! ```

use super::number_format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned `₹` cell; negative values get the `--negative` modifier.
#[component]
pub fn TableCellMoney(
    value: f64,
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let class = if value < 0.0 {
        "table-cell-money table-cell-money--negative"
    } else {
        "table-cell-money"
    };
    let weight = if bold { "font-weight: 600;" } else { "" };

    view! {
        <TableCell>
            <TableCellLayout>
                <span class=class style=format!("display:block; text-align:right; {}", weight)>
                    {format_currency(value)}
                </span>
            </TableCellLayout>
        </TableCell>
    }
}
