use crate::domain::a001_sales_entry::aggregate::{day_end, day_start, SalesQuery};
use crate::shared::date_window::format_date_input;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of sales listed under "Recent Sales".
pub const RECENT_SALES_LIMIT: usize = 10;

/// Totals for the selected range. The server may send `null` for empty ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sales: Option<f64>,
    #[serde(default)]
    pub total_expenses: Option<f64>,
    #[serde(default)]
    pub net_profit: Option<f64>,
    #[serde(default)]
    pub total_transactions: Option<i64>,
}

impl DashboardStats {
    pub fn total_sales(&self) -> f64 {
        self.total_sales.unwrap_or_default()
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses.unwrap_or_default()
    }

    pub fn net_profit(&self) -> f64 {
        self.net_profit.unwrap_or_default()
    }

    pub fn total_transactions(&self) -> i64 {
        self.total_transactions.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFilter {
    pub from_date: String,
    pub to_date: String,
}

impl DashboardFilter {
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            from_date: format_date_input(day),
            to_date: format_date_input(day),
        }
    }

    pub fn to_query(&self, outlet: Option<String>) -> SalesQuery {
        SalesQuery {
            from_date: day_start(&self.from_date),
            to_date: day_end(&self.to_date),
            outlet,
            ..SalesQuery::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_totals_read_as_zero() {
        let raw = r#"{"totalSales":null,"totalExpenses":250.5,"netProfit":-250.5,"totalTransactions":null}"#;
        let stats: DashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_sales(), 0.0);
        assert_eq!(stats.total_expenses(), 250.5);
        assert_eq!(stats.total_transactions(), 0);
    }

    #[test]
    fn query_string_uses_day_bounds() {
        let filter = DashboardFilter::for_day(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let query = serde_qs::to_string(&filter.to_query(Some("SKY_BLUE_WOMEN".into()))).unwrap();
        assert!(query.starts_with("fromDate=2024-06-10T00"));
        assert!(query.contains("&toDate=2024-06-10T23"));
        assert!(query.ends_with("&outlet=SKY_BLUE_WOMEN"));
    }
}
