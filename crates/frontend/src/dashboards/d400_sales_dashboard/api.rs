use contracts::dashboards::d400_sales_dashboard::dto::DashboardStats;
use contracts::domain::a001_sales_entry::aggregate::SalesQuery;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

/// Totals for the range and outlet in `query`.
pub async fn fetch_stats(api: &ApiClient, query: &SalesQuery) -> Result<DashboardStats, ApiError> {
    api.get_json("/sales/dashboard-stats", Some(query)).await
}
