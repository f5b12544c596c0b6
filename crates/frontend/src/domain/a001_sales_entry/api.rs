use contracts::domain::a001_sales_entry::aggregate::{NewSalesEntry, SalesEntry, SalesQuery};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

pub async fn fetch_sales(api: &ApiClient, query: &SalesQuery) -> Result<Vec<SalesEntry>, ApiError> {
    api.get_json("/sales", Some(query)).await
}

pub async fn create_sale(
    api: &ApiClient,
    entry: &NewSalesEntry,
) -> Result<Option<SalesEntry>, ApiError> {
    api.post_json("/sales", entry).await
}
