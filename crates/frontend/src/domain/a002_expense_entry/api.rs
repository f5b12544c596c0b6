use contracts::domain::a002_expense_entry::aggregate::{
    ExpenseEntry, ExpenseQuery, NewExpenseEntry,
};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

pub async fn fetch_expenses(
    api: &ApiClient,
    query: &ExpenseQuery,
) -> Result<Vec<ExpenseEntry>, ApiError> {
    api.get_json("/expenses", Some(query)).await
}

pub async fn create_expense(
    api: &ApiClient,
    entry: &NewExpenseEntry,
) -> Result<Option<ExpenseEntry>, ApiError> {
    api.post_json("/expenses", entry).await
}
