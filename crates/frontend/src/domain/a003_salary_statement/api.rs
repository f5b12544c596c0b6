use contracts::domain::a003_salary_statement::aggregate::{SalaryStatement, SalaryStatementRequest};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

/// `POST /salary/statement?<request>`; the server computes the figures.
pub async fn generate_statement(
    api: &ApiClient,
    request: &SalaryStatementRequest,
) -> Result<SalaryStatement, ApiError> {
    api.post_query("/salary/statement", request)
        .await?
        .ok_or_else(|| ApiError::Decode("Salary statement missing from response".to_string()))
}
