use contracts::system::users::{CreateUserDto, User};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

/// Fetch all users
pub async fn fetch_users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    api.get_json::<_, ()>("/users", None).await
}

/// Sales staff of one outlet, for the employee pickers
pub async fn fetch_sales_reps(api: &ApiClient, outlet: &str) -> Result<Vec<User>, ApiError> {
    let path = format!("/users/sales-reps?outlet={}", urlencoding::encode(outlet));
    api.get_json::<_, ()>(&path, None).await
}

pub async fn create_user(api: &ApiClient, dto: &CreateUserDto) -> Result<Option<User>, ApiError> {
    api.post_json("/users", dto).await
}

/// Returns the server's confirmation message, if any
pub async fn delete_user(api: &ApiClient, id: i64) -> Result<Option<String>, ApiError> {
    api.delete(&format!("/users/{}", id)).await
}
