use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_error::{body_message, ApiError};

/// `POST /auth/signin`. A rejected login is reported with the server's
/// message and never treated as an expired session.
pub async fn login(
    api_base: &str,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/auth/signin", api_base))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status,
            message: body_message(&body).unwrap_or_else(|| "Login failed".to_string()),
        });
    }

    serde_json::from_str::<LoginResponse>(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
