//! Error taxonomy for calls to the showroom backend.

use thiserror::Error;

const DEFAULT_FAILURE: &str = "API call failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from any endpoint; the session must end.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    /// Non-2xx status; `message` comes from the response body when present.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx envelope with `success == false`.
    #[error("{0}")]
    Rejected(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected server response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Maps an HTTP status and raw body onto the taxonomy. `Ok` for 2xx.
pub fn classify_status(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Status {
            status,
            message: body_message(body).unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        }),
    }
}

/// `message` field of a JSON error body, if any.
pub fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ApiResponse;

    #[test]
    fn unauthorized_status() {
        assert_eq!(classify_status(401, ""), Err(ApiError::Unauthorized));
        assert!(classify_status(401, "{}").unwrap_err().is_unauthorized());
    }

    #[test]
    fn error_body_message_is_surfaced() {
        let err = classify_status(400, r#"{"success":false,"message":"Bill number already exists"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Bill number already exists");
        assert_eq!(
            classify_status(500, "<html>").unwrap_err(),
            ApiError::Status {
                status: 500,
                message: "API call failed".into()
            }
        );
    }

    #[test]
    fn success_range_passes() {
        assert!(classify_status(200, "").is_ok());
        assert!(classify_status(204, "").is_ok());
    }

    #[test]
    fn rejected_envelope_maps_to_rejected() {
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"message":"Outlet closed"}"#).unwrap();
        let err = envelope.into_result().map_err(ApiError::Rejected).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Outlet closed".into()));
    }
}
