mod outlet;

pub use outlet::{OutletSelection, ALL_OUTLETS, OUTLETS};

use serde::{Deserialize, Serialize};

/// Envelope returned by every mutating endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Splits the envelope into its payload or the server's rejection message.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "API call failed".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_envelope_carries_message() {
        let raw = r#"{"success":false,"message":"Bill number already exists"}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            envelope.into_result().unwrap_err(),
            "Bill number already exists"
        );
    }

    #[test]
    fn accepted_envelope_without_data() {
        let raw = r#"{"success":true,"message":"User deleted successfully"}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(envelope.into_result().unwrap().is_none());
    }

    /// Payload type with no `Default`, as the frontend decodes generically.
    #[derive(Debug, PartialEq, Deserialize)]
    struct Created {
        id: i64,
    }

    fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> ApiResponse<T> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn payload_without_default_decodes_generically() {
        let envelope: ApiResponse<Created> = decode(r#"{"success":true,"data":{"id":7}}"#);
        assert_eq!(envelope.into_result().unwrap(), Some(Created { id: 7 }));

        let bare: ApiResponse<Created> = decode(r#"{"success":true}"#);
        assert!(bare.message.is_none());
        assert!(bare.into_result().unwrap().is_none());
    }
}
