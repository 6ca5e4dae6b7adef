//! Uniform success envelope: `{ "success": true, "data": <payload> }`.
//!
//! Error envelopes are produced by [`crate::error::AppError`]; the two shapes
//! together form the complete external response contract.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Success with a human-readable note, used by create endpoints.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_success_omits_message() {
        let json = serde_json::to_value(ApiResponse::ok(json!({"id": "job_1"}))).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], "job_1");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_is_included_when_set() {
        let json =
            serde_json::to_value(ApiResponse::with_message("Job created successfully", json!({})))
                .unwrap();
        assert_eq!(json["message"], "Job created successfully");
    }
}
