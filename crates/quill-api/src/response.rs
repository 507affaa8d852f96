//! Success response envelope.
//!
//! Every successful response is wrapped as `{message, data}`. The wrap
//! happens here at the handler boundary, never inside the services.

use axum::Json;
use serde::Serialize;

/// Uniform success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

/// Wrap a payload in the `{message, data}` envelope.
pub fn respond<T: Serialize>(message: &str, data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        message: message.to_string(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let Json(body) = respond("Fetched note successfully", serde_json::json!({"id": 1}));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Fetched note successfully");
        assert_eq!(value["data"]["id"], 1);
    }
}
