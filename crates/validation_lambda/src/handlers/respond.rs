use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

pub fn json_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

pub fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

/// 400 for a transport-level fault, distinct from a validation rejection.
pub fn malformed_request_response(message: &str) -> ApiGatewayResponse {
    error_response(
        400,
        json!({
            "error": "malformed_request",
            "message": message,
        }),
    )
}

/// 500 for a broken deployment configuration.
pub fn misconfiguration_response(message: &str) -> ApiGatewayResponse {
    error_response(
        500,
        json!({
            "error": "misconfiguration",
            "message": message,
        }),
    )
}
