use serde_json::{json, Value};

use crate::handlers::respond::{json_response, ApiGatewayResponse};

/// Fixed success response for any event; the endpoint has no decision logic.
pub fn handle_hello_event(_event: Value) -> ApiGatewayResponse {
    json_response(200, json!({"message": "hello world"}))
}
