use serde_json::{json, Value};
use validation_core::contract::payload_fingerprint;
use validation_core::policy::ValidationPolicy;
use validation_core::rules::evaluate;

use crate::handlers::respond::{json_response, malformed_request_response, ApiGatewayResponse};
use crate::telemetry::{log_error_event, log_event};

const COMPONENT: &str = "validate_handler";

/// Decide one validation request.
///
/// Accepts either a bare JSON object or an API-Gateway-shaped envelope
/// whose `body` carries the object. Rejection is returned as data with a
/// 400 status; only transport faults and misconfiguration use the error
/// envelope. The handler itself never writes anywhere besides stderr —
/// retries and dead-letter delivery belong to the hosting platform.
pub fn handle_validate_event(event: Value, policy: &ValidationPolicy) -> ApiGatewayResponse {
    let payload = match normalize_apigw_event(event) {
        Ok(value) => value,
        Err(message) => {
            log_error_event(COMPONENT, "malformed_request", json!({"message": message}));
            return malformed_request_response(&message);
        }
    };

    let input = payload.get("input");
    let fingerprint = input
        .and_then(Value::as_str)
        .map(payload_fingerprint);

    log_event(
        COMPONENT,
        "request_received",
        json!({
            "payload_fingerprint": fingerprint.as_deref(),
            "input_present": input.is_some(),
        }),
    );

    let evaluation = evaluate(input, policy);
    if evaluation.outcome.accepted {
        log_event(
            COMPONENT,
            "input_accepted",
            json!({
                "payload_fingerprint": fingerprint.as_deref(),
                "sanitized_length": evaluation
                    .outcome
                    .sanitized_input
                    .as_deref()
                    .map(str::len),
            }),
        );
        json_response(200, &evaluation.outcome)
    } else {
        log_event(
            COMPONENT,
            "input_rejected",
            json!({
                "payload_fingerprint": fingerprint.as_deref(),
                "reasons": &evaluation.outcome.reasons,
                "matched_pattern": evaluation.matched_pattern.as_deref(),
            }),
        );
        json_response(400, &evaluation.outcome)
    }
}

fn normalize_apigw_event(event: Value) -> Result<Value, String> {
    let Some(object) = event.as_object() else {
        return Err("Request payload must be a JSON object".to_string());
    };

    let Some(body) = object.get("body") else {
        return Ok(event);
    };

    let payload = match body {
        Value::Null => json!({}),
        Value::Object(_) => body.clone(),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|error| format!("Malformed JSON body: {error}"))?
        }
        _ => return Err("Request body must be a JSON object".to_string()),
    };

    if !payload.is_object() {
        return Err("Request body must be a JSON object".to_string());
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use validation_core::contract::ValidationOutcome;

    use super::*;

    fn parse_outcome(response: &ApiGatewayResponse) -> ValidationOutcome {
        serde_json::from_str(&response.body).expect("response body should parse")
    }

    #[test]
    fn accepts_well_formed_input_from_a_bare_event() {
        let response =
            handle_validate_event(json!({"input": "test"}), &ValidationPolicy::default());

        assert_eq!(response.status_code, 200);
        assert_eq!(parse_outcome(&response), ValidationOutcome::accepted("test"));
    }

    #[test]
    fn unwraps_a_string_body_envelope() {
        let response = handle_validate_event(
            json!({"body": "{\"input\": \"\"}"}),
            &ValidationPolicy::default(),
        );

        assert_eq!(response.status_code, 400);
        let outcome = parse_outcome(&response);
        assert_eq!(outcome.reasons, vec!["empty input".to_string()]);
    }

    #[test]
    fn unwraps_an_object_body_envelope() {
        let response = handle_validate_event(
            json!({"body": {"input": "  trimmed  "}}),
            &ValidationPolicy::default(),
        );

        assert_eq!(response.status_code, 200);
        assert_eq!(
            parse_outcome(&response).sanitized_input,
            Some("trimmed".to_string())
        );
    }

    #[test]
    fn null_body_rejects_as_missing_input() {
        let response =
            handle_validate_event(json!({"body": null}), &ValidationPolicy::default());

        assert_eq!(response.status_code, 400);
        assert_eq!(
            parse_outcome(&response).reasons,
            vec!["empty input".to_string()]
        );
    }

    #[test]
    fn rejects_denylisted_input_with_the_fixed_marker() {
        let response = handle_validate_event(
            json!({"input": "<script>alert(1)</script>"}),
            &ValidationPolicy::default(),
        );

        assert_eq!(response.status_code, 400);
        assert_eq!(
            parse_outcome(&response).reasons,
            vec!["disallowed pattern".to_string()]
        );
    }

    #[test]
    fn non_object_event_is_a_transport_fault() {
        let response =
            handle_validate_event(json!(["not", "an", "object"]), &ValidationPolicy::default());

        assert_eq!(response.status_code, 400);
        let body: Value =
            serde_json::from_str(&response.body).expect("error body should be JSON");
        assert_eq!(body["error"], json!("malformed_request"));
    }

    #[test]
    fn unparsable_string_body_is_a_transport_fault() {
        let response = handle_validate_event(
            json!({"body": "input=test"}),
            &ValidationPolicy::default(),
        );

        assert_eq!(response.status_code, 400);
        let body: Value =
            serde_json::from_str(&response.body).expect("error body should be JSON");
        assert_eq!(body["error"], json!("malformed_request"));
        assert!(body["message"]
            .as_str()
            .expect("message should be a string")
            .starts_with("Malformed JSON body"));
    }

    #[test]
    fn non_object_body_is_a_transport_fault() {
        let array_body =
            handle_validate_event(json!({"body": [1, 2, 3]}), &ValidationPolicy::default());
        let string_payload = handle_validate_event(
            json!({"body": "\"bare string\""}),
            &ValidationPolicy::default(),
        );

        assert_eq!(array_body.status_code, 400);
        assert_eq!(string_payload.status_code, 400);
    }

    #[test]
    fn policy_bound_applies_at_the_handler_boundary() {
        let policy = ValidationPolicy::from_overrides(Some("8"), None)
            .expect("policy should build");
        let response = handle_validate_event(json!({"input": "123456789"}), &policy);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            parse_outcome(&response).reasons,
            vec!["exceeds maximum length".to_string()]
        );
    }
}
