use serde_json::json;

/// Emit one structured log line on stderr for the hosting platform's
/// log sink to capture.
pub fn log_event(component: &str, event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

pub fn log_error_event(component: &str, event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
