use serde_json::Value;

use crate::contract::{
    ValidationOutcome, REASON_DISALLOWED_PATTERN, REASON_EMPTY_INPUT, REASON_EXCEEDS_MAX_LENGTH,
    REASON_NOT_A_STRING,
};
use crate::policy::ValidationPolicy;

/// Result of running the rule pipeline over one input value.
///
/// `matched_pattern` carries the concrete denylist hit for telemetry; the
/// response body only ever exposes the fixed reason marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: ValidationOutcome,
    pub matched_pattern: Option<String>,
}

impl Evaluation {
    fn rejected(reasons: Vec<String>) -> Self {
        Self {
            outcome: ValidationOutcome::rejected(reasons),
            matched_pattern: None,
        }
    }
}

/// Deterministic, idempotent normalization applied before any rule runs.
pub fn normalize(input: &str) -> &str {
    input.trim()
}

/// Decide whether one untrusted input value is well-formed and safe.
///
/// The value is untyped at the boundary since it arrives over a transport
/// this code does not control. Bad input is a representable outcome, never
/// an error: structural faults (missing, null, non-string, empty) reject
/// immediately, everything else collects violations in rule order.
pub fn evaluate(value: Option<&Value>, policy: &ValidationPolicy) -> Evaluation {
    let Some(value) = value else {
        return Evaluation::rejected(vec![REASON_EMPTY_INPUT.to_string()]);
    };

    if value.is_null() {
        return Evaluation::rejected(vec![REASON_EMPTY_INPUT.to_string()]);
    }

    let Some(raw) = value.as_str() else {
        return Evaluation::rejected(vec![REASON_NOT_A_STRING.to_string()]);
    };

    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Evaluation::rejected(vec![REASON_EMPTY_INPUT.to_string()]);
    }

    let mut reasons = Vec::new();

    if normalized.len() > policy.max_input_length {
        reasons.push(REASON_EXCEEDS_MAX_LENGTH.to_string());
    }

    let matched_pattern = find_denied_pattern(normalized, &policy.denylist);
    if matched_pattern.is_some() {
        reasons.push(REASON_DISALLOWED_PATTERN.to_string());
    }

    if reasons.is_empty() {
        Evaluation {
            outcome: ValidationOutcome::accepted(normalized),
            matched_pattern: None,
        }
    } else {
        Evaluation {
            outcome: ValidationOutcome::rejected(reasons),
            matched_pattern,
        }
    }
}

/// First denylist pattern found in the input, if any.
///
/// Textual patterns match case-insensitively. The NUL byte is always
/// denied, even when an override denylist omits it.
pub fn find_denied_pattern(input: &str, denylist: &[String]) -> Option<String> {
    if input.contains('\u{0}') {
        return Some("\u{0}".to_string());
    }

    let haystack = input.to_lowercase();
    denylist
        .iter()
        .find(|pattern| !pattern.is_empty() && haystack.contains(&pattern.to_lowercase()))
        .cloned()
}
