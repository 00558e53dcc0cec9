use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Reason marker for a missing, null, or (after trimming) empty input.
pub const REASON_EMPTY_INPUT: &str = "empty input";
/// Reason marker for an input that is present but not a JSON string.
pub const REASON_NOT_A_STRING: &str = "input must be a string";
/// Reason marker for an input longer than the configured bound.
pub const REASON_EXCEEDS_MAX_LENGTH: &str = "exceeds maximum length";
/// Reason marker for an input matching a denylisted pattern.
pub const REASON_DISALLOWED_PATTERN: &str = "disallowed pattern";

/// The accept/reject decision returned to the caller.
///
/// Rejection is a normal, representable outcome, never an error path.
/// `reasons` holds the violated rule markers in rule order and is empty
/// exactly when the input was accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub accepted: bool,
    #[serde(
        rename = "sanitizedInput",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sanitized_input: Option<String>,
    pub reasons: Vec<String>,
}

impl ValidationOutcome {
    pub fn accepted(sanitized_input: impl Into<String>) -> Self {
        Self {
            accepted: true,
            sanitized_input: Some(sanitized_input.into()),
            reasons: Vec::new(),
        }
    }

    pub fn rejected(reasons: Vec<String>) -> Self {
        Self {
            accepted: false,
            sanitized_input: None,
            reasons,
        }
    }
}

/// Configuration fault raised while assembling a [`crate::policy::ValidationPolicy`].
///
/// Unlike a validation rejection this is a platform concern: the hosting
/// runtime surfaces it as an invocation failure, not as a 400 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyError {
    message: String,
}

impl PolicyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PolicyError {}

/// SHA-256 hex digest of the raw input value.
///
/// Emitted in log events so a rejected invocation can be correlated with
/// its dead-letter record without ever logging the payload itself.
pub fn payload_fingerprint(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
