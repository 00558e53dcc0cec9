use crate::contract::PolicyError;

/// Length bound applied when no override is configured.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 10_000;

/// Environment variable overriding the maximum input length.
pub const MAX_INPUT_LENGTH_ENV_VAR: &str = "VALIDATOR_MAX_INPUT_LENGTH";
/// Environment variable overriding the denylist (comma-separated patterns).
pub const DENYLIST_ENV_VAR: &str = "VALIDATOR_DENYLIST";

/// Explicit validation configuration.
///
/// The bound and denylist are deployment choices, so the rules take them
/// as an argument instead of baking in constants. Textual patterns match
/// case-insensitively; the NUL byte is denied regardless of the denylist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub max_input_length: usize,
    pub denylist: Vec<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            denylist: default_denylist(),
        }
    }
}

pub fn default_denylist() -> Vec<String> {
    ["<script", "</script", "javascript:", "\u{0}"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl ValidationPolicy {
    /// Build a policy from raw override strings, falling back to defaults.
    ///
    /// The overrides are the untrimmed values of the corresponding
    /// environment variables; `None` means the variable was unset.
    pub fn from_overrides(
        max_input_length: Option<&str>,
        denylist: Option<&str>,
    ) -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Some(raw) = max_input_length {
            let parsed = raw.trim().parse::<usize>().map_err(|_| {
                PolicyError::new(format!(
                    "{MAX_INPUT_LENGTH_ENV_VAR} must be a positive integer, got '{raw}'"
                ))
            })?;
            if parsed == 0 {
                return Err(PolicyError::new(format!(
                    "{MAX_INPUT_LENGTH_ENV_VAR} must be a positive integer"
                )));
            }
            policy.max_input_length = parsed;
        }

        if let Some(raw) = denylist {
            let patterns: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|pattern| !pattern.is_empty())
                .map(str::to_string)
                .collect();
            if patterns.is_empty() {
                return Err(PolicyError::new(format!(
                    "{DENYLIST_ENV_VAR} must list at least one pattern"
                )));
            }
            policy.denylist = patterns;
        }

        Ok(policy)
    }

    /// Build a policy from the process environment.
    pub fn from_env() -> Result<Self, PolicyError> {
        let max_input_length = std::env::var(MAX_INPUT_LENGTH_ENV_VAR).ok();
        let denylist = std::env::var(DENYLIST_ENV_VAR).ok();
        Self::from_overrides(max_input_length.as_deref(), denylist.as_deref())
    }
}
