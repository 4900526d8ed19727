//! Error types with fix suggestions

use std::time::Duration;

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors raised by the utility helpers themselves.
///
/// The pure string/collection/object helpers never raise domain errors;
/// these variants cover input validation and the async combinators'
/// deadline/supersession outcomes.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("KB-010: pad string must not be empty")]
    EmptyPadding,

    #[error("KB-020: invalid path syntax: '{path}'")]
    InvalidPath { path: String },

    #[error("KB-030: {message}")]
    Timeout { message: String, elapsed: Duration },

    #[error("KB-031: condition not met within {timeout:?}")]
    WaitForTimeout { timeout: Duration },

    #[error("KB-040: debounced call superseded by a later call")]
    DebounceSuperseded,
}

impl UtilError {
    /// Build a timeout error with the default or a caller-supplied message.
    pub fn timeout(elapsed: Duration, message: Option<&str>) -> Self {
        UtilError::Timeout {
            message: message
                .map(str::to_owned)
                .unwrap_or_else(|| format!("operation timed out after {elapsed:?}")),
            elapsed,
        }
    }

    /// True for deadline-style failures (`timeout` and `wait_for`).
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            UtilError::Timeout { .. } | UtilError::WaitForTimeout { .. }
        )
    }
}

impl FixSuggestion for UtilError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            UtilError::EmptyPadding => Some("Provide a pad string with at least one character"),
            UtilError::InvalidPath { .. } => {
                Some("Use dot-separated segments like 'a.b.c' (numeric segments index arrays)")
            }
            UtilError::Timeout { .. } => {
                Some("Increase the timeout or make the wrapped operation faster")
            }
            UtilError::WaitForTimeout { .. } => {
                Some("Increase the timeout, shorten the poll interval, or check the condition")
            }
            UtilError::DebounceSuperseded => {
                Some("Only the last call in a burst settles with the function's output")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_default_message() {
        let err = UtilError::timeout(Duration::from_millis(250), None);
        assert!(err.to_string().contains("timed out after"));
        assert!(err.is_timeout());
    }

    #[test]
    fn timeout_custom_message() {
        let err = UtilError::timeout(Duration::from_secs(1), Some("fetch took too long"));
        assert_eq!(err.to_string(), "KB-030: fetch took too long");
    }

    #[test]
    fn every_variant_has_a_suggestion() {
        let variants = [
            UtilError::EmptyPadding,
            UtilError::InvalidPath {
                path: "a..b".to_string(),
            },
            UtilError::timeout(Duration::from_secs(1), None),
            UtilError::WaitForTimeout {
                timeout: Duration::from_secs(5),
            },
            UtilError::DebounceSuperseded,
        ];
        for v in variants {
            assert!(v.fix_suggestion().is_some(), "missing suggestion for {v}");
        }
    }

    #[test]
    fn supersession_is_not_a_timeout() {
        assert!(!UtilError::DebounceSuperseded.is_timeout());
    }
}
