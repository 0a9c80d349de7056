//! Error types for the crate's fallible surfaces.
//!
//! Geometry resolution itself is total: kinds are closed enums, every query
//! returns a well-defined number, and no resolver can fail. Errors exist only
//! at the edges a DSL front end or host touches: parsing symbolic names and
//! loading configuration ([`crate::config::ConfigError`]).

use thiserror::Error;

/// A symbolic name that does not match any member of a closed kind set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{given}' (valid values: {valid})")]
pub struct UnknownNameError {
    /// What was being named ("anchor", "horizontal edge", ...)
    pub kind: &'static str,
    /// The name that failed to parse
    pub given: String,
    /// Comma-separated list of accepted names
    pub valid: &'static str,
}

impl UnknownNameError {
    pub(crate) fn new(kind: &'static str, given: impl Into<String>, valid: &'static str) -> Self {
        Self {
            kind,
            given: given.into(),
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_lists_valid_names() {
        let err = UnknownNameError::new("anchor", "middle", "top-left, center");
        let message = err.to_string();
        assert!(message.contains("unknown anchor 'middle'"));
        assert!(message.contains("top-left, center"));
    }
}
