//! Error types for the PhysioLab calculators

use thiserror::Error;

/// Message shown when a test cannot be computed from the supplied inputs
pub const INVALID_INPUTS_MESSAGE: &str = "One or more inputs are missing or invalid.";

/// Calculator error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unknown test: {0}")]
    UnknownTest(String),

    #[error("One or more inputs are missing or invalid: {}", fields.join(", "))]
    InvalidInputs { test_id: String, fields: Vec<String> },

    #[error("Test {0} produced a non-finite result")]
    NonFiniteResult(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CalcError {
    /// Offending field keys, if the error is tied to specific inputs
    pub fn fields(&self) -> &[String] {
        match self {
            CalcError::InvalidInputs { fields, .. } => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputs_lists_fields() {
        let err = CalcError::InvalidInputs {
            test_id: "rockport".to_string(),
            fields: vec!["age".to_string(), "walkTime".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "One or more inputs are missing or invalid: age, walkTime"
        );
        assert_eq!(err.fields().len(), 2);
    }

    #[test]
    fn test_other_errors_have_no_fields() {
        assert!(CalcError::UnknownTest("nope".to_string()).fields().is_empty());
    }
}
