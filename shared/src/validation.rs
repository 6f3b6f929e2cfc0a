//! Input validation functions
//!
//! The calculators never fail on bad input, they just produce no result.
//! This module explains *why* there is no result, so callers can point the
//! user at the offending fields. Request DTOs in [`crate::types`] use the
//! `validator` derive for their range checks.

use crate::errors::CalcError;
use crate::inputs::InputValues;
use crate::vo2max::registry::{test_definitions, CommonField, TestDefinition};

/// Numeric fields of `test` that are missing or have no numeric prefix
///
/// Keys are returned in form order.
pub fn invalid_fields(test: &TestDefinition, inputs: &InputValues) -> Vec<String> {
    test.numeric_keys()
        .filter(|key| inputs.number(key).is_none())
        .map(str::to_string)
        .collect()
}

/// Check that every numeric field of `test` parses
pub fn check_inputs(test: &TestDefinition, inputs: &InputValues) -> Result<(), CalcError> {
    let fields = invalid_fields(test, inputs);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(CalcError::InvalidInputs {
            test_id: test.id.to_string(),
            fields,
        })
    }
}

/// Validate a food portion multiplier
pub fn validate_portion(portion: f64) -> Result<(), String> {
    if portion.is_nan() || portion.is_infinite() {
        return Err("Portion must be a valid number".to_string());
    }
    if portion < 0.0 {
        return Err("Portion cannot be negative".to_string());
    }
    if portion > 100.0 {
        return Err("Portion unreasonably large".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

const COMMON_FIELDS: [CommonField; 5] = [
    CommonField::Age,
    CommonField::Weight,
    CommonField::Gender,
    CommonField::Height,
    CommonField::PaRating,
];

/// Map an input key to the label shown on the form
///
/// Unknown keys are returned unchanged.
pub fn get_field_display_label(field_name: &str) -> &str {
    if let Some(common) = COMMON_FIELDS.iter().find(|f| f.key() == field_name) {
        return common.label();
    }
    test_definitions()
        .iter()
        .flat_map(|test| test.additional_fields.iter())
        .find(|field| field.key == field_name)
        .map(|field| field.label)
        .unwrap_or(field_name)
}

/// Convert a list of input keys to user-friendly labels
pub fn get_missing_fields_labels(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|f| get_field_display_label(f).to_string())
        .collect()
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vo2max::find_test;
    use proptest::prelude::*;

    #[test]
    fn test_invalid_fields_in_form_order() {
        let test = find_test("rockport").unwrap();
        let inputs = InputValues::new()
            .with("age", "40")
            .with("weight", "heavy")
            .with("gender", "male")
            .with("walkTime", "14");

        assert_eq!(invalid_fields(test, &inputs), vec!["weight", "endingHR"]);
    }

    #[test]
    fn test_gender_is_never_invalid() {
        let test = find_test("queens_step").unwrap();
        let inputs = InputValues::new().with("recoveryHR", "150");
        assert!(check_inputs(test, &inputs).is_ok());
    }

    #[test]
    fn test_check_inputs_error() {
        let test = find_test("milfit").unwrap();
        let err = check_inputs(test, &InputValues::new()).unwrap_err();
        assert_eq!(err.fields(), ["weight", "watts"]);
    }

    #[test]
    fn test_check_inputs_agrees_with_compute() {
        let inputs = InputValues::new()
            .with("age", "30")
            .with("weight", "70")
            .with("speed", "3.2")
            .with("grade", "0.1");
        for test in test_definitions() {
            assert_eq!(
                check_inputs(test, &inputs).is_ok(),
                test.compute(&inputs).is_some(),
                "{}",
                test.id
            );
        }
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("paRating"), "Physical Activity Rating (0-7)");
        assert_eq!(get_field_display_label("W_peak"), "Peak Workload (watts)");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
        assert_eq!(
            get_missing_fields_labels(&["age".to_string(), "endingHR".to_string()]),
            vec!["Age (years)", "Ending HR (bpm)"]
        );
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("runTime", "is required");
        assert_eq!(err.user_message(), "Run Time (minutes): is required");
    }

    #[test]
    fn test_validate_portion() {
        assert!(validate_portion(1.0).is_ok());
        assert!(validate_portion(0.0).is_ok());
        assert!(validate_portion(-1.0).is_err());
        assert!(validate_portion(f64::NAN).is_err());
        assert!(validate_portion(1000.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_portion_range(portion in 0.0f64..=100.0) {
            prop_assert!(validate_portion(portion).is_ok());
        }
    }
}
