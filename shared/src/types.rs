//! API request and response types

use crate::errors::CalcError;
use crate::inputs::InputValues;
use crate::nutrition::{
    macro_totals, macro_totals_by_meal, nutrient_totals, rda_progress, total_calories,
    MacroTotals, MealType, RdaProgress, TrackedFood, DEFAULT_NUTRIENTS,
};
use crate::units::Vo2Unit;
use crate::validation::validate_portion;
use crate::vo2max::{Category, Evaluation, InputField, Rating, TestDefinition};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Offending input keys, in form order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

// ============================================================================
// VO₂max
// ============================================================================

/// Category listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Category,
    pub name: String,
    pub test_count: usize,
    /// Test selected when the category is opened
    pub default_test: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestListQuery {
    pub category: Option<Category>,
}

/// Test listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummary {
    pub id: String,
    pub label: String,
    pub category: Category,
    pub unit: Vo2Unit,
}

impl From<&TestDefinition> for TestSummary {
    fn from(test: &TestDefinition) -> Self {
        Self {
            id: test.id.to_string(),
            label: test.label.to_string(),
            category: test.category,
            unit: test.unit,
        }
    }
}

/// Everything a client needs to render a test form
#[derive(Debug, Clone, Serialize)]
pub struct TestDetailResponse {
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub formula_text: &'static str,
    pub unit: Vo2Unit,
    pub fields: Vec<InputField>,
}

impl From<&TestDefinition> for TestDetailResponse {
    fn from(test: &TestDefinition) -> Self {
        Self {
            id: test.id,
            label: test.label,
            category: test.category,
            description: test.description,
            formula_text: test.formula_text,
            unit: test.unit,
            fields: test.input_fields(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComputeRequest {
    #[serde(default)]
    pub inputs: InputValues,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub test_id: String,
    pub value: f64,
    /// Value rounded to the configured display precision
    pub formatted: String,
    pub unit: Vo2Unit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_label: Option<String>,
}

impl ComputeResponse {
    pub fn from_evaluation(evaluation: Evaluation, decimal_places: usize) -> Self {
        Self {
            formatted: evaluation.formatted(decimal_places),
            rating_label: evaluation.rating.map(|r| r.label().to_string()),
            test_id: evaluation.test_id,
            value: evaluation.value,
            unit: evaluation.unit,
            rating: evaluation.rating,
        }
    }
}

/// Rating lookup query
///
/// `gender` follows the form rule: only `male` selects the male table.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RatingQuery {
    pub gender: Option<String>,
    #[validate(
        custom(function = "validate_finite"),
        range(min = 0.0, max = 120.0, message = "Age must be between 0 and 120")
    )]
    pub age: f64,
    #[validate(
        custom(function = "validate_finite"),
        range(min = 0.0, max = 100.0, message = "VO₂max must be between 0 and 100")
    )]
    pub vo2max: f64,
}

/// NaN slips past `range`, which only rejects values that compare outside it
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        return Ok(());
    }
    let mut err = ValidationError::new("finite");
    err.message = Some(Cow::Borrowed("Must be a finite number"));
    Err(err)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    pub gender: String,
    pub age: f64,
    pub vo2max: f64,
    pub rating: Rating,
    pub label: String,
}

// ============================================================================
// Nutrition
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdaEntry {
    pub nutrient: String,
    pub rda: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionSummaryRequest {
    #[serde(default)]
    pub items: Vec<TrackedFood>,
    /// Nutrients to total; the default selection when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Vec<String>>,
}

impl NutritionSummaryRequest {
    /// Requested nutrient keys, or the default selection
    pub fn nutrient_keys(&self) -> Vec<String> {
        match &self.nutrients {
            Some(keys) => keys.clone(),
            None => DEFAULT_NUTRIENTS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Totals, calories, RDA progress and macros for the request's foods
    pub fn summarize(&self) -> Result<NutritionSummaryResponse, CalcError> {
        for item in &self.items {
            validate_portion(item.portion)
                .map_err(|msg| CalcError::InvalidRequest(format!("Food {}: {}", item.id, msg)))?;
        }

        let keys = self.nutrient_keys();
        let totals = nutrient_totals(&self.items, &keys);

        Ok(NutritionSummaryResponse {
            item_count: self.items.len(),
            total_calories: total_calories(&self.items),
            rda_progress: rda_progress(&totals, &keys),
            macros: macro_totals(&self.items),
            macros_by_meal: macro_totals_by_meal(&self.items),
            totals,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionSummaryResponse {
    pub item_count: usize,
    pub total_calories: f64,
    pub totals: BTreeMap<String, f64>,
    pub rda_progress: Vec<RdaProgress>,
    pub macros: MacroTotals,
    pub macros_by_meal: BTreeMap<MealType, MacroTotals>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vo2max::find_test;

    #[test]
    fn test_error_response_omits_empty_fields() {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: "Unknown test".to_string(),
                field: None,
                fields: None,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["error"].get("field").is_none());
        assert!(json["error"].get("fields").is_none());
    }

    #[test]
    fn test_detail_lists_fields_in_form_order() {
        let detail = TestDetailResponse::from(find_test("rockport").unwrap());
        let keys: Vec<_> = detail.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["age", "weight", "gender", "walkTime", "endingHR"]);
    }

    #[test]
    fn test_compute_request_accepts_missing_inputs() {
        let req: ComputeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.inputs.is_empty());

        let req: ComputeRequest =
            serde_json::from_str(r#"{"inputs":{"distance":"1.5"}}"#).unwrap();
        assert_eq!(req.inputs.number("distance"), Some(1.5));
    }

    #[test]
    fn test_rating_query_ranges() {
        let ok = RatingQuery { gender: None, age: 30.0, vo2max: 45.0 };
        assert!(ok.validate().is_ok());

        let bad = RatingQuery { gender: None, age: -1.0, vo2max: 45.0 };
        assert!(bad.validate().is_err());

        let bad = RatingQuery { gender: None, age: 30.0, vo2max: 250.0 };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("vo2max"));
    }

    #[test]
    fn test_rating_query_rejects_nan() {
        let bad = RatingQuery { gender: None, age: f64::NAN, vo2max: f64::NAN };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("vo2max"));
        assert_eq!(fields["age"][0].code, "finite");

        let bad = RatingQuery { gender: None, age: 30.0, vo2max: f64::INFINITY };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_compute_response_from_evaluation() {
        let evaluation = Evaluation {
            test_id: "friend".to_string(),
            value: 38.456,
            unit: Vo2Unit::MlPerKgPerMin,
            rating: Some(Rating::BelowAverage),
        };
        let response = ComputeResponse::from_evaluation(evaluation, 1);
        assert_eq!(response.formatted, "38.5");
        assert_eq!(response.rating_label.as_deref(), Some("Below average"));
    }

    #[test]
    fn test_summary_request_defaults() {
        let req: NutritionSummaryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.nutrient_keys(), DEFAULT_NUTRIENTS.to_vec());

        let summary = req.summarize().unwrap();
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.rda_progress.len(), 4);
    }

    #[test]
    fn test_summary_rejects_oversized_portion() {
        let req: NutritionSummaryRequest =
            serde_json::from_str(r#"{"items":[{"id":3,"name":"Rice","portion":500}]}"#).unwrap();
        assert!(matches!(req.summarize(), Err(CalcError::InvalidRequest(_))));
    }

    #[test]
    fn test_test_list_query_category() {
        let query: TestListQuery = serde_json::from_str(r#"{"category":"nonexercise"}"#).unwrap();
        assert_eq!(query.category, Some(Category::NonExercise));
    }
}
