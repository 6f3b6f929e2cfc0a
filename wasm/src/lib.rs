//! PhysioLab WASM Module
//!
//! Browser bindings for the calculators, so the pages compute with the
//! same code as the API. Structured values cross the boundary as JSON
//! strings.

use physiolab_shared::errors::{CalcError, INVALID_INPUTS_MESSAGE};
use physiolab_shared::inputs::{Gender, InputValues};
use physiolab_shared::types::{ComputeResponse, NutritionSummaryRequest, TestDetailResponse};
use physiolab_shared::validation::ValidationError;
use physiolab_shared::vo2max::{find_test, rating, test_definitions};
use wasm_bindgen::prelude::*;

/// Decimal places shown on the calculator pages
const DISPLAY_DECIMALS: usize = 2;

/// All test definitions with their form fields, as JSON
#[wasm_bindgen]
pub fn list_tests() -> String {
    let tests: Vec<TestDetailResponse> = test_definitions().iter().map(TestDetailResponse::from).collect();
    serde_json::to_string(&tests).unwrap_or_else(|_| "[]".to_string())
}

/// Raw estimate for a test, `undefined` when it cannot be computed
///
/// `inputs_json` is an object of form values keyed by field name.
#[wasm_bindgen]
pub fn compute_vo2max(test_id: &str, inputs_json: &str) -> Option<f64> {
    let test = find_test(test_id)?;
    let inputs: InputValues = serde_json::from_str(inputs_json).ok()?;
    test.compute(&inputs)
}

/// Compute, format and rate a test; returns the result as JSON
///
/// Throws a message naming the offending fields when inputs are invalid,
/// or when they drive the formula to a non-finite value.
#[wasm_bindgen]
pub fn evaluate_vo2max(test_id: &str, inputs_json: &str) -> Result<String, JsValue> {
    evaluate_json(test_id, inputs_json).map_err(|msg| JsValue::from_str(&msg))
}

/// Rating label for a relative VO₂max value
///
/// Only `"male"` selects the male norms.
#[wasm_bindgen]
pub fn get_rating(gender: Option<String>, age: f64, vo2max: f64) -> String {
    rating::get_rating(Gender::from_input(gender.as_deref()), age, vo2max)
        .label()
        .to_string()
}

/// Food tracker summary for a `{items, nutrients?}` request, as JSON
#[wasm_bindgen]
pub fn summarize_nutrition(request_json: &str) -> Result<String, JsValue> {
    summarize_json(request_json).map_err(|msg| JsValue::from_str(&msg))
}

fn evaluate_json(test_id: &str, inputs_json: &str) -> Result<String, String> {
    let test = find_test(test_id).ok_or_else(|| CalcError::UnknownTest(test_id.to_string()).to_string())?;
    let inputs: InputValues = serde_json::from_str(inputs_json).map_err(|e| e.to_string())?;

    let evaluation = test.evaluate_checked(&inputs).map_err(|err| match err {
        CalcError::InvalidInputs { fields, .. } => invalid_inputs_message(&fields),
        other => other.to_string(),
    })?;

    let response = ComputeResponse::from_evaluation(evaluation, DISPLAY_DECIMALS);
    serde_json::to_string(&response).map_err(|e| e.to_string())
}

fn invalid_inputs_message(fields: &[String]) -> String {
    let details: Vec<String> = fields
        .iter()
        .map(|field| ValidationError::new(field, "missing or invalid").user_message())
        .collect();
    format!("{} {}", INVALID_INPUTS_MESSAGE, details.join("; "))
}

fn summarize_json(request_json: &str) -> Result<String, String> {
    let req: NutritionSummaryRequest = serde_json::from_str(request_json).map_err(|e| e.to_string())?;
    let summary = req.summarize().map_err(|e| e.to_string())?;
    serde_json::to_string(&summary).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_list_tests() {
        let tests: Value = serde_json::from_str(&list_tests()).unwrap();
        let tests = tests.as_array().unwrap();
        assert_eq!(tests.len(), 22);
        assert_eq!(tests[0]["id"], "run1_5");
        assert_eq!(tests[0]["fields"][2]["key"], "runTime");
    }

    #[test]
    fn test_compute_vo2max() {
        let value = compute_vo2max("yo_yo", r#"{"yoYoMileage":"1000"}"#).unwrap();
        assert!((value - (1000.0 * 0.0136 + 45.3)).abs() < 1e-9);

        assert_eq!(compute_vo2max("yo_yo", "{}"), None);
        assert_eq!(compute_vo2max("yo_yo", "not json"), None);
        assert_eq!(compute_vo2max("unknown", r#"{"yoYoMileage":"1000"}"#), None);
    }

    #[test]
    fn test_evaluate_json() {
        let json = evaluate_json("queens_step", r#"{"gender":"male","age":"30","recoveryHR":"140"}"#)
            .unwrap();
        let result: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(result["formatted"], "52.53");
        assert_eq!(result["rating_label"], "Good");
    }

    #[test]
    fn test_evaluate_json_invalid_inputs() {
        let err = evaluate_json("rockport", r#"{"age":"40","weight":"80"}"#).unwrap_err();
        assert!(err.starts_with(INVALID_INPUTS_MESSAGE));
        assert!(err.contains("Walk Time (minutes): missing or invalid"));
        assert!(err.contains("Ending HR (bpm): missing or invalid"));

        let err = evaluate_json("nope", "{}").unwrap_err();
        assert_eq!(err, "Unknown test: nope");
    }

    #[test]
    fn test_evaluate_json_rejects_non_finite() {
        let err = evaluate_json(
            "milfit",
            r#"{"weight":"0","watts":"200","age":"30","gender":"male"}"#,
        )
        .unwrap_err();
        assert_eq!(err, "Test milfit produced a non-finite result");
    }

    #[test]
    fn test_evaluate_json_rounds_ties_up() {
        let json = evaluate_json("foote_val", r#"{"footeScore":"10.625"}"#).unwrap();
        let result: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(result["formatted"], "10.63");
    }

    #[test]
    fn test_get_rating() {
        assert_eq!(get_rating(Some("male".to_string()), 30.0, 57.0), "Excellent");
        // Anything but "male" uses the female table
        assert_eq!(get_rating(Some("Male".to_string()), 30.0, 53.0), "Excellent");
        assert_eq!(get_rating(None, 30.0, 53.0), "Excellent");
        assert_eq!(get_rating(None, 10.0, 53.0), "No rating available");
    }

    #[test]
    fn test_summarize_json() {
        let json = summarize_json(
            r#"{"items":[{"id":1,"name":"Milk","portion":2,"nutrients":{"calcium_mg":300,"energy_kcal":100}}],
                "nutrients":["calcium_mg"]}"#,
        )
        .unwrap();
        let summary: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(summary["total_calories"], 200.0);
        assert_eq!(summary["totals"]["calcium_mg"], 600.0);
        assert_eq!(summary["rda_progress"][0]["percent"], 60.0);
    }

    #[test]
    fn test_summarize_json_rejects_bad_portion() {
        let err = summarize_json(r#"{"items":[{"id":9,"name":"Bread","portion":-1}]}"#).unwrap_err();
        assert_eq!(err, "Invalid request: Food 9: Portion cannot be negative");
    }
}
