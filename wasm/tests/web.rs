//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use physiolab_wasm::{compute_vo2max, evaluate_vo2max, get_rating, summarize_nutrition};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn computes_across_the_boundary() {
    let value = compute_vo2max("milfit", r#"{"weight":"80","watts":"320"}"#).unwrap();
    assert!((value - (12.35 * (320.0 / 80.0) + 3.5)).abs() < 1e-9);
}

#[wasm_bindgen_test]
fn invalid_inputs_throw() {
    let err = evaluate_vo2max("milfit", r#"{"weight":"80"}"#).unwrap_err();
    let message = err.as_string().unwrap();
    assert!(message.contains("Max Workload (watts)"));
}

#[wasm_bindgen_test]
fn rating_label() {
    assert_eq!(get_rating(Some("male".into()), 50.0, 46.0), "Excellent");
}

#[wasm_bindgen_test]
fn malformed_summary_request_throws() {
    assert!(summarize_nutrition("{").is_err());
}
