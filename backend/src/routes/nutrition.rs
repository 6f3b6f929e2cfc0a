//! Nutrition API routes

use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use physiolab_shared::types::{NutritionSummaryRequest, NutritionSummaryResponse, RdaEntry};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/rda", get(get_rda_table))
        .route("/summary", post(summarize))
}

/// GET /api/v1/nutrition/rda - Recommended daily allowances
async fn get_rda_table() -> Json<Vec<RdaEntry>> {
    Json(NutritionService::rda_table())
}

/// POST /api/v1/nutrition/summary - Totals, RDA progress and macros for a day's foods
async fn summarize(
    body: Result<Json<NutritionSummaryRequest>, JsonRejection>,
) -> ApiResult<Json<NutritionSummaryResponse>> {
    let Json(req) = body?;
    Ok(Json(NutritionService::summarize(&req)?))
}
