//! VO₂max calculator API routes

use crate::error::ApiResult;
use crate::services::Vo2MaxService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use physiolab_shared::types::{
    CategoryResponse, ComputeRequest, ComputeResponse, RatingQuery, RatingResponse,
    TestDetailResponse, TestListQuery, TestSummary,
};
use validator::Validate;

/// Create VO₂max routes
pub fn vo2max_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/tests", get(list_tests))
        .route("/tests/:id", get(get_test))
        .route("/tests/:id/compute", post(compute_test))
        .route("/rating", get(get_rating))
}

/// GET /api/v1/vo2max/categories - Test categories with counts
async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryResponse>> {
    Json(Vo2MaxService::categories(state.tests()))
}

/// GET /api/v1/vo2max/tests - Test summaries, optionally filtered by category
async fn list_tests(
    State(state): State<AppState>,
    query: Result<Query<TestListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TestSummary>>> {
    let Query(query) = query?;
    Ok(Json(Vo2MaxService::list_tests(state.tests(), query.category)))
}

/// GET /api/v1/vo2max/tests/:id - Full test definition with its form fields
async fn get_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TestDetailResponse>> {
    let test = Vo2MaxService::find_test(state.tests(), &id)?;
    Ok(Json(TestDetailResponse::from(test)))
}

/// POST /api/v1/vo2max/tests/:id/compute - Compute and rate a test
///
/// Inputs are the raw form strings keyed by field name. A missing body
/// field or an unparseable value yields a validation error listing the
/// offending keys.
async fn compute_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ComputeRequest>, JsonRejection>,
) -> ApiResult<Json<ComputeResponse>> {
    let Json(req) = body?;
    let response = Vo2MaxService::compute(state.tests(), &id, &req.inputs, state.decimal_places())?;
    Ok(Json(response))
}

/// GET /api/v1/vo2max/rating - Rate a VO₂max value
async fn get_rating(
    query: Result<Query<RatingQuery>, QueryRejection>,
) -> ApiResult<Json<RatingResponse>> {
    let Query(query) = query?;
    query.validate()?;
    Ok(Json(Vo2MaxService::rate(&query)))
}
