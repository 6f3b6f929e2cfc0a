//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting calculator and request errors to HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use physiolab_shared::errors::{CalcError, INVALID_INPUTS_MESSAGE};
use physiolab_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error on {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("{}", INVALID_INPUTS_MESSAGE)]
    InvalidInputs(Vec<String>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::UnknownTest(id) => ApiError::NotFound(format!("Unknown test: {}", id)),
            CalcError::InvalidInputs { fields, .. } => ApiError::InvalidInputs(fields),
            CalcError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            err @ CalcError::NonFiniteResult(_) => ApiError::Validation(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report one field, picked by name so the response is deterministic
        let first = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first()
                    .map(|err| (field.to_string(), err.message.as_ref().map(|m| m.to_string())))
            })
            .min_by(|a, b| a.0.cmp(&b.0));

        match first {
            Some((field, message)) => ApiError::InvalidField {
                message: message.unwrap_or_else(|| format!("Invalid value for {}", field)),
                field,
            },
            None => ApiError::Validation(errors.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut field = None;
        let mut fields = None;

        let (status, code, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            ApiError::InvalidField { field: name, message } => {
                field = Some(name);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            ApiError::InvalidInputs(keys) => {
                fields = Some(keys);
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    INVALID_INPUTS_MESSAGE.to_string(),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                fields,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
