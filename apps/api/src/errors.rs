use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::classifier::PredictionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure or non-success status from the classifier.
    #[error("Network error: {0}")]
    Network(String),

    /// The classifier answered 2xx with a body that does not match the contract.
    #[error("Data shape error: {0}")]
    DataShape(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::Validation(msg) => AppError::Validation(msg),
            PredictionError::DataShape(msg) => AppError::DataShape(msg),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Network(msg) => {
                tracing::error!("Classifier network error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "NETWORK_ERROR",
                    "Failed to predict, check backend".to_string(),
                )
            }
            AppError::DataShape(msg) => {
                tracing::error!("Classifier data shape error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "DATA_SHAPE_ERROR",
                    format!("Classifier returned an unexpected response: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
