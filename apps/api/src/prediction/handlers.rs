//! Axum route handlers for the resume predictor.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::classifier::{ClassifierHealth, ResumeFile, RESUME_FIELD};
use crate::errors::AppError;
use crate::prediction::{PredictionState, PredictionView, RequestToken};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub token: RequestToken,
    /// `false` when a newer submission started before this one finished.
    pub current: bool,
    #[serde(flatten)]
    pub view: PredictionView,
}

/// POST /api/v1/predict
///
/// Multipart upload with a single `resume` part. A missing or empty file is
/// rejected before anything is submitted. The classifier call runs in its
/// own task, so the latest state still settles if the caller goes away.
pub async fn handle_predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PredictResponse>, AppError> {
    let file = read_resume_field(multipart)
        .await?
        .ok_or_else(|| AppError::Validation("Please upload a resume (PDF)".to_string()))?;

    if file.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded resume is empty".to_string()));
    }

    let token = state.predictions.begin().await;
    let classifier = state.classifier.clone();
    let predictions = state.predictions.clone();
    let (outcome, current) = tokio::spawn(async move {
        let outcome = classifier.predict(file).await.map(PredictionView::from);
        let current = predictions.complete(token, &outcome).await;
        (outcome, current)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Prediction task failed: {e}")))?;

    let view = outcome?;
    info!(
        token = token.value(),
        predicted = %view.prediction.predicted_internship,
        "Prediction completed"
    );

    Ok(Json(PredictResponse {
        token,
        current,
        view,
    }))
}

/// GET /api/v1/predict/latest
pub async fn handle_latest_prediction(State(state): State<AppState>) -> Json<PredictionState> {
    Json(state.predictions.current().await)
}

/// GET /api/v1/classifier/health
pub async fn handle_classifier_health(
    State(state): State<AppState>,
) -> Result<Json<ClassifierHealth>, AppError> {
    debug!("Checking classifier health at {}", state.config.classifier_url);
    Ok(Json(state.classifier.health().await?))
}

/// Pulls the `resume` part out of the form; other parts are ignored.
async fn read_resume_field(mut multipart: Multipart) -> Result<Option<ResumeFile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;

        return Ok(Some(ResumeFile {
            file_name,
            content_type,
            bytes,
        }));
    }

    Ok(None)
}
