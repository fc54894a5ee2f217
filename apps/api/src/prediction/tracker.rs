//! Display state of the resume predictor.
//!
//! `Idle → Submitting → {Succeeded | Failed}` per request. Every submission
//! gets a fresh, strictly increasing token; a completion carrying anything
//! but the latest token is dropped, so an older response arriving late can
//! never overwrite a newer one.

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::classifier::PredictionError;
use crate::prediction::view::PredictionView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PredictionState {
    Idle,
    Submitting {
        token: RequestToken,
    },
    Succeeded {
        token: RequestToken,
        result: PredictionView,
    },
    Failed {
        token: RequestToken,
        message: String,
    },
}

#[derive(Debug)]
struct Inner {
    latest: u64,
    state: PredictionState,
}

#[derive(Debug)]
pub struct PredictionTracker {
    inner: Mutex<Inner>,
}

impl Default for PredictionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionTracker {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                latest: 0,
                state: PredictionState::Idle,
            }),
        }
    }

    /// Enters `Submitting` with a new token, discarding whatever was shown before.
    pub async fn begin(&self) -> RequestToken {
        let mut inner = self.inner.lock().await;
        inner.latest += 1;
        let token = RequestToken(inner.latest);
        inner.state = PredictionState::Submitting { token };
        info!(token = token.0, "Prediction submitted");
        token
    }

    /// Records the outcome of `token`'s request. Returns `false` when a newer
    /// request has started since, in which case the state is left untouched.
    pub async fn complete(
        &self,
        token: RequestToken,
        outcome: &Result<PredictionView, PredictionError>,
    ) -> bool {
        let mut inner = self.inner.lock().await;
        if token.0 != inner.latest {
            warn!(
                token = token.0,
                latest = inner.latest,
                "Discarding stale prediction result"
            );
            return false;
        }

        inner.state = match outcome {
            Ok(view) => PredictionState::Succeeded {
                token,
                result: view.clone(),
            },
            Err(err) => PredictionState::Failed {
                token,
                message: user_message(err),
            },
        };
        true
    }

    pub async fn current(&self) -> PredictionState {
        self.inner.lock().await.state.clone()
    }
}

fn user_message(err: &PredictionError) -> String {
    match err {
        PredictionError::Validation(msg) => msg.clone(),
        err if err.is_network() => "Failed to predict, check backend".to_string(),
        _ => "Classifier returned an unexpected response".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::models::{ExtractedFeatures, PredictionResponse};

    fn view(category: &str) -> PredictionView {
        PredictionView::from(PredictionResponse {
            predicted_internship: category.to_string(),
            confidence: 75.0,
            features: ExtractedFeatures {
                word_count: 1,
                unique_words: 1,
                detected_skills: vec![],
            },
            top_predictions: vec![],
        })
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let tracker = PredictionTracker::new();
        assert_eq!(tracker.current().await, PredictionState::Idle);
    }

    #[tokio::test]
    async fn test_success_path() {
        let tracker = PredictionTracker::new();
        let token = tracker.begin().await;
        assert_eq!(tracker.current().await, PredictionState::Submitting { token });

        assert!(tracker.complete(token, &Ok(view("HR"))).await);
        match tracker.current().await {
            PredictionState::Succeeded { token: t, result } => {
                assert_eq!(t, token);
                assert_eq!(result.prediction.predicted_internship, "HR");
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_path_uses_user_message() {
        let tracker = PredictionTracker::new();
        let token = tracker.begin().await;
        let outcome = Err(PredictionError::Status { status: 503 });

        assert!(tracker.complete(token, &outcome).await);
        assert_eq!(
            tracker.current().await,
            PredictionState::Failed {
                token,
                message: "Failed to predict, check backend".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_tokens_increase() {
        let tracker = PredictionTracker::new();
        let first = tracker.begin().await;
        let second = tracker.begin().await;
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_late_response_from_older_request_is_discarded() {
        let tracker = PredictionTracker::new();
        let older = tracker.begin().await;
        let newer = tracker.begin().await;

        assert!(tracker.complete(newer, &Ok(view("Blockchain"))).await);
        assert!(!tracker.complete(older, &Ok(view("HR"))).await);

        match tracker.current().await {
            PredictionState::Succeeded { token, result } => {
                assert_eq!(token, newer);
                assert_eq!(result.prediction.predicted_internship, "Blockchain");
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_older_completion_does_not_end_newer_submission() {
        let tracker = PredictionTracker::new();
        let older = tracker.begin().await;
        let newer = tracker.begin().await;

        let outcome = Err(PredictionError::DataShape("x".into()));
        assert!(!tracker.complete(older, &outcome).await);
        assert_eq!(
            tracker.current().await,
            PredictionState::Submitting { token: newer }
        );
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let value = serde_json::to_value(PredictionState::Submitting {
            token: RequestToken(4),
        })
        .unwrap();
        assert_eq!(value["state"], "submitting");
        assert_eq!(value["token"], 4);
    }
}
