//! Shared fixtures for handler tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::to_bytes, response::Response};
use serde_json::Value;

use crate::classifier::models::ExtractedFeatures;
use crate::classifier::{
    ClassifierHealth, PredictionError, PredictionResponse, ResumeClassifier, ResumeFile,
};
use crate::config::Config;
use crate::dashboard::{CompanyDashboard, StudentDashboard};
use crate::seed;
use crate::state::AppState;

#[derive(Clone)]
enum Failure {
    Status(u16),
    DataShape(String),
}

/// In-process classifier that records the file name of every upload it saw.
#[derive(Clone, Default)]
pub struct FakeClassifier {
    category: Option<String>,
    confidence: f64,
    failure: Option<Failure>,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl FakeClassifier {
    pub fn returning(category: &str, confidence: f64) -> Self {
        Self {
            category: Some(category.to_string()),
            confidence,
            ..Default::default()
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            failure: Some(Failure::Status(status)),
            ..Default::default()
        }
    }

    pub fn failing_with_shape(message: &str) -> Self {
        Self {
            failure: Some(Failure::DataShape(message.to_string())),
            ..Default::default()
        }
    }

    /// Sleeps before answering, to keep a request in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_file_name(&self) -> Option<String> {
        self.seen.lock().unwrap().last().cloned().flatten()
    }
}

#[async_trait]
impl ResumeClassifier for FakeClassifier {
    async fn predict(&self, file: ResumeFile) -> Result<PredictionResponse, PredictionError> {
        self.seen.lock().unwrap().push(file.file_name.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(Failure::Status(status)) => {
                return Err(PredictionError::Status { status: *status })
            }
            Some(Failure::DataShape(message)) => {
                return Err(PredictionError::DataShape(message.clone()))
            }
            None => {}
        }

        Ok(PredictionResponse {
            predicted_internship: self
                .category
                .clone()
                .unwrap_or_else(|| "Software Engineer".to_string()),
            confidence: self.confidence,
            features: ExtractedFeatures {
                word_count: file.bytes.len() as u64,
                unique_words: 1,
                detected_skills: vec!["python".to_string()],
            },
            top_predictions: vec![],
        })
    }

    async fn health(&self) -> Result<ClassifierHealth, PredictionError> {
        Ok(ClassifierHealth {
            status: "healthy".to_string(),
            model_loaded: true,
            companies_loaded: None,
            feature_info_loaded: None,
        })
    }
}

pub fn test_config() -> Config {
    Config {
        classifier_url: "http://127.0.0.1:5000".to_string(),
        classifier_timeout_secs: 5,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(classifier: FakeClassifier) -> AppState {
    AppState::new(
        test_config(),
        Arc::new(classifier),
        CompanyDashboard::new(seed::students()),
        StudentDashboard::new(seed::students(), seed::company_roles()),
    )
}

pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
