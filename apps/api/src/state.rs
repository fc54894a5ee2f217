use std::sync::Arc;

use tokio::sync::RwLock;

use crate::classifier::ResumeClassifier;
use crate::config::Config;
use crate::dashboard::{CompanyDashboard, StudentDashboard};
use crate::prediction::PredictionTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable classifier. Default: `ClassifierClient` against `CLASSIFIER_URL`.
    pub classifier: Arc<dyn ResumeClassifier>,
    pub company: Arc<RwLock<CompanyDashboard>>,
    pub students: Arc<RwLock<StudentDashboard>>,
    pub predictions: Arc<PredictionTracker>,
}

impl AppState {
    pub fn new(
        config: Config,
        classifier: Arc<dyn ResumeClassifier>,
        company: CompanyDashboard,
        students: StudentDashboard,
    ) -> Self {
        Self {
            config,
            classifier,
            company: Arc::new(RwLock::new(company)),
            students: Arc::new(RwLock::new(students)),
            predictions: Arc::new(PredictionTracker::new()),
        }
    }
}
