/// Classifier client — the single point of entry for calls to the external
/// resume-classification service.
///
/// One POST per prediction, no retries, no caching. A non-2xx status is a
/// failure and its body is never read.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod models;

pub use models::{ClassifierHealth, PredictionResponse};

const PREDICT_ENDPOINT: &str = "/predict";
const HEALTH_ENDPOINT: &str = "/health";
/// Multipart field name the classifier reads the upload from.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Error)]
pub enum PredictionError {
    /// Rejected before any request was made (e.g. no file selected).
    #[error("{0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Classifier returned status {status}")]
    Status { status: u16 },

    #[error("Malformed classifier response: {0}")]
    DataShape(String),
}

impl PredictionError {
    /// Transport failures and non-2xx answers are the same failure to callers.
    pub fn is_network(&self) -> bool {
        matches!(self, PredictionError::Network(_) | PredictionError::Status { .. })
    }
}

/// An uploaded resume, as handed over by the caller.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    /// As sent by the uploader; `None` when the part carried no filename.
    pub file_name: Option<String>,
    /// As declared by the uploader; inferred from the filename when absent.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn content_type(&self) -> &str {
        match self.content_type.as_deref() {
            Some(ct) if !ct.trim().is_empty() => ct,
            _ => infer_content_type(self.file_name.as_deref().unwrap_or_default()),
        }
    }
}

fn infer_content_type(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        "application/pdf"
    } else if lower_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower_name.ends_with(".doc") {
        "application/msword"
    } else {
        "application/octet-stream"
    }
}

/// The classifier seam. Carried in `AppState` as `Arc<dyn ResumeClassifier>`
/// so handlers can be exercised against a fake.
#[async_trait]
pub trait ResumeClassifier: Send + Sync {
    async fn predict(&self, file: ResumeFile) -> Result<PredictionResponse, PredictionError>;

    async fn health(&self) -> Result<ClassifierHealth, PredictionError>;
}

#[derive(Clone)]
pub struct ClassifierClient {
    client: Client,
    base_url: String,
}

impl ClassifierClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, PredictionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl ResumeClassifier for ClassifierClient {
    async fn predict(&self, file: ResumeFile) -> Result<PredictionResponse, PredictionError> {
        let url = self.url(PREDICT_ENDPOINT);
        let content_type = file.content_type().to_string();

        let file_label = file.file_name.clone().unwrap_or_default();

        let mut part = Part::bytes(file.bytes.to_vec());
        if let Some(name) = &file.file_name {
            part = part.file_name(name.clone());
        }
        let part = part.mime_str(&content_type).map_err(|_| {
            PredictionError::Validation(format!("Invalid content type '{content_type}'"))
        })?;
        let form = Form::new().part(RESUME_FIELD, part);

        info!(
            file_name = %file_label,
            size = file.bytes.len(),
            "Calling classifier: {url}"
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Classifier returned {status} for '{file_label}'");
            return Err(PredictionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let prediction = PredictionResponse::parse(&body)?;

        debug!(
            predicted = %prediction.predicted_internship,
            confidence = prediction.confidence,
            "Classifier prediction received"
        );

        Ok(prediction)
    }

    async fn health(&self) -> Result<ClassifierHealth, PredictionError> {
        let url = self.url(HEALTH_ENDPOINT);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Classifier health check returned {status}");
            return Err(PredictionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PredictionError::DataShape(e.to_string()))
    }
}
