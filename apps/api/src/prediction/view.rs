use serde::Serialize;

use crate::classifier::PredictionResponse;
use crate::prediction::recommended_companies;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionQuality {
    High,
    Medium,
    Low,
}

impl PredictionQuality {
    /// High above 70%, Medium above 50%, Low otherwise.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 70.0 {
            PredictionQuality::High
        } else if confidence > 50.0 {
            PredictionQuality::Medium
        } else {
            PredictionQuality::Low
        }
    }
}

/// What the predictor screen shows for one successful request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    #[serde(flatten)]
    pub prediction: PredictionResponse,
    pub quality: PredictionQuality,
    pub recommended_companies: Vec<String>,
    /// Detected skills joined with ", ", or "None".
    pub skills_summary: String,
}

impl From<PredictionResponse> for PredictionView {
    fn from(prediction: PredictionResponse) -> Self {
        let skills = &prediction.features.detected_skills;
        let skills_summary = if skills.is_empty() {
            "None".to_string()
        } else {
            skills.join(", ")
        };

        Self {
            quality: PredictionQuality::from_confidence(prediction.confidence),
            recommended_companies: recommended_companies(&prediction.predicted_internship),
            skills_summary,
            prediction,
        }
    }
}
