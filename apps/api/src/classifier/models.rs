use serde::{Deserialize, Serialize};

use super::PredictionError;

/// Successful `/predict` body. Parsed strictly: a 2xx body missing a
/// required field is a [`PredictionError::DataShape`], not a partial value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_internship: String,
    /// Percentage, 0 – 100.
    pub confidence: f64,
    pub features: ExtractedFeatures,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_predictions: Vec<CategoryProbability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    pub word_count: u64,
    pub unique_words: u64,
    /// Absent means nothing was detected.
    #[serde(default)]
    pub detected_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProbability {
    pub category: String,
    pub probability: f64,
}

impl PredictionResponse {
    /// Decodes and validates a raw response body.
    pub fn parse(body: &str) -> Result<Self, PredictionError> {
        let response: PredictionResponse = serde_json::from_str(body)
            .map_err(|e| PredictionError::DataShape(e.to_string()))?;

        if response.predicted_internship.trim().is_empty() {
            return Err(PredictionError::DataShape(
                "predicted_internship is empty".to_string(),
            ));
        }
        if !response.confidence.is_finite() || !(0.0..=100.0).contains(&response.confidence) {
            return Err(PredictionError::DataShape(format!(
                "confidence {} outside 0-100",
                response.confidence
            )));
        }

        Ok(response)
    }
}

/// `GET /health` body of the classifier. Only `status` and `model_loaded`
/// are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierHealth {
    pub status: String,
    pub model_loaded: bool,
    #[serde(default)]
    pub companies_loaded: Option<bool>,
    #[serde(default)]
    pub feature_info_loaded: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> String {
        value.to_string()
    }

    #[test]
    fn test_parse_full_response() {
        let raw = body(json!({
            "predicted_internship": "Machine Learning",
            "confidence": 87.5,
            "features": {
                "word_count": 420,
                "unique_words": 211,
                "detected_skills": ["python", "machine learning"]
            },
            "top_predictions": [
                {"category": "Machine Learning", "probability": 87.5},
                {"category": "Data Science", "probability": 9.1}
            ]
        }));
        let parsed = PredictionResponse::parse(&raw).unwrap();
        assert_eq!(parsed.predicted_internship, "Machine Learning");
        assert_eq!(parsed.features.word_count, 420);
        assert_eq!(parsed.features.detected_skills.len(), 2);
        assert_eq!(parsed.top_predictions[1].category, "Data Science");
    }

    #[test]
    fn test_missing_detected_skills_defaults_to_empty() {
        let raw = body(json!({
            "predicted_internship": "HR",
            "confidence": 55,
            "features": {"word_count": 10, "unique_words": 8}
        }));
        let parsed = PredictionResponse::parse(&raw).unwrap();
        assert!(parsed.features.detected_skills.is_empty());
        assert!(parsed.top_predictions.is_empty());
    }

    #[test]
    fn test_missing_features_is_data_shape_error() {
        let raw = body(json!({"predicted_internship": "HR", "confidence": 55}));
        let err = PredictionResponse::parse(&raw).unwrap_err();
        assert!(matches!(err, PredictionError::DataShape(_)), "{err}");
    }

    #[test]
    fn test_confidence_out_of_range_is_rejected() {
        let raw = body(json!({
            "predicted_internship": "HR",
            "confidence": 140,
            "features": {"word_count": 1, "unique_words": 1}
        }));
        assert!(matches!(
            PredictionResponse::parse(&raw),
            Err(PredictionError::DataShape(_))
        ));
    }

    #[test]
    fn test_non_json_body_is_rejected() {
        assert!(matches!(
            PredictionResponse::parse("<html>oops</html>"),
            Err(PredictionError::DataShape(_))
        ));
    }

    #[test]
    fn test_health_optional_fields() {
        let health: ClassifierHealth =
            serde_json::from_value(json!({"status": "healthy", "model_loaded": true})).unwrap();
        assert!(health.model_loaded);
        assert_eq!(health.companies_loaded, None);
    }
}
