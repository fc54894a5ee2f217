pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::prediction::handlers as prediction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Company dashboard
        .route(
            "/api/v1/internships",
            get(dashboard::handle_list_internships).post(dashboard::handle_post_internship),
        )
        .route(
            "/api/v1/internships/ranked-students",
            get(dashboard::handle_ranked_students),
        )
        .route(
            "/api/v1/internships/shortlist/:student_id",
            post(dashboard::handle_shortlist),
        )
        // Student dashboard
        .route("/api/v1/students", get(dashboard::handle_list_students))
        .route(
            "/api/v1/students/recommendations",
            get(dashboard::handle_featured_recommendations),
        )
        .route(
            "/api/v1/students/:id/recommendations",
            get(dashboard::handle_student_recommendations),
        )
        .route(
            "/api/v1/profile",
            get(dashboard::handle_get_profile).put(dashboard::handle_save_profile),
        )
        // Resume predictor
        .route("/api/v1/predict", post(prediction::handle_predict))
        .route("/api/v1/predict/latest", get(prediction::handle_latest_prediction))
        .route(
            "/api/v1/classifier/health",
            get(prediction::handle_classifier_health),
        )
        .with_state(state)
}
