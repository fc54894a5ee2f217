//! Axum route handlers for the company and student dashboards.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::dashboard::company::ShortlistConfirmation;
use crate::dashboard::StudentFilter;
use crate::errors::AppError;
use crate::matching::RankedResult;
use crate::models::{InternshipPosting, NewInternship, Profile, Recommendation, Student};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PostInternshipResponse {
    pub internship: InternshipPosting,
    pub ranked_students: Vec<RankedResult<Student>>,
}

#[derive(Debug, Serialize)]
pub struct RankedStudentsResponse {
    /// The posting students were ranked against; `None` before the first post.
    pub internship: Option<InternshipPosting>,
    pub ranked_students: Vec<RankedResult<Student>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Company dashboard
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/internships
pub async fn handle_list_internships(
    State(state): State<AppState>,
) -> Json<Vec<InternshipPosting>> {
    let company = state.company.read().await;
    Json(company.internships().to_vec())
}

/// POST /api/v1/internships
///
/// Posts an internship and returns the student ranking for it.
pub async fn handle_post_internship(
    State(state): State<AppState>,
    Json(form): Json<NewInternship>,
) -> Result<(StatusCode, Json<PostInternshipResponse>), AppError> {
    let mut company = state.company.write().await;
    let internship = company.post_internship(form)?;
    let ranked_students = company.ranked_students().unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        Json(PostInternshipResponse {
            internship,
            ranked_students,
        }),
    ))
}

/// GET /api/v1/internships/ranked-students
pub async fn handle_ranked_students(State(state): State<AppState>) -> Json<RankedStudentsResponse> {
    let company = state.company.read().await;
    Json(RankedStudentsResponse {
        internship: company.latest().cloned(),
        ranked_students: company.ranked_students().unwrap_or_default(),
    })
}

/// POST /api/v1/internships/shortlist/:student_id
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Path(student_id): Path<u32>,
) -> Result<Json<ShortlistConfirmation>, AppError> {
    let company = state.company.read().await;
    Ok(Json(company.shortlist(student_id)?))
}

// ────────────────────────────────────────────────────────────────────────────
// Student dashboard
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/students?course=&year=&status=&search=
pub async fn handle_list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Json<Vec<Student>> {
    let students = state.students.read().await;
    Json(students.filtered_students(&filter))
}

/// GET /api/v1/students/recommendations
pub async fn handle_featured_recommendations(
    State(state): State<AppState>,
) -> Json<Vec<Recommendation>> {
    let students = state.students.read().await;
    Json(students.featured_recommendations())
}

/// GET /api/v1/students/:id/recommendations
pub async fn handle_student_recommendations(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let students = state.students.read().await;
    Ok(Json(students.recommendations_for(id)?))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    let students = state.students.read().await;
    Json(students.profile().clone())
}

/// PUT /api/v1/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Json<Profile> {
    let mut students = state.students.write().await;
    Json(students.save_profile(profile).clone())
}
