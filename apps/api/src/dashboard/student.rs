use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::recommend_roles;
use crate::models::{CompanyRole, PlacementStatus, Profile, Recommendation, Student};

/// Student list filters. A `None` field matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilter {
    pub course: Option<String>,
    pub year: Option<u8>,
    pub status: Option<PlacementStatus>,
    /// Case-insensitive substring of the student's name.
    pub search: Option<String>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        let course_ok = self.course.as_deref().map_or(true, |c| student.course == c);
        let year_ok = self.year.map_or(true, |y| student.year == y);
        let status_ok = self.status.map_or(true, |s| student.status == s);
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => student.name.to_lowercase().contains(&term.to_lowercase()),
        };
        course_ok && year_ok && status_ok && search_ok
    }
}

/// Student-side state: the student directory, the role catalog used for
/// recommendations, and the signed-in student's profile.
#[derive(Debug, Default)]
pub struct StudentDashboard {
    students: Vec<Student>,
    catalog: Vec<CompanyRole>,
    profile: Profile,
}

impl StudentDashboard {
    pub fn new(students: Vec<Student>, catalog: Vec<CompanyRole>) -> Self {
        Self {
            students,
            catalog,
            profile: Profile::default(),
        }
    }

    pub fn filtered_students(&self, filter: &StudentFilter) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    /// Recommendations for the first student in the directory, the default
    /// shown on the dashboard. Empty directory → no recommendations.
    pub fn featured_recommendations(&self) -> Vec<Recommendation> {
        self.students
            .first()
            .map(|s| recommend_roles(&self.catalog, &s.skills))
            .unwrap_or_default()
    }

    pub fn recommendations_for(&self, student_id: u32) -> Result<Vec<Recommendation>, AppError> {
        let student = self
            .students
            .iter()
            .find(|s| s.id == student_id)
            .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;
        Ok(recommend_roles(&self.catalog, &student.skills))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn save_profile(&mut self, profile: Profile) -> &Profile {
        tracing::info!(name = %profile.name, "Profile saved (in memory only)");
        self.profile = profile;
        &self.profile
    }
}
