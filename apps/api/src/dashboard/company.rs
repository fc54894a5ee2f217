use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::{rank, RankedResult};
use crate::models::{InternshipPosting, NewInternship, Student};

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistConfirmation {
    pub internship_id: uuid::Uuid,
    pub student_id: u32,
    pub student_name: String,
    pub message: String,
}

/// Company-side state: postings (most recent first) and the student pool
/// they are ranked against.
#[derive(Debug, Default)]
pub struct CompanyDashboard {
    internships: Vec<InternshipPosting>,
    students: Vec<Student>,
}

impl CompanyDashboard {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            internships: Vec::new(),
            students,
        }
    }

    pub fn internships(&self) -> &[InternshipPosting] {
        &self.internships
    }

    pub fn latest(&self) -> Option<&InternshipPosting> {
        self.internships.first()
    }

    /// Validates and prepends a posting. Postings are never updated or removed.
    pub fn post_internship(&mut self, form: NewInternship) -> Result<InternshipPosting, AppError> {
        let posting = form.into_posting()?;
        info!(
            internship_id = %posting.id,
            title = %posting.title,
            skills = posting.required_skills.len(),
            "Internship posted"
        );
        self.internships.insert(0, posting.clone());
        Ok(posting)
    }

    /// Students ranked against the latest posting. `None` until something is posted.
    pub fn ranked_students(&self) -> Option<Vec<RankedResult<Student>>> {
        self.latest()
            .map(|posting| rank(&self.students, &posting.required_skills))
    }

    pub fn shortlist(&self, student_id: u32) -> Result<ShortlistConfirmation, AppError> {
        let posting = self.latest().ok_or_else(|| {
            AppError::Validation("Post an internship before shortlisting students".to_string())
        })?;
        let student = self
            .students
            .iter()
            .find(|s| s.id == student_id)
            .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;

        info!(student_id, internship_id = %posting.id, "Student shortlisted");

        Ok(ShortlistConfirmation {
            internship_id: posting.id,
            student_id: student.id,
            student_name: student.name.clone(),
            message: format!("Shortlisted {} for internship!", student.name),
        })
    }
}
