use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Kept in the order entered; duplicates are allowed.
    pub required_skills: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

/// Form payload for a new posting. Skills arrive comma separated.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInternship {
    pub title: String,
    pub description: String,
    pub required_skills: String,
}

impl NewInternship {
    /// Validates the form and builds the posting. All three fields are required.
    pub fn into_posting(self) -> Result<InternshipPosting, AppError> {
        let title = self.title.trim();
        let description = self.description.trim();

        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        if description.is_empty() {
            return Err(AppError::Validation("description cannot be empty".to_string()));
        }

        let required_skills = parse_skill_list(&self.required_skills);
        if required_skills.is_empty() {
            return Err(AppError::Validation(
                "required_skills must list at least one skill".to_string(),
            ));
        }

        Ok(InternshipPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            required_skills,
            posted_at: Utc::now(),
        })
    }
}

/// Splits a comma-separated skill list, trimming each entry and dropping blanks.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, skills: &str) -> NewInternship {
        NewInternship {
            title: title.to_string(),
            description: description.to_string(),
            required_skills: skills.to_string(),
        }
    }

    #[test]
    fn test_parse_skill_list_trims_and_keeps_order() {
        assert_eq!(
            parse_skill_list(" React,Node , Databases,React"),
            vec!["React", "Node", "Databases", "React"]
        );
    }

    #[test]
    fn test_parse_skill_list_drops_blank_entries() {
        assert_eq!(parse_skill_list("Rust, ,,Go,"), vec!["Rust", "Go"]);
        assert!(parse_skill_list("  ").is_empty());
    }

    #[test]
    fn test_into_posting_builds_posting() {
        let posting = form("Backend Intern", "APIs", "Node, Databases")
            .into_posting()
            .unwrap();
        assert_eq!(posting.title, "Backend Intern");
        assert_eq!(posting.required_skills, vec!["Node", "Databases"]);
    }

    #[test]
    fn test_into_posting_requires_every_field() {
        assert!(matches!(
            form(" ", "d", "a").into_posting(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            form("t", "", "a").into_posting(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            form("t", "d", " , ").into_posting(),
            Err(AppError::Validation(_))
        ));
    }
}
