use serde::{Deserialize, Serialize};

use crate::matching::{RankedResult, SkillProfile};

/// An open role in the recommendation catalog, ranked by its keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRole {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub keywords: Vec<String>,
}

impl SkillProfile for CompanyRole {
    fn skills(&self) -> &[String] {
        &self.keywords
    }
}

/// A role suggested to a student, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub company: String,
    pub role: String,
    pub reason: String,
    pub match_score: u32,
}

impl From<RankedResult<CompanyRole>> for Recommendation {
    fn from(ranked: RankedResult<CompanyRole>) -> Self {
        let RankedResult {
            profile,
            match_score,
        } = ranked;
        Self {
            reason: format!("Matches skills: {}", profile.keywords.join(", ")),
            company: profile.company,
            role: profile.role,
            match_score,
        }
    }
}
