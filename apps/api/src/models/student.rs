use serde::{Deserialize, Serialize};

use crate::matching::SkillProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStatus {
    Placed,
    Interviewing,
    Searching,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub avatar: Option<String>,
    pub course: String,
    pub year: u8,
    pub skills: Vec<String>,
    pub status: PlacementStatus,
}

impl SkillProfile for Student {
    fn skills(&self) -> &[String] {
        &self.skills
    }
}

/// The signed-in student's own profile. Saving is a mock: it lives only in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume_name: Option<String>,
}
