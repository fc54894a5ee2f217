//! In-memory seed records. These stand in for a persistence layer.

use crate::models::{CompanyRole, PlacementStatus, Student};

fn skills(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn avatar_for(name: &str) -> Option<String> {
    let slug = name.to_lowercase().replace(' ', "-");
    Some(format!("https://avatars.dicebear.com/api/initials/{slug}.svg"))
}

fn student(
    id: u32,
    name: &str,
    course: &str,
    year: u8,
    skill_tags: &[&str],
    status: PlacementStatus,
) -> Student {
    Student {
        id,
        name: name.to_string(),
        avatar: avatar_for(name),
        course: course.to_string(),
        year,
        skills: skills(skill_tags),
        status,
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student(
            1,
            "Amit Sharma",
            "B.Tech",
            4,
            &["React", "Node", "Databases"],
            PlacementStatus::Interviewing,
        ),
        student(
            2,
            "Priya Singh",
            "MCA",
            2,
            &["Python", "ML", "Pandas"],
            PlacementStatus::Searching,
        ),
        student(
            3,
            "Rahul Verma",
            "B.Tech",
            3,
            &["Docker", "Kubernetes", "CI/CD"],
            PlacementStatus::Placed,
        ),
    ]
}

pub fn company_roles() -> Vec<CompanyRole> {
    let role = |id: u32, company: &str, role: &str, keywords: &[&str]| CompanyRole {
        id,
        company: company.to_string(),
        role: role.to_string(),
        keywords: skills(keywords),
    };

    vec![
        role(1, "ByteWave", "Frontend Intern", &["React", "HTML", "CSS"]),
        role(2, "DataNest", "ML Intern", &["Python", "ML", "TensorFlow"]),
        role(3, "CloudMount", "DevOps Intern", &["Docker", "Kubernetes", "CI/CD"]),
        role(4, "Finlytics", "Backend Intern", &["Node", "Express", "Databases"]),
    ]
}
