use crate::matching::rank_top;
use crate::models::{CompanyRole, Recommendation};

/// How many roles a student is shown.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Ranks the role catalog against a student's skills and keeps the top
/// [`RECOMMENDATION_LIMIT`]. Roles with equal scores keep catalog order.
pub fn recommend_roles(catalog: &[CompanyRole], student_skills: &[String]) -> Vec<Recommendation> {
    rank_top(catalog, student_skills, RECOMMENDATION_LIMIT)
        .into_iter()
        .map(Recommendation::from)
        .collect()
}
