//! Skill-overlap ranking.
//!
//! A candidate's match score is the number of distinct skills it shares with
//! the required set. Candidates are returned in descending score order; equal
//! scores keep their input order. The ranker never mutates its input and has
//! no error path.

use std::collections::HashSet;

use serde::Serialize;

/// Anything that carries a set of skill tags and can be ranked.
pub trait SkillProfile {
    fn skills(&self) -> &[String];
}

/// A candidate paired with its score for one ranking call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<T> {
    #[serde(flatten)]
    pub profile: T,
    pub match_score: u32,
}

/// Counts the distinct skills of `skills` that appear in `required`.
/// Duplicates on either side are counted once.
pub fn match_score(skills: &[String], required: &HashSet<&str>) -> u32 {
    let distinct: HashSet<&str> = skills.iter().map(String::as_str).collect();
    distinct.iter().filter(|s| required.contains(*s)).count() as u32
}

/// Scores every candidate against `required_skills` and sorts by score,
/// highest first. `sort_by` is stable, so ties stay in input order.
pub fn rank<T>(candidates: &[T], required_skills: &[String]) -> Vec<RankedResult<T>>
where
    T: SkillProfile + Clone,
{
    let required: HashSet<&str> = required_skills.iter().map(String::as_str).collect();

    let mut ranked: Vec<RankedResult<T>> = candidates
        .iter()
        .map(|candidate| RankedResult {
            match_score: match_score(candidate.skills(), &required),
            profile: candidate.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    tracing::debug!(
        candidates = ranked.len(),
        required = required.len(),
        top_score = ranked.first().map(|r| r.match_score).unwrap_or(0),
        "Ranked candidates by skill overlap"
    );

    ranked
}

/// Like [`rank`], truncated to the first `limit` results after sorting.
pub fn rank_top<T>(
    candidates: &[T],
    required_skills: &[String],
    limit: usize,
) -> Vec<RankedResult<T>>
where
    T: SkillProfile + Clone,
{
    let mut ranked = rank(candidates, required_skills);
    ranked.truncate(limit);
    ranked
}
