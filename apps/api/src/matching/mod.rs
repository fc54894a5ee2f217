// Skill-overlap matching shared by the company and student dashboards.
// Everything here is pure: no I/O, no shared state.

pub mod ranker;
pub mod recommend;

pub use ranker::{rank, rank_top, RankedResult, SkillProfile};
pub use recommend::recommend_roles;
