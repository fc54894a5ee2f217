// Per-screen controllers. Each owns its lists; handlers lock one controller
// at a time and hand the ranker a borrowed snapshot.

pub mod company;
pub mod handlers;
pub mod student;

pub use company::CompanyDashboard;
pub use student::{StudentDashboard, StudentFilter};
