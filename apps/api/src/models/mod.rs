pub mod company;
pub mod internship;
pub mod student;

pub use company::{CompanyRole, Recommendation};
pub use internship::{InternshipPosting, NewInternship};
pub use student::{PlacementStatus, Profile, Student};
