// Resume prediction flow: validate the upload, call the classifier, enrich
// the result with company suggestions, and track which result is current.

pub mod enrichment;
pub mod handlers;
pub mod tracker;
pub mod view;

pub use enrichment::recommended_companies;
pub use tracker::{PredictionState, PredictionTracker, RequestToken};
pub use view::PredictionView;
