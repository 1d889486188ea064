// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, PredictionResult, PredictionSource, CompatibilityDetails, ScoringWeights, parse_birthday, split_tokens};
pub use requests::PredictRequest;
pub use responses::{HealthResponse, ErrorResponse};
