// Service exports
pub mod prompts;
pub mod remote;

pub use remote::{RemotePredictor, PredictError, extract_json, parse_assessment};
