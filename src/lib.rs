//! Lume Compat - Compatibility prediction service for Lume dating app
//!
//! Scores how well two people match. A remote chat-completion model is asked
//! first; if that fails for any reason a local heuristic scorer answers instead.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Predictor, LocalPredictor, ZodiacSign, generate_summary};
pub use models::{Profile, PredictionResult, PredictionSource, CompatibilityDetails, ScoringWeights, PredictRequest};
pub use services::{RemotePredictor, PredictError};
