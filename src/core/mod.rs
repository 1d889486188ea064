// Core algorithm exports
pub mod fallback;
pub mod predictor;
pub mod scoring;
pub mod similarity;
pub mod summary;
pub mod zodiac;

pub use fallback::LocalPredictor;
pub use predictor::Predictor;
pub use similarity::{name_similarity, hobby_overlap};
pub use summary::{generate_summary, ScoreBracket};
pub use zodiac::ZodiacSign;
