use rand::Rng;
use crate::models::{Profile, PredictionResult, PredictionSource, CompatibilityDetails, ScoringWeights};
use crate::core::{
    scoring::{
        hobbies_score, lifestyle_score, long_term_score, overall_score, personality_score,
        zodiac_score,
    },
    summary::generate_summary,
};

/// Heuristic scorer used when the remote model is unavailable
///
/// # Sub-scores
/// 1. Personality (name overlap, birthday proximity, gender)
/// 2. Hobbies (substring overlap)
/// 3. Lifestyle (birth season and day)
/// 4. Zodiac (sign-pair table)
/// 5. Long-term (fresh blend of 1-3)
///
/// Every sub-score is clamped independently, then combined with `ScoringWeights`.
/// Randomness comes only from the `Rng` passed in, so a seeded generator gives
/// reproducible output.
#[derive(Debug, Clone)]
pub struct LocalPredictor {
    weights: ScoringWeights,
}

impl LocalPredictor {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compute the five sub-scores for a pair of profiles
    pub fn details<R: Rng + ?Sized>(
        &self,
        person1: &Profile,
        person2: &Profile,
        rng: &mut R,
    ) -> CompatibilityDetails {
        CompatibilityDetails {
            personality: personality_score(person1, person2, rng),
            hobbies: hobbies_score(&person1.hobbies, &person2.hobbies, rng),
            lifestyle: lifestyle_score(person1, person2, rng),
            zodiac: zodiac_score(person1, person2, rng),
            long_term: long_term_score(person1, person2, rng),
        }
    }

    /// Score a pair of profiles. Never fails.
    pub fn predict<R: Rng + ?Sized>(
        &self,
        person1: Profile,
        person2: Profile,
        rng: &mut R,
    ) -> PredictionResult {
        let details = self.details(&person1, &person2, rng);
        let score = overall_score(&details, &self.weights);
        let summary = generate_summary(score, &person1.name, &person2.name);

        tracing::debug!(
            "Local prediction for {} / {}: {} {:?}",
            person1.name,
            person2.name,
            score,
            details
        );

        PredictionResult {
            score,
            details,
            summary,
            person1,
            person2,
            source: PredictionSource::Local,
        }
    }
}

impl Default for LocalPredictor {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
