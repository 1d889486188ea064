use rand::Rng;
use crate::core::fallback::LocalPredictor;
use crate::models::{PredictionResult, Profile};
use crate::services::{PredictError, RemotePredictor};

/// Compatibility predictor: remote model first, local heuristics on any failure
///
/// The remote error is logged and dropped; callers always get a result and can
/// tell the two paths apart through `PredictionResult::source`.
#[derive(Debug, Clone)]
pub struct Predictor {
    remote: RemotePredictor,
    local: LocalPredictor,
}

impl Predictor {
    pub fn new(remote: RemotePredictor, local: LocalPredictor) -> Self {
        Self { remote, local }
    }

    /// A predictor that uses `api_key` for the remote model instead of the configured one
    pub fn with_credential(&self, api_key: &str) -> Self {
        Self {
            remote: self.remote.with_api_key(api_key),
            local: self.local.clone(),
        }
    }

    pub fn remote(&self) -> &RemotePredictor {
        &self.remote
    }

    pub fn local(&self) -> &LocalPredictor {
        &self.local
    }

    /// Predict compatibility using a thread-local random source for the fallback
    pub async fn predict(&self, person1: Profile, person2: Profile) -> PredictionResult {
        let remote = self.remote.predict(&person1, &person2).await;
        // ThreadRng is !Send, so it is only taken once the await has resolved
        self.settle(remote, person1, person2, &mut rand::thread_rng())
    }

    /// Predict compatibility with an explicit random source for the fallback
    pub async fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        person1: Profile,
        person2: Profile,
        rng: &mut R,
    ) -> PredictionResult {
        let remote = self.remote.predict(&person1, &person2).await;
        self.settle(remote, person1, person2, rng)
    }

    fn settle<R: Rng + ?Sized>(
        &self,
        remote: Result<PredictionResult, PredictError>,
        person1: Profile,
        person2: Profile,
        rng: &mut R,
    ) -> PredictionResult {
        match remote {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Remote prediction unavailable, using local fallback: {}", e);
                self.local.predict(person1, person2, rng)
            }
        }
    }
}
