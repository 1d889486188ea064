use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Profile;

/// Request to predict compatibility between two people
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(nested)]
    pub person1: Profile,
    #[validate(nested)]
    pub person2: Profile,
    /// Per-request credential for the chat endpoint, overrides the configured one
    #[serde(rename = "apiKey", alias = "api_key", default, skip_serializing)]
    pub api_key: Option<String>,
}

impl PredictRequest {
    /// The request credential, if one was supplied and is not blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
