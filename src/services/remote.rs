use crate::config::RemoteSettings;
use crate::core::{scoring::clamp_score, summary::generate_summary};
use crate::models::{CompatibilityDetails, PredictionResult, PredictionSource, Profile};
use crate::services::prompts::{build_user_prompt, SYSTEM_PROMPT};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when asking the remote model for a prediction
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("No API key configured for the remote model")]
    MissingCredential,

    #[error("Remote request failed: {status} {status_text}")]
    RemoteRequestFailed { status: u16, status_text: String },

    #[error("Unparseable response: {0}")]
    UnparseableResponse(String),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
}

static FENCED_JSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```json[ \t]*\r?\n(.*?)\r?\n[ \t]*```").ok());

static BARE_OBJECT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

/// Locate the JSON payload in a model reply
///
/// A fenced ```json block wins; otherwise the span from the first `{` to the
/// last `}` is taken.
pub fn extract_json(content: &str) -> Option<&str> {
    if let Some(inner) = FENCED_JSON
        .as_ref()
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
    {
        return Some(inner.as_str());
    }

    BARE_OBJECT
        .as_ref()
        .and_then(|re| re.find(content))
        .map(|m| m.as_str())
}

/// Assessment returned by the model, before normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAssessment {
    pub score: f64,
    pub details: RemoteDetails,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteDetails {
    pub personality: f64,
    pub hobbies: f64,
    pub lifestyle: f64,
    pub zodiac: f64,
    #[serde(rename = "longTerm", alias = "long_term")]
    pub long_term: f64,
}

impl RemoteAssessment {
    /// Round and clamp every score into 0-100 and attach the input profiles
    pub fn into_result(self, person1: Profile, person2: Profile) -> PredictionResult {
        let details = CompatibilityDetails {
            personality: clamp_score(self.details.personality, 0, 100),
            hobbies: clamp_score(self.details.hobbies, 0, 100),
            lifestyle: clamp_score(self.details.lifestyle, 0, 100),
            zodiac: clamp_score(self.details.zodiac, 0, 100),
            long_term: clamp_score(self.details.long_term, 0, 100),
        };
        let score = clamp_score(self.score, 0, 100);

        let summary = if self.summary.trim().is_empty() {
            generate_summary(score, &person1.name, &person2.name)
        } else {
            self.summary
        };

        PredictionResult {
            score,
            details,
            summary,
            person1,
            person2,
            source: PredictionSource::Remote,
        }
    }
}

/// Parse the model's free-text reply into an assessment
pub fn parse_assessment(content: &str) -> Result<RemoteAssessment, PredictError> {
    let json = extract_json(content).ok_or_else(|| {
        PredictError::UnparseableResponse("no JSON object found in model reply".into())
    })?;

    serde_json::from_str(json)
        .map_err(|e| PredictError::UnparseableResponse(format!("invalid assessment JSON: {}", e)))
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completion client that scores a pair of profiles
///
/// Issues exactly one request per prediction: no retries, no streaming.
#[derive(Clone)]
pub struct RemotePredictor {
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f64,
    max_tokens: u32,
    client: Client,
}

impl fmt::Debug for RemotePredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemotePredictor")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl RemotePredictor {
    /// Create a new remote predictor
    pub fn new(settings: &RemoteSettings) -> Result<Self, PredictError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            client,
        })
    }

    /// Same client and settings, different credential
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..self.clone()
        }
    }

    /// Whether a non-blank credential is available
    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Ask the remote model to score a pair of profiles
    pub async fn predict(
        &self,
        person1: &Profile,
        person2: &Profile,
    ) -> Result<PredictionResult, PredictError> {
        let api_key = self.credential().ok_or(PredictError::MissingCredential)?;

        let prompt = build_user_prompt(person1, person2);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: &prompt },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = self.completions_url();
        tracing::debug!("Requesting compatibility analysis from {} ({})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Chat completion request failed: {}", status);
            return Err(PredictError::RemoteRequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let raw = response.text().await?;
        let reply: ChatResponse = serde_json::from_str(&raw).map_err(|e| {
            PredictError::UnparseableResponse(format!("invalid completion body: {}", e))
        })?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                PredictError::UnparseableResponse("completion has no message content".into())
            })?;

        let assessment = parse_assessment(&content)?;

        tracing::debug!("Remote assessment for {} / {}: {}", person1.name, person2.name, assessment.score);

        Ok(assessment.into_result(person1.clone(), person2.clone()))
    }
}
