use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Date used when a birthday cannot be parsed
pub const NEUTRAL_BIRTHDAY: (i32, u32, u32) = (2000, 1, 1);

/// One participant's submitted attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(deserialize_with = "deserialize_birthday")]
    pub birthday: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_tokens")]
    pub hobbies: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_tokens")]
    pub values: Vec<String>,
    #[serde(
        rename = "communication",
        alias = "communicationStyle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub communication_style: Option<String>,
}

impl Profile {
    /// Build a profile with the fields the scorer needs
    pub fn new(name: impl Into<String>, gender: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            birthday,
            hobbies: Vec::new(),
            values: Vec::new(),
            communication_style: None,
        }
    }

    pub fn with_hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = hobbies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_communication_style(mut self, style: impl Into<String>) -> Self {
        self.communication_style = Some(style.into());
        self
    }

    /// Year, zero-based month and day-of-month of the birthday
    #[inline]
    pub fn birth_parts(&self) -> (i32, u32, u32) {
        (self.birthday.year(), self.birthday.month0(), self.birthday.day())
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Parse a birthday, falling back to the neutral date for anything unreadable
///
/// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`. Only blank input is an error.
pub fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"));

    match parsed {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("Unparseable birthday {:?} ({}), using neutral date", raw, e);
            Some(neutral_birthday())
        }
    }
}

pub fn neutral_birthday() -> NaiveDate {
    let (year, month, day) = NEUTRAL_BIRTHDAY;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn deserialize_birthday<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_birthday(&raw).ok_or_else(|| serde::de::Error::custom("birthday must not be empty"))
}

/// Split a comma-separated form value into trimmed, non-empty tokens
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenList {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens = match Option::<TokenList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TokenList::Joined(raw)) => split_tokens(&raw),
        Some(TokenList::List(items)) => items
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    };
    Ok(tokens)
}

/// Where a prediction came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionSource {
    Remote,
    Local,
}

/// The five radar-chart dimensions, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityDetails {
    pub personality: u8,
    pub hobbies: u8,
    pub lifestyle: u8,
    pub zodiac: u8,
    #[serde(rename = "longTerm")]
    pub long_term: u8,
}

impl CompatibilityDetails {
    pub fn as_array(&self) -> [u8; 5] {
        [
            self.personality,
            self.hobbies,
            self.lifestyle,
            self.zodiac,
            self.long_term,
        ]
    }
}

/// Prediction result returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub score: u8,
    pub details: CompatibilityDetails,
    pub summary: String,
    pub person1: Profile,
    pub person2: Profile,
    pub source: PredictionSource,
}

/// Weights of each sub-score in the overall score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub personality: f64,
    pub hobbies: f64,
    pub lifestyle: f64,
    pub zodiac: f64,
    pub long_term: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            personality: 0.25,
            hobbies: 0.20,
            lifestyle: 0.20,
            zodiac: 0.15,
            long_term: 0.20,
        }
    }
}
