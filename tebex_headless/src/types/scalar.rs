//! Scalar wrappers that keep the server's exact JSON text.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// An RFC 3339 timestamp, kept as the string the server sent.
///
/// Re-encoding writes the same text back; parse on demand with
/// [`Timestamp::to_datetime`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_datetime(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.0)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value.to_rfc3339())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monetary amount as the server wrote it.
///
/// Whole amounts may arrive as `10` or `10.0`; both survive re-encoding
/// unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Price(serde_json::Number);

impl Price {
    /// `None` for NaN or infinite amounts.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}
