//! Search history models.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Deserializer, Serialize, de};

/// A recorded weather lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoryEntry {
    /// Creation-time-derived identifier, unique for the process lifetime
    pub id: String,
    pub city: String,
    pub temperature: f64,
    pub condition: String,
    /// Creation instant (ISO 8601, UTC, millisecond precision)
    #[serde(with = "timestamp_millis")]
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /api/history`
///
/// Every field is optional at the wire level so that missing values surface
/// as a validation error from the store rather than a JSON error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct NewHistoryEntry {
    #[serde(default)]
    pub city: Option<String>,
    /// Accepts a JSON number or a numeric string
    #[serde(default, deserialize_with = "lenient_temperature")]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl NewHistoryEntry {
    pub fn new(city: impl Into<String>, temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            temperature: Some(temperature),
            condition: Some(condition.into()),
        }
    }
}

/// Query parameters for `GET /api/history`
///
/// Kept as raw strings; [`PageRequest`](crate::models::PageRequest) applies
/// the defaults and clamps.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoryQuery {
    /// Page size (default 20, max 100)
    pub limit: Option<String>,
    /// Number of entries to skip (default 0)
    pub offset: Option<String>,
}

/// One page of history, newest first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoryPage {
    /// Entries in the log before pagination
    pub total: usize,
    /// Entries in this page
    pub count: usize,
    pub offset: usize,
    pub limit: usize,
    pub history: Vec<HistoryEntry>,
}

/// Result of clearing the log
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ClearedHistory {
    pub deleted_count: usize,
}

fn lenient_temperature<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let not_numeric = |raw: &dyn std::fmt::Display| -> D::Error {
        de::Error::custom(format!("temperature must be numeric, got {raw}"))
    };

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => {
            number.as_f64().map(Some).ok_or_else(|| not_numeric(&number))
        }
        Some(serde_json::Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| not_numeric(&format!("{text:?}"))),
        Some(other) => Err(not_numeric(&other)),
    }
}

mod timestamp_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
