use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /weather`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub location: String,
    pub notes: String,
}

/// Parsed success body of `POST /weather`.
///
/// The service is expected to return an `id`, but a success response without
/// one is still a success: the confirmation is simply shown without it.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SubmitReceipt {
    pub id: Option<String>,
}

/// Typed view of a stored weather record.
///
/// The record schema belongs to the backend; every level is optional so that
/// a partially-shaped (or wholly missing) object degrades to the display
/// fallbacks instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    pub location: Option<RecordLocation>,
    pub current: Option<RecordCurrent>,
    pub request: Option<RecordRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordLocation {
    pub name: Option<String>,
    /// Location-local timestamp, e.g. "2024-05-01 10:00".
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordCurrent {
    pub temperature: Option<f64>,
    pub weather_descriptions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordRequest {
    pub notes: Option<String>,
}

/// Successful `GET /weather/{id}` payload: the typed view plus the raw JSON
/// for the raw-view rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupData {
    pub record: WeatherRecord,
    pub raw: Value,
}

impl LookupData {
    /// Build from a raw JSON payload, tolerating any shape the backend sends.
    pub fn from_raw(raw: Value) -> Self {
        let record = serde_json::from_value(raw.clone()).unwrap_or_default();
        Self { record, raw }
    }

    /// Pretty-printed JSON of the full payload.
    pub fn pretty_raw(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// The five display fields extracted from a record, fallbacks applied.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub location: String,
    /// Date portion of the location-local timestamp (first 10 characters).
    pub date: String,
    /// Temperature with a "°C" suffix.
    pub temperature: String,
    pub condition: String,
    pub notes: String,
}

pub const FIELD_FALLBACK: &str = "N/A";
pub const NOTES_FALLBACK: &str = "None";

impl WeatherSummary {
    pub fn from_record(record: &WeatherRecord) -> Self {
        let location = record.location.as_ref();
        let current = record.current.as_ref();
        let request = record.request.as_ref();

        let name = location.and_then(|l| non_empty(l.name.as_deref()));

        let date = location
            .and_then(|l| non_empty(l.localtime.as_deref()))
            .map(date_portion);

        let temperature = current
            .and_then(|c| c.temperature)
            .map(|t| format!("{t}°C"));

        let condition = current
            .and_then(|c| c.weather_descriptions.as_deref())
            .and_then(|d| d.first())
            .map(String::as_str)
            .and_then(|s| non_empty(Some(s)));

        let notes = request.and_then(|r| non_empty(r.notes.as_deref()));

        Self {
            location: name.map_or_else(|| FIELD_FALLBACK.to_string(), str::to_string),
            date: date.unwrap_or_else(|| FIELD_FALLBACK.to_string()),
            temperature: temperature.unwrap_or_else(|| FIELD_FALLBACK.to_string()),
            condition: condition.map_or_else(|| FIELD_FALLBACK.to_string(), str::to_string),
            notes: notes.map_or_else(|| NOTES_FALLBACK.to_string(), str::to_string),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// First 10 characters of the timestamp; shorter strings pass through whole.
fn date_portion(s: &str) -> String {
    match s.char_indices().nth(10) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
