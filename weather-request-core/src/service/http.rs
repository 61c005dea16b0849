use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::model::{LookupData, SubmitReceipt, SubmitRequest};

use super::{ServiceError, WeatherService};

/// Fallback reason when a submit rejection carries no `detail`.
pub const SUBMIT_REJECTED_FALLBACK: &str = "Failed to submit weather request";
/// Fallback reason when a lookup rejection carries no `detail`.
pub const LOOKUP_REJECTED_FALLBACK: &str = "Not found";

/// HTTP client for the weather request service.
#[derive(Debug, Clone)]
pub struct HttpWeatherService {
    base_url: String,
    http: Client,
}

impl HttpWeatherService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherService for HttpWeatherService {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitReceipt, ServiceError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ServiceError::unreachable)?;

        let status = res.status();
        let body = res.text().await.map_err(ServiceError::unreachable)?;

        decode_submit(status, &body)
    }

    async fn lookup(&self, id: &str) -> Result<LookupData, ServiceError> {
        let url = format!("{}/weather/{}", self.base_url, id);

        let res = self.http.get(&url).send().await.map_err(ServiceError::unreachable)?;

        let status = res.status();
        let body = res.text().await.map_err(ServiceError::unreachable)?;

        decode_lookup(status, &body)
    }
}

/// Decode a `POST /weather` response from its status and body.
fn decode_submit(status: StatusCode, body: &str) -> Result<SubmitReceipt, ServiceError> {
    if !status.is_success() {
        return Err(rejection(body, SUBMIT_REJECTED_FALLBACK));
    }

    serde_json::from_str(body).map_err(ServiceError::unreachable)
}

/// Decode a `GET /weather/{id}` response from its status and body.
fn decode_lookup(status: StatusCode, body: &str) -> Result<LookupData, ServiceError> {
    if !status.is_success() {
        return Err(rejection(body, LOOKUP_REJECTED_FALLBACK));
    }

    let raw: Value = serde_json::from_str(body).map_err(ServiceError::unreachable)?;
    Ok(LookupData::from_raw(raw))
}

/// Extract the `detail` string from an error body, or use the fallback.
fn rejection(body: &str, fallback: &str) -> ServiceError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string());

    ServiceError::Rejected { detail }
}
