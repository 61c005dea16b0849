use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::{LookupData, SubmitReceipt, SubmitRequest};

pub mod http;

pub use http::HttpWeatherService;

/// Failure of a service call, reduced to the two kinds the UI distinguishes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The service answered, but marked the request as failed. `detail` is the
    /// human-readable reason from the response body (or a fixed fallback).
    #[error("{detail}")]
    Rejected { detail: String },

    /// No usable response: connect/read failure, or a success body that could
    /// not be parsed. The UI shows a fixed network-error text either way;
    /// `cause` is kept for diagnostics only.
    #[error("weather service unreachable: {cause}")]
    Unreachable { cause: String },
}

impl ServiceError {
    pub fn rejected(detail: impl Into<String>) -> Self {
        Self::Rejected { detail: detail.into() }
    }

    pub fn unreachable(cause: impl ToString) -> Self {
        Self::Unreachable { cause: cause.to_string() }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Client interface for the weather request service.
///
/// The HTTP implementation lives in [`http`]; tests substitute in-memory
/// implementations to simulate each outcome.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    /// Store a weather request for a location; returns the lookup receipt.
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitReceipt, ServiceError>;

    /// Fetch previously stored weather data by request id.
    async fn lookup(&self, id: &str) -> Result<LookupData, ServiceError>;
}
