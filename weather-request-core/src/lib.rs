//! Core library for the `weather-request` CLI.
//!
//! This crate defines:
//! - Configuration handling (weather service address)
//! - The HTTP client for the weather request service
//! - Form state shared by interactive front ends
//! - Shared domain models (requests, records, summaries)
//!
//! It is used by `weather-request-cli`, but can also be reused by other binaries.

pub mod config;
pub mod form;
pub mod model;
pub mod service;

pub use config::{Config, DEFAULT_BASE_URL};
pub use form::{LookupForm, LookupOutcome, SubmitForm, SubmitOutcome};
pub use model::{LookupData, SubmitReceipt, SubmitRequest, WeatherRecord, WeatherSummary};
pub use service::{HttpWeatherService, ServiceError, WeatherService};
