//! Local state for the two interactive forms.
//!
//! Each form owns a small struct moving through a linear lifecycle:
//! idle -> in-flight -> settled, then back to idle on the next submission.
//! The transitions are plain methods so every front end (and test) drives
//! the exact same state changes.

use crate::model::{LookupData, SubmitReceipt, SubmitRequest};
use crate::service::ServiceError;

/// Confirmation shown after a successful submit.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Weather request submitted successfully!";
/// Shown when a submit gets no usable response.
pub const SUBMIT_NETWORK_ERROR: &str = "Network error: Could not connect to the server";
/// Shown when a lookup gets no usable response.
pub const LOOKUP_NETWORK_ERROR: &str = "Network error";

/// State of the submit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitForm {
    pub location: String,
    pub notes: String,
    pub submitting: bool,
    pub outcome: Option<SubmitOutcome>,
}

/// Settled result of a submit, as rendered to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
    pub id: Option<String>,
}

impl SubmitForm {
    pub fn with_fields(location: impl Into<String>, notes: impl Into<String>) -> Self {
        Self { location: location.into(), notes: notes.into(), ..Self::default() }
    }

    /// The request body built from the current fields.
    pub fn request(&self) -> SubmitRequest {
        SubmitRequest { location: self.location.clone(), notes: self.notes.clone() }
    }

    /// Enter the in-flight phase, dropping any prior outcome.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.outcome = None;
    }

    /// Settle the form. Fields are cleared only on success so a rejected
    /// submission can be corrected and resent.
    pub fn finish(&mut self, result: Result<SubmitReceipt, ServiceError>) {
        self.outcome = Some(match result {
            Ok(receipt) => {
                self.location.clear();
                self.notes.clear();
                SubmitOutcome {
                    success: true,
                    message: SUBMIT_SUCCESS_MESSAGE.to_string(),
                    id: receipt.id,
                }
            }
            Err(err) => SubmitOutcome {
                success: false,
                message: submit_error_message(err),
                id: None,
            },
        });
        self.submitting = false;
    }
}

fn submit_error_message(err: ServiceError) -> String {
    match err {
        ServiceError::Rejected { detail } => detail,
        ServiceError::Unreachable { .. } => SUBMIT_NETWORK_ERROR.to_string(),
    }
}

/// State of the lookup form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupForm {
    pub input_id: String,
    pub loading: bool,
    /// Whether the raw-JSON view is open. Hidden by default and reset to
    /// hidden whenever a new result arrives.
    pub show_raw: bool,
    pub outcome: Option<LookupOutcome>,
}

/// Settled result of a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success(LookupData),
    Failure(String),
}

impl LookupForm {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { input_id: id.into(), ..Self::default() }
    }

    /// Enter the loading phase, dropping any prior outcome.
    pub fn begin_lookup(&mut self) {
        self.loading = true;
        self.outcome = None;
    }

    /// Settle the form with the service result.
    pub fn finish(&mut self, result: Result<LookupData, ServiceError>) {
        self.outcome = Some(match result {
            Ok(data) => {
                self.show_raw = false;
                LookupOutcome::Success(data)
            }
            Err(err) => LookupOutcome::Failure(lookup_error_message(err)),
        });
        self.loading = false;
    }

    /// Flip the raw-JSON view.
    pub fn toggle_raw(&mut self) {
        self.show_raw = !self.show_raw;
    }
}

fn lookup_error_message(err: ServiceError) -> String {
    match err {
        ServiceError::Rejected { detail } => detail,
        ServiceError::Unreachable { .. } => LOOKUP_NETWORK_ERROR.to_string(),
    }
}
