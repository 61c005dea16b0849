//! Interactive prompts backing the submit and lookup forms.

use std::io::{IsTerminal, stdin};

use inquire::validator::{ErrorMessage, Validation};
use inquire::{Confirm, CustomUserError, Text};

pub fn location() -> anyhow::Result<String> {
    let value = Text::new("Location:")
        .with_placeholder("e.g., New York, London, Tokyo")
        .with_validator(required("Location is required"))
        .prompt()?;
    Ok(value)
}

pub fn notes() -> anyhow::Result<String> {
    let value = Text::new("Notes (optional):")
        .with_help_message("Any additional notes about this weather request")
        .prompt()?;
    Ok(value)
}

pub fn request_id() -> anyhow::Result<String> {
    let value = Text::new("Weather request ID:")
        .with_placeholder("e.g., f4c300d3-8db8-46da-98e8-ea3c0c24141b")
        .with_validator(required("A request id is required"))
        .prompt()?;
    Ok(value)
}

/// Offer the raw-JSON view after a successful lookup. Answers "no" when
/// stdin is not a terminal, so piped invocations never hang on a prompt.
pub fn confirm_raw() -> anyhow::Result<bool> {
    if !stdin().is_terminal() {
        return Ok(false);
    }
    let answer = Confirm::new("View raw JSON?").with_default(false).prompt()?;
    Ok(answer)
}

pub fn base_url(current: &str) -> anyhow::Result<String> {
    let value = Text::new("Service base URL:")
        .with_initial_value(current)
        .with_validator(required("A service address is required"))
        .prompt()?;
    Ok(value)
}

/// Validator rejecting blank input. A required field that fails here never
/// reaches the network.
fn required(message: &'static str) -> impl Fn(&str) -> Result<Validation, CustomUserError> + Clone {
    move |input: &str| {
        if input.trim().is_empty() {
            Ok(Validation::Invalid(ErrorMessage::Custom(message.to_string())))
        } else {
            Ok(Validation::Valid)
        }
    }
}
