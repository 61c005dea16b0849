use clap::{Parser, Subcommand};

use weather_request_core::{
    Config, HttpWeatherService, LookupForm, LookupOutcome, SubmitForm, WeatherService,
};

use crate::{prompt, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-request", version, about = "Weather data request client")]
pub struct Cli {
    /// Service address override for this invocation.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a weather data request for a location.
    Submit {
        /// Location name, e.g. "New York"; prompted for when absent.
        location: Option<String>,

        /// Optional notes to store with the request.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Look up previously stored weather data by request id.
    Lookup {
        /// Request id returned by `submit`; prompted for when absent.
        id: Option<String>,

        /// Print the full raw JSON payload after the summary.
        #[arg(long)]
        raw: bool,
    },

    /// Store the service address used by future invocations.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let base_url = match &self.base_url {
            Some(url) => url.trim().to_string(),
            None => Config::load()?.service_base_url().to_string(),
        };

        match self.command {
            Command::Submit { location, notes } => {
                let service = HttpWeatherService::new(base_url);
                run_submit(&service, location, notes).await
            }
            Command::Lookup { id, raw } => {
                let service = HttpWeatherService::new(base_url);
                run_lookup(&service, id, raw).await
            }
            Command::Configure => run_configure(),
        }
    }
}

async fn run_submit(
    service: &dyn WeatherService,
    location: Option<String>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let location = match location {
        Some(location) => location,
        None => prompt::location()?,
    };
    if location.trim().is_empty() {
        anyhow::bail!("Location must not be empty");
    }

    let notes = match notes {
        Some(notes) => notes,
        None => prompt::notes()?,
    };

    let mut form = SubmitForm::with_fields(location, notes);
    let spinner = render::busy("Submitting...");
    drive_submit(service, &mut form).await;
    spinner.finish_and_clear();

    if let Some(outcome) = &form.outcome {
        render::submit_panel(outcome);
    }

    Ok(())
}

async fn run_lookup(
    service: &dyn WeatherService,
    id: Option<String>,
    raw: bool,
) -> anyhow::Result<()> {
    let id = match id {
        Some(id) => id,
        None => prompt::request_id()?,
    };
    if id.trim().is_empty() {
        anyhow::bail!("Request id must not be empty");
    }

    let mut form = LookupForm::with_id(id.trim());
    let spinner = render::busy("Fetching...");
    drive_lookup(service, &mut form).await;
    spinner.finish_and_clear();

    let wants_raw = match &form.outcome {
        Some(LookupOutcome::Success(data)) => {
            render::lookup_panel(data);
            raw || prompt::confirm_raw()?
        }
        Some(LookupOutcome::Failure(message)) => {
            render::failure_panel(message);
            false
        }
        None => false,
    };

    if wants_raw {
        form.toggle_raw();
    }
    if form.show_raw {
        if let Some(LookupOutcome::Success(data)) = &form.outcome {
            render::raw_panel(data);
        }
    }

    Ok(())
}

fn run_configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let url = prompt::base_url(config.service_base_url())?;
    config.set_base_url(url);
    config.save()?;
    println!("Saved service address: {}", config.service_base_url());
    Ok(())
}

/// Run a submit through its full lifecycle against the service.
async fn drive_submit(service: &dyn WeatherService, form: &mut SubmitForm) {
    form.begin_submit();
    let result = service.submit(&form.request()).await;
    form.finish(result);
}

/// Run a lookup through its full lifecycle against the service.
async fn drive_lookup(service: &dyn WeatherService, form: &mut LookupForm) {
    form.begin_lookup();
    let result = service.lookup(&form.input_id).await;
    form.finish(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weather_request_core::{LookupData, ServiceError, SubmitReceipt, SubmitRequest};

    /// Service returning canned results, one per endpoint.
    #[derive(Debug)]
    struct FakeService {
        submit: Result<SubmitReceipt, ServiceError>,
        lookup: Result<LookupData, ServiceError>,
    }

    impl FakeService {
        fn submitting(result: Result<SubmitReceipt, ServiceError>) -> Self {
            Self { submit: result, lookup: Err(ServiceError::rejected("unused")) }
        }

        fn looking_up(result: Result<LookupData, ServiceError>) -> Self {
            Self { submit: Err(ServiceError::rejected("unused")), lookup: result }
        }
    }

    #[async_trait::async_trait]
    impl WeatherService for FakeService {
        async fn submit(&self, _request: &SubmitRequest) -> Result<SubmitReceipt, ServiceError> {
            self.submit.clone()
        }

        async fn lookup(&self, _id: &str) -> Result<LookupData, ServiceError> {
            self.lookup.clone()
        }
    }

    #[tokio::test]
    async fn driven_submit_settles_with_the_receipt() {
        let service =
            FakeService::submitting(Ok(SubmitReceipt { id: Some("abc-123".to_string()) }));
        let mut form = SubmitForm::with_fields("Paris", "test");

        drive_submit(&service, &mut form).await;

        assert!(!form.submitting);
        assert!(form.location.is_empty());
        let outcome = form.outcome.expect("outcome set");
        assert!(outcome.success);
        assert_eq!(outcome.id.as_deref(), Some("abc-123"));
    }

    #[tokio::test]
    async fn driven_submit_keeps_fields_on_rejection() {
        let service = FakeService::submitting(Err(ServiceError::rejected("bad location")));
        let mut form = SubmitForm::with_fields("Prs", "typo");

        drive_submit(&service, &mut form).await;

        assert_eq!(form.location, "Prs");
        let outcome = form.outcome.expect("outcome set");
        assert!(!outcome.success);
        assert_eq!(outcome.message, "bad location");
    }

    #[tokio::test]
    async fn driven_lookup_settles_with_the_data() {
        let data = LookupData::from_raw(json!({
            "location": { "name": "Paris", "localtime": "2024-05-01 10:00" }
        }));
        let service = FakeService::looking_up(Ok(data.clone()));
        let mut form = LookupForm::with_id("xyz");
        form.show_raw = true;

        drive_lookup(&service, &mut form).await;

        assert!(!form.loading);
        assert!(!form.show_raw);
        assert_eq!(form.outcome, Some(LookupOutcome::Success(data)));
    }

    #[tokio::test]
    async fn driven_lookup_settles_with_the_failure_message() {
        let service = FakeService::looking_up(Err(ServiceError::rejected("Not found")));
        let mut form = LookupForm::with_id("missing");

        drive_lookup(&service, &mut form).await;

        assert_eq!(form.outcome, Some(LookupOutcome::Failure("Not found".to_string())));
    }
}
