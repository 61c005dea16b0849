//! Terminal rendering for form outcomes: green panels for success, red for
//! failure, matching the service's web front end.

use std::time::Duration;

use crossterm::style::Stylize;
use indicatif::ProgressBar;

use weather_request_core::{LookupData, SubmitOutcome, WeatherSummary};

/// Spinner shown while a request is in flight.
pub fn busy(label: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(label.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub fn submit_panel(outcome: &SubmitOutcome) {
    if outcome.success {
        println!("{}", outcome.message.as_str().green());
        if let Some(id) = outcome.id.as_deref() {
            println!("Your weather request ID: {}", id.bold().green());
        }
    } else {
        failure_panel(&outcome.message);
    }
}

pub fn failure_panel(message: &str) {
    println!("{}", message.red());
}

pub fn lookup_panel(data: &LookupData) {
    let summary = WeatherSummary::from_record(&data.record);
    for line in summary_lines(&summary) {
        println!("{}", line.green());
    }
}

pub fn raw_panel(data: &LookupData) {
    println!("{}", data.pretty_raw().dark_green());
}

/// Summary lines in display order.
fn summary_lines(summary: &WeatherSummary) -> Vec<String> {
    vec![
        format!("Location: {}", summary.location),
        format!("Date: {}", summary.date),
        format!("Temperature: {}", summary.temperature),
        format!("Condition: {}", summary.condition),
        format!("Notes: {}", summary.notes),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines_are_labelled_in_display_order() {
        let summary = WeatherSummary {
            location: "Paris".to_string(),
            date: "2024-05-01".to_string(),
            temperature: "18°C".to_string(),
            condition: "Clear".to_string(),
            notes: "test".to_string(),
        };

        let lines = summary_lines(&summary);

        assert_eq!(
            lines,
            vec![
                "Location: Paris",
                "Date: 2024-05-01",
                "Temperature: 18°C",
                "Condition: Clear",
                "Notes: test",
            ]
        );
    }
}
