// Rust guideline compliant 2026-10-16

//! Output formatting module for the modsched CLI.
//!
//! This module provides functionality for formatting validation reports,
//! timelines and workflow data in various output formats (JSON, table,
//! plain text).

use modsched_core::message::format_timestamp;
use modsched_core::{MessageFormat, Report, TimelineEvent, Workflow};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting modsched data in different output formats.
pub trait OutputFormatter {
    /// Formats validation reports, rendering violations with `messages`.
    fn format_reports(&self, reports: &[Report], messages: &MessageFormat) -> String;

    /// Formats a sorted timeline for one entity.
    fn format_timeline(&self, entity_id: &str, timeline: &[TimelineEvent], date_format: &str)
        -> String;

    /// Formats the reference field names of a bundle.
    fn format_fields(&self, entity_type: &str, bundle: &str, fields: &[String]) -> String;

    /// Formats the permitted transitions of a workflow.
    fn format_transitions(&self, workflow: &Workflow) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn display_date(time: Option<i64>, date_format: &str) -> String {
    match time {
        Some(0) => "now".to_string(),
        Some(ts) => format_timestamp(ts, date_format),
        None => "unscheduled".to_string(),
    }
}

fn display_time(time: Option<i64>) -> String {
    time.map(|ts| ts.to_string()).unwrap_or_else(|| "-".to_string())
}

fn transition_rows(workflow: &Workflow) -> Vec<(String, String, String, String)> {
    workflow
        .transitions()
        .into_iter()
        .filter_map(|(from, to)| {
            let from_state = workflow.state(from).ok()?;
            let to_state = workflow.state(to).ok()?;
            Some((
                from.to_string(),
                from_state.label().to_string(),
                to.to_string(),
                to_state.label().to_string(),
            ))
        })
        .collect()
}

/// JSON output formatter.
///
/// Formats data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_reports(&self, reports: &[Report], messages: &MessageFormat) -> String {
        let entries: Vec<serde_json::Value> = reports
            .iter()
            .map(|report| {
                let violations: Vec<serde_json::Value> = report
                    .violations
                    .iter()
                    .map(|violation| {
                        json!({
                            "timestamp": violation.timestamp,
                            "from_state": violation.from_state,
                            "to_state": violation.to_state,
                            "from_label": violation.from_label,
                            "to_label": violation.to_label,
                            "message": messages.render(violation),
                        })
                    })
                    .collect();
                json!({
                    "entity_id": report.entity_id,
                    "entity_label": report.entity_label,
                    "workflow_id": report.workflow_id,
                    "valid": report.is_valid(),
                    "violations": violations,
                })
            })
            .collect();

        let output = json!({
            "reports": entries,
            "total": reports.len(),
            "invalid": reports.iter().filter(|report| !report.is_valid()).count(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize reports" }).to_string())
    }

    fn format_timeline(
        &self,
        entity_id: &str,
        timeline: &[TimelineEvent],
        _date_format: &str,
    ) -> String {
        let output = json!({
            "entity_id": entity_id,
            "timeline": timeline,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize timeline" }).to_string())
    }

    fn format_fields(&self, entity_type: &str, bundle: &str, fields: &[String]) -> String {
        let output = json!({
            "entity_type": entity_type,
            "bundle": bundle,
            "fields": fields,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize fields" }).to_string())
    }

    fn format_transitions(&self, workflow: &Workflow) -> String {
        let transitions: Vec<serde_json::Value> = transition_rows(workflow)
            .into_iter()
            .map(|(from, from_label, to, to_label)| {
                json!({
                    "from": from,
                    "from_label": from_label,
                    "to": to,
                    "to_label": to_label,
                })
            })
            .collect();
        let output = json!({
            "workflow_id": workflow.id(),
            "label": workflow.label(),
            "transitions": transitions,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize workflow" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats data as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_reports(&self, reports: &[Report], messages: &MessageFormat) -> String {
        let invalid = reports.iter().filter(|report| !report.is_valid()).count();
        if invalid == 0 {
            return format!(
                "All scheduled transitions are valid ({} entities checked).",
                reports.len()
            );
        }

        let mut builder = Builder::default();
        builder.push_record(["Entity", "Workflow", "Date", "From", "To"]);
        for report in reports {
            for violation in &report.violations {
                let date = violation
                    .timestamp
                    .map(|ts| format_timestamp(ts, &messages.date_format))
                    .unwrap_or_else(|| messages.unscheduled_label.clone());
                builder.push_record([
                    report.entity_id.clone(),
                    report.workflow_id.clone(),
                    date,
                    violation.from_label.clone(),
                    violation.to_label.clone(),
                ]);
            }
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\n{} of {} entities have invalid scheduled transitions.",
            table,
            invalid,
            reports.len()
        )
    }

    fn format_timeline(
        &self,
        entity_id: &str,
        timeline: &[TimelineEvent],
        date_format: &str,
    ) -> String {
        if timeline.is_empty() {
            return format!("No moderation timeline for entity {}.", entity_id);
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Time", "Date", "State"]);
        for (position, event) in timeline.iter().enumerate() {
            builder.push_record([
                position.to_string(),
                display_time(event.time),
                display_date(event.time, date_format),
                event.state.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_fields(&self, entity_type: &str, bundle: &str, fields: &[String]) -> String {
        if fields.is_empty() {
            return format!(
                "No scheduled update reference fields on {}.{}.",
                entity_type, bundle
            );
        }

        let mut builder = Builder::default();
        builder.push_record(["Field"]);
        for field in fields {
            builder.push_record([field.clone()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_transitions(&self, workflow: &Workflow) -> String {
        let rows = transition_rows(workflow);
        if rows.is_empty() {
            return format!("Workflow {} permits no transitions.", workflow.id());
        }

        let mut builder = Builder::default();
        builder.push_record(["From", "To"]);
        for (from, from_label, to, to_label) in rows {
            builder.push_record([
                format!("{} ({})", from_label, from),
                format!("{} ({})", to_label, to),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
///
/// Formats data as simple tab-separated lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_reports(&self, reports: &[Report], messages: &MessageFormat) -> String {
        let mut output = String::new();
        for report in reports {
            for violation in &report.violations {
                output.push_str(&format!(
                    "{}\t{}\n",
                    report.entity_id,
                    messages.render(violation)
                ));
            }
        }
        output
    }

    fn format_timeline(
        &self,
        _entity_id: &str,
        timeline: &[TimelineEvent],
        _date_format: &str,
    ) -> String {
        let mut output = String::new();
        for event in timeline {
            output.push_str(&format!("{}\t{}\n", display_time(event.time), event.state));
        }
        output
    }

    fn format_fields(&self, _entity_type: &str, _bundle: &str, fields: &[String]) -> String {
        let mut output = String::new();
        for field in fields {
            output.push_str(&format!("{}\n", field));
        }
        output
    }

    fn format_transitions(&self, workflow: &Workflow) -> String {
        let mut output = String::new();
        for (from, to) in workflow.transitions() {
            output.push_str(&format!("{}\t{}\n", from, to));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
