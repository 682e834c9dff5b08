// Rust guideline compliant 2026-10-16

//! Rendering of violation messages.

use crate::{Config, Violation};
use chrono::{DateTime, Utc};

/// Placeholder replaced with the transition date.
pub const DATE_PLACEHOLDER: &str = "%date";
/// Placeholder replaced with the source state label.
pub const FROM_PLACEHOLDER: &str = "%from";
/// Placeholder replaced with the target state label.
pub const TO_PLACEHOLDER: &str = "%to";

/// Message template plus date settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormat {
    /// Template containing `%date`, `%from` and `%to`.
    pub template: String,
    /// chrono strftime format for `%date`.
    pub date_format: String,
    /// Text used for `%date` when the transition is unscheduled.
    pub unscheduled_label: String,
}

impl MessageFormat {
    /// Builds a message format from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            template: config.message_template.clone(),
            date_format: config.date_format.clone(),
            unscheduled_label: config.unscheduled_label.clone(),
        }
    }

    /// Renders the message for one violation.
    pub fn render(&self, violation: &Violation) -> String {
        let date = violation
            .timestamp
            .map(|ts| format_timestamp(ts, &self.date_format))
            .unwrap_or_else(|| self.unscheduled_label.clone());

        self.template
            .replace(DATE_PLACEHOLDER, &date)
            .replace(FROM_PLACEHOLDER, &violation.from_label)
            .replace(TO_PLACEHOLDER, &violation.to_label)
    }
}

impl Violation {
    /// Renders this violation with an explicit template and date settings.
    pub fn message(&self, template: &str, date_format: &str, unscheduled_label: &str) -> String {
        MessageFormat {
            template: template.to_string(),
            date_format: date_format.to_string(),
            unscheduled_label: unscheduled_label.to_string(),
        }
        .render(self)
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Formats a Unix timestamp in UTC, falling back to the raw number when it
/// is out of chrono's range.
pub fn format_timestamp(timestamp: i64, format: &str) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(timestamp: Option<i64>) -> Violation {
        Violation {
            timestamp,
            from_state: "published".to_string(),
            to_state: "draft".to_string(),
            from_label: "Published".to_string(),
            to_label: "Draft".to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let format = MessageFormat {
            template: "%from -> %to at %date".to_string(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
            unscheduled_label: "never".to_string(),
        };
        assert_eq!(
            format.render(&violation(Some(1_700_000_000))),
            "Published -> Draft at 2023-11-14 22:13"
        );
    }

    #[test]
    fn test_render_unscheduled() {
        let format = MessageFormat {
            template: "on %date".to_string(),
            date_format: "%Y".to_string(),
            unscheduled_label: "an unscheduled time".to_string(),
        };
        assert_eq!(format.render(&violation(None)), "on an unscheduled time");
    }

    #[test]
    fn test_violation_message() {
        assert_eq!(
            violation(Some(86_400)).message("%date: %from to %to", "%d.%m.%Y", "-"),
            "02.01.1970: Published to Draft"
        );
    }

    #[test]
    fn test_default_date_is_rfc2822_shaped() {
        assert_eq!(
            format_timestamp(0, &Config::default().date_format),
            "Thu, 01 Jan 1970 00:00:00 +0000"
        );
    }

    #[test]
    fn test_out_of_range_timestamp_falls_back() {
        assert_eq!(format_timestamp(i64::MAX, "%Y"), i64::MAX.to_string());
    }
}
