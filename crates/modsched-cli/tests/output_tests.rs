// Rust guideline compliant 2026-10-16

//! Unit tests for output formatting module.

use modsched_cli::create_formatter;
use modsched_core::{
    MessageFormat, Report, TimelineEvent, TransitionDefinition, Violation, Workflow,
    WorkflowDefinition, WorkflowState,
};
use std::collections::BTreeMap;

fn create_test_report(violations: Vec<Violation>) -> Report {
    Report {
        entity_id: "42".to_string(),
        entity_label: "Launch announcement".to_string(),
        workflow_id: "editorial".to_string(),
        violations,
    }
}

fn create_test_violation(timestamp: Option<i64>) -> Violation {
    Violation {
        timestamp,
        from_state: "archived".to_string(),
        to_state: "published".to_string(),
        from_label: "Archived".to_string(),
        to_label: "Published".to_string(),
    }
}

fn create_test_workflow() -> Workflow {
    Workflow::from_definition(WorkflowDefinition {
        id: "editorial".to_string(),
        label: "Editorial".to_string(),
        states: vec![
            WorkflowState {
                id: "draft".to_string(),
                label: "Draft".to_string(),
            },
            WorkflowState {
                id: "published".to_string(),
                label: "Published".to_string(),
            },
        ],
        transitions: vec![TransitionDefinition {
            id: "publish".to_string(),
            label: "Publish".to_string(),
            from: vec!["draft".to_string()],
            to: "published".to_string(),
        }],
        bundles: BTreeMap::new(),
    })
    .expect("Test workflow should be valid")
}

#[test]
fn test_json_formatter_reports() {
    let reports = vec![
        create_test_report(vec![create_test_violation(Some(2000))]),
        create_test_report(vec![]),
    ];
    let formatter = create_formatter("json", false);
    let output = formatter.format_reports(&reports, &MessageFormat::default());

    let value: serde_json::Value = serde_json::from_str(&output).expect("Output should be JSON");
    assert_eq!(value["total"], 2);
    assert_eq!(value["invalid"], 1);
    assert_eq!(value["reports"][0]["valid"], false);
    assert_eq!(value["reports"][0]["violations"][0]["timestamp"], 2000);
    assert!(value["reports"][0]["violations"][0]["message"]
        .as_str()
        .unwrap()
        .contains("from Archived to Published"));
    assert_eq!(value["reports"][1]["valid"], true);
}

#[test]
fn test_json_formatter_unscheduled_timestamp_is_null() {
    let reports = vec![create_test_report(vec![create_test_violation(None)])];
    let formatter = create_formatter("json", false);
    let output = formatter.format_reports(&reports, &MessageFormat::default());
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value["reports"][0]["violations"][0]["timestamp"].is_null());
}

#[test]
fn test_table_formatter_all_valid() {
    let reports = vec![create_test_report(vec![])];
    let formatter = create_formatter("table", false);
    let output = formatter.format_reports(&reports, &MessageFormat::default());
    assert_eq!(
        output,
        "All scheduled transitions are valid (1 entities checked)."
    );
}

#[test]
fn test_table_formatter_violations() {
    let reports = vec![create_test_report(vec![create_test_violation(Some(0))])];
    let formatter = create_formatter("table", false);
    let output = formatter.format_reports(&reports, &MessageFormat::default());
    assert!(output.contains("Entity"));
    assert!(output.contains("Archived"));
    assert!(output.contains("Thu, 01 Jan 1970 00:00:00 +0000"));
    assert!(output.contains("1 of 1 entities"));
}

#[test]
fn test_plain_formatter_reports() {
    let reports = vec![create_test_report(vec![create_test_violation(None)])];
    let formatter = create_formatter("plain", false);
    let output = formatter.format_reports(&reports, &MessageFormat::default());
    assert_eq!(
        output,
        "42\tScheduled transition on an unscheduled time from Archived to Published is not allowed.\n"
    );
}

#[test]
fn test_timeline_formatters() {
    let timeline = vec![
        TimelineEvent::now("draft"),
        TimelineEvent::at(Some(86_400), "published"),
        TimelineEvent::at(None, "archived"),
    ];

    let plain = create_formatter("plain", false).format_timeline("42", &timeline, "%Y-%m-%d");
    assert_eq!(plain, "0\tdraft\n86400\tpublished\n-\tarchived\n");

    let table = create_formatter("table", false).format_timeline("42", &timeline, "%Y-%m-%d");
    assert!(table.contains("now"));
    assert!(table.contains("1970-01-02"));
    assert!(table.contains("unscheduled"));

    let json = create_formatter("json", false).format_timeline("42", &timeline, "%Y-%m-%d");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["timeline"][1]["state"], "published");
}

#[test]
fn test_empty_timeline_table() {
    let output = create_formatter("table", false).format_timeline("7", &[], "%Y");
    assert_eq!(output, "No moderation timeline for entity 7.");
}

#[test]
fn test_fields_formatters() {
    let fields = vec!["field_publish".to_string(), "field_archive".to_string()];
    let plain = create_formatter("plain", false).format_fields("node", "article", &fields);
    assert_eq!(plain, "field_publish\nfield_archive\n");

    let empty = create_formatter("table", false).format_fields("node", "page", &[]);
    assert_eq!(empty, "No scheduled update reference fields on node.page.");
}

#[test]
fn test_transitions_formatters() {
    let workflow = create_test_workflow();
    let plain = create_formatter("plain", false).format_transitions(&workflow);
    assert_eq!(plain, "draft\tpublished\n");

    let table = create_formatter("table", false).format_transitions(&workflow);
    assert!(table.contains("Draft (draft)"));
    assert!(table.contains("Published (published)"));

    let json = create_formatter("json", false).format_transitions(&workflow);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["transitions"][0]["to_label"], "Published");
}

#[test]
fn test_error_formatting() {
    assert_eq!(
        create_formatter("table", false).format_error("boom"),
        "Error: boom"
    );
    assert_eq!(
        create_formatter("json", false).format_error("boom"),
        r#"{"error":"boom"}"#
    );
    let colored = create_formatter("table", true).format_error("boom");
    assert!(colored.contains("boom"));
    assert!(colored.contains("\u{1b}["), "Colored output uses ANSI escapes");
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let reports = vec![create_test_report(vec![])];
    let output = create_formatter("yaml", false).format_reports(&reports, &MessageFormat::default());
    assert!(output.starts_with("All scheduled transitions are valid"));
}
