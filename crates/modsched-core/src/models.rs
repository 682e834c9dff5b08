// Rust guideline compliant 2026-10-16

//! Core data models for modsched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Field holding an entity's current moderation state.
pub const MODERATION_STATE_FIELD: &str = "moderation_state";

/// Field holding a scheduled update's run time (Unix seconds).
pub const UPDATE_TIMESTAMP_FIELD: &str = "update_timestamp";

/// Field type of reference fields.
pub const ENTITY_REFERENCE_TYPE: &str = "entity_reference";

/// Entity type of scheduled update records.
pub const SCHEDULED_UPDATE_TYPE: &str = "scheduled_update";

/// A single field value on an entity or scheduled update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value set.
    Null,
    /// Integer value, e.g. a timestamp.
    Integer(i64),
    /// Text value, e.g. a state identifier.
    Text(String),
    /// Identifiers of referenced records.
    References(Vec<String>),
}

/// Read access to dynamically named fields.
pub trait FieldAccess {
    /// Returns the raw value of a field, if the field exists.
    fn get(&self, field: &str) -> Option<&FieldValue>;

    /// Returns a text field value, treating empty strings as unset.
    fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(FieldValue::Text(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns an integer field value. Numeric text such as `"1000"` is
    /// accepted since hosts often store timestamps as strings.
    fn integer(&self, field: &str) -> Option<i64> {
        match self.get(field) {
            Some(FieldValue::Integer(value)) => Some(*value),
            Some(FieldValue::Text(value)) => value.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns referenced identifiers in item order; empty when unset.
    fn references(&self, field: &str) -> &[String] {
        match self.get(field) {
            Some(FieldValue::References(ids)) => ids.as_slice(),
            _ => &[],
        }
    }
}

/// A content entity under moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntity {
    /// Entity identifier.
    pub id: String,
    /// Entity type identifier, e.g. `node`.
    pub entity_type: String,
    /// Bundle name, e.g. `article`.
    pub bundle: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Field values keyed by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ContentEntity {
    /// Creates an entity with no field values.
    pub fn new(id: &str, entity_type: &str, bundle: &str) -> Self {
        Self {
            id: id.to_string(),
            entity_type: entity_type.to_string(),
            bundle: bundle.to_string(),
            label: String::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field value, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, field: &str, value: FieldValue) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    /// Returns the moderation state the entity will have after save.
    pub fn moderation_state(&self) -> Option<&str> {
        self.text(MODERATION_STATE_FIELD)
    }
}

impl FieldAccess for ContentEntity {
    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

/// A scheduled update record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledUpdate {
    /// Record identifier.
    pub id: String,
    /// Scheduled update type (the record's subtype).
    pub update_type: String,
    /// Field values keyed by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ScheduledUpdate {
    /// Creates a record of the given type with no field values.
    pub fn new(id: &str, update_type: &str) -> Self {
        Self {
            id: id.to_string(),
            update_type: update_type.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field value, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, field: &str, value: FieldValue) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    /// Returns when the update runs, if scheduled.
    pub fn update_timestamp(&self) -> Option<i64> {
        self.integer(UPDATE_TIMESTAMP_FIELD)
    }
}

impl FieldAccess for ScheduledUpdate {
    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

/// A field definition on a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Field type, e.g. `entity_reference` or `string`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Referenced entity type for reference fields.
    #[serde(default)]
    pub target_type: Option<String>,
}

impl FieldDefinition {
    /// Returns true if the field references scheduled update records.
    pub fn references_scheduled_updates(&self) -> bool {
        self.field_type == ENTITY_REFERENCE_TYPE
            && self.target_type.as_deref() == Some(SCHEDULED_UPDATE_TYPE)
    }
}

/// Configuration of a scheduled update type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeConfig {
    /// Scheduled update type identifier.
    pub id: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Record field name to the entity field it updates.
    #[serde(default)]
    pub field_map: BTreeMap<String, String>,
}

impl SubtypeConfig {
    /// Returns the first record field mapped onto `target`, if any.
    pub fn source_field_for(&self, target: &str) -> Option<&str> {
        self.field_map
            .iter()
            .find(|(source, dest)| dest.as_str() == target && !source.is_empty())
            .map(|(source, _)| source.as_str())
    }
}

/// A point where the entity's moderation state becomes `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Unix timestamp; 0 is "now", `None` is unscheduled.
    pub time: Option<i64>,
    /// Target state identifier.
    pub state: String,
}

impl TimelineEvent {
    /// Creates the event for the state an entity has after save.
    pub fn now(state: &str) -> Self {
        Self {
            time: Some(0),
            state: state.to_string(),
        }
    }

    /// Creates an event at the given time.
    pub fn at(time: Option<i64>, state: &str) -> Self {
        Self {
            time,
            state: state.to_string(),
        }
    }

    /// Orders events by time, unscheduled events last.
    pub fn chronological(&self, other: &Self) -> Ordering {
        match (self.time, other.time) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_timestamp() {
        let update = ScheduledUpdate::new("u1", "publish")
            .with_field(UPDATE_TIMESTAMP_FIELD, FieldValue::Text(" 1000 ".to_string()));
        assert_eq!(update.update_timestamp(), Some(1000));

        let update = ScheduledUpdate::new("u2", "publish")
            .with_field(UPDATE_TIMESTAMP_FIELD, FieldValue::Text("tomorrow".to_string()));
        assert_eq!(update.update_timestamp(), None);
    }

    #[test]
    fn test_empty_text_is_unset() {
        let entity = ContentEntity::new("1", "node", "article")
            .with_field(MODERATION_STATE_FIELD, FieldValue::Text(String::new()));
        assert_eq!(entity.moderation_state(), None);
    }

    #[test]
    fn test_field_value_deserializes_untagged() {
        let fields: BTreeMap<String, FieldValue> = serde_json::from_str(
            r#"{"a": null, "b": 12, "c": "draft", "d": ["u1", "u2"]}"#,
        )
        .unwrap();
        assert_eq!(fields["a"], FieldValue::Null);
        assert_eq!(fields["b"], FieldValue::Integer(12));
        assert_eq!(fields["c"], FieldValue::Text("draft".to_string()));
        assert_eq!(
            fields["d"],
            FieldValue::References(vec!["u1".to_string(), "u2".to_string()])
        );
    }

    #[test]
    fn test_source_field_for_ignores_other_targets() {
        let mut field_map = BTreeMap::new();
        field_map.insert("field_title".to_string(), "title".to_string());
        field_map.insert("field_state".to_string(), MODERATION_STATE_FIELD.to_string());
        let config = SubtypeConfig {
            id: "publish".to_string(),
            label: String::new(),
            field_map,
        };
        assert_eq!(
            config.source_field_for(MODERATION_STATE_FIELD),
            Some("field_state")
        );
        assert_eq!(config.source_field_for("status"), None);
    }

    #[test]
    fn test_unscheduled_sorts_last() {
        let unscheduled = TimelineEvent::at(None, "archived");
        let later = TimelineEvent::at(Some(i64::MAX), "published");
        assert_eq!(unscheduled.chronological(&later), Ordering::Greater);
        assert_eq!(later.chronological(&unscheduled), Ordering::Less);
    }
}
