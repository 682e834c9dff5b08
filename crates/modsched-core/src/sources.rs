// Rust guideline compliant 2026-10-16

//! Collaborator interfaces consumed by the validator.
//!
//! Each trait is a narrow lookup over data owned elsewhere (schema metadata,
//! scheduled update type configuration, records, workflows). [`Site`](crate::Site)
//! implements all of them over a JSON document.

use crate::{ContentEntity, FieldDefinition, Result, ScheduledUpdate, SubtypeConfig, Workflow};

/// Schema metadata lookup.
pub trait FieldDefinitionSource {
    /// Returns the field definitions of a bundle in definition order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBundle`](crate::Error::UnknownBundle) if the
    /// entity type or bundle is unknown.
    fn field_definitions(&self, entity_type: &str, bundle: &str) -> Result<Vec<FieldDefinition>>;
}

/// Scheduled update type configuration store.
pub trait SubtypeConfigStore {
    /// Loads the configuration of a scheduled update type.
    ///
    /// Returns `Ok(None)` when no such type exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn load(&self, subtype: &str) -> Result<Option<SubtypeConfig>>;
}

/// Resolves the scheduled update behind a reference item.
pub trait ScheduledUpdateSource {
    /// Returns the record with the given identifier, if it exists.
    fn scheduled_update(&self, id: &str) -> Option<&ScheduledUpdate>;
}

/// Moderation information: which workflow governs an entity.
pub trait WorkflowSource {
    /// Returns the workflow moderating the entity's bundle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkflowNotFound`](crate::Error::WorkflowNotFound) if
    /// the bundle is not moderated.
    fn workflow_for_entity(&self, entity: &ContentEntity) -> Result<&Workflow>;
}
