// Rust guideline compliant 2026-10-16

//! Error types for the modsched core library.

use thiserror::Error;

/// Result type alias for modsched operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for modsched operations.
///
/// Invalid transitions are not errors: they are reported as
/// [`Violation`](crate::Violation) values.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    Config(String),

    /// The schema has no field definitions for the entity type and bundle.
    #[error("Unknown bundle: {entity_type}.{bundle}")]
    UnknownBundle {
        /// Entity type identifier.
        entity_type: String,
        /// Bundle name.
        bundle: String,
    },

    /// Scheduled update type configuration could not be loaded.
    #[error("Failed to load scheduled update type {subtype}: {reason}")]
    SubtypeConfig {
        /// Scheduled update type identifier.
        subtype: String,
        /// Underlying failure.
        reason: String,
    },

    /// The workflow has no state with this identifier.
    #[error("State not found in workflow {workflow}: {state}")]
    StateNotFound {
        /// Workflow identifier.
        workflow: String,
        /// Missing state identifier.
        state: String,
    },

    /// No workflow is attached to the entity's bundle.
    #[error("No workflow found for {0}")]
    WorkflowNotFound(String),

    /// Workflow definition is inconsistent.
    #[error("Invalid workflow {workflow}: {reason}")]
    InvalidWorkflow {
        /// Workflow identifier.
        workflow: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Entity not found.
    #[error("Entity not found: {0}")]
    EntityNotFound(String),
}
