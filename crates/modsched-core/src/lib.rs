// Rust guideline compliant 2026-10-16

//! modsched Core Library
//!
//! Validates that the moderation state changes scheduled for a content entity
//! only follow transitions its workflow permits:
//! - Data models (entities, scheduled updates, timeline events)
//! - Workflow state graph
//! - Reference field and state field resolution
//! - Timeline building and transition validation
//! - Violation messages, site documents and configuration

pub mod config;
pub mod error;
pub mod message;
pub mod models;
pub mod resolver;
pub mod site;
pub mod sources;
pub mod timeline;
pub mod validator;
pub mod workflow;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use message::MessageFormat;
pub use models::{
    ContentEntity, FieldAccess, FieldDefinition, FieldValue, ScheduledUpdate, SubtypeConfig,
    TimelineEvent, ENTITY_REFERENCE_TYPE, MODERATION_STATE_FIELD, SCHEDULED_UPDATE_TYPE,
    UPDATE_TIMESTAMP_FIELD,
};
pub use resolver::{FieldResolver, StateFieldResolver};
pub use site::{Site, SiteDocument};
pub use sources::{
    FieldDefinitionSource, ScheduledUpdateSource, SubtypeConfigStore, WorkflowSource,
};
pub use timeline::TimelineBuilder;
pub use validator::{check_timeline, sort_timeline, Report, TransitionValidator, Violation};
pub use workflow::{State, TransitionDefinition, Workflow, WorkflowDefinition, WorkflowState};
