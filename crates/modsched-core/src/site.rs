// Rust guideline compliant 2026-10-16

//! JSON site documents.
//!
//! A site document holds everything the validator consults: bundle schemas,
//! scheduled update types, scheduled update records, workflows and content
//! entities. [`Site`] implements every collaborator trait over it.

use crate::sources::{
    FieldDefinitionSource, ScheduledUpdateSource, SubtypeConfigStore, WorkflowSource,
};
use crate::workflow::WorkflowDefinition;
use crate::{
    ContentEntity, Error, FieldDefinition, Result, ScheduledUpdate, SubtypeConfig,
    TransitionValidator, Workflow,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Serialized form of a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDocument {
    /// Entity type to bundle to field definitions.
    #[serde(default)]
    pub field_definitions: BTreeMap<String, BTreeMap<String, Vec<FieldDefinition>>>,
    /// Scheduled update types.
    #[serde(default)]
    pub scheduled_update_types: Vec<SubtypeConfig>,
    /// Scheduled update records.
    #[serde(default)]
    pub scheduled_updates: Vec<ScheduledUpdate>,
    /// Workflow definitions.
    #[serde(default)]
    pub workflows: Vec<WorkflowDefinition>,
    /// Content entities.
    #[serde(default)]
    pub entities: Vec<ContentEntity>,
}

/// An indexed, validated site.
#[derive(Debug, Clone)]
pub struct Site {
    field_definitions: BTreeMap<String, BTreeMap<String, Vec<FieldDefinition>>>,
    subtypes: HashMap<String, SubtypeConfig>,
    updates: HashMap<String, ScheduledUpdate>,
    workflows: Vec<Workflow>,
    entities: Vec<ContentEntity>,
}

impl Site {
    /// Builds a site from its document.
    ///
    /// # Errors
    ///
    /// Returns an error if a workflow definition is invalid.
    pub fn from_document(document: SiteDocument) -> Result<Self> {
        let workflows = document
            .workflows
            .into_iter()
            .map(Workflow::from_definition)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            field_definitions: document.field_definitions,
            subtypes: document
                .scheduled_update_types
                .into_iter()
                .map(|config| (config.id.clone(), config))
                .collect(),
            updates: document
                .scheduled_updates
                .into_iter()
                .map(|update| (update.id.clone(), update))
                .collect(),
            workflows,
            entities: document.entities,
        })
    }

    /// Parses a site from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a workflow is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Loads a site from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Creates a validator backed by this site, with a fresh state field cache.
    pub fn validator(&self) -> TransitionValidator<'_> {
        TransitionValidator::new(self, self, self)
    }

    /// Returns all entities in document order.
    pub fn entities(&self) -> &[ContentEntity] {
        &self.entities
    }

    /// Finds an entity by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntityNotFound`] if no entity has the identifier.
    pub fn entity(&self, id: &str) -> Result<&ContentEntity> {
        self.entities
            .iter()
            .find(|entity| entity.id == id)
            .ok_or_else(|| Error::EntityNotFound(id.to_string()))
    }

    /// Finds a workflow by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkflowNotFound`] if no workflow has the identifier.
    pub fn workflow(&self, id: &str) -> Result<&Workflow> {
        self.workflows
            .iter()
            .find(|workflow| workflow.id() == id)
            .ok_or_else(|| Error::WorkflowNotFound(id.to_string()))
    }

    /// Returns all workflows in document order.
    pub fn workflows(&self) -> &[Workflow] {
        &self.workflows
    }
}

impl FieldDefinitionSource for Site {
    fn field_definitions(&self, entity_type: &str, bundle: &str) -> Result<Vec<FieldDefinition>> {
        self.field_definitions
            .get(entity_type)
            .and_then(|bundles| bundles.get(bundle))
            .cloned()
            .ok_or_else(|| Error::UnknownBundle {
                entity_type: entity_type.to_string(),
                bundle: bundle.to_string(),
            })
    }
}

impl SubtypeConfigStore for Site {
    fn load(&self, subtype: &str) -> Result<Option<SubtypeConfig>> {
        Ok(self.subtypes.get(subtype).cloned())
    }
}

impl ScheduledUpdateSource for Site {
    fn scheduled_update(&self, id: &str) -> Option<&ScheduledUpdate> {
        self.updates.get(id)
    }
}

impl WorkflowSource for Site {
    fn workflow_for_entity(&self, entity: &ContentEntity) -> Result<&Workflow> {
        self.workflows
            .iter()
            .find(|workflow| workflow.applies_to(&entity.entity_type, &entity.bundle))
            .ok_or_else(|| {
                Error::WorkflowNotFound(format!("{}.{}", entity.entity_type, entity.bundle))
            })
    }
}
