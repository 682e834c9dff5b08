// Rust guideline compliant 2026-10-16

//! Field lookups used while building a timeline.

use crate::sources::{FieldDefinitionSource, SubtypeConfigStore};
use crate::{Result, MODERATION_STATE_FIELD};
use std::collections::HashMap;
use tracing::debug;

/// Finds the fields on a bundle that reference scheduled updates.
#[derive(Clone, Copy)]
pub struct FieldResolver<'a> {
    schema: &'a dyn FieldDefinitionSource,
}

impl<'a> FieldResolver<'a> {
    /// Creates a resolver over the given schema source.
    pub fn new(schema: &'a dyn FieldDefinitionSource) -> Self {
        Self { schema }
    }

    /// Returns the names of entity reference fields targeting scheduled
    /// updates, in definition order.
    ///
    /// # Arguments
    ///
    /// * `entity_type` - Entity type identifier
    /// * `bundle` - Bundle name
    ///
    /// # Errors
    ///
    /// Propagates the schema source's error for unknown bundles.
    pub fn scheduled_update_reference_fields(
        &self,
        entity_type: &str,
        bundle: &str,
    ) -> Result<Vec<String>> {
        let definitions = self.schema.field_definitions(entity_type, bundle)?;
        Ok(definitions
            .into_iter()
            .filter(|definition| definition.references_scheduled_updates())
            .map(|definition| definition.name)
            .collect())
    }
}

/// Memoizing lookup of the record field that carries a new moderation state.
///
/// Each scheduled update type is loaded from the store at most once per
/// resolver; both hits and misses are cached. Store failures are returned
/// and not cached.
pub struct StateFieldResolver<'a> {
    store: &'a dyn SubtypeConfigStore,
    cache: HashMap<String, Option<String>>,
}

impl<'a> StateFieldResolver<'a> {
    /// Creates a resolver with an empty cache.
    pub fn new(store: &'a dyn SubtypeConfigStore) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    /// Returns the field holding new state values for a scheduled update type.
    ///
    /// # Arguments
    ///
    /// * `subtype` - Scheduled update type identifier
    ///
    /// # Returns
    ///
    /// The field name, or `None` if the type does not change moderation state.
    ///
    /// # Errors
    ///
    /// Returns an error if the type configuration cannot be loaded.
    pub fn moderation_state_field_name(&mut self, subtype: &str) -> Result<Option<&str>> {
        if !self.cache.contains_key(subtype) {
            let field = self.store.load(subtype)?.and_then(|config| {
                config
                    .source_field_for(MODERATION_STATE_FIELD)
                    .map(str::to_string)
            });
            debug!(subtype, field = ?field, "resolved moderation state field");
            self.cache.insert(subtype.to_string(), field);
        }

        Ok(self.cache.get(subtype).and_then(|field| field.as_deref()))
    }

    /// Returns the number of cached scheduled update types.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
