// Rust guideline compliant 2026-10-16

//! Collection of scheduled moderation state changes for an entity.

use crate::resolver::{FieldResolver, StateFieldResolver};
use crate::sources::{FieldDefinitionSource, ScheduledUpdateSource, SubtypeConfigStore};
use crate::{
    ContentEntity, FieldAccess, FieldValue, Result, TimelineEvent, UPDATE_TIMESTAMP_FIELD,
};
use tracing::debug;

/// Gathers `(time, state)` events from an entity's scheduled updates.
pub struct TimelineBuilder<'a> {
    fields: FieldResolver<'a>,
    state_fields: StateFieldResolver<'a>,
    records: &'a dyn ScheduledUpdateSource,
}

impl<'a> TimelineBuilder<'a> {
    /// Creates a builder with its own state field cache.
    pub fn new(
        schema: &'a dyn FieldDefinitionSource,
        subtypes: &'a dyn SubtypeConfigStore,
        records: &'a dyn ScheduledUpdateSource,
    ) -> Self {
        Self {
            fields: FieldResolver::new(schema),
            state_fields: StateFieldResolver::new(subtypes),
            records,
        }
    }

    /// Returns the scheduled state changes attached to an entity.
    ///
    /// Events follow reference field definition order, then item order.
    /// Records whose type does not change moderation state, or that carry no
    /// target state, are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's bundle is unknown or a scheduled
    /// update type configuration fails to load.
    pub fn scheduled_state_transitions(
        &mut self,
        entity: &ContentEntity,
    ) -> Result<Vec<TimelineEvent>> {
        let reference_fields = self
            .fields
            .scheduled_update_reference_fields(&entity.entity_type, &entity.bundle)?;

        let records = self.records;
        let mut events = Vec::new();
        for field in &reference_fields {
            for record_id in entity.references(field) {
                let Some(record) = records.scheduled_update(record_id) else {
                    debug!(entity = %entity.id, record = %record_id, "dangling scheduled update reference");
                    continue;
                };

                let Some(state_field) = self
                    .state_fields
                    .moderation_state_field_name(&record.update_type)?
                else {
                    continue;
                };

                let Some(state) = record.text(state_field) else {
                    debug!(record = %record.id, "scheduled update has no target state");
                    continue;
                };

                let time = record.update_timestamp();
                let present = record
                    .get(UPDATE_TIMESTAMP_FIELD)
                    .is_some_and(|value| *value != FieldValue::Null);
                if time.is_none() && present {
                    debug!(record = %record.id, "unreadable update timestamp, treating as unscheduled");
                }

                events.push(TimelineEvent::at(time, state));
            }
        }

        Ok(events)
    }

    /// Returns the state field resolver, e.g. to inspect its cache.
    pub fn state_fields(&self) -> &StateFieldResolver<'a> {
        &self.state_fields
    }
}
