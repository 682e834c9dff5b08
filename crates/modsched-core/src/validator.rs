// Rust guideline compliant 2026-10-16

//! Validation of scheduled moderation state transitions.
//!
//! The entity's post-save state and every scheduled state change form a
//! timeline. The timeline is sorted and each consecutive pair must be an edge
//! of the workflow graph:
//!
//! - Pairs touching a state the workflow does not know are skipped
//! - Every disallowed pair yields one [`Violation`]; the scan never stops early
//! - Sorting is stable: "now" first, then reference field and item order
//! - Unscheduled events sort after all timestamped ones

use crate::sources::{
    FieldDefinitionSource, ScheduledUpdateSource, SubtypeConfigStore, WorkflowSource,
};
use crate::timeline::TimelineBuilder;
use crate::{ContentEntity, Result, TimelineEvent, Workflow};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A consecutive timeline pair that the workflow does not permit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// When the disallowed transition would happen; `None` if unscheduled.
    pub timestamp: Option<i64>,
    /// Source state identifier.
    pub from_state: String,
    /// Target state identifier.
    pub to_state: String,
    /// Source state label.
    pub from_label: String,
    /// Target state label.
    pub to_label: String,
}

/// Validation outcome for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Entity identifier.
    pub entity_id: String,
    /// Entity label.
    pub entity_label: String,
    /// Workflow the timeline was checked against.
    pub workflow_id: String,
    /// Disallowed transitions, in timeline order.
    pub violations: Vec<Violation>,
}

impl Report {
    /// Returns true if no violation was found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks an entity's moderation timeline against a workflow.
///
/// The validator owns a state field cache; use one validator per thread.
pub struct TransitionValidator<'a> {
    builder: TimelineBuilder<'a>,
}

impl<'a> TransitionValidator<'a> {
    /// Creates a validator over the given collaborators.
    pub fn new(
        schema: &'a dyn FieldDefinitionSource,
        subtypes: &'a dyn SubtypeConfigStore,
        records: &'a dyn ScheduledUpdateSource,
    ) -> Self {
        Self {
            builder: TimelineBuilder::new(schema, subtypes, records),
        }
    }

    /// Returns the entity's sorted moderation timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if scheduled updates cannot be collected.
    pub fn timeline(&mut self, entity: &ContentEntity) -> Result<Vec<TimelineEvent>> {
        let mut timeline = Vec::new();
        if let Some(state) = entity.moderation_state() {
            timeline.push(TimelineEvent::now(state));
        }
        timeline.extend(self.builder.scheduled_state_transitions(entity)?);
        sort_timeline(&mut timeline);
        Ok(timeline)
    }

    /// Validates every transition in the entity's timeline.
    ///
    /// # Arguments
    ///
    /// * `entity` - The entity being saved
    /// * `workflow` - The workflow moderating the entity
    ///
    /// # Returns
    ///
    /// All disallowed transitions, possibly none.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's bundle is unknown or a scheduled
    /// update type configuration fails to load.
    pub fn validate(
        &mut self,
        entity: &ContentEntity,
        workflow: &Workflow,
    ) -> Result<Vec<Violation>> {
        let timeline = self.timeline(entity)?;
        let violations = check_timeline(&timeline, workflow);
        info!(
            entity = %entity.id,
            workflow = workflow.id(),
            events = timeline.len(),
            violations = violations.len(),
            "validated scheduled transitions"
        );
        Ok(violations)
    }

    /// Looks up the entity's workflow and validates against it.
    ///
    /// # Errors
    ///
    /// Returns an error if no workflow moderates the entity, or validation
    /// fails as in [`validate`](Self::validate).
    pub fn validate_entity(
        &mut self,
        entity: &ContentEntity,
        workflows: &dyn WorkflowSource,
    ) -> Result<Report> {
        let workflow = workflows.workflow_for_entity(entity)?;
        let violations = self.validate(entity, workflow)?;
        Ok(Report {
            entity_id: entity.id.clone(),
            entity_label: entity.label.clone(),
            workflow_id: workflow.id().to_string(),
            violations,
        })
    }

    /// Returns the number of scheduled update types resolved so far.
    pub fn cached_subtypes(&self) -> usize {
        self.builder.state_fields().cached_len()
    }
}

/// Sorts events chronologically, keeping insertion order for ties.
pub fn sort_timeline(timeline: &mut [TimelineEvent]) {
    timeline.sort_by(TimelineEvent::chronological);
}

/// Checks each consecutive pair of a sorted timeline against the workflow.
pub fn check_timeline(timeline: &[TimelineEvent], workflow: &Workflow) -> Vec<Violation> {
    timeline
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let (Ok(state_from), Ok(state_to)) =
                (workflow.state(&from.state), workflow.state(&to.state))
            else {
                debug!(
                    from = %from.state,
                    to = %to.state,
                    "skipping transition with unknown state"
                );
                return None;
            };

            if state_from.can_transition_to(state_to.id()) {
                return None;
            }

            Some(Violation {
                timestamp: to.time,
                from_state: state_from.id().to_string(),
                to_state: state_to.id().to_string(),
                from_label: state_from.label().to_string(),
                to_label: state_to.label().to_string(),
            })
        })
        .collect()
}
