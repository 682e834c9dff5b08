// Rust guideline compliant 2026-10-16

//! Property-based tests for timeline sorting and transition checks.

use modsched_core::{
    check_timeline, sort_timeline, TimelineEvent, TransitionDefinition, Workflow,
    WorkflowDefinition, WorkflowState,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

const STATES: [&str; 4] = ["draft", "review", "published", "archived"];

/// Generates a workflow over `STATES` with an arbitrary edge set.
fn arb_workflow() -> impl Strategy<Value = (Workflow, HashSet<(String, String)>)> {
    prop::collection::vec(any::<bool>(), STATES.len() * STATES.len()).prop_map(|mask| {
        let mut edges = HashSet::new();
        let mut transitions = Vec::new();
        for (i, allowed) in mask.into_iter().enumerate() {
            if !allowed {
                continue;
            }
            let from = STATES[i / STATES.len()];
            let to = STATES[i % STATES.len()];
            edges.insert((from.to_string(), to.to_string()));
            transitions.push(TransitionDefinition {
                id: format!("t{}", i),
                label: String::new(),
                from: vec![from.to_string()],
                to: to.to_string(),
            });
        }
        let definition = WorkflowDefinition {
            id: "prop".to_string(),
            label: String::new(),
            states: STATES
                .iter()
                .map(|id| WorkflowState {
                    id: id.to_string(),
                    label: id.to_uppercase(),
                })
                .collect(),
            transitions,
            bundles: BTreeMap::new(),
        };
        let workflow = Workflow::from_definition(definition).expect("Generated workflow is valid");
        (workflow, edges)
    })
}

/// Generates events over known states plus one unknown state.
fn arb_event() -> impl Strategy<Value = TimelineEvent> {
    let state = prop_oneof![
        Just("draft"),
        Just("review"),
        Just("published"),
        Just("archived"),
        Just("ghost"),
    ];
    (prop::option::weighted(0.9, 0i64..100), state)
        .prop_map(|(time, state)| TimelineEvent::at(time, state))
}

proptest! {
    /// Sorted timelines are non-decreasing with unscheduled events last.
    #[test]
    fn prop_sort_is_chronological(mut timeline in prop::collection::vec(arb_event(), 0..20)) {
        sort_timeline(&mut timeline);
        for pair in timeline.windows(2) {
            match (pair[0].time, pair[1].time) {
                (Some(a), Some(b)) => prop_assert!(a <= b),
                (None, Some(_)) => prop_assert!(false, "unscheduled before scheduled"),
                _ => {}
            }
        }
    }

    /// Sorting keeps the original order of events sharing a timestamp.
    #[test]
    fn prop_sort_is_stable(timeline in prop::collection::vec(arb_event(), 0..20)) {
        let tagged: Vec<(usize, TimelineEvent)> = timeline.into_iter().enumerate().collect();
        let mut sorted = tagged.clone();
        sorted.sort_by(|a, b| a.1.chronological(&b.1));
        for pair in sorted.windows(2) {
            if pair[0].1.time == pair[1].1.time {
                prop_assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    /// A violation is reported exactly for each known, disallowed adjacent pair.
    #[test]
    fn prop_violations_match_edge_set(
        (workflow, edges) in arb_workflow(),
        timeline in prop::collection::vec(arb_event(), 0..12),
    ) {
        let expected: Vec<(String, String)> = timeline
            .windows(2)
            .filter(|pair| workflow.has_state(&pair[0].state) && workflow.has_state(&pair[1].state))
            .filter(|pair| !edges.contains(&(pair[0].state.clone(), pair[1].state.clone())))
            .map(|pair| (pair[0].state.clone(), pair[1].state.clone()))
            .collect();

        let actual: Vec<(String, String)> = check_timeline(&timeline, &workflow)
            .into_iter()
            .map(|v| (v.from_state, v.to_state))
            .collect();

        prop_assert_eq!(actual, expected);
    }

    /// Checking never reports more violations than adjacent pairs, and is repeatable.
    #[test]
    fn prop_check_is_bounded_and_idempotent(
        (workflow, _edges) in arb_workflow(),
        timeline in prop::collection::vec(arb_event(), 0..12),
    ) {
        let first = check_timeline(&timeline, &workflow);
        let second = check_timeline(&timeline, &workflow);
        prop_assert!(first.len() <= timeline.len().saturating_sub(1));
        prop_assert_eq!(first, second);
    }

    /// Timelines with fewer than two events never violate.
    #[test]
    fn prop_short_timelines_are_valid(
        (workflow, _edges) in arb_workflow(),
        timeline in prop::collection::vec(arb_event(), 0..2),
    ) {
        prop_assert!(check_timeline(&timeline, &workflow).is_empty());
    }
}
