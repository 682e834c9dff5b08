// Rust guideline compliant 2026-10-16

//! Moderation workflow graph.
//!
//! A workflow is a directed graph whose nodes are moderation states and whose
//! edges are the permitted transitions between them. Each transition
//! definition may list several source states; every `(from, to)` pair becomes
//! one edge.

use crate::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A state as declared in a workflow definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// State identifier, e.g. `draft`.
    pub id: String,
    /// Human-readable label, e.g. `Draft`.
    pub label: String,
}

/// A named transition from one or more states into a target state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    /// Transition identifier, e.g. `publish`.
    pub id: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Source state identifiers.
    pub from: Vec<String>,
    /// Target state identifier.
    pub to: String,
}

/// Serializable workflow definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    /// Workflow identifier.
    pub id: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Declared states.
    pub states: Vec<WorkflowState>,
    /// Declared transitions.
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
    /// Entity type to the bundles moderated by this workflow.
    #[serde(default)]
    pub bundles: BTreeMap<String, Vec<String>>,
}

/// A validated workflow backed by a directed state graph.
#[derive(Debug, Clone)]
pub struct Workflow {
    definition: WorkflowDefinition,
    /// Nodes are indices into `definition.states`; edges carry the transition id.
    graph: DiGraph<usize, String>,
    id_to_node: HashMap<String, NodeIndex>,
}

impl Workflow {
    /// Builds a workflow graph from its definition.
    ///
    /// # Arguments
    ///
    /// * `definition` - The workflow definition
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two states share an identifier
    /// - A transition references an undeclared state
    pub fn from_definition(definition: WorkflowDefinition) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut id_to_node = HashMap::new();

        for (position, state) in definition.states.iter().enumerate() {
            let node = graph.add_node(position);
            if id_to_node.insert(state.id.clone(), node).is_some() {
                return Err(Error::InvalidWorkflow {
                    workflow: definition.id.clone(),
                    reason: format!("duplicate state {}", state.id),
                });
            }
        }

        for transition in &definition.transitions {
            let to = *id_to_node
                .get(&transition.to)
                .ok_or_else(|| unknown_state(&definition, transition, &transition.to))?;
            for from_id in &transition.from {
                let from = *id_to_node
                    .get(from_id)
                    .ok_or_else(|| unknown_state(&definition, transition, from_id))?;
                graph.update_edge(from, to, transition.id.clone());
            }
        }

        Ok(Self {
            definition,
            graph,
            id_to_node,
        })
    }

    /// Returns the workflow identifier.
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    /// Returns the workflow label.
    pub fn label(&self) -> &str {
        &self.definition.label
    }

    /// Returns true if this workflow moderates the given bundle.
    pub fn applies_to(&self, entity_type: &str, bundle: &str) -> bool {
        self.definition
            .bundles
            .get(entity_type)
            .is_some_and(|bundles| bundles.iter().any(|b| b == bundle))
    }

    /// Returns true if the workflow declares the state.
    pub fn has_state(&self, id: &str) -> bool {
        self.id_to_node.contains_key(id)
    }

    /// Looks up a state by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateNotFound`] if the workflow has no such state.
    pub fn state(&self, id: &str) -> Result<State<'_>> {
        self.id_to_node
            .get(id)
            .map(|&node| State {
                workflow: self,
                node,
            })
            .ok_or_else(|| Error::StateNotFound {
                workflow: self.definition.id.clone(),
                state: id.to_string(),
            })
    }

    /// Returns every permitted `(from, to)` pair in declaration order.
    pub fn transitions(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(from, to)| (self.state_id(from), self.state_id(to)))
            .collect()
    }

    fn state_def(&self, node: NodeIndex) -> &WorkflowState {
        &self.definition.states[self.graph[node]]
    }

    fn state_id(&self, node: NodeIndex) -> &str {
        &self.state_def(node).id
    }
}

fn unknown_state(
    definition: &WorkflowDefinition,
    transition: &TransitionDefinition,
    state: &str,
) -> Error {
    Error::InvalidWorkflow {
        workflow: definition.id.clone(),
        reason: format!(
            "transition {} references unknown state {}",
            transition.id, state
        ),
    }
}

/// A state within a workflow.
#[derive(Debug, Clone, Copy)]
pub struct State<'a> {
    workflow: &'a Workflow,
    node: NodeIndex,
}

impl<'a> State<'a> {
    /// Returns the state identifier.
    pub fn id(&self) -> &'a str {
        self.workflow.state_id(self.node)
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'a str {
        &self.workflow.state_def(self.node).label
    }

    /// Checks if the workflow permits a transition into `target`.
    ///
    /// Unknown targets are never reachable.
    pub fn can_transition_to(&self, target: &str) -> bool {
        self.workflow
            .id_to_node
            .get(target)
            .is_some_and(|&to| self.workflow.graph.contains_edge(self.node, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> WorkflowDefinition {
        WorkflowDefinition {
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
                from: vec!["draft".to_string(), "published".to_string()],
                to: "published".to_string(),
            }],
            bundles: BTreeMap::new(),
        }
    }

    #[test]
    fn test_multi_source_transition_adds_edges() {
        let workflow = Workflow::from_definition(definition()).unwrap();
        assert_eq!(
            workflow.transitions(),
            vec![("draft", "published"), ("published", "published")]
        );
    }

    #[test]
    fn test_unknown_target_rejected() {
        let mut def = definition();
        def.transitions[0].to = "archived".to_string();
        let err = Workflow::from_definition(def).unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_duplicate_state_rejected() {
        let mut def = definition();
        def.states.push(WorkflowState {
            id: "draft".to_string(),
            label: "Draft again".to_string(),
        });
        assert!(matches!(
            Workflow::from_definition(def),
            Err(Error::InvalidWorkflow { .. })
        ));
    }
}
