//! Immutable copies of engine state for renderers.

use serde::Serialize;

use crate::types::VertexId;

use super::{EngineState, Strategy};

/// Everything a renderer can observe about a run, frozen at one instant.
///
/// Successive snapshots can be diffed; nothing here aliases the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub state: EngineState,
    pub strategy: Strategy,
    pub start: VertexId,
    pub current: Option<VertexId>,
    /// Head (next to process) first.
    pub frontier: Vec<VertexId>,
    /// Ascending.
    pub visited: Vec<VertexId>,
    pub processed: Vec<VertexId>,
    /// Rendered trace, newest first.
    pub log: Vec<String>,
}

impl EngineSnapshot {
    /// Whether the run had ended when this snapshot was taken.
    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    /// Vertices discovered after `earlier` was taken, ascending.
    pub fn newly_visited(&self, earlier: &EngineSnapshot) -> Vec<VertexId> {
        self.visited
            .iter()
            .copied()
            .filter(|id| earlier.visited.binary_search(id).is_err())
            .collect()
    }
}
