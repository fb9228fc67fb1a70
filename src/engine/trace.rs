//! Human-readable trace entries, newest first.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::VertexId;

use super::Strategy;

/// One line of the trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEntry {
    /// The start vertex was seeded into the frontier.
    Initialized { start: String, strategy: Strategy },
    /// A vertex was processed and discovered new neighbors.
    Explored {
        vertex: String,
        enqueued: Vec<String>,
        strategy: Strategy,
    },
    /// A vertex was processed and every neighbor was already discovered.
    NoNewNeighbors { vertex: String },
    /// The frontier emptied.
    Completed { strategy: Strategy },
    /// Run state was discarded.
    Reset,
    /// A step was attempted with a start vertex missing from the graph.
    InvalidStart { start: VertexId },
    VertexAdded { vertex: String },
    VertexRemoved { vertex: String },
    EdgeAdded { a: String, b: String },
    EdgeRemoved { a: String, b: String },
    StartChanged { vertex: String },
    StrategyChanged { strategy: Strategy },
    GraphCleared,
    /// Slot numbers are zero-based here and shown one-based.
    SlotSaved { slot: usize },
    SlotLoaded { slot: usize },
    SlotDeleted { slot: usize },
}

/// Capitalize the first letter of a container name.
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { start, strategy } => write!(
                f,
                "Start: added {} to the {} and marked it visited.",
                start,
                strategy.container_name()
            ),
            Self::Explored {
                vertex,
                enqueued,
                strategy,
            } => write!(
                f,
                "Exploring {}: neighbors ({}) -> {}.",
                vertex,
                enqueued.join(", "),
                strategy.container_name()
            ),
            Self::NoNewNeighbors { vertex } => {
                write!(f, "Exploring {}: no new neighbors.", vertex)
            }
            Self::Completed { strategy } => write!(
                f,
                "{} empty. Search complete.",
                capitalized(strategy.container_name())
            ),
            Self::Reset => write!(f, "Traversal reset."),
            Self::InvalidStart { start } => {
                write!(f, "Error: start vertex {} does not exist.", start)
            }
            Self::VertexAdded { vertex } => write!(f, "Vertex {} added.", vertex),
            Self::VertexRemoved { vertex } => write!(f, "Vertex {} removed.", vertex),
            Self::EdgeAdded { a, b } => write!(f, "Edge {} -- {} created.", a, b),
            Self::EdgeRemoved { a, b } => write!(f, "Edge {} -- {} removed.", a, b),
            Self::StartChanged { vertex } => write!(f, "Start vertex changed to {}.", vertex),
            Self::StrategyChanged { strategy } => write!(f, "Strategy set to {}.", strategy),
            Self::GraphCleared => write!(f, "Graph cleared."),
            Self::SlotSaved { slot } => write!(f, "Graph saved to slot {}.", slot + 1),
            Self::SlotLoaded { slot } => write!(f, "Graph loaded from slot {}.", slot + 1),
            Self::SlotDeleted { slot } => write!(f, "Slot {} deleted.", slot + 1),
        }
    }
}

/// Unbounded trace, newest entry first. Front ends cap what they display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceLog {
    entries: VecDeque<TraceEntry>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry as the newest.
    pub fn push(&mut self, entry: TraceEntry) {
        log::debug!("trace: {}", entry);
        self.entries.push_front(entry);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter()
    }

    /// The newest entry.
    pub fn newest(&self) -> Option<&TraceEntry> {
        self.entries.front()
    }

    /// At most `n` entries, newest first.
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter().take(n)
    }

    /// Rendered entries, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
