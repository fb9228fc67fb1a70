//! Error types for the graph-stepper library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the graph-stepper library.
#[derive(Error, Debug)]
pub enum StepperError {
    /// Start vertex is not part of the graph.
    #[error("Start vertex {0} does not exist in the graph")]
    InvalidStart(VertexId),

    /// Vertex not found by ID.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(VertexId),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on vertex {0}")]
    SelfEdge(VertexId),

    /// Graph edits require edit mode.
    #[error("Graph can only be edited in edit mode")]
    NotInEditMode,

    /// Stepping requires run mode.
    #[error("Traversal can only be stepped in run mode")]
    NotInRunMode,

    /// Operation not allowed while a traversal is underway.
    #[error("A traversal is in progress; reset it first")]
    TraversalInProgress,

    /// Slot index beyond the configured number of slots.
    #[error("Slot {slot} out of range (there are {count} slots)")]
    SlotOutOfRange { slot: usize, count: usize },

    /// Loading from a slot that holds nothing.
    #[error("Slot {0} is empty")]
    EmptySlot(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Slot file could not be parsed or written.
    #[error("Slot file error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed or written.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for graph-stepper operations.
pub type StepperResult<T> = Result<T, StepperError>;
