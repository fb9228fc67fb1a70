//! graph-stepper: step-by-step BFS/DFS over a small editable graph.
//!
//! The traversal engine performs one discrete visit per step and exposes its
//! frontier, visited set, processed order and trace after every step, so a
//! front end can render each stage. Around it sit an editable graph model,
//! save slots, an auto-play driver and a thread-safe session wrapper.

pub mod cli;
pub mod config;
pub mod engine;
pub mod graph;
pub mod storage;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::StepperConfig;
pub use engine::{
    AutoPlayDriver, EngineSnapshot, EngineState, Frontier, Mode, PollOutcome, SharedSimulator,
    Simulator, StepOutcome, Strategy, TraceEntry, TraceLog, TraversalEngine, VertexStatus,
};
pub use graph::{EdgeToggle, Graph, GraphBuilder, GraphView};
pub use storage::{GraphSnapshot, SlotReader, SlotStore, SlotWriter};
pub use types::{
    label_for, now_micros, Edge, Position, StepperError, StepperResult, Vertex, VertexId,
};
