//! Traversal engine and the session machinery around it.

pub mod autoplay;
pub mod frontier;
pub mod shared;
pub mod simulator;
pub mod snapshot;
pub mod trace;
pub mod traversal;

pub use autoplay::{AutoPlayDriver, PollOutcome};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, Strategy};
pub use shared::SharedSimulator;
pub use simulator::{Mode, Simulator};
pub use snapshot::EngineSnapshot;
pub use trace::{TraceEntry, TraceLog};
pub use traversal::{EngineState, StepOutcome, TraversalEngine, VertexStatus};
