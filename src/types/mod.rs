//! All data types for the graph-stepper library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{StepperError, StepperResult};
pub use vertex::{label_for, Position, Vertex, VertexId};

/// Number of save slots when no configuration says otherwise.
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Auto-play period in milliseconds when no configuration says otherwise.
pub const DEFAULT_AUTOPLAY_PERIOD_MS: u64 = 1000;

/// Number of trace entries a front end shows by default.
pub const DEFAULT_LOG_DISPLAY_LIMIT: usize = 50;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
