//! Vertices and their derived labels.

use serde::{Deserialize, Serialize};

/// Vertex identifier. Unique within a graph.
pub type VertexId = u64;

/// Canvas position of a vertex. Only the editing layer cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A vertex of the simulator graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier.
    pub id: VertexId,
    /// Display label, derived from the id.
    pub label: String,
    /// Where the vertex sits on the canvas.
    pub position: Position,
}

impl Vertex {
    /// Create a vertex with the label derived from its id.
    pub fn new(id: VertexId, position: Position) -> Self {
        Self {
            id,
            label: label_for(id),
            position,
        }
    }
}

/// Derive the display label of a vertex id.
///
/// Ids 0..=25 map to `A`..`Z`. Past that the letter wraps and the lap number
/// is appended, so 26 is `A1`, 27 is `B1` and 52 is `A2`.
pub fn label_for(id: VertexId) -> String {
    let letter = char::from(b'A' + (id % 26) as u8);
    if id >= 26 {
        format!("{}{}", letter, id / 26)
    } else {
        letter.to_string()
    }
}
