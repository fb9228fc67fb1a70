//! Undirected edges.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// An undirected edge between two distinct vertices.
///
/// Endpoints are stored normalized (`low <= high`) so `(a, b)` and `(b, a)`
/// compare equal. On disk an edge is a two-element array, `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[VertexId; 2]", into = "[VertexId; 2]")]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Create an edge between `a` and `b`, in either order.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller endpoint.
    pub fn low(&self) -> VertexId {
        self.low
    }

    /// The larger endpoint.
    pub fn high(&self) -> VertexId {
        self.high
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: VertexId) -> bool {
        self.low == id || self.high == id
    }

    /// The endpoint opposite `id`, if `id` is on this edge.
    pub fn other(&self, id: VertexId) -> Option<VertexId> {
        if self.low == id {
            Some(self.high)
        } else if self.high == id {
            Some(self.low)
        } else {
            None
        }
    }
}

impl From<[VertexId; 2]> for Edge {
    fn from(pair: [VertexId; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Edge> for [VertexId; 2] {
    fn from(edge: Edge) -> Self {
        [edge.low, edge.high]
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.low, self.high)
    }
}
