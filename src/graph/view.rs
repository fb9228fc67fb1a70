//! Read-only graph access used by the traversal engine.

use crate::types::{label_for, VertexId};

/// What the traversal engine needs to know about a graph.
///
/// Implementors only expose structure. The engine never mutates the graph and
/// re-derives neighbors from whatever view it is handed on each step.
pub trait GraphView {
    /// Whether `id` is a vertex of this graph.
    fn contains_vertex(&self, id: VertexId) -> bool;

    /// All vertex ids, ascending.
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// The opposite endpoint of every edge touching `id`, in any order.
    ///
    /// May contain repeats if the graph allows parallel edges.
    fn edges_incident_to(&self, id: VertexId) -> Vec<VertexId>;

    /// Display label for `id`.
    fn label(&self, id: VertexId) -> String {
        label_for(id)
    }

    /// Neighbors of `id`, ascending and without repeats.
    fn sorted_neighbors(&self, id: VertexId) -> Vec<VertexId> {
        let mut neighbors = self.edges_incident_to(id);
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }
}
