//! Fluent API for building Graph instances.

use crate::types::{Edge, Position, StepperResult, Vertex, VertexId};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Vertices get sequential ids unless placed explicitly with `vertex_with_id`.
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_id: VertexId,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a vertex at the origin, returns its ID.
    pub fn vertex(&mut self) -> VertexId {
        self.vertex_at(0.0, 0.0)
    }

    /// Add a vertex at a position, returns its ID.
    pub fn vertex_at(&mut self, x: f32, y: f32) -> VertexId {
        let id = self.next_id;
        self.vertex_with_id(id, Position::new(x, y));
        id
    }

    /// Add a vertex with an explicit ID. Later sequential ids continue past it.
    pub fn vertex_with_id(&mut self, id: VertexId, position: Position) -> &mut Self {
        self.vertices.push(Vertex::new(id, position));
        self.next_id = self.next_id.max(id + 1);
        self
    }

    /// Add `count` vertices at the origin, returns their IDs.
    pub fn vertices(&mut self, count: usize) -> Vec<VertexId> {
        (0..count).map(|_| self.vertex()).collect()
    }

    /// Add an undirected edge between two vertices.
    pub fn link(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Add edges from a list of pairs.
    pub fn links(&mut self, pairs: &[(VertexId, VertexId)]) -> &mut Self {
        for &(a, b) in pairs {
            self.link(a, b);
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> StepperResult<Graph> {
        Graph::from_parts(self.vertices, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
