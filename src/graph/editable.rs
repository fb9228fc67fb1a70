//! Core graph structure: vertices and undirected edges.

use std::collections::BTreeSet;

use log::debug;

use crate::types::{Edge, Position, StepperError, StepperResult, Vertex, VertexId};

use super::GraphView;

/// What `Graph::toggle_edge` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeToggle {
    /// The edge was absent and has been created.
    Added,
    /// The edge existed and has been removed.
    Removed,
}

/// The user-editable graph the simulator runs over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// All vertices, in insertion order.
    vertices: Vec<Vertex>,
    /// All edges, normalized and deduplicated.
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six-vertex graph the simulator opens with.
    ///
    /// ```text
    ///        A
    ///      /   \
    ///     B     C
    ///    / \     \
    ///   D   E --- F
    /// ```
    pub fn sample() -> Self {
        let positions = [
            (250.0, 100.0),
            (100.0, 200.0),
            (350.0, 200.0),
            (100.0, 300.0),
            (200.0, 300.0),
            (400.0, 300.0),
        ];
        let vertices = positions
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Vertex::new(id as VertexId, Position::new(x, y)))
            .collect();
        let edges = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (4, 5)]
            .iter()
            .map(|&(a, b)| Edge::new(a, b))
            .collect();
        Self { vertices, edges }
    }

    /// Create from pre-existing data (used by slot loading and the builder).
    ///
    /// Duplicate edges collapse. Edges must join two distinct, existing vertices.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> StepperResult<Self> {
        let mut graph = Self {
            vertices: Vec::with_capacity(vertices.len()),
            edges: BTreeSet::new(),
        };
        for vertex in vertices {
            if graph.get_vertex(vertex.id).is_none() {
                graph.vertices.push(vertex);
            }
        }
        for edge in edges {
            graph.check_edge(edge.low(), edge.high())?;
            graph.edges.insert(edge);
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get a vertex by ID.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, ordered by endpoints.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Whether an edge joins `a` and `b`.
    pub fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// The id the next added vertex will get: one past the largest id, or 0.
    pub fn next_id(&self) -> VertexId {
        self.vertices.iter().map(|v| v.id + 1).max().unwrap_or(0)
    }

    /// Add a vertex at `position`, returns the assigned ID.
    pub fn add_vertex(&mut self, position: Position) -> VertexId {
        let id = self.next_id();
        self.vertices.push(Vertex::new(id, position));
        debug!("added vertex {}", id);
        id
    }

    /// Remove a vertex and all its edges.
    pub fn remove_vertex(&mut self, id: VertexId) -> StepperResult<Vertex> {
        let pos = self
            .vertices
            .iter()
            .position(|v| v.id == id)
            .ok_or(StepperError::VertexNotFound(id))?;
        let removed = self.vertices.remove(pos);
        self.edges.retain(|e| !e.touches(id));
        debug!("removed vertex {}", id);
        Ok(removed)
    }

    /// Add the edge `a -- b` if absent, remove it if present.
    pub fn toggle_edge(&mut self, a: VertexId, b: VertexId) -> StepperResult<EdgeToggle> {
        self.check_edge(a, b)?;
        let edge = Edge::new(a, b);
        if self.edges.remove(&edge) {
            debug!("removed edge {}", edge);
            Ok(EdgeToggle::Removed)
        } else {
            self.edges.insert(edge);
            debug!("added edge {}", edge);
            Ok(EdgeToggle::Added)
        }
    }

    /// Reposition a vertex.
    pub fn move_vertex(&mut self, id: VertexId, position: Position) -> StepperResult<()> {
        let vertex = self
            .vertices
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StepperError::VertexNotFound(id))?;
        vertex.position = position;
        Ok(())
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Neighbors of `id`, ascending.
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        // Edges are ordered by (low, high), not by the opposite endpoint.
        let mut out: Vec<VertexId> = self.edges.iter().filter_map(|e| e.other(id)).collect();
        out.sort_unstable();
        out
    }

    fn check_edge(&self, a: VertexId, b: VertexId) -> StepperResult<()> {
        if a == b {
            return Err(StepperError::SelfEdge(a));
        }
        for id in [a, b] {
            if self.get_vertex(id).is_none() {
                return Err(StepperError::VertexNotFound(id));
            }
        }
        Ok(())
    }
}

impl GraphView for Graph {
    fn contains_vertex(&self, id: VertexId) -> bool {
        self.get_vertex(id).is_some()
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.vertices.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids
    }

    fn edges_incident_to(&self, id: VertexId) -> Vec<VertexId> {
        self.neighbors(id)
    }

    fn label(&self, id: VertexId) -> String {
        self.get_vertex(id)
            .map(|v| v.label.clone())
            .unwrap_or_else(|| "?".to_string())
    }
}
