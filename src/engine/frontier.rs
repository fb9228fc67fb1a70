//! Traversal strategies and the frontier containers they use.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::VertexId;

/// The traversal discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Breadth-first: FIFO frontier.
    #[default]
    BreadthFirst,
    /// Depth-first: LIFO frontier.
    DepthFirst,
}

impl Strategy {
    /// Short name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            _ => None,
        }
    }

    /// What the frontier is called under this strategy.
    pub fn container_name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "queue",
            Self::DepthFirst => "stack",
        }
    }

    /// A fresh, empty frontier of the matching kind.
    pub fn new_frontier(&self) -> Box<dyn Frontier> {
        match self {
            Self::BreadthFirst => Box::new(FifoFrontier::default()),
            Self::DepthFirst => Box::new(LifoFrontier::default()),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

/// Discovered-but-not-yet-processed vertices.
///
/// Both variants remove from the head; they differ only in where a newly
/// discovered block goes. A block keeps its internal order either way.
pub trait Frontier: std::fmt::Debug + Send {
    /// Remove and return the next vertex to process.
    fn pop(&mut self) -> Option<VertexId>;

    /// Insert a block of newly discovered vertices.
    fn push_block(&mut self, block: &[VertexId]);

    /// Number of pending vertices.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` is pending.
    fn contains(&self, id: VertexId) -> bool;

    /// Pending vertices from head (next to pop) to tail.
    fn to_vec(&self) -> Vec<VertexId>;
}

/// Queue: blocks go to the tail.
#[derive(Debug, Default, Clone)]
pub struct FifoFrontier {
    items: VecDeque<VertexId>,
}

impl Frontier for FifoFrontier {
    fn pop(&mut self) -> Option<VertexId> {
        self.items.pop_front()
    }

    fn push_block(&mut self, block: &[VertexId]) {
        self.items.extend(block.iter().copied());
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, id: VertexId) -> bool {
        self.items.contains(&id)
    }

    fn to_vec(&self) -> Vec<VertexId> {
        self.items.iter().copied().collect()
    }
}

/// Stack: blocks go to the head, so the block's first vertex pops next.
#[derive(Debug, Default, Clone)]
pub struct LifoFrontier {
    items: VecDeque<VertexId>,
}

impl Frontier for LifoFrontier {
    fn pop(&mut self) -> Option<VertexId> {
        self.items.pop_front()
    }

    fn push_block(&mut self, block: &[VertexId]) {
        for &id in block.iter().rev() {
            self.items.push_front(id);
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, id: VertexId) -> bool {
        self.items.contains(&id)
    }

    fn to_vec(&self) -> Vec<VertexId> {
        self.items.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_appends_blocks() {
        let mut f = FifoFrontier::default();
        f.push_block(&[1, 2]);
        f.push_block(&[3, 4]);
        assert_eq!(f.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn lifo_prepends_blocks_in_order() {
        let mut f = LifoFrontier::default();
        f.push_block(&[1, 2]);
        f.push_block(&[3, 4]);
        assert_eq!(f.to_vec(), vec![3, 4, 1, 2]);
        assert_eq!(f.pop(), Some(3));
        assert!(f.contains(4));
        assert!(!f.contains(3));
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::from_name("DFS"), Some(Strategy::DepthFirst));
        assert_eq!(Strategy::from_name("breadth_first"), Some(Strategy::BreadthFirst));
        assert_eq!(Strategy::from_name("dijkstra"), None);
        assert_eq!(Strategy::DepthFirst.to_string(), "DFS");
        assert!(Strategy::BreadthFirst.new_frontier().is_empty());
    }
}
