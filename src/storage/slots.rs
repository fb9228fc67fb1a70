//! In-memory save slots.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{
    now_micros, Edge, StepperError, StepperResult, Vertex, DEFAULT_SLOT_COUNT,
};

/// A stored copy of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    /// When the snapshot was taken (Unix epoch microseconds).
    pub saved_at: u64,
}

impl GraphSnapshot {
    /// Capture `graph` now.
    pub fn capture(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertices().to_vec(),
            edges: graph.edges().copied().collect(),
            saved_at: now_micros(),
        }
    }

    /// Rebuild the graph. Fails if the stored edges reference missing vertices.
    pub fn to_graph(&self) -> StepperResult<Graph> {
        Graph::from_parts(self.vertices.clone(), self.edges.clone())
    }

    /// Wall-clock time of the save, `HH:MM:SS` in UTC.
    pub fn saved_at_display(&self) -> String {
        chrono::DateTime::from_timestamp_micros(self.saved_at as i64)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "??:??:??".to_string())
    }
}

/// Fixed number of slots, each empty or holding one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotStore {
    slots: Vec<Option<GraphSnapshot>>,
}

impl SlotStore {
    /// `count` empty slots.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// Pad with empty slots up to `count`. Never drops stored slots.
    pub fn ensure_slot_count(&mut self, count: usize) {
        if self.slots.len() < count {
            self.slots.resize(count, None);
        }
    }

    /// Number of slots, empty or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The snapshot in `slot`, if any.
    pub fn get(&self, slot: usize) -> StepperResult<Option<&GraphSnapshot>> {
        self.check(slot)?;
        Ok(self.slots[slot].as_ref())
    }

    /// Every slot in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&GraphSnapshot>> {
        self.slots.iter().map(|s| s.as_ref())
    }

    /// Store a copy of `graph` in `slot`, replacing what was there.
    pub fn save(&mut self, slot: usize, graph: &Graph) -> StepperResult<&GraphSnapshot> {
        self.check(slot)?;
        Ok(&*self.slots[slot].insert(GraphSnapshot::capture(graph)))
    }

    /// Rebuild the graph stored in `slot`.
    pub fn load(&self, slot: usize) -> StepperResult<Graph> {
        self.get(slot)?
            .ok_or(StepperError::EmptySlot(slot))?
            .to_graph()
    }

    /// Empty `slot`. Returns what it held.
    pub fn delete(&mut self, slot: usize) -> StepperResult<Option<GraphSnapshot>> {
        self.check(slot)?;
        Ok(self.slots[slot].take())
    }

    fn check(&self, slot: usize) -> StepperResult<()> {
        if slot >= self.slots.len() {
            return Err(StepperError::SlotOutOfRange {
                slot,
                count: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_delete() {
        let mut store = SlotStore::default();
        assert_eq!(store.slot_count(), 3);
        store.save(1, &Graph::sample()).unwrap();
        assert_eq!(store.load(1).unwrap(), Graph::sample());
        assert!(matches!(store.load(0), Err(StepperError::EmptySlot(0))));
        assert!(store.delete(1).unwrap().is_some());
        assert!(store.get(1).unwrap().is_none());
    }

    #[test]
    fn out_of_range() {
        let mut store = SlotStore::new(2);
        assert!(matches!(
            store.save(2, &Graph::sample()),
            Err(StepperError::SlotOutOfRange { slot: 2, count: 2 })
        ));
        store.ensure_slot_count(4);
        assert_eq!(store.slot_count(), 4);
        store.ensure_slot_count(1);
        assert_eq!(store.slot_count(), 4);
    }

    #[test]
    fn timestamp_display_shape() {
        let mut snap = GraphSnapshot::capture(&Graph::new());
        snap.saved_at = 3_723_000_000;
        assert_eq!(snap.saved_at_display(), "01:02:03");
    }
}
