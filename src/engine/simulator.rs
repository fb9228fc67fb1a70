//! Simulator session: graph, engine and save slots behind one set of rules.

use log::info;

use crate::config::StepperConfig;
use crate::graph::{EdgeToggle, Graph, GraphView};
use crate::storage::SlotStore;
use crate::types::{Position, StepperError, StepperResult, VertexId};

use super::{EngineSnapshot, EngineState, StepOutcome, Strategy, TraceEntry, TraceLog, TraversalEngine};

/// Whether the user is editing the graph or running a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Stepping allowed, graph frozen.
    #[default]
    Run,
    /// Graph edits allowed, engine held at `NotStarted`.
    Edit,
}

/// One user session.
///
/// The graph is only editable in `Edit` mode and the engine only steps in
/// `Run` mode, so the graph never changes under a running traversal.
#[derive(Debug)]
pub struct Simulator {
    graph: Graph,
    start: VertexId,
    strategy: Strategy,
    mode: Mode,
    engine: TraversalEngine,
    slots: SlotStore,
    activity: TraceLog,
}

impl Simulator {
    /// Session over `graph` with default settings.
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, &StepperConfig::default())
    }

    /// Session over `graph` using the config's start, strategy and slot count.
    pub fn with_config(graph: Graph, config: &StepperConfig) -> Self {
        Self::with_slots(
            graph,
            config.default_start,
            config.default_strategy,
            SlotStore::new(config.slot_count),
        )
    }

    /// Session with explicit start, strategy and pre-loaded slots.
    pub fn with_slots(
        graph: Graph,
        start: VertexId,
        strategy: Strategy,
        slots: SlotStore,
    ) -> Self {
        Self {
            graph,
            start,
            strategy,
            mode: Mode::Run,
            engine: TraversalEngine::new(start, strategy),
            slots,
            activity: TraceLog::new(),
        }
    }

    // ---- traversal ----

    /// Advance the traversal by one step.
    ///
    /// A start vertex missing from the graph is reported on the activity log
    /// as well as returned.
    pub fn step(&mut self) -> StepperResult<StepOutcome> {
        self.require_run()?;
        let result = self.engine.step(&self.graph);
        if let Err(StepperError::InvalidStart(start)) = &result {
            self.activity.push(TraceEntry::InvalidStart { start: *start });
        }
        result
    }

    /// Discard the run and go back to `NotStarted`.
    pub fn reset(&mut self) {
        self.engine.reset(self.start, self.strategy);
        self.activity.push(TraceEntry::Reset);
    }

    /// Whether a run has been seeded and has not finished.
    pub fn is_running(&self) -> bool {
        self.engine.state() == EngineState::Running
    }

    /// Switch between BFS and DFS. Any run in progress is discarded.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        if self.is_running() {
            info!("strategy changed mid-run, discarding the run");
        }
        self.strategy = strategy;
        self.activity.push(TraceEntry::StrategyChanged { strategy });
        self.reset();
    }

    /// Choose the start vertex. Only in run mode, before the run is seeded.
    pub fn set_start(&mut self, start: VertexId) -> StepperResult<()> {
        self.require_run()?;
        if self.engine.is_started() {
            return Err(StepperError::TraversalInProgress);
        }
        if !self.graph.contains_vertex(start) {
            return Err(StepperError::InvalidStart(start));
        }
        self.start = start;
        self.engine.reset(start, self.strategy);
        self.activity.push(TraceEntry::StartChanged {
            vertex: self.graph.label(start),
        });
        Ok(())
    }

    /// Enter run or edit mode. Entering edit mode resets the run.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::Edit && self.mode != Mode::Edit {
            self.reset();
        }
        self.mode = mode;
        info!("mode set to {:?}", mode);
    }

    // ---- editing ----

    /// Add a vertex; returns its id.
    pub fn add_vertex(&mut self, position: Position) -> StepperResult<VertexId> {
        self.require_edit()?;
        let id = self.graph.add_vertex(position);
        self.activity.push(TraceEntry::VertexAdded {
            vertex: self.graph.label(id),
        });
        Ok(id)
    }

    /// Remove a vertex and its edges. If it was the start, the first
    /// remaining vertex (or 0) becomes the start.
    pub fn remove_vertex(&mut self, id: VertexId) -> StepperResult<()> {
        self.require_edit()?;
        let removed = self.graph.remove_vertex(id)?;
        if self.start == id {
            self.start = self.graph.vertices().first().map(|v| v.id).unwrap_or(0);
            self.engine.reset(self.start, self.strategy);
        }
        self.activity.push(TraceEntry::VertexRemoved {
            vertex: removed.label,
        });
        Ok(())
    }

    /// Add the edge if absent, remove it if present.
    pub fn toggle_edge(&mut self, a: VertexId, b: VertexId) -> StepperResult<EdgeToggle> {
        self.require_edit()?;
        let toggle = self.graph.toggle_edge(a, b)?;
        let (a, b) = (self.graph.label(a), self.graph.label(b));
        self.activity.push(match toggle {
            EdgeToggle::Added => TraceEntry::EdgeAdded { a, b },
            EdgeToggle::Removed => TraceEntry::EdgeRemoved { a, b },
        });
        Ok(toggle)
    }

    /// Reposition a vertex.
    pub fn move_vertex(&mut self, id: VertexId, position: Position) -> StepperResult<()> {
        self.require_edit()?;
        self.graph.move_vertex(id, position)
    }

    /// Drop the whole graph. Allowed in either mode; resets the run.
    pub fn clear_graph(&mut self) {
        self.reset();
        self.graph.clear();
        self.activity.push(TraceEntry::GraphCleared);
    }

    fn require_run(&self) -> StepperResult<()> {
        if self.mode != Mode::Run {
            return Err(StepperError::NotInRunMode);
        }
        Ok(())
    }

    fn require_edit(&self) -> StepperResult<()> {
        if self.mode != Mode::Edit {
            return Err(StepperError::NotInEditMode);
        }
        Ok(())
    }

    // ---- save slots ----

    /// Store the current graph in `slot`.
    pub fn save_slot(&mut self, slot: usize) -> StepperResult<()> {
        self.slots.save(slot, &self.graph)?;
        self.activity.push(TraceEntry::SlotSaved { slot });
        Ok(())
    }

    /// Reset the run and replace the graph with the one stored in `slot`.
    ///
    /// If the start vertex does not exist in the loaded graph, the first
    /// vertex (or 0) becomes the start.
    pub fn load_slot(&mut self, slot: usize) -> StepperResult<()> {
        let graph = self.slots.load(slot)?;
        self.reset();
        self.graph = graph;
        if !self.graph.contains_vertex(self.start) {
            self.start = self.graph.vertices().first().map(|v| v.id).unwrap_or(0);
            self.engine.reset(self.start, self.strategy);
        }
        self.activity.push(TraceEntry::SlotLoaded { slot });
        Ok(())
    }

    /// Empty `slot`.
    pub fn delete_slot(&mut self, slot: usize) -> StepperResult<()> {
        self.slots.delete(slot)?;
        self.activity.push(TraceEntry::SlotDeleted { slot });
        Ok(())
    }

    // ---- accessors ----

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Editing and slot events, newest first. Survives resets.
    pub fn activity(&self) -> &TraceLog {
        &self.activity
    }

    /// Immutable copy of the engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Give up the session, keeping its slots.
    pub fn into_parts(self) -> (Graph, SlotStore) {
        (self.graph, self.slots)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Graph::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_need_edit_mode() {
        let mut sim = Simulator::default();
        assert!(matches!(
            sim.add_vertex(Position::default()),
            Err(StepperError::NotInEditMode)
        ));
        sim.set_mode(Mode::Edit);
        assert_eq!(sim.add_vertex(Position::default()).unwrap(), 6);
        assert!(matches!(sim.step(), Err(StepperError::NotInRunMode)));
    }

    #[test]
    fn entering_edit_mode_resets_run() {
        let mut sim = Simulator::default();
        sim.step().unwrap();
        sim.step().unwrap();
        sim.set_mode(Mode::Edit);
        assert_eq!(sim.engine().state(), EngineState::NotStarted);
        assert!(sim.engine().processed_order().is_empty());
    }

    #[test]
    fn removing_start_moves_it() {
        let mut sim = Simulator::default();
        sim.set_mode(Mode::Edit);
        sim.remove_vertex(0).unwrap();
        assert_eq!(sim.start(), 1);
        assert_eq!(sim.engine().start(), 1);
    }

    #[test]
    fn start_is_chosen_in_run_mode() {
        let mut sim = Simulator::default();
        sim.set_mode(Mode::Edit);
        assert!(matches!(sim.set_start(3), Err(StepperError::NotInRunMode)));
        assert_eq!(sim.start(), 0);
        sim.set_mode(Mode::Run);
        sim.set_start(3).unwrap();
        assert_eq!(sim.engine().start(), 3);
    }
}
