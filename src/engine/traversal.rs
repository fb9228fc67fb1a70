//! The step-at-a-time traversal state machine.

use std::collections::BTreeSet;

use log::{debug, info, warn};
use serde::Serialize;

use crate::graph::GraphView;
use crate::types::{StepperError, StepperResult, VertexId};

use super::{EngineSnapshot, Frontier, Strategy, TraceEntry, TraceLog};

/// Lifecycle of one traversal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Reset, the frontier has not been seeded yet.
    NotStarted,
    /// Seeded; each step processes one vertex.
    Running,
    /// The frontier emptied. Terminal until reset.
    Finished,
}

/// What a single `step` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The start vertex was seeded. Nothing was dequeued.
    Started { start: VertexId },
    /// `vertex` was processed; `discovered` were new, ascending.
    Explored {
        vertex: VertexId,
        discovered: Vec<VertexId>,
    },
    /// The frontier was empty and the run ended on this step.
    Completed,
    /// The run had already ended; nothing changed.
    AlreadyFinished,
}

/// How a renderer should colour a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexStatus {
    /// Most recently processed.
    Current,
    /// Discovered, waiting in the frontier.
    InFrontier,
    /// Processed earlier.
    Processed,
    /// Never discovered.
    Unvisited,
}

/// Deterministic, resumable BFS/DFS engine.
///
/// A vertex is marked visited when it is discovered (pushed into the
/// frontier), not when it is processed. A vertex waiting in the frontier is
/// therefore never pushed again, whoever reaches it next.
#[derive(Debug)]
pub struct TraversalEngine {
    start: VertexId,
    strategy: Strategy,
    state: EngineState,
    frontier: Box<dyn Frontier>,
    visited: BTreeSet<VertexId>,
    processed: Vec<VertexId>,
    current: Option<VertexId>,
    trace: TraceLog,
}

impl TraversalEngine {
    /// Create an engine that will start from `start` on its first step.
    pub fn new(start: VertexId, strategy: Strategy) -> Self {
        Self {
            start,
            strategy,
            state: EngineState::NotStarted,
            frontier: strategy.new_frontier(),
            visited: BTreeSet::new(),
            processed: Vec::new(),
            current: None,
            trace: TraceLog::new(),
        }
    }

    /// Discard all run state and go back to `NotStarted`.
    pub fn reset(&mut self, start: VertexId, strategy: Strategy) {
        *self = Self::new(start, strategy);
    }

    /// Discard prior run state and seed a new run from `start`.
    ///
    /// Fails with `InvalidStart` if `start` is not in `graph`, in which case
    /// the engine is left exactly as it was.
    pub fn initialize<G: GraphView + ?Sized>(
        &mut self,
        graph: &G,
        start: VertexId,
        strategy: Strategy,
    ) -> StepperResult<()> {
        if !graph.contains_vertex(start) {
            warn!("rejected start vertex {}", start);
            return Err(StepperError::InvalidStart(start));
        }
        self.reset(start, strategy);
        self.seed(graph);
        Ok(())
    }

    /// Advance the traversal by exactly one unit of work.
    ///
    /// The first step after a reset seeds the frontier. After that each step
    /// processes one vertex, and the step that finds the frontier empty ends
    /// the run. Only the seeding step can fail.
    pub fn step<G: GraphView + ?Sized>(&mut self, graph: &G) -> StepperResult<StepOutcome> {
        match self.state {
            EngineState::NotStarted => {
                self.initialize(graph, self.start, self.strategy)?;
                Ok(StepOutcome::Started { start: self.start })
            }
            EngineState::Finished => Ok(StepOutcome::AlreadyFinished),
            EngineState::Running => Ok(self.advance(graph)),
        }
    }

    /// Step until the run ends; returns the processed order.
    pub fn run_to_completion<G: GraphView + ?Sized>(
        &mut self,
        graph: &G,
    ) -> StepperResult<&[VertexId]> {
        while !self.is_finished() {
            self.step(graph)?;
        }
        Ok(&self.processed)
    }

    fn seed<G: GraphView + ?Sized>(&mut self, graph: &G) {
        self.frontier.push_block(&[self.start]);
        self.visited.insert(self.start);
        self.state = EngineState::Running;
        info!("{} started at vertex {}", self.strategy, self.start);
        self.trace.push(TraceEntry::Initialized {
            start: graph.label(self.start),
            strategy: self.strategy,
        });
    }

    fn advance<G: GraphView + ?Sized>(&mut self, graph: &G) -> StepOutcome {
        let Some(current) = self.frontier.pop() else {
            self.state = EngineState::Finished;
            self.current = None;
            info!(
                "{} finished after processing {} vertices",
                self.strategy,
                self.processed.len()
            );
            self.trace.push(TraceEntry::Completed {
                strategy: self.strategy,
            });
            return StepOutcome::Completed;
        };

        self.current = Some(current);
        self.processed.push(current);

        // sorted_neighbors is deduplicated, so each id is inserted once.
        let discovered: Vec<VertexId> = graph
            .sorted_neighbors(current)
            .into_iter()
            .filter(|id| !self.visited.contains(id))
            .collect();
        debug!("processed {}, discovered {:?}", current, discovered);

        if discovered.is_empty() {
            self.trace.push(TraceEntry::NoNewNeighbors {
                vertex: graph.label(current),
            });
        } else {
            self.visited.extend(discovered.iter().copied());
            self.frontier.push_block(&discovered);
            self.trace.push(TraceEntry::Explored {
                vertex: graph.label(current),
                enqueued: discovered.iter().map(|&id| graph.label(id)).collect(),
                strategy: self.strategy,
            });
        }

        StepOutcome::Explored {
            vertex: current,
            discovered,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether the run has ended.
    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    /// Whether the frontier has been seeded since the last reset.
    pub fn is_started(&self) -> bool {
        self.state != EngineState::NotStarted
    }

    /// The configured start vertex.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Pending vertices, next to be processed first.
    pub fn current_frontier(&self) -> Vec<VertexId> {
        self.frontier.to_vec()
    }

    /// The vertex processed by the latest step, if any.
    pub fn current_vertex(&self) -> Option<VertexId> {
        self.current
    }

    /// Vertices in the order they were processed.
    pub fn processed_order(&self) -> &[VertexId] {
        &self.processed
    }

    /// Every vertex discovered so far.
    pub fn visited_set(&self) -> &BTreeSet<VertexId> {
        &self.visited
    }

    /// This run's trace, newest first.
    pub fn log(&self) -> &TraceLog {
        &self.trace
    }

    /// How `id` should be shown right now.
    pub fn vertex_status(&self, id: VertexId) -> VertexStatus {
        if self.current == Some(id) {
            VertexStatus::Current
        } else if self.frontier.contains(id) {
            VertexStatus::InFrontier
        } else if self.processed.contains(&id) {
            VertexStatus::Processed
        } else {
            VertexStatus::Unvisited
        }
    }

    /// Immutable copy of everything observable.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state,
            strategy: self.strategy,
            start: self.start,
            current: self.current,
            frontier: self.frontier.to_vec(),
            visited: self.visited.iter().copied().collect(),
            processed: self.processed.clone(),
            log: self.trace.lines(),
        }
    }
}
