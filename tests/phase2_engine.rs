//! Phase 2 tests: Traversal engine.

use std::collections::HashSet;

use rand::Rng;

use graph_stepper::engine::{EngineState, StepOutcome, Strategy, TraceEntry, TraversalEngine};
use graph_stepper::graph::{Graph, GraphBuilder};
use graph_stepper::types::error::StepperError;
use graph_stepper::types::VertexId;

// ==================== Helper ====================

/// Random graph with `n` vertices and roughly `n * degree / 2` edges.
fn random_graph(n: usize, degree: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();
    builder.vertices(n);
    for a in 0..n as VertexId {
        for _ in 0..degree / 2 {
            let b = rng.gen_range(0..n as VertexId);
            if a != b {
                builder.link(a, b);
            }
        }
    }
    builder.build().unwrap()
}

/// Step until finished, returning how many step calls it took.
fn count_steps(engine: &mut TraversalEngine, graph: &Graph) -> usize {
    let mut steps = 0;
    while !engine.is_finished() {
        engine.step(graph).unwrap();
        steps += 1;
        assert!(steps <= graph.vertex_count() + 2, "runaway traversal");
    }
    steps
}

// ==================== Order Determinism ====================

#[test]
fn test_bfs_order_on_sample() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    let order = engine.run_to_completion(&graph).unwrap().to_vec();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_dfs_order_on_sample() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::DepthFirst);
    let order = engine.run_to_completion(&graph).unwrap().to_vec();
    assert_eq!(order, vec![0, 1, 3, 4, 5, 2]);
}

#[test]
fn test_rerun_is_identical() {
    let graph = random_graph(40, 4);
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let mut a = TraversalEngine::new(0, strategy);
        let mut b = TraversalEngine::new(0, strategy);
        a.run_to_completion(&graph).unwrap();
        b.run_to_completion(&graph).unwrap();
        assert_eq!(a.processed_order(), b.processed_order());
        assert_eq!(a.log().lines(), b.log().lines());
    }
}

#[test]
fn test_dfs_block_prepended_in_ascending_order() {
    // 0 connects to 3, 1, 2 (inserted out of order); DFS must still take 1 first.
    let mut builder = GraphBuilder::new();
    builder.vertices(4);
    builder.links(&[(0, 3), (0, 1), (0, 2)]);
    let graph = builder.build().unwrap();

    let mut engine = TraversalEngine::new(0, Strategy::DepthFirst);
    engine.step(&graph).unwrap();
    engine.step(&graph).unwrap();
    assert_eq!(engine.current_frontier(), vec![1, 2, 3]);
}

// ==================== Invariants ====================

#[test]
fn test_discovery_once_and_processed_subset_of_visited() {
    for _ in 0..20 {
        let graph = random_graph(30, 6);
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            let mut engine = TraversalEngine::new(0, strategy);
            let mut discovered: Vec<VertexId> = Vec::new();
            loop {
                let before = engine.visited_set().clone();
                let outcome = engine.step(&graph).unwrap();
                if let StepOutcome::Explored {
                    discovered: new, ..
                } = &outcome
                {
                    for id in new {
                        assert!(!before.contains(id), "vertex {} discovered twice", id);
                    }
                    discovered.extend(new.iter().copied());
                }
                for id in engine.processed_order() {
                    assert!(engine.visited_set().contains(id));
                }
                for id in engine.current_frontier() {
                    assert!(engine.visited_set().contains(&id));
                }
                if engine.is_finished() {
                    break;
                }
            }
            let processed: HashSet<VertexId> = engine.processed_order().iter().copied().collect();
            assert_eq!(processed.len(), engine.processed_order().len());
            // Start plus everything discovered equals everything processed.
            assert_eq!(discovered.len() + 1, processed.len());
        }
    }
}

#[test]
fn test_frontier_vertex_not_readded() {
    // Triangle: 0-1, 0-2, 1-2. After 0 is processed both 1 and 2 are
    // waiting; processing 1 must not push 2 again.
    let mut builder = GraphBuilder::new();
    builder.vertices(3);
    builder.links(&[(0, 1), (0, 2), (1, 2)]);
    let graph = builder.build().unwrap();

    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.step(&graph).unwrap();
    engine.step(&graph).unwrap();
    let outcome = engine.step(&graph).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::Explored {
            vertex: 1,
            discovered: vec![]
        }
    );
    assert_eq!(engine.current_frontier(), vec![2]);
}

#[test]
fn test_termination_step_count() {
    let graph = Graph::sample();
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let mut engine = TraversalEngine::new(2, strategy);
        // 6 reachable vertices + seed + terminal step.
        assert_eq!(count_steps(&mut engine, &graph), 8);
    }
}

#[test]
fn test_disconnected_vertex_never_visited() {
    let mut builder = GraphBuilder::new();
    builder.vertices(4);
    builder.links(&[(0, 1), (1, 2)]);
    let graph = builder.build().unwrap();

    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    assert_eq!(count_steps(&mut engine, &graph), 5);
    assert!(!engine.visited_set().contains(&3));
    assert!(!engine.processed_order().contains(&3));
    assert_eq!(engine.state(), EngineState::Finished);
}

#[test]
fn test_single_vertex_graph() {
    let mut builder = GraphBuilder::new();
    builder.vertex();
    let graph = builder.build().unwrap();
    let mut engine = TraversalEngine::new(0, Strategy::DepthFirst);
    assert_eq!(count_steps(&mut engine, &graph), 3);
    assert_eq!(engine.processed_order(), &[0]);
}

// ==================== Lifecycle ====================

#[test]
fn test_invalid_start_leaves_state_unchanged() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.step(&graph).unwrap();
    engine.step(&graph).unwrap();
    let before = engine.snapshot();

    let err = engine.initialize(&graph, 99, Strategy::BreadthFirst);
    assert!(matches!(err, Err(StepperError::InvalidStart(99))));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_invalid_start_on_first_step() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(42, Strategy::DepthFirst);
    assert!(matches!(
        engine.step(&graph),
        Err(StepperError::InvalidStart(42))
    ));
    assert_eq!(engine.state(), EngineState::NotStarted);
    assert!(engine.visited_set().is_empty());
}

#[test]
fn test_initialize_seeds_running_state() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.run_to_completion(&graph).unwrap();

    engine.initialize(&graph, 3, Strategy::DepthFirst).unwrap();
    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(engine.current_frontier(), vec![3]);
    assert_eq!(engine.visited_set().iter().copied().collect::<Vec<_>>(), vec![3]);
    assert!(engine.processed_order().is_empty());
    assert_eq!(engine.current_vertex(), None);
    assert_eq!(engine.log().len(), 1);
    assert_eq!(engine.strategy(), Strategy::DepthFirst);
}

#[test]
fn test_finished_step_is_noop() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.run_to_completion(&graph).unwrap();
    let before = engine.snapshot();
    for _ in 0..5 {
        assert_eq!(engine.step(&graph).unwrap(), StepOutcome::AlreadyFinished);
    }
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.current_vertex(), None);
}

#[test]
fn test_reset_discards_run() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.run_to_completion(&graph).unwrap();
    engine.reset(5, Strategy::DepthFirst);
    assert_eq!(engine.state(), EngineState::NotStarted);
    assert!(engine.processed_order().is_empty());
    assert!(engine.log().is_empty());
    assert_eq!(engine.run_to_completion(&graph).unwrap(), &[5, 2, 0, 1, 3, 4]);
}

// ==================== Trace ====================

#[test]
fn test_trace_for_bfs_run() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.run_to_completion(&graph).unwrap();

    let mut lines = engine.log().lines();
    lines.reverse();
    assert_eq!(
        lines,
        vec![
            "Start: added A to the queue and marked it visited.",
            "Exploring A: neighbors (B, C) -> queue.",
            "Exploring B: neighbors (D, E) -> queue.",
            "Exploring C: neighbors (F) -> queue.",
            "Exploring D: no new neighbors.",
            "Exploring E: no new neighbors.",
            "Exploring F: no new neighbors.",
            "Queue empty. Search complete.",
        ]
    );
}

#[test]
fn test_trace_entry_kinds_for_dfs() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::DepthFirst);
    engine.step(&graph).unwrap();
    engine.step(&graph).unwrap();
    assert_eq!(
        engine.log().newest(),
        Some(&TraceEntry::Explored {
            vertex: "A".to_string(),
            enqueued: vec!["B".to_string(), "C".to_string()],
            strategy: Strategy::DepthFirst,
        })
    );
    engine.run_to_completion(&graph).unwrap();
    assert_eq!(
        engine.log().newest().map(|e| e.to_string()),
        Some("Stack empty. Search complete.".to_string())
    );
}

#[test]
fn test_snapshot_diff() {
    let graph = Graph::sample();
    let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
    engine.step(&graph).unwrap();
    let first = engine.snapshot();
    engine.step(&graph).unwrap();
    let second = engine.snapshot();
    assert_eq!(second.newly_visited(&first), vec![1, 2]);
    assert_eq!(second.current, Some(0));
    assert!(!second.is_finished());
}
