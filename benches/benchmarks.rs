//! Criterion benchmarks for graph-stepper.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use graph_stepper::engine::{Strategy, TraversalEngine};
use graph_stepper::graph::{Graph, GraphBuilder};
use graph_stepper::storage::{SlotReader, SlotStore, SlotWriter};
use graph_stepper::types::VertexId;

/// Random connected-ish graph: a spanning chain plus random extra edges.
fn make_graph(vertex_count: usize, extra_edges_per_vertex: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();
    for _ in 0..vertex_count {
        builder.vertex_at(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));
    }
    for i in 1..vertex_count as VertexId {
        builder.link(i - 1, i);
    }
    for i in 0..vertex_count as VertexId {
        for _ in 0..extra_edges_per_vertex {
            let j = rng.gen_range(0..vertex_count as VertexId);
            if i != j {
                builder.link(i, j);
            }
        }
    }
    builder.build().unwrap()
}

fn bench_full_runs(c: &mut Criterion) {
    let graph = make_graph(500, 3);
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        c.bench_function(&format!("{}_run_500", strategy.name()), |b| {
            b.iter(|| {
                let mut engine = TraversalEngine::new(0, strategy);
                engine.run_to_completion(&graph).unwrap().len()
            })
        });
    }
}

fn bench_single_step(c: &mut Criterion) {
    let graph = make_graph(500, 3);
    c.bench_function("bfs_step_with_snapshot", |b| {
        b.iter(|| {
            let mut engine = TraversalEngine::new(0, Strategy::BreadthFirst);
            for _ in 0..20 {
                engine.step(&graph).unwrap();
            }
            engine.snapshot()
        })
    });
}

fn bench_slot_serialization(c: &mut Criterion) {
    let mut store = SlotStore::default();
    store.save(0, &make_graph(200, 2)).unwrap();
    c.bench_function("slot_write_read_200", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            SlotWriter::write_to(&store, &mut buf).unwrap();
            SlotReader::read_from(&mut std::io::Cursor::new(buf)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_full_runs,
    bench_single_step,
    bench_slot_serialization
);
criterion_main!(benches);
