//! CLI command implementations.

use std::path::Path;

use crate::config::StepperConfig;
use crate::engine::{AutoPlayDriver, EngineSnapshot, Mode, Simulator, StepOutcome, Strategy};
use crate::graph::{Graph, GraphView};
use crate::storage::{SlotReader, SlotStore, SlotWriter};
use crate::types::{Position, StepperError, StepperResult, VertexId};

/// A graph edit applied to a stored slot.
#[derive(Debug, Clone, Copy)]
pub enum EditOp {
    AddVertex { x: f32, y: f32 },
    RemoveVertex(VertexId),
    ToggleEdge(VertexId, VertexId),
    MoveVertex { id: VertexId, x: f32, y: f32 },
    Clear,
}

fn read_slots(config: &StepperConfig) -> StepperResult<SlotStore> {
    SlotReader::read_or_default(&config.slot_file, config.slot_count)
}

fn write_slots(config: &StepperConfig, slots: &SlotStore) -> StepperResult<()> {
    SlotWriter::write_to_file(slots, &config.slot_file)
}

fn labels(graph: &Graph, ids: &[VertexId]) -> String {
    ids.iter()
        .map(|&id| graph.label(id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The newest trace lines of the current run, capped at the configured
/// display limit, newest first.
pub fn recent_trace(sim: &Simulator, config: &StepperConfig) -> Vec<String> {
    sim.engine()
        .log()
        .latest(config.log_display_limit)
        .map(|e| e.to_string())
        .collect()
}

/// Run a traversal step by step and print each stage.
///
/// With `autoplay` the run is paced at the configured period; `delay_ms`
/// overrides that period. `trace` prints the run's trace log at the end.
#[allow(clippy::too_many_arguments)]
pub fn cmd_run(
    config: &StepperConfig,
    slot: Option<usize>,
    strategy: Option<Strategy>,
    start: Option<VertexId>,
    autoplay: bool,
    delay_ms: Option<u64>,
    trace: bool,
    json: bool,
) -> StepperResult<()> {
    let graph = match slot {
        Some(s) => read_slots(config)?.load(s)?,
        None => Graph::sample(),
    };
    let mut sim = Simulator::with_slots(
        graph,
        start.unwrap_or(config.default_start),
        strategy.unwrap_or(config.default_strategy),
        SlotStore::new(0),
    );

    let mut snapshots: Vec<EngineSnapshot> = Vec::new();
    let mut report = |outcome: &StepOutcome, sim: &Simulator| {
        if json {
            snapshots.push(sim.snapshot());
        } else {
            print_step(outcome, sim);
        }
    };

    match config.run_period(autoplay, delay_ms) {
        Some(period) => {
            AutoPlayDriver::new(period).run_blocking(&mut sim, report)?;
        }
        None => {
            while !sim.engine().is_finished() {
                let outcome = sim.step()?;
                report(&outcome, &sim);
            }
        }
    }

    let processed = sim.engine().processed_order().to_vec();
    if json {
        let out = serde_json::json!({
            "strategy": sim.strategy(),
            "start": sim.start(),
            "steps": snapshots,
            "processed": processed,
            "trace": if trace { recent_trace(&sim, config) } else { Vec::new() },
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "{} order from {}: {}",
            sim.strategy(),
            sim.graph().label(sim.start()),
            labels(sim.graph(), &processed)
        );
        let unreached: Vec<VertexId> = sim
            .graph()
            .vertex_ids()
            .into_iter()
            .filter(|id| !sim.engine().visited_set().contains(id))
            .collect();
        if !unreached.is_empty() {
            println!("Unreached: {}", labels(sim.graph(), &unreached));
        }
        if trace {
            println!("Trace (newest first):");
            for line in recent_trace(&sim, config) {
                println!("  {}", line);
            }
        }
    }
    Ok(())
}

fn print_step(outcome: &StepOutcome, sim: &Simulator) {
    let engine = sim.engine();
    let line = engine
        .log()
        .newest()
        .map(|e| e.to_string())
        .unwrap_or_default();
    match outcome {
        StepOutcome::AlreadyFinished => {}
        StepOutcome::Completed => println!("{}", line),
        _ => println!(
            "{:<48} {}: [{}]",
            line,
            engine.strategy().container_name(),
            labels(sim.graph(), &engine.current_frontier())
        ),
    }
}

/// List every slot.
pub fn cmd_slots(config: &StepperConfig, json: bool) -> StepperResult<()> {
    let slots = read_slots(config)?;
    if json {
        let list: Vec<serde_json::Value> = slots
            .iter()
            .enumerate()
            .map(|(i, s)| match s {
                Some(snap) => serde_json::json!({
                    "slot": i,
                    "vertices": snap.vertices.len(),
                    "edges": snap.edges.len(),
                    "saved_at": snap.saved_at,
                }),
                None => serde_json::json!({"slot": i, "empty": true}),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list).unwrap_or_default());
    } else {
        for (i, s) in slots.iter().enumerate() {
            match s {
                Some(snap) => println!(
                    "Slot {}: {} vertices, {} edges, saved {}",
                    i,
                    snap.vertices.len(),
                    snap.edges.len(),
                    snap.saved_at_display()
                ),
                None => println!("Slot {}: empty", i),
            }
        }
    }
    Ok(())
}

/// Print the graph stored in a slot.
pub fn cmd_show(config: &StepperConfig, slot: usize, json: bool) -> StepperResult<()> {
    let slots = read_slots(config)?;
    let snap = slots.get(slot)?.ok_or(StepperError::EmptySlot(slot))?;
    if json {
        println!("{}", serde_json::to_string_pretty(snap).unwrap_or_default());
        return Ok(());
    }
    let graph = snap.to_graph()?;
    println!("Slot {} (saved {})", slot, snap.saved_at_display());
    for v in graph.vertices() {
        println!(
            "  {} [{}] at ({:.0}, {:.0}) -> {}",
            v.label,
            v.id,
            v.position.x,
            v.position.y,
            labels(&graph, &graph.neighbors(v.id))
        );
    }
    Ok(())
}

/// Store the built-in sample graph in a slot.
pub fn cmd_save_sample(config: &StepperConfig, slot: usize, json: bool) -> StepperResult<()> {
    let mut slots = read_slots(config)?;
    slots.save(slot, &Graph::sample())?;
    write_slots(config, &slots)?;
    if json {
        println!("{}", serde_json::json!({"saved": slot}));
    } else {
        println!("Saved sample graph to slot {}", slot);
    }
    Ok(())
}

/// Empty a slot.
pub fn cmd_delete_slot(config: &StepperConfig, slot: usize, json: bool) -> StepperResult<()> {
    let mut slots = read_slots(config)?;
    let had = slots.delete(slot)?.is_some();
    write_slots(config, &slots)?;
    if json {
        println!("{}", serde_json::json!({"deleted": slot, "was_empty": !had}));
    } else if had {
        println!("Deleted slot {}", slot);
    } else {
        println!("Slot {} was already empty", slot);
    }
    Ok(())
}

/// Apply one edit to the graph in a slot and store it back.
///
/// An empty slot is edited as an empty graph.
pub fn cmd_edit(config: &StepperConfig, slot: usize, op: EditOp, json: bool) -> StepperResult<()> {
    let slots = read_slots(config)?;
    let mut sim = Simulator::with_slots(
        Graph::new(),
        config.default_start,
        config.default_strategy,
        slots,
    );
    match sim.load_slot(slot) {
        Ok(()) | Err(StepperError::EmptySlot(_)) => {}
        Err(e) => return Err(e),
    }
    sim.set_mode(Mode::Edit);

    let message = match op {
        EditOp::AddVertex { x, y } => {
            let id = sim.add_vertex(Position::new(x, y))?;
            format!("Added vertex {} ({})", sim.graph().label(id), id)
        }
        EditOp::RemoveVertex(id) => {
            sim.remove_vertex(id)?;
            format!("Removed vertex {}", id)
        }
        EditOp::ToggleEdge(a, b) => {
            let toggle = sim.toggle_edge(a, b)?;
            format!("Edge {} -- {}: {:?}", a, b, toggle)
        }
        EditOp::MoveVertex { id, x, y } => {
            sim.move_vertex(id, Position::new(x, y))?;
            format!("Moved vertex {} to ({}, {})", id, x, y)
        }
        EditOp::Clear => {
            sim.clear_graph();
            "Cleared graph".to_string()
        }
    };

    sim.save_slot(slot)?;
    let (graph, slots) = sim.into_parts();
    write_slots(config, &slots)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "slot": slot,
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            })
        );
    } else {
        println!("{} in slot {}", message, slot);
    }
    Ok(())
}

/// Write the effective configuration to a TOML file.
pub fn cmd_init_config(config: &StepperConfig, path: &Path) -> StepperResult<()> {
    config.save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
