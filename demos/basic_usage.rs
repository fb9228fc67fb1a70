//! Step through BFS and DFS on the sample graph and print every stage.

use graph_stepper::{Graph, GraphView, StepOutcome, Strategy, TraversalEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::sample();

    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        println!("== {} ==", strategy);
        let mut engine = TraversalEngine::new(0, strategy);
        loop {
            let outcome = engine.step(&graph)?;
            if outcome == StepOutcome::AlreadyFinished {
                break;
            }
            let frontier: Vec<String> = engine
                .current_frontier()
                .iter()
                .map(|&id| graph.label(id))
                .collect();
            if let Some(entry) = engine.log().newest() {
                println!("{:<48} [{}]", entry.to_string(), frontier.join(", "));
            }
        }
        let order: Vec<String> = engine
            .processed_order()
            .iter()
            .map(|&id| graph.label(id))
            .collect();
        println!("order: {}\n", order.join(" -> "));
    }
    Ok(())
}
