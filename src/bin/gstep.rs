//! CLI entry point for the `gstep` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_stepper::cli::commands::{self, EditOp};
use graph_stepper::engine::Strategy;
use graph_stepper::{StepperConfig, StepperError};

#[derive(Parser)]
#[command(
    name = "gstep",
    about = "graph-stepper CLI: step through BFS/DFS on small graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slot file (overrides the configuration)
    #[arg(long)]
    slot_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a traversal step by step
    Run {
        /// Strategy: bfs or dfs
        #[arg(long)]
        strategy: Option<String>,
        /// Start vertex ID
        #[arg(long)]
        start: Option<u64>,
        /// Traverse the graph in this slot instead of the sample graph
        #[arg(long)]
        slot: Option<usize>,
        /// Auto-play at the configured period
        #[arg(long)]
        autoplay: bool,
        /// Auto-play with this many milliseconds between steps
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Print the trace log after the run
        #[arg(long)]
        trace: bool,
    },
    /// List save slots
    Slots,
    /// Show the graph stored in a slot
    Show {
        /// Slot index
        #[arg(long)]
        slot: usize,
    },
    /// Store the built-in sample graph in a slot
    SaveSample {
        /// Slot index
        #[arg(long)]
        slot: usize,
    },
    /// Empty a slot
    DeleteSlot {
        /// Slot index
        slot: usize,
    },
    /// Add a vertex to a slot's graph
    AddVertex {
        /// Slot index
        #[arg(long)]
        slot: usize,
        x: f32,
        y: f32,
    },
    /// Remove a vertex and its edges from a slot's graph
    RemoveVertex {
        /// Slot index
        #[arg(long)]
        slot: usize,
        id: u64,
    },
    /// Add the edge if absent, remove it if present
    ToggleEdge {
        /// Slot index
        #[arg(long)]
        slot: usize,
        a: u64,
        b: u64,
    },
    /// Reposition a vertex
    MoveVertex {
        /// Slot index
        #[arg(long)]
        slot: usize,
        id: u64,
        x: f32,
        y: f32,
    },
    /// Remove every vertex and edge from a slot's graph
    Clear {
        /// Slot index
        #[arg(long)]
        slot: usize,
    },
    /// Write the effective configuration as TOML
    InitConfig {
        /// Destination file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let mut config = match StepperConfig::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    if let Some(path) = cli.slot_file {
        config.slot_file = path;
    }

    let result = match cli.command {
        Commands::Run {
            strategy,
            start,
            slot,
            autoplay,
            delay_ms,
            trace,
        } => {
            let strategy = match strategy.as_deref().map(Strategy::from_name) {
                None => None,
                Some(Some(s)) => Some(s),
                Some(None) => {
                    eprintln!("Invalid strategy: {}", strategy.unwrap_or_default());
                    process::exit(3);
                }
            };
            commands::cmd_run(
                &config, slot, strategy, start, autoplay, delay_ms, trace, json,
            )
        }
        Commands::Slots => commands::cmd_slots(&config, json),
        Commands::Show { slot } => commands::cmd_show(&config, slot, json),
        Commands::SaveSample { slot } => commands::cmd_save_sample(&config, slot, json),
        Commands::DeleteSlot { slot } => commands::cmd_delete_slot(&config, slot, json),
        Commands::AddVertex { slot, x, y } => {
            commands::cmd_edit(&config, slot, EditOp::AddVertex { x, y }, json)
        }
        Commands::RemoveVertex { slot, id } => {
            commands::cmd_edit(&config, slot, EditOp::RemoveVertex(id), json)
        }
        Commands::ToggleEdge { slot, a, b } => {
            commands::cmd_edit(&config, slot, EditOp::ToggleEdge(a, b), json)
        }
        Commands::MoveVertex { slot, id, x, y } => {
            commands::cmd_edit(&config, slot, EditOp::MoveVertex { id, x, y }, json)
        }
        Commands::Clear { slot } => commands::cmd_edit(&config, slot, EditOp::Clear, json),
        Commands::InitConfig { path } => commands::cmd_init_config(&config, &path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            StepperError::Io(_) => 1,
            StepperError::Json(_) | StepperError::Config(_) => 2,
            StepperError::SelfEdge(_) | StepperError::SlotOutOfRange { .. } => 3,
            StepperError::InvalidStart(_)
            | StepperError::VertexNotFound(_)
            | StepperError::EmptySlot(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
