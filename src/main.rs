//! circuitlab - Circuit Lab board simulator
//!
//! Reads a board description, simulates it, and prints the outcome.
//!
//! # Usage
//!
//! ```bash
//! circuitlab board.circuit
//! circuitlab board.circuit --format json
//! RUST_LOG=circuitlab_core=trace circuitlab board.circuit
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use circuitlab_core::{
    components::catalog,
    dsl,
    error::Result,
    CircuitEngine, SimulationResult,
};
use tracing_subscriber::EnvFilter;

/// Output format for the simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Circuit Lab board simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board description file
    #[arg(value_name = "BOARD_FILE")]
    board_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "circuitlab_core=debug",
        _ => "circuitlab_core=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_text(title: Option<&str>, engine: &CircuitEngine, result: &SimulationResult) {
    if let Some(title) = title {
        println!("{}", title);
    }
    println!("{}", result.status_message());

    for comp in engine.components() {
        if !comp.kind.is_load() {
            continue;
        }
        let state = if result.is_lit(&comp.instance_id) {
            "lit"
        } else if result.is_wrong(&comp.instance_id) {
            "reversed"
        } else {
            "off"
        };
        println!(
            "  {:<6} {:<16} {}",
            catalog(comp.kind).label,
            comp.instance_id,
            state
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse the board file
    let ast = dsl::parse_file(&args.board_file)?;
    let title = ast.title.clone();

    // Load the snapshot
    let (components, connections) = ast.into_snapshot();
    let engine = CircuitEngine::with_snapshot(components, connections)?;

    // Simulate
    let result = engine.simulate();

    match args.format {
        Format::Text => print_text(title.as_deref(), &engine, &result),
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
