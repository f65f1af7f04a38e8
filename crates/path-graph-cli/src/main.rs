//! Path Graph CLI
//!
//! Runs traceable shortest-path computations over the configured graph.
//!
//! # Usage
//!
//! ```bash
//! # Shortest path A -> G on the built-in sample graph
//! path-graph run --source A --target G
//!
//! # Same run as JSON, appended to the run archive
//! path-graph run -s A -t G --json --save
//!
//! # Custom topology and archive location
//! path-graph --config ./path-graph.toml run -s S -t T
//!
//! # Inspect the graph and past runs
//! path-graph nodes
//! path-graph history --limit 5
//!
//! # Verbose engine logging
//! RUST_LOG=path_graph_core=debug path-graph run -s A -t G
//! ```
//!
//! Exit codes: 0 on success, 1 on any error.

mod commands;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use commands::history::HistoryArgs;
use commands::nodes::NodesArgs;
use commands::run::RunArgs;
use path_graph_core::config::{Config, LogFormat, LoggingConfig};

/// Traceable single-source shortest paths.
#[derive(Parser)]
#[command(name = "path-graph", version, about)]
struct Cli {
    /// Path to a TOML configuration file (default: config/ layering + env)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute shortest paths from a source and report the path to a target
    Run(RunArgs),

    /// List graph nodes with coordinates and degree
    Nodes(NodesArgs),

    /// List archived runs
    History(HistoryArgs),
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Install the stderr subscriber. `RUST_LOG` wins over `logging.level`.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location);

    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("path-graph: failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);
    debug!(archive = config.archive.enabled, custom_graph = config.graph.is_some(), "Configuration loaded");

    let outcome = match cli.command {
        Commands::Run(args) => commands::run::handle_run(&args, &config),
        Commands::Nodes(args) => commands::nodes::handle_nodes(&args, &config),
        Commands::History(args) => commands::history::handle_history(&args, &config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("path-graph: {e:#}");
            ExitCode::FAILURE
        }
    }
}
