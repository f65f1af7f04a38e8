//! `nodes` command: list the configured graph.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use path_graph_core::Config;

/// Arguments for the nodes command.
#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Print the topology as JSON (nodes and undirected edges)
    #[arg(long)]
    pub json: bool,
}

pub fn handle_nodes(args: &NodesArgs, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, config, &mut out)
}

pub fn execute(args: &NodesArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let graph = config.build_graph().context("building graph")?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &graph.to_spec())?;
        writeln!(out)?;
        return Ok(());
    }

    for node in graph.nodes() {
        writeln!(
            out,
            "{} ({}, {}) degree={}",
            node.id,
            node.position.x,
            node.position.y,
            graph.degree(&node.id)
        )?;
    }
    writeln!(out, "{} nodes, {} edges", graph.node_count(), graph.arc_count() / 2)?;
    Ok(())
}
