//! `run` command: compute, report, optionally archive.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use path_graph_core::{compute, Config, RunRecord, RunReport};
use path_graph_storage::{archive_from_config, RunArchive};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Source node id
    #[arg(short, long)]
    pub source: String,

    /// Target node id
    #[arg(short, long)]
    pub target: String,

    /// Output the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Append the run to the configured archive
    #[arg(long)]
    pub save: bool,
}

/// Handle the run command against stdout and the configured archive.
pub fn handle_run(args: &RunArgs, config: &Config) -> Result<()> {
    let archive = if args.save {
        if !config.archive.enabled {
            warn!("--save given but archive.enabled is false; the run will not outlive this process");
        }
        Some(archive_from_config(&config.archive).context("opening run archive")?)
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, config, archive.as_deref(), &mut out).map(|_| ())
}

/// Compute the run, write the report to `out` and archive it when asked.
///
/// The report is written before archiving, so an archive failure still
/// leaves the computed run visible to the caller.
pub fn execute(
    args: &RunArgs,
    config: &Config,
    archive: Option<&dyn RunArchive>,
    out: &mut dyn Write,
) -> Result<RunRecord> {
    let graph = config.build_graph().context("building graph")?;
    let result = compute(&graph, &args.source)?;
    let report = RunReport::new(&graph, &result, &args.target)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", report.render())?;
    }

    let record = RunRecord::from_report(&report);
    if let Some(archive) = archive {
        archive
            .append(&record)
            .with_context(|| format!("archiving run {}", record.id))?;
        info!(id = %record.id, source = %record.source, target = %record.target, "Run archived");
    }
    Ok(record)
}
