//! `history` command: list archived runs.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use path_graph_core::trace::format_distance;
use path_graph_core::Config;
use path_graph_storage::{archive_from_config, RunArchive};

/// Arguments for the history command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of most recent runs to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Print full report text for each run
    #[arg(long)]
    pub details: bool,
}

pub fn handle_history(args: &HistoryArgs, config: &Config) -> Result<()> {
    if !config.archive.enabled {
        warn!("archive.enabled is false; no runs have been persisted");
    }
    let archive = archive_from_config(&config.archive).context("opening run archive")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, archive.as_ref(), &mut out)
}

pub fn execute(args: &HistoryArgs, archive: &dyn RunArchive, out: &mut dyn Write) -> Result<()> {
    let records = archive.recent(args.limit).context("reading run archive")?;
    if records.is_empty() {
        writeln!(out, "No archived runs.")?;
        return Ok(());
    }

    for record in &records {
        let path = if record.path.is_empty() { "(none)" } else { record.path.as_str() };
        writeln!(
            out,
            "{}  {} -> {}  distance={}  path={}  id={}",
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
            record.source,
            record.target,
            format_distance(record.distance.unwrap_or(f64::INFINITY)),
            path,
            record.id
        )?;
        if args.details {
            writeln!(out, "{}", record.details)?;
        }
    }
    Ok(())
}
