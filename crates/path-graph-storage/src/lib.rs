//! Path Graph Storage
//!
//! Append-only archive of computed runs. Each archived entry is a
//! [`RunRecord`]: source, target, delimited path, total distance and the
//! full report text.
//!
//! # Backends
//!
//! - [`JsonlArchive`]: one JSON object per line in a local file
//! - [`MemoryArchive`]: in-process, used when archiving is disabled and in tests

pub mod error;
pub mod jsonl;
pub mod memory;

use path_graph_core::config::ArchiveConfig;
use path_graph_core::RunRecord;
use tracing::info;

pub use error::{StorageError, StorageResult};
pub use jsonl::JsonlArchive;
pub use memory::MemoryArchive;

/// Sink for computed runs.
///
/// Implementations only ever append; existing records are never rewritten.
pub trait RunArchive: Send + Sync {
    /// Append one record.
    fn append(&self, record: &RunRecord) -> StorageResult<()>;

    /// All records in append order.
    fn list(&self) -> StorageResult<Vec<RunRecord>>;

    /// The last `limit` records, oldest first.
    fn recent(&self, limit: usize) -> StorageResult<Vec<RunRecord>> {
        let mut records = self.list()?;
        let skip = records.len().saturating_sub(limit);
        Ok(records.split_off(skip))
    }
}

/// Open the archive described by `config`.
///
/// A disabled archive is an empty [`MemoryArchive`]: runs are accepted and
/// dropped at process exit.
pub fn archive_from_config(config: &ArchiveConfig) -> StorageResult<Box<dyn RunArchive>> {
    if config.enabled {
        info!(path = %config.path, "Opening run archive");
        Ok(Box::new(JsonlArchive::open(&config.path)?))
    } else {
        info!("Run archive disabled, keeping runs in memory");
        Ok(Box::new(MemoryArchive::new()))
    }
}
