//! JSON-lines file archive.
//!
//! Every record is serialized onto its own line and appended. Reading back
//! skips blank lines and fails on the first line that does not parse,
//! reporting its 1-based line number.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use path_graph_core::RunRecord;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::RunArchive;

/// Append-only archive file.
#[derive(Debug)]
pub struct JsonlArchive {
    path: PathBuf,
    /// Held by appends and reads, so a read never sees a partial line.
    writer: Mutex<()>,
}

impl JsonlArchive {
    /// Open (or prepare) the archive at `path`, creating parent directories.
    ///
    /// The file itself is created on the first append.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }
        Ok(Self {
            path,
            writer: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunArchive for JsonlArchive {
    fn append(&self, record: &RunRecord) -> StorageResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.writer.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StorageError::io(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| StorageError::io(&self.path, e))?;

        debug!(id = %record.id, path = %self.path.display(), "Archived run");
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<RunRecord>> {
        let _guard = self.writer.lock();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| StorageError::io(&self.path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|e| {
                warn!(line = idx + 1, error = %e, "Unreadable archive entry");
                StorageError::Corrupt {
                    path: self.path.clone(),
                    line: idx + 1,
                    message: e.to_string(),
                }
            })?;
            records.push(record);
        }
        Ok(records)
    }
}
