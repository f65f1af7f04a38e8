//! In-memory run archive.

use parking_lot::RwLock;
use path_graph_core::RunRecord;

use crate::error::StorageResult;
use crate::RunArchive;

/// Records held in a lock-protected vector.
#[derive(Debug, Default)]
pub struct MemoryArchive {
    records: RwLock<Vec<RunRecord>>,
}

impl MemoryArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RunArchive for MemoryArchive {
    fn append(&self, record: &RunRecord) -> StorageResult<()> {
        self.records.write().push(record.clone());
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<RunRecord>> {
        Ok(self.records.read().clone())
    }
}
