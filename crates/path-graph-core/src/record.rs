//! Archive snapshot of a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::NodeId;
use crate::path::format_path;
use crate::report::RunReport;

/// Delimiter between node ids in [`RunRecord::path`].
pub const PATH_DELIMITER: &str = "->";

/// One append-only archive entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: NodeId,
    pub target: NodeId,
    /// Path nodes joined with [`PATH_DELIMITER`]; empty when unreachable.
    pub path: String,
    /// Total path distance, `None` when unreachable.
    pub distance: Option<f64>,
    /// Full rendered report.
    pub details: String,
}

impl RunRecord {
    /// Snapshot a report under a fresh id.
    #[must_use]
    pub fn from_report(report: &RunReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: report.run_at,
            source: report.source.clone(),
            target: report.target.clone(),
            path: format_path(&report.path, PATH_DELIMITER),
            distance: report.is_reachable().then_some(report.path_weight),
            details: report.render(),
        }
    }

    /// Path nodes split back out of [`RunRecord::path`].
    #[must_use]
    pub fn path_nodes(&self) -> Vec<&str> {
        self.path
            .split(PATH_DELIMITER)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
