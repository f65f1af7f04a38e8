//! CLI command handlers
//!
//! # Modules
//!
//! - `run`: compute, report and optionally archive a run
//! - `nodes`: list the configured graph
//! - `history`: list archived runs

pub mod history;
pub mod nodes;
pub mod run;
