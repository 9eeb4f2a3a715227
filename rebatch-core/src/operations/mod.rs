//! High-level operations that correspond to CLI commands
//!
//! These functions contain the core business logic for each rebatch
//! operation, separated from CLI concerns like argument parsing and output
//! formatting.

pub mod preview;
pub mod run;

pub use preview::preview_operation;
pub use run::{run_operation, RunOutcome, RunReport};

use crate::file_entry::FileEntry;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Parse the caller-supplied paths into entries, preserving their order.
fn parse_entries(paths: Vec<PathBuf>) -> Result<Vec<FileEntry>> {
    paths
        .into_iter()
        .map(|path| {
            let display = path.display().to_string();
            FileEntry::new(path).with_context(|| format!("cannot queue `{display}` for renaming"))
        })
        .collect()
}
