use super::parse_entries;
use crate::engine::{EngineEvent, EngineOptions, RenameEngine};
use crate::rules::RenameRules;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    Cancelled,
    Failed,
}

/// Final accounting of one run, accumulated from its event stream.
#[derive(Debug)]
pub struct RunReport {
    pub total: usize,
    pub renamed: usize,
    pub outcome: RunOutcome,
    pub failed_file: Option<PathBuf>,
    pub error: Option<String>,
}

/// Run operation - rename the given files on a worker thread, forwarding
/// every engine event to `on_event` in emission order.
///
/// `cancel_flag` is polled by the engine between files; a SIGINT handler
/// that stores `true` into it stops the run before the next file. The
/// returned report reflects whatever terminal state the run reached;
/// rename failures are reported there, not as an `Err` (an `Err` means the
/// run could not start at all).
pub fn run_operation(
    paths: Vec<PathBuf>,
    rules: &RenameRules,
    options: EngineOptions,
    cancel_flag: Arc<AtomicBool>,
    mut on_event: impl FnMut(&EngineEvent),
) -> Result<RunReport> {
    let files = parse_entries(paths)?;
    let total = files.len();

    let engine = RenameEngine::new(files, rules)
        .context("invalid rule configuration")?
        .with_options(options)
        .with_cancel_flag(cancel_flag);
    let handle = engine.start();

    let mut report = RunReport {
        total,
        renamed: 0,
        outcome: RunOutcome::Finished,
        failed_file: None,
        error: None,
    };

    for event in handle.iter() {
        match &event {
            EngineEvent::Progress { .. } => report.renamed += 1,
            EngineEvent::ProgressReset => {},
            EngineEvent::Finished => report.outcome = RunOutcome::Finished,
            EngineEvent::Cancelled => report.outcome = RunOutcome::Cancelled,
            EngineEvent::Failed { path, error, .. } => {
                report.outcome = RunOutcome::Failed;
                report.failed_file = Some(path.clone());
                report.error = Some(error.to_string());
            },
        }
        on_event(&event);
    }
    handle.join();

    Ok(report)
}
