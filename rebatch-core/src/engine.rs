use crate::error::EngineError;
use crate::file_entry::FileEntry;
use crate::name_builder::build_file_name;
use crate::rules::{CompiledRules, RenameRules};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// One event in the ordered stream a run emits.
///
/// Per run the stream is always `Progress { 1..=k }`, then `ProgressReset`,
/// then exactly one terminal event. Events are produced by a single worker
/// and delivered over a FIFO channel, so the caller observes them in
/// exactly this order.
#[derive(Debug)]
pub enum EngineEvent {
    /// File `file_number` (1-based input position) has been renamed; the
    /// rename has already happened when this event is observed.
    Progress {
        file_number: usize,
        new_path: PathBuf,
    },
    /// Progress back to zero: no file is being processed anymore.
    ProgressReset,
    /// Terminal: every file was renamed.
    Finished,
    /// Terminal: the run was cancelled between files. Files renamed so far
    /// stay renamed.
    Cancelled,
    /// Terminal: renaming `path` failed and the rest of the batch was
    /// abandoned.
    Failed {
        file_number: usize,
        path: PathBuf,
        error: EngineError,
    },
}

impl EngineEvent {
    /// True for `Finished`, `Cancelled` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled | Self::Failed { .. })
    }
}

/// Scheduling knobs for a run.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Optional sleep between consecutive files. Keeps a long run observable
    /// and gives cancellation a window; correctness never depends on it.
    pub pace: Option<Duration>,
}

/// Cooperative cancellation handle for a running engine.
///
/// Cloneable and cheap; safe to move into a signal handler. The engine
/// checks the flag between files, so cancellation takes effect before the
/// next file, never mid-rename.
#[derive(Debug, Clone)]
pub struct Canceller(Arc<AtomicBool>);

impl Canceller {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Applies a rule set to an ordered list of files, one at a time, on its
/// own worker thread.
///
/// An engine instance executes exactly one run: [`RenameEngine::start`]
/// consumes it, so reuse is rejected at compile time. Files are processed
/// strictly in input order with no parallelism — two concurrent renames
/// could race for the same target name, and a collision must fail
/// deterministically instead.
#[derive(Debug)]
pub struct RenameEngine {
    files: Vec<FileEntry>,
    rules: CompiledRules,
    options: EngineOptions,
    cancel: Arc<AtomicBool>,
}

impl RenameEngine {
    /// Build an engine over a snapshot of the file list. Compiles the rules
    /// up front: an invalid keep pattern is rejected here, before a worker
    /// exists or any file is touched.
    pub fn new(files: Vec<FileEntry>, rules: &RenameRules) -> Result<Self, EngineError> {
        Ok(Self {
            files,
            rules: rules.compile()?,
            options: EngineOptions::default(),
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Poll an externally owned flag instead of a private one, so e.g. a
    /// SIGINT handler installed long before the run can cancel it.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = flag;
        self
    }

    /// Spawn the worker and hand back the event stream.
    pub fn start(self) -> RunHandle {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::clone(&self.cancel);
        let worker = thread::spawn(move || self.run(&tx));

        RunHandle {
            events: rx,
            cancel,
            worker: Some(worker),
        }
    }

    fn run(self, tx: &Sender<EngineEvent>) {
        for (index, entry) in self.files.iter().enumerate() {
            let file_number = index + 1;

            if self.cancel.load(Ordering::SeqCst) {
                info!("run cancelled before file {file_number}");
                let _ = tx.send(EngineEvent::ProgressReset);
                let _ = tx.send(EngineEvent::Cancelled);
                return;
            }

            match self.rename_one(entry) {
                Ok(new_path) => {
                    debug!("renamed {} -> {}", entry.path.display(), new_path.display());
                    let event = EngineEvent::Progress {
                        file_number,
                        new_path,
                    };
                    if tx.send(event).is_err() {
                        // Receiver dropped: nobody is listening to this run.
                        return;
                    }
                },
                Err(error) => {
                    warn!("rename failed on {}: {error}", entry.path.display());
                    let _ = tx.send(EngineEvent::ProgressReset);
                    let _ = tx.send(EngineEvent::Failed {
                        file_number,
                        path: entry.path.clone(),
                        error,
                    });
                    return;
                },
            }

            if let Some(pace) = self.options.pace {
                if file_number < self.files.len() {
                    thread::sleep(pace);
                }
            }
        }

        info!("run finished, {} files renamed", self.files.len());
        let _ = tx.send(EngineEvent::ProgressReset);
        let _ = tx.send(EngineEvent::Finished);
    }

    fn rename_one(&self, entry: &FileEntry) -> Result<PathBuf, EngineError> {
        let new_name = build_file_name(&entry.stem, &entry.extension, &self.rules)?;
        let new_path = entry.target_path(&new_name);

        // A derivation that changes nothing is valid; skip the filesystem
        // call instead of renaming a file onto itself.
        if new_name == entry.file_name() {
            return Ok(new_path);
        }

        // `fs::rename` replaces an existing target on Unix. An existing
        // target is a batch-stopping error, so check first.
        if new_path.exists() {
            return Err(EngineError::TargetExists {
                from: entry.path.clone(),
                to: new_path,
            });
        }

        fs::rename(&entry.path, &new_path).map_err(|source| EngineError::RenameFailed {
            from: entry.path.clone(),
            to: new_path.clone(),
            source,
        })?;

        Ok(new_path)
    }
}

/// A running (or finished) rename run.
///
/// Iterate [`RunHandle::iter`] to consume events in order; the iterator
/// ends once the worker has emitted its terminal event and hung up.
/// Dropping the handle cancels the run and waits for the worker, so no
/// thread outlives its handle.
pub struct RunHandle {
    events: Receiver<EngineEvent>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl RunHandle {
    /// Blocking iterator over the run's events, in emission order.
    pub fn iter(&self) -> mpsc::Iter<'_, EngineEvent> {
        self.events.iter()
    }

    /// The raw receiver, for callers that want `recv_timeout` or `select`.
    pub fn events(&self) -> &Receiver<EngineEvent> {
        &self.events
    }

    /// A cloneable handle that cancels this run.
    pub fn canceller(&self) -> Canceller {
        Canceller(Arc::clone(&self.cancel))
    }

    /// Ask the worker to stop before its next file.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Wait for the worker thread to finish. Consumes the handle: a run
    /// that has been joined is over.
    pub fn join(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            // Abandoning the handle abandons the run: stop the worker at its
            // next between-files check and reclaim the thread.
            self.cancel.store(true, Ordering::SeqCst);
            let _ = worker.join();
        }
    }
}
