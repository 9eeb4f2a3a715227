#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod engine;
pub mod error;
pub mod file_entry;
pub mod name_builder;
pub mod operations;
pub mod output;
pub mod preview;
pub mod rules;

pub use config::Config;
pub use engine::{Canceller, EngineEvent, EngineOptions, RenameEngine, RunHandle};
pub use error::EngineError;
pub use file_entry::FileEntry;
pub use name_builder::build_file_name;
pub use operations::{preview_operation, run_operation, RunOutcome, RunReport};
pub use output::{
    OutputFormat, OutputFormatter, PlannedRename, PreviewResult, RunResult, VersionResult,
};
pub use preview::{
    render_preview, render_preview_with_fixed_width, render_summary, render_table,
    should_use_color, write_preview, Preview,
};
pub use rules::{CompiledRules, RenameRules};
