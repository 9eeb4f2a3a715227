use clap::{Args, Parser, Subcommand};
use rebatch_core::RenameRules;
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Batch file renaming with composable rules
#[derive(Parser, Debug)]
#[command(name = "rebatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

/// The rename rules, shared by `run` and `preview`.
///
/// Rules compose in a fixed order: keep, then prefix, then replace, then
/// postfix; the extension is never touched.
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Text prepended to every file name
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub prefix: String,

    /// Text appended to every file name, before the extension
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub postfix: String,

    /// Substring to replace; every occurrence is replaced
    #[arg(long = "replace", value_name = "FROM", default_value = "")]
    pub replace_from: String,

    /// Replacement text; empty deletes FROM
    #[arg(long = "with", value_name = "TO", default_value = "")]
    pub replace_to: String,

    /// Regular expression; the first match becomes the new stem
    #[arg(long = "keep", value_name = "REGEX", default_value = "")]
    pub keep_pattern: String,
}

impl RuleArgs {
    pub fn to_rules(&self) -> RenameRules {
        RenameRules {
            prefix: self.prefix.clone(),
            postfix: self.postfix.clone(),
            replace_from: self.replace_from.clone(),
            replace_to: self.replace_to.clone(),
            keep_pattern: self.keep_pattern.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename the given files in order, reporting progress per file
    Run {
        /// Files to rename, processed in the order given
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        rules: RuleArgs,

        /// Milliseconds to sleep between files
        #[arg(long, value_name = "MS")]
        pace_ms: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,

        /// Suppress per-file progress lines and the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the renames a rule set would perform, without touching any file
    Preview {
        /// Files to preview, in order
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        rules: RuleArgs,

        /// Preview format (default from config, falling back to table)
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Use fixed column widths in the table (for piping and tests)
        #[arg(long)]
        fixed_table_width: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Print version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}
