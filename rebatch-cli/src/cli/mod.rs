mod args;
mod types;

pub use args::{Cli, Commands, RuleArgs};
pub use types::{OutputFormat, PreviewArg};
