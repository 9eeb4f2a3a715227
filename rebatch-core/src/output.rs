use crate::operations::{RunOutcome, RunReport};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// One planned rename: where a file is and where it would go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRename {
    pub path: PathBuf,
    pub new_path: PathBuf,
}

/// Result of a preview operation (dry run, nothing touched)
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResult {
    pub total: usize,
    pub renames: Vec<PlannedRename>,
}

/// Result of a completed run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub total: usize,
    pub renamed: usize,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResult {
    pub fn from_report(report: &RunReport) -> Self {
        let outcome = match report.outcome {
            RunOutcome::Finished => "finished",
            RunOutcome::Cancelled => "cancelled",
            RunOutcome::Failed => "failed",
        };

        Self {
            total: report.total,
            renamed: report.renamed,
            outcome: outcome.to_string(),
            failed_file: report.failed_file.clone(),
            error: report.error.clone(),
        }
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PreviewResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "preview",
            "total": self.total,
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "Preview: {} files", self.total).unwrap();
        for rename in &self.renames {
            writeln!(
                output,
                "{} -> {}",
                rename.path.display(),
                rename.new_path.display()
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for RunResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.outcome == "finished",
            "operation": "run",
            "outcome": self.outcome,
            "summary": {
                "total": self.total,
                "renamed": self.renamed,
            },
            "failed_file": self.failed_file,
            "error": self.error,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        match self.outcome.as_str() {
            "finished" => {
                writeln!(output, "Renamed {} of {} files", self.renamed, self.total).unwrap();
            },
            "cancelled" => {
                writeln!(
                    output,
                    "Cancelled after {} of {} files (renamed files stay renamed)",
                    self.renamed, self.total
                )
                .unwrap();
            },
            _ => {
                writeln!(
                    output,
                    "Failed after {} of {} files",
                    self.renamed, self.total
                )
                .unwrap();
                if let Some(file) = &self.failed_file {
                    writeln!(output, "Failing file: {}", file.display()).unwrap();
                }
                if let Some(error) = &self.error {
                    writeln!(output, "Reason: {error}").unwrap();
                }
            },
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}\n", self.name, self.version)
    }
}
