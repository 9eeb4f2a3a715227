use anyhow::{anyhow, bail, Result};
use rebatch_core::{
    run_operation, Config, EngineEvent, EngineOptions, OutputFormat, OutputFormatter, RunOutcome,
    RunResult,
};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::RuleArgs;

pub fn handle_run(
    files: Vec<PathBuf>,
    rule_args: &RuleArgs,
    pace_ms: Option<u64>,
    output: OutputFormat,
    quiet: bool,
    config: &Config,
    interrupted: &Arc<AtomicBool>,
) -> Result<()> {
    let rules = rule_args.to_rules();
    if rules.is_empty() {
        bail!("nothing to do: give at least one of --prefix, --postfix, --replace or --keep");
    }

    let pace = pace_ms
        .or(config.defaults.pace_ms)
        .map(Duration::from_millis);
    let options = EngineOptions { pace };

    let total = files.len();
    log::debug!("starting run over {total} files, pace {pace:?}");
    let report = run_operation(
        files,
        &rules,
        options,
        Arc::clone(interrupted),
        |event| {
            if quiet || output == OutputFormat::Json {
                return;
            }
            if let EngineEvent::Progress {
                file_number,
                new_path,
            } = event
            {
                let percent = 100 * file_number / total.max(1);
                println!(
                    "[{file_number}/{total}] -> {} ({percent}%)",
                    new_path.display()
                );
            }
        },
    )?;

    let result = RunResult::from_report(&report);
    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    match report.outcome {
        RunOutcome::Finished => Ok(()),
        RunOutcome::Cancelled => Err(anyhow!(
            "run cancelled after {} of {} files",
            report.renamed,
            report.total
        )),
        RunOutcome::Failed => {
            let detail = report
                .error
                .unwrap_or_else(|| "rename failed".to_string());
            match report.failed_file {
                Some(file) => Err(anyhow!("{detail} (file: {})", file.display())),
                None => Err(anyhow!(detail)),
            }
        },
    }
}
