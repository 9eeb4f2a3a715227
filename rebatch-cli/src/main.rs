use anyhow::Context;
use clap::Parser;
use rebatch_core::{Config, OutputFormatter, VersionResult};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, IsTerminal};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod cli;
mod preview;
mod run;

use cli::{Cli, Commands};

fn main() {
    // The engine polls this flag between files, so Ctrl-C stops the run
    // before the next rename instead of killing it mid-batch.
    let interrupted = Arc::new(AtomicBool::new(false));

    let interrupted_clone = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        eprintln!("\nReceived SIGINT. Stopping before the next file...");
        interrupted_clone.store(true, Ordering::SeqCst);
    })
    .expect("Error setting SIGINT handler");

    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_default();

    // --no-color always wins; otherwise the config default, then the terminal.
    let use_color = if cli.no_color {
        false
    } else {
        config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal())
    };

    let result = match cli.command {
        Commands::Run {
            files,
            rules,
            pace_ms,
            output,
            quiet,
        } => run::handle_run(
            files,
            &rules,
            pace_ms,
            output.into(),
            quiet,
            &config,
            &interrupted,
        ),
        Commands::Preview {
            files,
            rules,
            preview,
            fixed_table_width,
            output,
        } => preview::handle_preview(
            files,
            &rules,
            preview,
            fixed_table_width,
            output.into(),
            &config,
            use_color,
        ),
        Commands::Version { output } => {
            let version = VersionResult {
                name: "rebatch".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            print!("{}", version.format(output.into()));
            Ok(())
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // Logging is best-effort; a failed init must never stop a rename run.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
