//! delnum - strip leading line numbers from a text file in place

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use delnum::{check_file, parse_args, process_file, process_to_writer, Config, OutputMode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from_args(&args);
    init_logging(&config);

    match run(&args.input, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the CLI level
fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter())),
        )
        .init();
}

/// Process the file according to the configured mode
///
/// Returns `Ok(false)` when `--check` finds lines that would be rewritten.
fn run(path: &Path, config: &Config) -> Result<bool> {
    tracing::debug!(file = %path.display(), mode = ?config.mode, "starting");

    match config.mode {
        OutputMode::InPlace => {
            let stats = process_file(path).context("rewrite failed")?;
            if config.reports() {
                eprintln!(
                    "Rewrote {} of {} lines in {}",
                    stats.rewritten,
                    stats.lines,
                    path.display()
                );
            }
            Ok(true)
        }
        OutputMode::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            process_to_writer(path, &mut out).context("rewrite failed")?;
            out.flush()?;
            Ok(true)
        }
        OutputMode::Check => {
            let stats = check_file(path).context("check failed")?;
            if stats.changed() {
                if config.reports() {
                    eprintln!(
                        "{}: {} of {} lines would be rewritten",
                        path.display(),
                        stats.rewritten,
                        stats.lines
                    );
                }
                Ok(false)
            } else {
                Ok(true)
            }
        }
    }
}
