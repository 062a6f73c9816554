//! Run configuration.
//!
//! There is no config file: a [`Config`] is built from the parsed CLI
//! arguments and decides where output goes and how chatty the run is.

use crate::cli::CliArgs;

/// Where the rewritten content goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Replace the input file atomically
    #[default]
    InPlace,
    /// Print to stdout, leave the file alone
    Stdout,
    /// Write nothing, report whether anything would change
    Check,
}

/// How much the binary logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    ///
    /// `RUST_LOG` takes precedence when set.
    #[must_use]
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Silent => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "debug",
        }
    }
}

/// Settings for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: OutputMode,
    pub verbosity: Verbosity,
}

impl Config {
    /// Build configuration from CLI arguments
    #[must_use]
    pub fn from_args(args: &CliArgs) -> Self {
        let mode = if args.check {
            OutputMode::Check
        } else if args.stdout {
            OutputMode::Stdout
        } else {
            OutputMode::InPlace
        };

        let verbosity = if args.debug {
            Verbosity::Debug
        } else if args.silent {
            Verbosity::Silent
        } else {
            Verbosity::Normal
        };

        Config { mode, verbosity }
    }

    /// Whether to print the per-run summary line
    #[must_use]
    pub fn reports(&self) -> bool {
        self.verbosity != Verbosity::Silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_args_from;

    #[test]
    fn test_default_config() {
        let config = Config::from_args(&parse_args_from(vec!["delnum", "f.txt"]));
        assert_eq!(config, Config::default());
        assert_eq!(config.mode, OutputMode::InPlace);
        assert!(config.reports());
    }

    #[test]
    fn test_stdout_mode() {
        let config = Config::from_args(&parse_args_from(vec!["delnum", "-s", "f.txt"]));
        assert_eq!(config.mode, OutputMode::Stdout);
    }

    #[test]
    fn test_check_mode() {
        let config = Config::from_args(&parse_args_from(vec!["delnum", "--check", "f.txt"]));
        assert_eq!(config.mode, OutputMode::Check);
    }

    #[test]
    fn test_verbosity() {
        let config = Config::from_args(&parse_args_from(vec!["delnum", "-S", "f.txt"]));
        assert_eq!(config.verbosity, Verbosity::Silent);
        assert!(!config.reports());

        let config = Config::from_args(&parse_args_from(vec!["delnum", "-D", "f.txt"]));
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.verbosity.log_filter(), "debug");
    }
}
