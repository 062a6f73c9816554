//! Command-line interface for delnum.
//!
//! Defines CLI arguments using clap builder API

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};

use crate::error::Error;

/// Usage line printed when the positional argument is missing or repeated
pub const USAGE: &str = "delnum <input_file>";

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// File to rewrite
    pub input: PathBuf,

    /// Write the result to stdout instead of replacing the file
    pub stdout: bool,

    /// Only report whether the file would change
    pub check: bool,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (errors only)
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("delnum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip leading line numbers from a text file in place")
        .override_usage(USAGE)
        .arg(
            Arg::new("input_file")
                .help("Text file to rewrite")
                .value_name("input_file")
                .required(true)
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Write the result to stdout instead of modifying the file")
                .action(ArgAction::SetTrue)
                .conflicts_with("check"),
        )
        .arg(
            Arg::new("check")
                .short('c')
                .long("check")
                .help("Exit with status 1 if any line would be rewritten; never writes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue)
                .conflicts_with("silent"),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (errors only)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
///
/// `--help` and `--version` print and exit; every other parse failure is
/// returned as [`Error::Usage`].
pub fn parse_args() -> Result<CliArgs, Error> {
    try_parse_args_from(std::env::args_os())
}

/// Parse CLI arguments from an iterator (for testing)
///
/// Prints the error and exits on invalid arguments.
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = build_cli();
    let args = separate_operands(&mut cmd, args);
    args_from_matches(&cmd.get_matches_from(args))
}

/// Parse CLI arguments from an iterator, mapping failures to [`Error::Usage`]
pub fn try_parse_args_from<I, T>(args: I) -> Result<CliArgs, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = build_cli();
    let args = separate_operands(&mut cmd, args);
    match cmd.try_get_matches_from(args) {
        Ok(matches) => Ok(args_from_matches(&matches)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(Error::Usage(usage_message(&e))),
    }
}

/// Whether `arg` is one of the options `cmd` defines, short flags bundled or not
fn is_known_option(cmd: &Command, arg: &OsStr) -> bool {
    let Some(arg) = arg.to_str() else {
        return false;
    };
    if let Some(long) = arg.strip_prefix("--") {
        return !long.is_empty() && cmd.get_arguments().any(|a| a.get_long() == Some(long));
    }
    match arg.strip_prefix('-') {
        Some(shorts) if !shorts.is_empty() => shorts
            .chars()
            .all(|c| cmd.get_arguments().any(|a| a.get_short() == Some(c))),
        _ => false,
    }
}

/// Reorder `args` as `program [options] -- [operands]`
///
/// Anything that is not a defined option is an operand, so a file named
/// `-5.txt` reaches `input_file` instead of failing as an unknown flag.
/// Everything after an explicit `--` is an operand.
fn separate_operands<I, T>(cmd: &mut Command, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // Registers the generated --help/--version args
    cmd.build();

    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut options: Vec<OsString> = args.next().into_iter().collect();
    let mut operands = Vec::new();
    let mut escaped = false;

    for arg in args {
        if escaped {
            operands.push(arg);
        } else if arg == "--" {
            escaped = true;
        } else if is_known_option(cmd, &arg) {
            options.push(arg);
        } else {
            operands.push(arg);
        }
    }

    if !operands.is_empty() {
        options.push(OsString::from("--"));
        options.extend(operands);
    }
    options
}

/// Error text from clap followed by the fixed usage line
fn usage_message(err: &clap::Error) -> String {
    let detail = err.kind().as_str().unwrap_or("invalid arguments");
    format!("error: {detail}\n\nUsage: {USAGE}")
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches
            .get_one::<PathBuf>("input_file")
            .cloned()
            .unwrap_or_default(),
        stdout: matches.get_flag("stdout"),
        check: matches.get_flag("check"),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        assert_eq!(cmd.get_name(), "delnum");
        cmd.debug_assert();
    }

    #[test]
    fn test_single_input() {
        let args = parse_args_from(vec!["delnum", "notes.txt"]);
        assert_eq!(args.input, PathBuf::from("notes.txt"));
        assert!(!args.stdout);
        assert!(!args.check);
        assert!(!args.debug);
        assert!(!args.silent);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = try_parse_args_from(vec!["delnum"]).unwrap_err();
        match err {
            Error::Usage(msg) => assert!(msg.contains("Usage: delnum <input_file>")),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_two_inputs_is_usage_error() {
        let err = try_parse_args_from(vec!["delnum", "a.txt", "b.txt"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_stdout_flag() {
        let args = parse_args_from(vec!["delnum", "-s", "notes.txt"]);
        assert!(args.stdout);
        let args = parse_args_from(vec!["delnum", "--stdout", "notes.txt"]);
        assert!(args.stdout);
    }

    #[test]
    fn test_check_flag() {
        let args = parse_args_from(vec!["delnum", "--check", "notes.txt"]);
        assert!(args.check);
    }

    #[test]
    fn test_stdout_conflicts_with_check() {
        let err = try_parse_args_from(vec!["delnum", "-s", "-c", "notes.txt"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_debug_flag() {
        let args = parse_args_from(vec!["delnum", "-D", "notes.txt"]);
        assert!(args.debug);
    }

    #[test]
    fn test_debug_conflicts_with_silent() {
        let err = try_parse_args_from(vec!["delnum", "--debug", "--silent", "notes.txt"])
            .unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_hyphen_leading_path() {
        let args = parse_args_from(vec!["delnum", "-5.txt"]);
        assert_eq!(args.input, PathBuf::from("-5.txt"));
        assert!(!args.stdout);
    }

    #[test]
    fn test_hyphen_leading_path_with_flags() {
        let args = parse_args_from(vec!["delnum", "-5.txt", "-sD"]);
        assert_eq!(args.input, PathBuf::from("-5.txt"));
        assert!(args.stdout);
        assert!(args.debug);
    }

    #[test]
    fn test_flag_name_after_separator_is_a_path() {
        let args = parse_args_from(vec!["delnum", "--", "-s"]);
        assert_eq!(args.input, PathBuf::from("-s"));
        assert!(!args.stdout);
    }

    #[test]
    fn test_hyphen_path_plus_second_path_is_usage_error() {
        let err = try_parse_args_from(vec!["delnum", "-5.txt", "b.txt"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_silent_flag() {
        let args = parse_args_from(vec!["delnum", "--silent", "notes.txt"]);
        assert!(args.silent);
    }
}
