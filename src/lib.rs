//! delnum - strip leading line numbers from text files
//!
//! Lines that start with ASCII digits lose the digits and the whitespace after
//! them; every other line is copied through. Files are replaced atomically.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod rewrite;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, try_parse_args_from, CliArgs};
pub use config::{Config, OutputMode, Verbosity};
pub use error::{Error, Result};
pub use process::{check_file, process_file, process_to_writer, rewrite_stream, ProcessStats};
pub use rewrite::rewrite;
