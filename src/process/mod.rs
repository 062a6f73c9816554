//! File processing.
//!
//! [`rewrite_stream`] is the shared core: it reads lines from any `BufRead`,
//! runs digit-prefixed lines through [`crate::rewrite::rewrite`] and copies the
//! rest verbatim. The file-level entry points build on it:
//!
//! - [`process_file`]: rewrite a file in place through a temporary file and an
//!   atomic rename
//! - [`process_to_writer`]: stream the rewritten content elsewhere
//! - [`check_file`]: report what would change without writing

pub mod pipeline;

pub use pipeline::{check_file, process_file, process_to_writer, rewrite_stream, ProcessStats};
