//! Error types and result aliases for delnum.
//!
//! - [`Error`]: everything the library can fail with
//! - [`Result<T>`]: `std::result::Result<T, Error>`, used by all library operations
//!
//! The binary converts these into `anyhow::Error` at the process boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by argument handling and file processing
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of positional arguments
    #[error("{0}")]
    Usage(String),

    /// Opening, reading, writing or replacing a file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not valid UTF-8
    #[error("{}: line {line} is not valid UTF-8", .path.display())]
    Decode { path: PathBuf, line: usize },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = Error::io(
            "notes.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "notes.txt: no such file");
    }

    #[test]
    fn test_decode_error_display() {
        let err = Error::Decode {
            path: PathBuf::from("data/list.txt"),
            line: 7,
        };
        assert_eq!(err.to_string(), "data/list.txt: line 7 is not valid UTF-8");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io("x", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let source = std::error::Error::source(&err).expect("source is set");
        assert_eq!(source.to_string(), "denied");
    }
}
