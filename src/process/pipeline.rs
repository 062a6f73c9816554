//! Streaming line pipeline and in-place file replacement
//!
//! Lines are read one at a time (terminator included), passed through
//! [`rewrite`], and written out. In-place mode writes to a temporary file in
//! the target's directory and renames it over the target once everything has
//! been flushed and synced.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::rewrite::{rewrite, starts_with_digit};

/// Line counts from one pass over an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Lines read from the input
    pub lines: usize,
    /// Digit-prefixed lines that were rewritten
    pub rewritten: usize,
}

impl ProcessStats {
    /// Whether any line was rewritten
    #[must_use]
    pub fn changed(&self) -> bool {
        self.rewritten > 0
    }
}

/// Rewrite every line of `input` into `output`
///
/// `source` names the input in errors. Write failures are reported against
/// `source` as well since the sink has no path of its own here.
pub fn rewrite_stream<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    source: &Path,
) -> Result<ProcessStats> {
    let mut stats = ProcessStats::default();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        let read = input
            .read_until(b'\n', &mut raw)
            .map_err(|e| Error::io(source, e))?;
        if read == 0 {
            break;
        }
        stats.lines += 1;

        let line = std::str::from_utf8(&raw).map_err(|_| Error::Decode {
            path: source.to_path_buf(),
            line: stats.lines,
        })?;

        if starts_with_digit(line) {
            stats.rewritten += 1;
            output
                .write_all(rewrite(line).as_bytes())
                .map_err(|e| Error::io(source, e))?;
        } else {
            output.write_all(raw.as_slice()).map_err(|e| Error::io(source, e))?;
        }
    }

    Ok(stats)
}

/// Directory the temporary file is created in
///
/// A bare file name has an empty parent, which means the current directory.
fn staging_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::io(path, e))
}

/// Rewrite `path` in place
///
/// The target is only ever changed by a single rename. Any failure before
/// that point drops the temporary file, which deletes it, and leaves the
/// target as it was.
pub fn process_file(path: &Path) -> Result<ProcessStats> {
    let input = open_input(path)?;
    let permissions = input
        .get_ref()
        .metadata()
        .map_err(|e| Error::io(path, e))?
        .permissions();

    let dir = staging_dir(path);
    let staged = NamedTempFile::new_in(&dir).map_err(|e| Error::io(&dir, e))?;
    debug!(
        target_file = %path.display(),
        temp_file = %staged.path().display(),
        "staging rewrite"
    );

    let mut writer = BufWriter::new(staged);
    let stats = rewrite_stream(input, &mut writer, path)?;

    let staged = writer
        .into_inner()
        .map_err(|e| Error::io(path, e.into_error()))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(staged.path(), e))?;
    staged
        .as_file()
        .set_permissions(permissions)
        .map_err(|e| Error::io(staged.path(), e))?;

    replace_target(staged, path)?;

    info!(
        file = %path.display(),
        lines = stats.lines,
        rewritten = stats.rewritten,
        "rewrote file"
    );
    Ok(stats)
}

/// Rename `staged` over `path`
///
/// On failure the `PersistError` owns the temp file and removes it on drop.
fn replace_target(staged: NamedTempFile, path: &Path) -> Result<()> {
    staged
        .persist(path)
        .map(drop)
        .map_err(|e| Error::io(path, io::Error::from(e)))
}

/// Write the rewritten content of `path` to `output`, leaving `path` alone
pub fn process_to_writer<W: Write>(path: &Path, output: &mut W) -> Result<ProcessStats> {
    let input = open_input(path)?;
    let stats = rewrite_stream(input, output, path)?;
    output.flush().map_err(|e| Error::io(path, e))?;
    debug!(
        file = %path.display(),
        lines = stats.lines,
        rewritten = stats.rewritten,
        "streamed file"
    );
    Ok(stats)
}

/// Count the lines `process_file` would rewrite without writing anything
pub fn check_file(path: &Path) -> Result<ProcessStats> {
    let input = open_input(path)?;
    let stats = rewrite_stream(input, &mut io::sink(), path)?;
    debug!(
        file = %path.display(),
        lines = stats.lines,
        rewritten = stats.rewritten,
        "checked file"
    );
    Ok(stats)
}
