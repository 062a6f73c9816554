//! Line classification and rewriting.
//!
//! A line that starts with a run of ASCII digits loses that run, the line
//! terminator (`\n`, `\r\n` or a final lone `\r`) and any whitespace
//! following the run, and gets a single `\n` appended. Every other line is
//! returned untouched.

use std::borrow::Cow;

/// Length in bytes of the leading `0`-`9` run
#[must_use]
pub fn digit_run_len(line: &str) -> usize {
    line.bytes().take_while(u8::is_ascii_digit).count()
}

/// Check if the first character is an ASCII digit
#[must_use]
pub fn starts_with_digit(line: &str) -> bool {
    line.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Remove a trailing `\n`, `\r\n` or lone `\r`
fn strip_terminator(line: &str) -> &str {
    let body = line.strip_suffix('\n').unwrap_or(line);
    body.strip_suffix('\r').unwrap_or(body)
}

/// Rewrite one line, borrowed when nothing changes
///
/// Digit-prefixed lines always come back terminated by exactly one `\n`,
/// including a final line that had no terminator in the input.
#[must_use]
pub fn rewrite(line: &str) -> Cow<'_, str> {
    let run = digit_run_len(line);
    if run == 0 {
        return Cow::Borrowed(line);
    }

    // Digits are ASCII, so `run` is a char boundary
    let rest = strip_terminator(&line[run..]).trim_start();
    let mut out = String::with_capacity(rest.len() + 1);
    out.push_str(rest);
    out.push('\n');
    Cow::Owned(out)
}
