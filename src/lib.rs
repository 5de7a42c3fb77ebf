//! Comment-tolerant JSON normalizer.
//!
//! Takes JSON-like text containing `//` line comments, `/* */` block
//! comments and trailing commas, and produces strictly valid, canonically
//! formatted JSON. The cleaning pipeline runs in fixed order:
//!
//! 1. strip a leading BOM and disallowed control characters
//! 2. strip `//` line comments (string- and escape-aware)
//! 3. strip `/* */` block comments (string- and escape-aware)
//! 4. remove trailing commas before `}` / `]`
//! 5. drop blank lines
//! 6. validate as strict JSON, with a positional [`Diagnostic`] on failure
//! 7. re-emit with 2-space indentation, key order preserved, no trailing
//!    newline
//!
//! Every stage is pure; only validation can fail. Comment markers and
//! commas inside string literals survive untouched, with one documented
//! exception: the trailing-comma pass is purely textual, so a comma inside
//! a string that is followed only by whitespace and a closing bracket at
//! the end of that string is removed too (see [`strip_trailing_commas`]).

pub mod cli;
mod comments;
mod emit;
pub mod error;
mod log;
mod normalize;
pub mod options;
mod preprocess;
mod tidy;
mod validate;

pub use comments::{strip_block_comments, strip_line_comments};
pub use error::{Diagnostic, NormalizeError};
pub use log::NormalizeLogEntry;
pub use options::Options;
pub use preprocess::preprocess;
pub use tidy::{compact_blank_lines, strip_trailing_commas};

use log::Logger;
use std::io::Write;

/// Normalize comment-tolerant JSON text into canonical JSON.
///
/// On success returns the re-emitted text; on failure returns a
/// [`NormalizeError::MalformedJson`] whose [`Diagnostic`] points at the
/// offending line and column of the cleaned text.
pub fn normalize(input: &str, opts: &Options) -> Result<String, NormalizeError> {
    normalize::normalize_to_string(input, opts, &mut Logger::disabled())
}

/// Normalize and return the parsed [`serde_json::Value`] instead of
/// re-serialized text.
pub fn normalize_to_value(
    input: &str,
    opts: &Options,
) -> Result<serde_json::Value, NormalizeError> {
    normalize::normalize_to_value(input, opts, &mut Logger::disabled())
}

/// Normalize and write the canonical text into an `io::Write` sink.
/// Avoids an extra copy of the final string when the caller streams to a
/// file or socket.
pub fn normalize_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), NormalizeError> {
    let value = normalize::normalize_to_value(input, opts, &mut Logger::disabled())?;
    emit::to_canonical_writer(&value, opts.compact, writer)
}

/// Normalize and also return a log of the edits made (stripped comments,
/// removed trailing commas). Entries are only collected when
/// [`Options::logging`] is enabled.
pub fn normalize_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<NormalizeLogEntry>), NormalizeError> {
    let mut log = Logger::new(opts);
    let out = normalize::normalize_to_string(input, opts, &mut log)?;
    Ok((out, log.into_entries()))
}

/// Run only the text-cleaning stages (BOM/control stripping, comment
/// removal, trailing commas, blank lines) without validating or
/// re-emitting. Never fails; the result may still be invalid JSON.
pub fn clean_text(input: &str, opts: &Options) -> String {
    normalize::clean_text(input, opts, &mut Logger::disabled())
}

#[cfg(test)]
mod tests;
