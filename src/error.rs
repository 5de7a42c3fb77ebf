use std::fmt;
use thiserror::Error;

/// Positional detail for a failed validation.
///
/// `line` and `column` are 1-based and refer to positions in the *cleaned*
/// text (after comment and trailing-comma removal), not the original
/// input. `column` points at the exact failing offset so a caller can
/// render a `^` marker under it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
    /// Literal text of the offending line in the cleaned input.
    pub context_line: String,
}

impl Diagnostic {
    /// A line of spaces with a `^` under the failing column, for rendering
    /// beneath [`context_line`](Self::context_line).
    pub fn caret_line(&self) -> String {
        let mut s = " ".repeat(self.column.saturating_sub(1));
        s.push('^');
        s
    }

    /// Multi-line human-readable report: message, offending line, caret.
    pub fn render(&self) -> String {
        format!(
            "error at line {}, column {}: {}\n  {}\n  {}",
            self.line,
            self.column,
            self.message,
            self.context_line,
            self.caret_line()
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The cleaned text still failed to parse as JSON. The only error that
    /// carries positional detail; cleaning itself is total.
    #[error("malformed JSON at {0}")]
    MalformedJson(Diagnostic),
    /// Writing normalized output to an `io::Write` sink failed.
    #[error("write error: {0}")]
    Write(String),
}

impl NormalizeError {
    /// The diagnostic payload, when this is a [`MalformedJson`] error.
    ///
    /// [`MalformedJson`]: NormalizeError::MalformedJson
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            NormalizeError::MalformedJson(d) => Some(d),
            NormalizeError::Write(_) => None,
        }
    }
}
