use crate::error::{Diagnostic, NormalizeError};
use serde_json::Value;

/// Parse cleaned text as strict JSON.
///
/// On failure, the diagnostic's 1-based line and column refer to the
/// cleaned text the caller passed in, with the offending line's literal
/// text attached as context.
pub(crate) fn validate(cleaned: &str) -> Result<Value, NormalizeError> {
    serde_json::from_str(cleaned)
        .map_err(|e| NormalizeError::MalformedJson(diagnostic_from_serde(&e, cleaned)))
}

fn diagnostic_from_serde(err: &serde_json::Error, cleaned: &str) -> Diagnostic {
    let line = err.line();
    let column = err.column();
    // serde_json appends " at line N column M"; the diagnostic carries
    // position structurally, so keep only the bare message.
    let mut message = err.to_string();
    if let Some(idx) = message.rfind(" at line ") {
        message.truncate(idx);
    }
    let context_line = cleaned
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
        .to_string();
    Diagnostic {
        line,
        column,
        message,
        context_line,
    }
}
