use crate::error::NormalizeError;
use serde_json::Value;
use std::io::Write;

/// Serialize a value back to canonical text: 2-space indentation (or
/// compact when requested), object keys in insertion order, non-ASCII
/// characters emitted literally, no trailing newline.
pub(crate) fn to_canonical_string(value: &Value, compact: bool) -> String {
    if compact {
        format!("{value}")
    } else {
        format!("{value:#}")
    }
}

/// Same output as [`to_canonical_string`], written straight into a sink.
pub(crate) fn to_canonical_writer<W: Write>(
    value: &Value,
    compact: bool,
    writer: &mut W,
) -> Result<(), NormalizeError> {
    let res = if compact {
        serde_json::to_writer(&mut *writer, value)
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)
    };
    res.map_err(|e| NormalizeError::Write(e.to_string()))
}
