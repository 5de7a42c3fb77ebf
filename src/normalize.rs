use crate::comments::{strip_block_comments_logged, strip_line_comments_logged};
use crate::emit;
use crate::error::NormalizeError;
use crate::log::Logger;
use crate::options::Options;
use crate::preprocess::preprocess;
use crate::tidy::{compact_blank_lines, strip_trailing_commas_logged};
use crate::validate::validate;
use serde_json::Value;

/// Run the text-cleaning stages in pipeline order, honoring the per-stage
/// toggles. Total; the output may still fail validation.
pub(crate) fn clean_text(input: &str, opts: &Options, log: &mut Logger) -> String {
    let mut text = preprocess(input);
    if opts.strip_line_comments {
        text = strip_line_comments_logged(&text, log);
    }
    if opts.strip_block_comments {
        text = strip_block_comments_logged(&text, log);
    }
    if opts.strip_trailing_commas {
        text = strip_trailing_commas_logged(&text, log);
    }
    if opts.compact_blank_lines {
        text = compact_blank_lines(&text);
    }
    text
}

pub(crate) fn normalize_to_value(
    input: &str,
    opts: &Options,
    log: &mut Logger,
) -> Result<Value, NormalizeError> {
    let cleaned = clean_text(input, opts, log);
    validate(&cleaned)
}

pub(crate) fn normalize_to_string(
    input: &str,
    opts: &Options,
    log: &mut Logger,
) -> Result<String, NormalizeError> {
    let value = normalize_to_value(input, opts, log)?;
    Ok(emit::to_canonical_string(&value, opts.compact))
}
