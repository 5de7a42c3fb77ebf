use crate::comments::split_lines;
use crate::log::Logger;
use memchr::memchr;

/// Remove every comma that is followed only by whitespace and then a
/// closing `}` or `]`. The whitespace and the bracket are kept.
///
/// The match is purely textual and runs on already comment-free text. It
/// is NOT string-aware: a comma inside a string value that happens to be
/// followed by whitespace and a closing bracket at the end of that string
/// is removed as well. Known limitation, kept deliberately -- see the
/// crate-level docs.
pub fn strip_trailing_commas(input: &str) -> String {
    strip_trailing_commas_logged(input, &mut Logger::disabled())
}

pub(crate) fn strip_trailing_commas_logged(input: &str, log: &mut Logger) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while let Some(rel) = memchr(b',', &bytes[i..]) {
        let comma = i + rel;
        out.push_str(&input[i..comma]);
        let mut j = comma + 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j < bytes.len() && (bytes[j] == b'}' || bytes[j] == b']') {
            log.log(input, comma, "removed trailing comma");
        } else {
            out.push(',');
        }
        i = comma + 1;
    }
    out.push_str(&input[i..]);
    out
}

/// Drop every line whose trimmed content is empty. Purely cosmetic
/// compaction before validation; no effect on the parsed value.
pub fn compact_blank_lines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut first = true;
    for (_, line) in split_lines(input) {
        if line.trim().is_empty() {
            continue;
        }
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(line);
    }
    out
}
