use crate::log::Logger;
use memchr::{memchr, memchr2, memchr3};

/// Remove every unquoted `//` comment suffix from each line.
///
/// The scan is escape- and string-aware: a `//` inside a string literal
/// (e.g. a URL value) is not a comment. The escape flag resets at the
/// start of each line, while the in-string flag carries across line
/// boundaries. JSON strings cannot contain a literal newline, so the flag
/// is expected to close within a line; carrying it anyway keeps the scan
/// well-defined on malformed input instead of assuming closure.
///
/// Line terminators (`\n`, `\r\n`, lone `\r`) are normalized to `\n`;
/// content newlines are preserved.
pub fn strip_line_comments(input: &str) -> String {
    strip_line_comments_logged(input, &mut Logger::disabled())
}

pub(crate) fn strip_line_comments_logged(input: &str, log: &mut Logger) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut first = true;
    for (offset, line) in split_lines(input) {
        if !first {
            out.push('\n');
        }
        first = false;
        strip_one_line(line, offset, &mut in_string, input, log, &mut out);
    }
    out
}

/// Scan a single line, appending everything up to an unquoted `//` (or the
/// whole line if there is none) to `out`.
fn strip_one_line(
    line: &str,
    offset: usize,
    in_string: &mut bool,
    src: &str,
    log: &mut Logger,
    out: &mut String,
) {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let rel = if *in_string {
            memchr2(b'"', b'\\', &bytes[i..])
        } else {
            memchr3(b'"', b'\\', b'/', &bytes[i..])
        };
        let Some(rel) = rel else { break };
        let pos = i + rel;
        match bytes[pos] {
            // The byte after a backslash is inert, even a quote.
            b'\\' => i = pos + 2,
            b'"' => {
                *in_string = !*in_string;
                i = pos + 1;
            }
            b'/' => {
                if bytes.get(pos + 1) == Some(&b'/') {
                    out.push_str(&line[..pos]);
                    log.log(src, offset + pos, "stripped line comment");
                    return;
                }
                // A lone slash is ordinary content.
                i = pos + 1;
            }
            _ => i = pos + 1,
        }
    }
    out.push_str(line);
}

/// Remove every unquoted `/* ... */` span, markers included.
///
/// Everything outside comments is preserved byte-for-byte. An opening
/// `/*` inside a string is inert, and a stray `*/` with no matching opener
/// is copied through literally; neither is an error at this stage. An
/// unterminated comment silently consumes the remainder of the input --
/// if that breaks the document, validation reports it afterwards.
pub fn strip_block_comments(input: &str) -> String {
    strip_block_comments_logged(input, &mut Logger::disabled())
}

pub(crate) fn strip_block_comments_logged(input: &str, log: &mut Logger) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut run_start = 0;
    let mut i = 0;
    'scan: while i < bytes.len() {
        let rel = if in_string {
            memchr2(b'"', b'\\', &bytes[i..])
        } else {
            memchr3(b'"', b'\\', b'/', &bytes[i..])
        };
        let Some(rel) = rel else { break };
        let pos = i + rel;
        match bytes[pos] {
            b'\\' => i = pos + 2,
            b'"' => {
                in_string = !in_string;
                i = pos + 1;
            }
            b'/' => {
                if bytes.get(pos + 1) == Some(&b'*') {
                    out.push_str(&input[run_start..pos]);
                    log.log(input, pos, "stripped block comment");
                    // Comment body: discard everything through the closing
                    // marker, newlines included.
                    let mut j = pos + 2;
                    loop {
                        match memchr(b'*', &bytes[j..]) {
                            Some(star_rel) => {
                                let star = j + star_rel;
                                if bytes.get(star + 1) == Some(&b'/') {
                                    i = star + 2;
                                    run_start = i;
                                    continue 'scan;
                                }
                                j = star + 1;
                            }
                            // Unterminated: the comment eats the rest.
                            None => return out,
                        }
                    }
                }
                i = pos + 1;
            }
            _ => i = pos + 1,
        }
    }
    out.push_str(&input[run_start..]);
    out
}

/// Split into `(byte_offset, line)` pairs, treating `\n`, `\r\n` and lone
/// `\r` as terminators. Terminators are not part of the yielded lines.
pub(crate) fn split_lines(text: &str) -> Vec<(usize, &str)> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while let Some(rel) = memchr2(b'\n', b'\r', &bytes[i..]) {
        let pos = i + rel;
        out.push((start, &text[start..pos]));
        if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
            i = pos + 2;
        } else {
            i = pos + 1;
        }
        start = i;
    }
    out.push((start, &text[start..]));
    out
}
