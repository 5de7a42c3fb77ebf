/// Strip a leading byte-order mark and disallowed control characters.
///
/// One leading U+FEFF is removed if present. Characters below U+0020 are
/// dropped except `\n`, `\r` and `\t`; everything else passes through
/// unchanged.
pub fn preprocess(input: &str) -> String {
    let text = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    if text
        .bytes()
        .all(|b| b >= 0x20 || matches!(b, b'\n' | b'\r' | b'\t'))
    {
        return text.to_string();
    }
    text.chars()
        .filter(|&c| c >= '\u{20}' || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}
