use super::*;

#[test]
fn empty_and_whitespace_lines_dropped() {
    let out = compact_blank_lines("{\n\n  \t \n\"a\": 1\n}");
    assert_eq!(out, "{\n\"a\": 1\n}");
}

#[test]
fn trailing_newline_dropped() {
    assert_eq!(compact_blank_lines("{\"a\": 1}\n"), "{\"a\": 1}");
}

#[test]
fn all_blank_input_collapses_to_empty() {
    assert_eq!(compact_blank_lines("\n  \n\t\n"), "");
}

#[test]
fn crlf_blank_lines_dropped() {
    let out = compact_blank_lines("{\r\n\r\n\"a\": 1\r\n}");
    assert_eq!(out, "{\n\"a\": 1\n}");
}

#[test]
fn content_lines_untouched() {
    let out = compact_blank_lines("  indented content  ");
    assert_eq!(out, "  indented content  ");
}
