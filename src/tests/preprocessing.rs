use super::*;

#[test]
fn leading_bom_removed() {
    assert_eq!(preprocess("\u{FEFF}{\"a\": 1}"), "{\"a\": 1}");
}

#[test]
fn only_one_leading_bom_stripped_here() {
    // A doubled BOM leaves one behind; the cleaned text then fails
    // validation, which is the desired outcome for such input.
    assert_eq!(preprocess("\u{FEFF}\u{FEFF}{}"), "\u{FEFF}{}");
}

#[test]
fn interior_bom_left_alone() {
    assert_eq!(preprocess("{\"a\u{FEFF}\": 1}"), "{\"a\u{FEFF}\": 1}");
}

#[test]
fn null_bytes_and_control_chars_dropped() {
    assert_eq!(preprocess("{\0\"a\u{1}\": 1\u{2}}"), "{\"a\": 1}");
}

#[test]
fn tab_newline_carriage_return_kept() {
    let s = "{\n\t\"a\": 1\r\n}";
    assert_eq!(preprocess(s), s);
}

#[test]
fn del_is_not_a_disallowed_control() {
    // Only codepoints below U+0020 are filtered.
    let s = "{\"a\": \"\u{7f}\"}";
    assert_eq!(preprocess(s), s);
}

#[test]
fn clean_ascii_passthrough() {
    let s = "{\"a\": [1, 2, 3]}";
    assert_eq!(preprocess(s), s);
}
