#[derive(Clone, Debug)]
pub struct Options {
    /// Strip `//` line comments found outside string literals.
    pub strip_line_comments: bool,
    /// Strip `/* ... */` block comments found outside string literals.
    pub strip_block_comments: bool,
    /// Remove commas that are followed only by whitespace and a closing
    /// `}` or `]`.
    pub strip_trailing_commas: bool,
    /// Drop lines that are empty after trimming whitespace. Cosmetic; has
    /// no effect on the parsed value.
    pub compact_blank_lines: bool,
    /// Emit compact JSON instead of 2-space indented output.
    pub compact: bool,
    /// Enable edit logging. Use `normalize_with_log` to retrieve entries.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many bytes are captured on both sides of the position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip_line_comments: true,
            strip_block_comments: true,
            strip_trailing_commas: true,
            compact_blank_lines: true,
            compact: false,
            logging: false,
            log_context_window: 10,
        }
    }
}
