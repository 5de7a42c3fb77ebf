use crate::options::Options;

/// A record of one edit made while cleaning input text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalizeLogEntry {
    /// Byte offset into the text the stage operated on (each stage consumes
    /// the previous stage's output, so offsets are per-stage).
    pub position: usize,
    pub message: &'static str,
    /// Snippet of the text surrounding `position`.
    pub context: String,
}

pub(crate) struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<NormalizeLogEntry>,
}

impl Logger {
    pub(crate) fn disabled() -> Self {
        Self {
            enable: false,
            window: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn new(opts: &Options) -> Self {
        Self {
            enable: opts.logging,
            window: opts.log_context_window,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn log(&mut self, text: &str, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(NormalizeLogEntry {
                position,
                message,
                context: context_snippet(text, position, self.window),
            });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<NormalizeLogEntry> {
        self.entries
    }
}

/// Slice a window of `window` bytes either side of `pos`, widened to the
/// nearest char boundaries.
fn context_snippet(text: &str, pos: usize, window: usize) -> String {
    let mut start = pos.saturating_sub(window);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (pos + window).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].to_string()
}
