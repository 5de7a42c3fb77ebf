use super::*;

// Submodules (topic-based)
mod blank_lines;
mod preprocessing;
