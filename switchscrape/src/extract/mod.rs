//! Shared extraction primitives.
//!
//! Every format parser is assembled from these pieces: line splitting,
//! prompt/echo detection, column slicing, block stitching and per-field
//! pattern alternation.

mod alternation;
mod columns;
mod patterns;
mod stitch;

pub use alternation::{FieldPatterns, FieldValues};
pub use columns::{Column, ColumnLayout, Row};
pub use patterns::{active_window, is_echo_line, is_prompt_line};
pub use stitch::stitch_records;

/// Split a blob into lines, dropping the carriage returns terminals emit.
pub fn lines(blob: &str) -> impl Iterator<Item = &str> {
    blob.split('\n').map(|line| line.trim_end_matches('\r'))
}
