//! Splitting segment text into timed display lines.

/// Proportional and pause-aware splitters plus overflow correction.
pub mod splitter;
