//! Styles with their own post-processing.

/// Upper-cased karaoke style with per-word timing.
pub mod karaoke;
