//! Case-insensitive phrase emphasis.

/// Phrase matching and tagging.
pub mod detector;
