//! Boundary types: transcription input, direction configuration, theme presets and the
//! output envelope. Everything here is serde-(de)serializable with camelCase fields and
//! SCREAMING_SNAKE_CASE enum tokens.

/// Request and response envelopes.
pub mod envelope;
/// Words, lines and segments.
pub mod model;
/// Enum vocabulary and [`style::DirectionInput`].
pub mod style;
/// Font and color presets.
pub mod theme;
