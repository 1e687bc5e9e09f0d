//! Named direction presets.

/// Phase-based cinematic direction.
pub mod cinematic;
/// Fragmenting trailer direction.
pub mod trailer;
