//! Entry points: dispatching a segment list through emphasis, presets and strategies, and
//! resolving line inheritance for renderers.

/// [`orchestrator::direct`] and batch direction.
pub mod orchestrator;
/// [`resolve::ResolvedLine`].
pub mod resolve;
