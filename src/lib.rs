//! Deterministic subtitle direction for transcribed speech.
//!
//! Given timed segments (and optionally per-word timestamps) plus a [`DirectionInput`], the
//! engine decides for every segment:
//!
//! - how its text breaks into timed display [`Line`]s
//! - which phrases are emphasized
//! - where it sits on screen ([`Placement`]), how it enters ([`Animation`]) and how big it is ([`Size`])
//! - for karaoke styles, when each word lights up
//!
//! The same input always produces the same output: "random" choices come from a pure hash of
//! segment index and text ([`unit_hash`]), never from a seeded generator.
//!
//! Typical use goes through a [`DirectionRequest`] parsed from JSON, whose [`run`] returns
//! the [`DirectedSubtitles`] envelope a renderer consumes. The pieces are public on their
//! own: [`LineLayout`], [`direct`], [`Segment::resolved_lines`].
//!
//! [`run`]: DirectionRequest::run
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Boundary types.
pub mod contract;
/// Dispatch and render-boundary resolution.
pub mod direction;
/// Phrase emphasis.
pub mod emphasis;
/// Line splitting.
pub mod lines;
/// Placement strategies.
pub mod placement;
/// Named presets.
pub mod presets;
/// Style post-processing.
pub mod styles;

pub use crate::foundation::error::{CaptionError, CaptionResult};
pub use crate::foundation::math::unit_hash;

pub use crate::contract::envelope::{DirectedSubtitles, DirectionRequest, SCHEMA_VERSION};
pub use crate::contract::model::{Emphasis, Line, LineEmphasis, Segment, SegmentWords, Word};
pub use crate::contract::style::{
    Animation, DirectionInput, DirectionPreset, DynamicRules, LayoutConstraints,
    OverflowStrategy, Placement, PlacementStrategy, Size, Style,
};
pub use crate::contract::theme::ThemePreset;
pub use crate::direction::orchestrator::{DirectionJob, direct, direct_batch};
pub use crate::direction::resolve::ResolvedLine;
pub use crate::emphasis::detector::{EmphasisDetector, detect_emphasis};
pub use crate::lines::splitter::{
    LineLayout, shrink_lines, split_segment, split_segment_with_word_timing,
};
pub use crate::placement::dynamic::DynamicPlacement;
pub use crate::placement::fixed::apply_fixed_placement;
pub use crate::presets::cinematic::{CinematicDynamicV1, NarrativePhase};
pub use crate::presets::trailer::{
    apply_trailer_v1, fragment_segments, insert_micro_gaps, split_fragments,
};
pub use crate::styles::karaoke::{apply_hormozi_style, attach_word_timing};
