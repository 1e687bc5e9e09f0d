use rayon::prelude::*;

use crate::{
    contract::{
        model::Segment,
        style::{DirectionInput, DirectionPreset, Placement, PlacementStrategy, Style},
    },
    emphasis::detector::detect_emphasis,
    placement::{dynamic::DynamicPlacement, fixed::apply_fixed_placement},
    presets::{
        cinematic::CinematicDynamicV1,
        trailer::{apply_trailer_v1, fragment_segments, insert_micro_gaps},
    },
    styles::karaoke::{apply_hormozi_style, attach_word_timing},
};

/// Minimum seconds between placement changes for [`Style::CinematicDynamic`] when no
/// dynamic rules are configured.
pub const CINEMATIC_MIN_SECONDS_BETWEEN_CHANGES: f64 = 2.0;
/// Consecutive `CENTER` cap used by the orchestrator when no dynamic rules are configured.
pub const ORCHESTRATED_MAX_CENTER_BLOCKS_IN_ROW: u32 = 2;

/// Direct a transcribed segment list: emphasis, placement, animation, sizing and (for
/// karaoke styles) word timing.
///
/// The input is never mutated. An empty list or a non-positive `duration_sec` returns the
/// segments unchanged; otherwise every window is first clamped into `[0, duration_sec]`.
#[tracing::instrument(skip_all, fields(segments = segments.len(), style = ?input.style))]
pub fn direct(segments: &[Segment], input: &DirectionInput) -> Vec<Segment> {
    if segments.is_empty() || !(input.duration_sec > 0.0) {
        tracing::debug!(duration_sec = input.duration_sec, "nothing to direct");
        return segments.to_vec();
    }

    let mut segs = segments.to_vec();
    for seg in &mut segs {
        seg.clamp_to(input.duration_sec);
    }

    match input.style {
        Style::Trailer => {
            tracing::debug!("trailer pipeline");
            let fragments = insert_micro_gaps(&fragment_segments(&segs));
            return apply_trailer_v1(&detect_emphasis(&fragments, &input.emphasis_phrases));
        }
        Style::AlexHormozi => {
            tracing::debug!("karaoke pipeline");
            let tagged = detect_emphasis(&segs, &input.emphasis_phrases);
            let timed = attach_word_timing(&tagged, input.segment_words.as_deref());
            return apply_hormozi_style(&timed);
        }
        _ => {}
    }

    let tagged = detect_emphasis(&segs, &input.emphasis_phrases);
    if input.placement_strategy != PlacementStrategy::Dynamic {
        return apply_fixed_placement(&tagged, input.default_placement);
    }

    let creativity = input.effective_creativity();
    match input.direction_preset {
        Some(DirectionPreset::Documentary) => apply_fixed_placement(&tagged, Placement::Bottom),
        Some(DirectionPreset::CinematicDynamicV1) => {
            CinematicDynamicV1::new(creativity, input.constraints())
                .apply(&tagged, input.duration_sec)
        }
        Some(DirectionPreset::TrailerV1) => {
            tracing::debug!("TRAILER_V1 preset outside the trailer style, placement left as is");
            tagged
        }
        None => generic_strategy(input, creativity).apply(&tagged),
    }
}

fn generic_strategy(input: &DirectionInput, creativity: f64) -> DynamicPlacement {
    let rules = input.dynamic_rules.unwrap_or_default();
    let min_seconds = rules
        .min_seconds_between_placement_changes
        .unwrap_or(match input.style {
            Style::CinematicDynamic => CINEMATIC_MIN_SECONDS_BETWEEN_CHANGES,
            _ => 0.0,
        });
    let max_center = rules
        .max_center_blocks_in_row
        .unwrap_or(ORCHESTRATED_MAX_CENTER_BLOCKS_IN_ROW);
    DynamicPlacement::new(creativity)
        .with_constraints(input.constraints())
        .with_dampening(min_seconds, max_center)
}

/// One independent direction run.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionJob {
    /// Segments to direct.
    pub segments: Vec<Segment>,
    /// Configuration for this run.
    pub input: DirectionInput,
}

impl DirectionJob {
    /// Bundle segments with their configuration.
    pub fn new(segments: Vec<Segment>, input: DirectionInput) -> Self {
        Self { segments, input }
    }
}

/// Direct independent jobs in parallel. Results are in job order and each equals
/// [`direct`] on that job.
#[tracing::instrument(skip_all, fields(jobs = jobs.len()))]
pub fn direct_batch(jobs: &[DirectionJob]) -> Vec<Vec<Segment>> {
    jobs.par_iter()
        .map(|job| direct(&job.segments, &job.input))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/direction/orchestrator.rs"]
mod tests;
