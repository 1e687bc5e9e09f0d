use crate::{
    contract::{
        model::Segment,
        style::{Animation, LayoutConstraints, Placement, Size},
    },
    foundation::math::unit_hash,
    placement::Choice,
};

/// Segments longer than this (characters) are never centered under the long-sentence guard.
pub const LONG_SENTENCE_CHARS: usize = 80;
/// Segments up to this many characters are eligible for a creative `CENTER`.
pub const SHORT_SEGMENT_CHARS: usize = 40;
/// Consecutive `CENTER` cap used when none is configured.
pub const DEFAULT_MAX_CENTER_BLOCKS_IN_ROW: u32 = 3;

/// Per-segment placement for styles without a dedicated preset.
///
/// Wanted placement comes from, in order: emphasis, questions (creativity >= 0.5), the
/// long-sentence guard, then a hash-driven creative pick. Two dampening rules then apply:
/// a placement change closer than `min_seconds_between_changes` to the previous change
/// is reverted, and more than `max_center_blocks_in_row` consecutive `CENTER` blocks force
/// `BOTTOM` (which takes precedence over the time rule).
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicPlacement {
    /// Creativity in `[0, 1]`.
    pub creativity: f64,
    /// Layout guards.
    pub constraints: LayoutConstraints,
    /// Minimum seconds between placement changes.
    pub min_seconds_between_changes: f64,
    /// Maximum consecutive `CENTER` segments.
    pub max_center_blocks_in_row: u32,
}

impl DynamicPlacement {
    /// Strategy with default dampening (no time rule, three centered blocks in a row).
    pub fn new(creativity: f64) -> Self {
        Self {
            creativity: creativity.clamp(0.0, 1.0),
            constraints: LayoutConstraints::default(),
            min_seconds_between_changes: 0.0,
            max_center_blocks_in_row: DEFAULT_MAX_CENTER_BLOCKS_IN_ROW,
        }
    }

    /// Replace the layout guards.
    pub fn with_constraints(mut self, constraints: LayoutConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Replace the dampening rules.
    pub fn with_dampening(mut self, min_seconds: f64, max_center_in_row: u32) -> Self {
        self.min_seconds_between_changes = min_seconds.max(0.0);
        self.max_center_blocks_in_row = max_center_in_row;
        self
    }

    fn wanted(&self, idx: usize, seg: &Segment) -> Choice {
        if seg.emphasis.is_some() {
            let size = if self.constraints.prefer_center_for_emphasis {
                Size::Xl
            } else {
                Size::Big
            };
            return Choice::center(size);
        }

        let len = seg.char_len();
        if self.creativity >= 0.5 && seg.text.contains('?') {
            return Choice::center(Size::L);
        }
        if self.constraints.avoid_center_long_sentences && len > LONG_SENTENCE_CHARS {
            return Choice::bottom(Size::M);
        }

        let short = len <= SHORT_SEGMENT_CHARS;
        let r = unit_hash(idx as u64, &seg.text);
        if self.creativity >= 0.8 {
            if short && r < 0.35 {
                return Choice::center(Size::L);
            }
            if (0.35..0.55).contains(&r) {
                return Choice::top(Size::M);
            }
            return Choice::bottom(Size::M);
        }
        if self.creativity >= 0.5 && short && r < 0.15 {
            return Choice::center(Size::L);
        }
        Choice::bottom(Size::M)
    }

    /// Direct `segments`, returning a new list.
    pub fn apply(&self, segments: &[Segment]) -> Vec<Segment> {
        let mut out = segments.to_vec();
        let mut prev: Option<Placement> = None;
        let mut last_change_at: Option<f64> = None;
        let mut centers_in_row = 0u32;

        for (idx, seg) in out.iter_mut().enumerate() {
            let mut choice = self.wanted(idx, seg);

            if let Some(p) = prev
                && choice.placement != p
                && let Some(t) = last_change_at
                && seg.start - t < self.min_seconds_between_changes
            {
                tracing::debug!(idx, from = ?p, to = ?choice.placement, "placement change dampened");
                choice.placement = p;
                choice.animation = Animation::FadeIn;
            }

            if choice.placement == Placement::Center {
                centers_in_row += 1;
                if centers_in_row > self.max_center_blocks_in_row {
                    choice.placement = Placement::Bottom;
                    choice.animation = Animation::FadeIn;
                    centers_in_row = 0;
                }
            } else {
                centers_in_row = 0;
            }

            if let Some(p) = prev
                && p != choice.placement
            {
                last_change_at = Some(seg.start);
            }
            prev = Some(choice.placement);
            choice.apply_keeping_line_emphasis(seg);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/dynamic.rs"]
mod tests;
