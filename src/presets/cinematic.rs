use crate::{
    contract::{model::Segment, style::LayoutConstraints, style::Size},
    foundation::math::unit_hash,
    placement::Choice,
};

/// End of the hook phase, as a fraction of total duration.
pub const HOOK_END: f64 = 0.12;
/// End of the body phase.
pub const BODY_END: f64 = 0.70;
/// End of the emphasis phase; the call to action runs to the end.
pub const EMPHASIS_END: f64 = 0.90;
/// Long-sentence guard threshold for this preset (characters).
pub const LONG_SENTENCE_CHARS: usize = 60;
/// Body segments shorter than this may get a rare `CENTER`.
pub const SHORT_BODY_CHARS: usize = 28;
/// Minimum seconds between two body `CENTER` exceptions.
pub const BODY_CENTER_MIN_GAP_SEC: f64 = 6.0;

const BODY_CENTER_PROBABILITY: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Narrative phase of a segment, by start time.
pub enum NarrativePhase {
    /// `[0%, 12%)`
    Hook,
    /// `[12%, 70%)`
    Body,
    /// `[70%, 90%)`
    Emphasis,
    /// `[90%, 100%]`
    Cta,
}

impl NarrativePhase {
    /// Phase for a start time within `duration_sec`.
    pub fn at(start: f64, duration_sec: f64) -> Self {
        let pct = if duration_sec > 0.0 {
            start / duration_sec
        } else {
            0.0
        };
        if pct < HOOK_END {
            Self::Hook
        } else if pct < BODY_END {
            Self::Body
        } else if pct < EMPHASIS_END {
            Self::Emphasis
        } else {
            Self::Cta
        }
    }
}

/// Phase-based cinematic direction.
#[derive(Clone, Debug, PartialEq)]
pub struct CinematicDynamicV1 {
    /// Creativity in `[0, 1]`.
    pub creativity: f64,
    /// Layout guards.
    pub constraints: LayoutConstraints,
}

impl CinematicDynamicV1 {
    /// Create the preset.
    pub fn new(creativity: f64, constraints: LayoutConstraints) -> Self {
        Self {
            creativity,
            constraints,
        }
    }

    fn too_long(&self, seg: &Segment) -> bool {
        self.constraints.avoid_center_long_sentences && seg.char_len() > LONG_SENTENCE_CHARS
    }

    fn centered_unless_long(&self, seg: &Segment, size: Size) -> Choice {
        if self.too_long(seg) {
            Choice::bottom(Size::L)
        } else {
            Choice::center(size)
        }
    }

    /// Direct `segments` over a timeline of `duration_sec` seconds.
    pub fn apply(&self, segments: &[Segment], duration_sec: f64) -> Vec<Segment> {
        let mut out = segments.to_vec();
        if out.is_empty() || !(duration_sec > 0.0) {
            return out;
        }

        let contrast = contrast_index(&out, duration_sec);
        if let Some(idx) = contrast {
            tracing::debug!(idx, text = %out[idx].text, "contrast block");
        }

        let mut last_body_center: Option<f64> = None;
        for (idx, seg) in out.iter_mut().enumerate() {
            let choice = if seg.emphasis.is_some() {
                self.centered_unless_long(seg, Size::Xl)
            } else {
                match NarrativePhase::at(seg.start, duration_sec) {
                    NarrativePhase::Hook => self.centered_unless_long(seg, Size::L),
                    NarrativePhase::Cta => self.centered_unless_long(seg, Size::Xl),
                    NarrativePhase::Emphasis => Choice::bottom(Size::L),
                    NarrativePhase::Body if contrast == Some(idx) => Choice::top(Size::L),
                    NarrativePhase::Body => {
                        let gap_ok =
                            last_body_center.is_none_or(|t| seg.start - t >= BODY_CENTER_MIN_GAP_SEC);
                        if self.creativity >= 0.5
                            && seg.char_len() < SHORT_BODY_CHARS
                            && unit_hash(idx as u64, &seg.text) < BODY_CENTER_PROBABILITY
                            && gap_ok
                        {
                            last_body_center = Some(seg.start);
                            Choice::center(Size::L)
                        } else {
                            Choice::bottom(Size::M)
                        }
                    }
                }
            };
            choice.apply_to(seg);
        }

        if let Some(last) = out.last_mut()
            && last.start >= EMPHASIS_END * duration_sec
        {
            self.centered_unless_long(last, Size::Xl).apply_to(last);
        }
        out
    }
}

/// Longest body segment (by characters) whose midpoint lies in the body window.
fn contrast_index(segments: &[Segment], duration_sec: f64) -> Option<usize> {
    let lo = HOOK_END * duration_sec;
    let hi = BODY_END * duration_sec;
    let mut best: Option<(usize, usize)> = None;
    for (idx, seg) in segments.iter().enumerate() {
        if seg.emphasis.is_some() || NarrativePhase::at(seg.start, duration_sec) != NarrativePhase::Body {
            continue;
        }
        let mid = seg.midpoint();
        if mid < lo || mid >= hi {
            continue;
        }
        let len = seg.char_len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((idx, len));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
#[path = "../../tests/unit/presets/cinematic.rs"]
mod tests;
