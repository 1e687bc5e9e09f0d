//! Placement strategies.

use crate::contract::{
    model::Segment,
    style::{Animation, Placement, Size},
};

/// Per-segment placement with dampening.
pub mod dynamic;
/// One placement for everything.
pub mod fixed;

/// One placement decision for a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Choice {
    pub(crate) placement: Placement,
    pub(crate) animation: Animation,
    pub(crate) size: Size,
}

impl Choice {
    pub(crate) const fn new(placement: Placement, animation: Animation, size: Size) -> Self {
        Self {
            placement,
            animation,
            size,
        }
    }

    pub(crate) const fn center(size: Size) -> Self {
        Self::new(Placement::Center, Animation::ScaleIn, size)
    }

    pub(crate) const fn bottom(size: Size) -> Self {
        Self::new(Placement::Bottom, Animation::FadeIn, size)
    }

    pub(crate) const fn top(size: Size) -> Self {
        Self::new(Placement::Top, Animation::FadeIn, size)
    }

    /// Write the decision onto a segment; every line takes the segment size.
    pub(crate) fn apply_to(self, seg: &mut Segment) {
        self.write(seg, false);
    }

    /// Like [`Choice::apply_to`], but lines with their own `BIG` emphasis keep `BIG`.
    pub(crate) fn apply_keeping_line_emphasis(self, seg: &mut Segment) {
        self.write(seg, true);
    }

    fn write(self, seg: &mut Segment, keep_line_emphasis: bool) {
        seg.placement = self.placement;
        seg.animation = self.animation;
        seg.set_size_with_lines(self.size, keep_line_emphasis);
    }
}
