use crate::contract::{
    model::Segment,
    style::{Animation, Placement},
};

/// Put every segment and every line at `placement` with a fade-in.
pub fn apply_fixed_placement(segments: &[Segment], placement: Placement) -> Vec<Segment> {
    segments
        .iter()
        .map(|seg| {
            let mut seg = seg.clone();
            seg.placement = placement;
            seg.animation = Animation::FadeIn;
            for line in &mut seg.lines {
                line.placement = Some(placement);
                line.animation = Some(Animation::FadeIn);
            }
            seg
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/placement/fixed.rs"]
mod tests;
