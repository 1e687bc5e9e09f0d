use crate::contract::{
    model::{Segment, Word},
    style::{Animation, Placement, Size},
};

/// A line with every inherited field filled in, ready for a renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLine {
    /// Row text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Line override, else the segment placement.
    pub placement: Placement,
    /// Line override, else the segment animation.
    pub animation: Animation,
    /// Line override, else the segment size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Whether the line itself carries emphasis.
    pub emphasized: bool,
    /// Karaoke word timing (empty when none was attached).
    pub words: Vec<Word>,
}

impl Segment {
    /// Lines with overrides resolved against this segment. A segment without lines resolves
    /// to a single line spanning the whole segment.
    pub fn resolved_lines(&self) -> Vec<ResolvedLine> {
        if self.lines.is_empty() {
            return vec![ResolvedLine {
                text: self.text.clone(),
                start: self.start,
                end: self.end,
                placement: self.placement,
                animation: self.animation,
                size: self.size,
                emphasized: self.emphasis.is_some(),
                words: Vec::new(),
            }];
        }

        self.lines
            .iter()
            .map(|line| ResolvedLine {
                text: line.text.clone(),
                start: line.start,
                end: line.end,
                placement: line.placement.unwrap_or(self.placement),
                animation: line.animation.unwrap_or(self.animation),
                size: line.size.or(self.size),
                emphasized: line.emphasis.is_some(),
                words: line.words.clone().unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/direction/resolve.rs"]
mod tests;
