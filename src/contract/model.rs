use crate::contract::style::{Animation, Placement, Size};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One spoken word with its timestamps in seconds (`start <= end`).
pub struct Word {
    /// Word text as transcribed.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl Word {
    /// Create a word.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Real word timestamps for one segment.
pub struct SegmentWords(pub Vec<Word>);

impl From<Vec<Word>> for SegmentWords {
    fn from(words: Vec<Word>) -> Self {
        Self(words)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Emphasis found in a segment.
pub struct Emphasis {
    /// Configured phrases present in the segment text.
    pub phrases: Vec<String>,
    /// Visual weight.
    pub level: Size,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Emphasis marker on a line; phrase context lives on the parent segment.
pub struct LineEmphasis {
    /// Visual weight.
    pub level: Size,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One on-screen row of text nested inside its segment's time window.
///
/// `placement`, `animation` and `size` are overrides: `None` means "inherit from the segment"
/// (see [`crate::ResolvedLine`]).
pub struct Line {
    /// Row text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Placement override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// Animation override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    /// Line emphasis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<LineEmphasis>,
    /// Size override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Per-word karaoke timing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

impl Line {
    /// Plain line without overrides.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One narration beat.
pub struct Segment {
    /// Segment text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Resolved placement.
    #[serde(default)]
    pub placement: Placement,
    /// Resolved entry animation.
    #[serde(default)]
    pub animation: Animation,
    /// Emphasis found in the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    /// Visual weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Display rows partitioning `text` across `[start, end]`.
    #[serde(default)]
    pub lines: Vec<Line>,
    /// Optional background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Optional background video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Segment {
    /// Bare segment as produced by transcription.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            ..Self::default()
        }
    }

    /// Builder-style helper attaching lines.
    pub fn with_lines(mut self, lines: Vec<Line>) -> Self {
        self.lines = lines;
        self
    }

    /// Segment length in seconds (never negative).
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Time midpoint.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Set the segment size and copy it onto every line. With `keep_line_emphasis`, a line
    /// carrying its own `BIG` emphasis stays `BIG`.
    pub(crate) fn set_size_with_lines(&mut self, size: Size, keep_line_emphasis: bool) {
        self.size = Some(size);
        for line in &mut self.lines {
            line.size = match line.emphasis {
                Some(LineEmphasis { level: Size::Big }) if keep_line_emphasis => Some(Size::Big),
                _ => Some(size),
            };
        }
    }

    /// Clamp segment and line windows into `[0, duration_sec]`.
    pub(crate) fn clamp_to(&mut self, duration_sec: f64) {
        let clamp = |t: f64| t.max(0.0).min(duration_sec);
        self.start = clamp(self.start);
        self.end = clamp(self.end).max(self.start);
        for line in &mut self.lines {
            line.start = clamp(line.start);
            line.end = clamp(line.end).max(line.start);
            if let Some(words) = &mut line.words {
                for w in words {
                    w.start = clamp(w.start);
                    w.end = clamp(w.end).max(w.start);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contract/model.rs"]
mod tests;
