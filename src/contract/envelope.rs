use std::{fs::File, io::BufReader, path::Path};

use crate::{
    contract::{
        model::{Segment, Word},
        style::{DirectionInput, DirectionPreset, PlacementStrategy, Style},
        theme::ThemePreset,
    },
    direction::orchestrator::direct,
    foundation::error::{CaptionError, CaptionResult},
    lines::splitter::LineLayout,
};

/// Version of the [`DirectedSubtitles`] JSON layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Directed segments plus the configuration a renderer needs to draw them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectedSubtitles {
    /// Always [`SCHEMA_VERSION`] when produced by this crate.
    pub schema_version: u32,
    /// Style the segments were directed with.
    pub style: Style,
    /// Preset, if one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<DirectionPreset>,
    /// Fixed or dynamic placement.
    pub placement_strategy: PlacementStrategy,
    /// Line layout the segments were split with.
    pub layout: LineLayout,
    /// Font and color preset.
    pub theme: ThemePreset,
    /// Directed segments.
    pub segments: Vec<Segment>,
}

impl DirectedSubtitles {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> CaptionResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CaptionError::serde(format!("encode directed subtitles: {e}")))
    }
}

/// A complete direction request: transcription, configuration, layout and theme.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionRequest {
    /// Transcribed segments in time order.
    pub segments: Vec<Segment>,
    /// Direction configuration.
    pub input: DirectionInput,
    /// Line layout; defaults apply when omitted.
    #[serde(default)]
    pub layout: LineLayout,
    /// Theme override; the style's built-in preset when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreset>,
}

impl DirectionRequest {
    /// Request with default layout and theme.
    pub fn new(segments: Vec<Segment>, input: DirectionInput) -> Self {
        Self {
            segments,
            input,
            layout: LineLayout::default(),
            theme: None,
        }
    }

    /// Parse a request from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> CaptionResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CaptionError::validation(format!("parse direction request JSON: {e}")))
    }

    /// Parse a request from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CaptionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CaptionError::validation(format!("open direction request '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject timestamps direction cannot work with.
    pub fn validate(&self) -> CaptionResult<()> {
        let d = self.input.duration_sec;
        if !d.is_finite() {
            return Err(CaptionError::validation(format!(
                "durationSec must be finite, got {d}"
            )));
        }
        if !(self.layout.min_pause_sec.is_finite() && self.layout.min_pause_sec >= 0.0) {
            return Err(CaptionError::validation(format!(
                "layout.minPauseSec must be a finite non-negative number, got {}",
                self.layout.min_pause_sec
            )));
        }

        for (idx, seg) in self.segments.iter().enumerate() {
            check_window(&format!("segments[{idx}]"), seg.start, seg.end)?;
            for (l, line) in seg.lines.iter().enumerate() {
                check_window(&format!("segments[{idx}].lines[{l}]"), line.start, line.end)?;
            }
        }

        if let Some(all) = &self.input.segment_words {
            if all.len() > self.segments.len() {
                return Err(CaptionError::validation(format!(
                    "segmentWords has {} entries for {} segments",
                    all.len(),
                    self.segments.len()
                )));
            }
            for (idx, words) in all.iter().enumerate() {
                check_words(idx, &words.0)?;
            }
        }
        Ok(())
    }

    /// Validate, lay out lines, direct, and wrap the result in an envelope.
    #[tracing::instrument(skip_all, fields(segments = self.segments.len(), style = ?self.input.style))]
    pub fn run(&self) -> CaptionResult<DirectedSubtitles> {
        self.validate()?;
        let laid_out = self
            .layout
            .layout_segments(&self.segments, self.input.segment_words.as_deref());
        let segments = direct(&laid_out, &self.input);
        Ok(DirectedSubtitles {
            schema_version: SCHEMA_VERSION,
            style: self.input.style,
            preset: self.input.direction_preset,
            placement_strategy: self.input.placement_strategy,
            layout: self.layout.clone(),
            theme: self
                .theme
                .clone()
                .unwrap_or_else(|| ThemePreset::for_style(self.input.style)),
            segments,
        })
    }
}

fn check_window(what: &str, start: f64, end: f64) -> CaptionResult<()> {
    if !(start.is_finite() && end.is_finite()) {
        return Err(CaptionError::validation(format!(
            "{what}: timestamps must be finite, got [{start}, {end}]"
        )));
    }
    if start < 0.0 {
        return Err(CaptionError::validation(format!(
            "{what}: start must be >= 0, got {start}"
        )));
    }
    if end < start {
        return Err(CaptionError::validation(format!(
            "{what}: end {end} is before start {start}"
        )));
    }
    Ok(())
}

fn check_words(segment_index: usize, words: &[Word]) -> CaptionResult<()> {
    for (w, word) in words.iter().enumerate() {
        check_window(
            &format!("segmentWords[{segment_index}][{w}]"),
            word.start,
            word.end,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/contract/envelope.rs"]
mod tests;
