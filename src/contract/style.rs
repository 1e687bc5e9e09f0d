#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Screen position of a subtitle block.
pub enum Placement {
    /// Lower third (classic subtitle position).
    #[default]
    Bottom,
    /// Middle of the frame.
    Center,
    /// Upper third.
    Top,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Entry animation of a subtitle block.
pub enum Animation {
    /// Opacity ramp.
    #[default]
    FadeIn,
    /// Scale-up from below 100%.
    ScaleIn,
    /// Hard cut.
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Visual weight token; the renderer maps it to a font size.
pub enum Size {
    /// Small.
    #[serde(rename = "S")]
    S,
    /// Medium (body text).
    #[serde(rename = "M")]
    M,
    /// Large.
    #[serde(rename = "L")]
    L,
    /// Line-level emphasis.
    #[serde(rename = "BIG")]
    Big,
    /// Extra large.
    #[serde(rename = "XL")]
    Xl,
    /// Trailer-grade emphasis.
    #[serde(rename = "XXL")]
    Xxl,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Subtitle style identifier.
pub enum Style {
    /// One line at a time.
    #[default]
    OneLine,
    /// Up to two stacked lines.
    TwoLines,
    /// Plain documentary subtitles.
    Documentary,
    /// Cinematic look with dampened placement changes.
    CinematicDynamic,
    /// Punchy fragments, mostly centered.
    Trailer,
    /// Upper-cased karaoke word highlight.
    AlexHormozi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Named bundle of placement rules.
pub enum DirectionPreset {
    /// Everything at the bottom.
    Documentary,
    /// Phase-based narrative direction (hook, body, emphasis, call to action).
    CinematicDynamicV1,
    /// Fragment-level trailer direction.
    TrailerV1,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Whether placement is fixed or decided per segment.
pub enum PlacementStrategy {
    /// Apply `default_placement` everywhere.
    #[default]
    Fixed,
    /// Decide per segment (preset or generic strategy).
    Dynamic,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Policy for a line split that exceeds the allowed line count.
pub enum OverflowStrategy {
    /// Keep the overflow.
    #[default]
    Allow,
    /// Retry with wider lines.
    Rebalance,
    /// Merge overflowing lines into the last allowed one.
    Shrink,
    /// Widen first, merge whatever still overflows.
    RebalanceThenShrink,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Layout guards applied by the dynamic strategies.
pub struct LayoutConstraints {
    /// Keep long sentences out of the middle of the frame.
    pub avoid_center_long_sentences: bool,
    /// Render emphasized segments at `XL` instead of `BIG`.
    pub prefer_center_for_emphasis: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Dampening overrides for the generic placement strategy. Unset fields use defaults.
pub struct DynamicRules {
    /// Minimum seconds between two placement changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_seconds_between_placement_changes: Option<f64>,
    /// Maximum consecutive `CENTER` segments before forcing `BOTTOM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_center_blocks_in_row: Option<u32>,
}

/// Creativity used when the caller supplies a negative or NaN value.
pub const DEFAULT_CREATIVITY: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Immutable per-invocation direction configuration.
pub struct DirectionInput {
    /// Subtitle style.
    #[serde(default)]
    pub style: Style,
    /// Optional named preset (only consulted for dynamic placement).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_preset: Option<DirectionPreset>,
    /// Fixed or dynamic placement.
    #[serde(default)]
    pub placement_strategy: PlacementStrategy,
    /// Placement used by the fixed strategy.
    #[serde(default)]
    pub default_placement: Placement,
    /// Phrases to highlight (case-insensitive).
    #[serde(default)]
    pub emphasis_phrases: Vec<String>,
    /// Total audio duration in seconds.
    pub duration_sec: f64,
    /// How often non-default placements are chosen, `[0, 1]`.
    #[serde(default = "default_creativity")]
    pub creativity: f64,
    /// Optional layout guards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_constraints: Option<LayoutConstraints>,
    /// Optional dampening overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_rules: Option<DynamicRules>,
    /// Optional real word timestamps, indexed like the segment list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_words: Option<Vec<crate::contract::model::SegmentWords>>,
}

fn default_creativity() -> f64 {
    DEFAULT_CREATIVITY
}

impl DirectionInput {
    /// Minimal configuration for a style and a total duration.
    pub fn new(style: Style, duration_sec: f64) -> Self {
        Self {
            style,
            direction_preset: None,
            placement_strategy: PlacementStrategy::Fixed,
            default_placement: Placement::Bottom,
            emphasis_phrases: Vec::new(),
            duration_sec,
            creativity: DEFAULT_CREATIVITY,
            layout_constraints: None,
            dynamic_rules: None,
            segment_words: None,
        }
    }

    /// Creativity clamped to `[0, 1]`; negative or NaN falls back to [`DEFAULT_CREATIVITY`].
    pub fn effective_creativity(&self) -> f64 {
        if self.creativity.is_nan() || self.creativity < 0.0 {
            DEFAULT_CREATIVITY
        } else {
            self.creativity.min(1.0)
        }
    }

    /// Layout guards, all off when unset.
    pub fn constraints(&self) -> LayoutConstraints {
        self.layout_constraints.unwrap_or_default()
    }

    /// Word timing for one segment, if any was supplied and it is non-empty.
    pub fn words_for(&self, segment_index: usize) -> Option<&[crate::contract::model::Word]> {
        self.segment_words
            .as_ref()
            .and_then(|all| all.get(segment_index))
            .map(|w| w.0.as_slice())
            .filter(|w| !w.is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contract/style.rs"]
mod tests;
