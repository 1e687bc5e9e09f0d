use crate::contract::style::Style;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Font and color passthrough for the renderer.
///
/// Direction never reads these values; they travel in the output envelope next to the
/// directed segments.
pub struct ThemePreset {
    /// Preset identifier.
    pub name: String,
    /// Font family name.
    pub font_family: String,
    /// CSS-style font weight (100..=900).
    pub font_weight: u16,
    /// Base text color, `#RRGGBB` or `#RRGGBBAA`.
    pub text_color: String,
    /// Color of emphasized or currently spoken words.
    pub highlight_color: String,
    /// Outline color.
    pub stroke_color: String,
    /// Outline width in pixels.
    pub stroke_width_px: f32,
    /// Optional box behind the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl ThemePreset {
    /// Neutral white subtitles.
    pub fn clean() -> Self {
        Self {
            name: "CLEAN".to_string(),
            font_family: "Inter".to_string(),
            font_weight: 600,
            text_color: "#FFFFFF".to_string(),
            highlight_color: "#FFFFFF".to_string(),
            stroke_color: "#000000".to_string(),
            stroke_width_px: 2.0,
            background_color: None,
        }
    }

    /// Serif titles with a warm highlight.
    pub fn cinematic() -> Self {
        Self {
            name: "CINEMATIC".to_string(),
            font_family: "Playfair Display".to_string(),
            font_weight: 500,
            text_color: "#F5F1E8".to_string(),
            highlight_color: "#E9B949".to_string(),
            stroke_color: "#00000080".to_string(),
            stroke_width_px: 1.0,
            background_color: None,
        }
    }

    /// Heavy condensed type for trailer fragments.
    pub fn trailer() -> Self {
        Self {
            name: "TRAILER".to_string(),
            font_family: "Bebas Neue".to_string(),
            font_weight: 700,
            text_color: "#FFFFFF".to_string(),
            highlight_color: "#FF3B30".to_string(),
            stroke_color: "#000000".to_string(),
            stroke_width_px: 3.0,
            background_color: None,
        }
    }

    /// Bold karaoke look with a yellow active word.
    pub fn hormozi() -> Self {
        Self {
            name: "HORMOZI".to_string(),
            font_family: "Montserrat".to_string(),
            font_weight: 900,
            text_color: "#FFFFFF".to_string(),
            highlight_color: "#FFE100".to_string(),
            stroke_color: "#000000".to_string(),
            stroke_width_px: 6.0,
            background_color: None,
        }
    }

    /// Built-in preset matching a style.
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::OneLine | Style::TwoLines | Style::Documentary => Self::clean(),
            Style::CinematicDynamic => Self::cinematic(),
            Style::Trailer => Self::trailer(),
            Style::AlexHormozi => Self::hormozi(),
        }
    }
}
