use crate::contract::{
    model::{Emphasis, LineEmphasis, Segment},
    style::Size,
};

/// Case-insensitive phrase matcher built once per direction call.
#[derive(Clone, Debug, Default)]
pub struct EmphasisDetector {
    // (as configured but trimmed, lower-cased)
    phrases: Vec<(String, String)>,
}

impl EmphasisDetector {
    /// Build a detector; blank phrases are dropped and duplicates collapsed.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut out: Vec<(String, String)> = Vec::with_capacity(phrases.len());
        for p in phrases {
            let trimmed = p.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            let lower = trimmed.to_lowercase();
            if out.iter().any(|(_, l)| *l == lower) {
                continue;
            }
            out.push((trimmed.to_string(), lower));
        }
        Self { phrases: out }
    }

    /// No usable phrases configured.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Configured phrases found in `text`, in configuration order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        if self.phrases.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        self.phrases
            .iter()
            .filter(|(_, needle)| lower.contains(needle.as_str()))
            .map(|(orig, _)| orig.clone())
            .collect()
    }

    /// Whether any phrase occurs in `text`.
    pub fn any_match(&self, text: &str) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.phrases
            .iter()
            .any(|(_, needle)| lower.contains(needle.as_str()))
    }

    /// Tag one segment and its lines in place.
    pub(crate) fn tag(&self, seg: &mut Segment) {
        let found = self.matches(&seg.text);
        if !found.is_empty() {
            seg.emphasis = Some(Emphasis {
                phrases: found,
                level: Size::Xl,
            });
        }
        for line in &mut seg.lines {
            if self.any_match(&line.text) {
                line.emphasis = Some(LineEmphasis { level: Size::Big });
            }
        }
    }
}

/// Tag segments (`XL`) and lines (`BIG`) containing any of `phrases`.
///
/// Returns a new list; segments without matches come back unchanged.
pub fn detect_emphasis<S: AsRef<str>>(segments: &[Segment], phrases: &[S]) -> Vec<Segment> {
    let detector = EmphasisDetector::new(phrases);
    let mut out = segments.to_vec();
    if detector.is_empty() {
        return out;
    }
    for seg in &mut out {
        detector.tag(seg);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/emphasis/detector.rs"]
mod tests;
