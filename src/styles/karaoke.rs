use crate::{
    contract::{
        model::{Line, Segment, SegmentWords, Word},
        style::{Animation, Placement, Size},
    },
    placement::Choice,
};

/// Word timing spread over a line by each word's share of the line's characters.
pub fn proportional_words(line: &Line) -> Vec<Word> {
    let tokens: Vec<&str> = line.text.split_whitespace().collect();
    if tokens.is_empty() {
        return Vec::new();
    }
    let total: usize = tokens.iter().map(|t| t.chars().count()).sum();
    let duration = (line.end - line.start).max(0.0);
    let last = tokens.len() - 1;

    let mut out = Vec::with_capacity(tokens.len());
    let mut t = line.start;
    let mut acc = 0usize;
    for (i, tok) in tokens.into_iter().enumerate() {
        acc += tok.chars().count();
        let end = if i == last {
            line.end.max(line.start)
        } else {
            line.start + duration * (acc as f64) / (total as f64)
        };
        out.push(Word::new(tok, t, end));
        t = end;
    }
    out
}

/// Timestamps from `timed` mapped onto the line's tokens, clamped into the line window.
fn timed_words(line: &Line, tokens: &[&str], timed: &[&Word]) -> Vec<Word> {
    let mut prev = line.start;
    tokens
        .iter()
        .zip(timed)
        .map(|(tok, w)| {
            let start = w.start.max(prev).min(line.end).max(line.start);
            let end = w.end.min(line.end).max(start);
            prev = end;
            Word::new(*tok, start, end)
        })
        .collect()
}

/// Attach per-word timing to every line.
///
/// Real timestamps for a segment are consumed in text order across its lines; a line the
/// remaining timestamps cannot cover falls back to proportional timing. Segments without
/// lines get a single full-span line first.
pub fn attach_word_timing(segments: &[Segment], words: Option<&[SegmentWords]>) -> Vec<Segment> {
    let mut out = segments.to_vec();
    for (idx, seg) in out.iter_mut().enumerate() {
        if seg.lines.is_empty() && !seg.text.trim().is_empty() {
            seg.lines.push(Line::new(seg.text.clone(), seg.start, seg.end));
        }

        let timed: Vec<&Word> = words
            .and_then(|all| all.get(idx))
            .map(|w| w.0.iter().filter(|w| !w.text.trim().is_empty()).collect())
            .unwrap_or_default();
        let mut cursor = 0usize;

        for line in &mut seg.lines {
            let tokens: Vec<&str> = line.text.split_whitespace().collect();
            let line_words = if !timed.is_empty() && cursor + tokens.len() <= timed.len() {
                let w = timed_words(line, &tokens, &timed[cursor..cursor + tokens.len()]);
                cursor += tokens.len();
                w
            } else {
                cursor = timed.len();
                proportional_words(line)
            };
            line.words = Some(line_words);
        }
    }
    out
}

/// Upper-case all text and pin segments to the bottom with a fade-in.
pub fn apply_hormozi_style(segments: &[Segment]) -> Vec<Segment> {
    let mut out = segments.to_vec();
    for seg in &mut out {
        seg.text = seg.text.to_uppercase();
        let size = if seg.emphasis.is_some() { Size::Xl } else { Size::L };
        Choice::bottom(size).apply_to(seg);
        for line in &mut seg.lines {
            line.text = line.text.to_uppercase();
            line.placement = Some(Placement::Bottom);
            line.animation = Some(Animation::FadeIn);
            if let Some(words) = &mut line.words {
                for w in words {
                    w.text = w.text.to_uppercase();
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/styles/karaoke.rs"]
mod tests;
