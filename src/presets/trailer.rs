use crate::{
    contract::{
        model::{Line, Segment},
        style::Size,
    },
    foundation::math::unit_hash,
    placement::Choice,
};

/// Maximum words per trailer fragment.
pub const MAX_FRAGMENT_WORDS: usize = 5;
/// Shortest gap inserted between fragments (seconds).
pub const MIN_MICRO_GAP_SEC: f64 = 0.2;
/// Longest gap inserted between fragments (seconds, exclusive).
pub const MAX_MICRO_GAP_SEC: f64 = 0.4;
/// A gap is skipped if it would leave the fragment shorter than this.
pub const MIN_FRAGMENT_SEC: f64 = 0.25;

fn is_break(c: char) -> bool {
    matches!(c, ',' | ';' | '.' | '?')
}

/// Split on clause punctuation, then chunk every clause into at most
/// [`MAX_FRAGMENT_WORDS`] words. Punctuation stays on the clause it ends; a mark
/// inside a token (`3.5`, `e.g.x`) is not a break.
pub fn split_fragments(text: &str) -> Vec<String> {
    let mut clauses: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if is_break(c) && chars.peek().is_none_or(|n| n.is_whitespace()) {
            clauses.push(std::mem::take(&mut current));
        }
    }
    clauses.push(current);

    let mut out = Vec::new();
    for clause in clauses {
        let words: Vec<&str> = clause.split_whitespace().collect();
        for chunk in words.chunks(MAX_FRAGMENT_WORDS) {
            out.push(chunk.join(" "));
        }
    }
    out
}

/// Turn every segment into one-line fragment segments.
///
/// Fragment time is proportional to fragment length; the last fragment ends exactly at
/// the original segment's end. Media URLs are carried onto every fragment.
pub fn fragment_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len() * 2);
    for seg in segments {
        let pieces = split_fragments(&seg.text);
        if pieces.is_empty() {
            continue;
        }
        let total: usize = pieces.iter().map(|p| p.chars().count()).sum();
        let duration = seg.duration();
        let last = pieces.len() - 1;
        let mut t = seg.start;
        let mut acc = 0usize;
        for (i, piece) in pieces.into_iter().enumerate() {
            acc += piece.chars().count();
            let end = if i == last {
                seg.end.max(seg.start)
            } else {
                seg.start + duration * (acc as f64) / (total as f64)
            };
            out.push(Segment {
                lines: vec![Line::new(piece.clone(), t, end)],
                text: piece,
                start: t,
                end,
                image_url: seg.image_url.clone(),
                video_url: seg.video_url.clone(),
                ..Segment::default()
            });
            t = end;
        }
    }
    out
}

/// Micro-gap length for a fragment, in `[MIN_MICRO_GAP_SEC, MAX_MICRO_GAP_SEC)`.
pub fn micro_gap_for(idx: usize, text: &str) -> f64 {
    MIN_MICRO_GAP_SEC + (MAX_MICRO_GAP_SEC - MIN_MICRO_GAP_SEC) * unit_hash(idx as u64, text)
}

/// Open a short silence before every fragment but the first by pulling the previous
/// fragment's end back. Starts never move.
pub fn insert_micro_gaps(segments: &[Segment]) -> Vec<Segment> {
    let mut out = segments.to_vec();
    for idx in 0..out.len().saturating_sub(1) {
        let next_start = out[idx + 1].start;
        let seg = &mut out[idx];
        let gap = micro_gap_for(idx, &seg.text);
        let new_end = next_start - gap;
        if new_end >= seg.end {
            continue;
        }
        if new_end - seg.start < MIN_FRAGMENT_SEC {
            tracing::debug!(idx, gap, "micro-gap skipped, fragment too short");
            continue;
        }
        seg.end = new_end;
        for line in &mut seg.lines {
            line.end = line.end.min(new_end);
            line.start = line.start.min(line.end);
        }
    }
    out
}

/// Trailer placement: emphasis is `CENTER`/`XXL`, otherwise a hash-driven
/// 70% `CENTER`, 20% `BOTTOM`, 10% `TOP` split.
pub fn apply_trailer_v1(segments: &[Segment]) -> Vec<Segment> {
    let mut out = segments.to_vec();
    for (idx, seg) in out.iter_mut().enumerate() {
        let choice = if seg.emphasis.is_some() {
            Choice::center(Size::Xxl)
        } else {
            let r = unit_hash(idx as u64, &seg.text);
            if r < 0.7 {
                Choice::center(Size::Xl)
            } else if r < 0.9 {
                Choice::bottom(Size::L)
            } else {
                Choice::top(Size::L)
            }
        };
        choice.apply_to(seg);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/presets/trailer.rs"]
mod tests;
