use crate::contract::{
    model::{Line, Segment, SegmentWords, Word},
    style::OverflowStrategy,
};

/// Lines shorter than this (in characters) are merged into a neighbour.
pub const MIN_LINE_CHARS: usize = 10;
/// Lines with fewer words than this are merged into a neighbour.
pub const MIN_LINE_WORDS: usize = 2;
/// Gap between two words (seconds) that counts as a speech pause.
pub const DEFAULT_MIN_PAUSE_SEC: f64 = 0.35;
/// Default line width in characters.
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 42;

const REBALANCE_STEP_CHARS: usize = 8;
const REBALANCE_MAX_CHARS: usize = 80;

#[derive(Clone, Debug)]
struct Draft {
    line: Line,
    // piece of a word wider than the line; exempt from the word-count rule
    hard: bool,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

fn is_short(d: &Draft) -> bool {
    char_len(&d.line.text) < MIN_LINE_CHARS
        || (!d.hard && word_count(&d.line.text) < MIN_LINE_WORDS)
}

fn join_text(a: &str, b: &str) -> String {
    let mut s = String::with_capacity(a.len() + b.len() + 1);
    s.push_str(a);
    s.push(' ');
    s.push_str(b);
    s
}

fn append_line(into: &mut Line, next: Line) {
    into.text = join_text(&into.text, &next.text);
    into.end = next.end.max(into.end);
    into.words = match (into.words.take(), next.words) {
        (Some(mut a), Some(b)) => {
            a.extend(b);
            Some(a)
        }
        _ => None,
    };
}

/// Merge dangling short lines into the previous line (or the next one, for a leading line).
fn rebalance_short_lines(drafts: Vec<Draft>) -> Vec<Line> {
    let mut out: Vec<Draft> = Vec::with_capacity(drafts.len());
    for d in drafts {
        if let Some(prev) = out.last_mut()
            && is_short(&d)
        {
            append_line(&mut prev.line, d.line);
            prev.hard = false;
        } else {
            out.push(d);
        }
    }

    while out.len() >= 2 && is_short(&out[0]) {
        let first = out.remove(0);
        let next = &mut out[0];
        next.line.text = join_text(&first.line.text, &next.line.text);
        next.line.start = first.line.start;
        next.line.words = match (first.line.words, next.line.words.take()) {
            (Some(mut a), Some(b)) => {
                a.extend(b);
                Some(a)
            }
            _ => None,
        };
        next.hard = false;
    }

    out.into_iter().map(|d| d.line).collect()
}

/// Greedy word packing; words wider than `max_chars` are cut into `max_chars` pieces.
fn pack_words(text: &str, max_chars: usize) -> Vec<(String, bool)> {
    let mut rows: Vec<(String, bool)> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let wlen = char_len(word);
        if wlen > max_chars {
            if !current.is_empty() {
                rows.push((std::mem::take(&mut current), false));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                rows.push((piece.iter().collect(), true));
            }
            continue;
        }
        if current.is_empty() {
            current.push_str(word);
            current_len = wlen;
        } else if current_len + 1 + wlen <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + wlen;
        } else {
            rows.push((std::mem::take(&mut current), false));
            current.push_str(word);
            current_len = wlen;
        }
    }
    if !current.is_empty() {
        rows.push((current, false));
    }
    rows
}

/// Split `text` into lines of at most `max_chars_per_line` characters and distribute
/// `[start, end]` across them by character share.
///
/// The last line always ends exactly at `end`. Short lines (under [`MIN_LINE_CHARS`]
/// characters or [`MIN_LINE_WORDS`] words) are folded into their neighbour, so the
/// result may exceed the width when that is the only way to avoid a dangling line.
/// Blank text yields no lines.
pub fn split_segment(text: &str, start: f64, end: f64, max_chars_per_line: usize) -> Vec<Line> {
    let rows = pack_words(text, max_chars_per_line.max(1));
    if rows.is_empty() {
        return Vec::new();
    }

    let end = end.max(start);
    let duration = end - start;
    let total: usize = rows.iter().map(|(t, _)| char_len(t)).sum();
    let last = rows.len() - 1;

    let mut drafts = Vec::with_capacity(rows.len());
    let mut t = start;
    let mut acc = 0usize;
    for (i, (row, hard)) in rows.into_iter().enumerate() {
        acc += char_len(&row);
        let line_end = if i == last {
            end
        } else {
            start + duration * (acc as f64) / (total as f64)
        };
        drafts.push(Draft {
            line: Line::new(row, t, line_end),
            hard,
        });
        t = line_end;
    }

    rebalance_short_lines(drafts)
}

/// Timing window for every text token, built from word timestamps that may be tokenized
/// differently (`don` + `'t` for `don't`). Tokens and words must spell the same characters
/// ignoring whitespace and case, and no word may straddle two tokens.
fn align_token_spans(tokens: &[&str], words: &[&Word]) -> Option<Vec<(f64, f64)>> {
    if tokens.len() == words.len() {
        return Some(words.iter().map(|w| (w.start, w.end)).collect());
    }

    let compact = |s: &str| -> String {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    };
    let word_chars: Vec<String> = words.iter().map(|w| compact(&w.text)).collect();
    if tokens.iter().map(|t| compact(t)).collect::<String>() != word_chars.concat() {
        return None;
    }

    let mut spans = Vec::with_capacity(tokens.len());
    let mut w = 0usize;
    for tok in tokens {
        let need = compact(tok).chars().count();
        let first = w;
        let mut have = 0usize;
        while have < need {
            have += word_chars.get(w)?.chars().count();
            w += 1;
        }
        if have != need {
            return None;
        }
        spans.push((words[first].start, words[w - 1].end));
    }
    Some(spans)
}

/// Split using real word timestamps, preferring to break at speech pauses.
///
/// A line closes when the next word would overflow `max_chars_per_line`, or when the gap
/// to the next word is at least `min_pause_sec` and the line already holds
/// [`MIN_LINE_WORDS`] words and [`MIN_LINE_CHARS`] characters. Line text always comes
/// from `text`; timestamps tokenized differently are aligned to its words by character.
/// Without usable words, or when they cannot be aligned, this is [`split_segment`].
pub fn split_segment_with_word_timing(
    text: &str,
    start: f64,
    end: f64,
    words: &[Word],
    max_chars_per_line: usize,
    min_pause_sec: f64,
) -> Vec<Line> {
    let timed: Vec<&Word> = words.iter().filter(|w| !w.text.trim().is_empty()).collect();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let spans = match align_token_spans(&tokens, &timed) {
        Some(spans) if !spans.is_empty() => spans,
        _ => {
            if !timed.is_empty() {
                tracing::debug!(
                    tokens = tokens.len(),
                    words = timed.len(),
                    "word timing does not match text, splitting proportionally"
                );
            }
            return split_segment(text, start, end, max_chars_per_line);
        }
    };

    let max_chars = max_chars_per_line.max(1);
    let end = end.max(start);

    let mut drafts: Vec<Draft> = Vec::new();
    let mut prev_end = start;
    let mut flush = |from: usize, to: usize, len: usize, drafts: &mut Vec<Draft>| {
        let line_start = spans[from].0.max(start).min(end).max(prev_end);
        let line_end = spans[to].1.max(start).min(end).max(line_start);
        prev_end = line_end;
        drafts.push(Draft {
            line: Line::new(tokens[from..=to].join(" "), line_start, line_end),
            hard: from == to && len > max_chars,
        });
    };

    let mut first: Option<usize> = None;
    let mut cur_len = 0usize;
    for i in 0..tokens.len() {
        let tlen = char_len(tokens[i]);
        if let Some(f) = first
            && cur_len + 1 + tlen > max_chars
        {
            flush(f, i - 1, cur_len, &mut drafts);
            first = None;
        }
        match first {
            Some(_) => cur_len += 1 + tlen,
            None => {
                first = Some(i);
                cur_len = tlen;
            }
        }

        if let Some(f) = first
            && i + 1 < tokens.len()
        {
            let gap = spans[i + 1].0 - spans[i].1;
            let words_in_line = i + 1 - f;
            if gap >= min_pause_sec && words_in_line >= MIN_LINE_WORDS && cur_len >= MIN_LINE_CHARS
            {
                flush(f, i, cur_len, &mut drafts);
                first = None;
            }
        }
    }
    if let Some(f) = first {
        flush(f, tokens.len() - 1, cur_len, &mut drafts);
    }

    rebalance_short_lines(drafts)
}

/// Merge every line past `max_lines - 1` into the last kept line.
pub fn shrink_lines(mut lines: Vec<Line>, max_lines: usize) -> Vec<Line> {
    if max_lines == 0 || lines.len() <= max_lines {
        return lines;
    }
    let tail = lines.split_off(max_lines);
    if let Some(kept) = lines.last_mut() {
        for line in tail {
            append_line(kept, line);
        }
    }
    lines
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Line-splitting configuration shared by every segment of a request.
pub struct LineLayout {
    /// Target line width in characters.
    pub max_chars_per_line: usize,
    /// Line budget per segment; `None` or `0` disables overflow correction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    /// What to do when the split exceeds `max_lines`.
    pub overflow_strategy: OverflowStrategy,
    /// Pause threshold for the word-timed splitter.
    pub min_pause_sec: f64,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            max_lines: None,
            overflow_strategy: OverflowStrategy::Allow,
            min_pause_sec: DEFAULT_MIN_PAUSE_SEC,
        }
    }
}

impl LineLayout {
    /// Split one text span and apply overflow correction.
    pub fn split(&self, text: &str, start: f64, end: f64, words: Option<&[Word]>) -> Vec<Line> {
        let split_at = |width: usize| match words {
            Some(w) if !w.is_empty() => {
                split_segment_with_word_timing(text, start, end, w, width, self.min_pause_sec)
            }
            _ => split_segment(text, start, end, width),
        };

        let width = self.max_chars_per_line.max(1);
        let lines = split_at(width);
        let max_lines = match self.max_lines {
            Some(n) if n > 0 => n,
            _ => return lines,
        };

        match self.overflow_strategy {
            OverflowStrategy::Allow => lines,
            OverflowStrategy::Rebalance => widen_until_fits(lines, width, max_lines, split_at),
            OverflowStrategy::Shrink => shrink_lines(lines, max_lines),
            OverflowStrategy::RebalanceThenShrink => {
                shrink_lines(widen_until_fits(lines, width, max_lines, split_at), max_lines)
            }
        }
    }

    /// Lines for one segment.
    pub fn layout_segment(&self, segment: &Segment, words: Option<&[Word]>) -> Vec<Line> {
        self.split(&segment.text, segment.start, segment.end, words)
    }

    /// Return `segments` with `lines` populated; `words` is indexed like `segments`.
    #[tracing::instrument(skip_all, fields(segments = segments.len()))]
    pub fn layout_segments(
        &self,
        segments: &[Segment],
        words: Option<&[SegmentWords]>,
    ) -> Vec<Segment> {
        segments
            .iter()
            .enumerate()
            .map(|(idx, seg)| {
                let seg_words = words
                    .and_then(|all| all.get(idx))
                    .map(|w| w.0.as_slice());
                let mut out = seg.clone();
                out.lines = self.layout_segment(seg, seg_words);
                out
            })
            .collect()
    }
}

fn widen_until_fits(
    mut lines: Vec<Line>,
    mut width: usize,
    max_lines: usize,
    split_at: impl Fn(usize) -> Vec<Line>,
) -> Vec<Line> {
    while lines.len() > max_lines && width < REBALANCE_MAX_CHARS {
        width = (width + REBALANCE_STEP_CHARS).min(REBALANCE_MAX_CHARS);
        lines = split_at(width);
    }
    if lines.len() > max_lines {
        tracing::debug!(width, lines = lines.len(), max_lines, "rebalance hit width cap");
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/lines/splitter.rs"]
mod tests;
