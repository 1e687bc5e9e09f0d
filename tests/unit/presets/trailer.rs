use super::*;
use crate::contract::{
    model::Emphasis,
    style::{Animation, Placement},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn splits_on_clause_punctuation_and_keeps_marks() {
    assert_eq!(
        split_fragments("This changes everything, forever, trust me"),
        vec!["This changes everything,", "forever,", "trust me"]
    );
    assert_eq!(
        split_fragments("Ready? Go; now. Done"),
        vec!["Ready?", "Go;", "now.", "Done"]
    );
}

#[test]
fn inner_marks_do_not_break() {
    assert_eq!(
        split_fragments("It costs 3.5 dollars, really"),
        vec!["It costs 3.5 dollars,", "really"]
    );
    assert_eq!(split_fragments("Wait... what?"), vec!["Wait...", "what?"]);
}

#[test]
fn long_clauses_are_chunked_into_five_words() {
    assert_eq!(
        split_fragments("one two three four five six seven"),
        vec!["one two three four five", "six seven"]
    );
}

#[test]
fn blank_text_has_no_fragments() {
    assert!(split_fragments("  ").is_empty());
    assert!(fragment_segments(&[Segment::new("   ", 0.0, 1.0)]).is_empty());
}

#[test]
fn fragments_split_time_by_length() {
    let segs = vec![Segment::new("This changes everything, forever, trust me", 0.0, 3.0)];
    let out = fragment_segments(&segs);
    assert_eq!(out.len(), 3);
    assert!(approx(out[0].end, 1.8));
    assert!(approx(out[1].start, 1.8));
    assert!(approx(out[1].end, 2.4));
    assert_eq!(out[2].end, 3.0);
    for f in &out {
        assert_eq!(f.lines.len(), 1);
        assert_eq!(f.lines[0].text, f.text);
        assert_eq!((f.lines[0].start, f.lines[0].end), (f.start, f.end));
    }
}

#[test]
fn media_urls_follow_fragments() {
    let mut seg = Segment::new("First part, second part", 0.0, 2.0);
    seg.image_url = Some("https://cdn.example.com/a.png".to_string());
    let out = fragment_segments(&[seg]);
    assert!(out.iter().all(|f| f.image_url.as_deref() == Some("https://cdn.example.com/a.png")));
}

#[test]
fn micro_gaps_trim_ends_and_never_move_starts() {
    let frags = fragment_segments(&[Segment::new(
        "This changes everything, forever, trust me",
        0.0,
        3.0,
    )]);
    let gapped = insert_micro_gaps(&frags);
    for (before, after) in frags.iter().zip(&gapped) {
        assert_eq!(before.start, after.start);
    }
    for w in gapped.windows(2) {
        let gap = w[1].start - w[0].end;
        assert!((MIN_MICRO_GAP_SEC..MAX_MICRO_GAP_SEC).contains(&gap), "gap {gap}");
        assert!(w[0].lines[0].end <= w[0].end);
    }
    assert_eq!(gapped.last().unwrap().end, 3.0);
}

#[test]
fn micro_gap_skipped_when_fragment_would_get_too_short() {
    let frags = fragment_segments(&[Segment::new("a, b, c", 0.0, 0.6)]);
    let gapped = insert_micro_gaps(&frags);
    assert_eq!(frags, gapped);
}

#[test]
fn existing_silence_is_left_alone() {
    let segs = vec![Segment::new("first", 0.0, 1.0), Segment::new("second", 2.0, 3.0)];
    assert_eq!(insert_micro_gaps(&segs), segs);
}

#[test]
fn micro_gap_length_is_bounded() {
    for idx in 0..50 {
        let g = micro_gap_for(idx, "fragment");
        assert!((MIN_MICRO_GAP_SEC..MAX_MICRO_GAP_SEC).contains(&g));
    }
}

#[test]
fn distribution_is_mostly_center() {
    let segs: Vec<Segment> = (0..200)
        .map(|i| Segment::new(format!("fragment {i}"), i as f64, i as f64 + 1.0))
        .collect();
    let out = apply_trailer_v1(&segs);
    let centers = out.iter().filter(|s| s.placement == Placement::Center).count();
    let tops = out.iter().filter(|s| s.placement == Placement::Top).count();
    assert!((110..=170).contains(&centers), "{centers} centered");
    assert!(tops > 0);
    for s in &out {
        let expected = if s.placement == Placement::Center {
            Animation::ScaleIn
        } else {
            Animation::FadeIn
        };
        assert_eq!(s.animation, expected);
    }
}

#[test]
fn emphasis_fragment_is_center_xxl() {
    let mut seg = Segment::new("forever,", 0.0, 1.0);
    seg.emphasis = Some(Emphasis {
        phrases: vec!["forever".to_string()],
        level: Size::Xl,
    });
    let out = apply_trailer_v1(&[seg]);
    assert_eq!(out[0].placement, Placement::Center);
    assert_eq!(out[0].animation, Animation::ScaleIn);
    assert_eq!(out[0].size, Some(Size::Xxl));
}
