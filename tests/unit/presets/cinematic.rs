use super::*;
use crate::contract::{
    model::{Emphasis, Line},
    style::{Animation, Placement},
};

fn seg(text: &str, start: f64, end: f64) -> Segment {
    Segment::new(text, start, end)
}

fn emphasized(text: &str, start: f64, end: f64) -> Segment {
    let mut s = seg(text, start, end);
    s.emphasis = Some(Emphasis {
        phrases: vec![text.to_string()],
        level: Size::Xl,
    });
    s
}

#[test]
fn phases_follow_start_percentage() {
    assert_eq!(NarrativePhase::at(0.0, 100.0), NarrativePhase::Hook);
    assert_eq!(NarrativePhase::at(11.9, 100.0), NarrativePhase::Hook);
    assert_eq!(NarrativePhase::at(12.0, 100.0), NarrativePhase::Body);
    assert_eq!(NarrativePhase::at(69.9, 100.0), NarrativePhase::Body);
    assert_eq!(NarrativePhase::at(70.0, 100.0), NarrativePhase::Emphasis);
    assert_eq!(NarrativePhase::at(90.0, 100.0), NarrativePhase::Cta);
    assert_eq!(NarrativePhase::at(100.0, 100.0), NarrativePhase::Cta);
}

#[test]
fn narrative_arc_over_a_short_video() {
    let segs = vec![
        seg("Stop scrolling right now", 0.0, 5.0),
        seg("Here is what nobody tells you", 12.0, 18.0),
        seg("Most creators spend months polishing videos nobody watches", 20.0, 30.0),
        seg("Short body beat", 32.0, 35.0),
        seg("Consistency beats talent", 72.0, 80.0),
        seg("Follow for more", 95.0, 100.0),
    ];
    let out = CinematicDynamicV1::new(0.0, LayoutConstraints::default()).apply(&segs, 100.0);

    let got: Vec<(Placement, Animation, Option<Size>)> = out
        .iter()
        .map(|s| (s.placement, s.animation, s.size))
        .collect();
    assert_eq!(
        got,
        vec![
            (Placement::Center, Animation::ScaleIn, Some(Size::L)),
            (Placement::Bottom, Animation::FadeIn, Some(Size::M)),
            (Placement::Top, Animation::FadeIn, Some(Size::L)),
            (Placement::Bottom, Animation::FadeIn, Some(Size::M)),
            (Placement::Bottom, Animation::FadeIn, Some(Size::L)),
            (Placement::Center, Animation::ScaleIn, Some(Size::Xl)),
        ]
    );
}

#[test]
fn exactly_one_contrast_block() {
    let mut segs = vec![seg("Opening hook line", 0.0, 5.0)];
    for i in 1..=24 {
        let t = 11.0 + i as f64;
        segs.push(seg(&format!("Body beat {i}"), t, t + 1.0));
    }
    let out = CinematicDynamicV1::new(0.0, LayoutConstraints::default()).apply(&segs, 100.0);
    let tops: Vec<usize> = out
        .iter()
        .enumerate()
        .filter(|(_, s)| s.placement == Placement::Top)
        .map(|(i, _)| i)
        .collect();
    // first of the longest texts ("Body beat 10")
    assert_eq!(tops, vec![10]);
}

#[test]
fn body_center_exception_needs_hash_and_gap() {
    let mut segs = vec![seg("Opening hook line", 0.0, 5.0)];
    for i in 1..=24 {
        let t = 11.0 + i as f64;
        segs.push(seg(&format!("Body beat {i}"), t, t + 1.0));
    }
    let out = CinematicDynamicV1::new(0.8, LayoutConstraints::default()).apply(&segs, 100.0);
    let centers: Vec<usize> = out
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, s)| s.placement == Placement::Center)
        .map(|(i, _)| i)
        .collect();
    // beat 15 also passes the hash gate but starts only 3s after beat 12
    assert_eq!(centers, vec![12]);
    assert_eq!(out[12].size, Some(Size::L));

    let low = CinematicDynamicV1::new(0.4, LayoutConstraints::default()).apply(&segs, 100.0);
    assert!(low.iter().skip(1).all(|s| s.placement != Placement::Center));
}

#[test]
fn emphasis_wins_in_any_phase_unless_too_long() {
    let long = "This emphasized sentence is far too long to sit in the middle of the frame";
    assert!(long.chars().count() > LONG_SENTENCE_CHARS);
    let segs = vec![
        emphasized("big reveal", 40.0, 42.0),
        emphasized(long, 50.0, 55.0),
    ];
    let guard = LayoutConstraints {
        avoid_center_long_sentences: true,
        ..LayoutConstraints::default()
    };
    let out = CinematicDynamicV1::new(0.0, guard).apply(&segs, 100.0);
    assert_eq!(
        (out[0].placement, out[0].animation, out[0].size),
        (Placement::Center, Animation::ScaleIn, Some(Size::Xl))
    );
    assert_eq!(
        (out[1].placement, out[1].size),
        (Placement::Bottom, Some(Size::L))
    );
}

#[test]
fn cta_guarantee_forces_last_segment_center() {
    let segs = vec![
        seg("Intro", 0.0, 10.0),
        seg("Middle of the story", 40.0, 50.0),
        seg("Subscribe and share this with a friend", 95.0, 100.0)
            .with_lines(vec![Line::new("Subscribe and share this with a friend", 95.0, 100.0)]),
    ];
    let out = CinematicDynamicV1::new(0.8, LayoutConstraints::default()).apply(&segs, 100.0);
    let last = out.last().unwrap();
    assert_eq!(last.placement, Placement::Center);
    assert_eq!(last.animation, Animation::ScaleIn);
    assert_eq!(last.size, Some(Size::Xl));
    assert_eq!(last.lines[0].size, Some(Size::Xl));
}

#[test]
fn last_segment_before_cta_window_is_not_forced() {
    let segs = vec![seg("Intro", 0.0, 10.0), seg("Closing thought", 80.0, 88.0)];
    let out = CinematicDynamicV1::new(0.8, LayoutConstraints::default()).apply(&segs, 100.0);
    assert_eq!(out[1].placement, Placement::Bottom);
}

#[test]
fn zero_duration_is_a_no_op() {
    let segs = vec![seg("Intro", 0.0, 10.0)];
    assert_eq!(
        CinematicDynamicV1::new(0.8, LayoutConstraints::default()).apply(&segs, 0.0),
        segs
    );
}
