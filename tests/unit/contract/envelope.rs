use super::*;
use crate::contract::{
    model::SegmentWords,
    style::{OverflowStrategy, Placement},
};

const REQUEST: &str = r#"{
  "segments": [
    { "text": "Welcome back to the channel everyone", "start": 0.0, "end": 3.0 },
    { "text": "Today we talk money", "start": 3.0, "end": 5.0 }
  ],
  "input": {
    "style": "TWO_LINES",
    "durationSec": 5.0,
    "emphasisPhrases": ["money"]
  },
  "layout": { "maxCharsPerLine": 20, "maxLines": 2, "overflowStrategy": "SHRINK" }
}"#;

#[test]
fn parses_camel_case_request_with_defaults() {
    let req = DirectionRequest::from_reader(REQUEST.as_bytes()).unwrap();
    assert_eq!(req.segments.len(), 2);
    assert_eq!(req.input.style, Style::TwoLines);
    assert_eq!(req.input.placement_strategy, PlacementStrategy::Fixed);
    assert_eq!(req.input.default_placement, Placement::Bottom);
    assert_eq!(req.input.creativity, 0.8);
    assert_eq!(req.layout.max_chars_per_line, 20);
    assert_eq!(req.layout.max_lines, Some(2));
    assert_eq!(req.layout.overflow_strategy, OverflowStrategy::Shrink);
    assert_eq!(req.layout.min_pause_sec, 0.35);
    assert!(req.theme.is_none());
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = DirectionRequest::from_reader("{ \"segments\": [".as_bytes()).unwrap_err();
    assert!(matches!(err, CaptionError::Validation(_)), "{err}");

    let err = DirectionRequest::from_reader(
        r#"{"segments":[],"input":{"style":"WIDE","durationSec":1.0}}"#.as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, CaptionError::Validation(_)));
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = DirectionRequest::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn validate_rejects_bad_timestamps() {
    let base = DirectionRequest::new(
        vec![Segment::new("ok", 0.0, 1.0)],
        DirectionInput::new(Style::OneLine, 1.0),
    );
    assert!(base.validate().is_ok());

    let mut req = base.clone();
    req.segments[0].start = -0.5;
    assert!(req.validate().is_err());

    let mut req = base.clone();
    req.segments[0].end = f64::NAN;
    assert!(req.validate().is_err());

    let mut req = base.clone();
    req.segments[0] = Segment::new("backwards", 2.0, 1.0);
    let err = req.validate().unwrap_err();
    assert!(err.to_string().contains("segments[0]"), "{err}");

    let mut req = base.clone();
    req.input.duration_sec = f64::INFINITY;
    assert!(req.validate().is_err());

    let mut req = base.clone();
    req.input.segment_words = Some(vec![SegmentWords::default(), SegmentWords::default()]);
    assert!(req.validate().is_err());

    let mut req = base;
    req.input.segment_words = Some(vec![SegmentWords(vec![Word::new("ok", 0.6, 0.2)])]);
    assert!(req.validate().is_err());
}

#[test]
fn run_lays_out_directs_and_wraps() {
    let req = DirectionRequest::from_reader(REQUEST.as_bytes()).unwrap();
    let out = req.run().unwrap();

    assert_eq!(out.schema_version, SCHEMA_VERSION);
    assert_eq!(out.style, Style::TwoLines);
    assert_eq!(out.theme, ThemePreset::for_style(Style::TwoLines));
    assert_eq!(out.layout, req.layout);

    for seg in &out.segments {
        assert!(!seg.lines.is_empty() && seg.lines.len() <= 2);
        assert_eq!(seg.placement, Placement::Bottom);
        let joined: Vec<&str> = seg.lines.iter().flat_map(|l| l.text.split_whitespace()).collect();
        assert_eq!(joined, seg.text.split_whitespace().collect::<Vec<_>>());
    }
    assert!(out.segments[1].emphasis.is_some());
}

#[test]
fn run_refuses_invalid_requests() {
    let req = DirectionRequest::new(
        vec![Segment::new("bad", -1.0, 1.0)],
        DirectionInput::new(Style::OneLine, 1.0),
    );
    assert!(matches!(req.run(), Err(CaptionError::Validation(_))));
}

#[test]
fn envelope_json_uses_camel_case_and_tokens() {
    let req = DirectionRequest::from_reader(REQUEST.as_bytes()).unwrap();
    let json = req.run().unwrap().to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["schemaVersion"], 1);
    assert_eq!(v["style"], "TWO_LINES");
    assert_eq!(v["placementStrategy"], "FIXED");
    assert!(v.get("preset").is_none());
    assert_eq!(v["layout"]["maxCharsPerLine"], 20);
    assert_eq!(v["segments"][0]["animation"], "FADE_IN");
    assert_eq!(v["segments"][1]["emphasis"]["level"], "XL");

    let back: DirectedSubtitles = serde_json::from_str(&json).unwrap();
    assert_eq!(back.segments.len(), 2);
}
