use super::*;
use crate::contract::model::{Emphasis, Line, LineEmphasis};

#[test]
fn lines_inherit_unset_fields_from_the_segment() {
    let mut overridden = Line::new("second", 1.0, 2.0);
    overridden.placement = Some(Placement::Top);
    overridden.size = Some(Size::Big);
    overridden.emphasis = Some(LineEmphasis { level: Size::Big });

    let mut seg = Segment::new("first second", 0.0, 2.0)
        .with_lines(vec![Line::new("first", 0.0, 1.0), overridden]);
    seg.placement = Placement::Center;
    seg.animation = Animation::ScaleIn;
    seg.size = Some(Size::L);

    let lines = seg.resolved_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].placement, Placement::Center);
    assert_eq!(lines[0].animation, Animation::ScaleIn);
    assert_eq!(lines[0].size, Some(Size::L));
    assert!(!lines[0].emphasized);
    assert!(lines[0].words.is_empty());

    assert_eq!(lines[1].placement, Placement::Top);
    assert_eq!(lines[1].animation, Animation::ScaleIn);
    assert_eq!(lines[1].size, Some(Size::Big));
    assert!(lines[1].emphasized);
}

#[test]
fn segment_without_lines_resolves_to_one_full_span_line() {
    let mut seg = Segment::new("lonely", 4.0, 6.5);
    seg.emphasis = Some(Emphasis {
        phrases: vec!["lonely".to_string()],
        level: Size::Xl,
    });
    let lines = seg.resolved_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "lonely");
    assert_eq!((lines[0].start, lines[0].end), (4.0, 6.5));
    assert_eq!(lines[0].placement, Placement::Bottom);
    assert!(lines[0].emphasized);
}

#[test]
fn resolved_lines_serialize_with_tokens() {
    let seg = Segment::new("x", 0.0, 1.0);
    let json = serde_json::to_value(seg.resolved_lines()).unwrap();
    assert_eq!(json[0]["placement"], "BOTTOM");
    assert_eq!(json[0]["animation"], "FADE_IN");
    assert!(json[0].get("size").is_none());
}
