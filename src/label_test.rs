#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::FixedGeometry;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// short_label
// =============================================================

#[test]
fn short_label_strips_known_prefixes() {
    assert_eq!(short_label("SECTION-101"), "101");
    assert_eq!(short_label("section_101"), "101");
    assert_eq!(short_label("sec-7"), "7");
}

#[test]
fn short_label_keeps_letter_number_pairs() {
    assert_eq!(short_label("a_12"), "A 12");
    assert_eq!(short_label("A12"), "A12");
    assert_eq!(short_label("b 3"), "B 3");
}

#[test]
fn short_label_uses_initials_with_numbers_whole() {
    assert_eq!(short_label("lower-bowl-112"), "LB112");
    assert_eq!(short_label("upper_bowl_201"), "UB201");
    assert_eq!(short_label("club.box.east"), "CBE");
}

#[test]
fn short_label_strips_group_suffixes() {
    assert_eq!(short_label("club_box_group"), "CB");
    assert_eq!(short_label("SECTION-204-GROUP"), "204");
}

#[test]
fn short_label_falls_back_to_uppercased_id() {
    assert_eq!(short_label("---"), "---");
    assert_eq!(short_label("section-"), "SECTION-");
}

// =============================================================
// label_font_size
// =============================================================

#[test]
fn font_size_scales_with_short_side() {
    let config = LabelConfig::default();
    let size = label_font_size(Rect::new(0.0, 0.0, 100.0, 40.0), "101", &config);
    assert!(approx(size, 14.0), "got {size}");
}

#[test]
fn font_size_is_clamped() {
    let config = LabelConfig::default();
    assert_eq!(label_font_size(Rect::new(0.0, 0.0, 500.0, 500.0), "A", &config), 22.0);
    assert_eq!(label_font_size(Rect::new(0.0, 0.0, 10.0, 10.0), "A", &config), 8.0);
}

#[test]
fn font_size_shrinks_for_long_text() {
    let config = LabelConfig::default();
    let rect = Rect::new(0.0, 0.0, 500.0, 500.0);
    let size = label_font_size(rect, "LB112", &config);
    assert!(approx(size, 22.0 / 1.24), "got {size}");
    assert!(size < label_font_size(rect, "LB1", &config));
}

#[test]
fn font_size_never_drops_below_floor() {
    let config = LabelConfig::default();
    let size = label_font_size(Rect::new(0.0, 0.0, 30.0, 30.0), "VERY LONG LABEL TEXT", &config);
    assert_eq!(size, config.min_font_px);
}

// =============================================================
// placement
// =============================================================

#[test]
fn label_is_centered_in_box() {
    let label = place_label(&Section::new("SECTION-101"), Rect::new(10.0, 20.0, 100.0, 40.0), &LabelConfig::default())
        .unwrap();
    assert_eq!(label.section_id, "SECTION-101");
    assert_eq!(label.text, "101");
    assert_eq!((label.x, label.y), (60.0, 40.0));
}

#[test]
fn degenerate_boxes_are_skipped_others_kept() {
    let sections: Vec<Section> = ["A", "flat", "missing", "broken", "B"].iter().map(|id| Section::new(id)).collect();
    let geometry = FixedGeometry::new()
        .with("A", Rect::new(0.0, 0.0, 50.0, 50.0))
        .with("flat", Rect::new(0.0, 0.0, 0.0, 50.0))
        .with("broken", Rect::new(f64::NAN, 0.0, 50.0, 50.0))
        .with("B", Rect::new(100.0, 0.0, 50.0, 50.0));

    let labels = compute_labels(&sections, &geometry, &LabelConfig::default());
    let ids: Vec<&str> = labels.iter().map(|l| l.section_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert!(labels.iter().all(|l| l.font_size.is_finite() && l.x.is_finite() && l.y.is_finite()));
}

#[test]
fn label_serializes_camel_case() {
    let label = place_label(&Section::new("A12"), Rect::new(0.0, 0.0, 20.0, 20.0), &LabelConfig::default()).unwrap();
    let json = serde_json::to_value(&label).unwrap();
    assert_eq!(json["sectionId"], "A12");
    assert_eq!(json["fontSize"], 8.0);
}

#[test]
fn inverted_or_nan_font_range_does_not_panic() {
    let inverted = LabelConfig { min_font_px: 30.0, max_font_px: 22.0, ..LabelConfig::default() };
    let size = label_font_size(Rect::new(0.0, 0.0, 200.0, 200.0), "101", &inverted);
    assert_eq!(size, 30.0);

    let nan = LabelConfig { min_font_px: f64::NAN, max_font_px: f64::NAN, ..LabelConfig::default() };
    let size = label_font_size(Rect::new(0.0, 0.0, 100.0, 40.0), "101", &nan);
    assert!(size.is_finite());
}
