#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_center_and_short_side() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.center(), Point::new(60.0, 40.0));
    assert_eq!(r.short_side(), 40.0);
}

#[test]
fn rect_contains_is_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}

#[test]
fn rect_degenerate_detection() {
    assert!(Rect::new(0.0, 0.0, 0.0, 50.0).is_degenerate(0.5));
    assert!(Rect::new(0.0, 0.0, 50.0, 0.2).is_degenerate(0.5));
    assert!(Rect::new(f64::NAN, 0.0, 50.0, 50.0).is_degenerate(0.5));
    assert!(Rect::new(0.0, 0.0, f64::INFINITY, 50.0).is_degenerate(0.5));
    assert!(!Rect::new(0.0, 0.0, 0.5, 0.5).is_degenerate(0.5));
    assert!(!Rect::new(-5.0, -5.0, 50.0, 50.0).is_degenerate(0.5));
}

// =============================================================
// GeometryProvider / FixedGeometry
// =============================================================

#[test]
fn fixed_geometry_lookup() {
    let mut geometry = FixedGeometry::new().with("A", Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(geometry.len(), 1);
    assert_eq!(geometry.bounding_box("A"), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert_eq!(geometry.bounding_box("B"), None);

    geometry.insert("A", Rect::new(1.0, 1.0, 2.0, 2.0));
    assert_eq!(geometry.bounding_box("A"), Some(Rect::new(1.0, 1.0, 2.0, 2.0)));
    assert!(geometry.remove("A").is_some());
    assert!(geometry.is_empty());
}

#[test]
fn default_contains_uses_bounding_box() {
    let geometry = FixedGeometry::new().with("A", Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(geometry.contains("A", Point::new(3.0, 3.0)));
    assert!(!geometry.contains("A", Point::new(30.0, 3.0)));
    assert!(!geometry.contains("missing", Point::new(3.0, 3.0)));
}

#[test]
fn default_contains_skips_non_finite_boxes() {
    let geometry = FixedGeometry::new().with("A", Rect::new(0.0, 0.0, f64::NAN, 10.0));
    assert!(!geometry.contains("A", Point::new(0.0, 0.0)));
}

#[test]
fn fixed_geometry_deserializes_from_map() {
    let json = r#"{"A": {"x": 1, "y": 2, "width": 3, "height": 4}}"#;
    let geometry: FixedGeometry = serde_json::from_str(json).unwrap();
    assert_eq!(geometry.bounding_box("A"), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn viewport_converts_between_spaces() {
    let viewport = Viewport::new(100.0, 50.0, 800.0, 600.0);
    let local = viewport.client_to_local(Point::new(130.0, 75.0));
    assert_eq!(local, Point::new(30.0, 25.0));
    assert_eq!(viewport.local_to_client(local), Point::new(130.0, 75.0));
}
