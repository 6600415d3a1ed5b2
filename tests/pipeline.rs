//! End-to-end runs over a realistic vendor map.

#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use seatmap::category::CategoryId;
use seatmap::config::MapConfig;
use seatmap::engine::{Action, MapEngine};
use seatmap::geometry::{FixedGeometry, Point, Rect, Viewport};
use seatmap::input::Button;
use seatmap::picks::{SequentialIds, pick_seats};
use seatmap::sanitize::sanitize;
use seatmap::tier::classify_sections;
use seatmap::{Tier, classify_into_categories, parse, serialize, serialize_with_report};

const ARENA: &str = include_str!("fixtures/arena.svg");

fn arena_geometry() -> FixedGeometry {
    FixedGeometry::new()
        .with("SECTION-101", Rect::new(400.0, 140.0, 400.0, 120.0))
        .with("SECTION-102", Rect::new(180.0, 300.0, 200.0, 200.0))
        .with("SECTION-103", Rect::new(820.0, 300.0, 200.0, 200.0))
        .with("upper-bowl-201", Rect::new(100.0, 600.0, 1000.0, 180.0))
        .with("A12", Rect::new(560.0, 560.0, 80.0, 0.0))
}

#[test]
fn parse_reads_inventory() {
    let sections = parse(ARENA);
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["SECTION-101", "SECTION-102", "SECTION-103", "upper-bowl-201", "A12"]);

    assert_eq!(sections[0].name, "Floor 101");
    assert_eq!(sections[1].capacity(), 200);
    assert!(!sections[2].available);
    assert_eq!(sections[3].name, "upper bowl 201");
    assert_eq!(sections[3].rows, 1);
    assert_eq!(sections[4].current_price, 0.0);
}

#[test]
fn unchanged_inventory_rewrites_nothing() {
    assert_eq!(serialize(ARENA, &parse(ARENA)), ARENA);
}

#[test]
fn edits_survive_a_round_trip() {
    let mut sections = parse(ARENA);
    sections[2].available = true;
    sections[2].current_price = 155.0;
    sections[1].total_seats = None;

    let report = serialize_with_report(ARENA, &sections);
    assert_eq!(report.applied.len(), 5);
    assert!(report.skipped.is_empty());
    assert_eq!(parse(&report.markup), sections);

    // Only the edited attributes moved.
    let changed: Vec<(&str, &str)> = ARENA
        .lines()
        .zip(report.markup.lines())
        .filter(|(before, after)| before != after)
        .collect();
    assert_eq!(changed.len(), 2);
}

#[test]
fn categories_and_tiers() {
    let sections = parse(ARENA);

    let categories = classify_into_categories(&sections);
    let shape: Vec<(CategoryId, Vec<&str>, u64)> = categories
        .iter()
        .map(|c| (c.id, c.sections.iter().map(|s| s.id.as_str()).collect(), c.estimated_available_seats))
        .collect();
    assert_eq!(
        shape,
        vec![
            (CategoryId::Cat1, vec!["SECTION-101"], 210),
            (CategoryId::Cat2, vec!["SECTION-102", "upper-bowl-201"], 172),
            (CategoryId::Cat3, vec!["A12"], 22),
        ]
    );
    assert_eq!((categories[1].min_price, categories[1].max_price), (45.5, 140.0));

    let tiers: Vec<Tier> = classify_sections(&sections).into_iter().map(|(_, t)| t).collect();
    assert_eq!(tiers, vec![Tier::Premium, Tier::Standard, Tier::Standard, Tier::Value, Tier::Value]);
}

#[test]
fn sanitize_strips_vendor_chrome() {
    let display = sanitize(ARENA).unwrap();
    assert!(!display.contains("<text"));
    assert!(!display.contains("info-panel"));
    assert!(!display.contains("price-legend"));
    assert!(display.contains(r#"<g id="stage">"#));
    assert!(display.contains("tooltip-anchor"));
    assert!(display.contains(r#"viewBox="0 0 1200 900""#));
    assert!(display.contains(r#"data-section-id="SECTION-103" data-rows="18" data-seats-per-row="12" data-price-min="90" data-price-max="180" data-current-price="140" data-available="false""#));
    assert_eq!(parse(&display).len(), 5);
}

#[test]
fn interactive_session() {
    let mut engine = MapEngine::load(ARENA, arena_geometry(), MapConfig::default());
    let viewport = Viewport::new(0.0, 0.0, 1200.0, 900.0);

    let mounted = engine.mount(viewport);
    assert_eq!(&mounted[..2], &[Action::ObserveResize, Action::RequestFrame]);

    let Some(Action::LabelsUpdated(labels)) = engine.on_frame().into_iter().next() else {
        panic!("first frame must publish labels");
    };
    let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
    // A12 has a flat box and is left unlabeled.
    assert_eq!(texts, vec!["101", "102", "103", "UB201"]);

    let hovered = engine.on_pointer_move(Point::new(900.0, 400.0));
    assert_eq!(hovered, vec![Action::Hover { section_id: Some("SECTION-103".into()), at: Point::new(900.0, 400.0) }]);
    assert!(engine.on_click(Point::new(900.0, 400.0), Button::Primary).is_empty());

    let clicked = engine.on_click(Point::new(600.0, 200.0), Button::Primary);
    assert_eq!(clicked, vec![Action::Selected("SECTION-101".into())]);

    let reflected = engine.set_selected(Some("SECTION-101"));
    assert_eq!(reflected.len(), 5);
    assert!(reflected.contains(&Action::SetClass { section_id: "SECTION-101".into(), class: "selected", on: true }));

    let section = engine.section("SECTION-101").unwrap();
    let picks = pick_seats(section, 4, &mut StdRng::seed_from_u64(42), &mut SequentialIds::starting_at(1));
    assert_eq!(picks.len(), 4);
    assert!(picks.iter().all(|p| p.price == 280.0 && p.row <= 20 && p.seat <= 15));

    assert_eq!(engine.on_resize(viewport), vec![Action::RequestFrame]);
    assert_eq!(engine.unmount(), vec![Action::CancelFrame, Action::DisconnectObservers]);
}
