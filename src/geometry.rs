//! Points, boxes, the host geometry capability, and container coordinates.
//!
//! Measuring rendered section shapes needs a live rendering surface. The
//! engine reaches it only through [`GeometryProvider`]; a browser host
//! implements it with `getBoundingClientRect`, tests and the CLI use
//! [`FixedGeometry`].

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A point in client or container space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shorter of width and height.
    #[must_use]
    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether the box is unusable for placement: any non-finite coordinate,
    /// or a side shorter than `min_extent`.
    #[must_use]
    pub fn is_degenerate(&self, min_extent: f64) -> bool {
        let finite = self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite();
        !finite || self.width < min_extent || self.height < min_extent
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Host capability: measure rendered section groups.
///
/// Boxes are in container-local pixels, i.e. the same space as the points
/// produced by [`Viewport::client_to_local`].
pub trait GeometryProvider {
    /// Rendered bounding box of the group for `section_id`, `None` when the
    /// group is not mounted.
    fn bounding_box(&self, section_id: &str) -> Option<Rect>;

    /// Whether `point` lies on the section's shape. The default tests the
    /// bounding box; hosts with exact shape tests should override it.
    fn contains(&self, section_id: &str, point: Point) -> bool {
        self.bounding_box(section_id)
            .is_some_and(|r| !r.is_degenerate(0.0) && r.contains(point))
    }
}

/// In-memory geometry: a fixed box per section id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedGeometry {
    boxes: HashMap<String, Rect>,
}

impl FixedGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FixedGeometry::insert`].
    #[must_use]
    pub fn with(mut self, section_id: &str, rect: Rect) -> Self {
        self.insert(section_id, rect);
        self
    }

    /// Set or replace the box for a section.
    pub fn insert(&mut self, section_id: &str, rect: Rect) {
        self.boxes.insert(section_id.to_owned(), rect);
    }

    /// Forget a section's box (the group is no longer rendered).
    pub fn remove(&mut self, section_id: &str) -> Option<Rect> {
        self.boxes.remove(section_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl GeometryProvider for FixedGeometry {
    fn bounding_box(&self, section_id: &str) -> Option<Rect> {
        self.boxes.get(section_id).copied()
    }
}

/// Position and size of the map container in client space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self { origin_x, origin_y, width, height }
    }

    /// Convert a client-space point to container-local coordinates.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.origin_x, client.y - self.origin_y)
    }

    /// Convert a container-local point back to client space.
    #[must_use]
    pub fn local_to_client(&self, local: Point) -> Point {
        Point::new(local.x + self.origin_x, local.y + self.origin_y)
    }
}
