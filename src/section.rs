//! Section model: the unit of seating inventory on a venue map.
//!
//! A [`Section`] is derived from a `<g data-section-id=...>` group of the
//! venue markup. [`SectionAttrs`] gives typed, defaulted access to the data
//! attributes of such a group, the same way every field falls back when the
//! vendor markup is incomplete.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ATTR_AVAILABLE, ATTR_CURRENT_PRICE, ATTR_NAME, ATTR_PRICE_MAX, ATTR_PRICE_MIN, ATTR_ROWS, ATTR_SEATS_PER_ROW,
    ATTR_SECTION_ID, ATTR_TOTAL_SEATS, DEFAULT_AVAILABLE, DEFAULT_PRICE, DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW,
    SECTION_TAG,
};

/// A priced seating zone backed by a graphical group in the venue markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Identifier from `data-section-id`. Trusted, not deduplicated.
    pub id: String,
    /// Display name; derived from `id` when the markup has none.
    pub name: String,
    /// Number of rows.
    pub rows: u32,
    /// Seats in each row.
    pub seats_per_row: u32,
    /// Explicit seat count overriding `rows * seats_per_row`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_seats: Option<u32>,
    /// Lowest listed price.
    pub price_min: f64,
    /// Highest listed price.
    pub price_max: f64,
    /// Price currently shown to buyers. Not checked against the min/max.
    pub current_price: f64,
    /// Unavailable sections cannot be selected or bought.
    pub available: bool,
}

impl Section {
    /// A section with every field at its documented default.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name_from_id(id),
            rows: DEFAULT_ROWS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
            total_seats: None,
            price_min: DEFAULT_PRICE,
            price_max: DEFAULT_PRICE,
            current_price: DEFAULT_PRICE,
            available: DEFAULT_AVAILABLE,
        }
    }

    /// `rows * seats_per_row`, the shape-derived approximation of capacity.
    #[must_use]
    pub fn grid_seats(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.seats_per_row)
    }

    /// Seat count: the explicit override when present, else the grid size.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.total_seats.map_or_else(|| self.grid_seats(), u64::from)
    }
}

/// Derive a display name from a section id: separators become spaces.
#[must_use]
pub fn name_from_id(id: &str) -> String {
    id.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `node` is a section group (`<g>` with a non-blank section id).
#[must_use]
pub fn is_section_group(node: roxmltree::Node<'_, '_>) -> bool {
    node.is_element()
        && node.tag_name().name() == SECTION_TAG
        && node
            .attribute(ATTR_SECTION_ID)
            .is_some_and(|id| !id.trim().is_empty())
}

/// Typed access to the section data attributes of a markup element.
pub struct SectionAttrs<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> SectionAttrs<'a, 'input> {
    /// Wrap an element for typed attribute access.
    #[must_use]
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Trimmed section id, `None` when absent or blank.
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.node
            .attribute(ATTR_SECTION_ID)
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Explicit name, `None` when absent or blank.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.node
            .attribute(ATTR_NAME)
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Row count. Defaults to `1`.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.count(ATTR_ROWS).unwrap_or(DEFAULT_ROWS)
    }

    /// Seats per row. Defaults to `1`.
    #[must_use]
    pub fn seats_per_row(&self) -> u32 {
        self.count(ATTR_SEATS_PER_ROW).unwrap_or(DEFAULT_SEATS_PER_ROW)
    }

    /// Seat-count override, `None` when absent or invalid.
    #[must_use]
    pub fn total_seats(&self) -> Option<u32> {
        self.count(ATTR_TOTAL_SEATS)
    }

    #[must_use]
    pub fn price_min(&self) -> f64 {
        self.price(ATTR_PRICE_MIN)
    }

    #[must_use]
    pub fn price_max(&self) -> f64 {
        self.price(ATTR_PRICE_MAX)
    }

    #[must_use]
    pub fn current_price(&self) -> f64 {
        self.price(ATTR_CURRENT_PRICE)
    }

    /// Availability flag. Defaults to `true`.
    #[must_use]
    pub fn available(&self) -> bool {
        self.node
            .attribute(ATTR_AVAILABLE)
            .map_or(DEFAULT_AVAILABLE, parse_flag)
    }

    /// Build the full section record, filling defaults for anything missing.
    #[must_use]
    pub fn to_section(&self) -> Option<Section> {
        let id = self.id()?;
        Some(Section {
            id: id.to_owned(),
            name: self.name().map_or_else(|| name_from_id(id), ToOwned::to_owned),
            rows: self.rows(),
            seats_per_row: self.seats_per_row(),
            total_seats: self.total_seats(),
            price_min: self.price_min(),
            price_max: self.price_max(),
            current_price: self.current_price(),
            available: self.available(),
        })
    }

    fn count(&self, attr: &str) -> Option<u32> {
        self.node.attribute(attr).and_then(parse_count)
    }

    fn price(&self, attr: &str) -> f64 {
        self.node
            .attribute(attr)
            .and_then(parse_price)
            .unwrap_or(DEFAULT_PRICE)
    }
}

/// Parse a non-negative integer attribute value.
pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    let Ok(value) = raw.trim().parse::<u32>() else {
        return None;
    };
    Some(value)
}

/// Parse a finite decimal attribute value.
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// `false`, `0`, `no` and `off` (any case) mean unavailable; anything else is available.
pub(crate) fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}
