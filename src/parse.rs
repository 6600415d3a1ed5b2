//! Venue markup parser and section re-serializer.
//!
//! [`parse`] scans a venue map for section groups and reads their data
//! attributes into [`Section`] records. [`serialize`] goes the other way:
//! it writes edited section values back into the same attributes, touching
//! nothing else in the document.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use std::collections::HashMap;

use serde::Serialize;

use crate::consts::{
    ATTR_AVAILABLE, ATTR_CURRENT_PRICE, ATTR_PRICE_MAX, ATTR_PRICE_MIN, ATTR_ROWS, ATTR_SEATS_PER_ROW,
    ATTR_TOTAL_SEATS,
};
use crate::section::{Section, SectionAttrs, is_section_group};
use crate::splice::Splice;

/// Parse venue markup into a document tree.
///
/// Vendor maps routinely carry a `DOCTYPE`, so DTDs are allowed.
pub(crate) fn parse_document(markup: &str) -> Result<roxmltree::Document<'_>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions { allow_dtd: true, ..roxmltree::ParsingOptions::default() };
    roxmltree::Document::parse_with_options(markup, options)
}

/// Read every section group in document order.
///
/// Unparseable markup yields an empty list: a venue without a usable map is
/// an expected condition, not a fault. Missing or invalid attributes fall
/// back to their defaults per field. Duplicate ids are returned as-is.
#[must_use]
pub fn parse(markup: &str) -> Vec<Section> {
    let doc = match parse_document(markup) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "venue markup is not parseable; no sections");
            return Vec::new();
        }
    };

    let sections: Vec<Section> = doc
        .descendants()
        .filter(|n| is_section_group(*n))
        .filter_map(|n| SectionAttrs::new(n).to_section())
        .collect();

    tracing::debug!(count = sections.len(), "parsed venue sections");
    sections
}

/// Outcome of [`serialize_with_report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializeReport {
    /// The rewritten markup (the input unchanged when it could not be parsed).
    pub markup: String,
    /// Ids of edits that matched at least one group, in edit order.
    pub applied: Vec<String>,
    /// Ids of edits with no matching group, in edit order.
    pub skipped: Vec<String>,
}

/// Write edited section values back into the markup.
///
/// Only the rows, seats, total-seat, price and availability attributes of
/// matching groups are rewritten. Edits whose id matches no group are
/// dropped; use [`serialize_with_report`] to learn which.
#[must_use]
pub fn serialize(markup: &str, edits: &[Section]) -> String {
    serialize_with_report(markup, edits).markup
}

/// [`serialize`], also reporting which edits were applied and which were dropped.
///
/// When several edits share an id the last one wins. Every group carrying
/// that id receives it.
#[must_use]
pub fn serialize_with_report(markup: &str, edits: &[Section]) -> SerializeReport {
    let doc = match parse_document(markup) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "venue markup is not parseable; edits dropped");
            return SerializeReport {
                markup: markup.to_owned(),
                applied: Vec::new(),
                skipped: unique_ids(edits),
            };
        }
    };

    let by_id: HashMap<&str, &Section> = edits.iter().map(|s| (s.id.as_str(), s)).collect();
    let mut matched: HashMap<&str, bool> = by_id.keys().map(|id| (*id, false)).collect();
    let mut splice = Splice::new(markup);

    for node in doc.descendants().filter(|n| is_section_group(*n)) {
        let Some(id) = SectionAttrs::new(node).id() else {
            continue;
        };
        let Some(edit) = by_id.get(id) else {
            continue;
        };
        matched.insert(edit.id.as_str(), true);
        write_section(&mut splice, node, edit);
    }

    let (applied, skipped): (Vec<String>, Vec<String>) =
        unique_ids(edits).into_iter().partition(|id| matched.get(id.as_str()).copied().unwrap_or(false));
    for id in &skipped {
        tracing::debug!(section_id = %id, "no section group for edit; skipped");
    }

    SerializeReport { markup: splice.finish(), applied, skipped }
}

/// Record attribute rewrites for one group. An attribute is only touched when
/// the value the parser would read from it differs from the edited value.
fn write_section(splice: &mut Splice<'_>, node: roxmltree::Node<'_, '_>, edit: &Section) {
    let current = SectionAttrs::new(node);

    if current.rows() != edit.rows {
        splice.set_attribute(node, ATTR_ROWS, &edit.rows.to_string());
    }
    if current.seats_per_row() != edit.seats_per_row {
        splice.set_attribute(node, ATTR_SEATS_PER_ROW, &edit.seats_per_row.to_string());
    }

    match (current.total_seats(), edit.total_seats) {
        (old, Some(total)) if old != Some(total) => {
            splice.set_attribute(node, ATTR_TOTAL_SEATS, &total.to_string());
        }
        (Some(_), None) => splice.remove_attribute(node, ATTR_TOTAL_SEATS),
        _ => {}
    }

    let prices = [
        (ATTR_PRICE_MIN, current.price_min(), edit.price_min),
        (ATTR_PRICE_MAX, current.price_max(), edit.price_max),
        (ATTR_CURRENT_PRICE, current.current_price(), edit.current_price),
    ];
    for (attr, old, new) in prices {
        #[allow(clippy::float_cmp)]
        let unchanged = old == new;
        if !unchanged {
            splice.set_attribute(node, attr, &format_price(new));
        }
    }

    if current.available() != edit.available {
        splice.set_attribute(node, ATTR_AVAILABLE, if edit.available { "true" } else { "false" });
    }
}

/// Shortest decimal that reads back as the same value. Non-finite prices
/// are written as the default so the document never carries `NaN`.
fn format_price(value: f64) -> String {
    if value.is_finite() { value.to_string() } else { "0".to_owned() }
}

fn unique_ids(edits: &[Section]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(edits.len());
    for edit in edits {
        if !ids.contains(&edit.id) {
            ids.push(edit.id.clone());
        }
    }
    ids
}
