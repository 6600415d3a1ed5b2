//! Section labels: short text, anchor point, and font size per section.
//!
//! Labels are derived from rendered geometry, never from the markup, so
//! they are recomputed whenever the container reflows. A section whose box
//! is missing or degenerate simply gets no label.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use serde::Serialize;

use crate::config::LabelConfig;
use crate::consts::{LABEL_FREE_CHARS, LABEL_PREFIXES, LABEL_SUFFIXES};
use crate::geometry::{GeometryProvider, Rect};
use crate::section::Section;

/// An on-screen label, in container pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLabel {
    pub section_id: String,
    pub text: String,
    /// Anchor x (text is centered on it).
    pub x: f64,
    /// Anchor y (text is vertically centered on it).
    pub y: f64,
    pub font_size: f64,
}

/// Compute labels for every section with usable geometry, in section order.
#[must_use]
pub fn compute_labels<G: GeometryProvider + ?Sized>(
    sections: &[Section],
    geometry: &G,
    config: &LabelConfig,
) -> Vec<SectionLabel> {
    sections
        .iter()
        .filter_map(|section| {
            let Some(rect) = geometry.bounding_box(&section.id) else {
                tracing::debug!(section_id = %section.id, "section not rendered; no label");
                return None;
            };
            let label = place_label(section, rect, config);
            if label.is_none() {
                tracing::debug!(section_id = %section.id, ?rect, "degenerate section box; no label");
            }
            label
        })
        .collect()
}

/// Place one label inside `rect`, `None` when the box is degenerate.
#[must_use]
pub fn place_label(section: &Section, rect: Rect, config: &LabelConfig) -> Option<SectionLabel> {
    if rect.is_degenerate(config.degenerate_extent_px) {
        return None;
    }
    let text = short_label(&section.id);
    let center = rect.center();
    Some(SectionLabel {
        section_id: section.id.clone(),
        font_size: label_font_size(rect, &text, config),
        text,
        x: center.x,
        y: center.y,
    })
}

/// Font size for `text` inside `rect`.
///
/// Starts from the shorter side times the size ratio, clamped to the
/// configured range, then shrinks for every character past the free length.
/// Never drops below the floor. An inverted range resolves to the floor
/// and NaN bounds are ignored, so this never panics.
#[must_use]
pub fn label_font_size(rect: Rect, text: &str, config: &LabelConfig) -> f64 {
    let base = (rect.short_side() * config.size_ratio)
        .min(config.max_font_px)
        .max(config.min_font_px);
    let extra = text.chars().count().saturating_sub(LABEL_FREE_CHARS);
    #[allow(clippy::cast_precision_loss)]
    let shrunk = base / (1.0 + extra as f64 * config.length_shrink);
    shrunk.max(config.min_font_px)
}

/// Derive a short, scannable label from a section id.
///
/// Known prefixes and suffixes (`SECTION-`, `_GROUP`, ...) are stripped and
/// separators collapse to spaces. Pure numbers and a single letter+number
/// pair are kept verbatim (uppercased); anything else becomes the initials
/// of its words, with numeric words kept whole.
///
/// `"SECTION-101"` → `"101"`, `"a_12"` → `"A 12"`, `"lower-bowl-112"` → `"LB112"`.
#[must_use]
pub fn short_label(id: &str) -> String {
    let upper = id.trim().to_uppercase();
    let mut core = upper.as_str();
    if let Some(rest) = LABEL_PREFIXES.iter().find_map(|p| core.strip_prefix(p)) {
        core = rest;
    }
    if let Some(rest) = LABEL_SUFFIXES.iter().find_map(|s| core.strip_suffix(s)) {
        core = rest;
    }

    let words: Vec<&str> = core
        .split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        [] => upper,
        [word] if is_numeric(word) || is_letter_number(word) => (*word).to_owned(),
        [letter, number] if is_single_letter(letter) && is_numeric(number) => format!("{letter} {number}"),
        _ => words
            .iter()
            .map(|w| {
                if is_numeric(w) {
                    (*w).to_owned()
                } else {
                    w.chars().next().map(String::from).unwrap_or_default()
                }
            })
            .collect(),
    }
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn is_single_letter(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// `A12`: one letter followed by digits.
fn is_letter_number(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_alphabetic) && is_numeric(chars.as_str())
}
