//! Display sanitizing of vendor venue maps.
//!
//! Vendor diagrams ship with baked-in text, tooltips and info panels that
//! clash with the live labels and hover UI. [`sanitize`] strips them,
//! injects the presentation stylesheet and makes the map scale to its
//! container. Everything else is passed through byte-for-byte.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use crate::consts::{ATTR_AVAILABLE, FALLBACK_VIEW_BOX, MAP_STYLESHEET, OVERLAY_TOKENS};
use crate::parse::parse_document;
use crate::section::{is_section_group, parse_flag};
use crate::splice::{Splice, is_self_closing, start_tag_end, tag_qname};

/// Produce display markup, `None` when the input is not a parseable SVG
/// document (the caller shows its "map unavailable" state).
///
/// - every `<text>` element is removed;
/// - elements whose `id` or `class` names an overlay are removed unless
///   they sit inside a section group or wrap one;
/// - `data-available` on section groups is normalized to `true`/`false`
///   so the stylesheet can match it;
/// - a `viewBox` is ensured and the root is sized to its container;
/// - the presentation stylesheet is injected as the first child.
#[must_use]
pub fn sanitize(markup: &str) -> Option<String> {
    let doc = match parse_document(markup) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "venue markup is not parseable; nothing to display");
            return None;
        }
    };
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        tracing::warn!(root = root.tag_name().name(), "venue markup root is not <svg>");
        return None;
    }

    let mut splice = Splice::new(markup);
    let mut removed = 0usize;

    for node in root.descendants().skip(1).filter(roxmltree::Node::is_element) {
        if is_section_group(node) {
            normalize_availability(&mut splice, node);
            continue;
        }
        let is_text = node.tag_name().name() == "text";
        if is_text || (is_overlay(node) && !inside_section_group(node) && !holds_section_group(node)) {
            splice.remove_node(node);
            removed += 1;
        }
    }

    ensure_sizing(&mut splice, root);
    inject_stylesheet(&mut splice, markup, root);

    tracing::debug!(removed, "sanitized venue markup");
    Some(splice.finish())
}

/// Whether the element's `id` or `class` mentions an overlay token.
fn is_overlay(node: roxmltree::Node<'_, '_>) -> bool {
    ["id", "class"]
        .iter()
        .filter_map(|attr| node.attribute(*attr))
        .map(str::to_ascii_lowercase)
        .any(|value| OVERLAY_TOKENS.iter().any(|token| value.contains(token)))
}

fn inside_section_group(node: roxmltree::Node<'_, '_>) -> bool {
    node.ancestors().skip(1).any(is_section_group)
}

/// Overlay-named wrappers around seating are kept; their sections are the map.
fn holds_section_group(node: roxmltree::Node<'_, '_>) -> bool {
    node.descendants().skip(1).any(is_section_group)
}

fn normalize_availability(splice: &mut Splice<'_>, node: roxmltree::Node<'_, '_>) {
    let Some(raw) = node.attribute(ATTR_AVAILABLE) else {
        return;
    };
    let canonical = if parse_flag(raw) { "true" } else { "false" };
    if raw != canonical {
        splice.set_attribute(node, ATTR_AVAILABLE, canonical);
    }
}

/// Ensure a `viewBox` and make the root scale to its container.
fn ensure_sizing(splice: &mut Splice<'_>, root: roxmltree::Node<'_, '_>) {
    if root.attribute("viewBox").is_none() {
        let derived = root
            .attribute("width")
            .and_then(parse_length)
            .zip(root.attribute("height").and_then(parse_length))
            .map(|(w, h)| format!("0 0 {w} {h}"));
        let view_box = derived.unwrap_or_else(|| FALLBACK_VIEW_BOX.to_owned());
        splice.set_attribute(root, "viewBox", &view_box);
    }
    splice.set_attribute(root, "width", "100%");
    splice.set_attribute(root, "height", "100%");
    if root.attribute("preserveAspectRatio").is_none() {
        splice.set_attribute(root, "preserveAspectRatio", "xMidYMid meet");
    }
}

fn inject_stylesheet(splice: &mut Splice<'_>, markup: &str, root: roxmltree::Node<'_, '_>) {
    let style = format!("<style>{MAP_STYLESHEET}</style>");
    let end = start_tag_end(markup, root);
    if is_self_closing(markup, root) {
        splice.replace(end - 2..end, format!(">{style}</{}>", tag_qname(markup, root)));
    } else {
        splice.insert(end, style);
    }
}

/// Positive pixel length from a `width`/`height` value (`800`, `800px`).
/// Relative units yield `None`.
fn parse_length(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}
