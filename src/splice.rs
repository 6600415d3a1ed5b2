//! Byte-range editing of markup source.
//!
//! Both re-serialization and sanitizing must leave every byte they do not
//! deliberately touch exactly as the vendor wrote it. Rather than rebuilding
//! the document from a tree, edits are recorded against byte ranges of the
//! original text (as reported by `roxmltree`) and applied in one pass.

#[cfg(test)]
#[path = "splice_test.rs"]
mod splice_test;

use std::ops::Range;

#[derive(Debug)]
struct Edit {
    range: Range<usize>,
    text: String,
}

/// Pending edits against a source string.
///
/// Edits are applied in source order. An edit that starts inside a range
/// already consumed by an earlier edit is dropped, so deleting an element
/// also swallows any edits recorded for its descendants.
#[derive(Debug)]
pub struct Splice<'s> {
    source: &'s str,
    edits: Vec<Edit>,
}

impl<'s> Splice<'s> {
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { source, edits: Vec::new() }
    }

    /// Replace `range` with `text`.
    pub fn replace(&mut self, range: Range<usize>, text: impl Into<String>) {
        self.edits.push(Edit { range, text: text.into() });
    }

    /// Insert `text` at byte offset `at`.
    pub fn insert(&mut self, at: usize, text: impl Into<String>) {
        self.replace(at..at, text);
    }

    /// Delete `range`.
    pub fn delete(&mut self, range: Range<usize>) {
        self.replace(range, String::new());
    }

    /// Remove an element (start tag through end tag) from the output.
    pub fn remove_node(&mut self, node: roxmltree::Node<'_, '_>) {
        self.delete(node.range());
    }

    /// Set attribute `name` on `node`: the value is rewritten in place when the
    /// attribute exists, otherwise the attribute is appended after the tag name.
    ///
    /// `value` must already be safe inside double quotes.
    pub fn set_attribute(&mut self, node: roxmltree::Node<'_, '_>, name: &str, value: &str) {
        match find_attribute(node, name) {
            Some(attr) => self.replace(attr.range_value(), value),
            None => {
                let at = tag_name_end(self.source, node);
                self.insert(at, format!(" {name}=\"{value}\""));
            }
        }
    }

    /// Remove attribute `name` from `node`, along with its leading whitespace.
    pub fn remove_attribute(&mut self, node: roxmltree::Node<'_, '_>, name: &str) {
        let Some(attr) = find_attribute(node, name) else {
            return;
        };
        let mut start = attr.range_qname().start;
        let bytes = self.source.as_bytes();
        while start > 0 && bytes[start - 1].is_ascii_whitespace() {
            start -= 1;
        }
        // Closing quote sits right after the value.
        let end = (attr.range_value().end + 1).min(self.source.len());
        self.delete(start..end);
    }

    /// Apply all edits and return the rewritten text.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.edits.sort_by_key(|e| (e.range.start, e.range.end));

        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for edit in self.edits {
            if edit.range.start < cursor || edit.range.end > self.source.len() {
                continue;
            }
            out.push_str(&self.source[cursor..edit.range.start]);
            out.push_str(&edit.text);
            cursor = edit.range.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

/// Find an un-namespaced attribute by local name.
fn find_attribute<'a, 'input>(node: roxmltree::Node<'a, 'input>, name: &str) -> Option<roxmltree::Attribute<'a, 'input>> {
    node.attributes()
        .find(|a| a.name() == name && a.namespace().is_none())
}

/// Byte offset just past the element's qualified name in its start tag.
fn tag_name_end(source: &str, node: roxmltree::Node<'_, '_>) -> usize {
    let start = node.range().start + 1;
    start + tag_qname(source, node).len()
}

/// The element's tag name as written in the source, prefix included.
#[must_use]
pub fn tag_qname<'s>(source: &'s str, node: roxmltree::Node<'_, '_>) -> &'s str {
    let rest = &source[node.range().start + 1..];
    let len = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    &rest[..len]
}

/// Byte offset just past the `>` that closes the element's start tag.
///
/// Quoted attribute values may contain `>`, so quotes are tracked.
#[must_use]
pub fn start_tag_end(source: &str, node: roxmltree::Node<'_, '_>) -> usize {
    let start = node.range().start;
    let mut quote: Option<u8> = None;
    for (offset, &b) in source.as_bytes()[start..].iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return start + offset + 1,
            (None, _) => {}
        }
    }
    source.len()
}

/// Whether the element's start tag is self-closing (`<g/>`).
#[must_use]
pub fn is_self_closing(source: &str, node: roxmltree::Node<'_, '_>) -> bool {
    let end = start_tag_end(source, node);
    end >= 2 && source.as_bytes()[end - 2] == b'/'
}
