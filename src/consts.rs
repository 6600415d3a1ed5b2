//! Shared constants for the seat-map crate.

// ── Markup attributes ───────────────────────────────────────────

/// Attribute that marks a `<g>` element as a seating section.
pub const ATTR_SECTION_ID: &str = "data-section-id";
/// Human-readable section name.
pub const ATTR_NAME: &str = "data-name";
/// Number of rows in the section.
pub const ATTR_ROWS: &str = "data-rows";
/// Seats in each row.
pub const ATTR_SEATS_PER_ROW: &str = "data-seats-per-row";
/// Explicit seat count overriding `rows * seats_per_row`.
pub const ATTR_TOTAL_SEATS: &str = "data-total-seats";
/// Lowest listed price.
pub const ATTR_PRICE_MIN: &str = "data-price-min";
/// Highest listed price.
pub const ATTR_PRICE_MAX: &str = "data-price-max";
/// Price currently shown to buyers.
pub const ATTR_CURRENT_PRICE: &str = "data-current-price";
/// Availability flag (`true` / `false`).
pub const ATTR_AVAILABLE: &str = "data-available";

/// Element name of section groups.
pub const SECTION_TAG: &str = "g";

// ── Section defaults ────────────────────────────────────────────

pub const DEFAULT_ROWS: u32 = 1;
pub const DEFAULT_SEATS_PER_ROW: u32 = 1;
pub const DEFAULT_PRICE: f64 = 0.0;
pub const DEFAULT_AVAILABLE: bool = true;

// ── Sanitizing ──────────────────────────────────────────────────

/// `id` / `class` fragments that mark baked-in overlays to strip before display.
pub const OVERLAY_TOKENS: &[&str] = &["overlay", "tooltip", "info", "popup", "panel", "legend"];

/// Fallback `viewBox` for maps with neither a `viewBox` nor numeric `width`/`height`.
pub const FALLBACK_VIEW_BOX: &str = "0 0 1000 800";

/// Class toggled on the group of the caller-selected section.
pub const SELECTED_CLASS: &str = "selected";

/// Presentation rules injected into every sanitized map.
pub const MAP_STYLESHEET: &str = "\
g[data-section-id]{cursor:pointer;transition:filter .15s ease,opacity .15s ease}\
g[data-section-id]:hover{filter:brightness(1.15)}\
g[data-section-id].selected>*{stroke:#1d4ed8;stroke-width:3}\
g[data-section-id][data-available=\"false\"]{opacity:.35;cursor:not-allowed}\
g[data-section-id][data-available=\"false\"]:hover{filter:none}";

// ── Labels ──────────────────────────────────────────────────────

/// Smallest label font size in CSS pixels.
pub const LABEL_MIN_FONT_PX: f64 = 8.0;
/// Largest label font size in CSS pixels.
pub const LABEL_MAX_FONT_PX: f64 = 22.0;
/// Font size as a fraction of the shorter bounding-box side.
pub const LABEL_SIZE_RATIO: f64 = 0.35;
/// Per-character shrink applied past [`LABEL_FREE_CHARS`].
pub const LABEL_LENGTH_SHRINK: f64 = 0.12;
/// Label length that fits without shrinking.
pub const LABEL_FREE_CHARS: usize = 3;
/// Boxes thinner than this (in pixels) get no label.
pub const DEGENERATE_EXTENT_PX: f64 = 0.5;

/// Prefixes stripped from section ids before deriving a short label.
pub const LABEL_PREFIXES: &[&str] = &["SECTION-", "SECTION_", "SECTION ", "SECT-", "SEC-", "SEC_"];
/// Suffixes stripped from section ids before deriving a short label.
pub const LABEL_SUFFIXES: &[&str] = &["_GROUP", "-GROUP", " GROUP", "_SECTION", "-SECTION"];

// ── Categories ──────────────────────────────────────────────────

/// Share of available sections (by count, rounded up) in the top category.
pub const TOP_CATEGORY_PERCENT: u32 = 25;
/// Share of available sections (by count, rounded up) in the middle category.
pub const MIDDLE_CATEGORY_PERCENT: u32 = 35;
/// Share of `rows * seats_per_row` assumed still on sale.
pub const SEAT_ESTIMATE_PERCENT: u32 = 70;
