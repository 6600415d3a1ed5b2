//! Interactive venue seat-map core for the ticket marketplace.
//!
//! Venue maps arrive as vendor SVG documents whose `<g>` groups double as the
//! seating inventory: each section group carries its rows, seats, prices and
//! availability as `data-*` attributes. This crate parses that inventory,
//! writes edits back into the same markup, classifies sections into price
//! tiers and purchase categories, and drives the interactive map (sanitized
//! display markup, label placement, hover and selection). The host layer is
//! responsible only for mounting markup, measuring geometry, and carrying
//! out the [`engine::Action`]s the engine returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Per-map [`engine::MapEngine`]: lifecycle, frames, pointer input |
//! | [`parse`] | Markup → sections, and sections → markup |
//! | [`section`] | The [`section::Section`] record and attribute readers |
//! | [`tier`] | Premium / standard / value price tiers |
//! | [`category`] | Three-bucket purchase categories |
//! | [`sanitize`] | Display cleanup of vendor markup |
//! | [`label`] | Short labels and their placement |
//! | [`geometry`] | Points, boxes, viewport, and the geometry capability |
//! | [`hit`] | Finding the section under the pointer |
//! | [`input`] | Buttons, hover state, mount lifecycle |
//! | [`picks`] | Seat picks for a selected section |
//! | [`config`] | Environment-driven tuning |
//! | [`consts`] | Attribute names, defaults, and presentation constants |

pub mod category;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod label;
pub mod parse;
pub mod picks;
pub mod sanitize;
pub mod section;
mod splice;
pub mod tier;

pub use category::{Category, CategoryId, classify_into_categories};
pub use parse::{parse, serialize, serialize_with_report};
pub use section::Section;
pub use tier::{Tier, classify_price_tier};
