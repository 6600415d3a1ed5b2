//! Input model: pointer buttons, the hover state machine, and mount lifecycle.
//!
//! Hover and selection are orthogonal. Hover is driven by pointer events
//! and tracked here; selection is owned by the caller and only reflected by
//! the engine, so it has no state machine of its own.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Pointer hover state for one map instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    /// The pointer is not over any section group.
    #[default]
    Idle,
    /// The pointer is over a section group.
    Hovering {
        /// Section under the pointer.
        section_id: String,
        /// Last pointer position in container coordinates.
        at: Point,
    },
}

impl HoverState {
    /// The hovered section id, if any.
    #[must_use]
    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Hovering { section_id, .. } => Some(section_id),
        }
    }
}

/// Where a map instance is in its mount lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Loaded but not yet attached to a rendering surface.
    #[default]
    Detached,
    /// Attached; observers are live and events are handled.
    Mounted,
    /// Torn down. Every handler is a no-op from here on.
    Unmounted,
}
