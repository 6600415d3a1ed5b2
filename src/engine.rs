use std::collections::HashSet;

use crate::category::{Category, classify_into_categories_with};
use crate::config::MapConfig;
use crate::consts::SELECTED_CLASS;
use crate::geometry::{GeometryProvider, Point, Viewport};
use crate::hit;
use crate::input::{Button, HoverState, Lifecycle};
use crate::label::{SectionLabel, compute_labels};
use crate::parse::parse;
use crate::sanitize::sanitize;
use crate::section::Section;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start observing container resizes.
    ObserveResize,
    /// Schedule one animation frame, then call [`MapEngine::on_frame`].
    RequestFrame,
    /// Cancel the scheduled animation frame.
    CancelFrame,
    /// Stop observing resizes and drop pointer listeners.
    DisconnectObservers,
    /// Replace the rendered labels.
    LabelsUpdated(Vec<SectionLabel>),
    /// The user picked an available section.
    Selected(String),
    /// The hovered section changed or the pointer moved over it.
    /// `at` is in container coordinates.
    Hover { section_id: Option<String>, at: Point },
    /// Toggle a presentation class on a section's group.
    SetClass { section_id: String, class: &'static str, on: bool },
}

/// Per-map engine: owns the parsed sections, display markup, label cache,
/// and hover state of one mounted venue map.
///
/// Geometry is measured through the host's [`GeometryProvider`], so the
/// engine runs unchanged in tests and in the browser.
pub struct MapEngine<G: GeometryProvider> {
    sections: Vec<Section>,
    display_markup: Option<String>,
    geometry: G,
    config: MapConfig,
    viewport: Viewport,
    labels: Vec<SectionLabel>,
    hover: HoverState,
    selected: Option<String>,
    lifecycle: Lifecycle,
    frame_pending: bool,
}

impl<G: GeometryProvider> MapEngine<G> {
    /// Parse and sanitize `markup`. A map that cannot be parsed still yields
    /// an engine, with no sections and no display markup. An inconsistent
    /// `config` is replaced by the defaults.
    #[must_use]
    pub fn load(markup: &str, geometry: G, config: MapConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!(error = %e, "map config rejected; using defaults");
                MapConfig::default()
            }
        };
        Self {
            sections: parse(markup),
            display_markup: sanitize(markup),
            geometry,
            config,
            viewport: Viewport::default(),
            labels: Vec::new(),
            hover: HoverState::Idle,
            selected: None,
            lifecycle: Lifecycle::Detached,
            frame_pending: false,
        }
    }

    // --- Lifecycle ---

    /// Attach to the rendering surface: start observing resizes, compute the
    /// first labels, and reflect any selection set before mounting.
    pub fn mount(&mut self, viewport: Viewport) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Detached {
            return Vec::new();
        }
        self.lifecycle = Lifecycle::Mounted;
        self.viewport = viewport;
        tracing::debug!(sections = self.sections.len(), "venue map mounted");

        let mut actions = vec![Action::ObserveResize];
        actions.extend(self.request_frame());
        actions.extend(self.reflect_selection());
        actions
    }

    /// Tear down: cancel the pending frame and disconnect observers. Every
    /// handler is a no-op afterwards.
    pub fn unmount(&mut self) -> Vec<Action> {
        let was_mounted = self.lifecycle == Lifecycle::Mounted;
        self.lifecycle = Lifecycle::Unmounted;
        if !was_mounted {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.frame_pending {
            self.frame_pending = false;
            actions.push(Action::CancelFrame);
        }
        actions.push(Action::DisconnectObservers);
        self.hover = HoverState::Idle;
        self.labels.clear();
        tracing::debug!("venue map unmounted");
        actions
    }

    /// The container was resized or moved.
    pub fn on_resize(&mut self, viewport: Viewport) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Mounted {
            return Vec::new();
        }
        self.viewport = viewport;
        self.request_frame()
    }

    /// Replace the venue markup (an edit was saved). Sections and display
    /// markup are re-derived and labels recomputed on the next frame.
    pub fn reload(&mut self, markup: &str) -> Vec<Action> {
        self.sections = parse(markup);
        self.display_markup = sanitize(markup);
        if let Some(id) = self.hover.section_id() {
            if !self.sections.iter().any(|s| s.id == id) {
                self.hover = HoverState::Idle;
            }
        }
        if self.lifecycle != Lifecycle::Mounted {
            return Vec::new();
        }
        let mut actions = self.request_frame();
        actions.extend(self.reflect_selection());
        actions
    }

    /// The scheduled animation frame fired: recompute labels.
    pub fn on_frame(&mut self) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Mounted || !self.frame_pending {
            return Vec::new();
        }
        self.frame_pending = false;
        self.labels = compute_labels(&self.sections, &self.geometry, &self.config.labels);
        tracing::debug!(labels = self.labels.len(), "section labels recomputed");
        vec![Action::LabelsUpdated(self.labels.clone())]
    }

    /// At most one frame is pending; later requests ride on it.
    fn request_frame(&mut self) -> Vec<Action> {
        if self.frame_pending {
            return Vec::new();
        }
        self.frame_pending = true;
        vec![Action::RequestFrame]
    }

    // --- Pointer input ---

    /// Pointer moved to `client`. Reports the hovered section on every move
    /// over a group and clears hover once when leaving all groups.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Mounted {
            return Vec::new();
        }
        let local = self.viewport.client_to_local(client);
        match hit::section_at(local, &self.sections, &self.geometry) {
            Some(section) => {
                let section_id = section.id.clone();
                self.hover = HoverState::Hovering { section_id: section_id.clone(), at: local };
                vec![Action::Hover { section_id: Some(section_id), at: local }]
            }
            None => self.clear_hover(local),
        }
    }

    /// Pointer left the map container.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Mounted {
            return Vec::new();
        }
        let at = match &self.hover {
            HoverState::Hovering { at, .. } => *at,
            HoverState::Idle => return Vec::new(),
        };
        self.clear_hover(at)
    }

    fn clear_hover(&mut self, at: Point) -> Vec<Action> {
        if self.hover == HoverState::Idle {
            return Vec::new();
        }
        self.hover = HoverState::Idle;
        vec![Action::Hover { section_id: None, at }]
    }

    /// Click at `client`. Selects the section under the pointer when it is
    /// available; clicks on unavailable sections or empty space do nothing.
    pub fn on_click(&mut self, client: Point, button: Button) -> Vec<Action> {
        if self.lifecycle != Lifecycle::Mounted || button != Button::Primary {
            return Vec::new();
        }
        let local = self.viewport.client_to_local(client);
        match hit::section_at(local, &self.sections, &self.geometry) {
            Some(section) if section.available => {
                tracing::debug!(section_id = %section.id, "section selected");
                vec![Action::Selected(section.id.clone())]
            }
            Some(section) => {
                tracing::debug!(section_id = %section.id, "click on unavailable section ignored");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    // --- Caller-owned selection ---

    /// Reflect the caller's selection: the `selected` class goes on that
    /// section's group and comes off every other. Re-applying the same
    /// selection yields the same actions.
    pub fn set_selected(&mut self, section_id: Option<&str>) -> Vec<Action> {
        self.selected = section_id.map(ToOwned::to_owned);
        if self.lifecycle != Lifecycle::Mounted {
            return Vec::new();
        }
        self.reflect_selection()
    }

    fn reflect_selection(&self) -> Vec<Action> {
        let mut seen = HashSet::new();
        self.sections
            .iter()
            .filter(|s| seen.insert(s.id.as_str()))
            .map(|s| Action::SetClass {
                section_id: s.id.clone(),
                class: SELECTED_CLASS,
                on: self.selected.as_deref() == Some(s.id.as_str()),
            })
            .collect()
    }

    // --- Queries ---

    /// Parsed sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with `id` in document order.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sanitized markup to mount, `None` when the map is unavailable.
    #[must_use]
    pub fn display_markup(&self) -> Option<&str> {
        self.display_markup.as_deref()
    }

    /// Labels from the most recent frame.
    #[must_use]
    pub fn labels(&self) -> &[SectionLabel] {
        &self.labels
    }

    /// Price-ranked categories of the current sections.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        classify_into_categories_with(&self.sections, &self.config.categories)
    }

    /// The config in effect after validation.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// The selection last reflected from the caller.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry, e.g. after the host re-measured.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }
}
