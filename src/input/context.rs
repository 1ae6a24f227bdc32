//! Interaction context - the only mutable aggregate of the engine - and the
//! read-only snapshot published after every transition.

use super::state::InteractionState;
use crate::geometry::{distance_annotations, sorted_by_position, DistanceAnnotation, DividerLayout};
use crate::settings::InteractionSettings;
use crate::types::{Divider, DividerId, Geometry, GhostDivider, InteriorPoint, Orientation, ShelfConfig};
use serde::Serialize;

/// Divider collections plus transient interaction context.
///
/// Owned exclusively by the state machine and only mutated inside
/// `input::transition`. Both collections are kept sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionContext {
    pub(crate) horizontal_dividers: Vec<Divider>,
    pub(crate) vertical_dividers: Vec<Divider>,
    pub(crate) selected: Option<DividerId>,
    pub(crate) hovered: Option<DividerId>,
    pub(crate) ghost: Option<GhostDivider>,
    pub(crate) dragging: bool,
    pub(crate) pointer: InteriorPoint,
    pub(crate) pointer_over_panel: bool,
    pub(crate) shelf_config: ShelfConfig,
    /// Next id handed out; survives reset so ids are never reused
    pub(crate) next_divider_id: u64,
}

impl Default for InteractionContext {
    fn default() -> Self {
        Self::new(ShelfConfig::default())
    }
}

impl InteractionContext {
    pub fn new(shelf_config: ShelfConfig) -> Self {
        Self {
            horizontal_dividers: Vec::new(),
            vertical_dividers: Vec::new(),
            selected: None,
            hovered: None,
            ghost: None,
            dragging: false,
            pointer: InteriorPoint::default(),
            pointer_over_panel: false,
            shelf_config,
            next_divider_id: 0,
        }
    }

    pub fn dividers(&self, orientation: Orientation) -> &[Divider] {
        match orientation {
            Orientation::Horizontal => &self.horizontal_dividers,
            Orientation::Vertical => &self.vertical_dividers,
        }
    }

    pub(crate) fn dividers_mut(&mut self, orientation: Orientation) -> &mut Vec<Divider> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal_dividers,
            Orientation::Vertical => &mut self.vertical_dividers,
        }
    }

    pub fn horizontal_dividers(&self) -> &[Divider] {
        &self.horizontal_dividers
    }

    pub fn vertical_dividers(&self) -> &[Divider] {
        &self.vertical_dividers
    }

    pub fn layout(&self) -> DividerLayout<'_> {
        DividerLayout::new(&self.horizontal_dividers, &self.vertical_dividers)
    }

    pub fn divider_count(&self) -> usize {
        self.horizontal_dividers.len() + self.vertical_dividers.len()
    }

    pub fn find(&self, id: DividerId) -> Option<&Divider> {
        self.horizontal_dividers
            .iter()
            .chain(self.vertical_dividers.iter())
            .find(|d| d.id == id)
    }

    pub fn selected_divider(&self) -> Option<&Divider> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn hovered_divider(&self) -> Option<&Divider> {
        self.hovered.and_then(|id| self.find(id))
    }

    pub fn ghost(&self) -> Option<&GhostDivider> {
        self.ghost.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer(&self) -> InteriorPoint {
        self.pointer
    }

    pub fn shelf_config(&self) -> &ShelfConfig {
        &self.shelf_config
    }

    /// Hand out a fresh divider id, or `None` once the id space is spent.
    /// `u64::MAX` is never handed out so the counter cannot wrap.
    pub(crate) fn allocate_id(&mut self) -> Option<DividerId> {
        let id = DividerId(self.next_divider_id);
        self.next_divider_id = self.next_divider_id.checked_add(1)?;
        Some(id)
    }

    /// Insert a divider keeping its collection sorted; ids seen here are
    /// never handed out again.
    pub(crate) fn insert(&mut self, divider: Divider) {
        self.next_divider_id = self.next_divider_id.max(divider.id.0.saturating_add(1));
        let collection = self.dividers_mut(divider.orientation);
        let index = collection.partition_point(|d| d.position <= divider.position);
        collection.insert(index, divider);
    }

    pub(crate) fn remove(&mut self, id: DividerId) -> Option<Divider> {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let collection = self.dividers_mut(orientation);
            if let Some(index) = collection.iter().position(|d| d.id == id) {
                return Some(collection.remove(index));
            }
        }
        None
    }

    /// Move a divider and restore position order in its collection
    pub(crate) fn set_position(&mut self, id: DividerId, position: f64) -> Option<Divider> {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let collection = self.dividers_mut(orientation);
            if let Some(divider) = collection.iter_mut().find(|d| d.id == id) {
                divider.position = position;
                let moved = *divider;
                collection.sort_by(|a, b| a.position.total_cmp(&b.position));
                return Some(moved);
            }
        }
        None
    }

    pub(crate) fn clear_transient(&mut self) {
        self.selected = None;
        self.hovered = None;
        self.ghost = None;
        self.dragging = false;
        self.pointer = InteriorPoint::default();
        self.pointer_over_panel = false;
    }

    pub(crate) fn clear_layout(&mut self) {
        self.horizontal_dividers.clear();
        self.vertical_dividers.clear();
    }

    /// Clear-space annotations for the selected divider, else the hovered one
    pub fn annotations(&self, settings: &InteractionSettings) -> Option<[DistanceAnnotation; 2]> {
        let reference = self.selected_divider().or_else(|| self.hovered_divider())?;
        let geometry = Geometry::new(&self.shelf_config, settings);
        Some(distance_annotations(
            reference,
            self.dividers(reference.orientation),
            &geometry,
        ))
    }

    pub fn snapshot(&self, state: InteractionState, settings: &InteractionSettings) -> InteractionSnapshot {
        InteractionSnapshot {
            state,
            horizontal_dividers: sorted_by_position(&self.horizontal_dividers),
            vertical_dividers: sorted_by_position(&self.vertical_dividers),
            selected_divider: self.selected_divider().copied(),
            hovered_divider: self.hovered_divider().copied(),
            ghost_divider: self.ghost,
            dragging: self.dragging,
            pointer_position: self.pointer,
            shelf_config: self.shelf_config,
            annotations: self.annotations(settings),
        }
    }
}

/// Read-only view of the engine after a transition.
///
/// Renderers and the cut-list generator are pure functions of this value;
/// they never read or write the divider collections directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionSnapshot {
    pub state: InteractionState,
    pub horizontal_dividers: Vec<Divider>,
    pub vertical_dividers: Vec<Divider>,
    pub selected_divider: Option<Divider>,
    pub hovered_divider: Option<Divider>,
    pub ghost_divider: Option<GhostDivider>,
    pub dragging: bool,
    pub pointer_position: InteriorPoint,
    pub shelf_config: ShelfConfig,
    pub annotations: Option<[DistanceAnnotation; 2]>,
}

impl InteractionSnapshot {
    pub fn dividers(&self, orientation: Orientation) -> &[Divider] {
        match orientation {
            Orientation::Horizontal => &self.horizontal_dividers,
            Orientation::Vertical => &self.vertical_dividers,
        }
    }

    pub fn all_dividers(&self) -> impl Iterator<Item = &Divider> {
        self.horizontal_dividers.iter().chain(self.vertical_dividers.iter())
    }
}
