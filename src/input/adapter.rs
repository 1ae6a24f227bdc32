//! Pointer adapter for hosts that only know where the pointer is.
//!
//! Turns a raw interior-space pointer sample into the event sequence the
//! machine expects: a hover change (if the divider under the pointer differs
//! from the snapshot's hovered one) followed by the `MOUSE_MOVE`. Hover
//! changes come first so the move recomputes the ghost against the new
//! hover state.

use super::context::InteractionSnapshot;
use super::event::{InteractionEvent, PixelPosition};
use crate::spatial_index::DividerIndex;
use crate::types::InteriorPoint;

pub struct PointerRouter {
    index: DividerIndex,
}

impl PointerRouter {
    pub fn new(hit_tolerance: f64) -> Self {
        Self {
            index: DividerIndex::new(hit_tolerance),
        }
    }

    /// Events for one pointer sample against the latest snapshot.
    pub fn route(
        &mut self,
        snapshot: &InteractionSnapshot,
        pixel: PixelPosition,
        point: InteriorPoint,
        is_over_panel: bool,
    ) -> Vec<InteractionEvent> {
        let mut events = Vec::with_capacity(2);

        // Hover is frozen for the whole drag gesture
        if !snapshot.state.is_drag_gesture() {
            self.index
                .rebuild(snapshot.all_dividers(), &snapshot.shelf_config.interior());
            let hit = if is_over_panel {
                None
            } else {
                self.index.hit_test(point)
            };

            let hovered = snapshot.hovered_divider.map(|d| d.id);
            match hit {
                Some(divider) if hovered != Some(divider.id) => {
                    events.push(InteractionEvent::HoverDivider { divider });
                }
                None if hovered.is_some() => events.push(InteractionEvent::Unhover),
                _ => {}
            }
        }

        events.push(InteractionEvent::mouse_move(pixel, point, is_over_panel));
        events
    }
}
