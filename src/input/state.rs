//! Interaction state machine states.
//!
//! One explicit tagged union replaces hover/selection/drag flags, so states
//! such as "dragging without a selection" cannot be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Normal        -> Hovering       (pointer enters a divider)
//! Normal        -> Selected       (click on a divider)
//! Hovering      -> Selected       (click on the hovered divider)
//! Hovering      -> Normal         (pointer leaves the divider)
//! Selected      -> PreparingDrag  (pointer pressed on the selected divider)
//! Selected      -> Normal         (click elsewhere, delete)
//! PreparingDrag -> Dragging       (pointer travels past the drag threshold)
//! PreparingDrag -> Selected       (pointer released: plain click)
//! Dragging      -> Normal         (pointer released, deselect policy)
//!
//! Any -> Normal                   (reset)
//! ```

use super::event::PixelPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum InteractionState {
    /// No hover or selection; the ghost may be live
    #[default]
    Normal,

    /// Pointer over an existing divider; ghost suppressed
    Hovering,

    /// One divider pinned; another may still be hovered
    Selected,

    /// Pointer pressed on the selected divider, waiting to tell a click
    /// from a drag
    PreparingDrag {
        /// Pixel position of the press
        anchor: PixelPosition,
    },

    /// Pointer movement relocates the selected divider; camera suspended
    Dragging {
        /// Pixel position of the press that started the drag
        anchor: PixelPosition,
    },
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hovering => "hovering",
            Self::Selected => "selected",
            Self::PreparingDrag { .. } => "preparingDrag",
            Self::Dragging { .. } => "dragging",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// True for both drag phases, where hover changes are ignored
    pub fn is_drag_gesture(&self) -> bool {
        matches!(self, Self::PreparingDrag { .. } | Self::Dragging { .. })
    }

    pub fn drag_anchor(&self) -> Option<PixelPosition> {
        match self {
            Self::PreparingDrag { anchor } | Self::Dragging { anchor } => Some(*anchor),
            _ => None,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
