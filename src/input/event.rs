//! Inbound event vocabulary.
//!
//! Positions are already translated into shelf-interior coordinates by the
//! view layer, except the pixel coordinates used for drag-threshold
//! detection. Events deserialize from the tagged JSON form used by hosts
//! and recorded sessions, e.g. `{"type": "MOUSE_MOVE", "x": 10, ...}`.

use crate::types::{Divider, InteriorPoint, ShelfConfig};
use serde::{Deserialize, Serialize};

/// Pointer location in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: PixelPosition) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum InteractionEvent {
    MouseMove {
        x: f64,
        y: f64,
        position_y: f64,
        position_x: f64,
        #[serde(default)]
        is_over_panel: bool,
    },
    ClickEmptySpace {
        position_y: f64,
        position_x: f64,
    },
    ClickDivider {
        divider: Divider,
    },
    HoverDivider {
        divider: Divider,
    },
    Unhover,
    MouseDown {
        x: f64,
        y: f64,
    },
    MouseUp,
    ClickDelete,
    ClickElsewhere,
    UpdateShelfConfig {
        config: ShelfConfig,
    },
    /// Restore a previously committed divider verbatim
    AddExistingDivider {
        divider: Divider,
    },
    Reset,
}

impl InteractionEvent {
    pub fn mouse_move(pixel: PixelPosition, point: InteriorPoint, is_over_panel: bool) -> Self {
        Self::MouseMove {
            x: pixel.x,
            y: pixel.y,
            position_y: point.y,
            position_x: point.x,
            is_over_panel,
        }
    }

    pub fn click_empty_space(point: InteriorPoint) -> Self {
        Self::ClickEmptySpace {
            position_y: point.y,
            position_x: point.x,
        }
    }

    pub fn mouse_down(pixel: PixelPosition) -> Self {
        Self::MouseDown {
            x: pixel.x,
            y: pixel.y,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MouseMove { .. } => "MOUSE_MOVE",
            Self::ClickEmptySpace { .. } => "CLICK_EMPTY_SPACE",
            Self::ClickDivider { .. } => "CLICK_DIVIDER",
            Self::HoverDivider { .. } => "HOVER_DIVIDER",
            Self::Unhover => "UNHOVER",
            Self::MouseDown { .. } => "MOUSE_DOWN",
            Self::MouseUp => "MOUSE_UP",
            Self::ClickDelete => "CLICK_DELETE",
            Self::ClickElsewhere => "CLICK_ELSEWHERE",
            Self::UpdateShelfConfig { .. } => "UPDATE_SHELF_CONFIG",
            Self::AddExistingDivider { .. } => "ADD_EXISTING_DIVIDER",
            Self::Reset => "RESET",
        }
    }
}
