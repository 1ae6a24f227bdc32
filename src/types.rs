//! Core types for the divider engine.
//!
//! This module defines the shelf configuration supplied by the host, the
//! divider values owned by the state machine, and the derived interior
//! geometry that every geometry helper receives explicitly.

use crate::constants::POSITION_EPSILON;
use crate::error::ConfigError;
use crate::settings::{InteractionSettings, UnitRules};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Shelf Configuration
// ============================================================================

/// Measurement system of a shelf. Selects the gap and snapping rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

/// Host-supplied shelf dimensions. Replaced wholesale on change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfConfig {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub material_thickness: f64,
    pub units: Units,
}

impl ShelfConfig {
    pub fn new(width: f64, height: f64, depth: f64, material_thickness: f64, units: Units) -> Self {
        Self {
            width,
            height,
            depth,
            material_thickness,
            units,
        }
    }

    /// Check the dimensional invariants: all dimensions positive and finite,
    /// thickness strictly below half of both width and height.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("materialThickness", self.material_thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let limit = self.width.min(self.height) / 2.0;
        if self.material_thickness >= limit {
            return Err(ConfigError::ThicknessTooLarge {
                thickness: self.material_thickness,
                limit,
            });
        }

        Ok(())
    }

    /// Derived interior geometry for this configuration
    pub fn interior(&self) -> InteriorBounds {
        InteriorBounds::from_config(self)
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self::new(80.0, 180.0, 30.0, 1.8, Units::Metric)
    }
}

// ============================================================================
// Dividers
// ============================================================================

/// Axis a divider partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Partitions the shelf by height; positioned from the interior floor
    Horizontal,
    /// Partitions the shelf by width; positioned from the interior centerline
    Vertical,
}

impl Orientation {
    pub fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Opaque divider identifier. Assigned once and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DividerId(pub u64);

impl fmt::Display for DividerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "divider-{}", self.0)
    }
}

/// A committed partition inside the shelf.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    pub id: DividerId,
    /// Offset along the partition axis
    pub position: f64,
    pub orientation: Orientation,
}

impl Divider {
    pub fn new(id: DividerId, position: f64, orientation: Orientation) -> Self {
        Self {
            id,
            position,
            orientation,
        }
    }
}

/// Placement preview. Recomputed on every pointer move, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GhostDivider {
    pub position: f64,
    pub orientation: Orientation,
    pub addable: bool,
    pub visible: bool,
}

/// Pointer location in shelf-interior coordinates.
///
/// `x` is the horizontal offset from the interior centerline, `y` the
/// vertical offset from the interior floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InteriorPoint {
    pub x: f64,
    pub y: f64,
}

impl InteriorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the axis a divider of `orientation` is positioned on
    #[inline]
    pub fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.y,
            Orientation::Vertical => self.x,
        }
    }
}

// ============================================================================
// Interior Geometry
// ============================================================================

/// Usable interior of the enclosure after subtracting the wall panels.
///
/// This is the only source of derived dimensions for the geometry helpers;
/// it is built from the `ShelfConfig` and passed in explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteriorBounds {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

impl InteriorBounds {
    pub fn from_config(config: &ShelfConfig) -> Self {
        let t = config.material_thickness;
        Self {
            width: (config.width - 2.0 * t).max(0.0),
            height: (config.height - 2.0 * t).max(0.0),
            thickness: t,
        }
    }

    /// Wall-to-wall span `(min, max)` of the axis for `orientation`
    pub fn axis(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (0.0, self.height),
            Orientation::Vertical => (-self.width / 2.0, self.width / 2.0),
        }
    }

    /// Legal divider positions: the axis inset by half the material thickness
    pub fn legal_range(&self, orientation: Orientation) -> (f64, f64) {
        let (min, max) = self.axis(orientation);
        let inset = self.thickness / 2.0;
        (min + inset, max - inset)
    }

    #[inline]
    pub fn clamp(&self, orientation: Orientation, position: f64) -> f64 {
        let (min, max) = self.legal_range(orientation);
        position.max(min).min(max)
    }

    pub fn contains(&self, point: InteriorPoint) -> bool {
        let (x_min, x_max) = self.axis(Orientation::Vertical);
        let (y_min, y_max) = self.axis(Orientation::Horizontal);
        point.x >= x_min && point.x <= x_max && point.y >= y_min && point.y <= y_max
    }
}

// ============================================================================
// Geometry Inputs
// ============================================================================

/// Everything a geometry helper needs to know about the enclosure: the
/// interior bounds and the unit rules in force for the shelf's units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub bounds: InteriorBounds,
    pub rules: UnitRules,
}

impl Geometry {
    pub fn new(config: &ShelfConfig, settings: &InteractionSettings) -> Self {
        Self {
            bounds: config.interior(),
            rules: settings.rules_for(config.units),
        }
    }

    #[inline]
    pub fn min_gap(&self) -> f64 {
        self.rules.min_gap
    }

    /// True when `position` respects the minimum gap to every divider in
    /// `peers` other than `exclude`
    pub fn respects_gap(&self, position: f64, peers: &[Divider], exclude: Option<DividerId>) -> bool {
        peers
            .iter()
            .filter(|d| Some(d.id) != exclude)
            .all(|d| (position - d.position).abs() + POSITION_EPSILON >= self.rules.min_gap)
    }

    /// True when `position` lies within the legal range of `orientation`
    pub fn in_bounds(&self, orientation: Orientation, position: f64) -> bool {
        let (min, max) = self.bounds.legal_range(orientation);
        position + POSITION_EPSILON >= min && position - POSITION_EPSILON <= max
    }
}
