//! Clear-space annotations between a divider and its nearest boundaries.

use super::sorted_by_position;
use crate::types::{Divider, Geometry, Orientation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way an annotation points from its reference divider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceDirection {
    Below,
    Above,
    Left,
    Right,
}

/// Enclosure walls, named as they are shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        f.write_str(label)
    }
}

/// What the nearest boundary in one direction is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DistanceTarget {
    /// Another divider, by 1-based ordinal among the same-orientation
    /// dividers sorted by position (reference excluded)
    Divider { ordinal: usize },
    /// The enclosure itself
    Wall { wall: Wall },
}

impl fmt::Display for DistanceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Divider { ordinal } => write!(f, "{ordinal}"),
            Self::Wall { wall } => write!(f, "{wall}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceAnnotation {
    pub direction: DistanceDirection,
    /// Clear space, never negative
    pub distance: f64,
    pub target: DistanceTarget,
}

/// Compute the two clear-space annotations for `reference`.
///
/// The first record points toward the low end of the axis (below / left),
/// the second toward the high end (above / right). Between two dividers the
/// full material thickness is subtracted (half of each divider); between a
/// divider and a wall only the divider's half is, since wall positions are
/// interior faces.
pub fn distance_annotations(
    reference: &Divider,
    peers: &[Divider],
    geometry: &Geometry,
) -> [DistanceAnnotation; 2] {
    let orientation = reference.orientation;
    let thickness = geometry.bounds.thickness;
    let (wall_min, wall_max) = geometry.bounds.axis(orientation);

    let others: Vec<Divider> = sorted_by_position(peers)
        .into_iter()
        .filter(|d| d.id != reference.id)
        .collect();

    let (low_dir, high_dir, low_wall, high_wall) = match orientation {
        Orientation::Horizontal => (
            DistanceDirection::Below,
            DistanceDirection::Above,
            Wall::Bottom,
            Wall::Top,
        ),
        Orientation::Vertical => (
            DistanceDirection::Left,
            DistanceDirection::Right,
            Wall::Left,
            Wall::Right,
        ),
    };

    let below = others
        .iter()
        .enumerate()
        .rev()
        .find(|(_, d)| d.position < reference.position);
    let above = others
        .iter()
        .enumerate()
        .find(|(_, d)| d.position >= reference.position);

    let low = match below {
        Some((index, d)) => DistanceAnnotation {
            direction: low_dir,
            distance: (reference.position - d.position - thickness).max(0.0),
            target: DistanceTarget::Divider { ordinal: index + 1 },
        },
        None => DistanceAnnotation {
            direction: low_dir,
            distance: (reference.position - wall_min - thickness / 2.0).max(0.0),
            target: DistanceTarget::Wall { wall: low_wall },
        },
    };

    let high = match above {
        Some((index, d)) => DistanceAnnotation {
            direction: high_dir,
            distance: (d.position - reference.position - thickness).max(0.0),
            target: DistanceTarget::Divider { ordinal: index + 1 },
        },
        None => DistanceAnnotation {
            direction: high_dir,
            distance: (wall_max - reference.position - thickness / 2.0).max(0.0),
            target: DistanceTarget::Wall { wall: high_wall },
        },
    };

    [low, high]
}
