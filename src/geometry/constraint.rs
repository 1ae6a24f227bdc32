//! Position constraint solving for added and dragged dividers.
//!
//! Runs on every pointer move while dragging and once when a ghost is
//! committed. The result is always inside the legal range of the axis.

use super::sorted_by_position;
use crate::constants::POSITION_EPSILON;
use crate::types::{Divider, DividerId, Geometry, Orientation};

/// Correct `desired` into a legal position for a divider of `orientation`.
///
/// `moving` is the divider being dragged (excluded from neighbor checks), or
/// `None` when placing a new divider. `peers` is the full same-orientation
/// collection.
///
/// 1. Clamp to the axis inset by half the material thickness.
/// 2. Push away from every neighbor closer than the minimum gap, toward the
///    side the divider currently sits on, re-clamping after each push.
///    Passes repeat until nothing moves. A crowded section that still
///    leaves the position illegal falls back to the nearest legal slot,
///    preferring the side the divider approaches from.
/// 3. Snap to the unit increment, trying the other adjacent increment when
///    the nearest one breaks a gap or the bounds, then clamp once more.
///
/// When the axis has no legal slot at all the clamped value is returned;
/// callers check `is_legal_position` before applying it.
pub fn constrained_position(
    desired: f64,
    orientation: Orientation,
    moving: Option<DividerId>,
    peers: &[Divider],
    geometry: &Geometry,
) -> f64 {
    let bounds = &geometry.bounds;
    let min_gap = geometry.min_gap();

    let target = bounds.clamp(orientation, desired);
    let current = moving
        .and_then(|id| peers.iter().find(|d| d.id == id))
        .map(|d| d.position);

    // Side of each neighbor is judged from where the divider is now, so a
    // drag can never be pushed through the neighbor it approaches.
    let reference = current.unwrap_or(target);

    let mut corrected = target;
    for _ in 0..=peers.len() {
        let before = corrected;
        for neighbor in peers.iter().filter(|d| Some(d.id) != moving) {
            if (corrected - neighbor.position).abs() < min_gap {
                corrected = if neighbor.position >= reference {
                    neighbor.position - min_gap
                } else {
                    neighbor.position + min_gap
                };
                corrected = bounds.clamp(orientation, corrected);
            }
        }
        if corrected == before {
            break;
        }
    }

    if !is_legal_position(corrected, orientation, moving, peers, geometry) {
        if let Some(slot) = nearest_legal_slot(target, current, orientation, moving, peers, geometry) {
            corrected = slot;
        }
    }

    let snapped = snap(corrected, orientation, moving, peers, geometry);
    bounds.clamp(orientation, snapped)
}

/// Closest legal position to `target`. Legal slots start at the edges of a
/// neighbor's gap zone or at the bounds, so only those are examined.
fn nearest_legal_slot(
    target: f64,
    approach_from: Option<f64>,
    orientation: Orientation,
    moving: Option<DividerId>,
    peers: &[Divider],
    geometry: &Geometry,
) -> Option<f64> {
    let (min, max) = geometry.bounds.legal_range(orientation);
    let min_gap = geometry.min_gap();

    let slots: Vec<f64> = peers
        .iter()
        .filter(|d| Some(d.id) != moving)
        .flat_map(|d| [d.position - min_gap, d.position + min_gap])
        .chain([min, max])
        .filter(|&slot| is_legal_position(slot, orientation, moving, peers, geometry))
        .collect();

    let closest = |on_side: &dyn Fn(f64) -> bool| {
        slots
            .iter()
            .copied()
            .filter(|&slot| on_side(slot))
            .min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
    };

    let approach_side = |slot: f64| match approach_from {
        Some(from) if from <= target => slot <= target,
        Some(_) => slot >= target,
        None => true,
    };

    closest(&approach_side).or_else(|| closest(&|_: f64| true))
}

/// Fit a same-orientation collection into the current bounds.
///
/// Positions are clamped, then spread upward from the floor and back down
/// from the ceiling so every pair keeps the minimum gap. Returns the fitted
/// collection sorted by position, plus the dividers dropped from the high
/// end when the axis cannot hold them all.
pub fn fit_to_bounds(
    dividers: &[Divider],
    orientation: Orientation,
    geometry: &Geometry,
) -> (Vec<Divider>, Vec<Divider>) {
    let bounds = &geometry.bounds;
    let (min, max) = bounds.legal_range(orientation);
    let min_gap = geometry.min_gap();

    let mut kept = sorted_by_position(dividers);
    for divider in &mut kept {
        divider.position = bounds.clamp(orientation, divider.position);
    }

    let capacity = if min_gap > 0.0 {
        (((max - min).max(0.0) / min_gap + POSITION_EPSILON).floor() as usize).saturating_add(1)
    } else {
        usize::MAX
    };
    let dropped = if kept.len() > capacity {
        kept.split_off(capacity)
    } else {
        Vec::new()
    };

    for i in 1..kept.len() {
        let floor = kept[i - 1].position + min_gap;
        if kept[i].position < floor {
            kept[i].position = floor;
        }
    }
    let mut ceiling = max;
    for divider in kept.iter_mut().rev() {
        if divider.position > ceiling {
            divider.position = ceiling;
        }
        ceiling = divider.position - min_gap;
    }

    (kept, dropped)
}

/// True when `position` is within bounds and respects the gap to all peers.
pub fn is_legal_position(
    position: f64,
    orientation: Orientation,
    moving: Option<DividerId>,
    peers: &[Divider],
    geometry: &Geometry,
) -> bool {
    geometry.in_bounds(orientation, position) && geometry.respects_gap(position, peers, moving)
}

fn snap(
    position: f64,
    orientation: Orientation,
    moving: Option<DividerId>,
    peers: &[Divider],
    geometry: &Geometry,
) -> f64 {
    let increment = geometry.rules.snap_increment;
    if increment <= 0.0 {
        return position;
    }

    let nearest = (position / increment).round() * increment;
    let other = if nearest > position {
        nearest - increment
    } else {
        nearest + increment
    };

    [nearest, other]
        .into_iter()
        .find(|&candidate| is_legal_position(candidate, orientation, moving, peers, geometry))
        .unwrap_or(position)
}
