//! Ghost placement detection.
//!
//! Decides whether and where a new divider could be previewed under the
//! pointer. The ghost tracks the raw pointer coordinate so the preview
//! glides with the cursor; snapping only happens at commit time.

use super::{DividerLayout, Section};
use crate::constants::POSITION_EPSILON;
use crate::profile_scope;
use crate::types::{Geometry, GhostDivider, InteriorPoint, Orientation};

/// Compute the ghost divider for a pointer sample.
///
/// Returns `None` when the pointer is outside the interior. The primary
/// orientation is vertical when the pointer is farther than
/// `orientation_threshold` (normalized to the interior half-width) from the
/// centerline, horizontal otherwise. If the primary orientation cannot take
/// a divider the other one is tried; if neither can, the primary
/// (non-addable) ghost is returned.
pub fn detect_ghost(
    point: InteriorPoint,
    layout: DividerLayout<'_>,
    geometry: &Geometry,
    orientation_threshold: f64,
) -> Option<GhostDivider> {
    profile_scope!("detect_ghost");

    let bounds = &geometry.bounds;
    if !bounds.contains(point) {
        return None;
    }

    let half_width = bounds.width / 2.0;
    let offset_ratio = if half_width > 0.0 {
        point.x.abs() / half_width
    } else {
        0.0
    };
    let primary = if offset_ratio > orientation_threshold {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };

    let first = candidate(point, primary, layout, geometry);
    if first.addable {
        return Some(first);
    }

    let fallback = candidate(point, primary.other(), layout, geometry);
    if fallback.addable {
        tracing::trace!(primary = %primary, "Ghost fell back to secondary orientation");
        return Some(fallback);
    }

    Some(first)
}

fn candidate(
    point: InteriorPoint,
    orientation: Orientation,
    layout: DividerLayout<'_>,
    geometry: &Geometry,
) -> GhostDivider {
    let coordinate = point.along(orientation);
    let section = Section::enclosing(
        coordinate,
        layout.dividers(orientation),
        orientation,
        &geometry.bounds,
    );

    let rules = geometry.rules;
    let roomy = section.span() + POSITION_EPSILON >= 2.0 * rules.min_section_size;

    let clear_below = !section.lower.is_divider()
        || coordinate - section.lower.position() + POSITION_EPSILON >= rules.min_gap;
    let clear_above = !section.upper.is_divider()
        || section.upper.position() - coordinate + POSITION_EPSILON >= rules.min_gap;

    GhostDivider {
        position: coordinate,
        orientation,
        addable: roomy && clear_below && clear_above,
        visible: roomy,
    }
}
