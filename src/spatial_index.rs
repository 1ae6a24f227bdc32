//! Spatial Index Module
//!
//! R-tree based hit testing for dividers. Each divider is indexed as the
//! rectangle it occupies in interior coordinates: a full-width band for
//! horizontal dividers, a full-height band for vertical ones, widened by the
//! hit tolerance.

use crate::types::{Divider, InteriorBounds, InteriorPoint, Orientation};
use rstar::{RTree, RTreeObject, AABB};

/// A divider's hit rectangle.
#[derive(Debug, Clone, Copy)]
pub struct DividerEntry {
    pub divider: Divider,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl DividerEntry {
    pub fn new(divider: Divider, bounds: &InteriorBounds, tolerance: f64) -> Self {
        let reach = bounds.thickness / 2.0 + tolerance;
        let (x_min, x_max) = bounds.axis(Orientation::Vertical);
        let (y_min, y_max) = bounds.axis(Orientation::Horizontal);
        match divider.orientation {
            Orientation::Horizontal => Self {
                divider,
                min_x: x_min,
                min_y: divider.position - reach,
                max_x: x_max,
                max_y: divider.position + reach,
            },
            Orientation::Vertical => Self {
                divider,
                min_x: divider.position - reach,
                min_y: y_min,
                max_x: divider.position + reach,
                max_y: y_max,
            },
        }
    }

    /// Distance from the point to the divider's center line
    #[inline]
    fn axis_distance(&self, point: InteriorPoint) -> f64 {
        (point.along(self.divider.orientation) - self.divider.position).abs()
    }
}

impl RTreeObject for DividerEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index over the dividers of one layout.
pub struct DividerIndex {
    tree: RTree<DividerEntry>,
    tolerance: f64,
}

impl DividerIndex {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tree: RTree::new(),
            tolerance,
        }
    }

    /// Replace the indexed dividers.
    pub fn rebuild<'a, I>(&mut self, dividers: I, bounds: &InteriorBounds)
    where
        I: IntoIterator<Item = &'a Divider>,
    {
        let entries: Vec<DividerEntry> = dividers
            .into_iter()
            .map(|d| DividerEntry::new(*d, bounds, self.tolerance))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    /// The divider under `point`; where hit bands overlap (at a crossing of
    /// a horizontal and a vertical divider) the one whose center line is
    /// closest wins.
    pub fn hit_test(&self, point: InteriorPoint) -> Option<Divider> {
        let envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .min_by(|a, b| a.axis_distance(point).total_cmp(&b.axis_distance(point)))
            .map(|entry| entry.divider)
    }
}
