//! Pure geometry helpers for divider placement.
//!
//! None of these functions touch shared state: each takes an immutable view
//! of the layout plus the injected `Geometry` and returns a value.
//!
//! ## Modules
//!
//! - `ghost` - speculative placement detection for the preview divider
//! - `constraint` - drag/add position solving (clamp, gap, snap) and
//!   re-fitting a layout after the shelf changes
//! - `distance` - clear-space annotations to the nearest neighbors

mod constraint;
mod distance;
mod ghost;

pub use constraint::{constrained_position, fit_to_bounds, is_legal_position};
pub use distance::{distance_annotations, DistanceAnnotation, DistanceDirection, DistanceTarget, Wall};
pub use ghost::detect_ghost;

use crate::types::{Divider, InteriorBounds, Orientation};

/// Borrowed view of both divider collections.
#[derive(Clone, Copy, Debug)]
pub struct DividerLayout<'a> {
    pub horizontal: &'a [Divider],
    pub vertical: &'a [Divider],
}

impl<'a> DividerLayout<'a> {
    pub fn new(horizontal: &'a [Divider], vertical: &'a [Divider]) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn dividers(&self, orientation: Orientation) -> &'a [Divider] {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

/// One end of a section: an enclosure wall or an existing divider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionBound {
    Wall(f64),
    Divider(f64),
}

impl SectionBound {
    #[inline]
    pub fn position(&self) -> f64 {
        match *self {
            Self::Wall(p) | Self::Divider(p) => p,
        }
    }

    #[inline]
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider(_))
    }
}

/// Contiguous span `[lower, upper)` between adjacent bounds on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub lower: SectionBound,
    pub upper: SectionBound,
}

impl Section {
    /// Find the section enclosing `coordinate` among `dividers` (any order).
    pub fn enclosing(
        coordinate: f64,
        dividers: &[Divider],
        orientation: Orientation,
        bounds: &InteriorBounds,
    ) -> Self {
        let (wall_min, wall_max) = bounds.axis(orientation);
        let mut lower = SectionBound::Wall(wall_min);
        let mut upper = SectionBound::Wall(wall_max);

        for divider in dividers {
            let p = divider.position;
            if p <= coordinate {
                if p >= lower.position() {
                    lower = SectionBound::Divider(p);
                }
            } else if p < upper.position() {
                upper = SectionBound::Divider(p);
            }
        }

        Self { lower, upper }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.upper.position() - self.lower.position()
    }
}

/// Sort dividers by position; ties keep insertion order.
pub fn sorted_by_position(dividers: &[Divider]) -> Vec<Divider> {
    let mut sorted = dividers.to_vec();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}
