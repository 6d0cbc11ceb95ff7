//! Polygons bounded by a single ring.

use crate::contour::ClosedContour;
use serde::{Deserialize, Serialize};

/// Simple polygon with one outer ring and no holes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>) -> Self {
        Self { outer_contour }
    }

    /// Outer ring of the polygon.
    pub fn outer_contour(&self) -> &ClosedContour<P> {
        &self.outer_contour
    }

    /// Converts every point with `convert`. Returns `None` if any of the points cannot be converted.
    pub fn map_points<T>(&self, convert: impl FnMut(&P) -> Option<T>) -> Option<Polygon<T>> {
        Some(Polygon {
            outer_contour: self.outer_contour.map_points(convert)?,
        })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
        }
    }
}
