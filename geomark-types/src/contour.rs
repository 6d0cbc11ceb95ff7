//! Open and closed sequences of points.

use serde::{Deserialize, Serialize};

/// Sequence of points that is either open (a line string) or closed (a ring).
///
/// A closed contour does not repeat its first point at the end, the closing segment is implied.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> std::ops::Deref for Contour<Point> {
    type Target = Vec<Point>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Creates a new closed contour.
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }

    /// Whether the last point connects back to the first one.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Converts self into a `ClosedContour` instance if the contour is closed, or returns `None` if the contour is
    /// open.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    /// Converts every point with `convert`. Returns `None` if any of the points cannot be converted.
    pub fn map_points<T>(&self, convert: impl FnMut(&Point) -> Option<T>) -> Option<Contour<T>> {
        let points = self.points.iter().map(convert).collect::<Option<Vec<T>>>()?;
        Some(Contour {
            points,
            is_closed: self.is_closed,
        })
    }

    /// Iterates over segments of the contour, including the closing segment for closed contours.
    pub fn iter_segments(&self) -> impl Iterator<Item = (&Point, &Point)> {
        let closing = match (self.is_closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if self.points.len() > 1 => Some((last, first)),
            _ => None,
        };

        self.points
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .chain(closing)
    }
}

/// Ring of points. The first point is not repeated at the end.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClosedContour<Point> {
    /// Points of the contour.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Iterates over the points of the ring, returning the first point once more at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().chain(self.points.first())
    }

    /// Converts every point with `convert`. Returns `None` if any of the points cannot be converted.
    pub fn map_points<T>(
        &self,
        convert: impl FnMut(&Point) -> Option<T>,
    ) -> Option<ClosedContour<T>> {
        let points = self.points.iter().map(convert).collect::<Option<Vec<T>>>()?;
        Some(ClosedContour { points })
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_of_open_contour() {
        let contour = Contour::open(vec![1, 2, 3]);
        let segments: Vec<_> = contour.iter_segments().collect();
        assert_eq!(segments, vec![(&1, &2), (&2, &3)]);
    }

    #[test]
    fn segments_of_closed_contour() {
        let contour = Contour::closed(vec![1, 2, 3]);
        let segments: Vec<_> = contour.iter_segments().collect();
        assert_eq!(segments, vec![(&1, &2), (&2, &3), (&3, &1)]);
    }

    #[test]
    fn closing_iterator_repeats_first_point() {
        let ring = ClosedContour::new(vec![1, 2, 3]);
        assert_eq!(ring.iter_points_closing().copied().collect::<Vec<_>>(), vec![1, 2, 3, 1]);
    }

    #[test]
    fn map_points_fails_on_any_point() {
        let contour = Contour::open(vec![1, -2, 3]);
        assert!(contour
            .map_points(|p| if *p > 0 { Some(*p) } else { None })
            .is_none());
        assert_eq!(
            contour.map_points(|p| Some(p * 2)),
            Some(Contour::open(vec![2, -4, 6]))
        );
    }
}
