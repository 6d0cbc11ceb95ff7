//! Points in the projected (cartesian) plane of a map.

pub use nalgebra::Point2;
use nalgebra::{Scalar, Vector2};
use num_traits::{Bounded, FromPrimitive, Num};

/// 2d point with `f64` coordinates.
pub type Point2d = Point2<f64>;

/// A point in 2d cartesian space.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Square of the euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }
}

/// Cartesian point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<N>
    for Point2<N>
{
    fn new(x: N, y: N) -> Self {
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_sq() {
        let a = Point2d::new(1.0, 1.0);
        let b = Point2d::new(4.0, 5.0);
        assert_eq!(a.distance_sq(&b), 25.0);
        assert_eq!(b.sub(&a), Vector2::new(3.0, 4.0));
    }
}
