//! Geometries stored in the shape store, in geographic coordinates.

use crate::error::GeomarkError;
use geomark_types::cartesian::Point2d;
use geomark_types::error::GeomarkTypesError;
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::Projection;
use geomark_types::{ClosedContour, Contour, Geom, Polygon};

/// Kind of a shape, and of the shapes a draw interaction produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Single point.
    Point,
    /// Open line of two or more points.
    LineString,
    /// Area bounded by a ring.
    Polygon,
}

impl GeometryKind {
    /// Short lowercase name, used to name drawn features.
    pub fn short_name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "point",
            GeometryKind::LineString => "line",
            GeometryKind::Polygon => "polygon",
        }
    }
}

/// A drawn shape: one of the three geometry types the drawing tools produce.
///
/// Shapes are values. An edited shape is replaced as a whole, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Point.
    Point(GeoPoint2d),
    /// Open line string with at least two points.
    LineString(Contour<GeoPoint2d>),
    /// Polygon with at least three distinct ring points.
    Polygon(Polygon<GeoPoint2d>),
}

impl Shape {
    /// Creates a line string shape.
    pub fn line_string(points: Vec<GeoPoint2d>) -> Result<Self, GeomarkError> {
        Self::try_from(Geom::Contour(Contour::open(points)))
    }

    /// Creates a polygon shape from its ring. The ring may or may not repeat the first point at the end.
    pub fn polygon(ring: Vec<GeoPoint2d>) -> Result<Self, GeomarkError> {
        Self::try_from(Geom::Polygon(Polygon::new(ClosedContour::new(ring))))
    }

    /// Converts a geometry in the projected plane of a map into a shape.
    pub fn from_projected(
        geometry: &Geom<Point2d>,
        projection: &dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>,
    ) -> Result<Self, GeomarkError> {
        let geographic = geometry
            .unproject(projection)
            .ok_or(GeomarkError::Projection)?;
        Self::try_from(geographic)
    }

    /// Kind of the shape.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Shape::Point(_) => GeometryKind::Point,
            Shape::LineString(_) => GeometryKind::LineString,
            Shape::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Converts the shape into the projected plane of a map.
    pub fn to_projected(
        &self,
        projection: &dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>,
    ) -> Result<Geom<Point2d>, GeomarkError> {
        let geom = match self {
            Shape::Point(point) => Geom::Point(*point),
            Shape::LineString(contour) => Geom::Contour(contour.clone()),
            Shape::Polygon(polygon) => Geom::Polygon(polygon.clone()),
        };

        geom.project(projection).ok_or(GeomarkError::Projection)
    }
}

impl TryFrom<Geom<GeoPoint2d>> for Shape {
    type Error = GeomarkError;

    fn try_from(value: Geom<GeoPoint2d>) -> Result<Self, Self::Error> {
        let type_name = value.type_name();
        match value {
            Geom::Point(point) => {
                ensure_finite([&point])?;
                Ok(Shape::Point(point))
            }
            Geom::Contour(contour) if !contour.is_closed() => {
                ensure_finite(contour.iter())?;
                if contour.len() < 2 {
                    return Err(conversion_error(format!(
                        "line string must have at least 2 points, got {}",
                        contour.len()
                    )));
                }

                Ok(Shape::LineString(contour))
            }
            Geom::Polygon(polygon) => {
                let mut points = polygon.outer_contour.points;
                ensure_finite(points.iter())?;
                if points.len() > 1 && points.first() == points.last() {
                    points.pop();
                }

                if points.len() < 3 {
                    return Err(conversion_error(format!(
                        "polygon ring must have at least 3 distinct points, got {}",
                        points.len()
                    )));
                }

                Ok(Shape::Polygon(Polygon::new(ClosedContour::new(points))))
            }
            Geom::MultiPoint(_) | Geom::Contour(_) => Err(GeomarkError::UnsupportedGeometry(type_name)),
        }
    }
}

fn ensure_finite<'a>(points: impl IntoIterator<Item = &'a GeoPoint2d>) -> Result<(), GeomarkError> {
    if points.into_iter().all(GeoPoint2d::is_finite) {
        Ok(())
    } else {
        Err(conversion_error("coordinates must be finite".into()))
    }
}

fn conversion_error(message: String) -> GeomarkError {
    GeomarkTypesError::Conversion(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use geomark_types::geo::impls::projection::WebMercator;
    use geomark_types::geo::GeoPoint;
    use geomark_types::latlon;

    #[test]
    fn multi_point_is_unsupported() {
        let geom = Geom::MultiPoint(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]);
        assert_matches!(
            Shape::try_from(geom),
            Err(GeomarkError::UnsupportedGeometry("MultiPoint"))
        );
    }

    #[test]
    fn closed_contour_is_unsupported() {
        let geom = Geom::Contour(Contour::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(1.0, 1.0),
            latlon!(1.0, 0.0),
        ]));
        assert_matches!(
            Shape::try_from(geom),
            Err(GeomarkError::UnsupportedGeometry("LinearRing"))
        );
    }

    #[test]
    fn line_string_needs_two_points() {
        assert_matches!(
            Shape::line_string(vec![latlon!(0.0, 0.0)]),
            Err(GeomarkError::InvalidGeometry(_))
        );
        assert_matches!(
            Shape::line_string(vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0)]),
            Ok(Shape::LineString(_))
        );
    }

    #[test]
    fn polygon_drops_explicit_closing_point() {
        let shape = Shape::polygon(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
            latlon!(0.0, 0.0),
        ])
        .expect("valid polygon");

        let Shape::Polygon(polygon) = shape else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.outer_contour().points.len(), 3);
    }

    #[test]
    fn polygon_needs_three_distinct_points() {
        assert_matches!(
            Shape::polygon(vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(0.0, 0.0)]),
            Err(GeomarkError::InvalidGeometry(_))
        );
    }

    #[test]
    fn non_finite_point_is_rejected() {
        assert_matches!(
            Shape::try_from(Geom::Point(latlon!(f64::NAN, 0.0))),
            Err(GeomarkError::InvalidGeometry(_))
        );
    }

    #[test]
    fn from_projected_point() {
        let projection = WebMercator::<GeoPoint2d, Point2d>::default();
        let shape = Shape::from_projected(&Geom::Point(Point2d::new(0.0, 0.0)), &projection)
            .expect("valid point");

        let Shape::Point(point) = shape else {
            panic!("expected point");
        };
        assert_relative_eq!(point.lat(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(point.lon(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn kinds() {
        assert_eq!(Shape::Point(latlon!(1.0, 2.0)).kind(), GeometryKind::Point);
        assert_eq!(GeometryKind::LineString.short_name(), "line");
    }
}
