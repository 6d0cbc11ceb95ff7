//! Tagged geometry exchanged with map engines.

use crate::contour::Contour;
use crate::geo::Projection;
use crate::polygon::Polygon;

/// Geometry of any supported type with points of type `P`.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Set of unconnected points.
    MultiPoint(Vec<P>),
    /// Open or closed contour.
    Contour(Contour<P>),
    /// Polygon.
    Polygon(Polygon<P>),
}

impl<P> Geom<P> {
    /// Name of the geometry type, as used in log and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geom::Point(_) => "Point",
            Geom::MultiPoint(_) => "MultiPoint",
            Geom::Contour(c) if c.is_closed() => "LinearRing",
            Geom::Contour(_) => "LineString",
            Geom::Polygon(_) => "Polygon",
        }
    }

    /// Converts every point with `convert`. Returns `None` if any of the points cannot be converted.
    pub fn map_points<T>(&self, mut convert: impl FnMut(&P) -> Option<T>) -> Option<Geom<T>> {
        Some(match self {
            Geom::Point(p) => Geom::Point(convert(p)?),
            Geom::MultiPoint(points) => {
                Geom::MultiPoint(points.iter().map(convert).collect::<Option<Vec<T>>>()?)
            }
            Geom::Contour(contour) => Geom::Contour(contour.map_points(convert)?),
            Geom::Polygon(polygon) => Geom::Polygon(polygon.map_points(convert)?),
        })
    }

    /// Projects the geometry with the given projection.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        self.map_points(|p| projection.project(p))
    }

    /// Converts a geometry in the projected space of `projection` back into its source space.
    pub fn unproject<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::InPoint>>
    where
        Proj: Projection<OutPoint = P> + ?Sized,
    {
        self.map_points(|p| projection.unproject(p))
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::projection::WebMercator;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::GeoPoint;
    use crate::latlon;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    #[test]
    fn project_and_back() {
        let projection = WebMercator::<GeoPoint2d, Point2d>::default();
        let line = Geom::from(Contour::open(vec![latlon!(10.0, 20.0), latlon!(-5.0, 1.5)]));

        let projected = line.project(&projection).expect("projects");
        let restored = projected.unproject(&projection).expect("unprojects");

        let contour = match restored {
            Geom::Contour(contour) => contour,
            other => panic!("expected contour, got {}", other.type_name()),
        };
        assert!(!contour.is_closed());
        assert_relative_eq!(contour[0].lat(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(contour[1].lon(), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn type_names() {
        assert_eq!(Geom::Point(1).type_name(), "Point");
        assert_eq!(Geom::MultiPoint(vec![1, 2]).type_name(), "MultiPoint");
        assert_eq!(Geom::from(Contour::closed(vec![1, 2, 3])).type_name(), "LinearRing");
    }

    #[test]
    fn failed_point_fails_whole_geometry() {
        let geom = Geom::MultiPoint(vec![1, 2, 3]);
        assert_matches!(geom.map_points(|p| (*p != 2).then_some(*p)), None);
    }
}
