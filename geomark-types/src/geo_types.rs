//! Conversions of geographic geometries into [`geo_types`] geometries, so that `geo` algorithms can be applied to
//! them. Longitude becomes `x` and latitude becomes `y`.

use crate::contour::{ClosedContour, Contour};
use crate::geo::impls::GeoPoint2d;
use crate::geo::GeoPoint;
use crate::polygon::Polygon;
use geo_types::{Coord, LineString};

impl From<&GeoPoint2d> for Coord<f64> {
    fn from(value: &GeoPoint2d) -> Self {
        Coord {
            x: value.lon(),
            y: value.lat(),
        }
    }
}

impl From<&GeoPoint2d> for geo_types::Point<f64> {
    fn from(value: &GeoPoint2d) -> Self {
        geo_types::Point(value.into())
    }
}

impl From<&Contour<GeoPoint2d>> for LineString<f64> {
    fn from(value: &Contour<GeoPoint2d>) -> Self {
        let mut line: LineString<f64> = value.iter().map(Coord::from).collect();
        if value.is_closed() {
            line.close();
        }

        line
    }
}

impl From<&ClosedContour<GeoPoint2d>> for LineString<f64> {
    fn from(value: &ClosedContour<GeoPoint2d>) -> Self {
        value.iter_points_closing().map(Coord::from).collect()
    }
}

impl From<&Polygon<GeoPoint2d>> for geo_types::Polygon<f64> {
    fn from(value: &Polygon<GeoPoint2d>) -> Self {
        geo_types::Polygon::new(value.outer_contour().into(), vec![])
    }
}
