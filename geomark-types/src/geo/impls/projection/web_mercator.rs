use crate::cartesian::NewCartesianPoint2d;
use crate::geo::datum::Datum;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::marker::PhantomData;

/// Spherical mercator projection used by most tiled web maps (EPSG:3857).
#[derive(Debug, Copy, Clone)]
pub struct WebMercator<In, Out> {
    datum: Datum,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> WebMercator<In, Out> {
    /// Creates a new projection on the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for WebMercator<In, Out> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for WebMercator<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor() * (FRAC_PI_4 + input.lat_rad() / 2.0).tan().ln();

        if x.is_finite() && y.is_finite() {
            Some(Self::OutPoint::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lat = 2.0 * (input.y() / self.datum.semimajor()).exp().atan() - FRAC_PI_2;
        let lon = input.x() / self.datum.semimajor();

        let (lat, lon) = (lat.to_degrees(), lon.to_degrees());
        if lat.is_finite() && lon.is_finite() {
            Some(Self::InPoint::latlon(lat, lon))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::GeoPoint;
    use crate::latlon;
    use approx::assert_relative_eq;

    fn projection() -> WebMercator<GeoPoint2d, Point2d> {
        WebMercator::default()
    }

    #[test]
    fn origin_projects_to_origin() {
        let projected = projection().project(&latlon!(0.0, 0.0)).expect("projects");
        assert_relative_eq!(projected.x, 0.0);
        assert_relative_eq!(projected.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn known_point() {
        let projected = projection()
            .project(&latlon!(40.0, -100.0))
            .expect("projects");
        assert_relative_eq!(projected.x, -11_131_949.08, epsilon = 0.01);
        assert_relative_eq!(projected.y, 4_865_942.28, epsilon = 0.01);

        let back = projection().unproject(&projected).expect("unprojects");
        assert_relative_eq!(back.lat(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(back.lon(), -100.0, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(projection().project(&latlon!(f64::NAN, 0.0)).is_none());
        assert!(projection()
            .unproject(&Point2d::new(f64::INFINITY, 0.0))
            .is_none());
    }
}
