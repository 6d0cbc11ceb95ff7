//! Geodesic length and area of drawn shapes.

use crate::shape::Shape;
use geo::{ChamberlainDuquetteArea, HaversineLength};
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::Datum;
use geomark_types::{Contour, Polygon};
use std::fmt::{Display, Formatter};

/// Radius of the sphere lengths and areas are measured on, in meters.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Unit of a [`Measurement`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MeasurementUnit {
    /// Length in meters.
    Meters,
    /// Area in square meters.
    SquareMeters,
}

impl Display for MeasurementUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementUnit::Meters => f.write_str("meters"),
            MeasurementUnit::SquareMeters => f.write_str("square meters"),
        }
    }
}

/// Length or area of a shape, rounded to two decimal digits.
///
/// Displayed as the value with exactly two decimals, a space and the unit: `12.34 meters`, `5.60 square meters`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Measurement {
    value: f64,
    unit: MeasurementUnit,
}

impl Measurement {
    /// Creates a measurement. The value is rounded to two decimals, negative values and negative zero become `0`.
    pub fn new(value: f64, unit: MeasurementUnit) -> Self {
        let value = (value * 100.0).round() / 100.0;
        let value = if value > 0.0 { value } else { 0.0 };
        Self { value, unit }
    }

    /// Rounded value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit of the value.
    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    /// Whether the measured shape has any extent. A single point is measured as `0 meters`, which means there is
    /// nothing meaningful to show rather than an error.
    pub fn has_extent(&self) -> bool {
        self.value > 0.0
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Measures a shape.
///
/// * Points have zero length.
/// * Line strings are measured as the sum of great-circle distances between consecutive points on a sphere with the
///   Earth's mean radius.
/// * Polygons are measured by the spherical excess of their ring on the same sphere. Rings are expected to be
///   simple, self-intersecting rings give meaningless results.
pub fn measure(shape: &Shape) -> Measurement {
    match shape {
        Shape::Point(_) => Measurement::new(0.0, MeasurementUnit::Meters),
        Shape::LineString(contour) => Measurement::new(length(contour), MeasurementUnit::Meters),
        Shape::Polygon(polygon) => Measurement::new(area(polygon), MeasurementUnit::SquareMeters),
    }
}

fn length(contour: &Contour<GeoPoint2d>) -> f64 {
    geo::LineString::from(contour).haversine_length()
}

fn area(polygon: &Polygon<GeoPoint2d>) -> f64 {
    // `geo` evaluates the area on a sphere with the equatorial radius.
    let scale = MEAN_EARTH_RADIUS / Datum::WGS84.semimajor();
    geo::Polygon::from(polygon).chamberlain_duquette_unsigned_area() * scale * scale
}
