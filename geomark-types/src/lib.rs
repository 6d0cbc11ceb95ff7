//! Geometry primitives shared by the `geomark` drawing core and the map engines it talks to.
//!
//! Points come in two coordinate spaces:
//! * geographic ([`geo::GeoPoint`], latitude and longitude in degrees), which is what shapes are stored and
//!   measured in, and
//! * cartesian ([`cartesian::CartesianPoint2d`]), the projected plane of a map engine.
//!
//! A [`geo::Projection`] converts between them, and [`Geom`] is the tagged geometry that can be carried across that
//! boundary in either space.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod polygon;

#[cfg(feature = "geo-types")]
pub mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use geometry::Geom;
pub use polygon::Polygon;
