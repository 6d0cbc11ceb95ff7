//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion between
//! geographic and projected coordinates (see [`Projection`]).

mod crs;
mod datum;
pub mod impls;
mod traits;

pub use crs::{Crs, ProjectionType};
pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
