//! Concrete geographic point and projection types.

mod point;
pub mod projection;

pub use point::GeoPoint2d;
