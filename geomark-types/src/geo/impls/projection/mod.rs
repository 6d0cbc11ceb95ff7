//! Implementations for some of the common projections.
mod web_mercator;

pub use web_mercator::WebMercator;
