//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomarkTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
