//! Error types used by the crate.

use crate::store::FeatureId;
use geomark_types::error::GeomarkTypesError;
use thiserror::Error;

/// Geomark error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomarkError {
    /// The map engine delivered a geometry type that cannot be stored or measured. This is a programming error in
    /// the engine integration, not a user error.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(&'static str),
    /// The geometry has the right type but not enough vertices for it.
    #[error(transparent)]
    InvalidGeometry(#[from] GeomarkTypesError),
    /// Feature with the given id is not in the store.
    #[error("feature {0} not found")]
    FeatureNotFound(FeatureId),
    /// A draw interaction was about to be attached while another one is still attached.
    #[error("a draw interaction is already attached")]
    DrawInteractionAttached,
    /// The map engine uses a crs that cannot be converted into geographic coordinates.
    #[error("map crs does not support conversion into geographic coordinates")]
    UnsupportedCrs,
    /// A coordinate could not be converted between projected and geographic space.
    #[error("failed to convert coordinates between projected and geographic space")]
    Projection,
    /// A text mode command was not recognized.
    #[error("unknown drawing command: {0}")]
    UnknownCommand(String),
    /// The map engine failed to render a layer.
    #[error("render error: {0}")]
    Render(String),
}
