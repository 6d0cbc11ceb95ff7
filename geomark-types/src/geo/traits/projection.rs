/// Conversion between two coordinate spaces.
pub trait Projection {
    /// Point type of the source space.
    type InPoint;
    /// Point type of the target space.
    type OutPoint;

    /// Converts a point into the target space. Returns `None` if the point cannot be projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point back into the source space. Returns `None` if the point cannot be unprojected.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
