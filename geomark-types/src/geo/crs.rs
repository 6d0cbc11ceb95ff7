use crate::cartesian::NewCartesianPoint2d;
use crate::geo::datum::Datum;
use crate::geo::impls::projection::WebMercator;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Coordinate reference system used by a map engine for its projected plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    datum: Datum,
    projection_type: ProjectionType,
}

/// Projection kind of a [`Crs`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Unknown projection. Coordinates cannot be converted into geographic ones.
    Unknown,
    /// Web Mercator (pseudo-mercator) projection.
    WebMercator,
    /// Projection known only by its name.
    Other(String),
}

impl Crs {
    /// Web Mercator on the WGS84 datum, the standard crs of tiled web maps.
    pub const EPSG3857: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::WebMercator,
    };

    /// Creates a new crs.
    pub fn new(datum: Datum, projection_type: ProjectionType) -> Self {
        Self {
            datum,
            projection_type,
        }
    }

    /// Datum of the crs.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Projection type of the crs.
    pub fn projection_type(&self) -> &ProjectionType {
        &self.projection_type
    }

    /// Returns the projection from geographic coordinates into this crs, or `None` if the projection type is not
    /// supported.
    pub fn get_projection<In, Out>(
        &self,
    ) -> Option<Box<dyn Projection<InPoint = In, OutPoint = Out>>>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        match self.projection_type {
            ProjectionType::WebMercator => Some(Box::new(WebMercator::new(self.datum))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::GeoPoint2d;

    #[test]
    fn projection_by_type() {
        assert!(Crs::EPSG3857
            .get_projection::<GeoPoint2d, Point2d>()
            .is_some());
        assert!(Crs::new(Datum::WGS84, ProjectionType::Unknown)
            .get_projection::<GeoPoint2d, Point2d>()
            .is_none());
    }
}
