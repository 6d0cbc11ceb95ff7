//! In-memory store of drawn features.

use crate::error::GeomarkError;
use crate::shape::Shape;
use geomark_types::error::GeomarkTypesError;
use geomark_types::geo::impls::GeoPoint2d;
use std::fmt::{Display, Formatter};

/// Id of a feature in the [`ShapeStore`]. Ids are assigned in drawing order, starting with `0` for the pinpoint
/// marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(usize);

impl FeatureId {
    /// Id of the pinpoint marker feature.
    pub const SEED: FeatureId = FeatureId(0);

    /// Creates an id from its index in the store.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index of the feature in the store.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for FeatureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named shape in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: FeatureId,
    name: String,
    geometry: Shape,
}

impl Feature {
    /// Id of the feature.
    pub fn id(&self) -> FeatureId {
        self.id
    }

    /// Name of the feature.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &Shape {
        &self.geometry
    }
}

/// Change of the store that the vector layer must redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureUpdate {
    /// A feature was added.
    Insert {
        /// Id of the new feature.
        feature_id: FeatureId,
    },
    /// Geometry of a feature was replaced.
    Update {
        /// Id of the changed feature.
        feature_id: FeatureId,
    },
}

/// Ordered collection of features shared by the draw, modify and snap interactions.
///
/// The store always contains the pinpoint marker as its first feature. Features are never removed: the store only
/// grows or has geometries replaced. Every change is recorded as a [`FeatureUpdate`] until it is collected with
/// [`ShapeStore::drain_updates`].
#[derive(Debug, Clone)]
pub struct ShapeStore {
    pinpoint: GeoPoint2d,
    features: Vec<Feature>,
    pending_updates: Vec<FeatureUpdate>,
}

impl ShapeStore {
    /// Name of the pinpoint marker feature.
    pub const PINPOINT_NAME: &'static str = "pinpoint";

    /// Creates a store containing only the pinpoint marker at `coordinate`.
    pub fn seed(coordinate: GeoPoint2d) -> Self {
        Self {
            pinpoint: coordinate,
            features: vec![Feature {
                id: FeatureId::SEED,
                name: Self::PINPOINT_NAME.to_string(),
                geometry: Shape::Point(coordinate),
            }],
            pending_updates: vec![FeatureUpdate::Insert {
                feature_id: FeatureId::SEED,
            }],
        }
    }

    /// Current pinpoint.
    pub fn pinpoint(&self) -> GeoPoint2d {
        self.pinpoint
    }

    /// Moves the pinpoint and its marker to `coordinate`.
    ///
    /// Returns `false` and records no update if the pinpoint is already there.
    pub fn set_pinpoint(&mut self, coordinate: GeoPoint2d) -> bool {
        if self.pinpoint == coordinate {
            return false;
        }

        self.pinpoint = coordinate;
        self.features[FeatureId::SEED.index()].geometry = Shape::Point(coordinate);
        self.pending_updates.push(FeatureUpdate::Update {
            feature_id: FeatureId::SEED,
        });

        true
    }

    /// Appends a newly drawn shape and returns the created feature.
    pub fn add_feature(&mut self, geometry: Shape) -> &Feature {
        let id = FeatureId(self.features.len());
        let name = format!("{}-{}", geometry.kind().short_name(), id.index());
        self.features.push(Feature { id, name, geometry });
        self.pending_updates
            .push(FeatureUpdate::Insert { feature_id: id });

        &self.features[id.index()]
    }

    /// Replaces the geometry of an existing feature, keeping its id and name.
    ///
    /// An edit cannot change the kind of a shape: replacing a geometry with one of another kind fails with
    /// [`GeomarkError::InvalidGeometry`] and leaves the store unchanged. This also keeps the pinpoint marker a point.
    pub fn replace_geometry(
        &mut self,
        feature_id: FeatureId,
        geometry: Shape,
    ) -> Result<&Feature, GeomarkError> {
        let feature = self
            .features
            .get_mut(feature_id.index())
            .ok_or(GeomarkError::FeatureNotFound(feature_id))?;

        if feature.geometry.kind() != geometry.kind() {
            return Err(GeomarkTypesError::Conversion(format!(
                "feature {feature_id} is a {:?} and cannot be replaced with a {:?}",
                feature.geometry.kind(),
                geometry.kind()
            ))
            .into());
        }

        if feature_id == FeatureId::SEED {
            if let Shape::Point(point) = &geometry {
                self.pinpoint = *point;
            }
        }

        feature.geometry = geometry;
        self.pending_updates
            .push(FeatureUpdate::Update { feature_id });

        Ok(feature)
    }

    /// Returns the feature with the given id.
    pub fn get(&self, feature_id: FeatureId) -> Option<&Feature> {
        self.features.get(feature_id.index())
    }

    /// The pinpoint marker feature.
    pub fn seed_feature(&self) -> &Feature {
        &self.features[FeatureId::SEED.index()]
    }

    /// Iterates over the features in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// All features in drawing order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of features, including the pinpoint marker.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Always false: the store contains at least the pinpoint marker.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns and clears the changes recorded since the previous call.
    pub fn drain_updates(&mut self) -> Vec<FeatureUpdate> {
        std::mem::take(&mut self.pending_updates)
    }
}
