//! Interface of the map engine that renders the map and turns pointer gestures into events.
//!
//! The drawing core does not render anything and does not read raw input. A map engine (a GPU renderer, a web map
//! widget, a test double) implements [`MapEngine`]: it renders the tile and vector layers it is given, runs the
//! interactions the core attaches, and reports what the user did as [`MapEvent`]s in the engine's projected
//! coordinates.

use crate::error::GeomarkError;
use crate::shape::GeometryKind;
use crate::store::{Feature, FeatureId, FeatureUpdate};
use geomark_types::cartesian::Point2d;
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::Crs;
use geomark_types::Geom;

/// Capabilities of a map engine used by the drawing core.
pub trait MapEngine {
    /// Crs of the engine's projected plane. Event coordinates are given in this crs.
    fn crs(&self) -> Crs;

    /// Sets the displayed area of the map.
    fn set_view(&mut self, view: &MapView);

    /// Renders the base raster tile layer.
    fn render_tile_layer(&mut self, layer: &TileLayer) -> Result<(), GeomarkError>;

    /// Renders (or re-renders) the vector layer with the drawn features.
    fn render_vector_layer(&mut self, layer: VectorLayer<'_>) -> Result<(), GeomarkError>;

    /// Starts an interaction and returns its handle.
    fn attach_interaction(&mut self, interaction: Interaction) -> InteractionHandle;

    /// Stops the interaction. Events of a detached interaction must not be reported anymore.
    fn detach_interaction(&mut self, handle: InteractionHandle);

    /// Returns the next event in the order the user produced them, or `None` if there are no pending events.
    fn poll_event(&mut self) -> Option<MapEvent>;
}

/// Displayed area of the map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapView {
    /// Geographic center of the view.
    pub center: GeoPoint2d,
    /// Zoom level, where `0` shows the whole world in one tile.
    pub zoom: f64,
}

/// Raster tile layer description.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// Tile url template with `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    /// Maximum zoom level the tile source provides.
    pub max_zoom: u32,
}

impl TileLayer {
    /// OpenStreetMap standard tile layer.
    pub fn osm() -> Self {
        Self {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
        }
    }
}

/// Vector layer contents given to the engine for rendering.
#[derive(Debug, Clone, Copy)]
pub struct VectorLayer<'a> {
    /// All features in drawing order.
    pub features: &'a [Feature],
    /// Features that changed since the previous render.
    pub updates: &'a [FeatureUpdate],
}

/// Live input handler run by the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Interaction {
    /// Converts pointer gestures into a new geometry of the given kind, reported with [`MapEvent::DrawEnd`].
    Draw {
        /// Kind of geometries to draw.
        kind: GeometryKind,
    },
    /// Lets the user drag vertices of existing features, reported with [`MapEvent::ModifyEnd`].
    Modify {
        /// Distance in pixels within which a vertex can be grabbed.
        pixel_tolerance: f64,
    },
    /// Aligns new and moved vertices to existing ones.
    Snap {
        /// Distance in pixels within which a vertex is snapped.
        pixel_tolerance: f64,
    },
}

/// Handle of an attached interaction. Handles are never reused by an engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InteractionHandle(u64);

impl InteractionHandle {
    /// Creates a handle from an engine-specific id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Engine-specific id of the handle.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Something the user did on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Pointer click.
    Click {
        /// Position of the click in the projected plane.
        position: Point2d,
        /// Feature under the pointer, `None` if the click was on the base map.
        hit_feature: Option<FeatureId>,
    },
    /// A draw interaction finished a geometry.
    DrawEnd {
        /// Interaction that produced the geometry.
        interaction: InteractionHandle,
        /// Finished geometry in the projected plane.
        geometry: Geom<Point2d>,
    },
    /// A modify interaction finished changing features.
    ModifyEnd {
        /// Interaction that changed the features.
        interaction: InteractionHandle,
        /// Changed features with their new geometries in the projected plane.
        features: Vec<(FeatureId, Geom<Point2d>)>,
    },
}
