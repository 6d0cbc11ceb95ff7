//! In-memory map engine that records what the drawing core asks of it and replays scripted user gestures.

use crate::engine::{
    Interaction, InteractionHandle, MapEngine, MapEvent, MapView, TileLayer, VectorLayer,
};
use crate::error::GeomarkError;
use crate::shape::GeometryKind;
use crate::store::{FeatureId, FeatureUpdate};
use geomark_types::cartesian::Point2d;
use geomark_types::geo::impls::projection::WebMercator;
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::{Crs, Projection};
use geomark_types::Geom;
use std::collections::VecDeque;

/// Call made by the drawing core to a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    /// View was set.
    SetView(MapView),
    /// Tile layer was rendered.
    RenderTileLayer(TileLayer),
    /// Vector layer was rendered.
    RenderVectorLayer {
        /// Number of features in the layer.
        feature_count: usize,
        /// Changed features.
        updates: Vec<FeatureUpdate>,
    },
    /// Interaction was attached.
    Attach(InteractionHandle, Interaction),
    /// Interaction was detached.
    Detach(InteractionHandle),
}

/// Map engine without a screen.
///
/// Gestures are queued with [`RecordingEngine::click`], [`RecordingEngine::draw`] and [`RecordingEngine::modify`]
/// in geographic coordinates and delivered as projected [`MapEvent`]s, the way a real engine running the attached
/// interactions would report them.
pub struct RecordingEngine {
    crs: Crs,
    projection: WebMercator<GeoPoint2d, Point2d>,
    next_handle: u64,
    attached: Vec<(InteractionHandle, Interaction)>,
    max_attached_draws: usize,
    events: VecDeque<MapEvent>,
    calls: Vec<EngineCall>,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingEngine {
    /// Creates an engine using Web Mercator.
    pub fn new() -> Self {
        Self {
            crs: Crs::EPSG3857,
            projection: WebMercator::default(),
            next_handle: 1,
            attached: vec![],
            max_attached_draws: 0,
            events: VecDeque::new(),
            calls: vec![],
        }
    }

    /// Sets the crs reported by the engine.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = crs;
        self
    }

    /// Projects a geographic point into the engine's plane.
    ///
    /// # Panics
    ///
    /// Panics if the point cannot be projected.
    pub fn project(&self, point: &GeoPoint2d) -> Point2d {
        self.projection
            .project(point)
            .expect("point cannot be projected")
    }

    /// Queues an event as is.
    pub fn push_event(&mut self, event: MapEvent) {
        self.events.push_back(event);
    }

    /// Clicks the base map at `point`. If a point draw interaction is attached, it finishes a point there first.
    pub fn click(&mut self, point: GeoPoint2d) {
        let position = self.project(&point);
        if let Some((handle, GeometryKind::Point)) = self.attached_draw() {
            self.push_event(MapEvent::DrawEnd {
                interaction: handle,
                geometry: Geom::Point(position),
            });
        }

        self.push_event(MapEvent::Click {
            position,
            hit_feature: None,
        });
    }

    /// Finishes drawing `geometry` with the attached draw interaction. Returns false if there is no draw
    /// interaction to draw with.
    pub fn draw(&mut self, geometry: Geom<GeoPoint2d>) -> bool {
        let Some((handle, _)) = self.attached_draw() else {
            return false;
        };

        let geometry = self.project_geom(&geometry);
        self.push_event(MapEvent::DrawEnd {
            interaction: handle,
            geometry,
        });

        true
    }

    /// Finishes editing `features` with the attached modify interaction. Returns false if there is no modify
    /// interaction.
    pub fn modify(&mut self, features: Vec<(FeatureId, Geom<GeoPoint2d>)>) -> bool {
        let Some(handle) = self.attached_handle(|i| matches!(i, Interaction::Modify { .. })) else {
            return false;
        };

        let features = features
            .into_iter()
            .map(|(id, geometry)| (id, self.project_geom(&geometry)))
            .collect();
        self.push_event(MapEvent::ModifyEnd {
            interaction: handle,
            features,
        });

        true
    }

    /// Calls made to the engine, in order.
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Currently attached interactions.
    pub fn attached(&self) -> &[(InteractionHandle, Interaction)] {
        &self.attached
    }

    /// Geometry kinds of the currently attached draw interactions.
    pub fn attached_draw_kinds(&self) -> Vec<GeometryKind> {
        self.attached
            .iter()
            .filter_map(|(_, interaction)| match interaction {
                Interaction::Draw { kind } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    /// Largest number of draw interactions that were attached at the same time.
    pub fn max_attached_draws(&self) -> usize {
        self.max_attached_draws
    }

    /// Number of events not yet polled.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn attached_draw(&self) -> Option<(InteractionHandle, GeometryKind)> {
        self.attached.iter().find_map(|(handle, interaction)| match interaction {
            Interaction::Draw { kind } => Some((*handle, *kind)),
            _ => None,
        })
    }

    fn attached_handle(&self, predicate: impl Fn(&Interaction) -> bool) -> Option<InteractionHandle> {
        self.attached
            .iter()
            .find(|(_, interaction)| predicate(interaction))
            .map(|(handle, _)| *handle)
    }

    fn project_geom(&self, geometry: &Geom<GeoPoint2d>) -> Geom<Point2d> {
        geometry
            .project(&self.projection)
            .expect("geometry cannot be projected")
    }
}

impl MapEngine for RecordingEngine {
    fn crs(&self) -> Crs {
        self.crs.clone()
    }

    fn set_view(&mut self, view: &MapView) {
        self.calls.push(EngineCall::SetView(*view));
    }

    fn render_tile_layer(&mut self, layer: &TileLayer) -> Result<(), GeomarkError> {
        self.calls.push(EngineCall::RenderTileLayer(layer.clone()));
        Ok(())
    }

    fn render_vector_layer(&mut self, layer: VectorLayer<'_>) -> Result<(), GeomarkError> {
        self.calls.push(EngineCall::RenderVectorLayer {
            feature_count: layer.features.len(),
            updates: layer.updates.to_vec(),
        });
        Ok(())
    }

    fn attach_interaction(&mut self, interaction: Interaction) -> InteractionHandle {
        let handle = InteractionHandle::new(self.next_handle);
        self.next_handle += 1;

        self.attached.push((handle, interaction));
        self.calls.push(EngineCall::Attach(handle, interaction));
        self.max_attached_draws = self.max_attached_draws.max(self.attached_draw_kinds().len());

        handle
    }

    fn detach_interaction(&mut self, handle: InteractionHandle) {
        self.attached.retain(|(attached, _)| *attached != handle);
        self.calls.push(EngineCall::Detach(handle));
    }

    fn poll_event(&mut self) -> Option<MapEvent> {
        self.events.pop_front()
    }
}
