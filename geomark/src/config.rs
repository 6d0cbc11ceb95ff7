use crate::engine::{MapView, TileLayer};
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::latlon;

const DEFAULT_PIXEL_TOLERANCE: f64 = 10.0;
const DEFAULT_ZOOM: f64 = 4.0;

/// Configuration of an [`InteractionController`](crate::control::InteractionController).
#[derive(Clone, PartialEq, Debug)]
pub struct ControllerConfiguration {
    initial_pinpoint: GeoPoint2d,
    view: MapView,
    tile_layer: TileLayer,
    modify_tolerance: f64,
    snap_tolerance: f64,
}

impl Default for ControllerConfiguration {
    fn default() -> Self {
        Self {
            initial_pinpoint: latlon!(0.0, 0.0),
            view: MapView {
                center: latlon!(40.0, -100.0),
                zoom: DEFAULT_ZOOM,
            },
            tile_layer: TileLayer::osm(),
            modify_tolerance: DEFAULT_PIXEL_TOLERANCE,
            snap_tolerance: DEFAULT_PIXEL_TOLERANCE,
        }
    }
}

impl ControllerConfiguration {
    /// Position of the pinpoint marker when the map is mounted.
    pub fn initial_pinpoint(&self) -> GeoPoint2d {
        self.initial_pinpoint
    }

    /// Sets position of the pinpoint marker when the map is mounted.
    pub fn with_initial_pinpoint(mut self, pinpoint: GeoPoint2d) -> Self {
        self.initial_pinpoint = pinpoint;
        self
    }

    /// Sets position of the pinpoint marker when the map is mounted.
    pub fn set_initial_pinpoint(&mut self, pinpoint: GeoPoint2d) {
        self.initial_pinpoint = pinpoint;
    }

    /// View the map shows when it is mounted.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Sets the view the map shows when it is mounted.
    pub fn with_view(mut self, view: MapView) -> Self {
        self.view = view;
        self
    }

    /// Sets the view the map shows when it is mounted.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
    }

    /// Base tile layer.
    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    /// Sets the base tile layer.
    pub fn with_tile_layer(mut self, tile_layer: TileLayer) -> Self {
        self.tile_layer = tile_layer;
        self
    }

    /// Sets the base tile layer.
    pub fn set_tile_layer(&mut self, tile_layer: TileLayer) {
        self.tile_layer = tile_layer;
    }

    /// Distance in pixels within which the modify interaction grabs a vertex.
    pub fn modify_tolerance(&self) -> f64 {
        self.modify_tolerance
    }

    /// Sets distance in pixels within which the modify interaction grabs a vertex.
    pub fn with_modify_tolerance(mut self, pixels: f64) -> Self {
        self.modify_tolerance = pixels;
        self
    }

    /// Sets distance in pixels within which the modify interaction grabs a vertex.
    pub fn set_modify_tolerance(&mut self, pixels: f64) {
        self.modify_tolerance = pixels;
    }

    /// Distance in pixels within which vertices are snapped to existing ones.
    pub fn snap_tolerance(&self) -> f64 {
        self.snap_tolerance
    }

    /// Sets distance in pixels within which vertices are snapped to existing ones.
    pub fn with_snap_tolerance(mut self, pixels: f64) -> Self {
        self.snap_tolerance = pixels;
        self
    }

    /// Sets distance in pixels within which vertices are snapped to existing ones.
    pub fn set_snap_tolerance(&mut self, pixels: f64) {
        self.snap_tolerance = pixels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomark_types::geo::GeoPoint;

    #[test]
    fn defaults() {
        let config = ControllerConfiguration::default();
        assert_eq!(config.initial_pinpoint(), latlon!(0.0, 0.0));
        assert_eq!(config.view().center.lat(), 40.0);
        assert_eq!(config.view().center.lon(), -100.0);
        assert_eq!(config.view().zoom, 4.0);
        assert_eq!(
            config.tile_layer().url_template,
            "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
        assert_eq!(config.tile_layer().max_zoom, 19);
        assert_eq!(config.snap_tolerance(), 10.0);
    }

    #[test]
    fn builder() {
        let config = ControllerConfiguration::default()
            .with_initial_pinpoint(latlon!(1.0, 2.0))
            .with_snap_tolerance(4.0);
        assert_eq!(config.initial_pinpoint(), latlon!(1.0, 2.0));
        assert_eq!(config.snap_tolerance(), 4.0);
        assert_eq!(config.modify_tolerance(), 10.0);
    }
}
