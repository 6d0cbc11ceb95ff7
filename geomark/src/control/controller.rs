use crate::config::ControllerConfiguration;
use crate::control::{AttachedInteractions, EventPropagation};
use crate::display::{DisplayMessenger, DisplayState};
use crate::engine::{InteractionHandle, MapEngine, MapEvent, VectorLayer};
use crate::error::GeomarkError;
use crate::measure::{measure, Measurement};
use crate::mode::{DrawingMode, DrawingModeMachine, DrawingState, ModeCommand};
use crate::shape::Shape;
use crate::store::{FeatureId, ShapeStore};
use geomark_types::cartesian::Point2d;
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::{GeoPoint, Projection};
use geomark_types::Geom;
use log::{debug, error, info, warn};

/// Drawing tool bound to one map.
///
/// The controller is created with [`InteractionController::mount`] when the map is shown and torn down with
/// [`InteractionController::unmount`]. It owns all state of the tool (pinpoint, drawing mode, drawn shapes and the
/// latest measurement), so any number of maps can have their own controllers.
///
/// All methods run to completion synchronously. Events must be given to the controller in the order the engine
/// delivered them.
pub struct InteractionController<E: MapEngine> {
    engine: E,
    projection: Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>>,
    config: ControllerConfiguration,
    store: ShapeStore,
    modes: DrawingModeMachine,
    interactions: AttachedInteractions,
    measurement: Option<Measurement>,
    messenger: Option<Box<dyn DisplayMessenger>>,
}

impl<E: MapEngine> InteractionController<E> {
    /// Sets up the map: renders the base and vector layers, places the pinpoint marker and attaches the draw, modify
    /// and snap interactions.
    pub fn mount(engine: E, config: ControllerConfiguration) -> Result<Self, GeomarkError> {
        let projection = engine
            .crs()
            .get_projection::<GeoPoint2d, Point2d>()
            .ok_or(GeomarkError::UnsupportedCrs)?;

        let mut controller = Self {
            engine,
            projection,
            store: ShapeStore::seed(config.initial_pinpoint()),
            config,
            modes: DrawingModeMachine::default(),
            interactions: AttachedInteractions::default(),
            measurement: None,
            messenger: None,
        };

        controller.engine.set_view(controller.config.view());
        controller
            .engine
            .render_tile_layer(controller.config.tile_layer())?;
        controller.render_pending()?;
        controller.attach_interactions()?;

        info!(
            "drawing tool mounted, pinpoint at ({}, {})",
            controller.store.pinpoint().lon(),
            controller.store.pinpoint().lat()
        );

        Ok(controller)
    }

    /// Detaches all interactions and returns the engine.
    pub fn unmount(mut self) -> E {
        self.interactions.detach_all(&mut self.engine);
        info!("drawing tool unmounted with {} features", self.store.len());

        self.engine
    }

    /// Sets the messenger notified about display changes.
    pub fn set_messenger(&mut self, messenger: Option<impl DisplayMessenger + 'static>) {
        self.messenger = messenger.map(|m| Box::new(m) as Box<dyn DisplayMessenger>);
    }

    /// Selects a drawing mode. Selecting the current mode does nothing.
    ///
    /// On a change all interactions are detached and attached again for the new mode. A draw gesture in progress is
    /// cancelled.
    pub fn select_mode(&mut self, mode: DrawingMode) -> Result<(), GeomarkError> {
        let Some(transition) = self.modes.select(mode) else {
            debug!("drawing mode {mode:?} is already selected");
            return Ok(());
        };

        info!(
            "drawing mode changed: {} -> {}",
            DrawingState::from(transition.from),
            DrawingState::from(transition.to)
        );

        self.interactions.detach_all(&mut self.engine);
        self.attach_interactions()?;
        self.notify_display();

        Ok(())
    }

    /// Applies a user mode command.
    pub fn apply_command(&mut self, command: ModeCommand) -> Result<(), GeomarkError> {
        self.select_mode(command.into())
    }

    /// Handles all pending events of the engine in delivery order. Returns the number of handled events.
    ///
    /// Stops at the first event that fails.
    pub fn process_events(&mut self) -> Result<usize, GeomarkError> {
        let mut count = 0;
        while let Some(event) = self.engine.poll_event() {
            self.handle_event(event)?;
            count += 1;
        }

        Ok(count)
    }

    /// Handles one map event.
    pub fn handle_event(&mut self, event: MapEvent) -> Result<EventPropagation, GeomarkError> {
        let propagation = match event {
            MapEvent::Click {
                hit_feature: Some(feature_id),
                ..
            } => {
                debug!("click on feature {feature_id} is left to other handlers");
                EventPropagation::Propagate
            }
            MapEvent::Click {
                position,
                hit_feature: None,
            } => self.on_click(position)?,
            MapEvent::DrawEnd {
                interaction,
                geometry,
            } => self.on_draw_end(interaction, &geometry)?,
            MapEvent::ModifyEnd {
                interaction,
                features,
            } => self.on_modify_end(interaction, features)?,
        };

        self.render_pending()?;
        Ok(propagation)
    }

    /// Current pinpoint.
    pub fn pinpoint(&self) -> GeoPoint2d {
        self.store.pinpoint()
    }

    /// Current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.modes.mode()
    }

    /// Current state of the drawing tool.
    pub fn state(&self) -> DrawingState {
        self.modes.state()
    }

    /// Label of the current drawing mode.
    pub fn mode_label(&self) -> &'static str {
        self.modes.mode().label()
    }

    /// Latest measurement.
    pub fn measurement(&self) -> Option<Measurement> {
        self.measurement
    }

    /// Latest measurement as text, or a placeholder if nothing has been measured yet.
    pub fn measurement_text(&self) -> String {
        self.display().measurement_text()
    }

    /// Snapshot of the values shown to the user.
    pub fn display(&self) -> DisplayState {
        DisplayState {
            mode_label: self.mode_label(),
            measurement: self.measurement,
        }
    }

    /// Drawn features.
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// Interactions currently attached to the engine.
    pub fn interactions(&self) -> &AttachedInteractions {
        &self.interactions
    }

    /// Configuration the controller was mounted with.
    pub fn config(&self) -> &ControllerConfiguration {
        &self.config
    }

    /// Map engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Map engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    fn on_click(&mut self, position: Point2d) -> Result<EventPropagation, GeomarkError> {
        let pinpoint = self
            .projection
            .unproject(&position)
            .ok_or(GeomarkError::Projection)?;

        if self.store.set_pinpoint(pinpoint) {
            debug!("pinpoint moved to ({}, {})", pinpoint.lon(), pinpoint.lat());
        }

        Ok(EventPropagation::Stop)
    }

    fn on_draw_end(
        &mut self,
        interaction: InteractionHandle,
        geometry: &Geom<Point2d>,
    ) -> Result<EventPropagation, GeomarkError> {
        if !self.interactions.is_current_draw(interaction) {
            debug!("ignoring draw end of detached interaction {interaction:?}");
            return Ok(EventPropagation::Propagate);
        }

        let shape = self.to_shape(geometry)?;
        if self.modes.draw_kind() != Some(shape.kind()) {
            warn!(
                "draw interaction for {:?} produced a {:?}",
                self.modes.draw_kind(),
                shape.kind()
            );
        }

        let feature = self.store.add_feature(shape);
        debug!("feature {} ({}) drawn", feature.id(), feature.name());
        let measurement = measure(feature.geometry());
        self.set_measurement(measurement);

        Ok(EventPropagation::Stop)
    }

    fn on_modify_end(
        &mut self,
        interaction: InteractionHandle,
        features: Vec<(FeatureId, Geom<Point2d>)>,
    ) -> Result<EventPropagation, GeomarkError> {
        if !self.interactions.is_current_modify(interaction) {
            debug!("ignoring modify end of detached interaction {interaction:?}");
            return Ok(EventPropagation::Propagate);
        }

        let modified_count = features.len();
        let Some((feature_id, geometry)) = features.into_iter().next() else {
            debug!("modify end without features");
            return Ok(EventPropagation::Propagate);
        };

        if modified_count > 1 {
            debug!("{modified_count} features modified, measuring only {feature_id}");
        }

        let shape = self.to_shape(&geometry)?;
        let feature = self.store.replace_geometry(feature_id, shape)?;
        let measurement = measure(feature.geometry());
        self.set_measurement(measurement);

        Ok(EventPropagation::Stop)
    }

    fn to_shape(&self, geometry: &Geom<Point2d>) -> Result<Shape, GeomarkError> {
        Shape::from_projected(geometry, self.projection.as_ref()).inspect_err(|err| {
            error!("rejected {} geometry: {err}", geometry.type_name());
        })
    }

    fn attach_interactions(&mut self) -> Result<(), GeomarkError> {
        if let Some(kind) = self.modes.draw_kind() {
            self.interactions.attach_draw(&mut self.engine, kind)?;
        }

        self.interactions.attach_editing(
            &mut self.engine,
            self.config.modify_tolerance(),
            self.config.snap_tolerance(),
        );

        Ok(())
    }

    fn set_measurement(&mut self, measurement: Measurement) {
        debug!("measured {measurement}");
        self.measurement = Some(measurement);
        self.notify_display();
    }

    fn notify_display(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.display_changed(&self.display());
        }
    }

    fn render_pending(&mut self) -> Result<(), GeomarkError> {
        let updates = self.store.drain_updates();
        if updates.is_empty() {
            return Ok(());
        }

        self.engine.render_vector_layer(VectorLayer {
            features: self.store.features(),
            updates: &updates,
        })
    }
}
