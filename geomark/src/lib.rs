//! Geomark is the core of an interactive map drawing tool. The user marks a point of interest (the pinpoint) by
//! clicking the map, draws points, lines and polygons over it, and sees the length or area of the shape they just
//! drew or edited.
//!
//! # Main components
//!
//! * [`DrawingModeMachine`](mode::DrawingModeMachine) keeps track of which shape type is being drawn, if any.
//! * [`ShapeStore`] holds the pinpoint marker and the drawn features in drawing order.
//! * [`measure`](measure::measure) computes the geodesic length or area of a [`Shape`].
//! * [`InteractionController`](control::InteractionController) ties them together: it attaches draw, modify and snap
//!   interactions to a [`MapEngine`](engine::MapEngine), turns the engine's events into store updates and
//!   measurements, and exposes what the user should see as a [`DisplayState`](display::DisplayState).
//!
//! Rendering, projection details of the backend and input handling belong to the map engine. Everything here is
//! single-threaded and synchronous: each event is handled to completion before the next one.
//!
//! ```
//! use geomark::control::InteractionController;
//! use geomark::mode::ModeCommand;
//! use geomark::tests::RecordingEngine;
//! use geomark::ControllerConfiguration;
//! use geomark_types::{lonlat, Contour, Geom};
//!
//! let mut controller =
//!     InteractionController::mount(RecordingEngine::new(), ControllerConfiguration::default())?;
//! controller.apply_command(ModeCommand::LineString)?;
//!
//! controller
//!     .engine_mut()
//!     .draw(Geom::Contour(Contour::open(vec![lonlat!(0.0, 0.0), lonlat!(0.0, 0.01)])));
//! controller.process_events()?;
//!
//! assert_eq!(controller.measurement_text(), "1111.95 meters");
//! # Ok::<(), geomark::GeomarkError>(())
//! ```

pub mod control;
pub mod display;
pub mod engine;
pub mod error;
pub mod measure;
pub mod mode;
pub mod shape;
pub mod store;

mod config;

#[cfg(any(test, feature = "_tests"))]
#[doc(hidden)]
pub mod tests;

pub use config::ControllerConfiguration;
pub use error::GeomarkError;
pub use measure::{Measurement, MeasurementUnit};
pub use shape::{GeometryKind, Shape};
pub use store::{Feature, FeatureId, ShapeStore};

// Reexport geomark_types
pub use geomark_types;
