//! Drawing modes and the state machine that switches between them.

use crate::error::GeomarkError;
use crate::shape::GeometryKind;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Shape type the user has chosen to draw, or `None` when drawing is stopped.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum DrawingMode {
    /// Drawing is stopped. Existing shapes can still be modified.
    None,
    /// Draw points.
    #[default]
    Point,
    /// Draw line strings.
    LineString,
    /// Draw polygons.
    Polygon,
}

impl DrawingMode {
    /// Geometry kind produced in this mode.
    pub fn geometry_kind(&self) -> Option<GeometryKind> {
        match self {
            DrawingMode::None => None,
            DrawingMode::Point => Some(GeometryKind::Point),
            DrawingMode::LineString => Some(GeometryKind::LineString),
            DrawingMode::Polygon => Some(GeometryKind::Polygon),
        }
    }

    /// Label shown to the user for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            DrawingMode::None => "",
            DrawingMode::Point => "Point",
            DrawingMode::LineString => "Line",
            DrawingMode::Polygon => "Polygon",
        }
    }
}

/// Mode selection command. These four commands are the whole control surface of the drawing tool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModeCommand {
    /// Draw points.
    Point,
    /// Draw line strings.
    LineString,
    /// Draw polygons.
    Polygon,
    /// Stop drawing.
    Stop,
}

impl From<ModeCommand> for DrawingMode {
    fn from(value: ModeCommand) -> Self {
        match value {
            ModeCommand::Point => DrawingMode::Point,
            ModeCommand::LineString => DrawingMode::LineString,
            ModeCommand::Polygon => DrawingMode::Polygon,
            ModeCommand::Stop => DrawingMode::None,
        }
    }
}

impl FromStr for ModeCommand {
    type Err = GeomarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(ModeCommand::Point),
            "LineString" => Ok(ModeCommand::LineString),
            "Polygon" => Ok(ModeCommand::Polygon),
            "Stop" => Ok(ModeCommand::Stop),
            other => Err(GeomarkError::UnknownCommand(other.to_string())),
        }
    }
}

/// State of the drawing tool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawingState {
    /// No draw interaction is attached.
    Idle,
    /// Points are being drawn.
    DrawingPoint,
    /// Lines are being drawn.
    DrawingLine,
    /// Polygons are being drawn.
    DrawingPolygon,
}

impl From<DrawingMode> for DrawingState {
    fn from(value: DrawingMode) -> Self {
        match value {
            DrawingMode::None => DrawingState::Idle,
            DrawingMode::Point => DrawingState::DrawingPoint,
            DrawingMode::LineString => DrawingState::DrawingLine,
            DrawingMode::Polygon => DrawingState::DrawingPolygon,
        }
    }
}

impl Display for DrawingState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DrawingState::Idle => "idle",
            DrawingState::DrawingPoint => "drawing point",
            DrawingState::DrawingLine => "drawing line",
            DrawingState::DrawingPolygon => "drawing polygon",
        };
        f.write_str(name)
    }
}

/// Change of the drawing mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ModeTransition {
    /// Mode before the change.
    pub from: DrawingMode,
    /// Mode after the change.
    pub to: DrawingMode,
}

/// Tracks the current drawing mode. Transitions happen only on explicit selection and the machine never terminates.
#[derive(Debug, Default, Clone)]
pub struct DrawingModeMachine {
    mode: DrawingMode,
}

impl DrawingModeMachine {
    /// Current mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Current state.
    pub fn state(&self) -> DrawingState {
        self.mode.into()
    }

    /// Geometry kind the draw interaction must produce, or `None` if no draw interaction should be attached.
    pub fn draw_kind(&self) -> Option<GeometryKind> {
        self.mode.geometry_kind()
    }

    /// Selects a mode. Returns `None` if the mode is already selected.
    pub fn select(&mut self, mode: DrawingMode) -> Option<ModeTransition> {
        if self.mode == mode {
            return None;
        }

        let transition = ModeTransition {
            from: self.mode,
            to: mode,
        };
        self.mode = mode;
        Some(transition)
    }
}
