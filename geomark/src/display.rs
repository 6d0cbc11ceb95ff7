//! Values shown to the user and the way they are published.

use crate::measure::Measurement;

/// Values shown to the user: the current drawing mode and the latest measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Label of the current drawing mode.
    pub mode_label: &'static str,
    /// Latest measurement, `None` until the first shape is drawn or edited.
    pub measurement: Option<Measurement>,
}

impl DisplayState {
    /// Text shown in place of the measurement before anything has been measured.
    pub const PLACEHOLDER: &'static str = "Area/Length";

    /// Measurement text, or the placeholder if nothing has been measured yet.
    pub fn measurement_text(&self) -> String {
        match &self.measurement {
            Some(measurement) => measurement.to_string(),
            None => Self::PLACEHOLDER.to_string(),
        }
    }
}

/// Receives the display state every time it changes.
pub trait DisplayMessenger {
    /// Called after the mode or the measurement changed.
    fn display_changed(&self, display: &DisplayState);
}

impl<T: Fn(&DisplayState)> DisplayMessenger for T {
    fn display_changed(&self, display: &DisplayState) {
        self(display)
    }
}

/// Messenger that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyMessenger;

impl DisplayMessenger for DummyMessenger {
    fn display_changed(&self, _display: &DisplayState) {}
}
