//! Binding of user interaction on the map to the drawing tool.
//!
//! Interaction handling is done in several steps:
//! 1. The [`MapEngine`](crate::engine::MapEngine) runs the draw, modify and snap interactions attached by the
//!    [`InteractionController`] and reports the results as [`MapEvent`](crate::engine::MapEvent)s.
//! 2. `InteractionController` takes the events in delivery order, updates the [`ShapeStore`](crate::ShapeStore)
//!    and measures the shape that was just drawn or edited.
//! 3. The new [`DisplayState`](crate::display::DisplayState) is published to the
//!    [`DisplayMessenger`](crate::display::DisplayMessenger), if one is set.
//!
//! Mode changes rebuild the interactions: the previous draw interaction is always detached before the next one is
//! attached, which also cancels a gesture that was in progress.

mod controller;
mod interactions;

pub use controller::InteractionController;
pub use interactions::AttachedInteractions;

/// Value returned by [`InteractionController::handle_event`] to indicate the status of the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventPropagation {
    /// The event was not used by the drawing tool and should be given to the next handler.
    Propagate,
    /// The event was handled and should not be propagated further.
    Stop,
}
