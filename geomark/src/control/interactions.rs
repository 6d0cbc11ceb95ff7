use crate::engine::{Interaction, InteractionHandle, MapEngine};
use crate::error::GeomarkError;
use crate::shape::GeometryKind;
use log::debug;

/// Handles of the interactions currently attached to a map engine.
///
/// At most one draw interaction is attached at any time.
#[derive(Debug, Default, Clone)]
pub struct AttachedInteractions {
    draw: Option<(InteractionHandle, GeometryKind)>,
    modify: Option<InteractionHandle>,
    snap: Option<InteractionHandle>,
}

impl AttachedInteractions {
    /// Attaches a draw interaction for the given geometry kind.
    ///
    /// Fails with [`GeomarkError::DrawInteractionAttached`] if a draw interaction is already attached.
    pub fn attach_draw(
        &mut self,
        engine: &mut impl MapEngine,
        kind: GeometryKind,
    ) -> Result<InteractionHandle, GeomarkError> {
        if self.draw.is_some() {
            return Err(GeomarkError::DrawInteractionAttached);
        }

        let handle = engine.attach_interaction(Interaction::Draw { kind });
        debug!("attached {kind:?} draw interaction {handle:?}");
        self.draw = Some((handle, kind));

        Ok(handle)
    }

    /// Attaches modify and snap interactions, replacing the ones attached before.
    pub fn attach_editing(
        &mut self,
        engine: &mut impl MapEngine,
        modify_tolerance: f64,
        snap_tolerance: f64,
    ) {
        self.detach_editing(engine);

        let modify = engine.attach_interaction(Interaction::Modify {
            pixel_tolerance: modify_tolerance,
        });
        let snap = engine.attach_interaction(Interaction::Snap {
            pixel_tolerance: snap_tolerance,
        });
        debug!("attached modify interaction {modify:?} and snap interaction {snap:?}");

        self.modify = Some(modify);
        self.snap = Some(snap);
    }

    /// Detaches the draw interaction, if any.
    pub fn detach_draw(&mut self, engine: &mut impl MapEngine) {
        if let Some((handle, _)) = self.draw.take() {
            engine.detach_interaction(handle);
        }
    }

    fn detach_editing(&mut self, engine: &mut impl MapEngine) {
        for handle in [self.modify.take(), self.snap.take()].into_iter().flatten() {
            engine.detach_interaction(handle);
        }
    }

    /// Detaches all attached interactions.
    pub fn detach_all(&mut self, engine: &mut impl MapEngine) {
        self.detach_draw(engine);
        self.detach_editing(engine);
    }

    /// Handle and geometry kind of the attached draw interaction.
    pub fn draw(&self) -> Option<(InteractionHandle, GeometryKind)> {
        self.draw
    }

    /// Handle of the attached modify interaction.
    pub fn modify(&self) -> Option<InteractionHandle> {
        self.modify
    }

    /// Handle of the attached snap interaction.
    pub fn snap(&self) -> Option<InteractionHandle> {
        self.snap
    }

    /// Whether `handle` is the attached draw interaction.
    pub fn is_current_draw(&self, handle: InteractionHandle) -> bool {
        matches!(self.draw, Some((current, _)) if current == handle)
    }

    /// Whether `handle` is the attached modify interaction.
    pub fn is_current_modify(&self, handle: InteractionHandle) -> bool {
        self.modify == Some(handle)
    }

    /// Whether no interaction is attached.
    pub fn is_empty(&self) -> bool {
        self.draw.is_none() && self.modify.is_none() && self.snap.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::RecordingEngine;
    use assert_matches::assert_matches;

    #[test]
    fn second_draw_interaction_is_rejected() {
        let mut engine = RecordingEngine::new();
        let mut interactions = AttachedInteractions::default();

        interactions
            .attach_draw(&mut engine, GeometryKind::Point)
            .expect("first draw interaction");
        assert_matches!(
            interactions.attach_draw(&mut engine, GeometryKind::Polygon),
            Err(GeomarkError::DrawInteractionAttached)
        );
        assert_eq!(engine.attached_draw_kinds(), vec![GeometryKind::Point]);
    }

    #[test]
    fn detach_all() {
        let mut engine = RecordingEngine::new();
        let mut interactions = AttachedInteractions::default();

        let draw = interactions
            .attach_draw(&mut engine, GeometryKind::LineString)
            .expect("draw interaction");
        interactions.attach_editing(&mut engine, 10.0, 10.0);
        assert!(interactions.is_current_draw(draw));
        assert_eq!(engine.attached().len(), 3);

        interactions.detach_all(&mut engine);
        assert!(interactions.is_empty());
        assert!(!interactions.is_current_draw(draw));
        assert!(engine.attached().is_empty());
    }

    #[test]
    fn editing_is_replaced() {
        let mut engine = RecordingEngine::new();
        let mut interactions = AttachedInteractions::default();

        interactions.attach_editing(&mut engine, 10.0, 10.0);
        let first_modify = interactions.modify().expect("modify attached");
        interactions.attach_editing(&mut engine, 5.0, 5.0);

        assert!(!interactions.is_current_modify(first_modify));
        assert_eq!(engine.attached().len(), 2);
    }
}
