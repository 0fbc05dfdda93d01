//! Pointer down handling - classify the target and start a session.

use super::state::{DragState, InteractionState, Session, SessionMode};
use super::PointerEvent;
use crate::brush::MultiBrush;
use crate::error::BrushResult;
use crate::events::BrushEventKind;
use crate::profile_scope;
use crate::render::{HitTarget, RenderAdapter};
use crate::types::{Axis, AxisPair};
use tracing::{debug, warn};

impl<R: RenderAdapter> MultiBrush<R> {
    /// Start a gesture at `event.position`.
    ///
    /// Ignored while another gesture is active or when no axis is bound.
    /// Fails if the renderer reports a region index the store does not hold.
    pub fn pointer_down(&mut self, event: PointerEvent) -> BrushResult<()> {
        profile_scope!("pointer_down");

        if let Some(session) = self.state.session() {
            warn!(active = session.index, "Pointer down during an active brush session; ignoring");
            return Ok(());
        }
        let bound = self.bound();
        if !bound.x && !bound.y {
            debug!("Pointer down with no bound axis; ignoring");
            return Ok(());
        }

        let position = event.position;
        let pointer = AxisPair::from(position);
        let session = match self.renderer.classify(position) {
            HitTarget::Region(index) => {
                let region = self.store.region(index)?;
                Session {
                    mode: SessionMode::Drag,
                    index,
                    axes: bound,
                    origin: AxisPair::new(region.pixels(Axis::X).low(), region.pixels(Axis::Y).low()),
                    grab: pointer,
                    pointer,
                    offset: None,
                    center: None,
                    drag: DragState::Body,
                }
            }
            HitTarget::Handle { index, handle } => {
                let region = self.store.region(index)?;
                let mut origin = AxisPair::default();
                let mut offset = AxisPair::default();
                for axis in Axis::ALL {
                    let span = region.pixels(axis);
                    let anchors_high = handle.anchors_high(axis);
                    origin[axis] = span.bound(anchors_high);
                    // Grabbing a thick handle off-edge must not make the edge jump.
                    offset[axis] = span.bound(!anchors_high) - position[axis];
                }
                Session {
                    mode: SessionMode::Resize(handle),
                    index,
                    axes: AxisPair::new(bound.x && handle.moves(Axis::X), bound.y && handle.moves(Axis::Y)),
                    origin,
                    grab: AxisPair::default(),
                    pointer,
                    offset: Some(offset),
                    center: None,
                    drag: DragState::Off,
                }
            }
            HitTarget::Background => {
                let index = self.store.create_region();
                Session {
                    mode: SessionMode::Create,
                    index,
                    axes: bound,
                    origin: pointer,
                    grab: AxisPair::default(),
                    pointer,
                    offset: None,
                    center: event.modifiers.center.then_some(pointer),
                    drag: DragState::Off,
                }
            }
        };

        debug!(index = session.index, mode = ?session.mode, "Brush session started");
        self.state = InteractionState::Active(session);
        self.render_frame();
        self.emit(BrushEventKind::Start);
        self.resolve_move(event)?;
        Ok(())
    }
}
