//! Pointer move handling - the per-axis resolution pass.

use super::state::InteractionState;
use super::PointerEvent;
use crate::brush::MultiBrush;
use crate::clamp::{BoundInput, resolve_bound};
use crate::error::BrushResult;
use crate::events::BrushEventKind;
use crate::profile_scope;
use crate::render::RenderAdapter;
use crate::types::{Axis, AxisPair};
use tracing::trace;

impl<R: RenderAdapter> MultiBrush<R> {
    /// Update the active region from the pointer. Does nothing when idle.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        profile_scope!("pointer_move");

        if self.state.is_idle() {
            return;
        }
        if let Err(e) = self.resolve_move(event) {
            self.abandon_session(&e.to_string());
            self.render_frame();
        }
    }

    /// Resolve every implicated axis in X-then-Y order, then render and
    /// notify once if anything moved. Returns whether the region changed.
    pub(crate) fn resolve_move(&mut self, event: PointerEvent) -> BrushResult<bool> {
        let Some(mut session) = self.state.session().copied() else {
            return Ok(false);
        };
        let region = *self.store.region(session.index)?;

        let mut point = AxisPair::from(event.position);
        if let Some(offset) = session.offset {
            point.x += offset.x;
            point.y += offset.y;
        }

        if !session.drag.is_dragging() {
            if event.modifiers.center {
                let center = *session.center.get_or_insert_with(|| {
                    AxisPair::new(region.pixels(Axis::X).center(), region.pixels(Axis::Y).center())
                });
                for axis in Axis::ALL {
                    session.origin[axis] = region.pixels(axis).bound(point[axis] < center[axis]);
                }
            } else {
                session.center = None;
            }
        }

        let mut moved = false;
        for axis in Axis::ALL {
            if !session.axes[axis] {
                continue;
            }
            let Some(scale) = &self.scales[axis] else {
                continue;
            };
            let resolution = resolve_bound(&BoundInput {
                pointer: point[axis],
                range: scale.range_extent(),
                dragging: session.drag.is_dragging(),
                clamp: self.clamp[axis],
                position: session.origin[axis],
                grab: session.grab[axis],
                current: region.pixels(axis),
                center: session.center.map(|c| c[axis]),
            });
            if resolution.changed {
                self.store
                    .set_axis_extent(axis, session.index, resolution.low, resolution.high)?;
                moved = true;
            }
        }

        session.pointer = point;
        self.state = InteractionState::Active(session);
        if moved {
            trace!(index = session.index, "Brush region moved");
            self.render_frame();
            self.emit(BrushEventKind::Change {
                mode: session.change_mode(),
            });
        }
        Ok(moved)
    }
}
