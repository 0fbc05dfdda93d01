//! Drag toggle key - holding it during a create or resize translates the
//! region instead.

use super::state::DragState;
use crate::brush::MultiBrush;
use crate::render::RenderAdapter;
use crate::types::Axis;
use tracing::trace;

impl<R: RenderAdapter> MultiBrush<R> {
    pub fn key_down(&mut self, key_code: u32) {
        if key_code != self.settings.drag_toggle_key {
            return;
        }
        let Some(session) = self.state.session_mut() else {
            return;
        };
        if session.drag != DragState::Off {
            return;
        }
        let Ok(region) = self.store.region(session.index) else {
            return;
        };
        // Translate from where the region and pointer are now.
        for axis in Axis::ALL {
            session.origin[axis] = region.pixels(axis).low();
        }
        session.grab = session.pointer;
        session.center = None;
        session.drag = DragState::Toggled;
        trace!(index = session.index, "Drag toggle on");
    }

    pub fn key_up(&mut self, key_code: u32) {
        if key_code != self.settings.drag_toggle_key {
            return;
        }
        let Some(session) = self.state.session_mut() else {
            return;
        };
        if session.drag != DragState::Toggled {
            return;
        }
        let Ok(region) = self.store.region(session.index) else {
            return;
        };
        // The fixed corner sits at the drag offset from the high edge.
        for axis in Axis::ALL {
            session.origin[axis] += region.pixels(axis).high() - session.grab[axis];
        }
        session.drag = DragState::Off;
        trace!(index = session.index, "Drag toggle off");
    }
}
