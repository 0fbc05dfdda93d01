//! Pointer up handling - final pass, discard empty regions, end the session.

use super::PointerEvent;
use crate::brush::MultiBrush;
use crate::events::BrushEventKind;
use crate::profile_scope;
use crate::render::RenderAdapter;
use tracing::{debug, warn};

impl<R: RenderAdapter> MultiBrush<R> {
    /// Finish the gesture. A region left empty on any bound axis is removed.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        profile_scope!("pointer_up");

        if self.state.is_idle() {
            return;
        }
        if let Err(e) = self.resolve_move(event) {
            self.abandon_session(&e.to_string());
            self.render_frame();
            return;
        }

        // The session ends before the discard so the end snapshot has no active index.
        let Some(session) = self.state.take() else {
            return;
        };
        match self.store.is_region_empty(session.index, self.bound()) {
            Ok(true) => match self.store.remove(session.index) {
                Ok(_) => debug!(index = session.index, "Discarded empty brush region"),
                Err(e) => warn!(index = session.index, "Failed to discard empty region: {}", e),
            },
            Ok(false) => debug!(index = session.index, "Brush session ended"),
            Err(e) => warn!(index = session.index, "Brush session ended on a missing region: {}", e),
        }

        self.render_frame();
        self.emit(BrushEventKind::End);
    }
}
