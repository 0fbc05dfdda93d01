//! Pointer and keyboard handling for the brush.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine ([`InteractionState`]) to
//! track the gesture in progress. Handlers are split by event, each an
//! `impl` block on [`crate::MultiBrush`].
//!
//! ## Modules
//!
//! - `state` - Session enum and helper methods
//! - `pointer_down` - Target classification and session start
//! - `pointer_move` - Per-axis resolution pass and change notification
//! - `pointer_up` - Final pass, empty-region discard and session end
//! - `keyboard` - Drag toggle key

mod keyboard;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::{DragState, InteractionState, Session, SessionMode};

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys relevant to the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Resize symmetrically about the region center (Alt).
    pub center: bool,
}

/// A pointer event relative to the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.modifiers.center = true;
        self
    }
}
