//! Interaction state machine for brush gestures.
//!
//! A gesture is either absent (`Idle`) or a single [`Session`] bound to one
//! region. Everything the resolution pass needs between pointer events lives
//! in the session, so there is no loose per-gesture field on the brush.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active(Create)        (pointer down on background)
//! Idle -> Active(Drag)          (pointer down on a region body)
//! Idle -> Active(Resize)        (pointer down on a resize handle)
//!
//! Active -> Idle                (pointer up, or the session is abandoned)
//! ```

use crate::events::ChangeMode;
use crate::types::{AxisPair, ResizeHandle};

/// How the session was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Drawing a new region from the press point.
    Create,
    /// Translating an existing region.
    Drag,
    /// Moving one edge or corner of an existing region.
    Resize(ResizeHandle),
}

/// Whether the region is being translated instead of resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Off,
    /// Pressed on the region body.
    Body,
    /// Drag toggle key held during a create or resize.
    Toggled,
}

impl DragState {
    pub fn is_dragging(self) -> bool {
        self != DragState::Off
    }
}

/// Everything tracked for one press-move-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub mode: SessionMode,
    /// Region being manipulated.
    pub index: usize,
    /// Axes this gesture changes: bound, and moved by the handle if resizing.
    pub axes: AxisPair<bool>,
    /// Fixed corner for resizes, the low edge at `grab` for drags.
    pub origin: AxisPair<f64>,
    /// Pointer position a drag is measured from.
    pub grab: AxisPair<f64>,
    /// Pointer position of the last resolution pass, handle offset included.
    pub pointer: AxisPair<f64>,
    /// Distance from the pointer to the grabbed edge.
    pub offset: Option<AxisPair<f64>>,
    /// Fixed center while a centered resize is held.
    pub center: Option<AxisPair<f64>>,
    pub drag: DragState,
}

impl Session {
    pub fn change_mode(&self) -> ChangeMode {
        if self.drag.is_dragging() {
            ChangeMode::Move
        } else {
            ChangeMode::Resize
        }
    }
}

/// Current input state of the brush.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Active(Session),
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Index of the region under manipulation, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.session().map(|s| s.index)
    }

    /// End the session, returning it.
    pub fn take(&mut self) -> Option<Session> {
        match std::mem::take(self) {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }
}
