//! Brush-wide constants.
//!
//! Centralizes default values so settings, renderer and tests agree.

// ============================================================================
// Interaction
// ============================================================================

/// Key code of the key that turns a resize into a drag while held (space)
pub const DEFAULT_DRAG_TOGGLE_KEY: u32 = 32;

/// Whether pointer positions are clamped to the scale range by default
pub const DEFAULT_CLAMP: bool = true;

// ============================================================================
// Hit testing
// ============================================================================

/// Thickness of resize handles in pixels
pub const DEFAULT_HANDLE_SIZE: f64 = 6.0;

/// Extent used for the unbound axis of the interaction surface when the
/// host does not supply one
pub const UNBOUNDED_SURFACE: f64 = 1.0e6;

// ============================================================================
// Profiling
// ============================================================================

/// Pointer handlers slower than this are logged (milliseconds)
pub const SLOW_HANDLER_MS: f64 = 4.0;
