//! Clamp/invert engine - pure coordinate math for one axis of one region.
//!
//! Given the pointer coordinate and the session's anchor for an axis,
//! [`resolve_bound`] computes the region's new pixel bounds on that axis.

use crate::types::Span;

/// Inputs for resolving one axis of the active region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundInput {
    /// Pointer coordinate on this axis, already shifted by any handle offset.
    pub pointer: f64,
    /// Normalized pixel range of the axis scale.
    pub range: Span,
    /// Translate the region instead of resizing it.
    pub dragging: bool,
    /// Keep the result inside `range`.
    pub clamp: bool,
    /// When dragging, the region's low edge at the time the pointer was at
    /// `grab`; otherwise the fixed corner.
    pub position: f64,
    /// Pointer coordinate the drag is measured from. Unused when resizing.
    pub grab: f64,
    /// Current bounds of the region on this axis.
    pub current: Span,
    /// Center to mirror the pointer about for centered resizes.
    pub center: Option<f64>,
}

/// New bounds for one axis; `changed` is false when they equal the current ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundResolution {
    pub low: f64,
    pub high: f64,
    pub changed: bool,
}

impl BoundResolution {
    pub fn span(&self) -> Span {
        Span::new(self.low, self.high)
    }
}

#[inline]
fn bounded(value: f64, min: f64, max: f64) -> f64 {
    // Not f64::clamp: min exceeds max when a dragged region is larger than the range.
    min.max(max.min(value))
}

/// Resolve the new bounds of one axis.
pub fn resolve_bound(input: &BoundInput) -> BoundResolution {
    let r0 = input.range.low();
    let r1 = input.range.high();

    if input.dragging {
        let size = input.current.size();
        let mut low = input.position + (input.pointer - input.grab);
        if input.clamp {
            // Keep the whole region inside while translating.
            low = bounded(low, r0, r1 - size);
        }
        // An unmoved low edge must keep the high edge bit-for-bit.
        let high = if low == input.current.low() {
            input.current.high()
        } else {
            low + size
        };
        return resolution(input.current, low, high);
    }

    let mut min = if input.clamp {
        bounded(input.pointer, r0, r1)
    } else {
        input.pointer
    };
    let mut position = input.position;
    if let Some(center) = input.center {
        position = bounded(2.0 * center - min, r0, r1);
    }
    let max;
    if position < min {
        max = min;
        min = position;
    } else {
        max = position;
    }
    resolution(input.current, min, max)
}

fn resolution(current: Span, low: f64, high: f64) -> BoundResolution {
    BoundResolution {
        low,
        high,
        changed: current.low() != low || current.high() != high,
    }
}
