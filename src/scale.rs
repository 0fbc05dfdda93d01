//! Scale adapters - domain <-> pixel mapping for one axis.
//!
//! The brush never implements a scale itself; it only needs the capability
//! contract of [`Scale`]. [`ScaleAdapter`] wraps a scale and turns every
//! failed or non-finite mapping into [`BrushError::Mapping`].

use crate::error::{BrushError, BrushResult, ScaleError};
use crate::types::{Axis, DomainPair, Span};
use std::fmt;
use std::sync::Arc;

/// Capability contract for an externally supplied axis scale.
pub trait Scale: Send + Sync {
    /// Map a domain value to a pixel coordinate.
    fn forward(&self, value: f64) -> Result<f64, ScaleError>;

    /// Map a pixel coordinate back to a domain value.
    fn invert(&self, pixel: f64) -> Result<f64, ScaleError>;

    /// Whether the scale has an inverse. When it does not, pixel space is
    /// treated as domain space in both directions and neither mapping
    /// method is called.
    fn is_invertible(&self) -> bool {
        true
    }

    /// The pixel range `[min, max]`, in either order.
    fn range_extent(&self) -> [f64; 2];
}

/// A continuous linear scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }
}

impl Scale for LinearScale {
    fn forward(&self, value: f64) -> Result<f64, ScaleError> {
        let span = self.domain[1] - self.domain[0];
        if span == 0.0 {
            return Ok(self.range[0]);
        }
        let t = (value - self.domain[0]) / span;
        Ok(self.range[0] + t * (self.range[1] - self.range[0]))
    }

    fn invert(&self, pixel: f64) -> Result<f64, ScaleError> {
        let span = self.range[1] - self.range[0];
        if span == 0.0 {
            return Err(ScaleError::from("degenerate pixel range"));
        }
        let t = (pixel - self.range[0]) / span;
        Ok(self.domain[0] + t * (self.domain[1] - self.domain[0]))
    }

    fn range_extent(&self) -> [f64; 2] {
        self.range
    }
}

/// A bound scale together with the axis it serves.
#[derive(Clone)]
pub struct ScaleAdapter {
    axis: Axis,
    scale: Arc<dyn Scale>,
}

impl fmt::Debug for ScaleAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleAdapter")
            .field("axis", &self.axis)
            .field("range", &self.range_extent())
            .finish()
    }
}

impl ScaleAdapter {
    pub fn new(axis: Axis, scale: Arc<dyn Scale>) -> Self {
        Self { axis, scale }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_invertible(&self) -> bool {
        self.scale.is_invertible()
    }

    /// Domain value to pixel. Identity for scales without an inverse.
    pub fn map(&self, value: f64) -> BrushResult<f64> {
        if !self.is_invertible() {
            return Ok(value);
        }
        let mapped = self.scale.forward(value);
        self.check(value, mapped)
    }

    /// Pixel to domain value. Identity for scales without an inverse.
    pub fn invert(&self, pixel: f64) -> BrushResult<f64> {
        if !self.is_invertible() {
            return Ok(pixel);
        }
        let inverted = self.scale.invert(pixel);
        self.check(pixel, inverted)
    }

    /// Normalized pixel range of the scale.
    pub fn range_extent(&self) -> Span {
        Span::from(self.scale.range_extent())
    }

    /// Forward-map a domain pair to a normalized pixel span.
    pub fn map_pair(&self, pair: DomainPair) -> BrushResult<Span> {
        Ok(Span::new(self.map(pair[0])?, self.map(pair[1])?))
    }

    /// Inverse-map a pixel span to a normalized domain pair.
    pub fn invert_span(&self, span: Span) -> BrushResult<DomainPair> {
        let a = self.invert(span.low())?;
        let b = self.invert(span.high())?;
        Ok(if b < a { [b, a] } else { [a, b] })
    }

    fn check(&self, input: f64, result: Result<f64, ScaleError>) -> BrushResult<f64> {
        match result {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(v) => Err(BrushError::Mapping {
                axis: self.axis,
                value: input,
                reason: format!("non-finite result {v}"),
            }),
            Err(e) => Err(BrushError::Mapping {
                axis: self.axis,
                value: input,
                reason: e.to_string(),
            }),
        }
    }
}
