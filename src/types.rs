//! Core types for the brush.
//!
//! Defines the axis vocabulary, pixel and domain pairs, the region record
//! shared by both axes, and the resize handle directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

// ============================================================================
// Axes
// ============================================================================

/// One of the two orthogonal brush axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Resolution order within a move: X before Y.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> AxisPair<U> {
        AxisPair {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Iterate `(axis, value)` in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        [(Axis::X, &self.x), (Axis::Y, &self.y)].into_iter()
    }
}

impl<T: Copy> AxisPair<T> {
    pub fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }
}

impl<T> Index<Axis> for AxisPair<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Axis> for AxisPair<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

/// A pointer position relative to the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for AxisPair<f64> {
    fn from(p: Point) -> Self {
        AxisPair::new(p.x, p.y)
    }
}

impl Index<Axis> for Point {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

// ============================================================================
// Extents
// ============================================================================

/// A pixel-space extent on one axis, always stored with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Span {
    low: f64,
    high: f64,
}

impl Span {
    /// The `[0, 0]` placeholder.
    pub const DEGENERATE: Span = Span { low: 0.0, high: 0.0 };

    /// Build a span from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Bound by side: `false` is low, `true` is high.
    #[inline]
    pub fn bound(&self, high: bool) -> f64 {
        if high { self.high } else { self.low }
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.high - self.low
    }

    #[inline]
    pub fn center(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl From<[f64; 2]> for Span {
    fn from(pair: [f64; 2]) -> Self {
        Span::new(pair[0], pair[1])
    }
}

/// A domain-space pair exactly as it was handed to or reported by the brush.
pub type DomainPair = [f64; 2];

/// One brushed region: pixel bounds and domain cache for both axes.
///
/// A domain cache entry is present only while the pixel bounds still come
/// from an external domain-space assignment; any interactive change to an
/// axis drops that axis's entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Region {
    pub(crate) pixels: AxisPair<Span>,
    pub(crate) domain: AxisPair<Option<DomainPair>>,
}

impl Region {
    pub const DEGENERATE: Region = Region {
        pixels: AxisPair {
            x: Span::DEGENERATE,
            y: Span::DEGENERATE,
        },
        domain: AxisPair { x: None, y: None },
    };

    pub fn new(x: Span, y: Span) -> Self {
        Self {
            pixels: AxisPair::new(x, y),
            domain: AxisPair::default(),
        }
    }

    pub fn pixels(&self, axis: Axis) -> Span {
        self.pixels[axis]
    }

    pub fn domain(&self, axis: Axis) -> Option<DomainPair> {
        self.domain[axis]
    }

    /// Empty if any bound axis has zero extent.
    pub fn is_empty(&self, bound: AxisPair<bool>) -> bool {
        bound.iter().any(|(axis, &b)| b && self.pixels[axis].is_degenerate())
    }
}

/// A region as seen in domain space, shaped by which axes are bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainExtent {
    X(DomainPair),
    Y(DomainPair),
    Xy { x: DomainPair, y: DomainPair },
}

impl DomainExtent {
    pub fn from_pairs(x: Option<DomainPair>, y: Option<DomainPair>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(DomainExtent::Xy { x, y }),
            (Some(x), None) => Some(DomainExtent::X(x)),
            (None, Some(y)) => Some(DomainExtent::Y(y)),
            (None, None) => None,
        }
    }

    pub fn pair(&self, axis: Axis) -> Option<DomainPair> {
        match (self, axis) {
            (DomainExtent::X(p), Axis::X) | (DomainExtent::Y(p), Axis::Y) => Some(*p),
            (DomainExtent::Xy { x, .. }, Axis::X) => Some(*x),
            (DomainExtent::Xy { y, .. }, Axis::Y) => Some(*y),
            _ => None,
        }
    }
}

// ============================================================================
// Resize handles
// ============================================================================

/// Compass direction of a resize handle on a region's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    E,
    S,
    W,
    Nw,
    Ne,
    Se,
    Sw,
}

const HANDLES_XY: [ResizeHandle; 8] = [
    ResizeHandle::N,
    ResizeHandle::E,
    ResizeHandle::S,
    ResizeHandle::W,
    ResizeHandle::Nw,
    ResizeHandle::Ne,
    ResizeHandle::Se,
    ResizeHandle::Sw,
];
const HANDLES_X: [ResizeHandle; 2] = [ResizeHandle::E, ResizeHandle::W];
const HANDLES_Y: [ResizeHandle; 2] = [ResizeHandle::N, ResizeHandle::S];

impl ResizeHandle {
    /// Handles available for a given axis binding.
    pub fn active_set(bound: AxisPair<bool>) -> &'static [ResizeHandle] {
        match (bound.x, bound.y) {
            (true, true) => &HANDLES_XY,
            (true, false) => &HANDLES_X,
            (false, true) => &HANDLES_Y,
            (false, false) => &[],
        }
    }

    /// Whether dragging this handle changes the given axis.
    pub fn moves(self, axis: Axis) -> bool {
        match axis {
            Axis::X => !matches!(self, ResizeHandle::N | ResizeHandle::S),
            Axis::Y => !matches!(self, ResizeHandle::E | ResizeHandle::W),
        }
    }

    /// Whether the handle sits on the high edge of the axis (east or south).
    pub fn on_high_edge(self, axis: Axis) -> bool {
        match axis {
            Axis::X => matches!(self, ResizeHandle::E | ResizeHandle::Ne | ResizeHandle::Se),
            Axis::Y => matches!(self, ResizeHandle::S | ResizeHandle::Se | ResizeHandle::Sw),
        }
    }

    /// Whether the fixed side while resizing is the high edge (west or north
    /// handles keep the opposite, high edge in place).
    pub fn anchors_high(self, axis: Axis) -> bool {
        match axis {
            Axis::X => matches!(self, ResizeHandle::W | ResizeHandle::Nw | ResizeHandle::Sw),
            Axis::Y => matches!(self, ResizeHandle::N | ResizeHandle::Nw | ResizeHandle::Ne),
        }
    }

    /// Corner handles move both axes.
    pub fn is_corner(self) -> bool {
        self.moves(Axis::X) && self.moves(Axis::Y)
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResizeHandle::N => "n",
            ResizeHandle::E => "e",
            ResizeHandle::S => "s",
            ResizeHandle::W => "w",
            ResizeHandle::Nw => "nw",
            ResizeHandle::Ne => "ne",
            ResizeHandle::Se => "se",
            ResizeHandle::Sw => "sw",
        };
        f.write_str(name)
    }
}
