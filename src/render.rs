//! Rendering adapter contract and a headless reference adapter.
//!
//! The brush owns no drawing code. After every state change it hands a
//! [`RenderFrame`] to its [`RenderAdapter`], and at pointer-down it asks the
//! adapter what lies under the pointer ([`HitTarget`]).

use crate::constants::{DEFAULT_HANDLE_SIZE, UNBOUNDED_SURFACE};
use crate::settings::BrushSettings;
use crate::spatial_index::{HitEntry, HitIndex, HitKind};
use crate::types::{Axis, AxisPair, Point, Region, ResizeHandle, Span};
use tracing::trace;

/// Classification of a pointer-down target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty background: starts a new region.
    Background,
    /// The body of an existing region: starts a drag.
    Region(usize),
    /// A resize handle of an existing region: starts a resize.
    Handle { index: usize, handle: ResizeHandle },
}

/// Everything an adapter needs to draw the current state.
#[derive(Debug, Clone)]
pub struct RenderFrame<'a> {
    pub regions: &'a [Region],
    pub bound: AxisPair<bool>,
    /// Handle directions available for the current axis binding.
    pub handles: &'static [ResizeHandle],
    /// Per-region emptiness.
    pub empty: Vec<bool>,
    /// Per-region handle visibility.
    pub handles_visible: Vec<bool>,
    pub active: Option<usize>,
}

impl<'a> RenderFrame<'a> {
    pub fn new(
        regions: &'a [Region],
        bound: AxisPair<bool>,
        handles: &'static [ResizeHandle],
        active: Option<usize>,
    ) -> Self {
        let empty: Vec<bool> = regions.iter().map(|r| r.is_empty(bound)).collect();
        let handles_visible = empty
            .iter()
            .enumerate()
            .map(|(i, &e)| !e || active == Some(i))
            .collect();
        Self {
            regions,
            bound,
            handles,
            empty,
            handles_visible,
            active,
        }
    }
}

/// External collaborator that draws regions and classifies pointer targets.
pub trait RenderAdapter: Send {
    /// What lies under `position` in the last rendered frame.
    fn classify(&self, position: Point) -> HitTarget;

    /// Add, remove and position visual rectangles and handles.
    fn render(&mut self, frame: &RenderFrame<'_>);
}

/// A region as last drawn by [`HeadlessRenderer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedRegion {
    pub x: Span,
    pub y: Span,
    pub empty: bool,
    pub handles_visible: bool,
}

/// Renderer without a display: keeps the last frame's rectangles and
/// hit-tests against them.
#[derive(Debug)]
pub struct HeadlessRenderer {
    /// Extent of the interaction surface, used for unbound axes.
    surface: AxisPair<Span>,
    handle_size: f64,
    index: HitIndex,
    regions: Vec<RenderedRegion>,
    frames: u64,
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new(AxisPair::splat(Span::new(-UNBOUNDED_SURFACE, UNBOUNDED_SURFACE)))
    }
}

impl HeadlessRenderer {
    pub fn new(surface: AxisPair<Span>) -> Self {
        Self {
            surface,
            handle_size: DEFAULT_HANDLE_SIZE,
            index: HitIndex::new(),
            regions: Vec::new(),
            frames: 0,
        }
    }

    pub fn with_settings(surface: AxisPair<Span>, settings: &BrushSettings) -> Self {
        Self {
            handle_size: settings.handle_size,
            ..Self::new(surface)
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn regions(&self) -> &[RenderedRegion] {
        &self.regions
    }

    pub fn hit_index(&self) -> &HitIndex {
        &self.index
    }

    /// Rectangle of a handle: a strip along the edge it moves, or a square
    /// on the corner.
    fn handle_rect(&self, handle: ResizeHandle, rect: AxisPair<Span>) -> AxisPair<Span> {
        let half = self.handle_size / 2.0;
        let mut out = rect;
        for axis in Axis::ALL {
            if handle.moves(axis) {
                let edge = rect[axis].bound(handle.on_high_edge(axis));
                out[axis] = Span::new(edge - half, edge + half);
            }
        }
        out
    }
}

impl RenderAdapter for HeadlessRenderer {
    fn classify(&self, position: Point) -> HitTarget {
        self.index.classify(position.x, position.y)
    }

    fn render(&mut self, frame: &RenderFrame<'_>) {
        let mut entries = Vec::new();
        self.regions.clear();

        for (i, region) in frame.regions.iter().enumerate() {
            let rect = AxisPair::new(
                if frame.bound.x { region.pixels(Axis::X) } else { self.surface.x },
                if frame.bound.y { region.pixels(Axis::Y) } else { self.surface.y },
            );
            let empty = frame.empty[i];
            let handles_visible = frame.handles_visible[i];
            self.regions.push(RenderedRegion {
                x: rect.x,
                y: rect.y,
                empty,
                handles_visible,
            });

            // Zero-area regions cannot be grabbed.
            if empty {
                continue;
            }
            entries.push(HitEntry::new(i, HitKind::Body, rect.x, rect.y));
            if handles_visible {
                for &handle in frame.handles {
                    let hr = self.handle_rect(handle, rect);
                    entries.push(HitEntry::new(i, HitKind::Handle(handle), hr.x, hr.y));
                }
            }
        }

        trace!(regions = frame.regions.len(), hit_rects = entries.len(), "Rendered brush frame");
        self.index.rebuild(entries);
        self.frames += 1;
    }
}
