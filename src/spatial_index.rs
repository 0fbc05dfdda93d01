//! Spatial Index Module
//!
//! R-tree over the rectangles of the last rendered frame: region bodies and
//! visible resize handles. Used to classify pointer-down targets in O(log n).

use crate::render::HitTarget;
use crate::types::{ResizeHandle, Span};
use rstar::{AABB, RTree, RTreeObject};

/// What a hit rectangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Body,
    Handle(ResizeHandle),
}

/// A hittable rectangle of one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    pub region: usize,
    pub kind: HitKind,
    pub x: Span,
    pub y: Span,
}

impl HitEntry {
    pub fn new(region: usize, kind: HitKind, x: Span, y: Span) -> Self {
        Self { region, kind, x, y }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    /// Handles sit above bodies, later regions above earlier ones, and
    /// corners above the edges they overlap.
    fn stacking(&self) -> (bool, usize, bool) {
        match self.kind {
            HitKind::Body => (false, self.region, false),
            HitKind::Handle(handle) => (true, self.region, handle.is_corner()),
        }
    }

    fn target(&self) -> HitTarget {
        match self.kind {
            HitKind::Body => HitTarget::Region(self.region),
            HitKind::Handle(handle) => HitTarget::Handle {
                index: self.region,
                handle,
            },
        }
    }
}

impl RTreeObject for HitEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.x.low(), self.y.low()], [self.x.high(), self.y.high()])
    }
}

/// Spatial index of hit rectangles using an R-tree.
#[derive(Debug, Default)]
pub struct HitIndex {
    tree: RTree<HitEntry>,
}

impl HitIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn from_entries(entries: Vec<HitEntry>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// All rectangles containing the point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<HitEntry> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .copied()
            .collect()
    }

    /// The topmost target under the point, or the background.
    pub fn classify(&self, x: f64, y: f64) -> HitTarget {
        self.query_point(x, y)
            .into_iter()
            .max_by_key(HitEntry::stacking)
            .map(|entry| entry.target())
            .unwrap_or(HitTarget::Background)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn rebuild(&mut self, entries: Vec<HitEntry>) {
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }
}
