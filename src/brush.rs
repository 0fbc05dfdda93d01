//! The multi-region brush: configuration, domain-space API and notification
//! plumbing. Pointer and keyboard handlers live in [`crate::input`].

use crate::error::{BrushError, BrushResult};
use crate::events::{BrushEvent, BrushEventKind, BrushSnapshot, ChangeMode, EventType, ListenerId, Listeners};
use crate::input::InteractionState;
use crate::render::{HeadlessRenderer, RenderAdapter, RenderFrame};
use crate::scale::{Scale, ScaleAdapter};
use crate::settings::BrushSettings;
use crate::store::ExtentStore;
use crate::types::{Axis, AxisPair, DomainExtent, DomainPair, Region, ResizeHandle};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use tracing::{debug, warn};

/// Multi-region brush over up to two axes.
///
/// Generic over the rendering adapter; the default [`HeadlessRenderer`]
/// keeps rectangles in memory and hit-tests against them.
#[derive(Debug)]
pub struct MultiBrush<R: RenderAdapter = HeadlessRenderer> {
    pub(crate) scales: AxisPair<Option<ScaleAdapter>>,
    pub(crate) clamp: AxisPair<bool>,
    pub(crate) store: ExtentStore,
    pub(crate) handles: &'static [ResizeHandle],
    pub(crate) listeners: Listeners,
    pub(crate) renderer: R,
    pub(crate) state: InteractionState,
    pub(crate) settings: BrushSettings,
}

impl Default for MultiBrush<HeadlessRenderer> {
    fn default() -> Self {
        Self::new(HeadlessRenderer::default())
    }
}

impl<R: RenderAdapter> MultiBrush<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_settings(renderer, BrushSettings::default())
    }

    pub fn with_settings(renderer: R, settings: BrushSettings) -> Self {
        Self {
            scales: AxisPair::default(),
            clamp: settings.clamp,
            store: ExtentStore::new(),
            handles: ResizeHandle::active_set(AxisPair::splat(false)),
            listeners: Listeners::new(),
            renderer,
            state: InteractionState::Idle,
            settings,
        }
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Which axes currently have a scale.
    pub fn bound(&self) -> AxisPair<bool> {
        AxisPair::new(self.scales.x.is_some(), self.scales.y.is_some())
    }

    /// Bind or unbind an axis. The active handle set follows the binding.
    pub fn set_axis(&mut self, axis: Axis, scale: Option<Arc<dyn Scale>>) {
        self.scales[axis] = scale.map(|s| ScaleAdapter::new(axis, s));
        self.handles = ResizeHandle::active_set(self.bound());
        debug!(%axis, bound = self.scales[axis].is_some(), handles = self.handles.len(), "Axis binding changed");
    }

    pub fn bind_axis(&mut self, axis: Axis, scale: impl Scale + 'static) {
        self.set_axis(axis, Some(Arc::new(scale)));
    }

    pub fn unbind_axis(&mut self, axis: Axis) {
        self.set_axis(axis, None);
    }

    pub fn axis(&self, axis: Axis) -> Option<&ScaleAdapter> {
        self.scales[axis].as_ref()
    }

    pub fn set_clamp(&mut self, axis: Axis, clamp: bool) {
        self.clamp[axis] = clamp;
    }

    pub fn clamp(&self) -> AxisPair<bool> {
        self.clamp
    }

    pub fn handles(&self) -> &'static [ResizeHandle] {
        self.handles
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    // ------------------------------------------------------------------------
    // Regions
    // ------------------------------------------------------------------------

    pub fn regions(&self) -> &[Region] {
        self.store.regions()
    }

    pub fn region(&self, index: usize) -> BrushResult<&Region> {
        self.store.region(index)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Append a degenerate region and return its index.
    pub fn create_region(&mut self) -> usize {
        let index = self.store.create_region();
        self.render_frame();
        index
    }

    /// Reset to a single placeholder region.
    pub fn clear(&mut self) {
        self.abandon_session("clear");
        self.store.clear();
        self.render_frame();
    }

    /// Whether a region is empty on any bound axis.
    ///
    /// `None` is only accepted while the collection holds exactly one region.
    pub fn is_empty(&self, index: Option<usize>) -> BrushResult<bool> {
        let index = match index {
            Some(index) => index,
            None if self.store.len() == 1 => 0,
            None => {
                return Err(BrushError::IndexRequired {
                    regions: self.store.len(),
                });
            }
        };
        self.store.is_region_empty(index, self.bound())
    }

    // ------------------------------------------------------------------------
    // Domain space
    // ------------------------------------------------------------------------

    /// Replace every region from domain-space extents.
    ///
    /// With no axis bound this does nothing. Each extent must carry a pair
    /// for every bound axis. Nothing changes if any pair fails to map.
    pub fn set_extent_domain(&mut self, extents: &[DomainExtent]) -> BrushResult<()> {
        let bound = self.bound();
        match (&self.scales.x, &self.scales.y) {
            (None, None) => {
                debug!("No axis bound; ignoring domain extents");
                return Ok(());
            }
            (Some(x), Some(y)) => {
                let mut regions = Vec::with_capacity(extents.len());
                for (index, extent) in extents.iter().enumerate() {
                    let mut region = Region::DEGENERATE;
                    for (axis, scale) in [(Axis::X, x), (Axis::Y, y)] {
                        let pair = extent.pair(axis).ok_or(BrushError::MissingAxis { index, axis })?;
                        region.pixels[axis] = scale.map_pair(pair)?;
                        region.domain[axis] = Some(pair);
                    }
                    regions.push(region);
                }
                self.store.assign_regions(regions);
            }
            (Some(scale), None) | (None, Some(scale)) => {
                let axis = scale.axis();
                let pairs = extents
                    .iter()
                    .enumerate()
                    .map(|(index, extent)| extent.pair(axis).ok_or(BrushError::MissingAxis { index, axis }))
                    .collect::<BrushResult<Vec<DomainPair>>>()?;
                self.store.assign_domain(axis, &pairs, scale, bound[axis.other()])?;
            }
        }

        self.abandon_session("domain assignment");
        debug!(regions = self.store.len(), "Set extents from domain");
        self.render_frame();
        Ok(())
    }

    /// Current regions in domain space. Empty regions are omitted.
    pub fn get_extent_domain(&self) -> BrushResult<Vec<DomainExtent>> {
        self.store.read_domain_extents(&self.scales)
    }

    /// Domain pairs of one axis, or nothing if the axis is unbound.
    pub fn axis_domain(&self, axis: Axis) -> BrushResult<Vec<DomainPair>> {
        match &self.scales[axis] {
            Some(scale) => self.store.read_domain(axis, scale),
            None => Ok(Vec::new()),
        }
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    pub fn on<F>(&mut self, event_type: EventType, callback: F) -> ListenerId
    where
        F: FnMut(&BrushEvent) -> anyhow::Result<()> + Send + 'static,
    {
        self.listeners.on(event_type, callback)
    }

    /// Subscribe by event name: `start`, `change` or `end`.
    pub fn on_named<F>(&mut self, name: &str, callback: F) -> BrushResult<ListenerId>
    where
        F: FnMut(&BrushEvent) -> anyhow::Result<()> + Send + 'static,
    {
        let event_type = name.parse::<EventType>()?;
        Ok(self.listeners.on(event_type, callback))
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.off(id)
    }

    /// Emit start, change and end for the current state without a gesture,
    /// so listeners can sync after programmatic changes.
    pub fn broadcast_current(&mut self) {
        self.emit(BrushEventKind::Start);
        self.emit(BrushEventKind::Change {
            mode: ChangeMode::Resize,
        });
        self.emit(BrushEventKind::End);
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Hand the current state to the renderer, e.g. after a resize of the
    /// interaction surface.
    pub fn redraw(&mut self) {
        self.render_frame();
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub(crate) fn render_frame(&mut self) {
        let bound = self.bound();
        let frame = RenderFrame::new(self.store.regions(), bound, self.handles, self.state.active_index());
        self.renderer.render(&frame);
    }

    pub(crate) fn emit(&mut self, kind: BrushEventKind) {
        let event = BrushEvent {
            kind,
            snapshot: BrushSnapshot {
                regions: self.store.regions().to_vec(),
                active: self.state.active_index(),
            },
        };
        let failed = self.listeners.emit(&event);
        if failed > 0 {
            debug!(event = %kind.event_type(), failed, "Some brush listeners failed");
        }
    }

    /// Drop the gesture in progress without an end event.
    pub(crate) fn abandon_session(&mut self, reason: &str) {
        if let Some(session) = self.state.take() {
            warn!(index = session.index, reason, "Abandoned brush session");
        }
    }
}

/// A brush shared across threads.
#[derive(Debug)]
pub struct SharedBrush<R: RenderAdapter = HeadlessRenderer> {
    inner: Arc<Mutex<MultiBrush<R>>>,
}

impl<R: RenderAdapter> Clone for SharedBrush<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RenderAdapter> SharedBrush<R> {
    pub fn new(brush: MultiBrush<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(brush)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, MultiBrush<R>> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the brush.
    pub fn with<T>(&self, f: impl FnOnce(&mut MultiBrush<R>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl<R: RenderAdapter> From<MultiBrush<R>> for SharedBrush<R> {
    fn from(brush: MultiBrush<R>) -> Self {
        Self::new(brush)
    }
}
