//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBrushBuilder` - Builder for brushes with bound axes and initial extents
//! - `EventLog` - Records every notification a brush emits
//! - Gesture helpers like `drag_gesture()` and float assertions

#![allow(dead_code)]

use multibrush::{
    Axis, BrushEvent, BrushSettings, DomainExtent, DomainPair, EventType, LinearScale, MultiBrush, PointerEvent, Span,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Domain `[0, 10]` onto pixels `[0, 100]`.
pub fn linear() -> LinearScale {
    LinearScale::new([0.0, 10.0], [0.0, 100.0])
}

// ============================================================================
// TestBrushBuilder - Builder pattern for creating test brushes
// ============================================================================

/// Builder for brushes with bound axes and initial extents.
///
/// # Example
/// ```ignore
/// let brush = TestBrushBuilder::new()
///     .with_x()
///     .with_y()
///     .with_extents(&[DomainExtent::Xy { x: [2.0, 5.0], y: [1.0, 4.0] }])
///     .build();
/// ```
pub struct TestBrushBuilder {
    x: Option<LinearScale>,
    y: Option<LinearScale>,
    settings: BrushSettings,
    extents: Vec<DomainExtent>,
}

impl Default for TestBrushBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBrushBuilder {
    pub fn new() -> Self {
        Self {
            x: None,
            y: None,
            settings: BrushSettings::default(),
            extents: Vec::new(),
        }
    }

    /// Bind X to the default linear scale.
    pub fn with_x(mut self) -> Self {
        self.x = Some(linear());
        self
    }

    /// Bind Y to the default linear scale.
    pub fn with_y(mut self) -> Self {
        self.y = Some(linear());
        self
    }

    pub fn with_settings(mut self, settings: BrushSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn without_clamp(mut self) -> Self {
        self.settings.clamp.x = false;
        self.settings.clamp.y = false;
        self
    }

    pub fn with_extents(mut self, extents: &[DomainExtent]) -> Self {
        self.extents = extents.to_vec();
        self
    }

    pub fn build(self) -> MultiBrush {
        init_tracing();
        let mut brush = MultiBrush::with_settings(Default::default(), self.settings);
        if let Some(x) = self.x {
            brush.bind_axis(Axis::X, x);
        }
        if let Some(y) = self.y {
            brush.bind_axis(Axis::Y, y);
        }
        brush.set_extent_domain(&self.extents).unwrap();
        brush
    }
}

/// Brush with only X bound.
pub fn brush_x() -> MultiBrush {
    TestBrushBuilder::new().with_x().build()
}

/// Brush with both axes bound.
pub fn brush_xy() -> MultiBrush {
    TestBrushBuilder::new().with_x().with_y().build()
}

// ============================================================================
// EventLog - captured notifications
// ============================================================================

/// Records every start/change/end event of a brush.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<BrushEvent>>>,
}

impl EventLog {
    pub fn attach(brush: &mut MultiBrush) -> Self {
        let log = Self::default();
        for event_type in [EventType::Start, EventType::Change, EventType::End] {
            let events = Arc::clone(&log.events);
            brush.on(event_type, move |event| {
                events.lock().push(event.clone());
                Ok(())
            });
        }
        log
    }

    pub fn events(&self) -> Vec<BrushEvent> {
        self.events.lock().clone()
    }

    pub fn types(&self) -> Vec<EventType> {
        self.events.lock().iter().map(|e| e.kind.event_type()).collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

// ============================================================================
// Gestures
// ============================================================================

/// Press at `from`, move to `to`, release at `to`.
pub fn drag_gesture(brush: &mut MultiBrush, from: (f64, f64), to: (f64, f64)) {
    brush.pointer_down(PointerEvent::at(from.0, from.1)).unwrap();
    brush.pointer_move(PointerEvent::at(to.0, to.1));
    brush.pointer_up(PointerEvent::at(to.0, to.1));
}

// ============================================================================
// Assertions
// ============================================================================

const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_pair(actual: DomainPair, expected: DomainPair) {
    assert_close(actual[0], expected[0]);
    assert_close(actual[1], expected[1]);
}

pub fn assert_span(actual: Span, low: f64, high: f64) {
    assert_close(actual.low(), low);
    assert_close(actual.high(), high);
}
