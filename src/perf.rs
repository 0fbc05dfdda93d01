//! Timing of pointer handlers.
//!
//! Pointer-move handling runs on every pointer event of a gesture, so the
//! handlers are wrapped in [`profile_scope!`]. With the `profiling` feature
//! the scope is timed and slow handlers are logged; without it the macro
//! compiles to nothing.
//!
//! ```ignore
//! fn pointer_move(&mut self, event: PointerEvent) {
//!     profile_scope!("pointer_move");
//!     // ... resolution ...
//! }
//! ```

use crate::constants::SLOW_HANDLER_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer: logs a warning on drop if the scope took longer than its
/// threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    active: bool,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            active: true,
        }
    }

    /// Timer used by [`profile_scope!`]; inert while profiling is disabled.
    pub fn for_profiling(name: &'static str) -> Self {
        Self {
            active: is_profiling_enabled(),
            ..Self::new(name, SLOW_HANDLER_MS)
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                handler = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow brush handler"
            );
        } else {
            #[cfg(feature = "profiling")]
            trace!(handler = self.name, elapsed_ms = ms, "Brush handler timing");
        }
    }
}
