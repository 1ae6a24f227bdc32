//! Performance instrumentation for the interaction hot paths.
//!
//! Pointer moves arrive many times per second while dragging, and each one
//! runs the ghost detector or the constraint solver. `profile_scope!` times
//! those paths when the `profiling` feature is enabled and compiles to
//! nothing otherwise.
//!
//! ```ignore
//! use shelfwright::profile_scope;
//!
//! fn solve_drag() {
//!     profile_scope!("solve_drag");
//!     // ... work ...
//! }
//! ```

use crate::constants::SLOW_OPERATION_MS;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

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

/// RAII timer that reports when its scope outlives a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the default slow-operation threshold
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_OPERATION_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        trace!(operation = self.name, elapsed_ms = format!("{:.3}", elapsed_ms), "[PERF]");

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
