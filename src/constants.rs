//! Engine-wide constants.
//!
//! Centralizes the tuning values of the divider engine so that the
//! geometry helpers, the state machine and the settings defaults agree.

// ============================================================================
// Interaction
// ============================================================================

/// Pointer travel (in pixels) after a press on the selected divider before
/// the press is treated as a drag instead of a click
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Normalized distance from the interior centerline beyond which the ghost
/// prefers a vertical divider
pub const ORIENTATION_THRESHOLD: f64 = 0.4;

/// Extra grab distance (interior units) around a divider's face for hit testing
pub const HIT_TOLERANCE: f64 = 0.5;

// ============================================================================
// Metric Rules
// ============================================================================

/// Minimum clear distance between two same-orientation dividers (metric)
pub const METRIC_MIN_GAP: f64 = 2.0;

/// Position snapping increment (metric)
pub const METRIC_SNAP_INCREMENT: f64 = 0.5;

/// Minimum section size used by the ghost addability check (metric)
pub const METRIC_MIN_SECTION_SIZE: f64 = 2.0;

// ============================================================================
// Imperial Rules
// ============================================================================

/// Minimum clear distance between two same-orientation dividers (imperial)
pub const IMPERIAL_MIN_GAP: f64 = 0.75;

/// Position snapping increment (imperial)
pub const IMPERIAL_SNAP_INCREMENT: f64 = 0.25;

/// Minimum section size used by the ghost addability check (imperial)
pub const IMPERIAL_MIN_SECTION_SIZE: f64 = 0.75;

// ============================================================================
// Numerics & Profiling
// ============================================================================

/// Tolerance for floating point comparisons of positions
pub const POSITION_EPSILON: f64 = 1e-9;

/// Operations slower than this (milliseconds) are reported by `perf`
pub const SLOW_OPERATION_MS: f64 = 2.0;
