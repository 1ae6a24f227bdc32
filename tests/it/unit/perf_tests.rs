//! Unit tests for perf module.

use shelfwright::perf::ScopedTimer;

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping the timer must not warn or panic
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_for_profiling_uses_default_threshold() {
    let timer = ScopedTimer::for_profiling("drag");
    assert_eq!(timer.name(), "drag");
}

#[test]
fn test_elapsed_is_monotonic() {
    let timer = ScopedTimer::new("monotonic", 1000.0);
    let first = timer.elapsed_ms();
    let second = timer.elapsed_ms();
    assert!(second >= first);
}

#[test]
fn test_profile_scope_macro_expands() {
    fn work() -> u32 {
        shelfwright::profile_scope!("work");
        shelfwright::profile_scope!("work_with_threshold", 50.0);
        42
    }
    assert_eq!(work(), 42);
}
