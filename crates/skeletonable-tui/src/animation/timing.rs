//! Time calculation utilities for skeleton animations

use std::time::Duration;

/// Progress (0.0 to 1.0) of a one-shot animation after `elapsed`
///
/// A zero duration is complete immediately.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if a one-shot animation is complete
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Position (0.0 up to, not including, 1.0) inside the current cycle of a
/// repeating animation
#[inline]
pub fn cycle_progress(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 0.0;
    }
    let cycles = elapsed.as_secs_f64() / period.as_secs_f64();
    cycles.fract()
}

/// Triangle wave for autoreversing animations: 0 → 1 → 0 over one period
#[inline]
pub fn ping_pong(elapsed: Duration, period: Duration) -> f64 {
    let t = cycle_progress(elapsed, period);
    1.0 - (2.0 * t - 1.0).abs()
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
