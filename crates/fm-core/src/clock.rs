//! Host-driven time model.
//!
//! The driver has no wall clock of its own.  The host calls `tick(dt)` once
//! per frame and the driver feeds `dt` into a `TransitionClock`; every
//! timestamp the core records (transition start, cache stamps) is read from
//! that clock, so tests can drive time deterministically.
//!
//! Seconds are accumulated in `f64` so long sessions do not lose frame-level
//! precision; values handed back to `f32` math are differences, not absolutes.

use std::fmt;

/// Monotonic seconds accumulator advanced by the host tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionClock {
    elapsed_secs: f64,
}

impl TransitionClock {
    pub fn new() -> Self {
        Self { elapsed_secs: 0.0 }
    }

    /// Start the clock at an arbitrary host time.
    pub fn starting_at(secs: f64) -> Self {
        Self { elapsed_secs: secs.max(0.0) }
    }

    /// Advance by `dt` seconds.  Negative or non-finite deltas are ignored so
    /// time never runs backwards.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_secs += dt as f64;
        }
    }

    /// Current host time in seconds.
    #[inline]
    pub fn now(&self) -> f64 {
        self.elapsed_secs
    }

    /// Seconds elapsed since `earlier`, floored at zero.
    #[inline]
    pub fn since(&self, earlier: f64) -> f64 {
        (self.elapsed_secs - earlier).max(0.0)
    }
}

impl fmt::Display for TransitionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}s", self.elapsed_secs)
    }
}
