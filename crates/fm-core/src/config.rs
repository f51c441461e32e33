//! Per-transition configuration.
//!
//! Lives here rather than in `fm-transition` because agent hooks in
//! `fm-agent` receive it by reference.

use crate::mode::AssignmentMode;
use crate::tuning::MIN_TRANSITION_DURATION;

// ── TransitionConfig ──────────────────────────────────────────────────────────

/// How one transition is assigned and animated.
///
/// The driver takes a snapshot of this at start; edits made afterwards do
/// not affect a transition already in flight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionConfig {
    /// Assignment strategy.  Default: `DirectRelativePositionMatching`.
    pub mode: AssignmentMode,

    /// Seconds from start to arrival.  Clamped to at least 0.1.  Default: 2.0.
    pub duration: f32,

    /// Apply `p^easing_strength` to linear progress.  Default: `true`.
    pub use_easing: bool,

    /// Easing exponent, clamped to `[0.1, 5.0]`.  Default: 2.0.
    pub easing_strength: f32,

    /// Log per-unit paths at debug level and expose them via the driver's
    /// `debug_segments`.  Default: `false`.
    pub show_debug: bool,

    /// How long a host should keep debug geometry on screen, in seconds.
    /// Default: 5.0.
    pub debug_duration: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            mode: AssignmentMode::default(),
            duration: 2.0,
            use_easing: true,
            easing_strength: 2.0,
            show_debug: false,
            debug_duration: 5.0,
        }
    }
}

impl TransitionConfig {
    /// Copy with every numeric field forced into its valid range.
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            mode: self.mode,
            duration: finite_or(self.duration, defaults.duration).max(MIN_TRANSITION_DURATION),
            use_easing: self.use_easing,
            easing_strength: finite_or(self.easing_strength, defaults.easing_strength).clamp(0.1, 5.0),
            show_debug: self.show_debug,
            debug_duration: finite_or(self.debug_duration, defaults.debug_duration).clamp(0.1, 30.0),
        }
    }
}
