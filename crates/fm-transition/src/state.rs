//! Per-transition records.

use fm_agent::Pose;
use fm_assign::ConflictReport;
use fm_core::{AgentHandle, BoidsParams, TransitionConfig};

// ── UnitTransition ────────────────────────────────────────────────────────────

/// One agent's motion from its start pose to its assigned anchor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTransition {
    pub agent: AgentHandle,
    /// Index of the target anchor in the destination formation.
    pub anchor: usize,
    pub start: Pose,
    pub target: Pose,
    /// Eased progress last applied, in `[0, 1]`.
    pub progress: f32,
    pub completed: bool,
    /// Receives `on_transition_completed` when it arrives.
    pub notify: bool,
}

impl UnitTransition {
    /// Pose at eased progress `t`.
    #[inline]
    pub fn pose_at(&self, t: f32) -> Pose {
        self.start.lerp(&self.target, t)
    }
}

// ── TransitionState ───────────────────────────────────────────────────────────

/// Everything the driver knows about the current transition.
///
/// `config`, `boids`, and `conflicts` survive a stop so hosts can inspect
/// the last transition; `units` does not.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionState {
    pub is_transitioning: bool,
    /// Driver clock reading when the transition started.
    pub start_time: f64,
    /// Eased progress of the whole transition, in `[0, 1]`.  Never decreases
    /// while the transition runs.
    pub overall_progress: f32,
    pub units: Vec<UnitTransition>,
    /// Sanitized snapshot taken at start.
    pub config: TransitionConfig,
    pub boids: BoidsParams,
    /// Crossing diagnostics for the chosen assignment.
    pub conflicts: ConflictReport,
}

impl TransitionState {
    /// Drop the unit records and clear the running flag.
    pub(crate) fn clear_units(&mut self) {
        self.units.clear();
        self.is_transitioning = false;
    }

    /// Units that have not arrived yet.
    pub fn pending(&self) -> usize {
        self.units.iter().filter(|u| !u.completed).count()
    }
}
