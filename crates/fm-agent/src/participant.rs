//! The `FormationParticipant` trait: optional per-agent transition hooks.

use fm_core::TransitionConfig;
use glam::Vec3;

/// Notifications an agent may opt into.
///
/// Every method has a default, so an agent that implements nothing behaves
/// exactly like an agent with no participant at all: it receives no calls
/// and still moves.  Hooks are only invoked by the driver's
/// `start_transition_with_interface`.
///
/// Returning `false` from [`can_participate`][Self::can_participate] skips
/// the notifications for that agent.  It does not exclude the agent from
/// motion.
///
/// # Example
///
/// ```rust
/// use fm_agent::FormationParticipant;
/// use glam::Vec3;
///
/// #[derive(Default)]
/// struct ArrivalCounter { arrivals: u32 }
///
/// impl FormationParticipant for ArrivalCounter {
///     fn on_transition_completed(&mut self, _final_position: Vec3) {
///         self.arrivals += 1;
///     }
/// }
/// ```
pub trait FormationParticipant: Send {
    /// The agent's target anchor has been chosen.
    fn on_position_assigned(&mut self, _target: Vec3, _config: &TransitionConfig) {}

    /// Motion from `start` toward `target` begins with the next tick.
    fn on_transition_started(&mut self, _start: Vec3, _target: Vec3, _config: &TransitionConfig) {}

    /// The agent reached its target, or was snapped there by a stop.
    fn on_transition_completed(&mut self, _final_position: Vec3) {}

    /// Whether this agent wants notifications for the next transition.
    fn can_participate(&self) -> bool {
        true
    }
}
