//! The `AgentHost` trait: how the driver reads and writes agent poses.

use fm_core::AgentHandle;

use crate::participant::FormationParticipant;
use crate::pose::Pose;

/// Host-owned agent storage as seen by the driver.
///
/// Handles are weak.  An expired or unknown handle must resolve to `None`
/// (and `set_pose` must return `false`); the driver treats that as "skip
/// this agent", never as an error.
pub trait AgentHost {
    /// Current world pose of `agent`, or `None` if the handle has expired.
    fn pose(&self, agent: AgentHandle) -> Option<Pose>;

    /// Overwrite the pose of `agent`.  Returns `false` if the handle has
    /// expired.  The driver writes nothing but poses.
    fn set_pose(&mut self, agent: AgentHandle, pose: Pose) -> bool;

    /// Participant hooks for `agent`, if it has any.
    ///
    /// Default: no agent has hooks.
    fn participant_mut(&mut self, _agent: AgentHandle) -> Option<&mut dyn FormationParticipant> {
        None
    }
}
