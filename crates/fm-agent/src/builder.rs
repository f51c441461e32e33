//! Fluent builder for populating an `AgentStore` in one step.
//!
//! # Usage
//!
//! ```rust
//! use fm_agent::{AgentHost, AgentStoreBuilder};
//! use glam::Vec3;
//!
//! let (store, handles) = AgentStoreBuilder::new()
//!     .at_positions(&[Vec3::ZERO, Vec3::X * 100.0, Vec3::X * 200.0])
//!     .build();
//!
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.pose(handles[1]).unwrap().position, Vec3::X * 100.0);
//! ```

use glam::Vec3;

use fm_core::AgentHandle;

use crate::participant::FormationParticipant;
use crate::pose::Pose;
use crate::store::AgentStore;

/// Fluent builder for [`AgentStore`].
///
/// Agents are spawned in the order they are added, so `handles[i]` from
/// [`build`](Self::build) is the `i`-th agent added.
#[derive(Default)]
pub struct AgentStoreBuilder {
    agents: Vec<(Pose, Option<Box<dyn FormationParticipant>>)>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One agent at `pose` with no hooks.
    pub fn agent(mut self, pose: Pose) -> Self {
        self.agents.push((pose, None));
        self
    }

    /// One agent at `pose` with participant hooks.
    pub fn participant(mut self, pose: Pose, participant: Box<dyn FormationParticipant>) -> Self {
        self.agents.push((pose, Some(participant)));
        self
    }

    /// One hook-less agent per position, identity rotation, unit scale.
    pub fn at_positions(mut self, positions: &[Vec3]) -> Self {
        self.agents.extend(positions.iter().map(|&p| (Pose::at(p), None)));
        self
    }

    /// Construct the store.  Returns the handles in insertion order.
    pub fn build(self) -> (AgentStore, Vec<AgentHandle>) {
        let mut store = AgentStore::with_capacity(self.agents.len());
        let handles = self
            .agents
            .into_iter()
            .map(|(pose, participant)| match participant {
                Some(p) => store.spawn_with_participant(pose, p),
                None => store.spawn(pose),
            })
            .collect();
        (store, handles)
    }
}
