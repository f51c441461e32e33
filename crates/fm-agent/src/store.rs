//! `AgentStore`: generational Structure-of-Arrays agent storage.
//!
//! Slots are reused after despawn.  Each slot carries a generation counter
//! that is bumped on despawn, so a handle minted before the despawn no
//! longer resolves even once a new agent occupies the slot.

use fm_core::AgentHandle;
use glam::{Quat, Vec3};

use crate::host::AgentHost;
use crate::participant::FormationParticipant;
use crate::pose::Pose;

/// SoA pose storage with generational handles.
///
/// Every `Vec` has one entry per slot (live or free); `handle.slot()` indexes
/// all of them.  Pose arrays are public for bulk reads; go through a handle
/// for anything that must respect liveness.
#[derive(Default)]
pub struct AgentStore {
    pub positions: Vec<Vec3>,
    pub rotations: Vec<Quat>,
    pub scales: Vec<Vec3>,

    generations: Vec<u32>,
    alive: Vec<bool>,
    participants: Vec<Option<Box<dyn FormationParticipant>>>,
    free: Vec<u32>,
    live: usize,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            rotations: Vec::with_capacity(capacity),
            scales: Vec::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
            alive: Vec::with_capacity(capacity),
            participants: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots, live or free.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.generations.len()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Add an agent with no participant hooks.
    pub fn spawn(&mut self, pose: Pose) -> AgentHandle {
        self.insert(pose, None)
    }

    /// Add an agent whose hooks are called by `start_transition_with_interface`.
    pub fn spawn_with_participant(
        &mut self,
        pose: Pose,
        participant: Box<dyn FormationParticipant>,
    ) -> AgentHandle {
        self.insert(pose, Some(participant))
    }

    fn insert(&mut self, pose: Pose, participant: Option<Box<dyn FormationParticipant>>) -> AgentHandle {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = index as usize;
            self.positions[slot] = pose.position;
            self.rotations[slot] = pose.rotation;
            self.scales[slot] = pose.scale;
            self.alive[slot] = true;
            self.participants[slot] = participant;
            return AgentHandle::new(index, self.generations[slot]);
        }

        let index = self.generations.len() as u32;
        self.positions.push(pose.position);
        self.rotations.push(pose.rotation);
        self.scales.push(pose.scale);
        self.generations.push(0);
        self.alive.push(true);
        self.participants.push(participant);
        AgentHandle::new(index, 0)
    }

    /// Remove an agent.  Returns `false` if the handle was already stale.
    pub fn despawn(&mut self, agent: AgentHandle) -> bool {
        if !self.is_alive(agent) {
            return false;
        }
        let slot = agent.slot();
        self.alive[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.participants[slot] = None;
        self.free.push(agent.index);
        self.live -= 1;
        log::trace!("despawned {agent}");
        true
    }

    /// `true` if `agent` still refers to the agent it was minted for.
    #[inline]
    pub fn is_alive(&self, agent: AgentHandle) -> bool {
        let slot = agent.slot();
        slot < self.generations.len() && self.alive[slot] && self.generations[slot] == agent.generation
    }

    /// Handles of all live agents, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = AgentHandle> + '_ {
        self.alive
            .iter()
            .zip(&self.generations)
            .enumerate()
            .filter(|&(_, (&alive, _))| alive)
            .map(|(slot, (_, &generation))| AgentHandle::new(slot as u32, generation))
    }
}

impl AgentHost for AgentStore {
    fn pose(&self, agent: AgentHandle) -> Option<Pose> {
        if !self.is_alive(agent) {
            return None;
        }
        let slot = agent.slot();
        Some(Pose::new(self.positions[slot], self.rotations[slot], self.scales[slot]))
    }

    fn set_pose(&mut self, agent: AgentHandle, pose: Pose) -> bool {
        if !self.is_alive(agent) {
            return false;
        }
        let slot = agent.slot();
        self.positions[slot] = pose.position;
        self.rotations[slot] = pose.rotation;
        self.scales[slot] = pose.scale;
        true
    }

    fn participant_mut(&mut self, agent: AgentHandle) -> Option<&mut dyn FormationParticipant> {
        if !self.is_alive(agent) {
            return None;
        }
        match self.participants[agent.slot()].as_mut() {
            Some(participant) => Some(participant.as_mut()),
            None => None,
        }
    }
}
