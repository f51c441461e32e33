//! Weak, generational agent handles.
//!
//! The core never owns agents.  A handle is `(index, generation)`: the host
//! bumps the generation of a slot whenever the agent living there is
//! destroyed, so a stale handle simply fails to resolve instead of aliasing
//! a newer agent.

use std::fmt;

/// Non-owning reference to a host-owned agent.
///
/// `Copy + Ord + Hash` so handles can be used as map keys and sorted without
/// ceremony.  Resolving a handle is the host's job (see `fm-agent`'s
/// `AgentHost`); an expired handle resolves to `None`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentHandle {
    pub index:      u32,
    pub generation: u32,
}

impl AgentHandle {
    /// Sentinel meaning "no agent".  Never resolves.
    pub const INVALID: AgentHandle = AgentHandle { index: u32::MAX, generation: u32::MAX };

    #[inline]
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Cast the slot index to `usize` for direct `Vec` indexing.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.index as usize
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

impl Default for AgentHandle {
    /// Returns the `INVALID` sentinel so uninitialized handles are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent({}v{})", self.index, self.generation)
    }
}
