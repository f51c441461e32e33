//! `fm-agent` — the host seam of the formation transition workspace.
//!
//! The transition driver never owns agents.  It sees them through
//! [`AgentHost`], a pair of pose accessors keyed by weak
//! [`AgentHandle`](fm_core::AgentHandle)s, plus an optional
//! [`FormationParticipant`] hook set per agent.  Engines implement
//! `AgentHost` over their own entity storage; [`AgentStore`] is a ready-made
//! implementation for tests, tools, and headless hosts.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`pose`]        | `Pose` (position, rotation, scale) and interpolation      |
//! | [`participant`] | `FormationParticipant` notification hooks                 |
//! | [`host`]        | `AgentHost` trait                                         |
//! | [`store`]       | `AgentStore`, a generational SoA `AgentHost`              |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Pose`.             |

pub mod builder;
pub mod host;
pub mod participant;
pub mod pose;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use host::AgentHost;
pub use participant::FormationParticipant;
pub use pose::Pose;
pub use store::AgentStore;
