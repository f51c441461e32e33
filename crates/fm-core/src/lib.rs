//! `fm-core` — foundational types for the formation transition workspace.
//!
//! This crate is a dependency of every other `fm-*` crate.  It has no `fm-*`
//! dependencies and only small external ones (`glam`, `log`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentHandle`, the weak generational agent reference      |
//! | [`geometry`]    | `Aabb`, `paths_intersect`, `facing_rotation`              |
//! | [`math`]        | `apply_easing`, `limit_vector`, `safe_normal`             |
//! | [`boids`]       | `BoidsParams`, separation/alignment/cohesion/seek forces  |
//! | [`mode`]        | `AssignmentMode` enum                                     |
//! | [`clock`]       | `TransitionClock`, a host-driven seconds accumulator      |
//! | [`config`]      | `TransitionConfig`, the per-transition snapshot           |
//! | [`rng`]         | `FormationRng`, a seeded RNG wrapper                      |
//! | [`tuning`]      | Fixed tuning constants shared by the assignment crates    |
//! | [`error`]       | `FormationError`, `FormationResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod boids;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod math;
pub mod mode;
pub mod rng;
pub mod tuning;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boids::BoidsParams;
pub use clock::TransitionClock;
pub use config::TransitionConfig;
pub use error::{FormationError, FormationResult};
pub use geometry::{Aabb, facing_rotation, paths_intersect};
pub use ids::AgentHandle;
pub use math::{apply_easing, limit_vector, safe_normal};
pub use mode::AssignmentMode;
pub use rng::FormationRng;

pub use glam::{Quat, Vec2, Vec3};
