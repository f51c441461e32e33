//! `fm-formation` — formation layouts for the formation transition workspace.
//!
//! A formation is an ordered list of local anchor offsets plus a world pose
//! (centre and rotation).  Index `i` of the anchor list is the identity of
//! anchor `i` everywhere downstream: assignments, cost matrices, and
//! transitions all refer to anchors by that index.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`data`]      | `FormationData`, `FormationType`, world anchors, AABB, validation |
//! | [`library`]   | Generators: square, circle, line, triangle, arrow, spiral, …  |
//! | [`transform`] | `scaled`, `rotated`, `moved`, `resized`, `transition_cost`    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.   |

pub mod data;
pub mod library;
pub mod transform;

#[cfg(test)]
mod tests;

pub use data::{FormationData, FormationType};
pub use transform::transition_cost;
