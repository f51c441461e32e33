//! `fm-assign` — decides which target anchor each agent moves to.
//!
//! Inputs are two equal-length anchor lists in world space (`from` is where
//! the agents stand, `to` is the new formation).  Output is an assignment
//! vector `A` where agent `i` goes to `to[A[i]]`.  For every mode the result
//! is a permutation of `0..N` whenever the inputs have equal length.
//!
//! # Modules
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`cost`]       | `CostMatrix` and the absolute/relative/flocking constructors  |
//! | [`solver`]     | Approximate Hungarian and greedy solvers                      |
//! | [`spatial`]    | Spatial-order mapping and same-shape detection                |
//! | [`conflict`]   | Crossing-path detection with a severity score                 |
//! | [`cache`]      | Single-slot cost-matrix cache keyed on hashed positions       |
//! | [`strategy`]   | `assign`, the per-mode dispatch                               |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                         |
//! |------------|----------------------------------------------------------------|
//! | `parallel` | Fill cost-matrix rows on Rayon's pool.  Same results.          |
//! | `serde`    | Adds `Serialize`/`Deserialize` to `CostMatrix`, `ConflictReport`. |

pub mod cache;
pub mod conflict;
pub mod cost;
pub mod solver;
pub mod spatial;
pub mod strategy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cache::{CacheKey, CostMatrixCache, hash_positions};
pub use conflict::{ConflictReport, detect_path_conflicts};
pub use cost::{CostMatrix, absolute_cost_matrix, flocking_cost_matrix, relative_cost_matrix};
pub use solver::{SolverKind, identity, solve, solve_greedy, solve_hungarian, solver_kind};
pub use spatial::{is_formation_translation, spatial_order_mapping};
pub use strategy::{
    assign, assign_cached, base_cost_matrix, path_aware_assignment, rts_flock_assignment,
};
