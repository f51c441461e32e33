//! Mode dispatch: one function per `AssignmentMode`.
//!
//! | Mode                              | Strategy                                        |
//! |-----------------------------------|-------------------------------------------------|
//! | `OptimizedAssignment`             | relative cost matrix, `solve`                   |
//! | `SimpleAssignment`                | absolute cost matrix, `solve`                   |
//! | `DirectMapping`                   | identity                                        |
//! | `DirectRelativePositionMatching`  | `spatial_order_mapping`                         |
//! | `SpatialOrderMapping`             | `spatial_order_mapping`                         |
//! | `RtsFlockMovement`                | flocking-biased absolute matrix, `solve`        |
//! | `PathAwareAssignment`             | spatial order, then penalised re-solve on crossings |

use fm_core::AssignmentMode;
use fm_core::tuning::CONFLICT_PENALTY;
use glam::Vec3;

use crate::cache::{CacheKey, CostMatrixCache};
use crate::conflict::detect_path_conflicts;
use crate::cost::{CostMatrix, absolute_cost_matrix, flocking_cost_matrix, relative_cost_matrix};
use crate::solver::{identity, solve};
use crate::spatial::spatial_order_mapping;

/// The cost matrix `mode` solves over, or `None` for modes that do not
/// build one (direct and spatial-order modes).
///
/// For `PathAwareAssignment` this is the relative matrix before conflict
/// penalties are added.
pub fn base_cost_matrix(from: &[Vec3], to: &[Vec3], mode: AssignmentMode) -> Option<CostMatrix> {
    match mode {
        AssignmentMode::OptimizedAssignment | AssignmentMode::PathAwareAssignment => {
            Some(relative_cost_matrix(from, to))
        }
        AssignmentMode::SimpleAssignment => Some(absolute_cost_matrix(from, to)),
        AssignmentMode::RtsFlockMovement => Some(flocking_cost_matrix(from, to)),
        AssignmentMode::DirectMapping
        | AssignmentMode::DirectRelativePositionMatching
        | AssignmentMode::SpatialOrderMapping => None,
    }
}

/// Assign every source anchor a target anchor using `mode`.
///
/// Returns `N` indices in `[0, N)`.  Mismatched lengths log a warning and
/// return an empty assignment.
pub fn assign(from: &[Vec3], to: &[Vec3], mode: AssignmentMode) -> Vec<usize> {
    resolve(from, to, mode, || base_cost_matrix(from, to, mode))
}

/// [`assign`], reusing `cache` for the mode's cost matrix.
///
/// `now` is the caller's clock in seconds.  Modes without a cost matrix
/// bypass the cache.
pub fn assign_cached(
    from: &[Vec3],
    to: &[Vec3],
    mode: AssignmentMode,
    cache: &mut CostMatrixCache,
    now: f64,
) -> Vec<usize> {
    resolve(from, to, mode, || {
        let key = CacheKey::new(from, to, mode);
        let costs = cache.get_or_compute(key, now, || base_cost_matrix(from, to, mode).unwrap_or_default());
        Some(costs.clone())
    })
}

/// Flocking-biased absolute assignment.  `N < 2` is the identity.
pub fn rts_flock_assignment(from: &[Vec3], to: &[Vec3]) -> Vec<usize> {
    assign(from, to, AssignmentMode::RtsFlockMovement)
}

/// Spatial-order assignment, re-solved with penalties if any paths cross.
///
/// For every crossing pair `(u1, u2)` of the spatial-order result, the
/// relative cost of swapping their targets (`C[u1][t(u2)]` and
/// `C[u2][t(u1)]`) is raised by `CONFLICT_PENALTY` before re-solving.
/// The re-solved mapping is kept only if it crosses strictly less often
/// than the spatial-order one.
pub fn path_aware_assignment(from: &[Vec3], to: &[Vec3]) -> Vec<usize> {
    assign(from, to, AssignmentMode::PathAwareAssignment)
}

fn path_aware_with<F>(from: &[Vec3], to: &[Vec3], relative: F) -> Vec<usize>
where
    F: FnOnce() -> Option<CostMatrix>,
{
    let n = from.len();
    let initial = spatial_order_mapping(from, to);
    let conflicts = detect_path_conflicts(&initial, from, to);
    if !conflicts.has_conflict {
        return initial;
    }

    let Some(mut costs) = relative().filter(|c| c.n() == n) else {
        return initial;
    };
    log::debug!("path-aware: penalising {} crossing pairs and re-solving", conflicts.total);
    for &(u1, u2) in &conflicts.pairs {
        let (t1, t2) = (initial[u1], initial[u2]);
        costs[(u1, t2)] += CONFLICT_PENALTY;
        costs[(u2, t1)] += CONFLICT_PENALTY;
    }
    let resolved = solve(&costs);
    let remaining = detect_path_conflicts(&resolved, from, to).total;
    if remaining < conflicts.total {
        resolved
    } else {
        log::debug!("path-aware: re-solve left {remaining} crossings, keeping spatial order");
        initial
    }
}

fn resolve<F>(from: &[Vec3], to: &[Vec3], mode: AssignmentMode, matrix: F) -> Vec<usize>
where
    F: FnOnce() -> Option<CostMatrix>,
{
    if from.len() != to.len() {
        log::warn!("assign({mode}): anchor count mismatch ({} vs {})", from.len(), to.len());
        return Vec::new();
    }
    let n = from.len();

    match mode {
        AssignmentMode::DirectMapping => identity(n),
        AssignmentMode::DirectRelativePositionMatching | AssignmentMode::SpatialOrderMapping => {
            spatial_order_mapping(from, to)
        }
        AssignmentMode::RtsFlockMovement if n < 2 => identity(n),
        AssignmentMode::PathAwareAssignment => path_aware_with(from, to, matrix),
        AssignmentMode::OptimizedAssignment
        | AssignmentMode::SimpleAssignment
        | AssignmentMode::RtsFlockMovement => match matrix() {
            Some(costs) if costs.n() == n => solve(&costs),
            _ => identity(n),
        },
    }
}
