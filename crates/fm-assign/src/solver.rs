//! Assignment solvers.
//!
//! Output convention: `A[i]` is the target index for source `i`.  Both
//! solvers iterate rows and columns in natural order, so ties always go to
//! the smallest index.  When a row finds no free column the row is mapped
//! to itself; that identity fallback is the only way a result can fail to
//! be a permutation, and it cannot happen on a square matrix.

use fm_core::tuning::HUNGARIAN_THRESHOLD;

use crate::cost::CostMatrix;

/// Reduced costs at or below this count as zero in the zero-cover pass.
const ZERO_TOLERANCE: f32 = 1e-8;

/// Which solver `solve` dispatches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolverKind {
    Hungarian,
    Greedy,
}

/// Hungarian up to `HUNGARIAN_THRESHOLD` rows, greedy beyond.
#[inline]
pub fn solver_kind(n: usize) -> SolverKind {
    if n <= HUNGARIAN_THRESHOLD { SolverKind::Hungarian } else { SolverKind::Greedy }
}

/// Solve with the solver chosen by [`solver_kind`].  Empty in, empty out.
pub fn solve(costs: &CostMatrix) -> Vec<usize> {
    if costs.is_empty() {
        return Vec::new();
    }
    let kind = solver_kind(costs.n());
    log::debug!("solving {n}x{n} assignment with {kind:?}", n = costs.n());
    match kind {
        SolverKind::Hungarian => solve_hungarian(costs),
        SolverKind::Greedy => solve_greedy(costs),
    }
}

/// `0, 1, …, n−1`.
#[inline]
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Approximate Hungarian method.
///
/// Row reduction, column reduction, then a greedy cover of (near-)zero
/// cells in row order.  Rows left uncovered take their cheapest free
/// column.  Exact whenever the reduced matrix admits a zero cover in row
/// order, which includes every permuted-copy and pure-translation input.
pub fn solve_hungarian(costs: &CostMatrix) -> Vec<usize> {
    let n = costs.n();
    let mut m = costs.clone();

    for i in 0..n {
        let row = m.row_mut(i);
        let min = row.iter().copied().fold(f32::INFINITY, f32::min);
        row.iter_mut().for_each(|c| *c -= min);
    }
    for j in 0..n {
        let min = (0..n).map(|i| m[(i, j)]).fold(f32::INFINITY, f32::min);
        for i in 0..n {
            m[(i, j)] -= min;
        }
    }

    let mut assignment: Vec<Option<usize>> = vec![None; n];
    let mut col_used = vec![false; n];

    for (i, slot) in assignment.iter_mut().enumerate() {
        if let Some(j) = (0..n).find(|&j| !col_used[j] && m[(i, j)].abs() <= ZERO_TOLERANCE) {
            *slot = Some(j);
            col_used[j] = true;
        }
    }
    let covered = assignment.iter().filter(|a| a.is_some()).count();
    log::trace!("hungarian zero cover assigned {covered}/{n} rows");

    assignment
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or_else(|| take_cheapest_free(m.row(i), &mut col_used, i)))
        .collect()
}

/// Greedy nearest-available: each row in order takes its cheapest free column.
pub fn solve_greedy(costs: &CostMatrix) -> Vec<usize> {
    let n = costs.n();
    let mut col_used = vec![false; n];
    (0..n).map(|i| take_cheapest_free(costs.row(i), &mut col_used, i)).collect()
}

/// Cheapest unused column of `row`, marked used.  Falls back to `fallback`
/// (without marking) when every column is taken.
fn take_cheapest_free(row: &[f32], col_used: &mut [bool], fallback: usize) -> usize {
    let mut best: Option<(usize, f32)> = None;
    for (j, &c) in row.iter().enumerate() {
        if !col_used[j] && best.is_none_or(|(_, b)| c < b) {
            best = Some((j, c));
        }
    }
    match best {
        Some((j, _)) => {
            col_used[j] = true;
            j
        }
        None => {
            log::trace!("row {fallback}: no free column, identity fallback");
            fallback
        }
    }
}
