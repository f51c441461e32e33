//! N×N cost matrices between a source and a target anchor set.
//!
//! `C[i][j]` is the cost of sending the agent at source anchor `i` to target
//! anchor `j`.  Every constructor requires equal-length inputs; a mismatch
//! is a caller contract violation and yields an empty matrix plus a warning.

use std::ops::{Index, IndexMut};

use fm_core::tuning::{
    ABSOLUTE_WEIGHT, FLOCKING_BONUS_SCALE, FLOCKING_MIN_COST, RELATIVE_SCALE, RELATIVE_WEIGHT,
};
use fm_core::{Aabb, safe_normal};
use glam::Vec3;

// ── CostMatrix ────────────────────────────────────────────────────────────────

/// Square, row-major matrix of finite, non-negative costs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    n: usize,
    data: Vec<f32>,
}

impl CostMatrix {
    /// `n × n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self { n, data: vec![0.0; n * n] }
    }

    /// Build by evaluating `cost(i, j)` for every cell.
    ///
    /// With the `parallel` feature, rows are filled on Rayon's pool.  Each
    /// cell depends only on `(i, j)`, so the result is identical.
    pub fn from_fn<F>(n: usize, cost: F) -> Self
    where
        F: Fn(usize, usize) -> f32 + Sync,
    {
        let mut data = vec![0.0; n * n];
        if n > 0 {
            #[cfg(not(feature = "parallel"))]
            {
                for (i, row) in data.chunks_mut(n).enumerate() {
                    for (j, cell) in row.iter_mut().enumerate() {
                        *cell = cost(i, j);
                    }
                }
            }

            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;

                data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                    for (j, cell) in row.iter_mut().enumerate() {
                        *cell = cost(i, j);
                    }
                });
            }
        }
        Self { n, data }
    }

    /// Build from nested rows.  Returns `None` unless every row has
    /// `rows.len()` entries.
    pub fn from_rows(rows: &[Vec<f32>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        Some(Self { n, data: rows.concat() })
    }

    /// Side length.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f32] {
        let n = self.n;
        &mut self.data[i * n..(i + 1) * n]
    }

    /// Sum of `C[i][assignment[i]]`, skipping out-of-range entries.
    pub fn total_cost(&self, assignment: &[usize]) -> f32 {
        assignment
            .iter()
            .enumerate()
            .filter(|&(i, &j)| i < self.n && j < self.n)
            .map(|(i, &j)| self[(i, j)])
            .sum()
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        &mut self.data[i * self.n + j]
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

fn checked_len(from: &[Vec3], to: &[Vec3], what: &str) -> Option<usize> {
    if from.len() != to.len() {
        log::warn!("{what}: anchor count mismatch ({} vs {})", from.len(), to.len());
        return None;
    }
    Some(from.len())
}

/// `C[i][j] = |from[i] − to[j]|` (3D Euclidean).
pub fn absolute_cost_matrix(from: &[Vec3], to: &[Vec3]) -> CostMatrix {
    let Some(n) = checked_len(from, to, "absolute_cost_matrix") else {
        return CostMatrix::default();
    };
    CostMatrix::from_fn(n, |i, j| from[i].distance(to[j]))
}

/// Translation- and scale-invariant cost blended with world distance.
///
/// Each set is centred on its AABB centre and divided per axis by its AABB
/// size; an axis of size ≤ 1 gets factor 0 and drops out.  Then
/// `C[i][j] = 0.7 · 1000 · |nf[i] − nt[j]| + 0.3 · |from[i] − to[j]|`.
pub fn relative_cost_matrix(from: &[Vec3], to: &[Vec3]) -> CostMatrix {
    let Some(n) = checked_len(from, to, "relative_cost_matrix") else {
        return CostMatrix::default();
    };
    let from_norm = normalize_to_box(from);
    let to_norm = normalize_to_box(to);

    CostMatrix::from_fn(n, |i, j| {
        let relative = from_norm[i].distance(to_norm[j]) * RELATIVE_SCALE;
        let absolute = from[i].distance(to[j]);
        relative * RELATIVE_WEIGHT + absolute * ABSOLUTE_WEIGHT
    })
}

fn normalize_to_box(points: &[Vec3]) -> Vec<Vec3> {
    let Some(aabb) = Aabb::from_points(points) else {
        return Vec::new();
    };
    let center = aabb.center();
    let size = aabb.size();
    let inv = |s: f32| if s > 1.0 { 1.0 / s } else { 0.0 };
    let factor = Vec3::new(inv(size.x), inv(size.y), inv(size.z));
    points.iter().map(|&p| (p - center) * factor).collect()
}

/// Absolute distance minus a bonus for keeping the group's layout.
///
/// With unit 0 as the shared reference, the bonus for `(i, j)` is
/// `100 · cos(from[i] − from[0], to[j] − to[0])`.  Each biased entry is
/// floored at 1.
pub fn flocking_cost_matrix(from: &[Vec3], to: &[Vec3]) -> CostMatrix {
    let Some(n) = checked_len(from, to, "flocking_cost_matrix") else {
        return CostMatrix::default();
    };
    if n == 0 {
        return CostMatrix::default();
    }
    let from_dirs: Vec<Vec3> = from.iter().map(|&p| safe_normal(p - from[0])).collect();
    let to_dirs: Vec<Vec3> = to.iter().map(|&p| safe_normal(p - to[0])).collect();

    CostMatrix::from_fn(n, |i, j| {
        let bonus = from_dirs[i].dot(to_dirs[j]) * FLOCKING_BONUS_SCALE;
        (from[i].distance(to[j]) - bonus).max(FLOCKING_MIN_COST)
    })
}
