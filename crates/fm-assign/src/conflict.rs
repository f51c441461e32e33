//! Path-conflict detection between agent trajectories.

use fm_core::tuning::CONFLICT_INTERSECTION_THRESHOLD;
use fm_core::{paths_intersect, safe_normal};
use glam::{Vec2, Vec3};

/// Crossing diagnostics for one assignment.
///
/// `pairs` is empty exactly when `has_conflict` is `false`; `total` is
/// always `pairs.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictReport {
    pub has_conflict: bool,
    /// Source index pairs `(i, j)` with `i < j` whose straight paths cross.
    pub pairs: Vec<(usize, usize)>,
    /// Mean of `sin(crossing angle)` over all pairs, in `[0, 1]`.
    /// 1.0 means every crossing is perpendicular.
    pub severity: f32,
    pub total: usize,
    /// Pairs that do not cross but pass within
    /// `CONFLICT_INTERSECTION_THRESHOLD` of each other.  Diagnostic only.
    pub near_misses: usize,
}

/// Test every pair of straight paths `from[i] → to[assignment[i]]` for an
/// XY crossing.
///
/// Entries whose target index is out of range are skipped.  The crossing
/// angle uses full 3D directions; a zero-length path has no direction and
/// contributes a severity of 1.  Non-crossing pairs closer than
/// `CONFLICT_INTERSECTION_THRESHOLD` in XY are counted in `near_misses`.
pub fn detect_path_conflicts(assignment: &[usize], from: &[Vec3], to: &[Vec3]) -> ConflictReport {
    let n = assignment.len().min(from.len());
    let paths: Vec<Option<(Vec3, Vec3)>> = (0..n)
        .map(|i| to.get(assignment[i]).map(|&end| (from[i], end)))
        .collect();

    let mut report = ConflictReport::default();
    let mut severity_sum = 0.0f32;

    for i in 0..n {
        let Some((s1, e1)) = paths[i] else { continue };
        for (j, path) in paths.iter().enumerate().skip(i + 1) {
            let Some((s2, e2)) = *path else { continue };
            if !paths_intersect(s1, e1, s2, e2) {
                if segment_gap_xy(s1, e1, s2, e2) < CONFLICT_INTERSECTION_THRESHOLD {
                    report.near_misses += 1;
                }
                continue;
            }
            let cos = safe_normal(e1 - s1).dot(safe_normal(e2 - s2)).clamp(-1.0, 1.0);
            severity_sum += cos.acos().sin();
            report.pairs.push((i, j));
        }
    }

    report.total = report.pairs.len();
    report.has_conflict = report.total > 0;
    if report.has_conflict {
        report.severity = severity_sum / report.total as f32;
        log::debug!("{} path conflicts, severity {:.3}", report.total, report.severity);
    }
    if report.near_misses > 0 {
        log::debug!("{} near-miss path pairs", report.near_misses);
    }
    report
}

/// XY distance between two segments known not to cross: the smallest
/// endpoint-to-segment distance.
fn segment_gap_xy(start1: Vec3, end1: Vec3, start2: Vec3, end2: Vec3) -> f32 {
    let (a, b) = (start1.truncate(), end1.truncate());
    let (c, d) = (start2.truncate(), end2.truncate());
    point_segment_distance(a, c, d)
        .min(point_segment_distance(b, c, d))
        .min(point_segment_distance(c, a, b))
        .min(point_segment_distance(d, a, b))
}

fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
