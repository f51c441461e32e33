//! Spatial-order mapping and same-shape detection.
//!
//! When the two formations have the same footprint, anchors are matched by
//! their position inside the bounding box.  Otherwise both sets are sorted
//! the same way (by angle around the box centre, or along the spiral when
//! both sets are spirals) and matched rank for rank.

use fm_core::Aabb;
use fm_core::tuning::{
    ANGLE_SORT_TOLERANCE, SAME_SHAPE_ABSOLUTE_TOLERANCE, SAME_SHAPE_RELATIVE_TOLERANCE,
    SPIRAL_CORRELATION_THRESHOLD, SPIRAL_MIN_POINTS, SPIRAL_PARAMETER_K,
};
use glam::Vec3;

use crate::cost::CostMatrix;
use crate::solver::{identity, solve};

// ── Same-shape detection ──────────────────────────────────────────────────────

#[inline]
fn axis_matches(a: f32, b: f32) -> bool {
    (a - b).abs() <= a.max(b) * SAME_SHAPE_RELATIVE_TOLERANCE + SAME_SHAPE_ABSOLUTE_TOLERANCE
}

/// Footprints match on X and Y.  Z is not compared.
fn same_footprint_xy(from: Vec3, to: Vec3) -> bool {
    axis_matches(from.x, to.x) && axis_matches(from.y, to.y)
}

/// `true` if `to` looks like `from` moved without reshaping: bounding-box
/// sizes agree on all three axes within `max · 0.10 + 1.0`.
///
/// Returns `false` if either set is empty or the counts differ.
pub fn is_formation_translation(from: &[Vec3], to: &[Vec3]) -> bool {
    if from.len() != to.len() {
        return false;
    }
    let (Some(a), Some(b)) = (Aabb::from_points(from), Aabb::from_points(to)) else {
        return false;
    };
    let (sa, sb) = (a.size(), b.size());
    axis_matches(sa.x, sb.x) && axis_matches(sa.y, sb.y) && axis_matches(sa.z, sb.z)
}

// ── Spatial-order mapping ─────────────────────────────────────────────────────

/// Match anchors by their place in the shape rather than by distance.
///
/// * `N ≤ 2`: identity.
/// * Same X/Y footprint: points are normalised into their own box
///   (`(p − min) / max(size, 1)`) and matched by the general solver on
///   normalised Euclidean distance.
/// * Otherwise: both sets sorted by angle around the box centre (angles
///   within 0.01 rad tie, then nearer first), or by `angle + 0.01 · distance`
///   when both sets are spirals, and matched rank for rank.
///
/// Mismatched lengths log a warning and map only the common prefix.
pub fn spatial_order_mapping(from: &[Vec3], to: &[Vec3]) -> Vec<usize> {
    if from.len() != to.len() {
        log::warn!("spatial_order_mapping: anchor count mismatch ({} vs {})", from.len(), to.len());
    }
    let n = from.len().min(to.len());
    let (from, to) = (&from[..n], &to[..n]);
    if n <= 2 {
        return identity(n);
    }

    let (Some(from_box), Some(to_box)) = (Aabb::from_points(from), Aabb::from_points(to)) else {
        return identity(n);
    };
    let (from_size, to_size) = (from_box.size(), to_box.size());

    if same_footprint_xy(from_size, to_size) {
        log::debug!("spatial_order_mapping: same footprint {from_size} ~ {to_size}, matching in box space");
        let nf = normalize_to_min(from, &from_box);
        let nt = normalize_to_min(to, &to_box);
        return solve(&CostMatrix::from_fn(n, |i, j| nf[i].distance(nt[j])));
    }

    let mut from_records = sort_records(from, from_box.center());
    let mut to_records = sort_records(to, to_box.center());

    if is_spiral(&from_records) && is_spiral(&to_records) {
        log::debug!("spatial_order_mapping: both formations are spirals, sorting by spiral parameter");
        sort_by_spiral(&mut from_records);
        sort_by_spiral(&mut to_records);
    } else {
        log::debug!("spatial_order_mapping: footprints differ ({from_size} vs {to_size}), sorting by angle");
        sort_by_angle(&mut from_records);
        sort_by_angle(&mut to_records);
    }

    let mut assignment = identity(n);
    for (f, t) in from_records.iter().zip(&to_records) {
        assignment[f.index] = t.index;
    }
    assignment
}

fn normalize_to_min(points: &[Vec3], aabb: &Aabb) -> Vec<Vec3> {
    let size = aabb.size().max(Vec3::ONE);
    points.iter().map(|&p| (p - aabb.min) / size).collect()
}

// ── Sort records ──────────────────────────────────────────────────────────────

/// Polar coordinates of one anchor around its formation's box centre.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SortRecord {
    index: usize,
    angle: f32,
    distance: f32,
}

pub(crate) fn sort_records(points: &[Vec3], center: Vec3) -> Vec<SortRecord> {
    points
        .iter()
        .enumerate()
        .map(|(index, &p)| {
            let rel = p - center;
            SortRecord { index, angle: rel.y.atan2(rel.x), distance: rel.length() }
        })
        .collect()
}

/// Angles are bucketed to `ANGLE_SORT_TOLERANCE` so the ordering is a
/// total order; within a bucket nearer anchors come first.
fn sort_by_angle(records: &mut [SortRecord]) {
    let bucket = |angle: f32| (angle / ANGLE_SORT_TOLERANCE).round() as i64;
    records.sort_by(|a, b| {
        bucket(a.angle)
            .cmp(&bucket(b.angle))
            .then_with(|| a.distance.total_cmp(&b.distance))
            .then_with(|| a.index.cmp(&b.index))
    });
}

fn sort_by_spiral(records: &mut [SortRecord]) {
    let key = |r: &SortRecord| r.angle + SPIRAL_PARAMETER_K * r.distance;
    records.sort_by(|a, b| key(a).total_cmp(&key(b)).then_with(|| a.index.cmp(&b.index)));
}

/// Pearson correlation between angle and distance exceeds the spiral
/// threshold.  Needs at least `SPIRAL_MIN_POINTS` points and non-zero
/// variance in both variables.
pub(crate) fn is_spiral(records: &[SortRecord]) -> bool {
    if records.len() < SPIRAL_MIN_POINTS {
        return false;
    }
    let n = records.len() as f64;
    let (mut sa, mut sd, mut sad, mut saa, mut sdd) = (0.0f64, 0.0f64, 0.0f64, 0.0f64, 0.0f64);
    for r in records {
        let (a, d) = (r.angle as f64, r.distance as f64);
        sa += a;
        sd += d;
        sad += a * d;
        saa += a * a;
        sdd += d * d;
    }
    let var_a = n * saa - sa * sa;
    let var_d = n * sdd - sd * sd;
    if var_a <= f64::EPSILON || var_d <= f64::EPSILON {
        return false;
    }
    let rho = (n * sad - sa * sd) / (var_a.sqrt() * var_d.sqrt());
    rho.abs() > SPIRAL_CORRELATION_THRESHOLD as f64
}
