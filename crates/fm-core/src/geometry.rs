//! Bounding boxes, segment intersection, and facing rotations.
//!
//! All path tests work in the XY (ground) plane and ignore Z.

use glam::{Quat, Vec2, Vec3};

use crate::math::is_nearly_zero;

/// Tolerance for "parallel" cross products and degenerate segment lengths.
const PARALLEL_EPSILON: f32 = 1e-6;

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box of a point set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// A zero-size box at `at`.
    #[inline]
    pub fn degenerate(at: Vec3) -> Self {
        Self { min: at, max: at }
    }

    /// Tightest box around `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::degenerate(*first);
        for &p in rest {
            aabb.extend(p);
        }
        Some(aabb)
    }

    /// Grow the box to contain `p`.
    #[inline]
    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

// ── Segment intersection ──────────────────────────────────────────────────────

/// `true` if segment `start1→end1` crosses or overlaps `start2→end2` in XY.
///
/// Non-parallel segments intersect when both line parameters lie in
/// `[0, 1]`.  Parallel segments (`|cross| < 1e-6`) intersect only when they
/// are collinear and their projections overlap.  Zero-length segments are
/// treated as points, which keeps the test symmetric in its two segments.
pub fn paths_intersect(start1: Vec3, end1: Vec3, start2: Vec3, end2: Vec3) -> bool {
    let a = start1.truncate();
    let b = end1.truncate();
    let c = start2.truncate();
    let d = end2.truncate();

    let ab = b - a;
    let cd = d - c;
    let ac = c - a;

    let denom = ab.perp_dot(cd);
    if denom.abs() < PARALLEL_EPSILON {
        return collinear_overlap(a, ab, c, cd, ac);
    }

    let t = ac.perp_dot(cd) / denom;
    let u = ac.perp_dot(ab) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

fn collinear_overlap(a: Vec2, ab: Vec2, c: Vec2, cd: Vec2, ac: Vec2) -> bool {
    // C on line AB and A on line CD; either test is vacuous for a point.
    if ac.perp_dot(ab).abs() >= PARALLEL_EPSILON || ac.perp_dot(cd).abs() >= PARALLEL_EPSILON {
        return false;
    }

    let ab_len_sq = ab.length_squared();
    let cd_len_sq = cd.length_squared();
    if ab_len_sq <= PARALLEL_EPSILON && cd_len_sq <= PARALLEL_EPSILON {
        return ac.length_squared() <= PARALLEL_EPSILON;
    }

    // Project the other segment onto the longer one.
    let (origin, dir, len_sq, p, q) = if ab_len_sq >= cd_len_sq {
        (a, ab, ab_len_sq, c, c + cd)
    } else {
        (c, cd, cd_len_sq, a, a + ab)
    };
    let t1 = (p - origin).dot(dir) / len_sq;
    let t2 = (q - origin).dot(dir) / len_sq;
    t1.max(t2) >= 0.0 && t1.min(t2) <= 1.0
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// Rotation that turns the forward axis (+X) onto `direction`, with no roll.
///
/// Returns `None` for a (nearly) zero direction; callers keep their current
/// rotation in that case.
pub fn facing_rotation(direction: Vec3) -> Option<Quat> {
    if is_nearly_zero(direction) {
        return None;
    }
    let yaw = direction.y.atan2(direction.x);
    let pitch = direction.z.atan2(direction.truncate().length());
    Some(Quat::from_rotation_z(yaw) * Quat::from_rotation_y(-pitch))
}
