//! Fixed tuning constants.
//!
//! These values are part of the assignment contract: changing any of them
//! changes which anchor each agent is sent to.

/// Weight of the normalized-relative term in the relative cost matrix.
pub const RELATIVE_WEIGHT: f32 = 0.7;

/// Weight of the absolute Euclidean term in the relative cost matrix.
pub const ABSOLUTE_WEIGHT: f32 = 0.3;

/// Scale applied to normalized-relative distances (unit box → world-ish units).
pub const RELATIVE_SCALE: f32 = 1000.0;

/// Largest `N` solved by the Hungarian path; larger problems go greedy.
pub const HUNGARIAN_THRESHOLD: usize = 50;

/// Seconds a cached cost matrix stays valid.
pub const CACHE_LIFETIME_SECS: f64 = 1.0;

/// Same-shape test: per-axis tolerance is `max(a, b) * RELATIVE + ABSOLUTE`.
pub const SAME_SHAPE_RELATIVE_TOLERANCE: f32 = 0.10;
pub const SAME_SHAPE_ABSOLUTE_TOLERANCE: f32 = 1.0;

/// |Pearson ρ| between angle and radius above which a point set is a spiral.
pub const SPIRAL_CORRELATION_THRESHOLD: f32 = 0.7;

/// Minimum points before spiral detection is attempted.
pub const SPIRAL_MIN_POINTS: usize = 10;

/// Spiral sort key is `angle + SPIRAL_PARAMETER_K * distance`.
pub const SPIRAL_PARAMETER_K: f32 = 0.01;

/// Angle-sort bucket width (radians); angles in one bucket sort by distance.
pub const ANGLE_SORT_TOLERANCE: f32 = 0.01;

/// Penalty added to a swapped pair of targets that produced a path crossing.
pub const CONFLICT_PENALTY: f32 = 1000.0;

/// Cosine similarity is scaled by this before being subtracted from cost.
pub const FLOCKING_BONUS_SCALE: f32 = 100.0;

/// Floor applied to flocking-biased costs.
pub const FLOCKING_MIN_COST: f32 = 1.0;

/// Lower bound on transition duration, in seconds.
pub const MIN_TRANSITION_DURATION: f32 = 0.1;

/// Paths that do not cross but pass closer than this (world units, XY)
/// are counted as near misses by the conflict detector.
pub const CONFLICT_INTERSECTION_THRESHOLD: f32 = 50.0;
