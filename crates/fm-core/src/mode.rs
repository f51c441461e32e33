//! Assignment algorithm selector.

use std::fmt;

/// Which strategy maps source anchors onto target anchors.
///
/// Dispatch lives in `fm-assign::assign`; this crate only names the modes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignmentMode {
    /// Relative cost matrix, general solver.
    OptimizedAssignment,
    /// Absolute Euclidean cost matrix, general solver.
    SimpleAssignment,
    /// Agent `i` goes to anchor `i`.
    DirectMapping,
    /// Spatial-order mapping.
    #[default]
    DirectRelativePositionMatching,
    /// Absolute cost biased toward keeping the group's relative layout.
    RtsFlockMovement,
    /// Spatial-order mapping, then re-solve with penalties on crossing pairs.
    PathAwareAssignment,
    /// Same-shape normalized matching, else angle/spiral sort.
    SpatialOrderMapping,
}

impl AssignmentMode {
    pub const ALL: [AssignmentMode; 7] = [
        AssignmentMode::OptimizedAssignment,
        AssignmentMode::SimpleAssignment,
        AssignmentMode::DirectMapping,
        AssignmentMode::DirectRelativePositionMatching,
        AssignmentMode::RtsFlockMovement,
        AssignmentMode::PathAwareAssignment,
        AssignmentMode::SpatialOrderMapping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentMode::OptimizedAssignment => "optimized",
            AssignmentMode::SimpleAssignment => "simple",
            AssignmentMode::DirectMapping => "direct",
            AssignmentMode::DirectRelativePositionMatching => "direct-relative",
            AssignmentMode::RtsFlockMovement => "rts-flock",
            AssignmentMode::PathAwareAssignment => "path-aware",
            AssignmentMode::SpatialOrderMapping => "spatial-order",
        }
    }

    /// `true` for modes whose result is always a permutation of `0..N`.
    ///
    /// The remaining modes are permutations in practice but may take the
    /// solver's identity fallback on a degenerate matrix.
    pub fn yields_permutation(self) -> bool {
        matches!(
            self,
            AssignmentMode::OptimizedAssignment
                | AssignmentMode::SimpleAssignment
                | AssignmentMode::DirectMapping
                | AssignmentMode::SpatialOrderMapping
                | AssignmentMode::DirectRelativePositionMatching
        )
    }
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
