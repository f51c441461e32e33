//! Formation data model.

use fm_core::{Aabb, FormationError, FormationResult};
use glam::{Quat, Vec2, Vec3};

/// Shape tag.  Drives regeneration in [`FormationData::resized`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormationType {
    #[default]
    Square,
    Circle,
    Line,
    Triangle,
    Arrow,
    Spiral,
    SolidCircle,
    Zigzag,
    Custom,
}

/// One formation layout.
///
/// `positions` are local offsets from `center`, rotated by `rotation` when
/// projected into the world.  The driver only ever reads a formation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormationData {
    pub formation_type: FormationType,
    pub center: Vec3,
    pub rotation: Quat,
    pub positions: Vec<Vec3>,
    /// Footprint hint in local XY; informational except for `resized`.
    pub size: Vec2,
    pub spacing: f32,
}

impl Default for FormationData {
    fn default() -> Self {
        Self {
            formation_type: FormationType::Square,
            center: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            positions: Vec::new(),
            size: Vec2::splat(100.0),
            spacing: 100.0,
        }
    }
}

impl FormationData {
    /// Empty formation of the given type at the given pose.
    pub fn new(formation_type: FormationType, center: Vec3, rotation: Quat) -> Self {
        Self { formation_type, center, rotation, ..Self::default() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// World anchor for local offset `local`.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.center + self.rotation * local
    }

    /// World anchors in anchor order: `center + rotation * local`.
    pub fn world_positions(&self) -> Vec<Vec3> {
        self.positions.iter().map(|&p| self.to_world(p)).collect()
    }

    /// Bounding box of the world anchors.
    ///
    /// An empty formation yields a zero-size box at `center` and logs a
    /// warning.
    pub fn aabb(&self) -> Aabb {
        match Aabb::from_points(&self.world_positions()) {
            Some(aabb) => aabb,
            None => {
                log::warn!("aabb requested for empty formation at {}", self.center);
                Aabb::degenerate(self.center)
            }
        }
    }

    /// Check that the formation is usable as a transition endpoint.
    pub fn validate(&self) -> FormationResult<()> {
        if self.positions.is_empty() {
            return Err(FormationError::EmptyFormation);
        }
        if self.spacing.is_nan() || self.spacing <= 0.0 {
            return Err(FormationError::InvalidSpacing(self.spacing));
        }
        if self.size.x < 0.0 || self.size.y < 0.0 {
            return Err(FormationError::NegativeSize { x: self.size.x, y: self.size.y });
        }
        Ok(())
    }
}
