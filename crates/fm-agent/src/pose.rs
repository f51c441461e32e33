//! Agent world pose.

use glam::{Quat, Vec3};

/// World-space translation, rotation, and scale of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Quat::IDENTITY, scale: Vec3::ONE }
    }
}

impl Pose {
    #[inline]
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    /// Identity rotation and unit scale at `position`.
    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    /// Interpolate toward `target`: linear for position and scale, spherical
    /// for rotation.  `t = 0` is `self`, `t = 1` is `target`.
    pub fn lerp(&self, target: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.slerp(target.rotation, t),
            scale: self.scale.lerp(target.scale, t),
        }
    }

    /// Component-wise comparison within `eps`.  Rotations compare as
    /// orientations, so `q` and `-q` are equal.
    pub fn abs_diff_eq(&self, other: &Pose, eps: f32) -> bool {
        self.position.abs_diff_eq(other.position, eps)
            && self.scale.abs_diff_eq(other.scale, eps)
            && (self.rotation.abs_diff_eq(other.rotation, eps)
                || self.rotation.abs_diff_eq(-other.rotation, eps))
    }
}
