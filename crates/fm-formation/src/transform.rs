//! Whole-formation transforms and the index-wise transition cost estimate.
//!
//! Transforms return a new `FormationData`; the input is never mutated.

use fm_core::{Aabb, AssignmentMode, FormationRng};
use glam::{Quat, Vec3};

use crate::data::{FormationData, FormationType};
use crate::library;

/// Offset range (world units, XY only) applied to copied anchors when a
/// custom formation grows.
const CUSTOM_JITTER: f32 = 50.0;

/// Default turn count used when a spiral is regenerated.
const SPIRAL_TURNS: f32 = 2.0;

impl FormationData {
    /// Scale anchor offsets, size, and spacing by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            positions: self.positions.iter().map(|&p| p * factor).collect(),
            size: self.size * factor,
            spacing: self.spacing * factor,
            ..self.clone()
        }
    }

    /// Apply `extra` after the existing rotation.
    pub fn rotated(&self, extra: Quat) -> Self {
        Self { rotation: (extra * self.rotation).normalize(), ..self.clone() }
    }

    /// Same layout, new centre.
    pub fn moved(&self, center: Vec3) -> Self {
        Self { center, ..self.clone() }
    }

    /// Regenerate this formation's shape for `count` units.
    ///
    /// Library shapes are rebuilt from their type, spacing, and size.  Custom
    /// layouts keep the first `count` anchors, or cycle through the existing
    /// anchors with a random XY offset of up to ±50 units when growing.
    pub fn resized(&self, count: usize, rng: &mut FormationRng) -> Self {
        if count == 0 {
            return Self { positions: Vec::new(), ..self.clone() };
        }

        let (c, r, spacing) = (self.center, self.rotation, self.spacing);
        let radius = self.size.x * 0.5;
        match self.formation_type {
            FormationType::Square => library::square(c, r, count, spacing, 0),
            FormationType::Circle => library::circle(c, r, count, radius, 0.0, true),
            FormationType::Line => library::line(c, r, count, spacing, self.size.y > self.size.x),
            FormationType::Triangle => library::triangle(c, r, count, spacing, false),
            FormationType::Arrow => library::arrow(c, r, count, spacing),
            FormationType::Spiral => library::spiral(c, r, count, radius, SPIRAL_TURNS),
            FormationType::SolidCircle => library::solid_circle(c, r, count, radius),
            FormationType::Zigzag => library::zigzag(c, r, count, spacing, self.size.y * 0.5),
            FormationType::Custom => self.resized_custom(count, rng),
        }
    }

    fn resized_custom(&self, count: usize, rng: &mut FormationRng) -> Self {
        let mut positions = self.positions.clone();
        if count <= positions.len() {
            positions.truncate(count);
        } else {
            let original = self.positions.len();
            for i in original..count {
                let source = if original == 0 { Vec3::ZERO } else { self.positions[i % original] };
                let jitter = Vec3::new(
                    rng.gen_range(-CUSTOM_JITTER..=CUSTOM_JITTER),
                    rng.gen_range(-CUSTOM_JITTER..=CUSTOM_JITTER),
                    0.0,
                );
                positions.push(source + jitter);
            }
        }
        Self { positions, ..self.clone() }
    }
}

/// Cost of moving anchor `i` of `from` to anchor `i` of `to`, summed.
///
/// `OptimizedAssignment` compares positions normalised into each
/// formation's bounding box (each axis size floored at 1), so a pure
/// translation or uniform rescale costs ~0.  Every other mode sums world
/// distances.  Returns `None` when the anchor counts differ.
pub fn transition_cost(from: &FormationData, to: &FormationData, mode: AssignmentMode) -> Option<f32> {
    if from.len() != to.len() {
        return None;
    }
    let from_world = from.world_positions();
    let to_world = to.world_positions();

    let (Some(from_box), Some(to_box)) = (Aabb::from_points(&from_world), Aabb::from_points(&to_world)) else {
        return Some(0.0);
    };

    let cost = match mode {
        AssignmentMode::OptimizedAssignment => {
            let from_size = from_box.size().max(Vec3::ONE);
            let to_size = to_box.size().max(Vec3::ONE);
            from_world
                .iter()
                .zip(&to_world)
                .map(|(&a, &b)| ((a - from_box.min) / from_size).distance((b - to_box.min) / to_size))
                .sum()
        }
        _ => from_world.iter().zip(&to_world).map(|(a, b)| a.distance(*b)).sum(),
    };
    Some(cost)
}
