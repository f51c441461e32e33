//! Reynolds boids steering primitives.
//!
//! Each force takes the whole flock as parallel slices and the index of the
//! unit being steered.  An out-of-range index logs a warning and yields
//! `Vec3::ZERO`; nothing here panics on bad input.

use glam::Vec3;

use crate::math::{limit_vector, safe_normal};

/// Steering weights, neighbourhood radii, and speed limits.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidsParams {
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub seek_weight: f32,
    pub neighbor_radius: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub max_speed: f32,
    pub max_steer_force: f32,
}

impl Default for BoidsParams {
    fn default() -> Self {
        Self {
            separation_weight: 2.0,
            alignment_weight: 1.0,
            cohesion_weight: 1.5,
            seek_weight: 3.0,
            neighbor_radius: 150.0,
            separation_radius: 80.0,
            alignment_radius: 150.0,
            cohesion_radius: 150.0,
            max_speed: 400.0,
            max_steer_force: 200.0,
        }
    }
}

impl BoidsParams {
    /// Copy with every field forced into its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            separation_weight: self.separation_weight.clamp(0.0, 10.0),
            alignment_weight: self.alignment_weight.clamp(0.0, 10.0),
            cohesion_weight: self.cohesion_weight.clamp(0.0, 10.0),
            seek_weight: self.seek_weight.clamp(0.0, 10.0),
            neighbor_radius: self.neighbor_radius.clamp(50.0, 500.0),
            separation_radius: self.separation_radius.clamp(20.0, 200.0),
            alignment_radius: self.alignment_radius.clamp(50.0, 300.0),
            cohesion_radius: self.cohesion_radius.clamp(50.0, 300.0),
            max_speed: self.max_speed.clamp(100.0, 1000.0),
            max_steer_force: self.max_steer_force.clamp(50.0, 500.0),
        }
    }
}

// ── Forces ────────────────────────────────────────────────────────────────────

/// Push away from neighbours closer than `separation_radius`, weighted by
/// inverse distance.  Coincident neighbours are ignored.
pub fn separation_force(unit: usize, positions: &[Vec3], params: &BoidsParams) -> Vec3 {
    let Some(&origin) = positions.get(unit) else {
        log::warn!("separation_force: unit index {unit} out of range ({} positions)", positions.len());
        return Vec3::ZERO;
    };

    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for (i, &p) in positions.iter().enumerate() {
        if i == unit {
            continue;
        }
        let to_neighbor = p - origin;
        let dist = to_neighbor.length();
        if dist > 0.0 && dist < params.separation_radius {
            sum -= safe_normal(to_neighbor) / dist;
            count += 1;
        }
    }

    if count > 0 {
        sum = safe_normal(sum / count as f32) * params.max_speed;
    }
    sum * params.separation_weight
}

/// Steer toward the mean velocity of neighbours within `alignment_radius`.
pub fn alignment_force(
    unit: usize,
    positions: &[Vec3],
    velocities: &[Vec3],
    params: &BoidsParams,
) -> Vec3 {
    let (Some(&origin), Some(&own_velocity)) = (positions.get(unit), velocities.get(unit)) else {
        log::warn!(
            "alignment_force: unit index {unit} out of range ({} positions, {} velocities)",
            positions.len(),
            velocities.len()
        );
        return Vec3::ZERO;
    };

    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for (i, (&p, &v)) in positions.iter().zip(velocities).enumerate() {
        if i != unit && origin.distance(p) < params.alignment_radius {
            sum += v;
            count += 1;
        }
    }

    if count == 0 {
        return Vec3::ZERO;
    }
    let desired = safe_normal(sum / count as f32) * params.max_speed;
    (desired - own_velocity) * params.alignment_weight
}

/// Steer toward the centre of mass of neighbours within `cohesion_radius`.
pub fn cohesion_force(unit: usize, positions: &[Vec3], params: &BoidsParams) -> Vec3 {
    let Some(&origin) = positions.get(unit) else {
        log::warn!("cohesion_force: unit index {unit} out of range ({} positions)", positions.len());
        return Vec3::ZERO;
    };

    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for (i, &p) in positions.iter().enumerate() {
        if i != unit && origin.distance(p) < params.cohesion_radius {
            sum += p;
            count += 1;
        }
    }

    if count == 0 {
        return Vec3::ZERO;
    }
    let center_of_mass = sum / count as f32;
    safe_normal(center_of_mass - origin) * params.max_speed * params.cohesion_weight
}

/// Steer from `current_velocity` toward full speed at `target`, with the
/// steering magnitude capped at `max_steer_force`.
pub fn seek_force(current: Vec3, target: Vec3, current_velocity: Vec3, params: &BoidsParams) -> Vec3 {
    let desired = safe_normal(target - current) * params.max_speed;
    limit_vector(desired - current_velocity, params.max_steer_force) * params.seek_weight
}
