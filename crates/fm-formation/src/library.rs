//! Formation generators.
//!
//! Every generator returns exactly `count` anchors, centred on the local
//! origin, with `z = 0`.  `count == 0` yields an empty formation carrying
//! the requested pose.  Anchor order is row-major for grid shapes and
//! angular for ring shapes; that order is what `DirectMapping` preserves.

use std::f32::consts::{PI, TAU};

use fm_core::Aabb;
use glam::{Quat, Vec2, Vec3};

use crate::data::{FormationData, FormationType};

// ── Grid shapes ───────────────────────────────────────────────────────────────

/// Rectangular grid.  `rows == 0` picks the most square layout for `count`.
pub fn square(center: Vec3, rotation: Quat, count: usize, spacing: f32, rows: usize) -> FormationData {
    let mut formation = FormationData::new(FormationType::Square, center, rotation);
    formation.spacing = spacing;
    if count == 0 {
        return formation;
    }

    let (rows, cols) = if rows > 0 { (rows, count.div_ceil(rows)) } else { optimal_rows_cols(count) };

    let start_x = -((cols - 1) as f32) * spacing * 0.5;
    let start_y = -((rows - 1) as f32) * spacing * 0.5;
    formation.positions = (0..count)
        .map(|i| {
            let (row, col) = (i / cols, i % cols);
            Vec3::new(start_x + col as f32 * spacing, start_y + row as f32 * spacing, 0.0)
        })
        .collect();
    formation.size = Vec2::new(cols as f32 * spacing, rows as f32 * spacing);
    formation
}

/// `(rows, cols)` closest to square that holds `count`.
pub fn optimal_rows_cols(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut cols = (count as f32).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    if cols > 1 && rows * (cols - 1) >= count {
        cols -= 1;
    }
    (rows, cols)
}

/// Single file along local X, or along local Y when `vertical`.
pub fn line(center: Vec3, rotation: Quat, count: usize, spacing: f32, vertical: bool) -> FormationData {
    let mut formation = FormationData::new(FormationType::Line, center, rotation);
    formation.spacing = spacing;
    if count == 0 {
        return formation;
    }

    let start = -((count - 1) as f32) * spacing * 0.5;
    formation.positions = (0..count)
        .map(|i| {
            let offset = start + i as f32 * spacing;
            if vertical { Vec3::new(0.0, offset, 0.0) } else { Vec3::new(offset, 0.0, 0.0) }
        })
        .collect();
    let length = count as f32 * spacing;
    formation.size = if vertical { Vec2::new(0.0, length) } else { Vec2::new(length, 0.0) };
    formation
}

/// Rows of 1, 2, 3, … units (or the reverse when `inverted`).
pub fn triangle(center: Vec3, rotation: Quat, count: usize, spacing: f32, inverted: bool) -> FormationData {
    let mut formation = FormationData::new(FormationType::Triangle, center, rotation);
    formation.spacing = spacing;
    if count == 0 {
        return formation;
    }
    let rows = triangle_rows(count, inverted);
    formation.positions = stack_rows(&rows, spacing, RowDirection::Down);
    formation.size = rows_size(&rows, spacing);
    formation
}

/// Per-row unit counts for a triangle of `count` units.
pub fn triangle_rows(count: usize, inverted: bool) -> Vec<usize> {
    let mut rows = 0usize;
    while rows * (rows + 1) / 2 < count {
        rows += 1;
    }

    let mut remaining = count;
    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        let width = if inverted { rows - row } else { row + 1 };
        let n = width.min(remaining);
        out.push(n);
        remaining -= n;
        if remaining == 0 {
            break;
        }
    }
    out
}

/// Arrowhead: a single point unit, then rows growing by two.
pub fn arrow(center: Vec3, rotation: Quat, count: usize, spacing: f32) -> FormationData {
    let mut formation = FormationData::new(FormationType::Arrow, center, rotation);
    formation.spacing = spacing;
    if count == 0 {
        return formation;
    }

    let mut rows = Vec::new();
    let mut remaining = count;
    let mut width = 1;
    while remaining > 0 {
        let n = width.min(remaining);
        rows.push(n);
        remaining -= n;
        width += 2;
    }
    formation.positions = stack_rows(&rows, spacing, RowDirection::Up);
    formation.size = rows_size(&rows, spacing);
    formation
}

enum RowDirection {
    /// First row at `-height/2`, later rows toward `+y`.
    Down,
    /// First row (the tip) at `+height/2`, later rows toward `-y`.
    Up,
}

fn stack_rows(rows: &[usize], spacing: f32, direction: RowDirection) -> Vec<Vec3> {
    let height = rows.len().saturating_sub(1) as f32 * spacing;
    let (start_y, step_y) = match direction {
        RowDirection::Down => (-height * 0.5, spacing),
        RowDirection::Up => (height * 0.5, -spacing),
    };

    let mut out = Vec::with_capacity(rows.iter().sum());
    for (row, &n) in rows.iter().enumerate() {
        let start_x = -(n.saturating_sub(1) as f32) * spacing * 0.5;
        let y = start_y + row as f32 * step_y;
        out.extend((0..n).map(|col| Vec3::new(start_x + col as f32 * spacing, y, 0.0)));
    }
    out
}

fn rows_size(rows: &[usize], spacing: f32) -> Vec2 {
    let widest = rows.iter().copied().max().unwrap_or(0);
    Vec2::new(
        widest.saturating_sub(1) as f32 * spacing,
        rows.len().saturating_sub(1) as f32 * spacing,
    )
}

// ── Ring shapes ───────────────────────────────────────────────────────────────

/// Evenly spaced ring.  A single unit sits at the centre.
pub fn circle(
    center: Vec3,
    rotation: Quat,
    count: usize,
    radius: f32,
    start_angle_deg: f32,
    clockwise: bool,
) -> FormationData {
    let mut formation = FormationData::new(FormationType::Circle, center, rotation);
    formation.size = Vec2::splat(radius * 2.0);
    if count == 0 {
        return formation;
    }
    if count == 1 {
        formation.positions.push(Vec3::ZERO);
        return formation;
    }

    let mut step = 360.0 / count as f32;
    if !clockwise {
        step = -step;
    }
    formation.positions = (0..count)
        .map(|i| ring_point(radius, (start_angle_deg + i as f32 * step).to_radians()))
        .collect();
    formation
}

/// Archimedean spiral: radius grows linearly from 0 to `radius` over `turns`.
pub fn spiral(center: Vec3, rotation: Quat, count: usize, radius: f32, turns: f32) -> FormationData {
    let mut formation = FormationData::new(FormationType::Spiral, center, rotation);
    formation.size = Vec2::splat(radius * 2.0);
    if count == 0 {
        return formation;
    }
    if count == 1 {
        formation.positions.push(Vec3::ZERO);
        return formation;
    }

    let last = (count - 1) as f32;
    let step = turns * TAU / last;
    formation.positions = (0..count)
        .map(|i| ring_point(radius * (i as f32 / last), i as f32 * step))
        .collect();
    formation
}

/// Filled disc: one unit at the centre, then concentric rings.
///
/// Rings keep being added past `radius` if the nominal rings cannot hold
/// `count` units, so the anchor count is always exact.
pub fn solid_circle(center: Vec3, rotation: Quat, count: usize, radius: f32) -> FormationData {
    let mut formation = FormationData::new(FormationType::SolidCircle, center, rotation);
    formation.size = Vec2::splat(radius * 2.0);
    if count == 0 {
        return formation;
    }

    let mut positions = Vec::with_capacity(count);
    positions.push(Vec3::ZERO);

    let step = radius / ((count as f32).sqrt() * 0.5).max(1.0);
    if step > 0.0 {
        let mut ring_radius = 0.0;
        while positions.len() < count {
            ring_radius += step;
            let capacity = ((TAU * ring_radius / (step * 0.8)).floor() as usize).max(1);
            let n = capacity.min(count - positions.len());
            let angle_step = TAU / n as f32;
            positions.extend((0..n).map(|i| ring_point(ring_radius, i as f32 * angle_step)));
        }
    } else {
        positions.resize(count, Vec3::ZERO);
    }

    formation.positions = positions;
    formation
}

#[inline]
fn ring_point(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

// ── Free-form shapes ──────────────────────────────────────────────────────────

/// Line along local X with a sine offset in Y (two full periods).
pub fn zigzag(center: Vec3, rotation: Quat, count: usize, spacing: f32, amplitude: f32) -> FormationData {
    let mut formation = FormationData::new(FormationType::Zigzag, center, rotation);
    formation.spacing = spacing;
    if count == 0 {
        return formation;
    }

    let length = (count - 1) as f32 * spacing;
    let denom = ((count - 1) as f32).max(1.0);
    formation.positions = (0..count)
        .map(|i| {
            let x = -length * 0.5 + i as f32 * spacing;
            let y = amplitude * (i as f32 / denom * PI * 4.0).sin();
            Vec3::new(x, y, 0.0)
        })
        .collect();
    formation.size = Vec2::new(length, amplitude * 2.0);
    formation
}

/// Caller-supplied local offsets.
pub fn custom(center: Vec3, rotation: Quat, positions: Vec<Vec3>) -> FormationData {
    let mut formation = FormationData::new(FormationType::Custom, center, rotation);
    formation.size = local_footprint(&positions);
    formation.positions = positions;
    formation
}

/// Capture an arbitrary set of world positions as a custom formation
/// centred on their centroid.
pub fn from_positions(world: &[Vec3]) -> FormationData {
    if world.is_empty() {
        return FormationData::new(FormationType::Custom, Vec3::ZERO, Quat::IDENTITY);
    }
    let centroid = world.iter().copied().sum::<Vec3>() / world.len() as f32;
    custom(centroid, Quat::IDENTITY, world.iter().map(|&p| p - centroid).collect())
}

fn local_footprint(positions: &[Vec3]) -> Vec2 {
    Aabb::from_points(positions).map_or(Vec2::ZERO, |aabb| aabb.size().truncate())
}
