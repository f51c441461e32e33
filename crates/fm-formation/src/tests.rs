//! Unit tests for fm-formation.

#[cfg(test)]
mod helpers {
    use glam::Vec3;

    pub fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-3)
    }
}

#[cfg(test)]
mod data {
    use super::helpers::approx;
    use crate::{FormationData, FormationType};
    use fm_core::FormationError;
    use glam::{Quat, Vec2, Vec3};
    use std::f32::consts::FRAC_PI_2;

    fn two_point() -> FormationData {
        FormationData {
            positions: vec![Vec3::new(100.0, 0.0, 0.0), Vec3::new(0.0, 50.0, 0.0)],
            center: Vec3::new(1000.0, 0.0, 0.0),
            rotation: Quat::from_rotation_z(FRAC_PI_2),
            ..FormationData::default()
        }
    }

    #[test]
    fn world_positions_apply_rotation_then_translation() {
        let world = two_point().world_positions();
        assert_eq!(world.len(), 2);
        assert!(approx(world[0], Vec3::new(1000.0, 100.0, 0.0)));
        assert!(approx(world[1], Vec3::new(950.0, 0.0, 0.0)));
    }

    #[test]
    fn aabb_over_world_anchors() {
        let aabb = two_point().aabb();
        assert!(approx(aabb.min, Vec3::new(950.0, 0.0, 0.0)));
        assert!(approx(aabb.max, Vec3::new(1000.0, 100.0, 0.0)));
    }

    #[test]
    fn empty_aabb_is_degenerate_at_center() {
        let f = FormationData::new(FormationType::Custom, Vec3::new(5.0, 6.0, 7.0), Quat::IDENTITY);
        let aabb = f.aabb();
        assert_eq!(aabb.min, Vec3::new(5.0, 6.0, 7.0));
        assert_eq!(aabb.size(), Vec3::ZERO);
        assert!(f.is_empty());
    }

    #[test]
    fn validate_reports_first_problem() {
        assert_eq!(FormationData::default().validate(), Err(FormationError::EmptyFormation));

        let mut f = two_point();
        assert_eq!(f.validate(), Ok(()));

        f.spacing = 0.0;
        assert_eq!(f.validate(), Err(FormationError::InvalidSpacing(0.0)));

        f.spacing = 10.0;
        f.size = Vec2::new(-1.0, 5.0);
        assert_eq!(f.validate(), Err(FormationError::NegativeSize { x: -1.0, y: 5.0 }));
    }
}

#[cfg(test)]
mod library {
    use super::helpers::approx;
    use crate::library::{
        arrow, circle, custom, from_positions, line, optimal_rows_cols, solid_circle, spiral,
        square, triangle, triangle_rows, zigzag,
    };
    use glam::{Quat, Vec2, Vec3};

    const O: Vec3 = Vec3::ZERO;
    const I: Quat = Quat::IDENTITY;

    #[test]
    fn every_generator_returns_exact_count() {
        for n in [0usize, 1, 2, 5, 10, 37, 100, 400] {
            assert_eq!(square(O, I, n, 100.0, 0).len(), n, "square {n}");
            assert_eq!(circle(O, I, n, 200.0, 0.0, true).len(), n, "circle {n}");
            assert_eq!(line(O, I, n, 100.0, false).len(), n, "line {n}");
            assert_eq!(triangle(O, I, n, 100.0, false).len(), n, "triangle {n}");
            assert_eq!(triangle(O, I, n, 100.0, true).len(), n, "inverted triangle {n}");
            assert_eq!(arrow(O, I, n, 100.0).len(), n, "arrow {n}");
            assert_eq!(spiral(O, I, n, 200.0, 2.0).len(), n, "spiral {n}");
            assert_eq!(solid_circle(O, I, n, 200.0).len(), n, "solid circle {n}");
            assert_eq!(zigzag(O, I, n, 100.0, 50.0).len(), n, "zigzag {n}");
        }
    }

    #[test]
    fn optimal_rows_cols_is_near_square() {
        assert_eq!(optimal_rows_cols(0), (0, 0));
        assert_eq!(optimal_rows_cols(1), (1, 1));
        assert_eq!(optimal_rows_cols(4), (2, 2));
        assert_eq!(optimal_rows_cols(6), (2, 3));
        assert_eq!(optimal_rows_cols(10), (3, 4));
    }

    #[test]
    fn square_grid_is_centred() {
        let f = square(O, I, 4, 100.0, 0);
        assert_eq!(f.positions[0], Vec3::new(-50.0, -50.0, 0.0));
        assert_eq!(f.positions[3], Vec3::new(50.0, 50.0, 0.0));
        assert_eq!(f.size, Vec2::new(200.0, 200.0));
        let centroid: Vec3 = f.positions.iter().copied().sum::<Vec3>() / 4.0;
        assert!(approx(centroid, Vec3::ZERO));
    }

    #[test]
    fn square_respects_row_count() {
        let f = square(O, I, 6, 10.0, 1);
        assert!(f.positions.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn line_orientation() {
        let h = line(O, I, 3, 100.0, false);
        assert_eq!(h.positions, vec![Vec3::new(-100.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)]);
        let v = line(O, I, 3, 100.0, true);
        assert!(v.positions.iter().all(|p| p.x == 0.0));
        assert_eq!(v.size, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn triangle_row_distribution() {
        assert_eq!(triangle_rows(6, false), vec![1, 2, 3]);
        assert_eq!(triangle_rows(5, false), vec![1, 2, 2]);
        assert_eq!(triangle_rows(5, true), vec![3, 2]);
    }

    #[test]
    fn arrow_tip_leads() {
        let f = arrow(O, I, 4, 100.0);
        // rows 1, 3: tip at +y
        assert_eq!(f.positions[0], Vec3::new(0.0, 50.0, 0.0));
        assert!(f.positions[1..].iter().all(|p| p.y == -50.0));
    }

    #[test]
    fn circle_points_on_radius() {
        let f = circle(O, I, 8, 200.0, 0.0, true);
        assert!(f.positions.iter().all(|p| (p.length() - 200.0).abs() < 1e-3));
        assert!(approx(f.positions[0], Vec3::new(200.0, 0.0, 0.0)));
        let ccw = circle(O, I, 4, 100.0, 0.0, false);
        assert!(approx(ccw.positions[1], Vec3::new(0.0, -100.0, 0.0)));
    }

    #[test]
    fn single_unit_rings_sit_at_centre() {
        assert_eq!(circle(O, I, 1, 200.0, 0.0, true).positions, vec![Vec3::ZERO]);
        assert_eq!(spiral(O, I, 1, 200.0, 2.0).positions, vec![Vec3::ZERO]);
        assert_eq!(solid_circle(O, I, 1, 200.0).positions, vec![Vec3::ZERO]);
    }

    #[test]
    fn spiral_radius_grows() {
        let f = spiral(O, I, 12, 200.0, 2.0);
        let radii: Vec<f32> = f.positions.iter().map(|p| p.length()).collect();
        assert!(radii.windows(2).all(|w| w[1] > w[0]));
        assert!((radii[11] - 200.0).abs() < 1e-3);
    }

    #[test]
    fn zigzag_stays_within_amplitude() {
        let f = zigzag(O, I, 9, 100.0, 50.0);
        assert!(f.positions.iter().all(|p| p.y.abs() <= 50.0 + 1e-3));
        assert_eq!(f.positions[0].x, -400.0);
    }

    #[test]
    fn from_positions_centres_on_centroid() {
        let world = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(200.0, 0.0, 0.0), Vec3::new(100.0, 300.0, 0.0)];
        let f = from_positions(&world);
        assert!(approx(f.center, Vec3::new(100.0, 100.0, 0.0)));
        for (a, b) in f.world_positions().iter().zip(&world) {
            assert!(approx(*a, *b));
        }
        assert_eq!(f.size, Vec2::new(200.0, 300.0));
        assert!(from_positions(&[]).is_empty());
    }

    #[test]
    fn custom_keeps_order() {
        let pts = vec![Vec3::X, Vec3::Y, Vec3::Z];
        assert_eq!(custom(O, I, pts.clone()).positions, pts);
    }
}

#[cfg(test)]
mod transform {
    use super::helpers::approx;
    use crate::library::{circle, custom, line, square};
    use crate::transition_cost;
    use fm_core::{AssignmentMode, FormationRng};
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn scaled_scales_offsets_and_spacing() {
        let f = square(Vec3::ZERO, Quat::IDENTITY, 4, 100.0, 0).scaled(2.0);
        assert_eq!(f.positions[0], Vec3::new(-100.0, -100.0, 0.0));
        assert_eq!(f.spacing, 200.0);
    }

    #[test]
    fn rotated_composes() {
        let f = line(Vec3::ZERO, Quat::IDENTITY, 2, 100.0, false)
            .rotated(Quat::from_rotation_z(FRAC_PI_2 / 2.0))
            .rotated(Quat::from_rotation_z(FRAC_PI_2 / 2.0));
        let world = f.world_positions();
        assert!(approx(world[1], Vec3::new(0.0, 50.0, 0.0)));
    }

    #[test]
    fn moved_changes_only_center() {
        let f = square(Vec3::ZERO, Quat::IDENTITY, 4, 100.0, 0);
        let m = f.moved(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(m.positions, f.positions);
        assert_eq!(m.center, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn resized_regenerates_library_shapes() {
        let mut rng = FormationRng::new(1);
        let f = circle(Vec3::ZERO, Quat::IDENTITY, 8, 150.0, 0.0, true).resized(12, &mut rng);
        assert_eq!(f.len(), 12);
        assert!(f.positions.iter().all(|p| (p.length() - 150.0).abs() < 1e-3));
        assert!(f.resized(0, &mut rng).is_empty());
    }

    #[test]
    fn resized_custom_truncates_or_jitters() {
        let mut rng = FormationRng::new(2);
        let base = custom(Vec3::ZERO, Quat::IDENTITY, vec![Vec3::ZERO, Vec3::new(500.0, 0.0, 0.0)]);

        let shrunk = base.resized(1, &mut rng);
        assert_eq!(shrunk.positions, vec![Vec3::ZERO]);

        let grown = base.resized(6, &mut rng);
        assert_eq!(grown.len(), 6);
        assert_eq!(&grown.positions[..2], &base.positions[..]);
        for (i, p) in grown.positions.iter().enumerate().skip(2) {
            let source = base.positions[i % 2];
            let d = *p - source;
            assert!(d.x.abs() <= 50.0 && d.y.abs() <= 50.0 && d.z == 0.0);
        }
    }

    #[test]
    fn resized_custom_is_seed_deterministic() {
        let base = custom(Vec3::ZERO, Quat::IDENTITY, vec![Vec3::ZERO]);
        let a = base.resized(5, &mut FormationRng::new(7));
        let b = base.resized(5, &mut FormationRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn transition_cost_modes() {
        let from = square(Vec3::ZERO, Quat::IDENTITY, 4, 100.0, 0);
        let to = from.moved(Vec3::new(0.0, 500.0, 0.0));

        let simple = transition_cost(&from, &to, AssignmentMode::SimpleAssignment).unwrap();
        assert!((simple - 2000.0).abs() < 1e-2);

        let relative = transition_cost(&from, &to, AssignmentMode::OptimizedAssignment).unwrap();
        assert!(relative.abs() < 1e-4);

        let other = square(Vec3::ZERO, Quat::IDENTITY, 3, 100.0, 0);
        assert_eq!(transition_cost(&from, &other, AssignmentMode::DirectMapping), None);
    }
}
