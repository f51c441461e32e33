//! Unit tests for fm-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentHandle;

    #[test]
    fn invalid_sentinel_is_default() {
        assert!(AgentHandle::default().is_invalid());
        assert_eq!(AgentHandle::INVALID.index, u32::MAX);
        assert!(!AgentHandle::new(0, 0).is_invalid());
    }

    #[test]
    fn ordering_and_slot() {
        let a = AgentHandle::new(3, 1);
        assert_eq!(a.slot(), 3);
        assert!(AgentHandle::new(1, 0) < AgentHandle::new(2, 0));
    }

    #[test]
    fn display() {
        assert_eq!(AgentHandle::new(7, 2).to_string(), "Agent(7v2)");
    }
}

#[cfg(test)]
mod clock {
    use crate::TransitionClock;

    #[test]
    fn advance_accumulates() {
        let mut clock = TransitionClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.now() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn ignores_negative_and_nan() {
        let mut clock = TransitionClock::starting_at(2.0);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn since_is_floored() {
        let clock = TransitionClock::starting_at(1.0);
        assert_eq!(clock.since(5.0), 0.0);
        assert!((clock.since(0.25) - 0.75).abs() < 1e-9);
    }
}

#[cfg(test)]
mod math {
    use crate::{FormationRng, Vec3, apply_easing, limit_vector, safe_normal};

    #[test]
    fn easing_endpoints() {
        for k in [0.1_f32, 0.5, 1.0, 2.0, 5.0] {
            assert_eq!(apply_easing(0.0, k), 0.0);
            assert!((apply_easing(1.0, k) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn easing_is_monotone() {
        let mut rng = FormationRng::new(11);
        for _ in 0..50 {
            let k: f32 = rng.gen_range(0.1..5.0);
            let mut prev = 0.0_f32;
            for step in 0..=100 {
                let p = step as f32 / 100.0;
                let e = apply_easing(p, k);
                assert!(e >= prev, "easing not monotone at p={p}, k={k}");
                prev = e;
            }
        }
    }

    #[test]
    fn limit_vector_clamps_long() {
        let v = limit_vector(Vec3::new(300.0, 400.0, 0.0), 50.0);
        assert!((v.length() - 50.0).abs() < 1e-3);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn limit_vector_keeps_short() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        assert_eq!(limit_vector(v, 10.0), v);
    }

    #[test]
    fn safe_normal_of_zero() {
        assert_eq!(safe_normal(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(safe_normal(Vec3::new(0.0, 0.0, 9.0)), Vec3::Z);
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Aabb, FormationRng, Vec3, facing_rotation, paths_intersect};

    fn v(x: f32, y: f32) -> Vec3 {
        Vec3::new(x, y, 0.0)
    }

    #[test]
    fn crossing_diagonals_intersect() {
        assert!(paths_intersect(v(0.0, 0.0), v(100.0, 100.0), v(0.0, 100.0), v(100.0, 0.0)));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!paths_intersect(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 5.0), v(10.0, 5.0)));
        assert!(!paths_intersect(v(0.0, 0.0), v(10.0, 10.0), v(20.0, 0.0), v(30.0, -10.0)));
    }

    #[test]
    fn collinear_overlap_intersects() {
        assert!(paths_intersect(v(0.0, 0.0), v(100.0, 0.0), v(100.0, 0.0), v(0.0, 0.0)));
        assert!(paths_intersect(v(0.0, 0.0), v(100.0, 0.0), v(50.0, 0.0), v(150.0, 0.0)));
        assert!(!paths_intersect(v(0.0, 0.0), v(100.0, 0.0), v(150.0, 0.0), v(250.0, 0.0)));
    }

    #[test]
    fn degenerate_segments_are_points() {
        let p = v(50.0, 0.0);
        assert!(paths_intersect(p, p, v(0.0, 0.0), v(100.0, 0.0)));
        assert!(paths_intersect(v(0.0, 0.0), v(100.0, 0.0), p, p));
        assert!(!paths_intersect(p, p, v(0.0, 1.0), v(100.0, 1.0)));
        assert!(!paths_intersect(p, p, v(1.0, 1.0), v(1.0, 1.0)));
    }

    #[test]
    fn z_is_ignored() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(100.0, 100.0, 500.0);
        let c = Vec3::new(0.0, 100.0, -300.0);
        let d = Vec3::new(100.0, 0.0, 0.0);
        assert!(paths_intersect(a, b, c, d));
    }

    #[test]
    fn intersection_is_symmetric() {
        let mut rng = FormationRng::new(42);
        // Integer grid coordinates make collinear and touching cases common.
        let point = |rng: &mut FormationRng| {
            v(rng.gen_range(0..6) as f32 * 10.0, rng.gen_range(0..6) as f32 * 10.0)
        };
        for _ in 0..2000 {
            let (a, b, c, d) = (point(&mut rng), point(&mut rng), point(&mut rng), point(&mut rng));
            assert_eq!(
                paths_intersect(a, b, c, d),
                paths_intersect(c, d, a, b),
                "asymmetric for {a} {b} / {c} {d}"
            );
        }
    }

    #[test]
    fn aabb_from_points() {
        let aabb = Aabb::from_points(&[v(-10.0, 5.0), v(30.0, -5.0), v(0.0, 0.0)]).unwrap();
        assert_eq!(aabb.min, v(-10.0, -5.0));
        assert_eq!(aabb.max, v(30.0, 5.0));
        assert_eq!(aabb.center(), v(10.0, 0.0));
        assert_eq!(aabb.size(), v(40.0, 10.0));
        assert!(aabb.contains(v(0.0, 0.0)));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn facing_turns_forward_onto_direction() {
        for dir in [v(0.0, 500.0), v(-3.0, 4.0), Vec3::new(1.0, 1.0, 1.0)] {
            let q = facing_rotation(dir).unwrap();
            let forward = q * Vec3::X;
            assert!(forward.abs_diff_eq(dir.normalize(), 1e-5), "{forward} vs {dir}");
        }
        assert!(facing_rotation(Vec3::ZERO).is_none());
    }
}

#[cfg(test)]
mod boids {
    use crate::Vec3;
    use crate::boids::{
        BoidsParams, alignment_force, cohesion_force, separation_force, seek_force,
    };

    #[test]
    fn out_of_range_index_is_zero() {
        let params = BoidsParams::default();
        let positions = [Vec3::ZERO, Vec3::X];
        assert_eq!(separation_force(5, &positions, &params), Vec3::ZERO);
        assert_eq!(cohesion_force(2, &positions, &params), Vec3::ZERO);
        assert_eq!(alignment_force(1, &positions, &[Vec3::ZERO], &params), Vec3::ZERO);
    }

    #[test]
    fn separation_pushes_away() {
        let params = BoidsParams::default();
        let positions = [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)];
        let f = separation_force(0, &positions, &params);
        assert!(f.x < 0.0);
        let expected = params.max_speed * params.separation_weight;
        assert!((f.length() - expected).abs() < 1e-2);
    }

    #[test]
    fn separation_ignores_far_neighbours() {
        let params = BoidsParams::default();
        let positions = [Vec3::ZERO, Vec3::new(1000.0, 0.0, 0.0)];
        assert_eq!(separation_force(0, &positions, &params), Vec3::ZERO);
    }

    #[test]
    fn cohesion_pulls_toward_centre() {
        let params = BoidsParams::default();
        let positions = [Vec3::ZERO, Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, 100.0, 0.0)];
        let f = cohesion_force(0, &positions, &params);
        assert!(f.y > 0.0 && f.x.abs() < 1e-4);
    }

    #[test]
    fn alignment_matches_neighbour_heading() {
        let params = BoidsParams::default();
        let positions = [Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0)];
        let velocities = [Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)];
        let f = alignment_force(0, &positions, &velocities, &params);
        let expected = params.max_speed * params.alignment_weight;
        assert!((f.y - expected).abs() < 1e-2);
    }

    #[test]
    fn seek_is_capped_by_steer_force() {
        let params = BoidsParams::default();
        let f = seek_force(Vec3::ZERO, Vec3::new(1000.0, 0.0, 0.0), Vec3::ZERO, &params);
        let expected = params.max_steer_force * params.seek_weight;
        assert!((f.length() - expected).abs() < 1e-2);
    }

    #[test]
    fn clamped_enforces_ranges() {
        let wild = BoidsParams {
            separation_weight: -1.0,
            neighbor_radius: 10_000.0,
            max_speed: 1.0,
            ..BoidsParams::default()
        };
        let c = wild.clamped();
        assert_eq!(c.separation_weight, 0.0);
        assert_eq!(c.neighbor_radius, 500.0);
        assert_eq!(c.max_speed, 100.0);
        assert_eq!(BoidsParams::default().clamped(), BoidsParams::default());
    }
}

#[cfg(test)]
mod mode {
    use crate::AssignmentMode;

    #[test]
    fn default_is_direct_relative() {
        assert_eq!(AssignmentMode::default(), AssignmentMode::DirectRelativePositionMatching);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = AssignmentMode::ALL.iter().map(|m| m.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AssignmentMode::ALL.len());
    }
}

#[cfg(test)]
mod rng {
    use crate::FormationRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = FormationRng::new(9);
        let mut b = FormationRng::new(9);
        for _ in 0..10 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = FormationRng::new(3);
        let mut v: Vec<usize> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod config {
    use crate::{AssignmentMode, TransitionConfig};

    #[test]
    fn defaults() {
        let c = TransitionConfig::default();
        assert_eq!(c.mode, AssignmentMode::DirectRelativePositionMatching);
        assert_eq!(c.duration, 2.0);
        assert!(c.use_easing);
        assert_eq!(c.easing_strength, 2.0);
        assert!(!c.show_debug);
        assert_eq!(c.debug_duration, 5.0);
        assert_eq!(c.sanitized(), c);
    }

    #[test]
    fn sanitized_clamps() {
        let c = TransitionConfig {
            duration: 0.0,
            easing_strength: 50.0,
            debug_duration: f32::NAN,
            ..TransitionConfig::default()
        }
        .sanitized();
        assert!((c.duration - 0.1).abs() < 1e-6);
        assert_eq!(c.easing_strength, 5.0);
        assert_eq!(c.debug_duration, 5.0);
    }
}
