//! Unit tests for fm-agent.

#[cfg(test)]
mod pose {
    use crate::Pose;
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Pose::at(Vec3::ZERO);
        let b = Pose::new(Vec3::new(100.0, 0.0, 0.0), Quat::from_rotation_z(FRAC_PI_2), Vec3::splat(3.0));

        assert!(a.lerp(&b, 0.0).abs_diff_eq(&a, 1e-6));
        assert!(a.lerp(&b, 1.0).abs_diff_eq(&b, 1e-5));

        let mid = a.lerp(&b, 0.5);
        assert!(mid.position.abs_diff_eq(Vec3::new(50.0, 0.0, 0.0), 1e-4));
        assert!(mid.scale.abs_diff_eq(Vec3::splat(2.0), 1e-5));
        let expected = Quat::from_rotation_z(FRAC_PI_2 / 2.0);
        assert!(mid.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn abs_diff_eq_treats_negated_quat_as_equal() {
        let q = Quat::from_rotation_z(0.3);
        let a = Pose::new(Vec3::ONE, q, Vec3::ONE);
        let b = Pose::new(Vec3::ONE, -q, Vec3::ONE);
        assert!(a.abs_diff_eq(&b, 1e-6));
    }
}

#[cfg(test)]
mod store {
    use crate::{AgentHost, AgentStore, FormationParticipant, Pose};
    use fm_core::AgentHandle;
    use glam::Vec3;

    struct Silent;
    impl FormationParticipant for Silent {}

    #[test]
    fn spawn_and_read_back() {
        let mut store = AgentStore::new();
        let h = store.spawn(Pose::at(Vec3::new(1.0, 2.0, 3.0)));
        assert!(store.is_alive(h));
        assert_eq!(store.len(), 1);
        assert_eq!(store.pose(h).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn set_pose_writes_all_components() {
        let mut store = AgentStore::new();
        let h = store.spawn(Pose::default());
        let target = Pose::new(Vec3::X, glam::Quat::from_rotation_z(1.0), Vec3::splat(2.0));
        assert!(store.set_pose(h, target));
        assert_eq!(store.pose(h), Some(target));
    }

    #[test]
    fn despawned_handle_is_stale_after_slot_reuse() {
        let mut store = AgentStore::new();
        let old = store.spawn(Pose::at(Vec3::ZERO));
        assert!(store.despawn(old));
        assert!(!store.despawn(old));

        let new = store.spawn(Pose::at(Vec3::X));
        assert_eq!(new.index, old.index);
        assert_ne!(new.generation, old.generation);

        assert!(store.pose(old).is_none());
        assert!(!store.set_pose(old, Pose::default()));
        assert_eq!(store.pose(new).unwrap().position, Vec3::X);
        assert_eq!(store.slot_count(), 1);
    }

    #[test]
    fn invalid_and_out_of_range_handles_resolve_to_none() {
        let mut store = AgentStore::new();
        store.spawn(Pose::default());
        assert!(store.pose(AgentHandle::INVALID).is_none());
        assert!(store.pose(AgentHandle::new(5, 0)).is_none());
        assert!(store.participant_mut(AgentHandle::INVALID).is_none());
    }

    #[test]
    fn handles_skip_dead_slots() {
        let mut store = AgentStore::new();
        let a = store.spawn(Pose::default());
        let b = store.spawn(Pose::default());
        let c = store.spawn(Pose::default());
        store.despawn(b);
        let live: Vec<_> = store.handles().collect();
        assert_eq!(live, vec![a, c]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn participant_lookup() {
        let mut store = AgentStore::new();
        let plain = store.spawn(Pose::default());
        let hooked = store.spawn_with_participant(Pose::default(), Box::new(Silent));
        assert!(store.participant_mut(plain).is_none());
        assert!(store.participant_mut(hooked).is_some_and(|p| p.can_participate()));

        store.despawn(hooked);
        assert!(store.participant_mut(hooked).is_none());
    }
}

#[cfg(test)]
mod builder {
    use crate::{AgentHost, AgentStoreBuilder, FormationParticipant, Pose};
    use glam::Vec3;

    struct Shy;
    impl FormationParticipant for Shy {
        fn can_participate(&self) -> bool {
            false
        }
    }

    #[test]
    fn builds_in_insertion_order() {
        let (mut store, handles) = AgentStoreBuilder::new()
            .agent(Pose::at(Vec3::new(-1.0, 0.0, 0.0)))
            .at_positions(&[Vec3::ZERO, Vec3::X])
            .participant(Pose::at(Vec3::Y), Box::new(Shy))
            .build();

        assert_eq!(handles.len(), 4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.pose(handles[0]).unwrap().position.x, -1.0);
        assert_eq!(store.pose(handles[2]).unwrap().position, Vec3::X);
        assert!(store.participant_mut(handles[3]).is_some_and(|p| !p.can_participate()));
    }
}
