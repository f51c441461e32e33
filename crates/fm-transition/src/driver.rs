//! The `FormationDriver` and its tick loop.

use fm_agent::{AgentHost, Pose};
use fm_assign::{
    ConflictReport, CostMatrixCache, assign_cached, detect_path_conflicts, spatial_order_mapping,
};
use fm_core::tuning::MIN_TRANSITION_DURATION;
use fm_core::{
    AgentHandle, AssignmentMode, BoidsParams, TransitionClock, TransitionConfig, apply_easing,
    facing_rotation,
};
use fm_formation::FormationData;
use glam::Vec3;

use crate::state::{TransitionState, UnitTransition};
use crate::{TransitionError, TransitionResult};

// ── FormationDriver ───────────────────────────────────────────────────────────

/// Moves a group of host-owned agents from one formation to another.
///
/// The driver owns its clock, its cost-matrix cache, and the records of the
/// current transition.  It never owns agents: every read and write goes
/// through the [`AgentHost`] passed to each call.
///
/// Lifecycle:
///
/// 1. **Start**: validate counts, compute world anchors, assign each agent
///    an anchor, record start and target poses, scan for crossing paths.
/// 2. **Tick**: advance the clock by `dt`, compute eased progress, and
///    write `lerp(start, target, progress)` to every agent still moving.
///    At progress 1 each agent is set exactly to its target.
/// 3. **Stop** (optional): drop the records, optionally snapping every live
///    agent to its target first.
///
/// Calls must be serialized by the host; the driver is `Send` but does no
/// locking of its own.
#[derive(Default)]
pub struct FormationDriver {
    clock: TransitionClock,
    cache: CostMatrixCache,
    state: TransitionState,
}

impl FormationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver whose clock starts at host time `secs`.
    pub fn starting_at(secs: f64) -> Self {
        Self { clock: TransitionClock::starting_at(secs), ..Self::default() }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    /// Overall eased progress of the current or last transition.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.state.overall_progress
    }

    #[inline]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Driver clock, in seconds of accumulated `tick` time.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Store flocking parameters, clamped to their valid ranges.
    pub fn set_boids_params(&mut self, params: BoidsParams) {
        self.state.boids = params.clamped();
    }

    pub fn boids_params(&self) -> &BoidsParams {
        &self.state.boids
    }

    /// `true` if `to` has the same bounding-box size as `from` within
    /// tolerance, i.e. the move is a translation rather than a reshape.
    pub fn is_formation_translation(&self, from: &FormationData, to: &FormationData) -> bool {
        fm_assign::is_formation_translation(&from.world_positions(), &to.world_positions())
    }

    /// Crossing report for the spatial-order assignment between two
    /// formations.  Does not touch the current transition.  Formations of
    /// different sizes yield an empty report.
    pub fn check_formation_path_conflicts(&self, from: &FormationData, to: &FormationData) -> ConflictReport {
        if from.len() != to.len() {
            log::warn!("conflict check: anchor count mismatch ({} vs {})", from.len(), to.len());
            return ConflictReport::default();
        }
        let from_world = from.world_positions();
        let to_world = to.world_positions();
        let assignment = spatial_order_mapping(&from_world, &to_world);
        detect_path_conflicts(&assignment, &from_world, &to_world)
    }

    /// Assignment for `mode`, reusing this driver's cost-matrix cache.
    pub fn calculate_optimal_assignment(
        &mut self,
        from: &FormationData,
        to: &FormationData,
        mode: AssignmentMode,
    ) -> Vec<usize> {
        let now = self.clock.now();
        assign_cached(&from.world_positions(), &to.world_positions(), mode, &mut self.cache, now)
    }

    /// The driver's cost-matrix cache.
    pub fn cache(&self) -> &CostMatrixCache {
        &self.cache
    }

    /// `(current position, target position)` for every agent still moving.
    /// Agents whose handles have expired are left out.
    pub fn debug_segments<H: AgentHost + ?Sized>(&self, host: &H) -> Vec<(Vec3, Vec3)> {
        self.state
            .units
            .iter()
            .filter(|u| !u.completed)
            .filter_map(|u| host.pose(u.agent).map(|pose| (pose.position, u.target.position)))
            .collect()
    }

    // ── Start / stop ──────────────────────────────────────────────────────

    /// Begin moving `agents` (in `from` anchor order) into `to`.
    ///
    /// Rejected starts log a warning and leave any running transition alone.
    /// A successful start replaces whatever was running.
    pub fn start_transition<H: AgentHost + ?Sized>(
        &mut self,
        host: &mut H,
        agents: &[AgentHandle],
        from: &FormationData,
        to: &FormationData,
        config: &TransitionConfig,
    ) -> TransitionResult<()> {
        self.begin(host, agents, from, to, config, false)
    }

    /// [`start_transition`](Self::start_transition), plus participant
    /// notifications for every agent whose hooks accept them.
    pub fn start_transition_with_interface<H: AgentHost + ?Sized>(
        &mut self,
        host: &mut H,
        agents: &[AgentHandle],
        from: &FormationData,
        to: &FormationData,
        config: &TransitionConfig,
    ) -> TransitionResult<()> {
        self.begin(host, agents, from, to, config, true)
    }

    /// End the current transition.  With `snap_to_target` every live agent
    /// is first set to its target pose.  The cost-matrix cache is emptied.
    pub fn stop_transition<H: AgentHost + ?Sized>(&mut self, host: &mut H, snap_to_target: bool) {
        if snap_to_target {
            for unit in &self.state.units {
                if !host.set_pose(unit.agent, unit.target) || unit.completed {
                    continue;
                }
                if unit.notify {
                    notify_completed(host, unit.agent, unit.target.position);
                }
            }
        }
        if self.state.is_transitioning {
            log::info!(
                "transition stopped at {:.0}% ({} agents still moving, snap={snap_to_target})",
                self.state.overall_progress * 100.0,
                self.state.pending(),
            );
        }
        self.state.clear_units();
        self.state.overall_progress = 0.0;
        self.cache.clear();
    }

    fn begin<H: AgentHost + ?Sized>(
        &mut self,
        host: &mut H,
        agents: &[AgentHandle],
        from: &FormationData,
        to: &FormationData,
        config: &TransitionConfig,
        with_interface: bool,
    ) -> TransitionResult<()> {
        if let Err(e) = check_counts(agents.len(), from.len(), to.len()) {
            log::warn!("transition rejected: {e}");
            return Err(e);
        }
        if self.state.is_transitioning {
            log::debug!("replacing transition in flight ({} agents pending)", self.state.pending());
        }

        let config = config.sanitized();
        let from_world = from.world_positions();
        let to_world = to.world_positions();
        let now = self.clock.now();
        let assignment = assign_cached(&from_world, &to_world, config.mode, &mut self.cache, now);
        let conflicts = detect_path_conflicts(&assignment, &from_world, &to_world);

        let mut units = Vec::with_capacity(agents.len());
        for (i, &agent) in agents.iter().enumerate() {
            let Some(start) = host.pose(agent) else {
                log::debug!("{agent} expired before start, skipped");
                continue;
            };
            let anchor = assignment.get(i).copied().unwrap_or(i);
            let position = to_world[anchor];
            let rotation = facing_rotation(position - start.position).unwrap_or(start.rotation);
            let target = Pose::new(position, rotation, start.scale);

            let notify = with_interface
                && match host.participant_mut(agent) {
                    Some(hooks) if hooks.can_participate() => {
                        hooks.on_position_assigned(position, &config);
                        hooks.on_transition_started(start.position, position, &config);
                        true
                    }
                    _ => false,
                };

            if config.show_debug {
                log::debug!("{agent}: anchor {anchor}, {} -> {}", start.position, position);
            }
            units.push(UnitTransition { agent, anchor, start, target, progress: 0.0, completed: false, notify });
        }

        log::info!(
            "transition started: {} agents, mode {}, {:.2}s, {} crossing pairs",
            units.len(),
            config.mode,
            config.duration,
            conflicts.total,
        );

        self.state.units = units;
        self.state.start_time = now;
        self.state.overall_progress = 0.0;
        self.state.config = config;
        self.state.conflicts = conflicts;
        self.state.is_transitioning = true;
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the clock by `dt` seconds and move every agent still in
    /// transit.  No-op (apart from the clock) when nothing is running.
    pub fn tick<H: AgentHost + ?Sized>(&mut self, host: &mut H, dt: f32) {
        self.clock.advance(dt);
        if !self.state.is_transitioning {
            return;
        }

        let config = &self.state.config;
        let duration = config.duration.max(MIN_TRANSITION_DURATION) as f64;
        let raw = (self.clock.since(self.state.start_time) / duration).clamp(0.0, 1.0) as f32;
        let eased = if config.use_easing { apply_easing(raw, config.easing_strength) } else { raw };
        let eased = eased.max(self.state.overall_progress);
        let finished = raw >= 1.0;
        self.state.overall_progress = if finished { 1.0 } else { eased };

        for unit in self.state.units.iter_mut().filter(|u| !u.completed) {
            let pose = if finished { unit.target } else { unit.pose_at(eased) };
            if !host.set_pose(unit.agent, pose) {
                log::trace!("{} expired mid-transition, skipped", unit.agent);
                unit.completed = true;
                unit.notify = false;
                continue;
            }
            unit.progress = if finished { 1.0 } else { eased };
            if finished {
                unit.completed = true;
            }
        }

        for unit in self.state.units.iter().filter(|u| finished && u.notify) {
            notify_completed(host, unit.agent, unit.target.position);
        }

        if self.state.units.iter().all(|u| u.completed) {
            self.state.is_transitioning = false;
            log::info!("transition complete at t={:.3}s", self.clock.now());
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_counts(agents: usize, from: usize, to: usize) -> TransitionResult<()> {
    if agents == 0 {
        return Err(TransitionError::NoAgents);
    }
    if from != to {
        return Err(TransitionError::AnchorCountMismatch { from, to });
    }
    if agents != from {
        return Err(TransitionError::AgentCountMismatch { agents, anchors: from });
    }
    Ok(())
}

fn notify_completed<H: AgentHost + ?Sized>(host: &mut H, agent: AgentHandle, final_position: Vec3) {
    if let Some(hooks) = host.participant_mut(agent) {
        hooks.on_transition_completed(final_position);
    }
}
