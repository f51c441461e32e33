//! square_to_circle — headless walkthrough of a formation transition.
//!
//! Sixteen agents stand in a 4×4 square.  The demo compares every
//! assignment mode against a ring 1 km away, then runs one transition at a
//! fixed 60 Hz tick and prints where each agent ended up.
//!
//! Usage: `square_to_circle [mode]` where `mode` is one of the kebab-case
//! mode names (`optimized`, `spatial-order`, …).  Set `RUST_LOG=debug` to
//! see the assignment and cache decisions.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use fm_agent::{AgentHost, AgentStoreBuilder, FormationParticipant, Pose};
use fm_assign::detect_path_conflicts;
use fm_core::{AssignmentMode, TransitionConfig};
use fm_formation::library;
use fm_transition::FormationDriver;
use glam::{Quat, Vec3};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:  usize = 16;
const SPACING:      f32   = 100.0;
const RING_RADIUS:  f32   = 400.0;
const RING_CENTER:  Vec3  = Vec3::new(1000.0, 0.0, 0.0);
const TICK_SECS:    f32   = 1.0 / 60.0;
const DURATION:     f32   = 2.0;

// ── Participant ───────────────────────────────────────────────────────────────

/// Counts arrivals across the whole group.
struct ArrivalCounter(Arc<AtomicUsize>);

impl FormationParticipant for ArrivalCounter {
    fn on_transition_completed(&mut self, _final_position: Vec3) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fn parse_mode(arg: Option<String>) -> Result<AssignmentMode> {
    let Some(name) = arg else {
        return Ok(AssignmentMode::default());
    };
    match AssignmentMode::ALL.into_iter().find(|m| m.as_str() == name) {
        Some(mode) => Ok(mode),
        None => bail!(
            "unknown mode {name:?}; expected one of: {}",
            AssignmentMode::ALL.map(AssignmentMode::as_str).join(", ")
        ),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let mode = parse_mode(std::env::args().nth(1))?;

    println!("=== square_to_circle ===");
    println!("Agents: {AGENT_COUNT}  |  Mode: {mode}  |  Duration: {DURATION}s");
    println!();

    // 1. Formations.
    let square = library::square(Vec3::ZERO, Quat::IDENTITY, AGENT_COUNT, SPACING, 0);
    let ring = library::circle(RING_CENTER, Quat::IDENTITY, AGENT_COUNT, RING_RADIUS, 0.0, true);
    square.validate()?;
    ring.validate()?;
    let from = square.world_positions();
    let to = ring.world_positions();

    // 2. Agents, every one with an arrival hook.
    let arrivals = Arc::new(AtomicUsize::new(0));
    let builder = from.iter().fold(AgentStoreBuilder::new(), |b, &p| {
        b.participant(Pose::at(p), Box::new(ArrivalCounter(Arc::clone(&arrivals))))
    });
    let (mut store, agents) = builder.build();

    // 3. Compare modes.
    let mut driver = FormationDriver::new();
    println!("{:<16} {:>12} {:>10} {:>9}", "Mode", "Distance", "Crossings", "Severity");
    println!("{}", "-".repeat(50));
    for candidate in AssignmentMode::ALL {
        let assignment = driver.calculate_optimal_assignment(&square, &ring, candidate);
        let distance: f32 = assignment.iter().enumerate().map(|(i, &j)| from[i].distance(to[j])).sum();
        let report = detect_path_conflicts(&assignment, &from, &to);
        println!(
            "{:<16} {:>12.1} {:>10} {:>9.3}",
            candidate.as_str(),
            distance,
            report.total,
            report.severity
        );
    }
    println!();

    // 4. Run one transition.
    let config = TransitionConfig { mode, duration: DURATION, ..TransitionConfig::default() };
    driver.start_transition_with_interface(&mut store, &agents, &square, &ring, &config)?;

    let mut ticks = 0u32;
    while driver.is_transitioning() {
        driver.tick(&mut store, TICK_SECS);
        ticks += 1;
        if ticks.is_multiple_of(30) {
            log::info!("t={:.2}s progress {:.0}%", driver.now(), driver.progress() * 100.0);
        }
    }

    // 5. Summary.
    println!(
        "Transition complete after {ticks} ticks ({:.2}s), {} arrivals reported",
        driver.now(),
        arrivals.load(Ordering::Relaxed)
    );
    println!();
    println!("{:<12} {:<24} {:<6}", "Agent", "Position", "Anchor");
    println!("{}", "-".repeat(44));
    for unit in &driver.state().units {
        let Some(pose) = store.pose(unit.agent) else { continue };
        println!(
            "{:<12} ({:>8.1}, {:>8.1})    {:<6}",
            unit.agent.to_string(),
            pose.position.x,
            pose.position.y,
            unit.anchor
        );
    }

    Ok(())
}
