//! `fm-transition` — drives a group of agents from one formation to another.
//!
//! This is the top of the workspace: it ties formation layouts
//! (`fm-formation`), anchor assignment (`fm-assign`), and the host seam
//! (`fm-agent`) into one [`FormationDriver`] that a host ticks once per
//! frame.
//!
//! # Quick start
//!
//! ```rust
//! use fm_agent::AgentStoreBuilder;
//! use fm_formation::library;
//! use fm_transition::{FormationDriver, TransitionConfig};
//! use glam::{Quat, Vec3};
//!
//! let from = library::square(Vec3::ZERO, Quat::IDENTITY, 9, 100.0, 0);
//! let to = library::circle(Vec3::new(1000.0, 0.0, 0.0), Quat::IDENTITY, 9, 300.0, 0.0, true);
//!
//! let (mut store, agents) = AgentStoreBuilder::new().at_positions(&from.world_positions()).build();
//! let mut driver = FormationDriver::new();
//! driver.start_transition(&mut store, &agents, &from, &to, &TransitionConfig::default()).unwrap();
//!
//! while driver.is_transitioning() {
//!     driver.tick(&mut store, 1.0 / 60.0);
//! }
//! ```
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`driver`] | `FormationDriver`: start, tick, stop, queries             |
//! | [`state`]  | `TransitionState`, `UnitTransition`                       |
//! | [`error`]  | `TransitionError`, `TransitionResult`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Parallel cost-matrix construction in `fm-assign`.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on the state types.  |

pub mod driver;
pub mod error;
pub mod state;


pub use driver::FormationDriver;
pub use error::{TransitionError, TransitionResult};
pub use state::{TransitionState, UnitTransition};

pub use fm_core::TransitionConfig;
