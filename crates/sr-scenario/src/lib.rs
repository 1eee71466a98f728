//! `sr-scenario` — scenario lifecycle orchestrator.
//!
//! # Tick cycle
//!
//! ```text
//! loop until decided:
//!   ① Deadline  — at or past the timeout tick the run is TimedOut
//!                 before any further work.
//!   ② Step      — advance the world by one tick_duration_ms.
//!   ③ Tree      — tick the behavior tree root (gates, maneuvers).
//!   ④ Criteria  — sweep every criterion; the first fresh latch is
//!                 recorded with its tick.
//!   ⑤ Resolve   — advance the clock; a latched criterion outranks a
//!                 finished tree, so CriterionFailed wins over
//!                 Completed(status) decided on the same cycle.
//! ```
//!
//! Teardown destroys scenario-owned actors exactly once, tree first so
//! maneuvers never command a destroyed actor.  The ego is never owned
//! and never destroyed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sr_core::{ActorRole, Transform};
//! use sr_scenario::{catalog::SuddenCutIn, NoopObserver, Scenario, ScenarioConfig};
//! use sr_world::{ActorFactory, LaneMap, SimWorld};
//!
//! let mut world = SimWorld::builder()
//!     .map(LaneMap::highway(3))
//!     .default_catalog()
//!     .build();
//! let ego = world.spawn("vehicle.lincoln.mkz2017", Transform::at(0.0, 3.5), ActorRole::Ego)?;
//! let mut scenario = Scenario::build(
//!     &SuddenCutIn::default(),
//!     ScenarioConfig::default(),
//!     ego,
//!     &mut world,
//! )?;
//! let report = scenario.run(&mut world, &mut NoopObserver)?;
//! println!("{report}");
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`scenario`] | `Scenario` lifecycle driver                         |
//! | [`def`]      | `ScenarioDef` trait, `SetupContext`                 |
//! | [`catalog`]  | Ready-made definitions (`SuddenCutIn`, `LeadBrake`) |
//! | [`registry`] | Owned-actor bookkeeping, `TeardownReport`           |
//! | [`outcome`]  | `ScenarioOutcome`, `ScenarioReport`                 |
//! | [`observer`] | `ScenarioObserver` run hooks                        |
//! | [`config`]   | `ScenarioConfig` knobs                              |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.   |

pub mod catalog;
pub mod config;
pub mod def;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod registry;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use config::ScenarioConfig;
pub use def::{ScenarioDef, SetupContext};
pub use error::{ScenarioError, ScenarioResult};
pub use observer::{NoopObserver, ScenarioObserver};
pub use outcome::{ScenarioOutcome, ScenarioReport};
pub use registry::{ActorRegistry, TeardownReport};
pub use scenario::Scenario;
