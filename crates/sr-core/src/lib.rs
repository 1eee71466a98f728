//! `sr-core` — foundational types for the `rust_sr` scenario engine.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`ids`]   | `ActorId`, `LaneId`                              |
//! | [`geo`]   | `Vec2`, `Transform`, `Aabb`                      |
//! | [`time`]  | `Tick`, `ScenarioClock`                          |
//! | [`rng`]   | `ScenarioRng` (seeded, reproducible)             |
//! | [`actor`] | `ActorRole` enum                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod actor;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use actor::ActorRole;
pub use geo::{Aabb, Transform, Vec2};
pub use ids::{ActorId, LaneId};
pub use rng::ScenarioRng;
pub use time::{ScenarioClock, Tick};
