//! `sr-world` — world abstraction and reference backend.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`map`]   | `LaneMap`, `LaneMapBuilder`, `Waypoint`, `LaneSide`         |
//! | [`world`] | `WorldView`, `WorldControl`, `ActorFactory`, `Simulator`    |
//! | [`sim`]   | `SimWorld` kinematic backend, `SimWorldBuilder`             |
//! | [`error`] | `WorldError`, `SpawnError`, `WorldResult<T>`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.      |

pub mod error;
pub mod map;
pub mod sim;
pub mod world;


pub use error::{SpawnError, WorldError, WorldResult};
pub use map::{LaneMap, LaneMapBuilder, LaneSide, Waypoint, DEFAULT_LANE_WIDTH_M};
pub use sim::{ActorState, SimWorld, SimWorldBuilder, DEFAULT_BLUEPRINTS, DEFAULT_HALF_EXTENTS};
pub use world::{ActorFactory, Simulator, WorldControl, WorldView};
