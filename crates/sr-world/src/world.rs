//! World access traits consumed by triggers, behaviors, and the orchestrator.
//!
//! # Pluggability
//!
//! The engine never talks to a backend directly; everything goes through
//! these traits, so applications can swap the bundled kinematic
//! [`SimWorld`][crate::SimWorld] for a bridge to a full physics simulator
//! without touching the engine core.  The split mirrors who needs what:
//!
//! | Trait            | Capability                        | Typical consumer       |
//! |------------------|-----------------------------------|------------------------|
//! | [`WorldView`]    | read-only queries                 | triggers, criteria     |
//! | [`WorldControl`] | + velocity / transform commands   | motion primitives      |
//! | [`ActorFactory`] | spawn / destroy                   | scenario setup         |
//! | [`Simulator`]    | + fixed-step advance              | the orchestrator       |
//!
//! # Thread safety
//!
//! None of these traits require `Send`/`Sync`: the engine ticks a single
//! scenario cooperatively on one thread.

use sr_core::{Aabb, ActorId, ActorRole, Transform, Vec2};

use crate::error::{SpawnError, WorldError};
use crate::map::LaneMap;

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Read-only world queries.
///
/// All query methods return [`WorldError::ActorNotFound`] for destroyed or
/// never-spawned actors; callers decide whether that is fatal.
pub trait WorldView {
    /// The road the scenario plays out on.
    fn map(&self) -> &LaneMap;

    /// Position and heading of a live actor.
    fn transform(&self, actor: ActorId) -> Result<Transform, WorldError>;

    /// Velocity vector in m/s.
    fn velocity(&self, actor: ActorId) -> Result<Vec2, WorldError>;

    /// Collision box at the actor's current position.
    fn bounding_box(&self, actor: ActorId) -> Result<Aabb, WorldError>;

    /// `true` if the actor exists and has not been destroyed.
    fn is_alive(&self, actor: ActorId) -> bool;

    /// All live actors in ascending `ActorId` order.
    fn actors(&self) -> Vec<ActorId>;

    /// Distance between two actors' reference points in metres.
    fn distance_between(&self, a: ActorId, b: ActorId) -> Result<f32, WorldError> {
        Ok(self.transform(a)?.position.distance(self.transform(b)?.position))
    }

    /// Scalar speed in m/s.
    fn speed(&self, actor: ActorId) -> Result<f32, WorldError> {
        Ok(self.velocity(actor)?.length())
    }
}

// ── WorldControl ──────────────────────────────────────────────────────────────

/// Mutating commands available to motion primitives.
pub trait WorldControl: WorldView {
    /// Replace an actor's commanded velocity.
    fn set_velocity(&mut self, actor: ActorId, vel: Vec2) -> Result<(), WorldError>;

    /// Reposition an actor directly.  Motion primitives steer by velocity;
    /// this exists for placement fix-ups (lane-centre snap, setup).
    fn set_transform(&mut self, actor: ActorId, tf: Transform) -> Result<(), WorldError>;

    /// Hand an actor to the backend's ambient-traffic control.
    fn set_autopilot(&mut self, actor: ActorId, enabled: bool) -> Result<(), WorldError>;
}

// ── ActorFactory ──────────────────────────────────────────────────────────────

/// Actor creation and removal.
pub trait ActorFactory {
    /// Create an actor from `blueprint` at `at`.
    ///
    /// The backend validates the blueprint name against its catalog and the
    /// position against physical occupancy; see [`SpawnError`] for the
    /// distinction.
    fn spawn(&mut self, blueprint: &str, at: Transform, role: ActorRole)
        -> Result<ActorId, SpawnError>;

    /// Remove an actor from the world.
    fn destroy(&mut self, actor: ActorId) -> Result<(), WorldError>;
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Full backend contract: everything above plus fixed-step time advance.
pub trait Simulator: WorldControl + ActorFactory {
    /// Advance the world by `dt_ms` simulated milliseconds.
    fn step(&mut self, dt_ms: u32) -> Result<(), WorldError>;
}
