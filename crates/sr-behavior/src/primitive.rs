//! The `MotionPrimitive` trait — the engine's actuation extension point.

use thiserror::Error;

use sr_core::ActorId;
use sr_world::WorldError;

use crate::context::TickContext;

/// Failure raised by a motion primitive while commanding its actor.
#[derive(Debug, Error)]
pub enum MotionError {
    /// The maneuver cannot run against this world (no adjacent lane, …).
    #[error("maneuver not applicable: {0}")]
    NotApplicable(String),

    /// Underlying world command failed.
    #[error(transparent)]
    World(#[from] WorldError),
}

pub type MotionResult<T> = Result<T, MotionError>;

/// What a primitive reports from each tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Progress {
    /// Keep ticking.
    Working,
    /// Goal reached; the owning action reports `Success`.
    Complete,
}

/// A scripted maneuver bound to one actor at construction.
///
/// # Lifecycle
///
/// The owning action node calls [`start`][Self::start] exactly once on the
/// action's first tick, then [`tick`][Self::tick] each cycle until
/// `Complete` or an error, and [`cancel`][Self::cancel] if the tree is torn
/// down mid-maneuver.  After completion, an error, or a cancel, the node
/// never calls back in.
///
/// # Object safety
///
/// Primitives are stored as `Box<dyn MotionPrimitive>` inside action nodes.
/// The trait does not require `Send`: a scenario ticks on one thread, and
/// tests instrument primitives with `Rc` probes.
pub trait MotionPrimitive {
    /// Short name for logs and reports ("lane_change", "full_stop", …).
    fn name(&self) -> &str;

    /// The actor this primitive commands.
    fn actor(&self) -> ActorId;

    /// One-time initialisation on the action's first tick.
    fn start(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<()>;

    /// Advance one cycle.
    fn tick(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<Progress>;

    /// Stop commanding the actor, leaving it in a safe state.  Called at
    /// most once, and only after a successful `start`.
    fn cancel(&mut self, ctx: &mut TickContext<'_>);
}
