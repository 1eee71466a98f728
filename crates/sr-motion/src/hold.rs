//! Park an actor in place.

use sr_core::{ActorId, Vec2};
use sr_behavior::{MotionPrimitive, MotionResult, Progress, TickContext};

/// Pin the actor at zero velocity, forever.
///
/// Never completes on its own; it is meant to sit inside a parallel
/// composite (or at the tail of a scenario) and be cancelled from outside.
/// The zero velocity is re-asserted every tick so drift commanded by other
/// code cannot creep back in.
pub struct Hold {
    actor: ActorId,
}

impl Hold {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl MotionPrimitive for Hold {
    fn name(&self) -> &str {
        "hold"
    }

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn start(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<()> {
        ctx.world.transform(self.actor)?;
        ctx.world.set_velocity(self.actor, Vec2::ZERO)?;
        Ok(())
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<Progress> {
        ctx.world.set_velocity(self.actor, Vec2::ZERO)?;
        Ok(Progress::Working)
    }

    fn cancel(&mut self, _ctx: &mut TickContext<'_>) {}
}
