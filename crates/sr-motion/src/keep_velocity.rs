//! Cruise at a fixed speed, re-asserted every tick.

use sr_core::{ActorId, Tick, Vec2};
use sr_behavior::{MotionPrimitive, MotionResult, Progress, TickContext};

#[derive(Copy, Clone, Debug)]
enum State {
    Idle,
    Cruising { until: Option<Tick> },
}

/// Drive the actor straight ahead at a constant speed.
///
/// The velocity is written back every tick, so the cruise survives anything
/// else that touched the actor in between.  With a duration the maneuver
/// completes once the time is up; without one it runs until cancelled.
/// Cancellation leaves the last commanded velocity in place, which lets a
/// following maneuver take over from a moving actor.
pub struct KeepVelocity {
    actor:         ActorId,
    speed_mps:     f32,
    duration_secs: Option<f32>,
    state:         State,
}

impl KeepVelocity {
    pub fn new(actor: ActorId, speed_mps: f32) -> Self {
        debug_assert!(speed_mps >= 0.0, "speed cannot be negative");
        Self {
            actor,
            speed_mps,
            duration_secs: None,
            state: State::Idle,
        }
    }

    /// Complete after `secs` instead of running indefinitely.
    pub fn for_secs(mut self, secs: f32) -> Self {
        debug_assert!(secs > 0.0, "duration must be positive");
        self.duration_secs = Some(secs);
        self
    }
}

impl MotionPrimitive for KeepVelocity {
    fn name(&self) -> &str {
        "keep_velocity"
    }

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn start(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<()> {
        ctx.world.transform(self.actor)?;
        let until = self.duration_secs.map(|secs| {
            let ticks = (secs / ctx.dt_secs).ceil() as u64;
            ctx.tick + ticks
        });
        self.state = State::Cruising { until };
        ctx.world.set_velocity(self.actor, Vec2::new(self.speed_mps, 0.0))?;
        Ok(())
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<Progress> {
        let State::Cruising { until } = self.state else {
            debug_assert!(false, "ticked before start");
            return Ok(Progress::Working);
        };
        if let Some(until) = until {
            if ctx.tick >= until {
                return Ok(Progress::Complete);
            }
        }
        ctx.world.set_velocity(self.actor, Vec2::new(self.speed_mps, 0.0))?;
        Ok(Progress::Working)
    }

    fn cancel(&mut self, _ctx: &mut TickContext<'_>) {
        // The actor keeps cruising; the next maneuver owns it now.
    }
}
