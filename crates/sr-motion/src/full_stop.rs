//! Constant-deceleration braking to a standstill.

use sr_core::{ActorId, Tick, Vec2};
use sr_behavior::{MotionPrimitive, MotionResult, Progress, TickContext};

/// Default braking rate, m/s².  Hard but within a road car's envelope.
pub const DEFAULT_DECEL_MPS2: f32 = 8.0;

/// Speeds below this count as stationary.
const REST_EPS_MPS: f32 = 1e-3;

#[derive(Copy, Clone, Debug)]
enum State {
    Idle,
    Braking,
    Holding { until: Tick },
}

/// Brake the actor to rest along its current direction of motion, then
/// optionally hold it stationary for a configured time before reporting
/// completion.
///
/// An actor that is already stationary skips straight to the hold.
pub struct FullStop {
    actor:      ActorId,
    decel_mps2: f32,
    hold_secs:  f32,
    state:      State,
}

impl FullStop {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            decel_mps2: DEFAULT_DECEL_MPS2,
            hold_secs:  0.0,
            state:      State::Idle,
        }
    }

    /// Keep the actor at rest for `secs` after stopping before the
    /// maneuver counts as complete.
    pub fn hold_secs(mut self, secs: f32) -> Self {
        debug_assert!(secs >= 0.0, "hold cannot be negative");
        self.hold_secs = secs;
        self
    }

    /// Override the braking rate.
    pub fn decel(mut self, mps2: f32) -> Self {
        debug_assert!(mps2 > 0.0, "deceleration must be positive");
        self.decel_mps2 = mps2;
        self
    }

    fn hold_until(&self, ctx: &TickContext<'_>) -> Tick {
        let hold_ticks = (self.hold_secs / ctx.dt_secs).ceil() as u64;
        ctx.tick + hold_ticks
    }
}

impl MotionPrimitive for FullStop {
    fn name(&self) -> &str {
        "full_stop"
    }

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn start(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<()> {
        // Fail fast if the actor is gone before braking begins.
        ctx.world.transform(self.actor)?;
        self.state = State::Braking;
        Ok(())
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<Progress> {
        match self.state {
            State::Idle => {
                debug_assert!(false, "ticked before start");
                Ok(Progress::Working)
            }
            State::Braking => {
                let vel = ctx.world.velocity(self.actor)?;
                let speed = vel.length();
                let next = speed - self.decel_mps2 * ctx.dt_secs;

                if speed <= REST_EPS_MPS || next <= 0.0 {
                    ctx.world.set_velocity(self.actor, Vec2::ZERO)?;
                    if self.hold_secs == 0.0 {
                        return Ok(Progress::Complete);
                    }
                    self.state = State::Holding { until: self.hold_until(ctx) };
                    return Ok(Progress::Working);
                }

                // Scale the velocity vector so braking follows the current
                // direction of motion, diagonal or not.
                ctx.world.set_velocity(self.actor, vel * (next / speed))?;
                Ok(Progress::Working)
            }
            State::Holding { until } => {
                if ctx.tick >= until {
                    Ok(Progress::Complete)
                } else {
                    Ok(Progress::Working)
                }
            }
        }
    }

    fn cancel(&mut self, _ctx: &mut TickContext<'_>) {
        // Whatever speed is left stays; nothing to restore.
    }
}
