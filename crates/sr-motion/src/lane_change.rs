//! Two-phase kinematic lane change.

use tracing::debug;

use sr_core::{ActorId, Transform, Vec2};
use sr_behavior::{MotionError, MotionPrimitive, MotionResult, Progress, TickContext};
use sr_world::LaneSide;

/// Longitudinal distance over which the lateral crossing happens, metres.
pub const DEFAULT_CROSSING_M: f32 = 25.0;

#[derive(Debug)]
enum State {
    Idle,
    /// Running straight before the swerve.
    SameLane { until_x: f32, target_y: f32 },
    /// Crossing onto the target lane.
    Crossing { until_x: f32, target_y: f32 },
}

/// Drive straight for a configured run-up, then cross onto the adjacent
/// lane and snap to its centre line.
///
/// Longitudinal speed is held at `speed_mps` for the whole maneuver; the
/// crossing adds the lateral rate needed to reach the target centre over
/// [`crossing_m`](Self::crossing) longitudinal metres.  Fails at start if
/// there is no lane on the requested side.
pub struct LaneChange {
    actor:       ActorId,
    side:        LaneSide,
    speed_mps:   f32,
    same_lane_m: f32,
    crossing_m:  f32,
    state:       State,
}

impl LaneChange {
    /// Change onto the `side` lane at `speed_mps` after `same_lane_m`
    /// metres of straight running.
    ///
    /// # Panics
    /// Panics in debug mode on a non-positive speed or negative run-up.
    pub fn new(actor: ActorId, side: LaneSide, speed_mps: f32, same_lane_m: f32) -> Self {
        debug_assert!(speed_mps > 0.0, "lane change needs forward speed");
        debug_assert!(same_lane_m >= 0.0, "run-up cannot be negative");
        Self {
            actor,
            side,
            speed_mps,
            same_lane_m,
            crossing_m: DEFAULT_CROSSING_M,
            state: State::Idle,
        }
    }

    /// Override the longitudinal length of the crossing phase.
    pub fn crossing(mut self, metres: f32) -> Self {
        debug_assert!(metres > 0.0, "crossing length must be positive");
        self.crossing_m = metres;
        self
    }
}

impl MotionPrimitive for LaneChange {
    fn name(&self) -> &str {
        "lane_change"
    }

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn start(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<()> {
        let tf = ctx.world.transform(self.actor)?;
        let map = ctx.world.map();

        let current = map.lane_of(tf.position);
        let Some(target) = map.adjacent(current, self.side) else {
            return Err(MotionError::NotApplicable(format!(
                "no {} lane from {current}",
                self.side
            )));
        };
        let Some(target_y) = map.center_y(target) else {
            return Err(MotionError::NotApplicable(format!("{target} is off the road")));
        };

        self.state = State::SameLane {
            until_x: tf.position.x + self.same_lane_m,
            target_y,
        };
        ctx.world.set_velocity(self.actor, Vec2::new(self.speed_mps, 0.0))?;
        Ok(())
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> MotionResult<Progress> {
        let pos = ctx.world.transform(self.actor)?.position;

        match self.state {
            State::Idle => {
                debug_assert!(false, "ticked before start");
                Ok(Progress::Working)
            }
            State::SameLane { until_x, target_y } => {
                if pos.x < until_x {
                    return Ok(Progress::Working);
                }
                // Lateral rate that covers the remaining offset over
                // `crossing_m` longitudinal metres.
                let vy = (target_y - pos.y) * self.speed_mps / self.crossing_m;
                ctx.world.set_velocity(self.actor, Vec2::new(self.speed_mps, vy))?;
                self.state = State::Crossing {
                    until_x: pos.x + self.crossing_m,
                    target_y,
                };
                debug!(actor = %self.actor, side = %self.side, "lane change crossing started");
                Ok(Progress::Working)
            }
            State::Crossing { until_x, target_y } => {
                if pos.x < until_x {
                    return Ok(Progress::Working);
                }
                // Arrived: kill the lateral component and snap onto the
                // centre line to absorb tick-granularity error.
                ctx.world
                    .set_transform(self.actor, Transform::at(pos.x, target_y))?;
                ctx.world
                    .set_velocity(self.actor, Vec2::new(self.speed_mps, 0.0))?;
                Ok(Progress::Complete)
            }
        }
    }

    fn cancel(&mut self, ctx: &mut TickContext<'_>) {
        // Straighten out; the actor may already be gone during teardown.
        let _ = ctx
            .world
            .set_velocity(self.actor, Vec2::new(self.speed_mps, 0.0));
    }
}
