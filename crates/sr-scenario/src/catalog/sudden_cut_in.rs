//! Region-triggered cut-in with an emergency stop.
//!
//! A hazard vehicle waits ahead of the ego in the right-adjacent lane.
//! When the ego enters the trigger region, the hazard swerves into the
//! ego's lane, brakes to a standstill, holds for a few seconds, and then
//! sits there for the rest of the run.  Background traffic cruises behind
//! the ego to keep the world busy.  The run is expected to end by timeout
//! (pass) or collision (fail).

use tracing::debug;

use sr_core::{Transform, Vec2};
use sr_world::{LaneSide, DEFAULT_BLUEPRINTS};
use sr_trigger::{Region, TriggerCondition};
use sr_behavior::BehaviorNode;
use sr_motion::{FullStop, Hold, LaneChange};

use crate::def::{ScenarioDef, SetupContext};
use crate::error::ScenarioResult;

/// Parameters for [`SuddenCutIn`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutInParams {
    /// Trigger region as `"x_min,x_max,y_min,y_max"`.
    pub trigger_region: String,

    /// Hazard speed through the cut-in, m/s.
    pub target_speed_mps: f32,

    /// Straight run-up before the swerve, metres.
    pub cut_in_distance_m: f32,

    /// How far ahead of the ego the hazard spawns, metres.
    pub spawn_ahead_m: f32,

    /// How long the hazard stays stopped after braking, seconds.
    pub stop_hold_secs: f32,

    /// Hazard blueprint name.
    pub hazard_blueprint: String,

    /// Background traffic vehicles spawned behind the ego.
    pub background_vehicles: u32,

    /// Longitudinal gap between background vehicles, metres.
    pub background_gap_m: f32,
}

impl Default for CutInParams {
    fn default() -> Self {
        Self {
            trigger_region:      "10,20,-5,5".to_string(),
            target_speed_mps:    10.0,
            cut_in_distance_m:   10.0,
            spawn_ahead_m:       80.0,
            stop_hold_secs:      5.0,
            hazard_blueprint:    "vehicle.tesla.model3".to_string(),
            background_vehicles: 3,
            background_gap_m:    18.0,
        }
    }
}

/// The cut-in scenario definition.
pub struct SuddenCutIn {
    pub params: CutInParams,
}

impl SuddenCutIn {
    pub fn new(params: CutInParams) -> Self {
        Self { params }
    }
}

impl Default for SuddenCutIn {
    fn default() -> Self {
        Self::new(CutInParams::default())
    }
}

impl ScenarioDef for SuddenCutIn {
    fn name(&self) -> &str {
        "sudden_cut_in"
    }

    fn timeout_secs(&self) -> u32 {
        120
    }

    fn setup(&self, ctx: &mut SetupContext<'_>) -> ScenarioResult<BehaviorNode> {
        let p = &self.params;

        // Trigger parsing comes first so a malformed region never leaves
        // actors behind.
        let region: Region = p.trigger_region.parse()?;

        let ego_tf = ctx.world.transform(ctx.ego)?;

        // The hazard prefers the right-adjacent lane; without one it
        // spawns straight ahead in the ego lane instead of failing.
        let hazard_y = {
            let map = ctx.world.map();
            let ego_lane = map.lane_of(ego_tf.position);
            match map
                .adjacent(ego_lane, LaneSide::Right)
                .and_then(|lane| map.center_y(lane))
            {
                Some(y) => y,
                None => {
                    debug!("no right lane at the hazard spawn; using the ego lane");
                    ego_tf.position.y
                }
            }
        };
        let hazard = ctx.spawn_owned(
            &p.hazard_blueprint,
            Transform::at(ego_tf.position.x + p.spawn_ahead_m, hazard_y),
        )?;

        // Background traffic cruises behind the ego in its lane, speeds
        // jittered per seed so runs stay reproducible.
        for i in 0..p.background_vehicles {
            let x = ego_tf.position.x - p.background_gap_m * (i + 1) as f32;
            let blueprint = DEFAULT_BLUEPRINTS[i as usize % DEFAULT_BLUEPRINTS.len()];
            let id = ctx.spawn_owned(blueprint, Transform::at(x, ego_tf.position.y))?;
            ctx.world.set_autopilot(id, true)?;
            let cruise: f32 = ctx.rng.gen_range(5.0..8.0);
            ctx.world.set_velocity(id, Vec2::new(cruise, 0.0))?;
        }

        Ok(BehaviorNode::sequence("cut_in_and_brake", vec![
            BehaviorNode::gate("ego_in_region", TriggerCondition::in_region(ctx.ego, region)),
            BehaviorNode::action(
                "cut_in",
                Box::new(LaneChange::new(
                    hazard,
                    LaneSide::Left,
                    p.target_speed_mps,
                    p.cut_in_distance_m,
                )),
            ),
            BehaviorNode::action(
                "emergency_stop",
                Box::new(FullStop::new(hazard).hold_secs(p.stop_hold_secs)),
            ),
            BehaviorNode::action("wait_forever", Box::new(Hold::new(hazard))),
        ]))
    }
}
