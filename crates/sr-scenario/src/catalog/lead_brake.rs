//! Lead vehicle braking ahead of the ego.
//!
//! A lead vehicle spawns ahead in the ego's lane and cruises at a steady
//! speed.  The moment the ego closes within the trigger distance the lead
//! slams the brakes, stops, and stays put.  Passing means the ego (driven
//! by the harness under test) avoided the rear-end collision until the
//! timeout.

use sr_core::Transform;
use sr_trigger::TriggerCondition;
use sr_behavior::{BehaviorNode, ParallelPolicy};
use sr_motion::{FullStop, Hold, KeepVelocity};

use crate::def::{ScenarioDef, SetupContext};
use crate::error::{ScenarioError, ScenarioResult};

/// Parameters for [`LeadBrake`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeadBrakeParams {
    /// How far ahead of the ego the lead spawns, metres.
    pub spawn_ahead_m: f32,

    /// Lead cruise speed before the brake, m/s.
    pub cruise_speed_mps: f32,

    /// Ego-to-lead gap that triggers the brake, metres.
    pub trigger_distance_m: f32,

    /// Lead blueprint name.
    pub lead_blueprint: String,
}

impl Default for LeadBrakeParams {
    fn default() -> Self {
        Self {
            spawn_ahead_m:      35.0,
            cruise_speed_mps:   8.0,
            trigger_distance_m: 20.0,
            lead_blueprint:     "vehicle.toyota.prius".to_string(),
        }
    }
}

/// The lead-brake scenario definition.
pub struct LeadBrake {
    pub params: LeadBrakeParams,
}

impl LeadBrake {
    pub fn new(params: LeadBrakeParams) -> Self {
        Self { params }
    }
}

impl Default for LeadBrake {
    fn default() -> Self {
        Self::new(LeadBrakeParams::default())
    }
}

impl ScenarioDef for LeadBrake {
    fn name(&self) -> &str {
        "lead_brake"
    }

    fn timeout_secs(&self) -> u32 {
        60
    }

    fn setup(&self, ctx: &mut SetupContext<'_>) -> ScenarioResult<BehaviorNode> {
        let p = &self.params;

        // Checked before the spawn so a bad threshold cannot leak an actor.
        if !(p.trigger_distance_m.is_finite() && p.trigger_distance_m > 0.0) {
            return Err(ScenarioError::Config(format!(
                "bad trigger distance: {}",
                p.trigger_distance_m
            )));
        }

        let ego_tf = ctx.world.transform(ctx.ego)?;
        let lead = ctx.spawn_owned(
            &p.lead_blueprint,
            Transform::at(ego_tf.position.x + p.spawn_ahead_m, ego_tf.position.y),
        )?;
        let closing_in = TriggerCondition::within_distance(ctx.ego, lead, p.trigger_distance_m)?;

        // The cruise never completes on its own; the gate firing resolves
        // the parallel, cancels the cruise, and hands the lead to the
        // brake in the same cycle.
        Ok(BehaviorNode::sequence("lead_brake", vec![
            BehaviorNode::parallel("cruise_until_close", ParallelPolicy::SucceedOnAny, vec![
                BehaviorNode::action(
                    "cruise",
                    Box::new(KeepVelocity::new(lead, p.cruise_speed_mps)),
                ),
                BehaviorNode::gate("ego_closing_in", closing_in),
            ]),
            BehaviorNode::action("emergency_brake", Box::new(FullStop::new(lead))),
            BehaviorNode::action("sit_stopped", Box::new(Hold::new(lead))),
        ]))
    }
}
