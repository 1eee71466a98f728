use sr_core::{ActorId, ActorRole, Tick, Transform, Vec2};
use sr_world::{ActorFactory, LaneMap, SimWorld, WorldControl, WorldError, WorldView};
use sr_trigger::TriggerCondition;
use sr_behavior::{BehaviorNode, Status};
use sr_motion::FullStop;

use super::catalog::{CutInParams, LeadBrake, LeadBrakeParams, SuddenCutIn};
use super::*;

const EGO_BP: &str = "vehicle.lincoln.mkz2017";

fn world(lanes: u16) -> SimWorld {
    SimWorld::builder()
        .map(LaneMap::highway(lanes))
        .default_catalog()
        .build()
}

fn spawn_ego(world: &mut SimWorld, x: f32, y: f32) -> ActorId {
    world
        .spawn(EGO_BP, Transform::at(x, y), ActorRole::Ego)
        .unwrap()
}

fn drive(world: &mut SimWorld, ego: ActorId, speed_mps: f32) {
    world.set_velocity(ego, Vec2::new(speed_mps, 0.0)).unwrap();
}

fn cfg_timeout(secs: u32) -> ScenarioConfig {
    ScenarioConfig {
        timeout_secs: Some(secs),
        ..ScenarioConfig::default()
    }
}

fn run_until_decided(
    scenario: &mut Scenario,
    world:    &mut SimWorld,
    max:      u64,
) -> ScenarioOutcome {
    for _ in 0..max {
        if let Some(outcome) = scenario.tick(world).unwrap() {
            return outcome;
        }
    }
    panic!("no outcome within {max} ticks");
}

/// Ego approaches a parked car; once it gets close the tree finishes with
/// a stop on the already-stationary car.  Smallest def that completes.
struct StopShort {
    ahead_m:   f32,
    trigger_m: f32,
}

impl ScenarioDef for StopShort {
    fn name(&self) -> &str {
        "stop_short"
    }

    fn timeout_secs(&self) -> u32 {
        30
    }

    fn setup(&self, ctx: &mut SetupContext<'_>) -> ScenarioResult<BehaviorNode> {
        let ego_tf = ctx.world.transform(ctx.ego)?;
        let car = ctx.spawn_owned(
            "vehicle.audi.tt",
            Transform::at(ego_tf.position.x + self.ahead_m, ego_tf.position.y),
        )?;
        let near = TriggerCondition::within_distance(ctx.ego, car, self.trigger_m)?;
        Ok(BehaviorNode::sequence("stop_short", vec![
            BehaviorNode::gate("ego_near", near),
            BehaviorNode::action("already_stopped", Box::new(FullStop::new(car))),
        ]))
    }
}

/// Parks a car on top of the ego so the collision latch and a finishing
/// tree land on the same cycle.  Spawning checks overlap; a teleport
/// afterwards does not.
struct OverlapInstant;

impl ScenarioDef for OverlapInstant {
    fn name(&self) -> &str {
        "overlap_instant"
    }

    fn setup(&self, ctx: &mut SetupContext<'_>) -> ScenarioResult<BehaviorNode> {
        let ego_tf = ctx.world.transform(ctx.ego)?;
        let car = ctx.spawn_owned(
            "vehicle.audi.tt",
            Transform::at(ego_tf.position.x + 50.0, ego_tf.position.y),
        )?;
        ctx.world
            .set_transform(car, Transform::at(ego_tf.position.x + 1.0, ego_tf.position.y))?;
        Ok(BehaviorNode::action("already_stopped", Box::new(FullStop::new(car))))
    }
}

#[derive(Default)]
struct RecordingObserver {
    events: Vec<String>,
}

impl ScenarioObserver for RecordingObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.events.push(format!("start {}", tick.0));
    }

    fn on_tick_end(&mut self, tick: Tick, root: Status) {
        self.events.push(format!("end {} {root}", tick.0));
    }

    fn on_criterion_failed(&mut self, tick: Tick, name: &str) {
        self.events.push(format!("criterion {name} {}", tick.0));
    }

    fn on_scenario_end(&mut self, report: &ScenarioReport) {
        self.events.push(format!("report {report}"));
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

mod registry {
    use super::*;

    #[test]
    fn releases_every_owned_actor_once() {
        let mut w = world(1);
        let mut reg = ActorRegistry::new();
        let a = w
            .spawn("vehicle.audi.tt", Transform::at(0.0, 0.0), ActorRole::Scenario)
            .unwrap();
        let b = w
            .spawn("vehicle.toyota.prius", Transform::at(20.0, 0.0), ActorRole::Scenario)
            .unwrap();
        reg.record(a, "vehicle.audi.tt");
        reg.record(b, "vehicle.toyota.prius");
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.unreleased(), vec![a, b]);

        let report = reg.destroy_all(&mut w);
        assert_eq!(report.released, 2);
        assert!(report.is_clean());
        assert_eq!(w.actor_count(), 0);
        assert!(reg.unreleased().is_empty());

        let again = reg.destroy_all(&mut w);
        assert_eq!(again.released, 0);
        assert!(again.is_clean());
    }

    #[test]
    fn destroy_failure_is_recorded_not_retried() {
        let mut w = world(1);
        let mut reg = ActorRegistry::new();
        let real = w
            .spawn("vehicle.audi.tt", Transform::at(0.0, 0.0), ActorRole::Scenario)
            .unwrap();
        let ghost = ActorId(99);
        reg.record(real, "vehicle.audi.tt");
        reg.record(ghost, "vehicle.audi.tt");

        let report = reg.destroy_all(&mut w);
        assert_eq!(report.released, 1);
        assert!(!report.is_clean());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, ghost);
        assert!(matches!(report.failures[0].1, WorldError::ActorNotFound(id) if id == ghost));

        // The failed entry is marked released all the same.
        let again = reg.destroy_all(&mut w);
        assert_eq!(again.released, 0);
        assert!(again.failures.is_empty());
    }

    #[test]
    fn blueprint_lookup() {
        let mut reg = ActorRegistry::new();
        reg.record(ActorId(3), "vehicle.tesla.model3");
        assert_eq!(reg.blueprint_of(ActorId(3)), Some("vehicle.tesla.model3"));
        assert_eq!(reg.blueprint_of(ActorId(4)), None);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

mod config {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ScenarioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_duration_ms, 50);
        assert!(config.criteria_enable);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn zero_tick_duration_is_rejected() {
        let config = ScenarioConfig {
            tick_duration_ms: 0,
            ..ScenarioConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScenarioError::Config(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = cfg_timeout(0);
        assert!(matches!(config.validate(), Err(ScenarioError::Config(_))));
        assert!(cfg_timeout(1).validate().is_ok());
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

mod build {
    use super::*;

    #[test]
    fn malformed_region_fails_before_any_spawn() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        let def = SuddenCutIn::new(CutInParams {
            trigger_region: "10,20,-5".to_string(),
            ..CutInParams::default()
        });

        let err = Scenario::build(&def, ScenarioConfig::default(), ego, &mut w).unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));
        assert_eq!(w.actor_count(), 1, "nothing may spawn before parsing");
    }

    #[test]
    fn unknown_blueprint_is_a_config_error() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        let def = SuddenCutIn::new(CutInParams {
            hazard_blueprint: "vehicle.not.in.catalog".to_string(),
            ..CutInParams::default()
        });

        let err = Scenario::build(&def, ScenarioConfig::default(), ego, &mut w).unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));
        assert_eq!(w.actor_count(), 1);
    }

    #[test]
    fn blocked_spawn_tears_down_partial_setup() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        // Sits exactly on the second background slot (18 m gaps behind
        // the ego), so the hazard and the first background car spawn
        // before setup hits it.
        let obstacle = w
            .spawn("vehicle.audi.tt", Transform::at(-36.0, 3.5), ActorRole::Scenario)
            .unwrap();

        let err = Scenario::build(
            &SuddenCutIn::default(),
            ScenarioConfig::default(),
            ego,
            &mut w,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Environment(_)));
        assert_eq!(w.actor_count(), 2, "partial setup must be released");
        assert!(w.is_alive(ego));
        assert!(w.is_alive(obstacle));
    }

    #[test]
    fn dead_ego_is_an_environment_error() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        w.destroy(ego).unwrap();

        let err = Scenario::build(
            &SuddenCutIn::default(),
            ScenarioConfig::default(),
            ego,
            &mut w,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Environment(_)));
    }

    #[test]
    fn build_spawns_the_catalog_actors() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        let mut scenario = Scenario::build(
            &SuddenCutIn::default(),
            ScenarioConfig::default(),
            ego,
            &mut w,
        )
        .unwrap();

        assert_eq!(scenario.name(), "sudden_cut_in");
        assert_eq!(scenario.ego(), ego);
        assert_eq!(scenario.owned_actors().len(), 4, "hazard plus three background cars");
        assert_eq!(w.actor_count(), 5);
        assert!(scenario.outcome().is_none());
        assert!(scenario.tree_status().is_none());

        let teardown = scenario.abort(&mut w);
        assert_eq!(teardown.released, 4);
        assert_eq!(w.actor_count(), 1);
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

mod lifecycle {
    use super::*;

    #[test]
    fn finish_without_outcome_is_an_error() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let def = StopShort { ahead_m: 30.0, trigger_m: 20.0 };
        let mut scenario = Scenario::build(&def, cfg_timeout(10), ego, &mut w).unwrap();

        assert!(scenario.tick(&mut w).unwrap().is_none());
        let err = scenario.finish(&mut w).unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));

        let teardown = scenario.abort(&mut w);
        assert_eq!(teardown.released, 1);
    }

    #[test]
    fn abort_is_idempotent_and_blocks_further_use() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let def = StopShort { ahead_m: 30.0, trigger_m: 20.0 };
        let mut scenario = Scenario::build(&def, cfg_timeout(10), ego, &mut w).unwrap();

        let first = scenario.abort(&mut w);
        assert_eq!(first.released, 1);
        assert!(first.is_clean());

        let second = scenario.abort(&mut w);
        assert_eq!(second.released, 0);

        assert!(scenario.tick(&mut w).is_err());
        assert!(scenario.finish(&mut w).is_err());
        assert!(scenario.run(&mut w, &mut NoopObserver).is_err());
    }

    #[test]
    fn decided_outcome_is_cached_without_advancing() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        // Ego never moves, so the gate never fires and the deadline wins.
        let def = StopShort { ahead_m: 30.0, trigger_m: 20.0 };
        let mut scenario = Scenario::build(&def, cfg_timeout(1), ego, &mut w).unwrap();

        let outcome = run_until_decided(&mut scenario, &mut w, 25);
        assert_eq!(outcome, ScenarioOutcome::TimedOut);
        assert_eq!(scenario.clock().current_tick, Tick(20));

        // Owned actors stay alive until finish; repeat ticks change nothing.
        assert_eq!(w.actor_count(), 2);
        assert_eq!(scenario.tick(&mut w).unwrap(), Some(ScenarioOutcome::TimedOut));
        assert_eq!(scenario.clock().current_tick, Tick(20));

        let report = scenario.finish(&mut w).unwrap();
        assert_eq!(report.outcome, ScenarioOutcome::TimedOut);
        assert_eq!(report.ticks, 20);
        assert_eq!(report.teardown.released, 1);
        assert_eq!(w.actor_count(), 1);
    }

    #[test]
    fn tree_success_completes_the_run() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let def = StopShort { ahead_m: 30.0, trigger_m: 20.0 };
        let mut scenario = Scenario::build(&def, cfg_timeout(30), ego, &mut w).unwrap();
        drive(&mut w, ego, 6.0);

        let outcome = run_until_decided(&mut scenario, &mut w, 200);
        assert_eq!(outcome, ScenarioOutcome::Completed(Status::Success));

        let report = scenario.finish(&mut w).unwrap();
        assert!(report.passed());
        assert!(report.teardown.is_clean());
        assert_eq!(w.actor_count(), 1);
    }

    #[test]
    fn run_reports_hooks_in_order() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let def = StopShort { ahead_m: 30.0, trigger_m: 20.0 };
        let mut scenario = Scenario::build(&def, cfg_timeout(30), ego, &mut w).unwrap();
        drive(&mut w, ego, 6.0);

        let mut observer = RecordingObserver::default();
        let report = scenario.run(&mut w, &mut observer).unwrap();
        assert!(report.passed());

        let events = &observer.events;
        assert_eq!(events.first().map(String::as_str), Some("start 0"));
        assert!(events.last().unwrap().starts_with("report stop_short"));
        let starts = events.iter().filter(|e| e.starts_with("start")).count();
        let ends = events.iter().filter(|e| e.starts_with("end")).count();
        assert_eq!(starts, ends);
        assert!(!events.iter().any(|e| e.starts_with("criterion")));
    }

    #[test]
    fn criterion_outranks_tree_completion_on_the_same_cycle() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let mut scenario =
            Scenario::build(&OverlapInstant, ScenarioConfig::default(), ego, &mut w).unwrap();

        let outcome = scenario.tick(&mut w).unwrap();
        assert_eq!(
            outcome,
            Some(ScenarioOutcome::CriterionFailed { name: "collision", at: Tick(0) })
        );
        // The tree finished on the same cycle and still lost.
        assert_eq!(scenario.tree_status(), Some(Status::Success));

        let report = scenario.finish(&mut w).unwrap();
        assert!(!report.passed());
        assert!(report.criteria[0].verdict.is_failed());
    }

    #[test]
    fn criteria_can_be_disabled() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let config = ScenarioConfig {
            timeout_secs: Some(8),
            criteria_enable: false,
            ..ScenarioConfig::default()
        };
        let mut scenario = Scenario::build(&LeadBrake::default(), config, ego, &mut w).unwrap();
        drive(&mut w, ego, 12.1);

        // The ego ploughs straight through the stopped lead; with the
        // monitors off the run still times out clean.
        let report = scenario.run(&mut w, &mut NoopObserver).unwrap();
        assert_eq!(report.outcome, ScenarioOutcome::TimedOut);
        assert!(report.passed());
        assert!(report.criteria.is_empty());
    }
}

// ── Cut-in scenario ───────────────────────────────────────────────────────────

mod cut_in {
    use super::*;

    #[test]
    fn times_out_clean_when_nothing_goes_wrong() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        let mut scenario =
            Scenario::build(&SuddenCutIn::default(), cfg_timeout(2), ego, &mut w).unwrap();
        drive(&mut w, ego, 10.0);

        let report = scenario.run(&mut w, &mut NoopObserver).unwrap();
        assert_eq!(report.outcome, ScenarioOutcome::TimedOut);
        assert!(report.passed());
        assert_eq!(report.ticks, 40);
        assert!((report.elapsed_secs - 2.0).abs() < 1e-9);
        assert_eq!(report.criteria.len(), 1);
        assert!(!report.criteria[0].verdict.is_failed());
        assert_eq!(report.teardown.released, 4);
        assert!(report.teardown.is_clean());
        assert_eq!(w.actor_count(), 1);
        assert!(w.is_alive(ego));
    }

    #[test]
    fn hazard_waits_then_swerves_then_gets_rear_ended() {
        let mut w = world(3);
        let ego = spawn_ego(&mut w, 0.0, 3.5);
        let mut scenario = Scenario::build(
            &SuddenCutIn::default(),
            ScenarioConfig::default(),
            ego,
            &mut w,
        )
        .unwrap();
        let hazard = scenario.owned_actors()[0];
        assert_eq!(w.transform(hazard).unwrap().position, Vec2::new(80.0, 0.0));
        drive(&mut w, ego, 10.0);

        // Parked until the ego reaches the region at x = 10.
        for _ in 0..19 {
            assert!(scenario.tick(&mut w).unwrap().is_none());
        }
        assert_eq!(w.velocity(hazard).unwrap(), Vec2::ZERO);

        // The gate fires the cycle the ego touches x = 10 and the cut-in
        // starts on that same cycle.
        assert!(scenario.tick(&mut w).unwrap().is_none());
        assert_eq!(w.velocity(hazard).unwrap(), Vec2::new(10.0, 0.0));

        // Straight run-up, diagonal crossing, snap onto the ego lane.
        let mut crossed_at = None;
        for _ in 0..200 {
            if scenario.tick(&mut w).unwrap().is_some() {
                break;
            }
            if w.transform(hazard).unwrap().position.y == 3.5 {
                crossed_at = Some(scenario.clock().current_tick);
                break;
            }
        }
        let crossed_at = crossed_at.expect("hazard never reached the ego lane");
        assert!(scenario.outcome().is_none(), "run must still be live after the swerve");
        assert!(crossed_at > Tick(60));

        // From here the hazard brakes to a stop in the ego's path and the
        // undriven ego rear-ends it.
        let outcome = run_until_decided(&mut scenario, &mut w, 1_000);
        let ScenarioOutcome::CriterionFailed { name, at } = outcome else {
            panic!("expected a collision, got {outcome:?}");
        };
        assert_eq!(name, "collision");
        assert!(at > crossed_at);
        assert_eq!(w.speed(hazard).unwrap(), 0.0, "hazard is parked when hit");

        let report = scenario.finish(&mut w).unwrap();
        assert!(!report.passed());
        let verdict = &report.criteria[0].verdict;
        assert!(verdict.is_failed());
        assert_eq!(w.actor_count(), 1);
    }

    #[test]
    fn right_lane_fallback_spawns_in_the_ego_lane() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let mut scenario = Scenario::build(
            &SuddenCutIn::default(),
            ScenarioConfig::default(),
            ego,
            &mut w,
        )
        .unwrap();

        let hazard = scenario.owned_actors()[0];
        assert_eq!(w.transform(hazard).unwrap().position.y, 0.0);
        scenario.abort(&mut w);
    }

    #[test]
    fn background_traffic_is_seeded() {
        let build = || {
            let mut w = world(3);
            let ego = spawn_ego(&mut w, 0.0, 3.5);
            let scenario = Scenario::build(
                &SuddenCutIn::default(),
                ScenarioConfig::default(),
                ego,
                &mut w,
            )
            .unwrap();
            let speeds: Vec<f32> = scenario.owned_actors()[1..]
                .iter()
                .map(|&id| w.velocity(id).unwrap().x)
                .collect();
            speeds
        };

        let first = build();
        let second = build();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second, "same seed, same traffic");
        for speed in first {
            assert!((5.0..8.0).contains(&speed));
        }
    }
}

// ── Lead-brake scenario ───────────────────────────────────────────────────────

mod lead_brake {
    use super::*;

    #[test]
    fn lead_cruises_until_the_ego_closes_in() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let mut scenario = Scenario::build(
            &LeadBrake::default(),
            ScenarioConfig::default(),
            ego,
            &mut w,
        )
        .unwrap();
        let lead = scenario.owned_actors()[0];
        assert_eq!(w.transform(lead).unwrap().position, Vec2::new(35.0, 0.0));
        assert_eq!(w.velocity(lead).unwrap(), Vec2::ZERO);
        drive(&mut w, ego, 12.1);

        // Cruise begins on the first cycle.
        assert!(scenario.tick(&mut w).unwrap().is_none());
        assert_eq!(w.velocity(lead).unwrap(), Vec2::new(8.0, 0.0));

        // The brake starts the cycle the gap first dips under 20 m.
        let mut gap_at_brake = None;
        for _ in 0..120 {
            assert!(scenario.tick(&mut w).unwrap().is_none());
            if w.speed(lead).unwrap() < 7.9 {
                gap_at_brake = Some(w.distance_between(ego, lead).unwrap());
                break;
            }
        }
        let gap = gap_at_brake.expect("lead never braked");
        assert!((19.0..20.1).contains(&gap), "brake fired at gap {gap}");

        // Full deceleration down to rest, then held there.
        for _ in 0..40 {
            if scenario.tick(&mut w).unwrap().is_some() {
                panic!("decided while the lead was still braking");
            }
            if w.speed(lead).unwrap() == 0.0 {
                break;
            }
        }
        assert_eq!(w.speed(lead).unwrap(), 0.0);
        let parked_x = w.transform(lead).unwrap().position.x;
        for _ in 0..5 {
            scenario.tick(&mut w).unwrap();
        }
        assert_eq!(w.speed(lead).unwrap(), 0.0);
        assert_eq!(w.transform(lead).unwrap().position.x, parked_x);

        // The ego never brakes, so the run ends in the rear-end collision.
        let outcome = run_until_decided(&mut scenario, &mut w, 500);
        assert!(
            matches!(outcome, ScenarioOutcome::CriterionFailed { name: "collision", .. }),
            "expected a collision, got {outcome:?}"
        );
        let report = scenario.finish(&mut w).unwrap();
        assert!(!report.passed());
    }

    #[test]
    fn trigger_distance_is_validated_before_spawning() {
        let mut w = world(1);
        let ego = spawn_ego(&mut w, 0.0, 0.0);
        let def = LeadBrake::new(LeadBrakeParams {
            trigger_distance_m: -1.0,
            ..LeadBrakeParams::default()
        });

        let err = Scenario::build(&def, ScenarioConfig::default(), ego, &mut w).unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));
        assert_eq!(w.actor_count(), 1);
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

mod reporting {
    use super::*;

    fn report_with(outcome: ScenarioOutcome) -> ScenarioReport {
        ScenarioReport {
            name: "probe".to_string(),
            outcome,
            ticks: 40,
            elapsed_secs: 2.0,
            criteria: Vec::new(),
            teardown: TeardownReport::default(),
        }
    }

    #[test]
    fn pass_fail_matrix() {
        assert!(report_with(ScenarioOutcome::Completed(Status::Success)).passed());
        assert!(!report_with(ScenarioOutcome::Completed(Status::Failure)).passed());
        assert!(report_with(ScenarioOutcome::TimedOut).passed());
        assert!(
            !report_with(ScenarioOutcome::CriterionFailed { name: "collision", at: Tick(7) })
                .passed()
        );
    }

    #[test]
    fn display_names_the_verdict() {
        let pass = report_with(ScenarioOutcome::TimedOut).to_string();
        assert!(pass.contains("probe"));
        assert!(pass.contains("timed out"));
        assert!(pass.contains("[PASS]"));

        let fail = report_with(ScenarioOutcome::CriterionFailed {
            name: "collision",
            at:   Tick(7),
        })
        .to_string();
        assert!(fail.contains("collision"));
        assert!(fail.contains("[FAIL]"));
    }
}
