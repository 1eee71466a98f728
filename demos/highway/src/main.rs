//! cutin — the sudden cut-in scenario against two different ego drivers.
//!
//! Run 1 sends a careless ego that never reacts: the hazard cuts in and
//! stops in its path, and the collision criterion fails the run.  Run 2
//! drives the same scenario tick by tick with a small reactive controller
//! standing in for the stack under test; it swerves into the free lane
//! and the run times out clean.
//!
//! `RUST_LOG=debug cargo run --bin cutin` shows the engine's own trace
//! (gate firing, criterion latch, teardown).

use std::time::Instant;

use anyhow::Result;

use sr_core::{ActorId, ActorRole, Tick, Transform, Vec2};
use sr_behavior::Status;
use sr_scenario::{catalog::SuddenCutIn, Scenario, ScenarioConfig, ScenarioObserver};
use sr_world::{ActorFactory, LaneMap, SimWorld, WorldControl, WorldView};

// ── Constants ─────────────────────────────────────────────────────────────────

const EGO_BLUEPRINT: &str = "vehicle.lincoln.mkz2017";
const TICK_SECS:      f64  = 0.05;
const EGO_LANE_Y:     f32  = 3.5;  // middle lane of the three-lane highway
const FREE_LANE_Y:    f32  = 7.0;  // evasion target
const EGO_CRUISE:     f32  = 10.0; // m/s
const EVADE_GAP_M:    f32  = 40.0; // start the lane change under this headway
const LANE_CHANGE_VY: f32  = 1.4;  // m/s lateral

// ── Progress printing ─────────────────────────────────────────────────────────

struct ProgressObserver;

impl ScenarioObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, root: Status) {
        if tick.0 % 200 == 0 {
            println!("  t={:>5.1}s  tree={root}", tick.0 as f64 * TICK_SECS);
        }
    }

    fn on_criterion_failed(&mut self, tick: Tick, name: &str) {
        println!("  t={:>5.1}s  criterion '{name}' latched", tick.0 as f64 * TICK_SECS);
    }
}

// ── World + ego setup ─────────────────────────────────────────────────────────

fn fresh_world() -> Result<(SimWorld, ActorId)> {
    let mut world = SimWorld::builder()
        .map(LaneMap::highway(3))
        .default_catalog()
        .build();
    let ego = world.spawn(EGO_BLUEPRINT, Transform::at(0.0, EGO_LANE_Y), ActorRole::Ego)?;
    Ok((world, ego))
}

/// Headway to the nearest actor ahead in the ego's lane.
fn headway(world: &SimWorld, ego: ActorId) -> Result<f32> {
    let tf = world.transform(ego)?;
    let mut nearest = f32::INFINITY;
    for other in world.actors() {
        if other == ego {
            continue;
        }
        let otf = world.transform(other)?;
        let dx = otf.position.x - tf.position.x;
        if dx > 0.0 && (otf.position.y - tf.position.y).abs() < 1.75 && dx < nearest {
            nearest = dx;
        }
    }
    Ok(nearest)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== sudden cut-in ===");
    let t0 = Instant::now();

    // 1. Careless ego: constant speed, no reaction.  run() owns the whole
    //    lifecycle; the collision criterion ends the run.
    let (mut world, ego) = fresh_world()?;
    let mut scenario = Scenario::build(
        &SuddenCutIn::default(),
        ScenarioConfig::default(),
        ego,
        &mut world,
    )?;
    world.set_velocity(ego, Vec2::new(EGO_CRUISE, 0.0))?;
    let careless = scenario.run(&mut world, &mut ProgressObserver)?;
    println!("careless ego : {careless}");
    println!();

    // 2. Reactive ego: the harness drives the ego between cycles, swerving
    //    into the free lane once the stopped hazard shows up ahead.
    let (mut world, ego) = fresh_world()?;
    let mut scenario = Scenario::build(
        &SuddenCutIn::default(),
        ScenarioConfig::default(),
        ego,
        &mut world,
    )?;
    let mut evading = false;
    let reactive = loop {
        evading = evading || headway(&world, ego)? < EVADE_GAP_M;
        let target_y = if evading { FREE_LANE_Y } else { EGO_LANE_Y };
        let tf = world.transform(ego)?;
        let vy = ((target_y - tf.position.y) / TICK_SECS as f32)
            .clamp(-LANE_CHANGE_VY, LANE_CHANGE_VY);
        world.set_velocity(ego, Vec2::new(EGO_CRUISE, vy))?;
        if scenario.tick(&mut world)?.is_some() {
            break scenario.finish(&mut world)?;
        }
    };
    println!("reactive ego : {reactive}");
    println!();
    println!("both runs simulated in {:.3} s", t0.elapsed().as_secs_f64());

    Ok(())
}
