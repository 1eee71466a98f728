//! leadbrake — the lead-brake scenario on a single-lane road.
//!
//! With one lane there is nowhere to swerve, so the ego under test has to
//! brake.  Run 1 sends a careless ego into the back of the braking lead;
//! run 2 drives tick by tick with a headway-keeping controller and prints
//! the gap closing as the lead slams its brakes.

use anyhow::Result;

use sr_core::{ActorId, ActorRole, Transform, Vec2};
use sr_scenario::{catalog::LeadBrake, NoopObserver, Scenario, ScenarioConfig};
use sr_world::{ActorFactory, LaneMap, SimWorld, WorldControl, WorldView};

// ── Constants ─────────────────────────────────────────────────────────────────

const EGO_BLUEPRINT: &str = "vehicle.lincoln.mkz2017";
const TICK_SECS:     f64  = 0.05;
const EGO_CRUISE:    f32  = 12.5; // m/s, faster than the lead's 8
const CRAWL:         f32  = 4.0;
const SLOW_GAP_M:    f32  = 18.0; // crawl under this headway
const BRAKE_GAP_M:   f32  = 10.0; // full stop under this headway
const TABLE_TICKS:   u64  = 240;  // print the first 12 s of run 2

fn fresh_world() -> Result<(SimWorld, ActorId)> {
    let mut world = SimWorld::builder()
        .map(LaneMap::highway(1))
        .default_catalog()
        .build();
    let ego = world.spawn(EGO_BLUEPRINT, Transform::at(0.0, 0.0), ActorRole::Ego)?;
    Ok((world, ego))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== lead brake ===");

    // 1. Careless ego: never lifts, rear-ends the stopped lead.
    let (mut world, ego) = fresh_world()?;
    let mut scenario = Scenario::build(
        &LeadBrake::default(),
        ScenarioConfig::default(),
        ego,
        &mut world,
    )?;
    world.set_velocity(ego, Vec2::new(EGO_CRUISE, 0.0))?;
    let careless = scenario.run(&mut world, &mut NoopObserver)?;
    println!("careless ego : {careless}");
    println!();

    // 2. Reactive ego: crawl, then stop, as the headway shrinks.
    let (mut world, ego) = fresh_world()?;
    let mut scenario = Scenario::build(
        &LeadBrake::default(),
        ScenarioConfig::default(),
        ego,
        &mut world,
    )?;
    let lead = scenario.owned_actors()[0];

    println!("{:<8} {:>9} {:>9} {:>8}", "time", "ego m/s", "lead m/s", "gap m");
    let reactive = loop {
        let gap = world.distance_between(ego, lead)?;
        let speed = if gap < BRAKE_GAP_M {
            0.0
        } else if gap < SLOW_GAP_M {
            CRAWL
        } else {
            EGO_CRUISE
        };
        world.set_velocity(ego, Vec2::new(speed, 0.0))?;

        let tick = scenario.clock().current_tick;
        if tick.0 % 40 == 0 && tick.0 <= TABLE_TICKS {
            println!(
                "{:<8.1} {:>9.1} {:>9.1} {:>8.1}",
                tick.0 as f64 * TICK_SECS,
                world.speed(ego)?,
                world.speed(lead)?,
                gap,
            );
        }
        if scenario.tick(&mut world)?.is_some() {
            break scenario.finish(&mut world)?;
        }
    };
    println!("reactive ego : {reactive}");

    Ok(())
}
