//! The `Scenario` aggregate and its tick loop.
//!
//! # Lifecycle
//!
//! ```text
//! build    — validate config, verify the ego, run ScenarioDef::setup
//!            (spawn failures destroy everything spawned so far), and
//!            assemble criteria.
//! tick     — one cycle:
//!              ① deadline check (before any work)
//!              ② world.step(dt)          — physics advances
//!              ③ root.tick(ctx)          — tree advances, triggers and
//!                                          maneuvers included
//!              ④ criteria sweep          — monitors observe the fresh state
//!              ⑤ resolve                 — criterion failure beats tree
//!                                          completion in the same cycle
//! run      — tick until decided, then conclude.  Teardown runs on the
//!            outcome path *and* the error path.
//! finish   — conclude a tick-driven run once it is decided.
//! abort    — cancel and tear down a run that will not continue.
//! ```
//!
//! Every exit path funnels through one cancel-and-teardown helper, so
//! scenario-owned actors are released exactly once no matter how the run
//! ends.  Dropping a `Scenario` without tearing it down only logs: the
//! destructor has no world handle, so cleanup cannot happen there.

use tracing::{debug, warn};

use sr_core::{ActorId, ScenarioClock, ScenarioRng, Tick};
use sr_world::Simulator;
use sr_behavior::{BehaviorNode, Status, TickContext};
use sr_criteria::Criterion;

use crate::config::ScenarioConfig;
use crate::def::{ScenarioDef, SetupContext};
use crate::error::{ScenarioError, ScenarioResult};
use crate::observer::ScenarioObserver;
use crate::outcome::{ScenarioOutcome, ScenarioReport};
use crate::registry::{ActorRegistry, TeardownReport};

/// One runnable scenario: the tree, the monitors, the owned actors, and
/// the clock, bound to a borrowed ego actor.
///
/// The world is not stored; every call that needs it takes the simulator
/// the scenario was built against.  Passing a different world between
/// calls is a caller bug the engine cannot detect.
pub struct Scenario {
    name:          String,
    ego:           ActorId,
    config:        ScenarioConfig,
    clock:         ScenarioClock,
    timeout_ticks: u64,
    root:          BehaviorNode,
    criteria:      Vec<Criterion>,
    registry:      ActorRegistry,
    outcome:       Option<ScenarioOutcome>,
    torn_down:     bool,
}

impl std::fmt::Debug for Scenario {
    /// Manual impl: `root` holds `Box<dyn MotionPrimitive>` leaves, which
    /// are not `Debug`, so the tree is elided.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("ego", &self.ego)
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("timeout_ticks", &self.timeout_ticks)
            .field("criteria", &self.criteria)
            .field("registry", &self.registry)
            .field("outcome", &self.outcome)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl Scenario {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate, spawn, and assemble a runnable scenario.
    ///
    /// Parameter problems fail before any world mutation.  Spawn failures
    /// are fatal; actors spawned before the failure are destroyed before
    /// the error is returned.
    pub fn build<D, W>(
        def:    &D,
        config: ScenarioConfig,
        ego:    ActorId,
        world:  &mut W,
    ) -> ScenarioResult<Scenario>
    where
        D: ScenarioDef + ?Sized,
        W: Simulator,
    {
        config.validate()?;
        let clock = config.make_clock();
        let timeout_secs = config.timeout_secs.unwrap_or_else(|| def.timeout_secs());
        let timeout_ticks = clock.ticks_for_secs(timeout_secs as u64);

        if !world.is_alive(ego) {
            return Err(ScenarioError::Environment(format!(
                "ego {ego} is not in the world"
            )));
        }

        let mut registry = ActorRegistry::new();
        let mut rng = ScenarioRng::new(config.seed);
        let setup = {
            let mut ctx = SetupContext {
                ego,
                world: &mut *world,
                registry: &mut registry,
                rng: &mut rng,
            };
            def.setup(&mut ctx)
        };
        let root = match setup {
            Ok(root) => root,
            Err(e) => {
                // Partial setup may already own actors; release them
                // before the error surfaces.
                let report = registry.destroy_all(world);
                warn!(
                    scenario = def.name(),
                    error = %e,
                    released = report.released,
                    "setup failed; spawned actors destroyed"
                );
                for (id, destroy_err) in &report.failures {
                    warn!(actor = %id, error = %destroy_err, "teardown destroy failed");
                }
                return Err(e);
            }
        };

        let criteria = if config.criteria_enable {
            def.criteria(ego)
        } else {
            Vec::new()
        };

        debug!(
            scenario = def.name(),
            owned = registry.len(),
            criteria = criteria.len(),
            timeout_ticks,
            "scenario built"
        );

        Ok(Scenario {
            name: def.name().to_string(),
            ego,
            config,
            clock,
            timeout_ticks,
            root,
            criteria,
            registry,
            outcome: None,
            torn_down: false,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The borrowed ego actor.
    pub fn ego(&self) -> ActorId {
        self.ego
    }

    /// Scenario-owned actors not yet released.
    pub fn owned_actors(&self) -> Vec<ActorId> {
        self.registry.unreleased()
    }

    /// The decided outcome, once a cycle has produced one.
    pub fn outcome(&self) -> Option<&ScenarioOutcome> {
        self.outcome.as_ref()
    }

    /// The root node's cached terminal status, if any.
    pub fn tree_status(&self) -> Option<Status> {
        self.root.result()
    }

    /// Current clock position.
    pub fn clock(&self) -> &ScenarioClock {
        &self.clock
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Advance one cycle.
    ///
    /// Returns the decided outcome once one exists; later calls return it
    /// again without advancing anything.  Use this instead of [`run`]
    /// when an external harness needs to drive the ego actor between
    /// cycles, then call [`finish`] to tear down.
    ///
    /// [`run`]: Self::run
    /// [`finish`]: Self::finish
    pub fn tick<W: Simulator>(
        &mut self,
        world: &mut W,
    ) -> ScenarioResult<Option<ScenarioOutcome>> {
        if self.torn_down {
            return Err(ScenarioError::Config("scenario already torn down".into()));
        }
        if self.outcome.is_some() {
            return Ok(self.outcome.clone());
        }

        let now = self.clock.current_tick;
        if now.0 >= self.timeout_ticks {
            debug!(scenario = %self.name, tick = %now, "deadline reached");
            self.outcome = Some(ScenarioOutcome::TimedOut);
            return Ok(self.outcome.clone());
        }

        world.step(self.config.tick_duration_ms)?;

        let status = {
            let mut ctx = TickContext::new(now, self.clock.dt_secs(), &mut *world);
            self.root.tick(&mut ctx)
        };

        // Monitors observe the post-step, post-tree state of this cycle.
        let mut first_failure: Option<(&'static str, Tick)> = None;
        for criterion in &mut self.criteria {
            let already = criterion.failed();
            criterion.check(now, &*world)?;
            if !already && criterion.failed() {
                warn!(criterion = criterion.name(), tick = %now, "criterion failed");
                if first_failure.is_none() {
                    first_failure = Some((criterion.name(), now));
                }
            }
        }

        self.clock.advance();

        self.outcome = if let Some((name, at)) = first_failure {
            Some(ScenarioOutcome::CriterionFailed { name, at })
        } else if status.is_terminal() {
            debug!(scenario = %self.name, tick = %now, status = %status, "tree finished");
            Some(ScenarioOutcome::Completed(status))
        } else {
            None
        };
        Ok(self.outcome.clone())
    }

    /// Drive the scenario to termination, then tear down and report.
    ///
    /// Teardown is reached on every path: a decided outcome concludes
    /// normally, and an engine error still releases every owned actor
    /// before propagating.
    pub fn run<W, O>(
        &mut self,
        world:    &mut W,
        observer: &mut O,
    ) -> ScenarioResult<ScenarioReport>
    where
        W: Simulator,
        O: ScenarioObserver,
    {
        if self.torn_down {
            return Err(ScenarioError::Config("scenario already torn down".into()));
        }
        let outcome = loop {
            if let Some(decided) = self.outcome.clone() {
                break decided;
            }
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let decided = match self.tick(world) {
                Ok(d) => d,
                Err(e) => {
                    warn!(scenario = %self.name, error = %e, "run aborted by error");
                    self.cancel_and_teardown(world);
                    return Err(e);
                }
            };
            observer.on_tick_end(now, self.root.result().unwrap_or(Status::Running));
            if let Some(ScenarioOutcome::CriterionFailed { name, at }) = &decided {
                observer.on_criterion_failed(*at, name);
            }
        };

        let report = self.conclude(world, outcome);
        observer.on_scenario_end(&report);
        Ok(report)
    }

    /// Tear down a tick-driven run once [`tick`][Self::tick] has decided
    /// it, and produce the report.
    pub fn finish<W: Simulator>(&mut self, world: &mut W) -> ScenarioResult<ScenarioReport> {
        if self.torn_down {
            return Err(ScenarioError::Config("scenario already torn down".into()));
        }
        let Some(outcome) = self.outcome.clone() else {
            return Err(ScenarioError::Config(
                "run not decided yet; keep ticking or abort".into(),
            ));
        };
        Ok(self.conclude(world, outcome))
    }

    /// Cancel the tree and release every owned actor without producing a
    /// report.  For scenarios that were built but will not (or cannot)
    /// continue.  Safe to call more than once.
    pub fn abort<W: Simulator>(&mut self, world: &mut W) -> TeardownReport {
        debug!(scenario = %self.name, "scenario aborted");
        self.cancel_and_teardown(world)
    }

    // ── Exit path ─────────────────────────────────────────────────────────

    fn conclude<W: Simulator>(
        &mut self,
        world:   &mut W,
        outcome: ScenarioOutcome,
    ) -> ScenarioReport {
        let teardown = self.cancel_and_teardown(world);
        debug!(
            scenario = %self.name,
            outcome = %outcome,
            released = teardown.released,
            "scenario ended"
        );
        ScenarioReport {
            name:         self.name.clone(),
            outcome,
            ticks:        self.clock.current_tick.0,
            elapsed_secs: self.clock.elapsed_secs(),
            criteria:     self.criteria.iter().map(Criterion::report).collect(),
            teardown,
        }
    }

    /// The single teardown funnel: cancel whatever still runs, then
    /// release owned actors.  Both halves are idempotent.
    fn cancel_and_teardown<W: Simulator>(&mut self, world: &mut W) -> TeardownReport {
        let mut ctx = TickContext::new(self.clock.current_tick, self.clock.dt_secs(), &mut *world);
        self.root.cancel(&mut ctx);

        let report = self.registry.destroy_all(world);
        for (id, err) in &report.failures {
            warn!(actor = %id, error = %err, "teardown destroy failed");
        }
        self.torn_down = true;
        report
    }
}

impl Drop for Scenario {
    fn drop(&mut self) {
        let leaked = self.registry.unreleased();
        if !leaked.is_empty() {
            warn!(
                scenario = %self.name,
                ?leaked,
                "dropped while still owning actors; call run, finish, or abort"
            );
        }
    }
}
