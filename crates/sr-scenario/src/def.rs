//! The `ScenarioDef` trait — how a scenario kind plugs into the engine.

use sr_core::{ActorId, ActorRole, ScenarioRng, Transform};
use sr_world::{SpawnError, Simulator};
use sr_behavior::BehaviorNode;
use sr_criteria::Criterion;

use crate::error::ScenarioResult;
use crate::registry::ActorRegistry;

/// Everything a definition may touch while setting up.
///
/// Handed to [`ScenarioDef::setup`] exactly once, before the first tick.
/// Spawning through [`spawn_owned`][Self::spawn_owned] records the actor in
/// the registry, which is what guarantees it is released on teardown even
/// when a later spawn fails.
pub struct SetupContext<'a> {
    /// The borrowed ego actor.  Never destroyed by the engine.
    pub ego: ActorId,

    /// World access for spawning and initial actor placement.
    pub world: &'a mut dyn Simulator,

    /// Ownership ledger for everything the definition spawns.
    pub registry: &'a mut ActorRegistry,

    /// Seeded run RNG for reproducible randomness.
    pub rng: &'a mut ScenarioRng,
}

impl SetupContext<'_> {
    /// Spawn a scenario-owned actor and record it for teardown.
    pub fn spawn_owned(
        &mut self,
        blueprint: &str,
        at:        Transform,
    ) -> Result<ActorId, SpawnError> {
        let id = self.world.spawn(blueprint, at, ActorRole::Scenario)?;
        self.registry.record(id, blueprint);
        Ok(id)
    }
}

/// One scenario kind: its actors, behavior tree, criteria, and deadline.
///
/// Implementations are parameter bags (see [`catalog`](crate::catalog));
/// all validation they can do without the world happens in `setup` before
/// the first spawn, so malformed parameters fail before any world
/// mutation.
pub trait ScenarioDef {
    /// Name used in logs and the final report.
    fn name(&self) -> &str;

    /// Deadline in simulated seconds, used when
    /// [`ScenarioConfig::timeout_secs`](crate::ScenarioConfig) is `None`.
    fn timeout_secs(&self) -> u32 {
        60
    }

    /// Spawn scenario actors and assemble the behavior tree.
    ///
    /// On error the orchestrator destroys everything recorded in the
    /// registry so far, then surfaces the error.
    fn setup(&self, ctx: &mut SetupContext<'_>) -> ScenarioResult<BehaviorNode>;

    /// Criteria monitors for this run.  The default is the collision check
    /// every scenario in the catalog uses.
    fn criteria(&self, ego: ActorId) -> Vec<Criterion> {
        vec![Criterion::collision(ego)]
    }
}
