//! Ownership ledger for scenario-spawned actors.

use sr_core::ActorId;
use sr_world::{ActorFactory, WorldError};

/// One scenario-owned actor and how it was created.
#[derive(Debug)]
struct OwnedActor {
    id:        ActorId,
    blueprint: String,
    released:  bool,
}

/// What a teardown pass actually did.
///
/// Destroy failures are recorded here rather than propagated: teardown
/// continues through the remaining actors, and the primary scenario outcome
/// is never displaced by a cleanup problem.
#[derive(Debug, Default)]
pub struct TeardownReport {
    /// Actors whose destroy call succeeded this pass.
    pub released: usize,
    /// Actors whose destroy call failed this pass.  They are still marked
    /// released and are not retried.
    pub failures: Vec<(ActorId, WorldError)>,
}

impl TeardownReport {
    /// `true` when every destroy this pass succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Records every actor the scenario spawned so teardown can release them
/// all, exactly once, on whichever path the run ends.
///
/// Ego actors are borrowed, never recorded here, and never destroyed.
#[derive(Debug, Default)]
pub struct ActorRegistry {
    owned: Vec<OwnedActor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly spawned scenario-owned actor.
    pub fn record(&mut self, id: ActorId, blueprint: &str) {
        self.owned.push(OwnedActor {
            id,
            blueprint: blueprint.to_string(),
            released: false,
        });
    }

    /// Total actors ever recorded.
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// IDs recorded and not yet released, in spawn order.
    pub fn unreleased(&self) -> Vec<ActorId> {
        self.owned
            .iter()
            .filter(|o| !o.released)
            .map(|o| o.id)
            .collect()
    }

    /// Blueprint the given owned actor was spawned from, if recorded.
    pub fn blueprint_of(&self, id: ActorId) -> Option<&str> {
        self.owned
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.blueprint.as_str())
    }

    /// Destroy every not-yet-released actor, in spawn order.
    ///
    /// Each entry is marked released exactly once — a failed destroy is
    /// recorded in the report, not retried — so calling this again performs
    /// zero destroy calls and reports a clean, empty pass.
    pub fn destroy_all<F: ActorFactory + ?Sized>(&mut self, factory: &mut F) -> TeardownReport {
        let mut report = TeardownReport::default();
        for owned in self.owned.iter_mut().filter(|o| !o.released) {
            owned.released = true;
            match factory.destroy(owned.id) {
                Ok(()) => report.released += 1,
                Err(e) => report.failures.push((owned.id, e)),
            }
        }
        report
    }
}
