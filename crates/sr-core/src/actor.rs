//! Actor role tags shared across the scenario crates.
//!
//! The role decides ownership: the ego vehicle belongs to the system under
//! test and is never destroyed by scenario teardown; every `Scenario` actor
//! is spawned, commanded, and destroyed by the engine.

/// Whether an actor is the vehicle under test or scripted scenery.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorRole {
    /// The vehicle under test.  Present before the scenario starts; not
    /// owned by the engine.
    Ego,
    /// A scripted actor spawned for this scenario and destroyed with it.
    Scenario,
}

impl ActorRole {
    #[inline]
    pub fn is_ego(self) -> bool {
        matches!(self, ActorRole::Ego)
    }

    /// Human-readable label for logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ActorRole::Ego      => "ego",
            ActorRole::Scenario => "scenario",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
