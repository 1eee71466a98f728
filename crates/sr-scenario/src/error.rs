//! Scenario-level error taxonomy.
//!
//! Two classes cover everything that can go wrong while building or
//! driving a scenario:
//!
//! - [`ScenarioError::Config`] — the scenario description itself is bad
//!   (unparseable trigger region, unknown blueprint, zero tick duration).
//!   Raised before any world mutation wherever possible.
//! - [`ScenarioError::Environment`] — the world refused an operation the
//!   scenario needs (spawn site blocked, actor vanished mid-run).  May be
//!   raised after partial setup; owned actors are torn down before it
//!   surfaces.
//!
//! A criterion latching `Failed` and the timeout elapsing are *outcomes*,
//! not errors — see [`ScenarioOutcome`](crate::ScenarioOutcome).

use thiserror::Error;

use sr_trigger::TriggerError;
use sr_world::{SpawnError, WorldError};

#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Malformed or missing scenario parameters.
    #[error("scenario configuration error: {0}")]
    Config(String),

    /// The world could not satisfy a required operation.
    #[error("scenario environment error: {0}")]
    Environment(String),
}

impl From<TriggerError> for ScenarioError {
    fn from(e: TriggerError) -> Self {
        match e {
            // A trigger that cannot query its actors is a world problem;
            // everything else is a bad trigger definition.
            TriggerError::World(w) => ScenarioError::Environment(w.to_string()),
            other => ScenarioError::Config(other.to_string()),
        }
    }
}

impl From<SpawnError> for ScenarioError {
    fn from(e: SpawnError) -> Self {
        match e {
            SpawnError::UnknownBlueprint(_) => ScenarioError::Config(e.to_string()),
            SpawnError::Blocked(_) => ScenarioError::Environment(e.to_string()),
        }
    }
}

impl From<WorldError> for ScenarioError {
    fn from(e: WorldError) -> Self {
        ScenarioError::Environment(e.to_string())
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
