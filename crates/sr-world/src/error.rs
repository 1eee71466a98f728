//! World-backend error types.
//!
//! Spawn failures split into two variants because the orchestrator treats
//! them differently: an unknown blueprint is a configuration mistake that
//! can never succeed, a blocked position is an environment condition that
//! might not recur.

use thiserror::Error;

use sr_core::{ActorId, Vec2};

/// Errors from queries or commands against a live world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),
}

/// Errors from actor creation.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The blueprint name is not in the backend's catalog.
    #[error("unknown blueprint `{0}`")]
    UnknownBlueprint(String),

    /// The requested position is physically occupied.
    #[error("spawn blocked at {0}")]
    Blocked(Vec2),
}

pub type WorldResult<T> = Result<T, WorldError>;
