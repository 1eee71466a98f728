//! Trigger conditions: spatial predicates that gate scripted maneuvers.
//!
//! A condition is a pure predicate over the current world state — no memory,
//! no latching.  The behavior tree's gate node owns the latch; a condition
//! answers only "does this hold right now?".  The variant set is closed:
//! evaluation sites match exhaustively, and adding a condition kind is a
//! deliberate API change.

use sr_core::ActorId;
use sr_world::WorldView;

use crate::error::{TriggerError, TriggerResult};
use crate::region::Region;

/// A spatial predicate evaluated against a [`WorldView`] each tick.
#[derive(Clone, Debug)]
pub enum TriggerCondition {
    /// Holds while `actor`'s reference point is inside `region` (all edges
    /// inclusive).
    InRegion { actor: ActorId, region: Region },

    /// Holds while the gap between `actor` and `reference` is at or below
    /// `threshold_m`.  A gap exactly equal to the threshold fires; one
    /// metre beyond does not.
    WithinDistance {
        actor:       ActorId,
        reference:   ActorId,
        threshold_m: f32,
    },
}

impl TriggerCondition {
    /// Region trigger watching `actor`.
    pub fn in_region(actor: ActorId, region: Region) -> TriggerCondition {
        TriggerCondition::InRegion { actor, region }
    }

    /// Proximity trigger between two actors.
    ///
    /// `threshold_m` must be positive and finite.
    pub fn within_distance(
        actor:       ActorId,
        reference:   ActorId,
        threshold_m: f32,
    ) -> TriggerResult<TriggerCondition> {
        if !(threshold_m.is_finite() && threshold_m > 0.0) {
            return Err(TriggerError::BadThreshold(threshold_m));
        }
        Ok(TriggerCondition::WithinDistance { actor, reference, threshold_m })
    }

    /// Evaluate against the current world state.
    ///
    /// Errs only when a watched actor cannot be queried (destroyed or never
    /// spawned); the predicate itself cannot fail.
    pub fn evaluate<W: WorldView + ?Sized>(&self, world: &W) -> TriggerResult<bool> {
        match *self {
            TriggerCondition::InRegion { actor, region } => {
                let pos = world.transform(actor)?.position;
                Ok(region.contains(pos))
            }
            TriggerCondition::WithinDistance { actor, reference, threshold_m } => {
                let gap = world.distance_between(actor, reference)?;
                Ok(gap <= threshold_m)
            }
        }
    }
}

impl std::fmt::Display for TriggerCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerCondition::InRegion { actor, region } => {
                write!(f, "{actor} in {region}")
            }
            TriggerCondition::WithinDistance { actor, reference, threshold_m } => {
                write!(f, "{actor} within {threshold_m}m of {reference}")
            }
        }
    }
}
