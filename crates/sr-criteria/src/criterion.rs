//! Latching pass/fail monitors.
//!
//! A criterion watches one actor for the whole scenario, independent of
//! behavior-tree progress.  It has no `Running` lifecycle: every check
//! either keeps the verdict at `Passing` or latches it to `Failed`
//! permanently.  A scenario cannot un-fail.
//!
//! Like the trigger conditions, the kind set is a closed enum so that
//! evaluation sites match exhaustively.

use sr_core::{ActorId, Tick};
use sr_world::{WorldError, WorldView};

// ── Verdict ───────────────────────────────────────────────────────────────────

/// The latched state of one criterion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Passing,
    /// Latched on the first violating tick; never cleared.
    Failed {
        at:     Tick,
        detail: String,
    },
}

impl Verdict {
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Verdict::Failed { .. })
    }
}

/// Snapshot of one criterion for the final scenario report.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionReport {
    pub name:    &'static str,
    pub actor:   ActorId,
    pub verdict: Verdict,
}

// ── Criterion ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Kind {
    /// Bounding-box contact between the bound actor and any other live actor.
    Collision,
    /// Bound actor's speed exceeding `limit_mps`.
    SpeedLimit { limit_mps: f32 },
}

/// A monitor bound to one actor, checked once per tick by the orchestrator.
#[derive(Clone, Debug)]
pub struct Criterion {
    actor:   ActorId,
    kind:    Kind,
    verdict: Verdict,
}

impl Criterion {
    /// Fail when `actor`'s collision box overlaps any other live actor's.
    /// Touching boxes count as contact.
    pub fn collision(actor: ActorId) -> Criterion {
        Criterion {
            actor,
            kind: Kind::Collision,
            verdict: Verdict::Passing,
        }
    }

    /// Fail when `actor` moves faster than `limit_mps`.
    ///
    /// # Panics
    /// Panics in debug mode on a non-positive or non-finite limit.
    pub fn speed_limit(actor: ActorId, limit_mps: f32) -> Criterion {
        debug_assert!(
            limit_mps.is_finite() && limit_mps > 0.0,
            "speed limit must be positive and finite"
        );
        Criterion {
            actor,
            kind: Kind::SpeedLimit { limit_mps },
            verdict: Verdict::Passing,
        }
    }

    /// Short kind name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self.kind {
            Kind::Collision => "collision",
            Kind::SpeedLimit { .. } => "speed_limit",
        }
    }

    /// The watched actor.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Current verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    #[inline]
    pub fn failed(&self) -> bool {
        self.verdict.is_failed()
    }

    /// Snapshot for the scenario report.
    pub fn report(&self) -> CriterionReport {
        CriterionReport {
            name:    self.name(),
            actor:   self.actor,
            verdict: self.verdict.clone(),
        }
    }

    /// Evaluate against the current world state, latching on a violation.
    ///
    /// Already-failed criteria are left untouched.  Errs when the watched
    /// actor (or, for collision, a contact candidate) cannot be queried;
    /// the caller decides whether that ends the scenario.
    pub fn check<W: WorldView + ?Sized>(
        &mut self,
        tick:  Tick,
        world: &W,
    ) -> Result<(), WorldError> {
        if self.verdict.is_failed() {
            return Ok(());
        }
        match self.kind {
            Kind::Collision => {
                let own = world.bounding_box(self.actor)?;
                for other in world.actors() {
                    if other == self.actor {
                        continue;
                    }
                    if own.intersects(world.bounding_box(other)?) {
                        self.verdict = Verdict::Failed {
                            at:     tick,
                            detail: format!("contact with {other}"),
                        };
                        break;
                    }
                }
            }
            Kind::SpeedLimit { limit_mps } => {
                let speed = world.speed(self.actor)?;
                if speed > limit_mps {
                    self.verdict = Verdict::Failed {
                        at:     tick,
                        detail: format!("{speed:.2} m/s over the {limit_mps:.2} m/s limit"),
                    };
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Kind::Collision => write!(f, "collision({})", self.actor),
            Kind::SpeedLimit { limit_mps } => {
                write!(f, "speed_limit({}, {limit_mps}m/s)", self.actor)
            }
        }
    }
}
