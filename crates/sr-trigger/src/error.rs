//! Trigger-subsystem error type.
//!
//! All malformation variants are raised at construction time, never during
//! evaluation — a condition that constructs successfully can only fail on a
//! world query.

use thiserror::Error;

use sr_world::WorldError;

/// Errors produced by `sr-trigger`.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// Region string did not have exactly four comma-separated fields.
    #[error("region `{input}`: expected 4 comma-separated numbers, got {got} fields")]
    RegionArity { input: String, got: usize },

    /// A region field failed to parse as a finite number.  `field` is
    /// 1-based.
    #[error("region `{input}`: field {field} ({value:?}) is not a finite number")]
    RegionNumber {
        input: String,
        field: usize,
        value: String,
    },

    /// Region bounds do not describe a rectangle.
    #[error(
        "region bounds [{x_min}, {x_max}] x [{y_min}, {y_max}] are invalid: {reason}"
    )]
    RegionInvalid {
        x_min:  f32,
        x_max:  f32,
        y_min:  f32,
        y_max:  f32,
        reason: &'static str,
    },

    /// Distance threshold was zero, negative, or non-finite.
    #[error("distance threshold {0} is not positive and finite")]
    BadThreshold(f32),

    /// Underlying world query failed (actor destroyed mid-run, usually).
    #[error(transparent)]
    World(#[from] WorldError),
}

pub type TriggerResult<T> = Result<T, TriggerError>;
