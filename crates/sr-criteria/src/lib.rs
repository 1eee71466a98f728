//! `sr-criteria` — latching pass/fail monitors for scenario runs.
//!
//! # Crate layout
//!
//! | Module        | Contents                                     |
//! |---------------|----------------------------------------------|
//! | [`criterion`] | `Criterion`, `Verdict`, `CriterionReport`    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on verdict/report.    |

pub mod criterion;

#[cfg(test)]
mod tests;

pub use criterion::{Criterion, CriterionReport, Verdict};
