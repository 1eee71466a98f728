//! Run-level configuration.

use sr_core::ScenarioClock;

use crate::error::{ScenarioError, ScenarioResult};

/// Knobs shared by every scenario run.
///
/// Typically deserialized from an embedding harness's config file (with the
/// `serde` feature) and passed to [`Scenario::build`](crate::Scenario::build).
/// Scenario-specific parameters live in the per-kind parameter structs
/// instead (see [`catalog`](crate::catalog)).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Simulated milliseconds per tick.  Default: 50 (20 Hz).
    pub tick_duration_ms: u32,

    /// Run deadline in simulated seconds.  `None` uses the scenario
    /// definition's own timeout.
    pub timeout_secs: Option<u32>,

    /// Evaluate criteria monitors each tick.  Disabling runs the behavior
    /// tree without pass/fail supervision.  Default: true.
    pub criteria_enable: bool,

    /// Master RNG seed.  The same seed reproduces the same run.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms: 50,
            timeout_secs:     None,
            criteria_enable:  true,
            seed:             42,
        }
    }
}

impl ScenarioConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> ScenarioResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(ScenarioError::Config("tick duration must be positive".into()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ScenarioError::Config("timeout must be positive".into()));
        }
        Ok(())
    }

    /// Construct a clock at tick 0 for this run.
    pub fn make_clock(&self) -> ScenarioClock {
        ScenarioClock::new(self.tick_duration_ms)
    }
}
