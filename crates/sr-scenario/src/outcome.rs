//! Terminal run outcomes and the final report.

use std::fmt;

use sr_core::Tick;
use sr_behavior::Status;
use sr_criteria::CriterionReport;

use crate::registry::TeardownReport;

/// Why a scenario run ended.
///
/// Criterion failure and timeout are first-class outcomes, not errors:
/// structural problems (bad config, world refusals) surface as
/// [`ScenarioError`](crate::ScenarioError) instead.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioOutcome {
    /// The behavior tree reached a terminal status on its own.
    Completed(Status),

    /// A criterion latched `Failed`.  Takes precedence over tree
    /// completion when both happen in the same cycle.
    CriterionFailed { name: &'static str, at: Tick },

    /// The deadline passed with the tree still running.  The expected
    /// ending for scenarios built around an indefinite hold.
    TimedOut,
}

impl fmt::Display for ScenarioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioOutcome::Completed(s) => write!(f, "completed ({s})"),
            ScenarioOutcome::CriterionFailed { name, at } => {
                write!(f, "criterion '{name}' failed at {at}")
            }
            ScenarioOutcome::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Everything a run left behind.
#[derive(Debug)]
pub struct ScenarioReport {
    /// Scenario definition name.
    pub name: String,

    /// Why the run ended.
    pub outcome: ScenarioOutcome,

    /// Ticks executed before termination.
    pub ticks: u64,

    /// Simulated seconds covered by the run.
    pub elapsed_secs: f64,

    /// Final state of every criterion monitor.
    pub criteria: Vec<CriterionReport>,

    /// What teardown did on the final exit path.
    pub teardown: TeardownReport,
}

impl ScenarioReport {
    /// A run passes when no criterion failed and the tree did not end in
    /// `Failure`.  Timing out with clean criteria is a pass: indefinite
    /// scenarios have no other way to end well.
    pub fn passed(&self) -> bool {
        match self.outcome {
            ScenarioOutcome::Completed(status) => status != Status::Failure,
            ScenarioOutcome::CriterionFailed { .. } => false,
            ScenarioOutcome::TimedOut => true,
        }
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} after {} ticks ({:.1}s) [{}]",
            self.name,
            self.outcome,
            self.ticks,
            self.elapsed_secs,
            if self.passed() { "PASS" } else { "FAIL" },
        )
    }
}
