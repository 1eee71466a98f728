//! Tick outcome shared by every behavior node.

/// Result of ticking a node.
///
/// `Success` and `Failure` are terminal: once a node reports either, the
/// tree caches the value and never ticks that node again.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    /// Still working; tick again next cycle.
    Running,
    /// Finished as intended.
    Success,
    /// Finished unsuccessfully.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }

    /// Human-readable label for logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
