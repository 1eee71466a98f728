//! Mutable world access handed to the tree during a tick.

use sr_core::Tick;
use sr_world::WorldControl;

/// Everything a node may touch while being ticked.
///
/// Built fresh by the orchestrator for each cycle and threaded through the
/// tree top-down.  The world borrow is exclusive for the duration of one
/// root tick — nodes command actors through it, and nothing else observes
/// the world until the tick returns.
pub struct TickContext<'a> {
    /// Current scenario tick.
    pub tick: Tick,

    /// Simulated seconds one tick represents.  Primitives use this to turn
    /// rates into per-tick deltas.
    pub dt_secs: f32,

    /// Command access to the world backend.
    pub world: &'a mut dyn WorldControl,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, dt_secs: f32, world: &'a mut dyn WorldControl) -> Self {
        Self { tick, dt_secs, world }
    }
}
