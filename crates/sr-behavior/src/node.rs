//! Behavior-tree nodes and tick semantics.
//!
//! # Model
//!
//! A tree is built from a closed set of node kinds:
//!
//! | Node       | Semantics                                                     |
//! |------------|---------------------------------------------------------------|
//! | `Action`   | Drives one [`MotionPrimitive`] to completion.                 |
//! | `Sequence` | Children in order; advances on success, fails on failure.     |
//! | `Parallel` | Ticks all children each cycle; a policy resolves the result.  |
//! | `Gate`     | `Running` until its [`TriggerCondition`] first holds, then    |
//! |            | `Success`, permanently.                                       |
//!
//! # Tick rules
//!
//! - The orchestrator ticks the root once per cycle; composites propagate
//!   the tick downward.  No node is ticked more than once per cycle.
//! - `Success`/`Failure` are cached: a terminal node is never ticked again,
//!   and composites consult the cache instead.
//! - A sequence whose child succeeds moves on and ticks the next child in
//!   the *same* cycle, so a gate firing and the triggered maneuver starting
//!   happen together.
//! - Cancellation propagates top-down and skips nodes that already hold a
//!   terminal result.  A cancelled node reads as `Failure` afterwards.

use tracing::{debug, warn};

use sr_trigger::TriggerCondition;

use crate::context::TickContext;
use crate::primitive::{MotionPrimitive, Progress};
use crate::status::Status;

// ── BehaviorNode ──────────────────────────────────────────────────────────────

/// One node of a behavior tree.
///
/// The variant set is closed: tick and cancel match exhaustively, and
/// adding a node kind is a deliberate engine change, not a user extension
/// point.  User extension happens underneath, via [`MotionPrimitive`].
pub enum BehaviorNode {
    Action(ActionNode),
    Sequence(SequenceNode),
    Parallel(ParallelNode),
    Gate(GateNode),
}

impl BehaviorNode {
    /// Leaf driving `primitive`.
    pub fn action(name: impl Into<String>, primitive: Box<dyn MotionPrimitive>) -> BehaviorNode {
        BehaviorNode::Action(ActionNode {
            name: name.into(),
            primitive,
            state: ActionState::Pending,
        })
    }

    /// Ordered composite.
    pub fn sequence(name: impl Into<String>, children: Vec<BehaviorNode>) -> BehaviorNode {
        BehaviorNode::Sequence(SequenceNode {
            name: name.into(),
            children,
            cursor: 0,
            done: None,
        })
    }

    /// Concurrent composite resolved by `policy`.
    pub fn parallel(
        name:     impl Into<String>,
        policy:   ParallelPolicy,
        children: Vec<BehaviorNode>,
    ) -> BehaviorNode {
        BehaviorNode::Parallel(ParallelNode {
            name: name.into(),
            policy,
            children,
            done: None,
        })
    }

    /// Trigger leaf: `Running` until `condition` first holds, `Success`
    /// from that cycle on.  Inside a sequence the following child starts
    /// the same cycle the gate fires.
    pub fn gate(name: impl Into<String>, condition: TriggerCondition) -> BehaviorNode {
        BehaviorNode::Gate(GateNode {
            name: name.into(),
            condition,
            done: None,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            BehaviorNode::Action(n)   => &n.name,
            BehaviorNode::Sequence(n) => &n.name,
            BehaviorNode::Parallel(n) => &n.name,
            BehaviorNode::Gate(n)     => &n.name,
        }
    }

    /// Advance the node by one cycle.
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> Status {
        match self {
            BehaviorNode::Action(n)   => n.tick(ctx),
            BehaviorNode::Sequence(n) => n.tick(ctx),
            BehaviorNode::Parallel(n) => n.tick(ctx),
            BehaviorNode::Gate(n)     => n.tick(ctx),
        }
    }

    /// Cancel the node and every non-terminal descendant.  Idempotent.
    pub fn cancel(&mut self, ctx: &mut TickContext<'_>) {
        match self {
            BehaviorNode::Action(n)   => n.cancel(ctx),
            BehaviorNode::Sequence(n) => n.cancel(ctx),
            BehaviorNode::Parallel(n) => n.cancel(ctx),
            BehaviorNode::Gate(n)     => n.cancel(ctx),
        }
    }

    /// Cached terminal result, or `None` while the node can still run.
    pub fn result(&self) -> Option<Status> {
        match self {
            BehaviorNode::Action(n)   => n.result(),
            BehaviorNode::Sequence(n) => n.done,
            BehaviorNode::Parallel(n) => n.done,
            BehaviorNode::Gate(n)     => n.done,
        }
    }
}

// ── ActionNode ────────────────────────────────────────────────────────────────

/// Where an action is in its primitive's lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ActionState {
    /// Not yet ticked; `start` has not run.
    Pending,
    /// `start` succeeded; primitive is being ticked.
    Running,
    /// Primitive reported `Complete`.
    Success,
    /// `start` or `tick` returned an error.
    Failure,
    /// Cancelled before reaching a terminal state.
    Cancelled,
}

/// Leaf node driving one motion primitive.
pub struct ActionNode {
    name:      String,
    primitive: Box<dyn MotionPrimitive>,
    state:     ActionState,
}

impl ActionNode {
    pub fn state(&self) -> ActionState {
        self.state
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Status {
        match self.state {
            ActionState::Pending => {
                if let Err(e) = self.primitive.start(ctx) {
                    warn!(action = %self.name, error = %e, "action failed to start");
                    self.state = ActionState::Failure;
                    return Status::Failure;
                }
                self.state = ActionState::Running;
                // First primitive tick runs in the same cycle as start.
                self.tick_primitive(ctx)
            }
            ActionState::Running => self.tick_primitive(ctx),
            ActionState::Success => Status::Success,
            ActionState::Failure | ActionState::Cancelled => Status::Failure,
        }
    }

    fn tick_primitive(&mut self, ctx: &mut TickContext<'_>) -> Status {
        match self.primitive.tick(ctx) {
            Ok(Progress::Working) => Status::Running,
            Ok(Progress::Complete) => {
                self.state = ActionState::Success;
                Status::Success
            }
            Err(e) => {
                warn!(action = %self.name, error = %e, "action failed");
                self.state = ActionState::Failure;
                Status::Failure
            }
        }
    }

    fn cancel(&mut self, ctx: &mut TickContext<'_>) {
        match self.state {
            ActionState::Running => {
                self.primitive.cancel(ctx);
                self.state = ActionState::Cancelled;
            }
            // Never started: nothing to undo.
            ActionState::Pending => self.state = ActionState::Cancelled,
            _ => {}
        }
    }

    fn result(&self) -> Option<Status> {
        match self.state {
            ActionState::Pending | ActionState::Running => None,
            ActionState::Success => Some(Status::Success),
            ActionState::Failure | ActionState::Cancelled => Some(Status::Failure),
        }
    }
}

// ── SequenceNode ──────────────────────────────────────────────────────────────

/// Ordered composite.  No backtracking: a completed child is never
/// revisited, even if the condition that let it succeed stops holding.
pub struct SequenceNode {
    name:     String,
    children: Vec<BehaviorNode>,
    cursor:   usize,
    done:     Option<Status>,
}

impl SequenceNode {
    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Status {
        if let Some(s) = self.done {
            return s;
        }
        // Advance through children until one runs, one fails, or none are
        // left.  Each iteration ticks a *different* child, so the
        // once-per-cycle rule holds.
        loop {
            let Some(child) = self.children.get_mut(self.cursor) else {
                self.done = Some(Status::Success);
                return Status::Success;
            };
            match child.tick(ctx) {
                Status::Running => return Status::Running,
                Status::Success => self.cursor += 1,
                Status::Failure => {
                    self.done = Some(Status::Failure);
                    return Status::Failure;
                }
            }
        }
    }

    fn cancel(&mut self, ctx: &mut TickContext<'_>) {
        if self.done.is_some() {
            return;
        }
        for child in &mut self.children {
            child.cancel(ctx);
        }
        self.done = Some(Status::Failure);
    }
}

// ── ParallelNode ──────────────────────────────────────────────────────────────

/// How a parallel composite resolves its children's results.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParallelPolicy {
    /// `Success` as soon as any child succeeds; `Failure` only when every
    /// child has failed.
    SucceedOnAny,
    /// `Success` when every child has succeeded; `Failure` as soon as any
    /// child fails.
    SucceedOnAll,
}

/// Concurrent composite.  Every non-terminal child is ticked each cycle in
/// registration order, then the policy is consulted; on resolution the
/// still-running children are cancelled.
pub struct ParallelNode {
    name:     String,
    policy:   ParallelPolicy,
    children: Vec<BehaviorNode>,
    done:     Option<Status>,
}

impl ParallelNode {
    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Status {
        if let Some(s) = self.done {
            return s;
        }
        if self.children.is_empty() {
            self.done = Some(Status::Success);
            return Status::Success;
        }

        // Phase 1: tick all non-terminal children in registration order.
        for child in &mut self.children {
            if child.result().is_none() {
                child.tick(ctx);
            }
        }

        // Phase 2: resolve against the policy.
        let total = self.children.len();
        let succeeded = self
            .children
            .iter()
            .filter(|c| c.result() == Some(Status::Success))
            .count();
        let failed = self
            .children
            .iter()
            .filter(|c| c.result() == Some(Status::Failure))
            .count();

        let resolved = match self.policy {
            ParallelPolicy::SucceedOnAny => {
                if succeeded > 0 {
                    Some(Status::Success)
                } else if failed == total {
                    Some(Status::Failure)
                } else {
                    None
                }
            }
            ParallelPolicy::SucceedOnAll => {
                if failed > 0 {
                    Some(Status::Failure)
                } else if succeeded == total {
                    Some(Status::Success)
                } else {
                    None
                }
            }
        };

        match resolved {
            None => Status::Running,
            Some(s) => {
                // Losers are stopped the moment the composite resolves.
                for child in &mut self.children {
                    child.cancel(ctx);
                }
                self.done = Some(s);
                s
            }
        }
    }

    fn cancel(&mut self, ctx: &mut TickContext<'_>) {
        if self.done.is_some() {
            return;
        }
        for child in &mut self.children {
            child.cancel(ctx);
        }
        self.done = Some(Status::Failure);
    }
}

// ── GateNode ──────────────────────────────────────────────────────────────────

/// Trigger leaf.  The condition is re-evaluated every cycle until it first
/// holds; from that cycle on the gate reads `Success` without ever touching
/// the condition again, so an actor leaving the region afterwards changes
/// nothing.
pub struct GateNode {
    name:      String,
    condition: TriggerCondition,
    done:      Option<Status>,
}

impl GateNode {
    /// `true` once the condition has held at least once.
    pub fn fired(&self) -> bool {
        self.done == Some(Status::Success)
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Status {
        if let Some(s) = self.done {
            return s;
        }
        match self.condition.evaluate(&*ctx.world) {
            Ok(false) => Status::Running,
            Ok(true) => {
                debug!(gate = %self.name, tick = %ctx.tick, "trigger fired");
                self.done = Some(Status::Success);
                Status::Success
            }
            Err(e) => {
                warn!(gate = %self.name, error = %e, "trigger evaluation failed");
                self.done = Some(Status::Failure);
                Status::Failure
            }
        }
    }

    fn cancel(&mut self, _ctx: &mut TickContext<'_>) {
        if self.done.is_none() {
            self.done = Some(Status::Failure);
        }
    }
}
