//! `sr-behavior` — behavior-tree node model and motion-primitive trait.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`status`]    | `Status` tick outcome                                  |
//! | [`node`]      | `BehaviorNode` and the four node kinds                 |
//! | [`primitive`] | `MotionPrimitive` trait, `Progress`, `MotionError`     |
//! | [`context`]   | `TickContext` passed through the tree                  |
//!
//! The tree is data, not inheritance: node kinds are a closed enum, and the
//! only trait seam is [`MotionPrimitive`] at the leaves.  Concrete
//! maneuvers live in `sr-motion`; this crate defines how any maneuver is
//! sequenced, gated, and cancelled.

pub mod context;
pub mod node;
pub mod primitive;
pub mod status;


pub use context::TickContext;
pub use node::{ActionNode, ActionState, BehaviorNode, GateNode, ParallelNode, ParallelPolicy, SequenceNode};
pub use primitive::{MotionError, MotionPrimitive, MotionResult, Progress};
pub use status::Status;
