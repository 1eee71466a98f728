//! `sr-trigger` — spatial trigger conditions.
//!
//! # Crate layout
//!
//! | Module        | Contents                                    |
//! |---------------|---------------------------------------------|
//! | [`region`]    | `Region` rectangle + strict string parsing  |
//! | [`condition`] | `TriggerCondition` predicate enum           |
//! | [`error`]     | `TriggerError`, `TriggerResult<T>`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                            |
//! |---------|---------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Region`.    |

pub mod condition;
pub mod error;
pub mod region;


pub use condition::TriggerCondition;
pub use error::{TriggerError, TriggerResult};
pub use region::Region;
