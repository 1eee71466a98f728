//! Kinematic maneuver primitives for scenario actors.
//!
//! Each primitive implements [`sr_behavior::MotionPrimitive`] and drives
//! exactly one actor through the world-control seam.  They hold no
//! reference to the world between ticks; every decision is made from the
//! state visible inside the current [`sr_behavior::TickContext`].
//!
//! | Module          | Contents                                        |
//! |-----------------|-------------------------------------------------|
//! | `lane_change`   | Two-phase adjacent-lane change                  |
//! | `full_stop`     | Constant-deceleration brake plus timed hold     |
//! | `keep_velocity` | Re-asserted constant cruise, optionally timed   |
//! | `hold`          | Parked in place, never completes                |

pub mod full_stop;
pub mod hold;
pub mod keep_velocity;
pub mod lane_change;

pub use full_stop::{FullStop, DEFAULT_DECEL_MPS2};
pub use hold::Hold;
pub use keep_velocity::KeepVelocity;
pub use lane_change::{LaneChange, DEFAULT_CROSSING_M};
