//! Ready-made scenario definitions.
//!
//! | Scenario      | Script                                                     |
//! |---------------|------------------------------------------------------------|
//! | [`SuddenCutIn`] | Region-triggered cut-in plus emergency stop, with traffic. |
//! | [`LeadBrake`]   | Lead cruises ahead, brakes hard when the ego closes in.    |
//!
//! Both take a parameter struct with [`Default`] values tuned for the
//! stock highway map; swap fields to vary a run without writing a new
//! [`ScenarioDef`](crate::ScenarioDef).

pub mod lead_brake;
pub mod sudden_cut_in;

pub use lead_brake::{LeadBrake, LeadBrakeParams};
pub use sudden_cut_in::{CutInParams, SuddenCutIn};
