//! Rectangular trigger regions.
//!
//! # Text form
//!
//! Scenario configurations carry regions as a comma-separated string:
//!
//! ```text
//! "x_min,x_max,y_min,y_max"      e.g.  "100,140,-1.75,1.75"
//! ```
//!
//! Parsing is strict and fails fast: wrong field count, non-numeric or
//! non-finite fields, and inverted bounds are all rejected with a
//! [`TriggerError`] naming the offending part.  Containment is inclusive on
//! every edge.

use std::str::FromStr;

use sr_core::Vec2;

use crate::error::{TriggerError, TriggerResult};

/// An axis-aligned rectangle in the scenario frame, metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Region {
    /// Construct a validated region.
    ///
    /// Rejects non-finite bounds and inverted intervals.  Degenerate
    /// rectangles (`min == max`) are allowed — they match exactly one line
    /// or point.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> TriggerResult<Region> {
        let invalid = |reason| TriggerError::RegionInvalid {
            x_min,
            x_max,
            y_min,
            y_max,
            reason,
        };

        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(invalid("non-finite bound"));
        }
        if x_min > x_max {
            return Err(invalid("x bounds inverted"));
        }
        if y_min > y_max {
            return Err(invalid("y bounds inverted"));
        }
        Ok(Region { x_min, x_max, y_min, y_max })
    }

    /// Inclusive containment on all four edges.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}

impl FromStr for Region {
    type Err = TriggerError;

    fn from_str(s: &str) -> TriggerResult<Region> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 4 {
            return Err(TriggerError::RegionArity {
                input: s.to_string(),
                got:   fields.len(),
            });
        }

        let mut vals = [0.0_f32; 4];
        for (i, raw) in fields.iter().enumerate() {
            let trimmed = raw.trim();
            let v = trimmed.parse::<f32>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
                TriggerError::RegionNumber {
                    input: s.to_string(),
                    field: i + 1,
                    value: trimmed.to_string(),
                }
            })?;
            vals[i] = v;
        }

        Region::new(vals[0], vals[1], vals[2], vals[3])
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
