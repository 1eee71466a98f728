//! Scenario road model: a straight multi-lane carriageway.
//!
//! # Frame
//!
//! The road runs along `+x` with no curvature; longitudinal progress `s` is
//! simply the `x` coordinate.  Lane 0 is the rightmost lane and lane centres
//! sit at
//!
//! ```text
//! y = lane_index * lane_width
//! ```
//!
//! so "left" means increasing `y` and increasing lane index.  This is all
//! the geometry trigger regions, spawn placement, and lane-change maneuvers
//! need; backends wrapping a richer map translate through the same
//! `Waypoint` vocabulary.

use sr_core::{LaneId, Transform, Vec2};

/// Standard motorway lane width in metres.
pub const DEFAULT_LANE_WIDTH_M: f32 = 3.5;

// ── LaneSide ──────────────────────────────────────────────────────────────────

/// Which neighbouring lane a maneuver refers to, seen from the direction of
/// travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneSide {
    /// Toward increasing lane index (`+y`).
    Left,
    /// Toward lane 0 (`-y`).
    Right,
}

impl LaneSide {
    pub fn opposite(self) -> LaneSide {
        match self {
            LaneSide::Left  => LaneSide::Right,
            LaneSide::Right => LaneSide::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LaneSide::Left  => "left",
            LaneSide::Right => "right",
        }
    }
}

impl std::fmt::Display for LaneSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A position expressed in road coordinates: lane plus longitudinal offset.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub lane: LaneId,
    /// Longitudinal position along the road, metres.
    pub s:    f32,
}

impl Waypoint {
    #[inline]
    pub fn new(lane: LaneId, s: f32) -> Self {
        Self { lane, s }
    }

    /// The waypoint `ds` metres further along the same lane.
    #[inline]
    pub fn ahead(self, ds: f32) -> Waypoint {
        Waypoint::new(self.lane, self.s + ds)
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{:.1}m", self.lane, self.s)
    }
}

// ── LaneMap ───────────────────────────────────────────────────────────────────

/// Geometry of the scenario road.
///
/// Construct via [`LaneMapBuilder`] or the [`LaneMap::highway`] shortcut.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneMap {
    lane_count:   u16,
    lane_width_m: f32,
}

impl LaneMap {
    pub fn builder() -> LaneMapBuilder {
        LaneMapBuilder::new()
    }

    /// A `lanes`-lane road with the standard lane width.
    pub fn highway(lanes: u16) -> LaneMap {
        LaneMapBuilder::new().lanes(lanes).build()
    }

    #[inline]
    pub fn lane_count(&self) -> u16 {
        self.lane_count
    }

    #[inline]
    pub fn lane_width(&self) -> f32 {
        self.lane_width_m
    }

    /// `true` if `lane` exists on this road.
    #[inline]
    pub fn contains(&self, lane: LaneId) -> bool {
        lane.0 < self.lane_count
    }

    /// Lateral position of a lane's centre line, or `None` for a lane that
    /// is not on this road.
    #[inline]
    pub fn center_y(&self, lane: LaneId) -> Option<f32> {
        self.contains(lane)
            .then(|| lane.0 as f32 * self.lane_width_m)
    }

    /// The lane whose centre is nearest to lateral position `y`.  Positions
    /// beyond the road edge clamp to the outermost lane.
    pub fn nearest_lane(&self, y: f32) -> LaneId {
        let idx = (y / self.lane_width_m).round();
        LaneId(idx.clamp(0.0, (self.lane_count - 1) as f32) as u16)
    }

    /// The lane an actor at `position` occupies.
    #[inline]
    pub fn lane_of(&self, position: Vec2) -> LaneId {
        self.nearest_lane(position.y)
    }

    /// The neighbouring lane on `side`, or `None` at the road edge.
    pub fn adjacent(&self, lane: LaneId, side: LaneSide) -> Option<LaneId> {
        if !self.contains(lane) {
            return None;
        }
        match side {
            LaneSide::Left => {
                let next = LaneId(lane.0 + 1);
                self.contains(next).then_some(next)
            }
            LaneSide::Right => (lane.0 > 0).then(|| LaneId(lane.0 - 1)),
        }
    }

    /// Map-frame transform for a waypoint: on the lane centre, facing along
    /// travel.  `None` for a lane that is not on this road.
    pub fn waypoint_transform(&self, wp: Waypoint) -> Option<Transform> {
        let y = self.center_y(wp.lane)?;
        Some(Transform::at(wp.s, y))
    }
}

// ── LaneMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`LaneMap`], then call [`build`](Self::build).
pub struct LaneMapBuilder {
    lane_count:   u16,
    lane_width_m: f32,
}

impl LaneMapBuilder {
    pub fn new() -> Self {
        Self {
            lane_count:   1,
            lane_width_m: DEFAULT_LANE_WIDTH_M,
        }
    }

    /// Number of same-direction lanes.  Must be at least 1.
    pub fn lanes(mut self, count: u16) -> Self {
        self.lane_count = count;
        self
    }

    /// Lane width in metres.  Must be positive.
    pub fn lane_width(mut self, metres: f32) -> Self {
        self.lane_width_m = metres;
        self
    }

    /// Consume the builder and produce a [`LaneMap`].
    ///
    /// # Panics
    /// Panics in debug mode on a zero lane count or non-positive width.
    pub fn build(self) -> LaneMap {
        debug_assert!(self.lane_count >= 1, "a road needs at least one lane");
        debug_assert!(self.lane_width_m > 0.0, "lane width must be positive");
        LaneMap {
            lane_count:   self.lane_count,
            lane_width_m: self.lane_width_m,
        }
    }
}

impl Default for LaneMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
