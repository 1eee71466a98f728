//! Planar geometry for the scenario frame.
//!
//! Scenarios play out in a local Cartesian frame measured in metres: `x`
//! runs along the road's direction of travel, `y` points left of travel,
//! yaw is degrees counter-clockwise from `+x`.  `f32` gives sub-millimetre
//! precision over any plausible scenario extent while keeping actor state
//! compact.

/// A 2-D point or displacement in the scenario frame, metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in metres.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Vector magnitude.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, k: f32) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// Position and heading of an actor in the scenario frame.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec2,
    /// Heading in degrees, counter-clockwise from `+x`.  0 = along travel.
    pub yaw_deg:  f32,
}

impl Transform {
    #[inline]
    pub fn new(position: Vec2, yaw_deg: f32) -> Self {
        Self { position, yaw_deg }
    }

    /// A transform at `(x, y)` facing along the direction of travel.
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), 0.0)
    }

    /// Unit vector in the heading direction.
    #[inline]
    pub fn forward(self) -> Vec2 {
        let rad = self.yaw_deg.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @{:.1}°", self.position, self.yaw_deg)
    }
}

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box: centre plus half-extents.
///
/// Used for spawn-blockage checks and contact detection.  Touching boxes
/// count as overlapping.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub center: Vec2,
    pub half:   Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Separating-axis overlap test.
    #[inline]
    pub fn intersects(self, other: Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        (p.x - self.center.x).abs() <= self.half.x
            && (p.y - self.center.y).abs() <= self.half.y
    }
}
