//! Planar geometry: `Vec2` and `Rect`.
//!
//! Positions and velocities are `f64`.  Agent coordinates stay small (a few
//! hundred units) so `f32` would also work, but `f64` keeps squared-distance
//! comparisons exact enough that predictive collision tests never disagree
//! between current and projected positions due to rounding alone.

/// A 2-D vector used for both positions and velocities.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Collision tests compare this against the squared sum of radii, so the
    /// square root is never taken.
    #[inline]
    pub fn dist_sq(self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned bounding rectangle.  Each cluster owns one; agents bounce
/// off their own cluster's box, never a global screen boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from origin and extent.  `width`/`height` must be positive for
    /// the rectangle to contain anything; no validation is performed here.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp `p` so a circle of `radius` centered on it fits inside the
    /// rectangle.  Used as the defensive correction after each movement step.
    ///
    /// If the rectangle is narrower than `2 * radius`, the point collapses to
    /// the nearest representable position; callers are expected to configure
    /// clusters larger than one agent.
    pub fn clamp_circle(&self, p: Vec2, radius: f64) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x + radius, (self.max.x - radius).max(self.min.x + radius)),
            p.y.clamp(self.min.y + radius, (self.max.y - radius).max(self.min.y + radius)),
        )
    }

    /// `true` if a circle of `radius` centered at `p` pokes past either
    /// vertical wall.
    #[inline]
    pub fn crosses_x(&self, p: Vec2, radius: f64) -> bool {
        p.x - radius < self.min.x || p.x + radius > self.max.x
    }

    /// `true` if a circle of `radius` centered at `p` pokes past either
    /// horizontal wall.
    #[inline]
    pub fn crosses_y(&self, p: Vec2, radius: f64) -> bool {
        p.y - radius < self.min.y || p.y + radius > self.max.y
    }
}
