//! Planar coordinate type.
//!
//! The simulator places every node on a flat local grid: `x` metres east and
//! `y` metres north of the south-west corner of the study area (25 × 15 km
//! off Salinas).  At that scale a euclidean metric is what the radio model
//! itself uses, so no geodesic correction is applied.

/// A point on the simulator's local grid, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance_m(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `true` when both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
