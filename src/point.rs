//! Labeled trajectory samples.
//!
//! A [`Point`] is a timestamped 3D position tagged with its provenance:
//!
//! | Kind | Source |
//! |------|--------|
//! | [`PointKind::Node`] | observed, leading segment (before the gap) |
//! | [`PointKind::Pred`] | observed, trailing segment (after the gap) |
//! | [`PointKind::Spline`] | synthesized by curve fitting |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Provenance tag of a trajectory point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointKind {
    /// Observed in the leading segment.
    Node,
    /// Observed in the trailing segment.
    Pred,
    /// Generated by reconstruction; never valid as input.
    Spline,
}

impl PointKind {
    /// Whether this point was observed rather than synthesized.
    #[must_use]
    pub const fn is_observed(self) -> bool {
        matches!(self, Self::Node | Self::Pred)
    }

    /// Lowercase label, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Pred => "pred",
            Self::Spline => "spline",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled 3D sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Timestamp; the ordering key.
    pub ts: f64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (vertical, expected non-negative).
    pub z: f64,
    /// Provenance tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PointKind,
}

impl Point {
    /// Create a point from its parts.
    #[must_use]
    pub const fn new(ts: f64, x: f64, y: f64, z: f64, kind: PointKind) -> Self {
        Self { ts, x, y, z, kind }
    }

    /// Observed point in the leading segment.
    #[must_use]
    pub const fn node(ts: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(ts, x, y, z, PointKind::Node)
    }

    /// Observed point in the trailing segment.
    #[must_use]
    pub const fn pred(ts: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(ts, x, y, z, PointKind::Pred)
    }

    /// Synthetic point at `ts` with the given position.
    #[must_use]
    pub const fn spline(ts: f64, position: [f64; 3]) -> Self {
        Self::new(ts, position[0], position[1], position[2], PointKind::Spline)
    }

    /// Position as `[x, y, z]`.
    #[must_use]
    pub const fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether every numeric field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.ts.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
