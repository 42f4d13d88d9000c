//! Reconstructed trajectory and its renderer-facing views.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::{Point, PointKind};

/// Time-ordered sequence of observed and synthetic points.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory {
    points: Vec<Point>,
}

/// Three parallel coordinate arrays in trajectory order.
///
/// This is the shape plotting libraries consume for 3D scatter/line traces.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSeries {
    /// X coordinates.
    pub xs: Vec<f64>,
    /// Y coordinates.
    pub ys: Vec<f64>,
    /// Z coordinates.
    pub zs: Vec<f64>,
}

impl AxisSeries {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl Trajectory {
    /// Wrap points that are already sorted by `ts`.
    pub(crate) fn from_sorted(points: Vec<Point>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].ts <= w[1].ts));
        Self { points }
    }

    /// All points in time order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume into the underlying points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Synthetic points only.
    pub fn synthetic(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.kind == PointKind::Spline)
    }

    /// Split into parallel x/y/z arrays for rendering.
    #[must_use]
    pub fn axis_series(&self) -> AxisSeries {
        AxisSeries {
            xs: self.points.iter().map(|p| p.x).collect(),
            ys: self.points.iter().map(|p| p.y).collect(),
            zs: self.points.iter().map(|p| p.z).collect(),
        }
    }

    /// Indices of points with `z` below `min_z`.
    #[must_use]
    pub fn implausible_indices(&self, min_z: f64) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.z < min_z)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether timestamps are strictly increasing.
    #[must_use]
    pub fn is_time_ordered(&self) -> bool {
        self.points.windows(2).all(|w| w[0].ts < w[1].ts)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<&Trajectory> for AxisSeries {
    fn from(trajectory: &Trajectory) -> Self {
        trajectory.axis_series()
    }
}
