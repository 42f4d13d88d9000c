//! Per-axis curve fitting over a cleaned point set.
//!
//! Each spatial axis gets its own scalar curve over timestamp; the three are
//! fitted independently with one shared [`FitStrategy`].

use tracing::debug;

use crate::cleaning::canonical_ts;
use crate::config::FitStrategy;
use crate::error::{ReconstructionError, Result};
use crate::math::{normalized_grid, NaturalCubicSpline, UniformBSpline};
use crate::point::Point;

/// Scalar curve over one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisCurve {
    /// Natural cubic spline.
    Cubic(NaturalCubicSpline),
    /// Uniform B-spline.
    BSpline(UniformBSpline),
}

impl AxisCurve {
    /// Fit one axis with the given strategy.
    ///
    /// # Errors
    ///
    /// Propagates the underlying spline construction error.
    pub fn fit(ts: &[f64], values: &[f64], strategy: FitStrategy) -> Result<Self> {
        match strategy {
            FitStrategy::NaturalCubic => NaturalCubicSpline::new(ts, values).map(Self::Cubic),
            FitStrategy::UniformBSpline { degree } => {
                UniformBSpline::new(ts, values, degree).map(Self::BSpline)
            }
        }
    }

    /// Evaluate at a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] outside the fitted range.
    pub fn evaluate(&self, t: f64) -> Result<f64> {
        match self {
            Self::Cubic(spline) => spline.evaluate(t),
            Self::BSpline(spline) => spline.evaluate(t),
        }
    }

    /// Fitted range `(min ts, max ts)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Cubic(spline) => spline.domain(),
            Self::BSpline(spline) => spline.domain(),
        }
    }
}

/// Three independent axis curves sharing one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryCurves {
    strategy: FitStrategy,
    x: AxisCurve,
    y: AxisCurve,
    z: AxisCurve,
}

impl TrajectoryCurves {
    /// Fit curves for x, y and z over `points`.
    ///
    /// `points` must already be cleaned (strictly increasing `ts`).
    ///
    /// # Errors
    ///
    /// Returns a fit error if there are fewer points than the strategy needs.
    pub fn fit(points: &[Point], strategy: FitStrategy) -> Result<Self> {
        let min = strategy.min_points();
        if points.len() < min {
            return Err(ReconstructionError::too_few_points(
                strategy.name(),
                min,
                points.len(),
            ));
        }

        let ts: Vec<f64> = points.iter().map(|p| p.ts).collect();
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = points.iter().map(|p| p.z).collect();

        let curves = Self {
            strategy,
            x: AxisCurve::fit(&ts, &xs, strategy)?,
            y: AxisCurve::fit(&ts, &ys, strategy)?,
            z: AxisCurve::fit(&ts, &zs, strategy)?,
        };

        debug!(points = points.len(), %strategy, "Fitted axis curves");
        Ok(curves)
    }

    /// Strategy the curves were fitted with.
    #[must_use]
    pub const fn strategy(&self) -> FitStrategy {
        self.strategy
    }

    /// Fitted range `(min ts, max ts)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.x.domain()
    }

    /// Position `[x, y, z]` at a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] outside the fitted range.
    pub fn evaluate(&self, t: f64) -> Result<[f64; 3]> {
        Ok([self.x.evaluate(t)?, self.y.evaluate(t)?, self.z.evaluate(t)?])
    }

    /// Synthetic spline points at each timestamp, in the given order.
    ///
    /// Timestamps are canonicalized the same way as cleaned input, so a
    /// query at `-0.0` yields a point at `0.0`.
    ///
    /// # Errors
    ///
    /// Fails on the first timestamp outside the fitted range; no partial
    /// output is returned.
    pub fn sample(&self, timestamps: &[f64]) -> Result<Vec<Point>> {
        timestamps
            .iter()
            .map(|&t| canonical_ts(t))
            .map(|t| self.evaluate(t).map(|pos| Point::spline(t, pos)))
            .collect()
    }

    /// `count` spline points at equally spaced parameters over the fitted
    /// range.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error.
    pub fn resample(&self, count: usize) -> Result<Vec<Point>> {
        let (min, max) = self.domain();
        let timestamps: Vec<f64> = normalized_grid(count)
            .map(|u| (min + u * (max - min)).clamp(min, max))
            .collect();
        self.sample(&timestamps)
    }
}
