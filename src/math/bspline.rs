//! Uniform B-spline with the samples as control points.
//!
//! The knot vector has `n + degree + 2` entries evenly spaced on `[0, 1]`.
//! The curve is evaluated on its valid span `[knot[degree], knot[n]]`, which
//! is exposed to callers as a normalized parameter `u ∈ [0, 1]`. Timestamps
//! map onto `u` linearly over the fitted range, so [`UniformBSpline::evaluate`]
//! accepts real timestamps like the cubic spline does.
//!
//! The curve approximates rather than interpolates: it does not pass through
//! interior control points.

use crate::error::{ReconstructionError, Result};
use crate::math::linalg::locate_interval;

/// Label used in fit errors.
const NAME: &str = "uniform b-spline";

/// Uniform B-spline over one scalar axis.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBSpline {
    degree: usize,
    knots: Vec<f64>,
    control: Vec<f64>,
    ts_min: f64,
    ts_max: f64,
}

impl UniformBSpline {
    /// Build a uniform B-spline from samples.
    ///
    /// # Arguments
    ///
    /// * `ts` - Strictly increasing timestamps; only the first and last are
    ///   used, to map timestamps onto the normalized parameter
    /// * `values` - Control values, one per timestamp
    /// * `degree` - Polynomial degree (at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `degree + 1` points are given, lengths
    /// differ, the degree is zero, or the timestamps are not increasing.
    pub fn new(ts: &[f64], values: &[f64], degree: usize) -> Result<Self> {
        let n = values.len();
        if ts.len() != n {
            return Err(ReconstructionError::invalid_input(format!(
                "{} timestamps vs {n} values",
                ts.len()
            )));
        }
        if degree == 0 {
            return Err(ReconstructionError::invalid_config(
                "b-spline degree must be at least 1",
            ));
        }
        if n < degree + 1 {
            return Err(ReconstructionError::too_few_points(NAME, degree + 1, n));
        }
        if let Some(i) = ts.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ReconstructionError::data_integrity(i + 1));
        }

        let knot_count = n + degree + 2;
        let last = (knot_count - 1) as f64;
        let knots = (0..knot_count).map(|i| i as f64 / last).collect();

        Ok(Self {
            degree,
            knots,
            control: values.to_vec(),
            ts_min: ts[0],
            ts_max: ts[n - 1],
        })
    }

    /// Polynomial degree.
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Knot vector on `[0, 1]`.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Fitted range `(min ts, max ts)`.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        (self.ts_min, self.ts_max)
    }

    /// Map a timestamp onto the normalized parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] outside the fitted range.
    pub fn normalize(&self, t: f64) -> Result<f64> {
        if !(self.ts_min..=self.ts_max).contains(&t) {
            return Err(ReconstructionError::out_of_domain(t, self.ts_min, self.ts_max));
        }
        Ok((t - self.ts_min) / (self.ts_max - self.ts_min))
    }

    /// Evaluate at a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] outside the fitted range.
    pub fn evaluate(&self, t: f64) -> Result<f64> {
        let u = self.normalize(t)?;
        self.evaluate_normalized(u)
    }

    /// Evaluate at normalized parameter `u ∈ [0, 1]` with de Boor's algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] for `u` outside `[0, 1]`.
    pub fn evaluate_normalized(&self, u: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&u) {
            return Err(ReconstructionError::out_of_domain(u, 0.0, 1.0));
        }

        let p = self.degree;
        let n = self.control.len();
        let lo = self.knots[p];
        let hi = self.knots[n];
        let s = lo + u * (hi - lo);

        // Span index k in [p, n - 1]
        let k = p + locate_interval(&self.knots[p..=n], s);

        let mut d: Vec<f64> = self.control[k - p..=k].to_vec();
        for r in 1..=p {
            for j in (r..=p).rev() {
                let left = self.knots[j + k - p];
                let right = self.knots[j + 1 + k - r];
                let alpha = (s - left) / (right - left);
                d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
            }
        }
        Ok(d[p])
    }
}

/// `count` equally spaced values over `[0, 1]`, endpoints included.
pub fn normalized_grid(count: usize) -> impl Iterator<Item = f64> {
    let denom = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |i| (i as f64 / denom).min(1.0))
}
