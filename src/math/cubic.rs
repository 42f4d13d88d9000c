//! Natural cubic spline in timestamp units.
//!
//! On each interval `[t_i, t_{i+1}]` the curve is
//! `a_i + b_i·dt + c_i·dt² + d_i·dt³` with `dt = (t - t_i) / span`, where
//! `span` is the full knot range. Working in units of the span keeps the
//! coefficients finite however closely the knots are spaced. Value, first
//! and second derivative are continuous at interior knots and the second
//! derivative vanishes at both ends.

use crate::error::{ReconstructionError, Result};
use crate::math::linalg::{locate_interval, solve_tridiagonal};

/// Label used in fit errors.
const NAME: &str = "natural cubic";

/// Piecewise cubic interpolant through every knot.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalCubicSpline {
    knots: Vec<f64>,
    span: f64,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Fit a natural cubic spline through `(ts[i], values[i])`.
    ///
    /// # Arguments
    ///
    /// * `ts` - Strictly increasing knot timestamps
    /// * `values` - Sample value at each knot
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are given, lengths differ,
    /// or the timestamps are not strictly increasing.
    pub fn new(ts: &[f64], values: &[f64]) -> Result<Self> {
        let n = ts.len();
        if values.len() != n {
            return Err(ReconstructionError::invalid_input(format!(
                "{n} timestamps vs {} values",
                values.len()
            )));
        }
        if n < 2 {
            return Err(ReconstructionError::too_few_points(NAME, 2, n));
        }
        if let Some(i) = ts.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ReconstructionError::data_integrity(i + 1));
        }

        let span = ts[n - 1] - ts[0];
        let a = values.to_vec();
        let h: Vec<f64> = ts.windows(2).map(|w| (w[1] - w[0]) / span).collect();

        // Interior second-derivative system (c_0 = c_{n-1} = 0)
        let m = n - 2;
        let mut sub = vec![0.0; m];
        let mut diag = vec![0.0; m];
        let mut sup = vec![0.0; m];
        let mut rhs = vec![0.0; m];
        for k in 0..m {
            let i = k + 1;
            sub[k] = h[i - 1];
            diag[k] = 2.0 * (h[i - 1] + h[i]);
            sup[k] = h[i];
            rhs[k] = 3.0 * ((a[i + 1] - a[i]) / h[i] - (a[i] - a[i - 1]) / h[i - 1]);
        }
        let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs)?;

        let mut c = Vec::with_capacity(n);
        c.push(0.0);
        c.extend(interior);
        c.push(0.0);

        let mut b = Vec::with_capacity(n - 1);
        let mut d = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            b.push((a[i + 1] - a[i]) / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0);
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
        }

        Ok(Self {
            knots: ts.to_vec(),
            span,
            a,
            b,
            c,
            d,
        })
    }

    /// Knot timestamps.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Fitted range `(min ts, max ts)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Evaluate the spline at `t`.
    ///
    /// Returns the knot value exactly when `t` is a knot.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] outside the knot range.
    pub fn evaluate(&self, t: f64) -> Result<f64> {
        let i = self.segment(t)?;
        let last = self.knots.len() - 1;
        if i + 1 == last && t == self.knots[last] {
            return Ok(self.a[last]);
        }
        let dt = (t - self.knots[i]) / self.span;
        Ok(self.a[i] + dt * (self.b[i] + dt * (self.c[i] + dt * self.d[i])))
    }

    /// Second derivative at `t`.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::OutOfDomain`] outside the knot range.
    pub fn second_derivative(&self, t: f64) -> Result<f64> {
        let i = self.segment(t)?;
        let dt = (t - self.knots[i]) / self.span;
        Ok((2.0 * self.c[i] + 6.0 * self.d[i] * dt) / (self.span * self.span))
    }

    fn segment(&self, t: f64) -> Result<usize> {
        let (min, max) = self.domain();
        if !(min..=max).contains(&t) {
            return Err(ReconstructionError::out_of_domain(t, min, max));
        }
        Ok(locate_interval(&self.knots, t))
    }
}
