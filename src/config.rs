//! Configuration for trajectory reconstruction.
//!
//! This module provides the [`ReconstructionConfig`] struct which centralizes
//! the tunable parameters of the gap-filling pipeline, along with presets.
//!
//! # Example
//!
//! ```
//! use trajectory_gapfill::{FitStrategy, ReconstructionConfig};
//!
//! // Use default configuration (natural cubic, step 0.5)
//! let config = ReconstructionConfig::default();
//!
//! // Use a preset and tweak it
//! let dense = ReconstructionConfig::fine().with_strategy(FitStrategy::bspline());
//! assert!(dense.validate().is_ok());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ReconstructionError, Result};

/// Default gap sampling interval in time units.
pub const DEFAULT_SAMPLING_STEP: f64 = 0.5;

/// Degree of the uniform B-spline strategy.
pub const DEFAULT_BSPLINE_DEGREE: usize = 3;

/// Configuration for trajectory reconstruction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReconstructionConfig {
    /// Interval between synthetic samples inside the gap.
    pub sampling_step: f64,

    /// Curve family used for all three axes.
    pub strategy: FitStrategy,

    /// What to do with a sample landing exactly on an observed timestamp.
    pub coincident_samples: CoincidentSamples,

    /// Points with `z` below this value are flagged as implausible.
    pub min_plausible_z: f64,
}

/// Curve family fitted to each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FitStrategy {
    /// Natural cubic spline through every point, in timestamp units.
    /// Passes exactly through the observations.
    #[default]
    NaturalCubic,
    /// Uniform B-spline with the observations as control points.
    /// Smooths rather than interpolates; parameterized on `[0, 1]`.
    UniformBSpline {
        /// Polynomial degree.
        degree: usize,
    },
}

impl FitStrategy {
    /// Uniform cubic B-spline.
    #[must_use]
    pub const fn bspline() -> Self {
        Self::UniformBSpline {
            degree: DEFAULT_BSPLINE_DEGREE,
        }
    }

    /// Minimum number of points the strategy can fit.
    #[must_use]
    pub const fn min_points(self) -> usize {
        match self {
            Self::NaturalCubic => 2,
            Self::UniformBSpline { degree } => degree + 1,
        }
    }

    /// Short label used in errors and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NaturalCubic => "natural cubic",
            Self::UniformBSpline { .. } => "uniform b-spline",
        }
    }
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NaturalCubic => f.write_str(self.name()),
            Self::UniformBSpline { degree } => write!(f, "{} (degree {degree})", self.name()),
        }
    }
}

/// Handling of synthetic samples that coincide with observed timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoincidentSamples {
    /// Drop the synthetic sample; output timestamps stay strictly increasing.
    #[default]
    PreferObserved,
    /// Keep both; observed points sort before synthetic ones at equal `ts`.
    KeepAll,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            sampling_step: DEFAULT_SAMPLING_STEP,
            strategy: FitStrategy::NaturalCubic,
            coincident_samples: CoincidentSamples::PreferObserved,
            min_plausible_z: 0.0,
        }
    }
}

impl ReconstructionConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.sampling_step.is_finite() || self.sampling_step <= 0.0 {
            return Err(ReconstructionError::invalid_config(
                "sampling_step must be positive and finite",
            ));
        }
        if let FitStrategy::UniformBSpline { degree } = self.strategy {
            if degree < 1 {
                return Err(ReconstructionError::invalid_config(
                    "b-spline degree must be at least 1",
                ));
            }
        }
        if !self.min_plausible_z.is_finite() {
            return Err(ReconstructionError::invalid_config(
                "min_plausible_z must be finite",
            ));
        }
        Ok(())
    }

    /// Dense sampling for smooth plots (step 0.02).
    #[must_use]
    pub fn fine() -> Self {
        Self {
            sampling_step: 0.02,
            ..Self::default()
        }
    }

    /// One sample per time unit.
    #[must_use]
    pub fn coarse() -> Self {
        Self {
            sampling_step: 1.0,
            ..Self::default()
        }
    }

    /// Uniform cubic B-spline instead of the natural spline.
    #[must_use]
    pub fn bspline() -> Self {
        Self {
            strategy: FitStrategy::bspline(),
            ..Self::default()
        }
    }

    /// Set the sampling step.
    #[must_use]
    pub const fn with_sampling_step(mut self, step: f64) -> Self {
        self.sampling_step = step;
        self
    }

    /// Set the fitting strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: FitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the coincident sample policy.
    #[must_use]
    pub const fn with_coincident_samples(mut self, policy: CoincidentSamples) -> Self {
        self.coincident_samples = policy;
        self
    }

    /// Set the plausibility threshold on `z`.
    #[must_use]
    pub const fn with_min_plausible_z(mut self, min_z: f64) -> Self {
        self.min_plausible_z = min_z;
        self
    }
}
