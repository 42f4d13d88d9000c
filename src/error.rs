//! Error types for trajectory reconstruction.
//!
//! Every failure aborts the whole operation; there is no partial output.
//! The z-plausibility check is not an error and never appears here.

use thiserror::Error;

use crate::point::PointKind;

/// Main error type for trajectory reconstruction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconstructionError {
    /// Input validation errors (non-finite values, reserved labels).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cleaned timestamps are not strictly increasing.
    #[error("Timestamps must be strictly increasing after cleaning at index {index}")]
    DataIntegrity { index: usize },

    /// Curve fitting failed.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// A structural precondition on the observed segments does not hold.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// Query timestamp falls outside the fitted range.
    #[error("Timestamp {ts} outside fitted domain [{min}, {max}]")]
    OutOfDomain { ts: f64, min: f64, max: f64 },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures raised while building per-axis curves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// Not enough points for the strategy's minimum order.
    #[error("{strategy} fit needs at least {min} points, got {actual}")]
    TooFewPoints {
        strategy: &'static str,
        min: usize,
        actual: usize,
    },

    /// Zero pivot while solving the spline system.
    #[error("Singular spline system at row {row}")]
    SingularSystem { row: usize },
}

/// Preconditions the engine checks before any reconstruction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// No points of the given kind, so the gap has no boundary.
    #[error("No {0} points present; cannot bound the gap")]
    MissingSegment(PointKind),
}

/// Result type alias for trajectory reconstruction.
pub type Result<T> = std::result::Result<T, ReconstructionError>;

impl ReconstructionError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a data integrity error.
    #[must_use]
    pub const fn data_integrity(index: usize) -> Self {
        Self::DataIntegrity { index }
    }

    /// Create a too-few-points fit error.
    #[must_use]
    pub const fn too_few_points(strategy: &'static str, min: usize, actual: usize) -> Self {
        Self::Fit(FitError::TooFewPoints {
            strategy,
            min,
            actual,
        })
    }

    /// Create a missing segment precondition error.
    #[must_use]
    pub const fn missing_segment(kind: PointKind) -> Self {
        Self::Precondition(PreconditionError::MissingSegment(kind))
    }

    /// Create an out-of-domain error.
    #[must_use]
    pub const fn out_of_domain(ts: f64, min: f64, max: f64) -> Self {
        Self::OutOfDomain { ts, min, max }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
