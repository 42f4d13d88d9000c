//! Trajectory Gap Filling Library
//!
//! Spline-based reconstruction of a missing span in a sparse 3D trajectory.
//!
//! The input is a set of timestamped points split into two observed
//! segments: a leading `node` segment and a trailing `pred` segment, with a
//! time gap between them. The library fits one curve per axis over all
//! observations and fills the gap with synthetic `spline` points, producing
//! one merged, time-ordered trajectory ready for plotting.
//!
//! # Features
//!
//! - **Cleaning**: dedup-by-overwrite on timestamp, sorting, monotonicity checks
//! - **Two curve families**: natural cubic spline (exact passthrough) and
//!   uniform B-spline (smoothing), selectable per run
//! - **Additive merge**: observations are never modified
//! - **Plausibility check**: points below ground level are logged, not altered
//!
//! # Quick Start
//!
//! ```
//! use trajectory_gapfill::{Point, TrajectoryInterpolator};
//!
//! let points = vec![
//!     Point::node(0.0, 0.0, 0.0, 5.0),
//!     Point::node(1.0, 1.0, 1.0, 4.0),
//!     Point::node(2.0, 2.0, 2.0, 3.0),
//!     Point::pred(5.0, 5.0, 5.0, 0.0),
//!     Point::pred(6.0, 6.0, 6.0, 1.0),
//! ];
//!
//! let engine = TrajectoryInterpolator::new(&points)?;
//! let trajectory = engine.full_gap_trajectory()?;
//!
//! assert!(trajectory.is_time_ordered());
//! assert!(trajectory.synthetic().count() > 0);
//! # Ok::<(), trajectory_gapfill::ReconstructionError>(())
//! ```
//!
//! # Presets
//!
//! ```
//! use trajectory_gapfill::ReconstructionConfig;
//!
//! let default = ReconstructionConfig::default(); // natural cubic, step 0.5
//! let fine = ReconstructionConfig::fine();       // step 0.02
//! let coarse = ReconstructionConfig::coarse();   // step 1.0
//! let smooth = ReconstructionConfig::bspline();  // uniform cubic B-spline
//! ```
//!
//! # Logging
//!
//! Pipeline milestones are emitted as `tracing` debug events and the
//! plausibility check as a warning. Install a subscriber to see them.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod cleaning;
pub mod config;
pub mod error;
pub mod fitting;
pub mod interpolator;
pub mod math;
pub mod merge;
pub mod point;
pub mod sampling;
pub mod segments;
pub mod trajectory;

// Re-exports for convenient access
pub use cleaning::{check_strictly_increasing, clean_points};
pub use config::{
    CoincidentSamples, FitStrategy, ReconstructionConfig, DEFAULT_BSPLINE_DEGREE,
    DEFAULT_SAMPLING_STEP,
};
pub use error::{FitError, PreconditionError, ReconstructionError, Result};
pub use fitting::{AxisCurve, TrajectoryCurves};
pub use interpolator::TrajectoryInterpolator;
pub use merge::{check_plausibility, merge};
pub use point::{Point, PointKind};
pub use sampling::{sample_gap, sample_range};
pub use segments::{Gap, Segments};
pub use trajectory::{AxisSeries, Trajectory};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
