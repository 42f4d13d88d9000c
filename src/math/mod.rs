//! Numerical building blocks for curve fitting.
//!
//! This module provides:
//! - [`cubic`]: natural cubic spline in timestamp units
//! - [`bspline`]: uniform B-spline on a normalized parameter
//! - [`linalg`]: tridiagonal solver and interval lookup

pub mod bspline;
pub mod cubic;
pub mod linalg;

pub use bspline::{normalized_grid, UniformBSpline};
pub use cubic::NaturalCubicSpline;
pub use linalg::{locate_interval, solve_tridiagonal};
