//! Small linear algebra helpers for spline construction.

use crate::error::{FitError, ReconstructionError, Result};

/// Solve a tridiagonal system with the Thomas algorithm.
///
/// Row `i` reads `sub[i] * x[i-1] + diag[i] * x[i] + sup[i] * x[i+1] = rhs[i]`;
/// `sub[0]` and `sup[n-1]` are ignored.
///
/// # Arguments
///
/// * `sub` - Sub-diagonal, length n
/// * `diag` - Main diagonal, length n
/// * `sup` - Super-diagonal, length n
/// * `rhs` - Right-hand side, length n
///
/// # Errors
///
/// Returns [`FitError::SingularSystem`] on a zero or non-finite pivot, or
/// `InvalidInput` if the slices differ in length.
pub fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Result<Vec<f64>> {
    let n = diag.len();
    if sub.len() != n || sup.len() != n || rhs.len() != n {
        return Err(ReconstructionError::invalid_input(format!(
            "Tridiagonal bands must share length {n}"
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Forward sweep
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    let pivot = diag[0];
    if !is_usable_pivot(pivot) {
        return Err(FitError::SingularSystem { row: 0 }.into());
    }
    c_prime[0] = sup[0] / pivot;
    d_prime[0] = rhs[0] / pivot;

    for i in 1..n {
        let pivot = diag[i] - sub[i] * c_prime[i - 1];
        if !is_usable_pivot(pivot) {
            return Err(FitError::SingularSystem { row: i }.into());
        }
        c_prime[i] = sup[i] / pivot;
        d_prime[i] = (rhs[i] - sub[i] * d_prime[i - 1]) / pivot;
    }

    // Back substitution
    let mut x = d_prime;
    for i in (0..n - 1).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }

    Ok(x)
}

/// Any finite nonzero pivot is accepted; the threshold must not depend on the
/// scale of the system.
fn is_usable_pivot(pivot: f64) -> bool {
    pivot != 0.0 && pivot.is_finite()
}

/// Index `i` of the interval `[breaks[i], breaks[i + 1]]` containing `t`.
///
/// `breaks` must be sorted ascending with at least two entries. Values at or
/// beyond the last break map to the final interval.
#[must_use]
pub fn locate_interval(breaks: &[f64], t: f64) -> usize {
    debug_assert!(breaks.len() >= 2);
    let upper = breaks.partition_point(|&b| b <= t);
    upper.saturating_sub(1).min(breaks.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_tridiagonal() {
        // [2 1 0; 1 2 1; 0 1 2] x = [4, 8, 8] -> x = [1, 2, 3]
        let sub = [0.0, 1.0, 1.0];
        let diag = [2.0, 2.0, 2.0];
        let sup = [1.0, 1.0, 0.0];
        let rhs = [4.0, 8.0, 8.0];

        let x = solve_tridiagonal(&sub, &diag, &sup, &rhs).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_single_row() {
        let x = solve_tridiagonal(&[0.0], &[4.0], &[0.0], &[2.0]).unwrap();
        assert_relative_eq!(x[0], 0.5);
    }

    #[test]
    fn test_solve_empty() {
        assert!(solve_tridiagonal(&[], &[], &[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_singular_pivot() {
        let result = solve_tridiagonal(&[0.0, 1.0], &[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]);
        assert!(matches!(
            result,
            Err(ReconstructionError::Fit(FitError::SingularSystem { row: 0 }))
        ));
    }

    #[test]
    fn test_tiny_pivots_are_solved() {
        let scale = 1e-305;
        let sub = [0.0, scale];
        let diag = [2.0 * scale, 2.0 * scale];
        let sup = [scale, 0.0];
        let x = solve_tridiagonal(&sub, &diag, &sup, &[3.0 * scale, 3.0 * scale]).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_pivot() {
        let result = solve_tridiagonal(&[0.0], &[f64::NAN], &[0.0], &[1.0]);
        assert!(matches!(
            result,
            Err(ReconstructionError::Fit(FitError::SingularSystem { row: 0 }))
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let result = solve_tridiagonal(&[0.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0]);
        assert!(matches!(result, Err(ReconstructionError::InvalidInput(_))));
    }

    #[test]
    fn test_locate_interval() {
        let breaks = [0.0, 1.0, 2.0, 4.0];
        assert_eq!(locate_interval(&breaks, 0.0), 0);
        assert_eq!(locate_interval(&breaks, 0.5), 0);
        assert_eq!(locate_interval(&breaks, 1.0), 1);
        assert_eq!(locate_interval(&breaks, 3.9), 2);
        assert_eq!(locate_interval(&breaks, 4.0), 2);
        assert_eq!(locate_interval(&breaks, -1.0), 0);
    }
}
