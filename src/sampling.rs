//! Query timestamps covering a gap.

use crate::error::{ReconstructionError, Result};
use crate::segments::Gap;

/// Timestamps `start + i * step` for `i = 0, 1, …` while `<= end`.
///
/// Empty when `start > end`; a single element when `start == end`.
/// Each value is computed from the index rather than by repeated addition,
/// so long ranges do not drift.
///
/// # Errors
///
/// Returns [`ReconstructionError::InvalidConfig`] if `step` is not positive
/// and finite, or [`ReconstructionError::InvalidInput`] if a bound is
/// not finite.
///
/// # Example
///
/// ```
/// use trajectory_gapfill::sample_range;
///
/// let ts = sample_range(2.0, 5.0, 1.0)?;
/// assert_eq!(ts, vec![2.0, 3.0, 4.0, 5.0]);
/// # Ok::<(), trajectory_gapfill::ReconstructionError>(())
/// ```
pub fn sample_range(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ReconstructionError::invalid_config(
            "sampling step must be positive and finite",
        ));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(ReconstructionError::invalid_input(
            "sampling bounds must be finite",
        ));
    }

    Ok((0u32..)
        .map(|i| start + f64::from(i) * step)
        .take_while(|&t| t <= end)
        .collect())
}

/// Sample a [`Gap`] from its start to its end.
///
/// # Errors
///
/// Same as [`sample_range`].
pub fn sample_gap(gap: &Gap, step: f64) -> Result<Vec<f64>> {
    sample_range(gap.start, gap.end, step)
}
