//! Merging observed points with synthetic gap samples.
//!
//! The merge is additive: observed points are carried through unchanged and
//! only `Spline` points are added. Negative-height points are flagged, never
//! clamped or dropped.

use tracing::{debug, warn};

use crate::config::CoincidentSamples;
use crate::point::Point;
use crate::trajectory::Trajectory;

/// Merge cleaned observations with synthetic samples into one trajectory.
///
/// # Arguments
///
/// * `observed` - Cleaned observed points, sorted by `ts`
/// * `samples` - Synthetic points in any order
/// * `policy` - Handling of samples that share a timestamp with an observation
/// * `min_plausible_z` - Points with `z` below this trigger a warning
///
/// # Returns
///
/// Points sorted ascending by `ts`. Ties keep observed points first.
#[must_use]
pub fn merge(
    observed: &[Point],
    samples: Vec<Point>,
    policy: CoincidentSamples,
    min_plausible_z: f64,
) -> Trajectory {
    let sample_count = samples.len();
    let samples: Vec<Point> = match policy {
        CoincidentSamples::KeepAll => samples,
        CoincidentSamples::PreferObserved => samples
            .into_iter()
            .filter(|s| !is_observed_at(observed, s.ts))
            .collect(),
    };

    let dropped = sample_count - samples.len();
    if dropped > 0 {
        debug!(dropped, "Dropped samples coinciding with observations");
    }

    let mut all: Vec<Point> = Vec::with_capacity(observed.len() + samples.len());
    all.extend_from_slice(observed);
    all.extend(samples);
    all.sort_by(|a, b| a.ts.total_cmp(&b.ts));

    let trajectory = Trajectory::from_sorted(all);
    check_plausibility(&trajectory, min_plausible_z);
    trajectory
}

/// Warn if any point lies below `min_z`. Returns the number of offenders.
pub fn check_plausibility(trajectory: &Trajectory, min_z: f64) -> usize {
    let offenders = trajectory.implausible_indices(min_z);
    if let Some(&first) = offenders.first() {
        let point = trajectory.points()[first];
        warn!(
            count = offenders.len(),
            first_ts = point.ts,
            first_z = point.z,
            min_z,
            "Trajectory has points below the plausible height"
        );
    }
    offenders.len()
}

/// Binary search on the sorted observations. Compares with `==`, so `-0.0`
/// matches an observation at `0.0`.
fn is_observed_at(observed: &[Point], ts: f64) -> bool {
    let i = observed.partition_point(|p| p.ts < ts);
    observed.get(i).is_some_and(|p| p.ts == ts)
}
