//! The reconstruction engine.
//!
//! [`TrajectoryInterpolator`] cleans and classifies its input once, at
//! construction. A value that exists is always ready: construction either
//! succeeds or returns an error and no instance. Every reconstruction method
//! is a read-only query returning freshly allocated output.
//!
//! # Pipeline
//!
//! 1. Clean raw points (dedup-by-overwrite, sort, strict monotonicity)
//! 2. Classify into node/pred segments and bound the gap
//! 3. Sample query timestamps over the gap
//! 4. Fit one curve per axis over all cleaned points
//! 5. Merge synthetic samples with observations and check plausibility

use tracing::debug;

use crate::cleaning::clean_points;
use crate::config::ReconstructionConfig;
use crate::error::Result;
use crate::fitting::TrajectoryCurves;
use crate::merge::merge;
use crate::point::Point;
use crate::sampling::sample_gap;
use crate::segments::{Gap, Segments};
use crate::trajectory::Trajectory;

/// Gap-filling engine over one observed trajectory.
///
/// # Example
///
/// ```
/// use trajectory_gapfill::{Point, ReconstructionConfig, TrajectoryInterpolator};
///
/// let points = vec![
///     Point::node(0.0, 0.0, 0.0, 5.0),
///     Point::node(1.0, 1.0, 1.0, 4.0),
///     Point::node(2.0, 2.0, 2.0, 3.0),
///     Point::pred(5.0, 5.0, 5.0, 0.0),
///     Point::pred(6.0, 6.0, 6.0, 1.0),
/// ];
/// let config = ReconstructionConfig::coarse();
/// let engine = TrajectoryInterpolator::with_config(&points, config)?;
///
/// let trajectory = engine.full_gap_trajectory()?;
/// assert_eq!(trajectory.len(), 7);
/// assert!(trajectory.is_time_ordered());
///
/// // Parallel arrays for a 3D plot
/// let series = trajectory.axis_series();
/// assert_eq!(series.zs.len(), 7);
/// # Ok::<(), trajectory_gapfill::ReconstructionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TrajectoryInterpolator {
    config: ReconstructionConfig,
    points: Vec<Point>,
    segments: Segments,
    gap: Gap,
}

impl TrajectoryInterpolator {
    /// Build an engine with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`TrajectoryInterpolator::with_config`].
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_config(points, ReconstructionConfig::default())
    }

    /// Build an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - Any point is non-finite or labelled spline
    /// - Cleaned timestamps are not strictly increasing
    /// - There are no node points or no pred points
    pub fn with_config(points: &[Point], config: ReconstructionConfig) -> Result<Self> {
        config.validate()?;

        let points = clean_points(points)?;
        let segments = Segments::classify(&points);
        let gap = segments.gap()?;

        debug!(
            points = points.len(),
            nodes = segments.nodes.len(),
            preds = segments.preds.len(),
            gap_start = gap.start,
            gap_end = gap.end,
            "Trajectory interpolator ready"
        );

        Ok(Self {
            config,
            points,
            segments,
            gap,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    /// Cleaned observations in time order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Leading observed segment.
    #[must_use]
    pub fn nodes(&self) -> &[Point] {
        &self.segments.nodes
    }

    /// Trailing observed segment.
    #[must_use]
    pub fn preds(&self) -> &[Point] {
        &self.segments.preds
    }

    /// Interval between the segments.
    #[must_use]
    pub const fn gap(&self) -> Gap {
        self.gap
    }

    /// Fit the configured curves over all cleaned points.
    ///
    /// # Errors
    ///
    /// Returns a fit error if there are too few points for the strategy.
    pub fn curves(&self) -> Result<TrajectoryCurves> {
        TrajectoryCurves::fit(&self.points, self.config.strategy)
    }

    /// Query timestamps covering the gap at the configured step.
    ///
    /// # Errors
    ///
    /// Cannot fail for a validated configuration; kept fallible to mirror
    /// [`crate::sample_range`].
    pub fn gap_timestamps(&self) -> Result<Vec<f64>> {
        sample_gap(&self.gap, self.config.sampling_step)
    }

    /// Synthetic points at arbitrary timestamps.
    ///
    /// # Errors
    ///
    /// Returns a fit error, or `OutOfDomain` if a timestamp lies outside the
    /// observed range.
    pub fn interpolate(&self, timestamps: &[f64]) -> Result<Vec<Point>> {
        self.curves()?.sample(timestamps)
    }

    /// Synthetic points over the gap.
    ///
    /// # Errors
    ///
    /// See [`TrajectoryInterpolator::interpolate`].
    pub fn interpolate_gap(&self) -> Result<Vec<Point>> {
        self.interpolate(&self.gap_timestamps()?)
    }

    /// Observations merged with synthetic points at arbitrary timestamps.
    ///
    /// # Errors
    ///
    /// See [`TrajectoryInterpolator::interpolate`].
    pub fn full_trajectory(&self, timestamps: &[f64]) -> Result<Trajectory> {
        let samples = self.interpolate(timestamps)?;
        debug!(samples = samples.len(), "Merging reconstructed samples");
        Ok(merge(
            &self.points,
            samples,
            self.config.coincident_samples,
            self.config.min_plausible_z,
        ))
    }

    /// Observations merged with the reconstructed gap.
    ///
    /// # Errors
    ///
    /// See [`TrajectoryInterpolator::interpolate`].
    pub fn full_gap_trajectory(&self) -> Result<Trajectory> {
        self.full_trajectory(&self.gap_timestamps()?)
    }

    /// `count` synthetic points evenly spread over the whole observed range.
    ///
    /// # Errors
    ///
    /// Returns a fit error if there are too few points for the strategy.
    pub fn resample(&self, count: usize) -> Result<Vec<Point>> {
        self.curves()?.resample(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoincidentSamples, FitStrategy};
    use crate::error::{FitError, ReconstructionError};
    use crate::point::PointKind;
    use approx::assert_relative_eq;

    fn example_points() -> Vec<Point> {
        vec![
            Point::node(0.0, 0.0, 0.0, 5.0),
            Point::node(1.0, 1.0, 1.0, 4.0),
            Point::node(2.0, 2.0, 2.0, 3.0),
            Point::pred(5.0, 5.0, 5.0, 0.0),
            Point::pred(6.0, 6.0, 6.0, 1.0),
        ]
    }

    fn coarse_engine() -> TrajectoryInterpolator {
        TrajectoryInterpolator::with_config(&example_points(), ReconstructionConfig::coarse())
            .unwrap()
    }

    #[test]
    fn test_construction_caches_segments() {
        let engine = coarse_engine();
        assert_eq!(engine.points().len(), 5);
        assert_eq!(engine.nodes().len(), 3);
        assert_eq!(engine.preds().len(), 2);
        assert_eq!(engine.gap(), Gap { start: 2.0, end: 5.0 });
    }

    #[test]
    fn test_example_gap_samples() {
        let engine = coarse_engine();
        assert_eq!(engine.gap_timestamps().unwrap(), vec![2.0, 3.0, 4.0, 5.0]);

        let samples = engine.interpolate_gap().unwrap();
        let ts: Vec<f64> = samples.iter().map(|p| p.ts).collect();
        assert_eq!(ts, vec![2.0, 3.0, 4.0, 5.0]);
        assert!(samples.iter().all(|p| p.kind == PointKind::Spline));

        // Boundary passthrough at the last node
        assert_relative_eq!(samples[0].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(samples[0].y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(samples[0].z, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_example_full_trajectory() {
        let trajectory = coarse_engine().full_gap_trajectory().unwrap();
        assert_eq!(trajectory.len(), 7);
        assert!(trajectory.is_time_ordered());

        let kinds: Vec<PointKind> = trajectory.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PointKind::Node,
                PointKind::Node,
                PointKind::Node,
                PointKind::Spline,
                PointKind::Spline,
                PointKind::Pred,
                PointKind::Pred,
            ]
        );
    }

    #[test]
    fn test_keep_all_policy_length() {
        let config = ReconstructionConfig::coarse().with_coincident_samples(CoincidentSamples::KeepAll);
        let engine = TrajectoryInterpolator::with_config(&example_points(), config).unwrap();
        let sampled = engine.gap_timestamps().unwrap().len();
        let trajectory = engine.full_gap_trajectory().unwrap();
        assert_eq!(trajectory.len(), engine.points().len() + sampled);
    }

    #[test]
    fn test_default_step_is_half() {
        let engine = TrajectoryInterpolator::new(&example_points()).unwrap();
        assert_eq!(
            engine.gap_timestamps().unwrap(),
            vec![2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0]
        );
    }

    #[test]
    fn test_idempotent() {
        let engine = TrajectoryInterpolator::new(&example_points()).unwrap();
        let first = engine.full_gap_trajectory().unwrap();
        let second = engine.full_gap_trajectory().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_pred_segment() {
        let points = &example_points()[..3];
        let result = TrajectoryInterpolator::new(points);
        assert!(matches!(
            result,
            Err(ReconstructionError::Precondition(_))
        ));
    }

    #[test]
    fn test_missing_node_segment() {
        let points = &example_points()[3..];
        assert_eq!(
            TrajectoryInterpolator::new(points).unwrap_err(),
            ReconstructionError::missing_segment(PointKind::Node)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ReconstructionConfig::default().with_sampling_step(-1.0);
        assert!(matches!(
            TrajectoryInterpolator::with_config(&example_points(), config),
            Err(ReconstructionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bspline_too_few_points() {
        let points = vec![Point::node(0.0, 0.0, 0.0, 0.0), Point::pred(1.0, 1.0, 1.0, 1.0)];
        let engine =
            TrajectoryInterpolator::with_config(&points, ReconstructionConfig::bspline()).unwrap();
        assert!(matches!(
            engine.interpolate_gap(),
            Err(ReconstructionError::Fit(FitError::TooFewPoints { min: 4, .. }))
        ));
    }

    #[test]
    fn test_bspline_gap_fill() {
        let config = ReconstructionConfig::bspline().with_sampling_step(1.0);
        let engine = TrajectoryInterpolator::with_config(&example_points(), config).unwrap();
        assert_eq!(engine.config().strategy, FitStrategy::bspline());

        let trajectory = engine.full_gap_trajectory().unwrap();
        assert_eq!(trajectory.len(), 7);
        assert!(trajectory.is_time_ordered());
    }

    #[test]
    fn test_interpolate_out_of_range() {
        let engine = coarse_engine();
        assert!(matches!(
            engine.interpolate(&[6.5]),
            Err(ReconstructionError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_negative_zero_query_coincides_with_observation() {
        let points = vec![
            Point::node(0.0, 0.0, 0.0, 1.0),
            Point::node(1.0, 1.0, 1.0, 1.0),
            Point::pred(3.0, 3.0, 3.0, 1.0),
        ];
        let engine = TrajectoryInterpolator::new(&points).unwrap();
        let trajectory = engine.full_trajectory(&[-0.0, 2.0]).unwrap();

        let ts: Vec<f64> = trajectory.iter().map(|p| p.ts).collect();
        assert_eq!(ts, vec![0.0, 1.0, 2.0, 3.0]);
        assert!(trajectory.is_time_ordered());
        assert_eq!(trajectory.points()[0].kind, PointKind::Node);
        assert_eq!(trajectory.synthetic().count(), 1);
    }

    #[test]
    fn test_resample() {
        let engine = coarse_engine();
        let points = engine.resample(7).unwrap();
        assert_eq!(points.len(), 7);
        assert_relative_eq!(points[0].ts, 0.0);
        assert_relative_eq!(points[6].ts, 6.0);
    }
}
