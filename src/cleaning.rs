//! Raw point cleaning: validation, dedup-by-overwrite and ordering.
//!
//! A repeated timestamp keeps only the point that appears *last* in input
//! order. Values are never averaged.

use tracing::debug;

use crate::error::{ReconstructionError, Result};
use crate::point::{Point, PointKind};

/// Clean a raw point collection.
///
/// Returns a new collection sorted by strictly increasing `ts`; the input is
/// left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - A point has a non-finite timestamp or coordinate
/// - A point is labelled [`PointKind::Spline`]
/// - The cleaned timestamps are not strictly increasing
///
/// # Example
///
/// ```
/// use trajectory_gapfill::{clean_points, Point};
///
/// let raw = vec![
///     Point::node(1.0, 1.0, 1.0, 1.0),
///     Point::node(0.0, 0.0, 0.0, 0.0),
///     Point::node(0.0, 9.0, 9.0, 9.0),
/// ];
/// let cleaned = clean_points(&raw)?;
/// assert_eq!(cleaned.len(), 2);
/// assert_eq!(cleaned[0].x, 9.0);
/// # Ok::<(), trajectory_gapfill::ReconstructionError>(())
/// ```
pub fn clean_points(raw: &[Point]) -> Result<Vec<Point>> {
    validate_points(raw)?;

    // Stable sort keeps input order within a run of equal timestamps,
    // so the last element of each run is the last-seen point.
    let mut sorted: Vec<Point> = raw
        .iter()
        .map(|p| Point {
            ts: canonical_ts(p.ts),
            ..*p
        })
        .collect();
    sorted.sort_by(|a, b| a.ts.total_cmp(&b.ts));

    let mut cleaned: Vec<Point> = Vec::with_capacity(sorted.len());
    for point in sorted {
        match cleaned.last_mut() {
            Some(last) if last.ts == point.ts => *last = point,
            _ => cleaned.push(point),
        }
    }

    check_strictly_increasing(&cleaned)?;

    let dropped = raw.len() - cleaned.len();
    if dropped > 0 {
        debug!(dropped, kept = cleaned.len(), "Collapsed duplicate timestamps");
    }

    Ok(cleaned)
}

/// Verify `ts[i] < ts[i + 1]` for every adjacent pair.
///
/// # Errors
///
/// Returns [`ReconstructionError::DataIntegrity`] with the index of the
/// first offending point.
pub fn check_strictly_increasing(points: &[Point]) -> Result<()> {
    match points.windows(2).position(|w| w[1].ts <= w[0].ts) {
        Some(i) => Err(ReconstructionError::data_integrity(i + 1)),
        None => Ok(()),
    }
}

fn validate_points(raw: &[Point]) -> Result<()> {
    for (i, point) in raw.iter().enumerate() {
        if !point.is_finite() {
            return Err(ReconstructionError::invalid_input(format!(
                "Non-finite value in point at index {i}"
            )));
        }
        if point.kind == PointKind::Spline {
            return Err(ReconstructionError::invalid_input(format!(
                "Point at index {i} is labelled spline; only node and pred are accepted"
            )));
        }
    }
    Ok(())
}

/// `-0.0` and `0.0` are the same timestamp.
pub(crate) fn canonical_ts(ts: f64) -> f64 {
    if ts == 0.0 {
        0.0
    } else {
        ts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_unordered_input() {
        let raw = vec![
            Point::pred(5.0, 5.0, 5.0, 0.0),
            Point::node(0.0, 0.0, 0.0, 5.0),
            Point::node(2.0, 2.0, 2.0, 3.0),
            Point::node(1.0, 1.0, 1.0, 4.0),
        ];
        let cleaned = clean_points(&raw).unwrap();
        let ts: Vec<f64> = cleaned.iter().map(|p| p.ts).collect();
        assert_eq!(ts, vec![0.0, 1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_duplicate_keeps_last_seen() {
        let raw = vec![
            Point::node(0.0, 1.0, 1.0, 1.0),
            Point::node(0.0, 2.0, 2.0, 2.0),
            Point::node(1.0, 3.0, 3.0, 3.0),
        ];
        let cleaned = clean_points(&raw).unwrap();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].position(), [2.0, 2.0, 2.0]);
        assert!(check_strictly_increasing(&cleaned).is_ok());
    }

    #[test]
    fn test_duplicate_keeps_last_seen_across_kinds() {
        // Later occurrence wins even when it changes the label
        let raw = vec![
            Point::pred(3.0, 0.0, 0.0, 0.0),
            Point::node(1.0, 0.0, 0.0, 0.0),
            Point::node(3.0, 7.0, 7.0, 7.0),
        ];
        let cleaned = clean_points(&raw).unwrap();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[1].kind, PointKind::Node);
        assert_eq!(cleaned[1].x, 7.0);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let raw = vec![Point::node(0.0, 1.0, 0.0, 0.0), Point::node(-0.0, 2.0, 0.0, 0.0)];
        let cleaned = clean_points(&raw).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].x, 2.0);
    }

    #[test]
    fn test_input_untouched() {
        let raw = vec![Point::node(1.0, 0.0, 0.0, 0.0), Point::node(0.0, 0.0, 0.0, 0.0)];
        let snapshot = raw.clone();
        let _ = clean_points(&raw).unwrap();
        assert_eq!(raw, snapshot);
    }

    #[test]
    fn test_rejects_non_finite() {
        let raw = vec![Point::node(f64::NAN, 0.0, 0.0, 0.0)];
        assert!(matches!(
            clean_points(&raw),
            Err(ReconstructionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_spline_label() {
        let raw = vec![Point::spline(0.0, [0.0, 0.0, 0.0])];
        assert!(matches!(
            clean_points(&raw),
            Err(ReconstructionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(clean_points(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_integrity_check_reports_index() {
        let points = vec![
            Point::node(0.0, 0.0, 0.0, 0.0),
            Point::node(1.0, 0.0, 0.0, 0.0),
            Point::node(1.0, 0.0, 0.0, 0.0),
        ];
        assert_eq!(
            check_strictly_increasing(&points),
            Err(ReconstructionError::DataIntegrity { index: 2 })
        );
    }
}
