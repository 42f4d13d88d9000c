//! Partitioning of cleaned points into observed segments, and the gap
//! between them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ReconstructionError, Result};
use crate::point::{Point, PointKind};

/// Cleaned points split by provenance, relative order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segments {
    /// Leading observed segment.
    pub nodes: Vec<Point>,
    /// Trailing observed segment.
    pub preds: Vec<Point>,
}

impl Segments {
    /// Partition points by kind. Empty segments are not an error here.
    #[must_use]
    pub fn classify(points: &[Point]) -> Self {
        let (nodes, preds) = points
            .iter()
            .copied()
            .filter(|p| p.kind.is_observed())
            .partition(|p| p.kind == PointKind::Node);
        Self { nodes, preds }
    }

    /// Gap between the last node and the first pred.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::Precondition`] naming the empty
    /// segment when either side has no points.
    pub fn gap(&self) -> Result<Gap> {
        let last_node = self
            .nodes
            .last()
            .ok_or_else(|| ReconstructionError::missing_segment(PointKind::Node))?;
        let first_pred = self
            .preds
            .first()
            .ok_or_else(|| ReconstructionError::missing_segment(PointKind::Pred))?;
        Ok(Gap {
            start: last_node.ts,
            end: first_pred.ts,
        })
    }
}

/// Closed interval `[start, end]` with no observations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gap {
    /// Last node timestamp.
    pub start: f64,
    /// First pred timestamp.
    pub end: f64,
}

impl Gap {
    /// Whether there is any time between the segments.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.start < self.end
    }

    /// Length of the gap, zero when the segments touch or overlap.
    #[must_use]
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}
