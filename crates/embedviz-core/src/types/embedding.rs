//! 2D embedding coordinates.

use serde::{Deserialize, Serialize};

use super::payload::AxisRange;

/// Fraction of the coordinate extremes added as margin on each side of the
/// visible chart range.
const AXIS_MARGIN: f32 = 0.10;

/// One 2D coordinate per sample, in sample order.
///
/// Owned exclusively by the assembler once the embedding collaborator has
/// produced it. Transformations never mutate in place: [`scaled`](Self::scaled)
/// and [`project`](Self::project) return new coordinate arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding(Vec<[f32; 2]>);

impl Embedding {
    pub fn new(points: Vec<[f32; 2]>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[[f32; 2]] {
        &self.0
    }

    /// All x coordinates, in order.
    pub fn xs(&self) -> Vec<f32> {
        self.0.iter().map(|p| p[0]).collect()
    }

    /// All y coordinates, in order.
    pub fn ys(&self) -> Vec<f32> {
        self.0.iter().map(|p| p[1]).collect()
    }

    /// A new embedding with every coordinate multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self(self.0.iter().map(|[x, y]| [x * factor, y * factor]).collect())
    }

    /// A new embedding holding `indices` in the given order.
    ///
    /// # Panics
    ///
    /// Panics when an index is out of range; the sampler only ever produces
    /// indices in `[0, len)`.
    #[must_use]
    pub fn project(&self, indices: &[usize]) -> Self {
        Self(indices.iter().map(|&i| self.0[i]).collect())
    }

    /// Visible chart range for both axes, each padded as
    /// `[min - 10% * |min|, max + 10% * max]`.
    ///
    /// Always derived from the full unsampled coordinates so the framing
    /// stays stable regardless of how many points end up drawn.
    pub fn axis_ranges(&self) -> (AxisRange, AxisRange) {
        (self.axis_range(0), self.axis_range(1))
    }

    fn axis_range(&self, axis: usize) -> AxisRange {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for p in &self.0 {
            min = min.min(p[axis]);
            max = max.max(p[axis]);
        }
        if self.0.is_empty() {
            return AxisRange { start: 0.0, end: 0.0 };
        }
        AxisRange {
            start: min - AXIS_MARGIN * min.abs(),
            end: max + AXIS_MARGIN * max,
        }
    }
}

impl From<Vec<[f32; 2]>> for Embedding {
    fn from(points: Vec<[f32; 2]>) -> Self {
        Self::new(points)
    }
}
