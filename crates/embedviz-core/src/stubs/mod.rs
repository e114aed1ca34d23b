//! Deterministic collaborator stubs for tests and demos.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`. These exist so
//! the pipeline can be exercised without a real dimensionality reducer,
//! clusterer or chart engine, and are not suitable for production use.
//!
//! - [`StubEmbedder`]: seeded random projection onto two fixed axes.
//! - [`StubClusterer`]: round-robin label assignment (sample `i` gets label
//!   `i % cluster_count`), giving exactly balanced clusters.
//! - [`FailingEmbedder`] / [`FailingClusterer`]: always return a
//!   collaborator error, for failure-propagation and
//!   validation-ordering tests.
//! - [`RecordingRenderer`]: captures the payload and path instead of
//!   drawing anything.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{VizError, VizResult};
use crate::traits::{Clusterer, Embedder, Renderer};
use crate::types::{Embedding, FeatureMatrix, Label, RenderPayload};

/// Projects each feature vector onto two axes drawn from a seeded RNG.
///
/// Deterministic for a fixed seed and feature dimensionality; nearby inputs
/// land nearby, which is all the tests and demos need.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    seed: u64,
}

impl StubEmbedder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new(0x5eed)
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, features: &FeatureMatrix) -> VizResult<Embedding> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let dims = features.dims();
        let axis_x: Vec<f32> = (0..dims).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
        let axis_y: Vec<f32> = (0..dims).map(|_| rng.gen_range(-1.0f32..1.0)).collect();

        let dot = |row: &[f32], axis: &[f32]| -> f32 {
            row.iter().zip(axis).map(|(a, b)| a * b).sum()
        };

        let points = (0..features.rows())
            .map(|i| {
                let row = features.row(i);
                [dot(row, &axis_x), dot(row, &axis_y)]
            })
            .collect();
        Ok(Embedding::new(points))
    }
}

/// Assigns label `i % cluster_count` to sample `i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubClusterer;

impl Clusterer for StubClusterer {
    fn cluster(&self, features: &FeatureMatrix, cluster_count: usize) -> VizResult<Vec<Label>> {
        Ok((0..features.rows())
            .map(|i| (i % cluster_count.max(1)) as Label)
            .collect())
    }
}

/// Always fails with a collaborator error.
#[derive(Debug, Clone)]
pub struct FailingEmbedder {
    pub message: String,
}

impl FailingEmbedder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Embedder for FailingEmbedder {
    fn embed(&self, _features: &FeatureMatrix) -> VizResult<Embedding> {
        Err(VizError::Collaborator(self.message.clone().into()))
    }
}

/// Always fails with a collaborator error.
#[derive(Debug, Clone)]
pub struct FailingClusterer {
    pub message: String,
}

impl FailingClusterer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Clusterer for FailingClusterer {
    fn cluster(&self, _features: &FeatureMatrix, _cluster_count: usize) -> VizResult<Vec<Label>> {
        Err(VizError::Collaborator(self.message.clone().into()))
    }
}

/// Captures the payload and output path instead of rendering.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    captured: Mutex<Option<(RenderPayload, PathBuf)>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last captured payload and path, if any.
    pub fn take(&self) -> Option<(RenderPayload, PathBuf)> {
        self.captured.lock().expect("renderer mutex poisoned").take()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, payload: &RenderPayload, output_path: &Path) -> VizResult<()> {
        *self.captured.lock().expect("renderer mutex poisoned") =
            Some((payload.clone(), output_path.to_path_buf()));
        Ok(())
    }
}
