//! Collaborator seams the assembly pipeline depends on.
//!
//! The pipeline orchestrates three external concerns it deliberately does
//! not implement: dimensionality reduction, clustering and chart rendering.
//! Each is a trait so callers plug in whatever implementation fits; any
//! failure they raise crosses the seam untouched as
//! [`VizError::Collaborator`](crate::VizError::Collaborator).

use std::path::Path;

use crate::error::VizResult;
use crate::types::{Embedding, FeatureMatrix, Label, RenderPayload};

/// Dimensionality reduction: features in, one 2D coordinate per sample out.
///
/// Implementations may carry their own hyperparameters; those are not part
/// of this contract. The pipeline never retries a failed call and validates
/// only that the output length equals the input sample count.
pub trait Embedder {
    fn embed(&self, features: &FeatureMatrix) -> VizResult<Embedding>;
}

/// Clustering: one discrete label per sample, invoked only when the caller
/// supplied no labels of their own.
pub trait Clusterer {
    fn cluster(&self, features: &FeatureMatrix, cluster_count: usize) -> VizResult<Vec<Label>>;
}

/// Chart rendering: consumes one complete [`RenderPayload`] and persists a
/// visual artifact at `output_path`. The pipeline neither inspects nor
/// validates the artifact; its format belongs to the renderer.
pub trait Renderer {
    fn render(&self, payload: &RenderPayload, output_path: &Path) -> VizResult<()>;
}
