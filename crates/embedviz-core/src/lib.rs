//! embedviz-core
//!
//! Assembly pipeline for interactive 2D visualizations of high-dimensional
//! data. Takes a feature matrix, reduces it to two coordinates through an
//! external embedding collaborator, colors and samples the points per label
//! (supplied or derived by an external clustering collaborator), converts
//! optional thumbnails into renderer-ready packed pixel buffers, and hands
//! one complete [`RenderPayload`] to an external rendering collaborator.
//!
//! # Architecture
//!
//! This crate defines:
//! - Core types ([`FeatureMatrix`], [`Embedding`], [`RenderPayload`], ...)
//! - Collaborator seams ([`Embedder`], [`Clusterer`], [`Renderer`])
//! - The assembler itself ([`Pipeline`], [`VizOptions`], [`VizInput`])
//! - Error taxonomy ([`VizError`], [`VizResult`])
//!
//! Everything is synchronous and CPU-bound. The only shared mutable state
//! is a `ChaCha8Rng` seeded from [`VizOptions::seed`], so identical seeds
//! and inputs reproduce identical samplings and color assignments.
//!
//! # Example
//!
//! ```ignore
//! use embedviz_core::{FeatureMatrix, Pipeline, VizInput, VizOptions};
//!
//! let features = FeatureMatrix::from_rows(rows)?;
//! let pipeline = Pipeline::new(my_embedder, my_clusterer)
//!     .with_options(VizOptions::default().with_quota_per_label(25).with_seed(42));
//! let embedding = pipeline.run(&VizInput::new(features), &my_renderer, path)?;
//! ```

pub mod color;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod sample;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod stubs;

// Re-exports for convenience
pub use color::{
    assign_colors, hex_to_rgb, rgb_to_hex, rgb_to_hex_batch, ColorAssignment, ColorScheme, Rgb,
    TABLEAU20,
};
pub use error::{VizError, VizResult};
pub use image::{normalize, Channels, ImageGrid, PackedImage};
pub use pipeline::{Pipeline, VizInput, VizOptions};
pub use sample::sample_per_label;
pub use traits::{Clusterer, Embedder, Renderer};
pub use types::{
    AxisRange, Embedding, FeatureMatrix, GlyphStyle, ImageLayer, Label, RenderPayload,
};
