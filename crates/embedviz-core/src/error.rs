//! Error types for the visualization assembly pipeline.
//!
//! Every inconsistency aborts the whole visualization call at the point of
//! detection. Nothing is retried and no error is downgraded to a warning:
//! a partially-correct plot is worse than no plot.

use thiserror::Error;

use crate::types::Label;

/// Result alias used throughout the crate.
pub type VizResult<T> = Result<T, VizError>;

/// Errors raised while assembling a visualization.
#[derive(Debug, Error)]
pub enum VizError {
    /// A per-sample collection disagrees with the sample count, or a
    /// collaborator returned a different number of entries than it was given.
    #[error("shape mismatch in {collection}: expected {expected} entries, got {actual}")]
    ShapeMismatch {
        /// Name of the offending collection ("ids", "labels", "images", ...).
        collection: String,
        /// Expected entry count (the sample count N).
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },

    /// An image in the sequence has different dimensions than the first
    /// image. Placement geometry is derived from the first image, so mixed
    /// sizes would silently corrupt every anchor after the first.
    #[error(
        "image {index} is {actual_height}x{actual_width}x{actual_channels}, \
         expected {expected_height}x{expected_width}x{expected_channels} from the first image"
    )]
    ImageShapeMismatch {
        index: usize,
        expected_height: usize,
        expected_width: usize,
        expected_channels: usize,
        actual_height: usize,
        actual_width: usize,
        actual_channels: usize,
    },

    /// An image byte buffer does not hold height * width * channels values.
    #[error("pixel count mismatch: expected {expected} bytes, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// An image was declared with a channel count this pipeline cannot
    /// canonicalize to RGBA.
    #[error("unsupported channel count {channels} (expected 1, 3 or 4)")]
    UnsupportedChannels { channels: usize },

    /// An image has a zero width or height.
    #[error("empty image: {height}x{width}")]
    EmptyImage { height: usize, width: usize },

    /// A stratified quota exceeds a label's population. Sampling with
    /// replacement is never substituted silently.
    #[error("label {label} has only {available} samples, cannot draw {requested} without replacement")]
    InsufficientData {
        /// The label whose population is too small.
        label: Label,
        /// Requested draws per label.
        requested: usize,
        /// Samples actually carrying this label.
        available: usize,
    },

    /// More unique labels than distinct palette entries.
    #[error("{unique} unique labels exceed the palette capacity of {capacity}")]
    PaletteExhausted { unique: usize, capacity: usize },

    /// A numeric value fell outside its valid range.
    #[error("{field} value {value} is outside the valid range [{min}, {max}]")]
    ValueOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A color could not be parsed or an explicit color mapping does not
    /// line up with the labels it is supposed to cover.
    #[error("malformed color input {input:?}: {reason}")]
    ColorFormat { input: String, reason: String },

    /// Failure raised by an external collaborator (embedding, clustering or
    /// rendering), passed through untouched.
    #[error(transparent)]
    Collaborator(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl VizError {
    /// Shorthand for the per-sample length check used by the assembler.
    pub(crate) fn shape_mismatch(
        collection: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        VizError::ShapeMismatch {
            collection: collection.into(),
            expected,
            actual,
        }
    }
}
