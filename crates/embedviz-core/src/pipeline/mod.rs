//! The visualization assembler.
//!
//! Orchestrates everything between raw features and a render payload:
//!
//! ```text
//! features ──> Embedder ──> 2D coordinates
//!                 │
//! labels? ──(absent)──> Clusterer ──> labels
//!                 │
//!                 ▼
//!        stratified sample ──> index set
//!                 │
//!                 ▼
//!   {positions, ids, labels} projected ──> colors, axis ranges,
//!                                          packed thumbnails + anchors
//!                 │
//!                 ▼
//!           RenderPayload ──> Renderer ──> artifact on disk
//! ```
//!
//! Data flows strictly downward; every validation failure aborts the call
//! before anything is handed to the rendering collaborator.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::color::{assign_colors, ColorScheme};
use crate::error::{VizError, VizResult};
use crate::image::{normalize, ImageGrid};
use crate::sample::sample_per_label;
use crate::traits::{Clusterer, Embedder, Renderer};
use crate::types::{Embedding, FeatureMatrix, GlyphStyle, ImageLayer, Label, RenderPayload};


/// Divisor applied to the larger image dimension to obtain the coordinate
/// scale factor in thumbnail mode.
const IMAGE_SCALE_DIVISOR: f32 = 5.0;

/// Tunables of one visualization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizOptions {
    /// Clusters requested from the clustering collaborator when the caller
    /// supplies no labels.
    pub cluster_count: usize,
    /// Points drawn per label; `None` draws every point.
    pub quota_per_label: Option<usize>,
    /// Constant alpha written into every thumbnail pixel; `None` keeps the
    /// source transparency (opaque for sources without an alpha channel).
    pub image_alpha: Option<u8>,
    /// How label colors are chosen.
    pub scheme: ColorScheme,
    /// Seed for the sampling and color draws. Identical seeds, inputs and
    /// quotas reproduce identical index and color assignments.
    pub seed: u64,
}

impl Default for VizOptions {
    fn default() -> Self {
        Self {
            cluster_count: 10,
            quota_per_label: None,
            image_alpha: None,
            scheme: ColorScheme::default(),
            seed: 0,
        }
    }
}

impl VizOptions {
    pub fn with_cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    pub fn with_quota_per_label(mut self, quota: usize) -> Self {
        self.quota_per_label = Some(quota);
        self
    }

    pub fn with_image_alpha(mut self, alpha: u8) -> Self {
        self.image_alpha = Some(alpha);
        self
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate parameters that have no meaningful degenerate reading.
    pub fn validate(&self) -> VizResult<()> {
        if self.cluster_count == 0 {
            return Err(VizError::ValueOutOfRange {
                field: "cluster_count",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            });
        }
        Ok(())
    }
}

/// Input of one visualization call.
///
/// Every optional collection must hold exactly one entry per feature row;
/// the assembler rejects anything else before invoking a collaborator.
#[derive(Debug, Clone)]
pub struct VizInput {
    pub features: FeatureMatrix,
    /// Opaque display identifiers, duplicates permitted.
    pub ids: Option<Vec<String>>,
    /// Per-sample labels; derived by the clustering collaborator when absent.
    pub labels: Option<Vec<Label>>,
    /// Per-sample thumbnails; all must share the first image's shape.
    pub images: Option<Vec<ImageGrid>>,
}

impl VizInput {
    pub fn new(features: FeatureMatrix) -> Self {
        Self {
            features,
            ids: None,
            labels: None,
            images: None,
        }
    }

    pub fn with_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_images(mut self, images: Vec<ImageGrid>) -> Self {
        self.images = Some(images);
        self
    }
}

/// The visualization assembler.
///
/// Generic over the two computing collaborators; the renderer is passed per
/// call so one assembled pipeline can target different backends.
#[derive(Debug, Clone)]
pub struct Pipeline<E, C> {
    embedder: E,
    clusterer: C,
    options: VizOptions,
}

impl<E: Embedder, C: Clusterer> Pipeline<E, C> {
    pub fn new(embedder: E, clusterer: C) -> Self {
        Self {
            embedder,
            clusterer,
            options: VizOptions::default(),
        }
    }

    pub fn with_options(mut self, options: VizOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &VizOptions {
        &self.options
    }

    /// Assemble the complete render payload for `input`.
    ///
    /// Returns the payload together with the full (scaled, unsampled)
    /// embedding, which callers often want for further analysis.
    ///
    /// # Errors
    ///
    /// Any shape inconsistency, sampling shortfall, palette exhaustion or
    /// collaborator failure aborts the call; see [`VizError`].
    #[instrument(skip_all, fields(samples = input.features.rows()))]
    pub fn assemble(&self, input: &VizInput) -> VizResult<(RenderPayload, Embedding)> {
        self.options.validate()?;
        let n = input.features.rows();

        // Per-sample collections must agree with N before any collaborator
        // runs.
        if let Some(ids) = &input.ids {
            if ids.len() != n {
                return Err(VizError::shape_mismatch("ids", n, ids.len()));
            }
        }
        if let Some(labels) = &input.labels {
            if labels.len() != n {
                return Err(VizError::shape_mismatch("labels", n, labels.len()));
            }
        }
        let first_image_dims = match &input.images {
            Some(images) => {
                if images.len() != n {
                    return Err(VizError::shape_mismatch("images", n, images.len()));
                }
                validate_uniform_images(images)?
            }
            None => None,
        };

        let raw = self.embedder.embed(&input.features)?;
        if raw.len() != n {
            return Err(VizError::shape_mismatch("embedding", n, raw.len()));
        }

        // Thumbnail mode blows the coordinates up so images drawn in data
        // units do not pile on top of each other; the markers shrink to
        // invisible hover hosts.
        let (embedding, glyphs) = match first_image_dims {
            Some((h, w)) => {
                let scale = h.max(w) as f32 / IMAGE_SCALE_DIVISOR;
                (raw.scaled(scale), GlyphStyle::hover_host(h.min(w) as u32))
            }
            None => (raw, GlyphStyle::circles()),
        };

        let labels: Vec<Label> = match &input.labels {
            Some(labels) => labels.clone(),
            None => {
                let derived = self
                    .clusterer
                    .cluster(&input.features, self.options.cluster_count)?;
                if derived.len() != n {
                    return Err(VizError::shape_mismatch("cluster labels", n, derived.len()));
                }
                derived
            }
        };

        // One RNG for the whole call: the sampler draws first, the color
        // assigner second. Keeping the order fixed keeps runs reproducible.
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let indices = sample_per_label(&labels, self.options.quota_per_label, &mut rng)?;

        let selected = embedding.project(&indices);
        let selected_labels: Vec<Label> = indices.iter().map(|&i| labels[i]).collect();
        let selected_ids = input
            .ids
            .as_ref()
            .map(|ids| indices.iter().map(|&i| ids[i].clone()).collect());

        let assignment = assign_colors(&selected_labels, &self.options.scheme, &mut rng)?;
        let colors = assignment.per_point_hex();

        // Axis framing comes from the full coordinate extremes, not the
        // sampled subset, so changing the quota never reframes the chart.
        let (x_range, y_range) = embedding.axis_ranges();

        let images = match (&input.images, first_image_dims) {
            (Some(images), Some((h, w))) => Some(pack_thumbnails(
                images,
                &indices,
                &selected,
                (h, w),
                self.options.image_alpha,
            )),
            _ => None,
        };

        debug!(
            selected = indices.len(),
            unique_labels = assignment.by_label().len(),
            thumbnails = images.is_some(),
            "assembled render payload"
        );

        let payload = RenderPayload {
            x: selected.xs(),
            y: selected.ys(),
            colors,
            ids: selected_ids,
            labels: selected_labels,
            glyphs,
            x_range,
            y_range,
            images,
        };
        Ok((payload, embedding))
    }

    /// Assemble and hand the payload to the rendering collaborator.
    ///
    /// Returns the full (scaled, unsampled) embedding. The payload reaches
    /// the renderer only after every validation and computation step has
    /// succeeded; there are no partial artifacts.
    #[instrument(skip_all, fields(output = %output_path.display()))]
    pub fn run<R: Renderer>(
        &self,
        input: &VizInput,
        renderer: &R,
        output_path: &Path,
    ) -> VizResult<Embedding> {
        let (payload, embedding) = self.assemble(input)?;
        renderer.render(&payload, output_path)?;
        Ok(embedding)
    }
}

/// Check every image against the first one's shape.
///
/// Returns the shared (height, width), or `None` for an empty sequence.
/// Heterogeneous sizes are rejected outright: placement geometry is derived
/// from the first image and would silently corrupt for every other size.
fn validate_uniform_images(images: &[ImageGrid]) -> VizResult<Option<(usize, usize)>> {
    let Some(first) = images.first() else {
        return Ok(None);
    };
    for (index, image) in images.iter().enumerate().skip(1) {
        if image.dims() != first.dims() || image.channels() != first.channels() {
            return Err(VizError::ImageShapeMismatch {
                index,
                expected_height: first.height(),
                expected_width: first.width(),
                expected_channels: first.channels().count(),
                actual_height: image.height(),
                actual_width: image.width(),
                actual_channels: image.channels().count(),
            });
        }
    }
    Ok(Some(first.dims()))
}

/// Normalize every selected thumbnail and anchor it centered on its point.
fn pack_thumbnails(
    images: &[ImageGrid],
    indices: &[usize],
    selected: &Embedding,
    (height, width): (usize, usize),
    alpha: Option<u8>,
) -> ImageLayer {
    // Thumbnails are drawn at half their pixel size in data units; the
    // anchor is the bottom-left corner, offset so the image centers on the
    // point.
    let display_width = width as f32 / 2.0;
    let display_height = height as f32 / 2.0;

    let mut packed = Vec::with_capacity(indices.len());
    let mut anchors_x = Vec::with_capacity(indices.len());
    let mut anchors_y = Vec::with_capacity(indices.len());
    for (k, &i) in indices.iter().enumerate() {
        packed.push(normalize(&images[i], alpha, true));
        let [x, y] = selected.points()[k];
        anchors_x.push(x - display_width / 2.0);
        anchors_y.push(y - display_height / 2.0);
    }

    ImageLayer {
        images: packed,
        anchors_x,
        anchors_y,
        display_width,
        display_height,
    }
}
