//! The render payload handed to the rendering collaborator.
//!
//! Ephemeral: assembled once per visualization call, consumed by the
//! renderer, then dropped. Serializable so renderers can embed it verbatim
//! in their output artifact.

use serde::{Deserialize, Serialize};

use crate::image::PackedImage;
use crate::types::Label;

/// Visible coordinate range of one chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f32,
    pub end: f32,
}

/// Visual styling of the point markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphStyle {
    /// Marker fill opacity in [0, 1].
    pub fill_alpha: f32,
    /// Marker outline opacity in [0, 1].
    pub line_alpha: f32,
    /// Marker outline width in pixels.
    pub line_width: f32,
    /// Marker size in pixels.
    pub size: u32,
}

impl GlyphStyle {
    /// Semi-transparent circles used when no thumbnails are drawn.
    pub fn circles() -> Self {
        Self {
            fill_alpha: 0.35,
            line_alpha: 0.9,
            line_width: 2.0,
            size: 12,
        }
    }

    /// Fully transparent markers that only host hover interactions while
    /// thumbnails are the visible layer.
    pub fn hover_host(size: u32) -> Self {
        Self {
            fill_alpha: 0.0,
            line_alpha: 0.0,
            line_width: 0.0,
            size,
        }
    }

    /// True when the markers are invisible (thumbnail mode).
    pub fn is_invisible(&self) -> bool {
        self.fill_alpha == 0.0 && self.line_alpha == 0.0
    }
}

/// Thumbnail layer drawn on top of the (invisible) markers.
///
/// `images[k]` belongs to the k-th selected point and is anchored with its
/// bottom-left corner at `(anchors_x[k], anchors_y[k])`, spanning
/// `display_width` x `display_height` data units so it is centered on the
/// point itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    pub images: Vec<PackedImage>,
    pub anchors_x: Vec<f32>,
    pub anchors_y: Vec<f32>,
    pub display_width: f32,
    pub display_height: f32,
}

/// Everything a renderer needs to draw one chart.
///
/// All per-point vectors run over the *selected* subset, in sample-index-set
/// order. The hover tooltip shows `ids[k]` (when identifiers were supplied)
/// and `labels[k]` for the glyph under the cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    /// One `#rrggbb` string per selected point.
    pub colors: Vec<String>,
    /// Hover identifiers; `None` when the caller supplied none.
    pub ids: Option<Vec<String>>,
    /// Label per selected point (supplied or cluster-derived).
    pub labels: Vec<Label>,
    pub glyphs: GlyphStyle,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Present only in thumbnail mode.
    pub images: Option<ImageLayer>,
}

impl RenderPayload {
    /// Number of points to draw.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
