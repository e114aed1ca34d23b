//! Image-corpus materialization for example callers.
//!
//! Lazily builds an on-disk thumbnail corpus (one PNG per sample) when one
//! does not exist yet. Out of core-pipeline scope: the assembler itself
//! never touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage, RgbaImage};
use tracing::debug;

use embedviz_core::{Channels, ImageGrid, VizError, VizResult};

/// Write one `<id>.png` per sample into `dir`, creating it if needed.
///
/// Returns the written paths in input order.
///
/// # Errors
///
/// - `ShapeMismatch` when `ids` and `images` disagree in length.
/// - `Collaborator` for any filesystem or encoding failure.
pub fn write_image_corpus(
    dir: &Path,
    ids: &[String],
    images: &[ImageGrid],
) -> VizResult<Vec<PathBuf>> {
    if ids.len() != images.len() {
        return Err(VizError::ShapeMismatch {
            collection: "ids".to_string(),
            expected: images.len(),
            actual: ids.len(),
        });
    }

    fs::create_dir_all(dir).map_err(external)?;

    let mut paths = Vec::with_capacity(ids.len());
    for (id, grid) in ids.iter().zip(images) {
        let path = dir.join(format!("{id}.png"));
        encode_png(grid, &path)?;
        paths.push(path);
    }

    debug!(count = paths.len(), dir = %dir.display(), "materialized image corpus");
    Ok(paths)
}

fn encode_png(grid: &ImageGrid, path: &Path) -> VizResult<()> {
    let (h, w) = (grid.height() as u32, grid.width() as u32);
    let data = grid.data().to_vec();
    match grid.channels() {
        Channels::Gray => GrayImage::from_raw(w, h, data)
            .ok_or_else(|| buffer_mismatch(grid))?
            .save(path)
            .map_err(external),
        Channels::Rgb => RgbImage::from_raw(w, h, data)
            .ok_or_else(|| buffer_mismatch(grid))?
            .save(path)
            .map_err(external),
        Channels::Rgba => RgbaImage::from_raw(w, h, data)
            .ok_or_else(|| buffer_mismatch(grid))?
            .save(path)
            .map_err(external),
    }
}

fn buffer_mismatch(grid: &ImageGrid) -> VizError {
    VizError::PixelCountMismatch {
        expected: grid.height() * grid.width() * grid.channels().count(),
        actual: grid.data().len(),
    }
}

fn external(err: impl std::error::Error + Send + Sync + 'static) -> VizError {
    VizError::Collaborator(Box::new(err))
}
