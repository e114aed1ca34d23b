//! Thumbnail-mode demo: procedural 16x16 grayscale discs whose radius
//! encodes the class, visualized as image thumbnails centered on their
//! embedded coordinates. Also materializes the PNG corpus on disk the way
//! a real image dataset would be.
//!
//! Run with: `cargo run -p embedviz-render --example thumbnails`

use std::fs;
use std::path::Path;

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use embedviz_core::stubs::{StubClusterer, StubEmbedder};
use embedviz_core::{FeatureMatrix, ImageGrid, Label, Pipeline, VizInput, VizOptions};
use embedviz_render::{dataset, HtmlRenderer};

const CLASSES: usize = 3;
const SAMPLES_PER_CLASS: usize = 40;
const SIDE: usize = 16;

/// A noisy filled disc; larger classes get larger radii.
fn disc(rng: &mut ChaCha8Rng, class: usize) -> Result<ImageGrid> {
    let radius = 2.5 + class as f32 * 1.8;
    let center = SIDE as f32 / 2.0;
    let mut data = Vec::with_capacity(SIDE * SIDE);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let d = ((x as f32 - center).powi(2) + (y as f32 - center).powi(2)).sqrt();
            let base: u8 = if d < radius { 220 } else { 30 };
            data.push(base + rng.gen_range(0..30) as u8);
        }
    }
    Ok(ImageGrid::gray(SIDE, SIDE, data)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut images = Vec::new();
    let mut rows = Vec::new();
    let mut ids = Vec::new();
    let mut labels: Vec<Label> = Vec::new();
    for class in 0..CLASSES {
        for s in 0..SAMPLES_PER_CLASS {
            let img = disc(&mut rng, class)?;
            // raw pixel intensities double as the feature vector
            rows.push(img.data().iter().map(|&b| f32::from(b) / 255.0).collect());
            ids.push(format!("disc{class}-{s}"));
            labels.push(class as Label);
            images.push(img);
        }
    }

    fs::create_dir_all("outputs")?;
    dataset::write_image_corpus(Path::new("outputs/discs"), &ids, &images)?;

    let input = VizInput::new(FeatureMatrix::from_rows(rows)?)
        .with_ids(ids)
        .with_labels(labels)
        .with_images(images);

    let options = VizOptions::default()
        .with_quota_per_label(25)
        .with_image_alpha(190)
        .with_seed(42);
    let pipeline = Pipeline::new(StubEmbedder::new(7), StubClusterer).with_options(options);

    let out = Path::new("outputs/thumbnails.html");
    let renderer = HtmlRenderer::new().with_title("disc thumbnails");
    let embedding = pipeline.run(&input, &renderer, out)?;

    println!("wrote {} ({} samples embedded)", out.display(), embedding.len());
    Ok(())
}
