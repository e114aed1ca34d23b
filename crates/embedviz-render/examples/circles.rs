//! Marker-mode demo: four synthetic Gaussian-ish blobs in 8 dimensions,
//! reduced to 2D and drawn as semi-transparent circles with hover tooltips.
//!
//! Run with: `cargo run -p embedviz-render --example circles`

use std::fs;
use std::path::Path;

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use embedviz_core::stubs::{StubClusterer, StubEmbedder};
use embedviz_core::{FeatureMatrix, Pipeline, VizInput, VizOptions};
use embedviz_render::HtmlRenderer;

const BLOBS: usize = 4;
const SAMPLES_PER_BLOB: usize = 60;
const DIMS: usize = 8;

fn blobs(seed: u64) -> Result<(FeatureMatrix, Vec<String>)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centers: Vec<Vec<f32>> = (0..BLOBS)
        .map(|_| (0..DIMS).map(|_| rng.gen_range(-10.0f32..10.0)).collect())
        .collect();

    let mut rows = Vec::with_capacity(BLOBS * SAMPLES_PER_BLOB);
    let mut ids = Vec::with_capacity(BLOBS * SAMPLES_PER_BLOB);
    for (b, center) in centers.iter().enumerate() {
        for s in 0..SAMPLES_PER_BLOB {
            rows.push(
                center
                    .iter()
                    .map(|c| c + rng.gen_range(-1.5f32..1.5))
                    .collect(),
            );
            ids.push(format!("blob{b}-{s}"));
        }
    }
    Ok((FeatureMatrix::from_rows(rows)?, ids))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (features, ids) = blobs(17)?;
    let input = VizInput::new(features).with_ids(ids);

    let options = VizOptions::default()
        .with_cluster_count(BLOBS)
        .with_quota_per_label(40)
        .with_seed(42);
    let pipeline = Pipeline::new(StubEmbedder::new(7), StubClusterer).with_options(options);

    fs::create_dir_all("outputs")?;
    let out = Path::new("outputs/circles.html");
    let renderer = HtmlRenderer::new().with_title("blob scatter");
    let embedding = pipeline.run(&input, &renderer, out)?;

    println!("wrote {} ({} samples embedded)", out.display(), embedding.len());
    Ok(())
}
