//! End-to-end artifact tests: pipeline output through the HTML renderer and
//! the image-corpus writer, against a temporary directory.

use embedviz_core::stubs::{StubClusterer, StubEmbedder};
use embedviz_core::{
    FeatureMatrix, ImageGrid, Pipeline, Renderer, VizError, VizInput, VizOptions,
};
use embedviz_render::{dataset, HtmlRenderer};
use tempfile::tempdir;

fn features(n: usize, dims: usize) -> FeatureMatrix {
    let rows = (0..n)
        .map(|i| (0..dims).map(|d| ((i * 13 + d * 5) % 89) as f32).collect())
        .collect();
    FeatureMatrix::from_rows(rows).unwrap()
}

fn gray_images(n: usize) -> Vec<ImageGrid> {
    (0..n)
        .map(|i| ImageGrid::gray(8, 8, vec![(i * 17 % 256) as u8; 64]).unwrap())
        .collect()
}

#[test]
fn test_html_artifact_embeds_payload() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("scatter.html");

    let pipeline = Pipeline::new(StubEmbedder::new(3), StubClusterer).with_options(
        VizOptions::default()
            .with_cluster_count(3)
            .with_quota_per_label(4)
            .with_seed(11),
    );
    let input = VizInput::new(features(30, 5))
        .with_ids((0..30).map(|i| format!("s{i}")).collect());

    let renderer = HtmlRenderer::new().with_title("blob scatter");
    pipeline.run(&input, &renderer, &out).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<canvas"));
    assert!(html.contains("blob scatter"));
    assert!(html.contains("\"colors\""));
    assert!(html.contains("\"x_range\""));
    // 12 selected points, each with an id
    assert!(html.contains("\"ids\""));
    assert!(html.contains("s0") || html.contains("s1"));
}

#[test]
fn test_html_artifact_with_thumbnails() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("thumbs.html");

    let pipeline = Pipeline::new(StubEmbedder::default(), StubClusterer)
        .with_options(VizOptions::default().with_image_alpha(190).with_seed(2));
    let input = VizInput::new(features(6, 4))
        .with_labels(vec![0, 0, 1, 1, 2, 2])
        .with_images(gray_images(6));

    pipeline.run(&input, &HtmlRenderer::new(), &out).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("\"images\""));
    assert!(html.contains("\"display_width\""));
    assert!(html.contains("\"pixels\""));
}

#[test]
fn test_renderer_reports_io_failures() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("no-such-subdir").join("scatter.html");

    let pipeline = Pipeline::new(StubEmbedder::default(), StubClusterer);
    let err = pipeline
        .run(&VizInput::new(features(4, 2)), &HtmlRenderer::new(), &out)
        .unwrap_err();
    assert!(matches!(err, VizError::Collaborator(_)));
}

#[test]
fn test_render_trait_object_direct_call() {
    // the renderer also works standalone, outside the pipeline
    let dir = tempdir().unwrap();
    let out = dir.path().join("direct.html");

    let pipeline = Pipeline::new(StubEmbedder::default(), StubClusterer);
    let (payload, _) = pipeline.assemble(&VizInput::new(features(5, 3))).unwrap();

    let renderer: &dyn Renderer = &HtmlRenderer::new();
    renderer.render(&payload, &out).unwrap();
    assert!(out.exists());
}

#[test]
fn test_corpus_writer_emits_one_png_per_sample() {
    let dir = tempdir().unwrap();
    let corpus = dir.path().join("images");
    let ids: Vec<String> = vec!["a".into(), "b".into(), "c".into()];

    let paths = dataset::write_image_corpus(&corpus, &ids, &gray_images(3)).unwrap();
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.exists()));
    assert_eq!(paths[1], corpus.join("b.png"));

    // idempotent over an existing directory
    dataset::write_image_corpus(&corpus, &ids, &gray_images(3)).unwrap();
}

#[test]
fn test_corpus_writer_length_mismatch() {
    let dir = tempdir().unwrap();
    let ids: Vec<String> = vec!["a".into()];
    let err = dataset::write_image_corpus(dir.path(), &ids, &gray_images(2)).unwrap_err();
    assert!(matches!(
        err,
        VizError::ShapeMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}
