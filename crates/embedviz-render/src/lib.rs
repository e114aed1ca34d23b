//! embedviz-render
//!
//! Rendering collaborator for `embedviz-core`: turns one assembled
//! [`RenderPayload`](embedviz_core::RenderPayload) into a self-contained
//! interactive HTML artifact (circle glyphs or packed-image thumbnails,
//! hover tooltips with identifier and label). Also hosts the image-corpus
//! writer used by example callers to materialize per-sample thumbnails on
//! disk.
//!
//! The artifact format is owned entirely by this crate; the core pipeline
//! never inspects it.

pub mod dataset;
mod html;

pub use html::HtmlRenderer;
