//! Self-contained HTML scatter artifact.

use std::fs;
use std::path::Path;

use tracing::debug;

use embedviz_core::{Renderer, RenderPayload, VizError, VizResult};

/// Renders the payload into one standalone HTML file.
///
/// The payload is embedded as JSON next to a small canvas script that draws
/// the glyphs (or thumbnails) and drives the hover tooltip. No network
/// access, no external assets.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    plot_width: u32,
    plot_height: u32,
    title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            plot_width: 1200,
            plot_height: 800,
            title: "embedviz".to_string(),
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plot_size(mut self, width: u32, height: u32) -> Self {
        self.plot_width = width;
        self.plot_height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, payload: &RenderPayload, output_path: &Path) -> VizResult<()> {
        let json = serde_json::to_string(payload).map_err(external)?;
        let html = TEMPLATE
            .replace("__TITLE__", &escape_html(&self.title))
            .replace("__WIDTH__", &self.plot_width.to_string())
            .replace("__HEIGHT__", &self.plot_height.to_string())
            // "</" must not appear verbatim inside a <script> block
            .replace("__PAYLOAD__", &json.replace("</", "<\\/"));

        fs::write(output_path, html).map_err(external)?;
        debug!(
            points = payload.len(),
            path = %output_path.display(),
            "wrote html artifact"
        );
        Ok(())
    }
}

fn external(err: impl std::error::Error + Send + Sync + 'static) -> VizError {
    VizError::Collaborator(Box::new(err))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>
  body { margin: 0; font-family: sans-serif; background: #ffffff; }
  #chart { display: block; margin: 0 auto; }
  #tooltip {
    display: none; position: absolute; padding: 4px 8px;
    background: rgba(0, 0, 0, 0.75); color: #fff; font-size: 12px;
    border-radius: 3px; pointer-events: none; white-space: nowrap;
  }
</style>
</head>
<body>
<canvas id="chart" width="__WIDTH__" height="__HEIGHT__"></canvas>
<div id="tooltip"></div>
<script>
const P = __PAYLOAD__;
const canvas = document.getElementById('chart');
const ctx = canvas.getContext('2d');
const W = canvas.width, H = canvas.height;

function cx(x) { return (x - P.x_range.start) / (P.x_range.end - P.x_range.start || 1) * W; }
function cy(y) { return H - (y - P.y_range.start) / (P.y_range.end - P.y_range.start || 1) * H; }

function drawMarkers() {
  for (let i = 0; i < P.x.length; i++) {
    ctx.beginPath();
    ctx.arc(cx(P.x[i]), cy(P.y[i]), P.glyphs.size / 2, 0, Math.PI * 2);
    ctx.globalAlpha = P.glyphs.fill_alpha;
    ctx.fillStyle = P.colors[i];
    ctx.fill();
    if (P.glyphs.line_width > 0) {
      ctx.globalAlpha = P.glyphs.line_alpha;
      ctx.lineWidth = P.glyphs.line_width;
      ctx.strokeStyle = P.colors[i];
      ctx.stroke();
    }
    ctx.globalAlpha = 1.0;
  }
}

function thumbnailCanvas(img) {
  const tmp = document.createElement('canvas');
  tmp.width = img.width;
  tmp.height = img.height;
  const bytes = new Uint8ClampedArray(Uint32Array.from(img.pixels).buffer);
  tmp.getContext('2d').putImageData(new ImageData(bytes, img.width, img.height), 0, 0);
  return tmp;
}

function drawThumbnails(layer) {
  for (let i = 0; i < layer.images.length; i++) {
    const tmp = thumbnailCanvas(layer.images[i]);
    const left = cx(layer.anchors_x[i]);
    const top = cy(layer.anchors_y[i] + layer.display_height);
    const w = cx(layer.anchors_x[i] + layer.display_width) - left;
    const h = cy(layer.anchors_y[i]) - top;
    // buffer rows run bottom-to-top; flip them back for the top-down canvas
    ctx.save();
    ctx.translate(left, top + h);
    ctx.scale(1, -1);
    ctx.drawImage(tmp, 0, 0, w, h);
    ctx.restore();
  }
}

drawMarkers();
if (P.images) drawThumbnails(P.images);

const tooltip = document.getElementById('tooltip');
canvas.addEventListener('mousemove', (ev) => {
  const rect = canvas.getBoundingClientRect();
  const mx = ev.clientX - rect.left, my = ev.clientY - rect.top;
  let best = -1, bestDist = Math.max(P.glyphs.size, 12);
  for (let i = 0; i < P.x.length; i++) {
    const d = Math.hypot(cx(P.x[i]) - mx, cy(P.y[i]) - my);
    if (d < bestDist) { best = i; bestDist = d; }
  }
  if (best < 0) { tooltip.style.display = 'none'; return; }
  const lines = [];
  if (P.ids) lines.push('uid: ' + P.ids[best]);
  lines.push('label: ' + P.labels[best]);
  tooltip.textContent = lines.join('   ');
  tooltip.style.left = (ev.pageX + 12) + 'px';
  tooltip.style.top = (ev.pageY + 12) + 'px';
  tooltip.style.display = 'block';
});
canvas.addEventListener('mouseleave', () => { tooltip.style.display = 'none'; });
</script>
</body>
</html>
"##;
