use std::sync::Arc;

use anyhow::Context as _;
use resvg::tiny_skia;

use crate::{
    foundation::error::{YearDotsError, YearDotsResult},
    layout::plan::DrawPlan,
    render::{
        backend::{FrameRGBA, RenderBackend, RenderSettings},
        fonts::load_fonts,
        svg::to_svg,
    },
};

/// Rasterizes plans through `usvg` + `resvg` into a `tiny_skia` pixmap.
pub struct CpuBackend {
    fonts: Arc<usvg::fontdb::Database>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        let fonts = settings.fonts.unwrap_or_else(|| load_fonts(None));
        Self { fonts }
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &DrawPlan) -> YearDotsResult<FrameRGBA> {
        let width = plan.canvas.width;
        let height = plan.canvas.height;

        let svg = to_svg(plan);
        let mut opts = usvg::Options::default();
        opts.fontdb = Arc::clone(&self.fonts);
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse plan svg")?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            YearDotsError::render(format!("cannot allocate {width}x{height} pixmap"))
        })?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
