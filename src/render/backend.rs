use std::sync::Arc;

use crate::{foundation::error::YearDotsResult, layout::plan::DrawPlan};

/// A rendered image as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        let px = [px[0], px[1], px[2], px[3]];
        Some(if self.premultiplied {
            demultiply(px)
        } else {
            px
        })
    }
}

pub(crate) fn demultiply(px: [u8; 4]) -> [u8; 4] {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| (((u16::from(c) * 255) + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

/// Something that can rasterize a [`DrawPlan`].
pub trait RenderBackend {
    fn render_plan(&mut self, plan: &DrawPlan) -> YearDotsResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU rasterizer powered by `resvg`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Default)]
pub struct RenderSettings {
    /// Fonts used for the summary text. When unset, the backend loads system fonts.
    pub fonts: Option<Arc<usvg::fontdb::Database>>,
}

impl std::fmt::Debug for RenderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSettings")
            .field("font_faces", &self.fonts.as_ref().map(|db| db.len()))
            .finish()
    }
}

pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> YearDotsResult<Box<dyn RenderBackend + Send>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
