use std::borrow::Cow;

use anyhow::Context as _;
use image::{ExtendedColorType, ImageEncoder as _, codecs::png::PngEncoder};

use crate::{
    foundation::error::{YearDotsError, YearDotsResult},
    render::backend::{FrameRGBA, demultiply},
};

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Encode a frame as PNG, converting premultiplied pixels to straight alpha first.
pub fn encode_png(frame: &FrameRGBA) -> YearDotsResult<Vec<u8>> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(YearDotsError::encode(format!(
            "frame buffer is {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let pixels = straight_alpha(frame);
    let mut out = Vec::with_capacity(expected / 8);
    PngEncoder::new(&mut out)
        .write_image(&pixels, frame.width, frame.height, ExtendedColorType::Rgba8)
        .context("encode png")?;
    Ok(out)
}

/// Straight-alpha view of the frame. Opaque pixels read the same either way,
/// so fully opaque frames are borrowed as-is.
fn straight_alpha(frame: &FrameRGBA) -> Cow<'_, [u8]> {
    if !frame.premultiplied || frame.data.chunks_exact(4).all(|px| px[3] == u8::MAX) {
        return Cow::Borrowed(&frame.data);
    }
    Cow::Owned(
        frame
            .data
            .chunks_exact(4)
            .flat_map(|px| demultiply([px[0], px[1], px[2], px[3]]))
            .collect(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
