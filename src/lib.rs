//! Yeardots renders "year progress" images: a 15-column dot grid with one dot per day of the
//! current year, plus a progress line and a completion line.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: raw query strings → [`RenderRequest`] (malformed values fall back to defaults)
//! 2. **Resolve**: timezone + injected instant → [`ResolvedDate`]
//! 3. **Layout**: canvas + theme + date → [`DrawPlan`] (pure, no IO)
//! 4. **Render**: [`DrawPlan`] → [`FrameRGBA`] via a [`RenderBackend`] (`resvg` on the CPU)
//! 5. **Encode**: [`FrameRGBA`] → PNG bytes
//!
//! The HTTP surface lives in [`server`]; the `yeardots` binary wraps everything in a CLI.
#![forbid(unsafe_code)]

mod config;
mod date;
mod encode;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod request;

pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use date::resolver::{
    FALLBACK_TIMEZONE, ResolvedDate, days_in_year, is_leap_year, parse_timezone, resolve,
    resolve_named,
};
pub use encode::png::{PNG_CONTENT_TYPE, encode_png};
pub use foundation::core::{Canvas, Point, Rgb8};
pub use foundation::error::{YearDotsError, YearDotsResult};
pub use layout::grid::{COLUMNS, GridSpec, RadiusBound, SafeBand};
pub use layout::palette::{ACTIVE, DotState, Palette};
pub use layout::plan::{
    DrawPlan, Dot, Primitive, TextBlock, TextRole, completion_label, layout, progress_label,
};
pub use pipeline::{RenderedImage, plan_for, render_png};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
pub use render::fonts::load_fonts;
pub use render::svg::to_svg;
pub use request::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, RawParams, RenderRequest, Theme,
};

pub use chrono_tz::Tz;
