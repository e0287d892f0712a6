use chrono_tz::Tz;

use crate::{
    date::resolver::{FALLBACK_TIMEZONE, parse_timezone},
    foundation::core::Canvas,
};

pub const DEFAULT_WIDTH: u32 = 1179;
pub const DEFAULT_HEIGHT: u32 = 2556;
/// Upper bound for either side of the canvas.
pub const MAX_DIMENSION: u32 = 4096;

/// Color scheme of the rendered calendar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only the exact string `light` selects the light theme.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

/// Query parameters as received, before any validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RawParams {
    pub w: Option<String>,
    pub h: Option<String>,
    pub tz: Option<String>,
    pub theme: Option<String>,
}

/// A fully normalized render request. Every field is valid by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub timezone: Tz,
    pub theme: Theme,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            timezone: FALLBACK_TIMEZONE,
            theme: Theme::Dark,
        }
    }
}

impl RenderRequest {
    /// Normalize raw parameters. Anything malformed falls back to its default.
    pub fn from_raw(raw: &RawParams) -> Self {
        Self {
            width: parse_dimension(raw.w.as_deref(), DEFAULT_WIDTH),
            height: parse_dimension(raw.h.as_deref(), DEFAULT_HEIGHT),
            timezone: raw
                .tz
                .as_deref()
                .map_or(FALLBACK_TIMEZONE, parse_timezone),
            theme: raw
                .theme
                .as_deref()
                .map_or(Theme::Dark, Theme::parse_lenient),
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

fn parse_dimension(raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    let Ok(v) = raw.trim().parse::<f64>() else {
        return default;
    };
    if !v.is_finite() {
        return default;
    }
    let v = v.round();
    if v < 1.0 {
        return default;
    }
    if v > f64::from(MAX_DIMENSION) {
        tracing::debug!(requested = v, max = MAX_DIMENSION, "clamping canvas dimension");
        return MAX_DIMENSION;
    }
    v as u32
}

#[cfg(test)]
#[path = "../tests/unit/request.rs"]
mod tests;
