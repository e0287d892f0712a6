use crate::foundation::core::{Canvas, Point};

/// Dots per row. Fixed regardless of canvas shape.
pub const COLUMNS: u32 = 15;
/// Pitch used when sizing dots against the canvas, in radii.
pub const PITCH_RADII: f64 = 3.0;
/// Center-to-center spacing of placed dots, in radii.
pub const GAP_RADII: f64 = 3.4;
/// Share of canvas width available to the columns when sizing.
pub const WIDTH_SHARE: f64 = 0.65;
/// Share of canvas height available to the rows when sizing.
pub const HEIGHT_SHARE: f64 = 0.55;
pub const SAFE_TOP_SHARE: f64 = 0.32;
pub const SAFE_BOTTOM_SHARE: f64 = 0.82;

/// Which constraint determined the dot radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusBound {
    /// Columns sized against `WIDTH_SHARE` of the canvas width.
    Width,
    /// Rows sized against `HEIGHT_SHARE` of the canvas height.
    Height,
    /// The padded grid had to shrink to fit inside the safe band.
    SafeBand,
}

/// Vertical region reserved for the grid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SafeBand {
    pub top: f64,
    pub bottom: f64,
}

impl SafeBand {
    pub fn for_canvas(canvas: Canvas) -> Self {
        let h = canvas.height_f64();
        Self {
            top: h * SAFE_TOP_SHARE,
            bottom: h * SAFE_BOTTOM_SHARE,
        }
    }

    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Top edge that centers a box of `content_height` inside the band.
    pub fn centered_top(self, content_height: f64) -> f64 {
        self.top + (self.height() - content_height) / 2.0
    }
}

/// Geometry of the dot grid. Sizes are in canvas pixels, positions are local to the grid box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
    pub dot_radius: f64,
    pub gap: f64,
    /// Extent of the dot centers.
    pub grid_width: f64,
    pub grid_height: f64,
    /// Extent including one radius of padding on every edge.
    pub svg_width: f64,
    pub svg_height: f64,
    pub bound: RadiusBound,
}

impl GridSpec {
    /// Size the grid for `total_days` dots on `canvas`.
    ///
    /// The radius starts as `min(0.65w / 45, 0.55h / (3 * rows))`, then is capped so the
    /// padded grid fits the safe band. On tall canvases the cap binds: at the default
    /// 1179×2556 the radius is about 15.29px instead of the uncapped 17.03px, so default
    /// images draw smaller dots than the uncapped formula. [`GridSpec::bound`] reports
    /// which limit won.
    pub fn compute(canvas: Canvas, total_days: u32) -> Self {
        let cols = COLUMNS;
        let rows = total_days.max(1).div_ceil(cols);

        let w = canvas.width_f64().max(1.0);
        let h = canvas.height_f64().max(1.0);
        let cols_f = f64::from(cols);
        let rows_f = f64::from(rows);

        let by_width = (w * WIDTH_SHARE) / (cols_f * PITCH_RADII);
        let by_height = (h * HEIGHT_SHARE) / (rows_f * PITCH_RADII);
        // Padded grid height is ((rows - 1) * GAP_RADII + 2) radii.
        let band_height = h * (SAFE_BOTTOM_SHARE - SAFE_TOP_SHARE);
        let by_band = band_height / ((rows_f - 1.0) * GAP_RADII + 2.0);

        let mut bound = RadiusBound::Width;
        let mut dot_radius = by_width;
        if by_height < dot_radius {
            bound = RadiusBound::Height;
            dot_radius = by_height;
        }
        if by_band < dot_radius {
            bound = RadiusBound::SafeBand;
            dot_radius = by_band;
        }

        let gap = dot_radius * GAP_RADII;
        let grid_width = (cols_f - 1.0) * gap;
        let grid_height = (rows_f - 1.0) * gap;
        let grid = Self {
            cols,
            rows,
            dot_radius,
            gap,
            grid_width,
            grid_height,
            svg_width: grid_width + dot_radius * 2.0,
            svg_height: grid_height + dot_radius * 2.0,
            bound,
        };
        debug_assert!(grid.dot_radius.is_finite() && grid.dot_radius > 0.0);
        grid
    }

    /// `(row, col)` of the zero-based cell `index`, row-major.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index / self.cols, index % self.cols)
    }

    /// Center of the zero-based cell `index`, relative to the grid box.
    pub fn center(&self, index: u32) -> Point {
        let (row, col) = self.cell(index);
        Point::new(
            self.dot_radius + f64::from(col) * self.gap,
            self.dot_radius + f64::from(row) * self.gap,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
