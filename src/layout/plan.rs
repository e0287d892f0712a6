use crate::{
    date::resolver::ResolvedDate,
    foundation::core::{Canvas, Point, Rgb8},
    layout::{
        grid::{GridSpec, SafeBand},
        palette::{DotState, Palette},
    },
    request::Theme,
};

/// Progress text offset below the grid, in dot radii.
pub const PROGRESS_OFFSET_RADII: f64 = 5.0;
/// Completion text offset below the grid, in dot radii.
pub const COMPLETION_OFFSET_RADII: f64 = 10.0;
pub const PROGRESS_FONT_SHARE: f64 = 0.038;
pub const COMPLETION_FONT_SHARE: f64 = 0.028;

/// One day of the year. `center` is relative to the grid box, see [`DrawPlan::origin`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Dot {
    pub day: u32,
    pub center: Point,
    pub radius: f64,
    pub state: DotState,
    pub fill: Rgb8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Progress,
    Completion,
}

/// A single line of text, horizontally centered on `center_x`, whose top edge sits at `top`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextBlock {
    pub role: TextRole,
    pub content: String,
    pub center_x: f64,
    pub top: f64,
    pub font_size: u32,
    pub color: Rgb8,
}

/// Renderer-facing primitive in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive<'a> {
    Circle {
        day: u32,
        center: Point,
        radius: f64,
        fill: Rgb8,
    },
    Text(&'a TextBlock),
}

/// Everything needed to draw one year-progress image.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DrawPlan {
    pub canvas: Canvas,
    pub theme: Theme,
    pub background: Rgb8,
    pub grid: GridSpec,
    /// Top-left corner of the grid box on the canvas.
    pub origin: Point,
    /// Row-major, one entry per day of the year.
    pub dots: Vec<Dot>,
    /// Progress line first, then completion line.
    pub texts: Vec<TextBlock>,
}

impl DrawPlan {
    /// All circles, then all texts, in canvas coordinates.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> + '_ {
        let origin = self.origin.to_vec2();
        let circles = self.dots.iter().map(move |d| Primitive::Circle {
            day: d.day,
            center: d.center + origin,
            radius: d.radius,
            fill: d.fill,
        });
        circles.chain(self.texts.iter().map(Primitive::Text))
    }

    pub fn count(&self, state: DotState) -> usize {
        self.dots.iter().filter(|d| d.state == state).count()
    }

    pub fn text(&self, role: TextRole) -> Option<&TextBlock> {
        self.texts.iter().find(|t| t.role == role)
    }
}

pub fn progress_label(date: &ResolvedDate) -> String {
    format!("{} / {} days", date.day_of_year, date.total_days)
}

pub fn completion_label(date: &ResolvedDate) -> String {
    format!(
        "{:.1}% complete ({} days left)",
        date.percent(),
        date.days_left()
    )
}

/// Lay out the dot calendar for `date` on `canvas`.
#[tracing::instrument(
    level = "debug",
    skip(date),
    fields(year = date.year, day = date.day_of_year, total = date.total_days)
)]
pub fn layout(canvas: Canvas, theme: Theme, date: &ResolvedDate) -> DrawPlan {
    let palette = Palette::for_theme(theme);
    let grid = GridSpec::compute(canvas, date.total_days);

    let dots: Vec<Dot> = (1..=date.total_days)
        .map(|day| {
            let state = DotState::classify(day, date.day_of_year);
            Dot {
                day,
                center: grid.center(day - 1),
                radius: grid.dot_radius,
                state,
                fill: palette.fill(state),
            }
        })
        .collect();

    let band = SafeBand::for_canvas(canvas);
    let grid_top = band.centered_top(grid.svg_height);
    let grid_left = (canvas.width_f64() - grid.svg_width) / 2.0;
    let grid_bottom = grid_top + grid.svg_height;
    let center_x = canvas.width_f64() / 2.0;

    let texts = vec![
        TextBlock {
            role: TextRole::Progress,
            content: progress_label(date),
            center_x,
            top: grid_bottom + grid.dot_radius * PROGRESS_OFFSET_RADII,
            font_size: font_size(canvas, PROGRESS_FONT_SHARE),
            color: palette.passed,
        },
        TextBlock {
            role: TextRole::Completion,
            content: completion_label(date),
            center_x,
            top: grid_bottom + grid.dot_radius * COMPLETION_OFFSET_RADII,
            font_size: font_size(canvas, COMPLETION_FONT_SHARE),
            color: palette.active,
        },
    ];

    let plan = DrawPlan {
        canvas,
        theme,
        background: palette.background,
        grid,
        origin: Point::new(grid_left, grid_top),
        dots,
        texts,
    };

    debug_assert_eq!(plan.count(DotState::Active), 1);
    debug_assert_eq!(
        plan.count(DotState::Passed),
        (date.day_of_year - 1) as usize
    );
    debug_assert_eq!(plan.count(DotState::Pending), date.days_left() as usize);
    tracing::debug!(
        radius = grid.dot_radius,
        bound = ?grid.bound,
        grid_top,
        "laid out year grid"
    );
    plan
}

fn font_size(canvas: Canvas, share: f64) -> u32 {
    ((canvas.width_f64() * share).round() as u32).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
