use chrono::{DateTime, Utc};

use crate::{
    date::resolver::resolve,
    encode::png::encode_png,
    foundation::error::YearDotsResult,
    layout::plan::{DrawPlan, layout},
    render::backend::RenderBackend,
    request::RenderRequest,
};

/// An encoded image together with the plan it was drawn from.
#[derive(Clone, Debug)]
pub struct RenderedImage {
    pub plan: DrawPlan,
    pub png: Vec<u8>,
}

/// Resolve "today" for `request` at `now` and lay out the calendar. Pure.
#[tracing::instrument(level = "debug", skip(request), fields(tz = request.timezone.name()))]
pub fn plan_for(request: &RenderRequest, now: DateTime<Utc>) -> DrawPlan {
    let date = resolve(request.timezone, now);
    layout(request.canvas(), request.theme, &date)
}

/// Full request → PNG pipeline.
#[tracing::instrument(
    skip(request, backend),
    fields(w = request.width, h = request.height, tz = request.timezone.name(), theme = ?request.theme)
)]
pub fn render_png(
    request: &RenderRequest,
    now: DateTime<Utc>,
    backend: &mut dyn RenderBackend,
) -> YearDotsResult<RenderedImage> {
    let plan = plan_for(request, now);
    let frame = backend.render_plan(&plan)?;
    let png = encode_png(&frame)?;
    tracing::debug!(bytes = png.len(), "encoded png");
    Ok(RenderedImage { plan, png })
}
