use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use tokio::sync::Semaphore;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::{
    config::{DEFAULT_MAX_RENDERS, ServerConfig},
    encode::png::PNG_CONTENT_TYPE,
    foundation::error::YearDotsError,
    pipeline::render_png,
    render::{
        backend::{BackendKind, RenderSettings, create_backend},
        fonts::load_fonts,
    },
    request::{RawParams, RenderRequest},
};

/// Source of "now" for each request.
pub type Clock = fn() -> DateTime<Utc>;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub fonts: Arc<usvg::fontdb::Database>,
    pub clock: Clock,
    /// Slots for in-flight renders; image requests queue once these run out.
    render_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(fonts: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            fonts,
            clock: Utc::now,
            render_slots: Arc::new(Semaphore::new(DEFAULT_MAX_RENDERS)),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(load_fonts(config.font_dir.as_deref())).with_max_renders(config.max_renders)
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Allow at most `max` renders at once (at least one).
    pub fn with_max_renders(mut self, max: usize) -> Self {
        self.render_slots = Arc::new(Semaphore::new(max.max(1)));
        self
    }
}

pub fn router(state: AppState) -> Router {
    let render_limit =
        GlobalConcurrencyLimitLayer::with_semaphore(Arc::clone(&state.render_slots));
    Router::new()
        .route("/", get(year_progress).layer(render_limit))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn year_progress(
    State(state): State<AppState>,
    Query(raw): Query<RawParams>,
) -> Result<Response, ServerError> {
    let request = RenderRequest::from_raw(&raw);
    let now = (state.clock)();

    let rendered = tokio::task::spawn_blocking(move || {
        let settings = RenderSettings {
            fonts: Some(state.fonts),
        };
        let mut backend = create_backend(BackendKind::Cpu, &settings)?;
        render_png(&request, now, backend.as_mut())
    })
    .await
    .map_err(|e| ServerError::Join(e.to_string()))??;

    Ok((
        [
            (header::CONTENT_TYPE, PNG_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        rendered.png,
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Render(#[from] YearDotsError),

    #[error("render task failed: {0}")]
    Join(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to render year progress");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to render image").into_response()
    }
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = router(AppState::from_config(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(max_renders = config.max_renders, "listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/server.rs"]
mod tests;
