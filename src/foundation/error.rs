/// Result alias used across the crate.
pub type YearDotsResult<T> = Result<T, YearDotsError>;

/// Errors surfaced by the rendering and encoding stages.
///
/// The layout core never fails: malformed input is normalized before any geometry runs.
/// Only the outer stages (SVG parsing, rasterization, PNG encoding) can produce these.
#[derive(thiserror::Error, Debug)]
pub enum YearDotsError {
    /// The renderer could not rasterize a plan.
    #[error("render error: {0}")]
    Render(String),

    /// The rendered frame could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Any other failure, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl YearDotsError {
    /// Build a [`YearDotsError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`YearDotsError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
