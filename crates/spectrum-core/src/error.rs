// File: crates/spectrum-core/src/error.rs
// Summary: Error type shared by the widget, the host binding and chart engines.

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// The container reference did not resolve to a mount point.
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    /// Width or height is not a positive pixel count.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: i32, height: i32 },

    /// The host refused to attach the drawing surface.
    #[error("failed to attach surface: {0}")]
    Attach(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Failure inside the rendering pipeline of a chart engine.
    #[error(transparent)]
    Render(#[from] anyhow::Error),
}
