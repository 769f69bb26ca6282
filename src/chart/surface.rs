//! Chart surface seam and render errors.

use thiserror::Error;

use super::options::ChartOptions;

/// Reasons a render pass could not complete. None of them are fatal.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Charting backend is not loaded
    #[error("Charting library unavailable")]
    LibraryUnavailable,

    /// Target element is not mounted
    #[error("Chart target not found: {0}")]
    TargetMissing(String),

    /// Surface failed to write the chart
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart definition could not be encoded for the surface
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

/// A rendering target for chart definitions
pub trait ChartSurface: Send {
    /// Whether the charting backend is loaded
    fn library_available(&self) -> bool;

    /// Whether the element identified by `target` is mounted
    fn has_target(&self, target: &str) -> bool;

    /// Remove whatever chart is currently drawn on `target`
    fn clear(&mut self, target: &str) -> Result<(), RenderError>;

    /// Draw `options` onto `target`
    fn draw(&mut self, target: &str, options: &ChartOptions) -> Result<(), RenderError>;
}
