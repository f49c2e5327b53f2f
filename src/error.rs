use thiserror::Error;

/// Errors surfaced by the paint engine to its collaborators.
///
/// Drawing itself never fails: geometry outside the canvas is clipped. These
/// cover construction, selection from untrusted names, and export.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("stroke width must be at least 1 pixel")]
    InvalidStrokeWidth,

    #[error("undo is not available")]
    UndoUnavailable,

    #[error("failed to export image: {0}")]
    Export(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type PaintResult<T> = Result<T, PaintError>;
