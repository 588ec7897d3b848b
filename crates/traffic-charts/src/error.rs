// File: crates/traffic-charts/src/error.rs
// Summary: Error type shared by table lookups, aggregation and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A named column was requested that the table does not carry.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// Two collections that must line up (labels vs columns, column vs rows) do not.
    #[error("shape mismatch: expected {expected} entries, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading surface pixels failed")]
    ReadPixels,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
