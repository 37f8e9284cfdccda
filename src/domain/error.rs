use thiserror::Error;

/// Errors reported by [`Engine`](super::Engine) operations.
///
/// None of these leave the grid half-modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Width or height of zero.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordinate outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Preset name not in the catalog. The grid has already been cleared.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),
}
