//! Error types for colormap construction and value mapping.

use thiserror::Error;

/// Errors reported by table construction and value mapping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("a colormap table needs at least 2 entries, got {0}")]
    InvalidTableSize(usize),

    #[error("degenerate value range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    #[error("value at index {index} is NaN")]
    NotANumber { index: usize },

    #[error("cannot derive a value range from an empty batch")]
    EmptyBatch,

    #[error("unknown colormap “{0}”")]
    UnknownColormap(String),
}

/// Result type alias for colormap operations.
pub type Result<T> = std::result::Result<T, Error>;
