// File: crates/skychart-core/src/error.rs
// Summary: Error type for contract violations at the pipeline edges.

use thiserror::Error;

/// Failures the caller is expected to prevent or surface.
///
/// Empty data, flat ranges and out-of-bounds pointers are not errors: the
/// pipeline degrades to `None`/empty output for those.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Timestamp axis and value array of one raw series disagree in length.
    #[error("series {series}: {timestamps} timestamps but {values} values")]
    LengthMismatch {
        series: &'static str,
        timestamps: usize,
        values: usize,
    },

    #[error("geometry {width}x{height} leaves no plot area with padding {padding}")]
    DegenerateGeometry { width: f64, height: f64, padding: f64 },

    #[error("unparseable timestamp '{value}'")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid chart settings: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
