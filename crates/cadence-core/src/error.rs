// File: crates/cadence-core/src/error.rs
// Summary: Error type shared by construction, updates, rendering and surface export.

use thiserror::Error;

use crate::series::SeriesId;

pub type ChartResult<T> = Result<T, ChartError>;

/// Broad category of a [`ChartError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input handed to construction or `update`; nothing was mutated.
    Configuration,
    /// A series could not be drawn; the current redraw pass stopped.
    Render,
    /// Encoding or writing the rendered surface failed.
    Output,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no series provided")]
    NoSeries,

    #[error("series need at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("series lengths do not match: expected {expected}, series `{label}` has {found}")]
    LengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate series id {0}")]
    DuplicateSeriesId(SeriesId),

    #[error("no series ids left to assign")]
    IdsExhausted,

    #[error("unknown series id {0}")]
    UnknownSeries(SeriesId),

    #[error("cannot create a {width}x{height} drawing surface")]
    InvalidSurface { width: i32, height: i32 },

    #[error("no color given for series `{0}`")]
    MissingColor(String),

    #[error("invalid type given for series: {0}")]
    InvalidKind(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("failed to encode surface as {0}")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::NoSeries
            | ChartError::TooFewPoints(_)
            | ChartError::LengthMismatch { .. }
            | ChartError::DuplicateSeriesId(_)
            | ChartError::IdsExhausted
            | ChartError::UnknownSeries(_)
            | ChartError::InvalidSurface { .. } => ErrorKind::Configuration,
            ChartError::MissingColor(_) | ChartError::InvalidKind(_) | ChartError::InvalidColor(_) => {
                ErrorKind::Render
            }
            ChartError::Encode(_) | ChartError::Io(_) => ErrorKind::Output,
        }
    }
}
