//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, malformed grids, mismatched coordinate maps, degenerate
//! classifications, IO, and generic errors.
use thiserror::Error;

use crate::classify::Class;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error(
        "colatitude and azimuth coordinate maps do not have the same dimensions: \
         colatitude map {}x{}, azimuth map {}x{}",
        colatitude.0, colatitude.1, azimuth.0, azimuth.1
    )]
    ShapeMismatch {
        colatitude: (usize, usize),
        azimuth: (usize, usize),
    },

    #[error("no boundary points available to measure distance for {class} points")]
    DegenerateClassification { class: Class },

    #[error("classification has no boundary: every cell of the map has the same class")]
    NoBoundary,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
