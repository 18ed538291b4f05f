//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid feature counts and rectangle extents, invalid configuration, drawing adapter
//! rejections, mismatched mode tags, unknown identifiers, IO, and generic errors.
use thiserror::Error;

use crate::feature::Mode;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid feature count: {0}")]
    InvalidCount(String),

    #[error("invalid rectangle extent {width} x {height}: both sides must be finite and >= 0")]
    InvalidExtent { width: f64, height: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("feature '{id}' already exists")]
    DuplicateFeature { id: String },

    #[error("unknown mapping library '{id}'")]
    UnknownLibrary { id: String },

    #[error("feature '{id}' is tagged '{mode}' but has a {geometry} geometry")]
    ModeMismatch {
        id: String,
        mode: Mode,
        geometry: Mode,
    },

    #[error("unknown geometry mode '{id}'")]
    UnknownMode { id: String },

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
