// src/error.rs
use crate::ocr::OcrError;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

/// Our standard result type.
pub type Result<T, E = Error> = result::Result<T, E>;

/// Errors from the I/O edges of the crate. The analysis itself never fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error("could not access {path:?}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read or write snapshot {path:?}")]
    Snapshot {
        path: PathBuf,
        source: bincode::Error,
    },

    #[error("could not parse config {path:?}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not serialize report")]
    Json(#[from] serde_json::Error),
}
