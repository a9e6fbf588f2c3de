// src/config.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tesseract's language code for Telugu.
pub const TELUGU_LANGUAGE: &str = "tel";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

/// Settings read once at startup and handed to whatever needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The `tesseract` executable, looked up on `PATH` when relative.
    pub tesseract_bin: PathBuf,
    /// Passed as `--tessdata-dir` instead of setting `TESSDATA_PREFIX`.
    pub tessdata_dir: Option<PathBuf>,
    pub language: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tesseract_bin: PathBuf::from("tesseract"),
            tessdata_dir: None,
            language: TELUGU_LANGUAGE.to_string(),
            format: OutputFormat::Tsv,
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
