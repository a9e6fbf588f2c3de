// File: src/ocr.rs
//! Text extraction from images. The engine is an external collaborator:
//! the analysis code only ever sees the string it returns.

use crate::config::Config;
use log::{info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Ways an OCR call can fail.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to run OCR engine {binary:?}")]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error talking to the OCR engine")]
    Io(#[from] std::io::Error),

    #[error("OCR engine exited with {status}: {stderr}")]
    EngineFailed { status: String, stderr: String },

    #[error("OCR engine returned invalid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub trait OcrEngine {
    /// Recognizes text in an encoded image (PNG, JPEG, ...).
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;

    fn recognize_file(&self, path: &Path) -> Result<String, OcrError> {
        let image = fs::read(path)?;
        self.recognize(&image)
    }
}

/// Runs the `tesseract` executable, feeding the image over stdin.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: PathBuf,
    tessdata_dir: Option<PathBuf>,
    language: String,
}

impl TesseractCli {
    pub fn new(config: &Config) -> Self {
        Self {
            binary: config.tesseract_bin.clone(),
            tessdata_dir: config.tessdata_dir.clone(),
            language: config.language.clone(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["stdin", "stdout", "-l"]).arg(&self.language);
        if let Some(dir) = &self.tessdata_dir {
            cmd.arg("--tessdata-dir").arg(dir);
        }
        cmd
    }

    /// The command line that `recognize` runs, for diagnostics.
    pub fn describe(&self) -> Vec<String> {
        let cmd = self.command();
        std::iter::once(cmd.get_program())
            .chain(cmd.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        info!("running {:?} on {} bytes (lang {})", self.binary, image.len(), self.language);
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OcrError::Spawn { binary: self.binary.clone(), source })?;

        // Tesseract can exit before draining stdin (missing language data).
        // Report its status ahead of the broken pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(image),
            None => Ok(()),
        };
        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("OCR engine failed: {}", stderr);
            return Err(OcrError::EngineFailed { status: output.status.to_string(), stderr });
        }
        written?;

        let text = String::from_utf8(output.stdout)?;
        // Tesseract ends its output with a form feed.
        Ok(text.trim_end().to_string())
    }
}
