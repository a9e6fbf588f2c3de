// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod ocr;
pub mod persistence;
pub mod report;

pub use crate::config::Config;
pub use crate::core::engine::{AnalysisEngine, AnalysisReport};
pub use crate::error::{Error, Result};

use crate::ocr::OcrEngine;

/// Image in, tables out. `correct` stands in for the user editing the
/// recognized text before it is analyzed.
pub fn extract_and_analyze<F>(
    ocr: &dyn OcrEngine,
    image: &[u8],
    correct: F,
) -> Result<(String, AnalysisReport)>
where
    F: FnOnce(String) -> String,
{
    let recognized = ocr.recognize(image)?;
    let text = correct(recognized);
    let report = AnalysisEngine::new().analyze(&text);
    Ok((text, report))
}
