// File: src/persistence.rs
use crate::core::engine::AnalysisReport;
use crate::error::{Error, Result};
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Snapshot layout version, stored ahead of the report.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(serde::Serialize, serde::Deserialize)]
struct Snapshot {
    version: u32,
    text: String,
    report: AnalysisReport,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io { path: path.to_path_buf(), source }
}

fn snapshot_error(path: &Path) -> impl FnOnce(bincode::Error) -> Error + '_ {
    move |source| Error::Snapshot { path: path.to_path_buf(), source }
}

/// Saves the analyzed text with its report. The file is written to a
/// temporary sibling first and renamed into place.
pub fn save_to_disk(text: &str, report: &AnalysisReport, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(io_error(parent_dir))?;

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        text: text.to_string(),
        report: report.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_error(parent_dir))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot).map_err(snapshot_error(path))?;
        writer.flush().map_err(io_error(path))?;
    }

    temp_file.persist(path).map_err(|e| io_error(path)(e.error))?;
    info!("saved analysis snapshot to {:?}", path);
    Ok(())
}

/// Loads a snapshot written by [`save_to_disk`], returning the text and report.
pub fn load_from_disk(path: &Path) -> Result<(String, AnalysisReport)> {
    let file = File::open(path).map_err(io_error(path))?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = bincode::deserialize_from(reader).map_err(snapshot_error(path))?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(Error::Snapshot {
            path: path.to_path_buf(),
            source: Box::new(bincode::ErrorKind::Custom(format!(
                "unsupported snapshot version {}",
                snapshot.version
            ))),
        });
    }
    Ok((snapshot.text, snapshot.report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::AnalysisEngine;

    #[test]
    fn snapshot_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.bin");
        let text = "నమస్కారం పుస్తకం పుస్తకం";
        let report = AnalysisEngine::new().analyze(text);

        save_to_disk(text, &report, &path).unwrap();
        let (loaded_text, loaded) = load_from_disk(&path).unwrap();
        assert_eq!(loaded_text, text);
        assert_eq!(loaded, report);
    }

    #[test]
    fn overwriting_replaces_the_old_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.bin");
        let engine = AnalysisEngine::new();
        save_to_disk("సీత", &engine.analyze("సీత"), &path).unwrap();
        save_to_disk("రాముడు", &engine.analyze("రాముడు"), &path).unwrap();
        let (text, report) = load_from_disk(&path).unwrap();
        assert_eq!(text, "రాముడు");
        assert_eq!(report.frequency.words[0].word, "రాముడు");
    }

    #[test]
    fn garbage_is_a_snapshot_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.bin");
        fs::write(&path, b"\x07").unwrap();
        assert!(matches!(load_from_disk(&path), Err(Error::Snapshot { .. })));
    }

    #[test]
    fn missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_from_disk(&dir.path().join("none.bin")), Err(Error::Io { .. })));
    }
}
