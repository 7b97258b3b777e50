use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use geo_logging::geo_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::csv::CsvExport;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("target directory missing or not writable: {0}")]
    TargetDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure `dir` exists and is a directory; create it if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::TargetDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::TargetDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::TargetDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file and a rename, so readers
/// never observe a half-written file.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// Saves an export under its own filename in `dir`.
pub fn write_csv_export(dir: &Path, export: &CsvExport) -> Result<PathBuf, PersistError> {
    let path = AtomicFileWriter::new(dir).write(&export.filename, &export.content)?;
    geo_info!(
        "Wrote {} ({} bytes, {}) to {:?}",
        export.filename,
        export.content.len(),
        export.mime_type,
        path
    );
    Ok(path)
}
