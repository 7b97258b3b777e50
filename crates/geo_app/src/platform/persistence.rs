use std::fs;
use std::path::{Path, PathBuf};

use geo_core::{PaidFlagStorage, StorageError};
use geo_engine::AtomicFileWriter;
use geo_logging::geo_debug;
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = ".geo_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    paid: bool,
}

/// Paid flag kept in `{dir}/.geo_session.ron`. The logical `paid` key
/// (`"1"` paid, `"0"` or absent free) is stored as the RON record
/// `(paid: true)` / `(paid: false)`; a missing file reads as free.
pub(crate) struct FilePaidStorage {
    dir: PathBuf,
}

impl FilePaidStorage {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(STATE_FILENAME)
    }
}

impl PaidFlagStorage for FilePaidStorage {
    fn load(&self) -> Result<bool, StorageError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(StorageError::Io(err)),
        };

        let session: PersistedSession = ron::from_str(&content)
            .map_err(|err| StorageError::Malformed(format!("{}: {err}", display(&path))))?;
        geo_debug!("Loaded paid={} from {:?}", session.paid, path);
        Ok(session.paid)
    }

    fn store(&mut self, paid: bool) -> Result<(), StorageError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&PersistedSession { paid }, pretty)
            .map_err(|err| StorageError::Malformed(err.to_string()))?;

        AtomicFileWriter::new(self.dir.clone())
            .write(STATE_FILENAME, &content)
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        Ok(())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_free() {
        let temp = TempDir::new().unwrap();
        let storage = FilePaidStorage::new(temp.path());
        assert!(!storage.load().unwrap());
    }

    #[test]
    fn stored_flag_round_trips_through_file() {
        let temp = TempDir::new().unwrap();
        let mut storage = FilePaidStorage::new(temp.path());

        storage.store(true).unwrap();
        assert!(FilePaidStorage::new(temp.path()).load().unwrap());

        storage.store(false).unwrap();
        assert!(!storage.load().unwrap());
    }

    #[test]
    fn paid_key_is_written_as_ron_record() {
        let temp = TempDir::new().unwrap();
        let mut storage = FilePaidStorage::new(temp.path());

        storage.store(true).unwrap();
        let content = fs::read_to_string(temp.path().join(STATE_FILENAME)).unwrap();
        assert!(content.contains("paid: true"), "{content}");

        fs::write(temp.path().join(STATE_FILENAME), "(paid: false)").unwrap();
        assert!(!storage.load().unwrap());
    }

    #[test]
    fn garbage_file_is_reported_as_malformed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STATE_FILENAME), "paid = yes please").unwrap();

        let err = FilePaidStorage::new(temp.path()).load().unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
    }
}
