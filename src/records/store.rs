use super::types::StudentRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to bring the store up. There is no recovery path: the server
/// refuses to start.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read student data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed student data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable, ordered snapshot of every student record.
///
/// Order is the order of the backing file and is what search results are
/// sorted by.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Reads and parses the JSON array at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<StudentRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded {} student records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Read-only view in store order.
    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
