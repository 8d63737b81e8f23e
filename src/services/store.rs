use crate::models::ProviderRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

/// Errors that can occur while loading the provider dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset {path} contains no provider records")]
    EmptyDataset { path: PathBuf },
}

/// In-memory record store over the static provider dataset.
///
/// The dataset is deserialized at most once per store, lazily, behind a
/// `OnceCell`: concurrent first callers share a single load, a successful
/// load is immutable for the rest of the process, and a failed load leaves
/// the cell empty so only a later explicit call retries.
pub struct ProviderStore {
    path: PathBuf,
    records: OnceCell<Vec<ProviderRecord>>,
}

impl ProviderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: OnceCell::new(),
        }
    }

    /// Load the dataset if it has not been loaded yet. Idempotent; a second
    /// call on a loaded store is a no-op.
    pub async fn initialize(&self) -> Result<(), LoadError> {
        self.loaded().await.map(|_| ())
    }

    /// A working copy of the full record set, loading lazily on first use.
    pub async fn get_all(&self) -> Result<Vec<ProviderRecord>, LoadError> {
        self.loaded().await.map(|records| records.to_vec())
    }

    /// Number of loaded records, if the store has been initialized.
    pub fn record_count(&self) -> Option<usize> {
        self.records.get().map(Vec::len)
    }

    async fn loaded(&self) -> Result<&[ProviderRecord], LoadError> {
        self.records
            .get_or_try_init(|| load_dataset(&self.path))
            .await
            .map(Vec::as_slice)
    }
}

async fn load_dataset(path: &Path) -> Result<Vec<ProviderRecord>, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<ProviderRecord> =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(LoadError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    info!(count = records.len(), path = %path.display(), "provider store initialized");

    Ok(records)
}
