use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::modules::storage::application::ports::outgoing::{
    DocumentKey, DocumentStore, DocumentStoreError,
};

/// Stores each document as `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    data_dir: PathBuf,
}

impl FsDocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: DocumentKey) -> PathBuf {
        self.data_dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn read(&self, key: DocumentKey) -> Result<Option<Value>, DocumentStoreError> {
        let path = self.path_for(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DocumentStoreError::Unavailable(format!(
                    "reading {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| DocumentStoreError::Malformed {
                key,
                message: e.to_string(),
            })
    }

    async fn write(&self, key: DocumentKey, document: Value) -> Result<(), DocumentStoreError> {
        let path = self.path_for(key);

        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            DocumentStoreError::Unavailable(format!(
                "creating {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        // Readers must never observe a half-written document.
        let tmp = self
            .data_dir
            .join(format!(".{}.{}.tmp", key.as_str(), Uuid::new_v4()));

        if let Err(e) = fs::write(&tmp, &bytes).await {
            return Err(DocumentStoreError::Unavailable(format!(
                "writing {}: {}",
                tmp.display(),
                e
            )));
        }

        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(DocumentStoreError::Unavailable(format!(
                "replacing {}: {}",
                path.display(),
                e
            )));
        }

        debug!(key = %key, bytes = bytes.len(), "document written");
        Ok(())
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            DocumentStoreError::Unavailable(format!(
                "data dir {} unusable: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let meta = fs::metadata(&self.data_dir)
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        if meta.is_dir() {
            Ok(())
        } else {
            Err(DocumentStoreError::Unavailable(format!(
                "{} is not a directory",
                self.data_dir.display()
            )))
        }
    }
}
