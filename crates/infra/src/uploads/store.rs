use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;

use super::types::{StoredUpload, UploadEntry, UploadError, is_plain_file_name, sanitize_file_name};

/// Destination for accepted upload bytes.
#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    /// Persist `bytes` under a timestamped name derived from `original_name`.
    async fn save(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError>;

    /// Stored files, ordered by name (oldest timestamp first).
    async fn list(&self) -> Result<Vec<UploadEntry>, UploadError>;

    /// Remove one stored file by its stored name.
    async fn remove(&self, file_name: &str) -> Result<(), UploadError>;
}

#[async_trait::async_trait]
impl<S> UploadStore for Arc<S>
where
    S: UploadStore + ?Sized,
{
    async fn save(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        (**self).save(original_name, content_type, bytes).await
    }

    async fn list(&self) -> Result<Vec<UploadEntry>, UploadError> {
        (**self).list().await
    }

    async fn remove(&self, file_name: &str) -> Result<(), UploadError> {
        (**self).remove(file_name).await
    }
}

/// Writes uploads into a single flat directory as `<unix-millis>-<name>`.
///
/// The directory is created on first write. Two uploads with the same name in
/// the same millisecond overwrite each other.
#[derive(Debug, Clone)]
pub struct FsUploadStore {
    root: PathBuf,
}

impl FsUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Stored name for an upload received at `now`.
    pub fn stored_name(original_name: &str, now: DateTime<Utc>) -> Result<String, UploadError> {
        let safe = sanitize_file_name(original_name)?;
        Ok(format!("{}-{}", now.timestamp_millis(), safe))
    }

    fn path_for(&self, file_name: &str) -> Result<PathBuf, UploadError> {
        if !is_plain_file_name(file_name) {
            return Err(UploadError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }
}

#[async_trait::async_trait]
impl UploadStore for FsUploadStore {
    async fn save(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let file_name = Self::stored_name(original_name, Utc::now())?;
        let path = self.path_for(&file_name)?;

        tokio::fs::create_dir_all(&self.root).await?;
        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "upload written");

        Ok(StoredUpload {
            file_name,
            file_size: bytes.len() as u64,
            file_type: content_type.to_string(),
        })
    }

    async fn list(&self) -> Result<Vec<UploadEntry>, UploadError> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(d) => d,
            // Nothing uploaded yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let meta = entry.metadata().await?;
            if !meta.is_file() {
                continue;
            }
            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };
            entries.push(UploadEntry {
                file_name,
                file_size: meta.len(),
            });
        }
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    async fn remove(&self, file_name: &str) -> Result<(), UploadError> {
        let path = self.path_for(file_name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(UploadError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
