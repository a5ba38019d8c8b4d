use std::{path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};
use tracing::warn;

use crate::errors::ServiceError;

/// Generic JSON file-backed single-document store.
///
/// Persists one `T` to a JSON file and provides read/replace/update
/// helpers. Intended for lightweight configuration/state where a database
/// is overkill. The whole document is rewritten on every mutation;
/// concurrent writers from other processes are last-writer-wins.
#[derive(Clone, Debug)]
pub struct JsonDocStore<T> {
    inner: Arc<RwLock<Option<T>>>,
    file_path: PathBuf,
}

impl<T> JsonDocStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store from a path. A missing file leaves the document
    /// unset; an unparseable file is logged and treated the same, so
    /// reads can fall back to defaults instead of failing. Any other
    /// read error (permissions, path is a directory) is a storage error:
    /// existing state must never be mistaken for an empty store.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let doc: Option<T> = match fs::read(&file_path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "corrupt document ignored, treating as absent");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(ServiceError::Storage(format!("cannot read {}: {}", file_path.display(), e))),
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(doc)), file_path }))
    }

    async fn persist(&self, doc: &T) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(doc).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Current document, if any.
    pub async fn get(&self) -> Option<T> {
        let doc = self.inner.read().await;
        doc.clone()
    }

    /// Whether a document has been set (or loaded from disk).
    pub async fn is_set(&self) -> bool {
        let doc = self.inner.read().await;
        doc.is_some()
    }

    /// Replace the document: persist first, commit to memory only once
    /// the write succeeded. A failed write leaves reads unchanged.
    pub async fn set(&self, value: T) -> Result<(), ServiceError> {
        let mut doc = self.inner.write().await;
        self.persist(&value).await?;
        *doc = Some(value);
        Ok(())
    }

    /// Apply a mutation to a staged copy of the document slot, persist
    /// it, and commit to memory only once the write succeeded.
    pub async fn update<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut Option<T>) -> Result<(), ServiceError>,
    {
        let mut doc = self.inner.write().await;
        let mut staged = doc.clone();
        f(&mut staged)?;
        if let Some(value) = staged.as_ref() {
            self.persist(value).await?;
        }
        *doc = staged;
        Ok(())
    }
}
