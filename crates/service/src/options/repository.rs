use crate::errors::ServiceError;
use async_trait::async_trait;
use models::options::{OptionLists, OptionListsPatch};

/// Trait abstraction for the shared options lists storage.
/// Implementations can be file-backed, database-backed, or remote KV.
#[async_trait]
pub trait OptionsRepository: Send + Sync {
    /// Current lists; falls back to built-in defaults when no document
    /// has been stored.
    async fn get(&self) -> Result<OptionLists, ServiceError>;

    /// Merge a partial update into the stored document and return the
    /// full merged result.
    async fn update(&self, patch: OptionListsPatch) -> Result<OptionLists, ServiceError>;
}
