use std::sync::Arc;

use async_trait::async_trait;
use models::options::{OptionLists, OptionListsPatch};
use tracing::info;

use crate::errors::ServiceError;
use crate::options::repository::OptionsRepository;
use crate::storage::json_doc_store::JsonDocStore;

/// File-backed store for the three shared dropdown lists, persisted as a
/// single JSON document.
///
/// Seeding is an explicit startup step (`initialize_if_absent`), not a
/// hidden side effect of the read path; `get` on an unseeded or corrupt
/// store simply answers with the built-in defaults.
#[derive(Clone)]
pub struct OptionsStore {
    store: Arc<JsonDocStore<OptionLists>>,
}

impl OptionsStore {
    /// Open the store from the given file path.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::<OptionLists>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Seed the document with built-in defaults if nothing is stored yet.
    pub async fn initialize_if_absent(&self) -> Result<(), ServiceError> {
        if !self.store.is_set().await {
            info!("options store empty, seeding built-in defaults");
            self.store.set(OptionLists::defaults()).await?;
        }
        Ok(())
    }

    /// Current lists, or built-in defaults when the document is unset.
    pub async fn get(&self) -> Result<OptionLists, ServiceError> {
        Ok(self.store.get().await.unwrap_or_else(OptionLists::defaults))
    }

    /// Read-merge-write: sanitize each field present in the patch,
    /// replace it in the stored document, persist, and return the merged
    /// result. Fields absent from the patch are untouched.
    pub async fn update(&self, patch: OptionListsPatch) -> Result<OptionLists, ServiceError> {
        let mut merged: Option<OptionLists> = None;
        self.store
            .update(|doc| {
                let mut lists = doc.clone().unwrap_or_else(OptionLists::defaults);
                lists.apply(patch);
                merged = Some(lists.clone());
                *doc = Some(lists);
                Ok(())
            })
            .await?;
        Ok(merged.expect("merged set"))
    }
}

#[async_trait]
impl OptionsRepository for OptionsStore {
    async fn get(&self) -> Result<OptionLists, ServiceError> { self.get().await }
    async fn update(&self, patch: OptionListsPatch) -> Result<OptionLists, ServiceError> { self.update(patch).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tmp_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("options_store_{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn fresh_store_seeds_defaults_once() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = OptionsStore::open(&tmp).await?;
        store.initialize_if_absent().await?;
        assert_eq!(store.get().await?, OptionLists::defaults());

        // reload from disk: identical data, no re-seeding
        let reloaded = OptionsStore::open(&tmp).await?;
        assert_eq!(reloaded.get().await?, OptionLists::defaults());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields_unchanged() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = OptionsStore::open(&tmp).await?;
        store.initialize_if_absent().await?;

        let merged = store
            .update(OptionListsPatch {
                appointment_types: Some(vec!["Consultation".into(), "Suivi".into()]),
                ..Default::default()
            })
            .await?;

        assert_eq!(merged.appointment_types, vec!["Consultation".to_string(), "Suivi".to_string()]);
        assert_eq!(merged.bank_names, OptionLists::defaults().bank_names);
        assert_eq!(merged.soin_types, OptionLists::defaults().soin_types);

        // merged result is what was persisted
        assert_eq!(store.get().await?, merged);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_sanitizes_submitted_lists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = OptionsStore::open(&tmp).await?;
        store.initialize_if_absent().await?;

        let merged = store
            .update(OptionListsPatch {
                bank_names: Some(vec!["A".into(), "a".into(), "A".into(), "".into()]),
                ..Default::default()
            })
            .await?;
        assert_eq!(merged.bank_names, vec!["A".to_string(), "a".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn unseeded_store_reads_defaults_without_persisting() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = OptionsStore::open(&tmp).await?;
        // no initialize_if_absent: reads fall back, nothing is written
        assert_eq!(store.get().await?, OptionLists::defaults());
        assert!(tokio::fs::metadata(&tmp).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn usable_behind_the_repository_trait() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = OptionsStore::open(&tmp).await?;
        store.initialize_if_absent().await?;

        let repo: Arc<dyn OptionsRepository> = store;
        let merged = repo
            .update(OptionListsPatch {
                bank_names: Some(vec!["CFG Bank".into()]),
                ..Default::default()
            })
            .await?;
        assert_eq!(merged.bank_names, vec!["CFG Bank".to_string()]);
        assert_eq!(repo.get().await?, merged);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_document_falls_back_to_defaults() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        tokio::fs::write(&tmp, b"{broken").await?;
        let store = OptionsStore::open(&tmp).await?;
        assert_eq!(store.get().await?, OptionLists::defaults());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
