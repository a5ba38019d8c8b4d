use std::sync::Arc;

use models::entreprise::{Entreprise, EntrepriseInput};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::json_doc_store::JsonDocStore;

/// File-backed store for the singleton entreprise profile.
///
/// At most one record exists: `create` refuses to overwrite an existing
/// one and `update` requires a matching id.
#[derive(Clone)]
pub struct EntrepriseStore {
    store: Arc<JsonDocStore<Entreprise>>,
}

impl EntrepriseStore {
    /// Open the store from the given file path.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::<Entreprise>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Current record, if one exists.
    pub async fn get(&self) -> Option<Entreprise> {
        self.store.get().await
    }

    /// Create the singleton record. Fails with `Conflict` if one exists.
    pub async fn create(&self, input: &EntrepriseInput) -> Result<Entreprise, ServiceError> {
        let data = input.parse()?;
        let mut created: Option<Entreprise> = None;
        self.store
            .update(|doc| {
                if doc.is_some() {
                    return Err(ServiceError::Conflict("entreprise already exists".into()));
                }
                let record = Entreprise::new(data);
                created = Some(record.clone());
                *doc = Some(record);
                Ok(())
            })
            .await?;
        Ok(created.expect("created set"))
    }

    /// Update the record with the given id in place.
    pub async fn update(&self, id: Uuid, input: &EntrepriseInput) -> Result<Entreprise, ServiceError> {
        let data = input.parse()?;
        let mut updated: Option<Entreprise> = None;
        self.store
            .update(|doc| {
                let existing = doc.as_mut().filter(|e| e.id == id).ok_or_else(|| ServiceError::not_found("entreprise"))?;
                existing.apply(data);
                updated = Some(existing.clone());
                Ok(())
            })
            .await?;
        Ok(updated.expect("updated set"))
    }
}
