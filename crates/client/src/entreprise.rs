use models::entreprise::{Entreprise, EntrepriseInput};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{error_from_response, ClientError};

const FETCH_FALLBACK: &str = "Erreur lors de la récupération de l'entreprise";
const SAVE_FALLBACK: &str = "Erreur lors de l'enregistrement de l'entreprise";

/// Client for the singleton entreprise profile, owning an explicit
/// in-memory cache of the current record.
///
/// `save` decides create-vs-update purely from this process-local cache:
/// a record created from another process or session is not detected, and
/// `save` on a cold cache then attempts a create (the server answers 409).
pub struct EntrepriseClient {
    http: reqwest::Client,
    base_url: String,
    current: RwLock<Option<Entreprise>>,
}

impl EntrepriseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            current: RwLock::new(None),
        }
    }

    /// Cached record, if any. Populated by successful `get`/`create`/
    /// `update` calls in this session.
    pub async fn cached(&self) -> Option<Entreprise> {
        self.current.read().await.clone()
    }

    /// Drop the cached record, e.g. on logout.
    pub async fn reset(&self) {
        *self.current.write().await = None;
    }

    /// Pure form validation; empty iff valid.
    pub fn validate(input: &EntrepriseInput) -> Vec<String> {
        input.validate()
    }

    /// Fetch the remote record. A remote `null` answers `Ok(None)` and
    /// leaves the cache untouched; a success populates the cache;
    /// transport/server errors are surfaced, never mapped to `None`.
    pub async fn get(&self) -> Result<Option<Entreprise>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/entreprise", self.base_url))
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "entreprise fetch failed");
                ClientError::Transport(FETCH_FALLBACK.to_string())
            })?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp, FETCH_FALLBACK).await);
        }
        let record = resp
            .json::<Option<Entreprise>>()
            .await
            .map_err(|_| ClientError::Transport(FETCH_FALLBACK.to_string()))?;
        if let Some(record) = &record {
            *self.current.write().await = Some(record.clone());
        }
        Ok(record)
    }

    /// Create or update depending on whether this session's cache holds
    /// a record.
    pub async fn save(&self, input: &EntrepriseInput) -> Result<Entreprise, ClientError> {
        let cached_id = self.current.read().await.as_ref().map(|e| e.id);
        match cached_id {
            Some(id) => self.update(id, input).await,
            None => self.create(input).await,
        }
    }

    /// POST the record and cache the server's response.
    pub async fn create(&self, input: &EntrepriseInput) -> Result<Entreprise, ClientError> {
        let resp = self
            .http
            .post(format!("{}/entreprise", self.base_url))
            .json(input)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "entreprise create failed");
                ClientError::Transport(SAVE_FALLBACK.to_string())
            })?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp, SAVE_FALLBACK).await);
        }
        let record = resp
            .json::<Entreprise>()
            .await
            .map_err(|_| ClientError::Transport(SAVE_FALLBACK.to_string()))?;
        *self.current.write().await = Some(record.clone());
        Ok(record)
    }

    /// PATCH the record with the given id and cache the server's response.
    pub async fn update(&self, id: Uuid, input: &EntrepriseInput) -> Result<Entreprise, ClientError> {
        let resp = self
            .http
            .patch(format!("{}/entreprise/{}", self.base_url, id))
            .json(input)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "entreprise update failed");
                ClientError::Transport(SAVE_FALLBACK.to_string())
            })?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp, SAVE_FALLBACK).await);
        }
        let record = resp
            .json::<Entreprise>()
            .await
            .map_err(|_| ClientError::Transport(SAVE_FALLBACK.to_string()))?;
        *self.current.write().await = Some(record.clone());
        Ok(record)
    }
}
