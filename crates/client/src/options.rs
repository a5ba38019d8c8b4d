use models::options::{OptionLists, OptionListsPatch};
use tracing::debug;

use crate::errors::{error_from_response, ClientError};

const FETCH_FALLBACK: &str = "Erreur lors de la récupération des options";
const UPDATE_FALLBACK: &str = "Erreur lors de la mise à jour des options";

/// Client for the shared dropdown lists. Deliberately cache-free: every
/// accessor performs a full fetch, so callers always see the latest
/// server state.
#[derive(Clone)]
pub struct OptionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OptionsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// Fetch all three lists in one call.
    pub async fn get_all(&self) -> Result<OptionLists, ClientError> {
        let resp = self
            .http
            .get(format!("{}/options", self.base_url))
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "options fetch failed");
                ClientError::Transport(FETCH_FALLBACK.to_string())
            })?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp, FETCH_FALLBACK).await);
        }
        resp.json::<OptionLists>()
            .await
            .map_err(|_| ClientError::Transport(FETCH_FALLBACK.to_string()))
    }

    /// Bank names; triggers a full fetch.
    pub async fn bank_names(&self) -> Result<Vec<String>, ClientError> {
        Ok(self.get_all().await?.bank_names)
    }

    /// Appointment types; triggers a full fetch.
    pub async fn appointment_types(&self) -> Result<Vec<String>, ClientError> {
        Ok(self.get_all().await?.appointment_types)
    }

    /// Soin types; triggers a full fetch.
    pub async fn soin_types(&self) -> Result<Vec<String>, ClientError> {
        Ok(self.get_all().await?.soin_types)
    }

    /// Forward a partial update; returns the full merged record.
    pub async fn update(&self, patch: &OptionListsPatch) -> Result<OptionLists, ClientError> {
        let resp = self
            .http
            .put(format!("{}/options", self.base_url))
            .json(patch)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "options update failed");
                ClientError::Transport(UPDATE_FALLBACK.to_string())
            })?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp, UPDATE_FALLBACK).await);
        }
        resp.json::<OptionLists>()
            .await
            .map_err(|_| ClientError::Transport(UPDATE_FALLBACK.to_string()))
    }
}
