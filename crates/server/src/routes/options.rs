use axum::{extract::State, Json};
use models::options::{OptionLists, OptionListsPatch};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Current dropdown lists.
pub async fn get_options(State(state): State<ServerState>) -> Result<Json<OptionLists>, ApiError> {
    let lists = state.options_store.get().await?;
    Ok(Json(lists))
}

/// Merge a partial update; returns the full merged record.
pub async fn put_options(
    State(state): State<ServerState>,
    Json(patch): Json<OptionListsPatch>,
) -> Result<Json<OptionLists>, ApiError> {
    let merged = state.options_store.update(patch).await?;
    Ok(Json(merged))
}
