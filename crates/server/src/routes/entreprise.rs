use axum::{
    extract::{Path, State},
    Json,
};
use models::entreprise::{Entreprise, EntrepriseInput};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Current entreprise record, or JSON `null` when none exists yet.
pub async fn get_entreprise(State(state): State<ServerState>) -> Json<Option<Entreprise>> {
    Json(state.entreprise_store.get().await)
}

/// Create the singleton record; 409 when one already exists.
pub async fn create_entreprise(
    State(state): State<ServerState>,
    Json(input): Json<EntrepriseInput>,
) -> Result<Json<Entreprise>, ApiError> {
    let record = state.entreprise_store.create(&input).await?;
    Ok(Json(record))
}

/// Update the record with the given id.
pub async fn update_entreprise(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<EntrepriseInput>,
) -> Result<Json<Entreprise>, ApiError> {
    let record = state.entreprise_store.update(id, &input).await?;
    Ok(Json(record))
}
