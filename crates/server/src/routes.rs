use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::file::{entreprise_store::EntrepriseStore, options_store::OptionsStore};

pub mod entreprise;
pub mod options;

#[derive(Clone)]
pub struct ServerState {
    pub options_store: Arc<OptionsStore>,
    pub entreprise_store: Arc<EntrepriseStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/options", get(options::get_options).put(options::put_options))
        .route("/entreprise", get(entreprise::get_entreprise).post(entreprise::create_entreprise))
        .route("/entreprise/:id", patch(entreprise::update_entreprise))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
