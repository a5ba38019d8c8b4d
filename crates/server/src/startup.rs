use std::{env, net::SocketAddr};

use axum::Router;
use common::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use configs::StorageConfig;
use service::file::{entreprise_store::EntrepriseStore, options_store::OptionsStore};

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    // Browser clients on arbitrary dev origins; the API carries no credentials.
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_storage_config() -> StorageConfig {
    let mut storage = configs::load_default().map(|cfg| cfg.storage).unwrap_or_default();
    storage.normalize_from_env();
    storage
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let storage = load_storage_config();
    common::env::ensure_data_dir(&storage.data_dir).await?;

    // File-backed stores; the options document is seeded explicitly at
    // startup so the read path never writes.
    let options_store = OptionsStore::open(storage.options_path()).await?;
    options_store.initialize_if_absent().await?;
    let entreprise_store = EntrepriseStore::open(storage.entreprise_path()).await?;

    let state = ServerState { options_store, entreprise_store };

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting cabinet server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
