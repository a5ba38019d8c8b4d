use std::net::SocketAddr;

use axum::Router;
use models::entreprise::EntrepriseInput;
use models::options::OptionListsPatch;
use server::routes::{self, ServerState};
use service::file::{entreprise_store::EntrepriseStore, options_store::OptionsStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use client::{ClientError, EntrepriseClient, OptionsClient};

async fn start_server() -> anyhow::Result<String> {
    let temp_id = Uuid::new_v4();
    let options_store = OptionsStore::open(format!("target/test-data/{}/options.json", temp_id)).await?;
    options_store.initialize_if_absent().await?;
    let entreprise_store =
        EntrepriseStore::open(format!("target/test-data/{}/entreprise.json", temp_id)).await?;

    let state = ServerState { options_store, entreprise_store };
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(base_url)
}

fn input() -> EntrepriseInput {
    EntrepriseInput {
        ice: "123".into(),
        cnss: "456".into(),
        rc: "789".into(),
        fiscal_id: "111".into(),
        rib: "222".into(),
        patente: "333".into(),
        adresse: "1 Rue X".into(),
        email: None,
        telephone: None,
    }
}

#[tokio::test]
async fn options_client_fetches_and_updates() -> anyhow::Result<()> {
    let base_url = start_server().await?;
    let client = OptionsClient::new(&base_url);

    // typed accessors each do a full fetch
    let banks = client.bank_names().await?;
    assert!(banks.contains(&"CIH Bank".to_string()));
    assert!(!client.appointment_types().await?.is_empty());
    assert!(!client.soin_types().await?.is_empty());

    let merged = client
        .update(&OptionListsPatch {
            soin_types: Some(vec!["Implant".into(), " Implant ".into(), "".into()]),
            ..Default::default()
        })
        .await?;
    assert_eq!(merged.soin_types, vec!["Implant".to_string()]);
    assert_eq!(merged.bank_names, banks);

    // next fetch sees the stored result
    assert_eq!(client.soin_types().await?, vec!["Implant".to_string()]);
    Ok(())
}

#[tokio::test]
async fn network_failures_yield_the_localized_fallback() {
    // nothing listens here: no server message exists, so the localized
    // fallback is the whole error
    let options = OptionsClient::new("http://127.0.0.1:1");
    let ClientError::Transport(msg) = options.get_all().await.unwrap_err();
    assert_eq!(msg, "Erreur lors de la récupération des options");

    let ClientError::Transport(msg) = options
        .update(&OptionListsPatch::default())
        .await
        .unwrap_err();
    assert_eq!(msg, "Erreur lors de la mise à jour des options");

    let entreprise = EntrepriseClient::new("http://127.0.0.1:1");
    let ClientError::Transport(msg) = entreprise.get().await.unwrap_err();
    assert_eq!(msg, "Erreur lors de la récupération de l'entreprise");

    let ClientError::Transport(msg) = entreprise.save(&input()).await.unwrap_err();
    assert_eq!(msg, "Erreur lors de l'enregistrement de l'entreprise");
}

#[tokio::test]
async fn entreprise_client_save_creates_then_updates() -> anyhow::Result<()> {
    let base_url = start_server().await?;
    let client = EntrepriseClient::new(&base_url);

    // empty remote: Ok(None), nothing cached
    assert_eq!(client.get().await?, None);
    assert!(client.cached().await.is_none());

    // cold cache: save creates
    let created = client.save(&input()).await?;
    assert_eq!(client.cached().await.map(|e| e.id), Some(created.id));

    // warm cache: save updates in place
    let updated = client
        .save(&EntrepriseInput { adresse: "5 Avenue Y".into(), ..input() })
        .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.adresse, "5 Avenue Y");

    // get refreshes the cache from the server
    let fetched = client.get().await?.expect("record exists");
    assert_eq!(fetched, updated);
    Ok(())
}

#[tokio::test]
async fn entreprise_save_on_cold_cache_with_remote_record_conflicts() -> anyhow::Result<()> {
    let base_url = start_server().await?;
    let first = EntrepriseClient::new(&base_url);
    first.save(&input()).await?;

    // A second session with an empty cache attempts a create; the server
    // refuses and the conflict message is surfaced as-is.
    let second = EntrepriseClient::new(&base_url);
    let err = second.save(&input()).await.unwrap_err();
    let ClientError::Transport(msg) = err;
    assert!(msg.contains("already exists"), "unexpected message: {msg}");

    // after reset the warmed session loses its record too
    first.reset().await;
    assert!(first.cached().await.is_none());
    Ok(())
}

#[tokio::test]
async fn entreprise_validation_is_client_side_and_server_side() -> anyhow::Result<()> {
    let base_url = start_server().await?;
    let client = EntrepriseClient::new(&base_url);

    let bad = EntrepriseInput { ice: "0".into(), adresse: "".into(), ..input() };
    let messages = EntrepriseClient::validate(&bad);
    assert!(messages.len() >= 2);

    // submitting anyway: the server rejects and its message is carried
    let err = client.create(&bad).await.unwrap_err();
    let ClientError::Transport(msg) = err;
    assert!(msg.contains("ICE"));
    Ok(())
}
