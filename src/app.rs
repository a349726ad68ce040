use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post, IntoMakeService};
use axum::{Router, Server};
use hyper::server::conn::AddrIncoming;
use hyper::{Body, Request};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::Settings;
use crate::email_client::EmailClient;
use crate::routes::{admin_panel, broadcast_email, create_group, download_logs};
use crate::store::KeyValueStore;

pub type AppServer = Server<AddrIncoming, IntoMakeService<Router>>;

/// Everything a handler needs, built once at startup.
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub email_client: EmailClient,
    pub log_file: PathBuf,
}

pub fn build(config: &Settings) -> Result<AppServer, anyhow::Error> {
    let store = config
        .store
        .build_store()
        .context("Failed to set up the key-value store")?;
    let transport = config
        .email_client
        .smtp_transport()
        .context("Failed to set up the SMTP transport")?;
    let sender = config
        .email_client
        .sender()
        .context("Invalid sender email address")?;

    let state = AppState {
        store,
        email_client: EmailClient::new(Arc::new(transport), sender),
        log_file: config.logging.file.clone(),
    };

    let address = config
        .application
        .address()
        .context("Invalid application address")?;
    Ok(run(address, state)?)
}

pub fn run(address: SocketAddr, state: AppState) -> hyper::Result<AppServer> {
    let app = Router::new()
        .route("/", get(admin_panel))
        .route("/create_group/", post(create_group))
        .route("/broadcast/", post(broadcast_email))
        .route("/logs/", get(download_logs))
        .route("/health_check", get(|| async {}))
        .with_state(Arc::new(state))
        .layer(ServiceBuilder::new().layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        ));

    Ok(Server::try_bind(&address)?.serve(app.into_make_service()))
}
