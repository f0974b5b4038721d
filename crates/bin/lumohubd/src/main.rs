//! # lumohubd — lumohub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Start the event pump feeding gateway events into the light cache
//! - Open the gateway session in the background; the HTTP API is served
//!   right away and answers 503 for commands until a gateway is connected
//! - Construct application services and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use lumohub_adapter_credentials_file::JsonFileCredentialStore;
use lumohub_adapter_http_axum::state::AppState;
use lumohub_adapter_virtual::{VirtualConnector, VirtualGateway};
use lumohub_app::cache::LightCache;
use lumohub_app::gateway_handle::GatewayHandle;
use lumohub_app::ports::EventSender;
use lumohub_app::services::command_service::CommandService;
use lumohub_app::services::query_service::QueryService;
use lumohub_app::session::{GatewaySession, pump_events};
use lumohub_app::usage::SceneUsage;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, GatewayMode};

type VirtualSession = GatewaySession<VirtualConnector, JsonFileCredentialStore>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Cache and event feed
    let cache = Arc::new(LightCache::new());
    let usage = Arc::new(SceneUsage::new());
    let (events_tx, events_rx) = mpsc::channel(config.gateway.event_buffer);
    tokio::spawn(pump_events(events_rx, Arc::clone(&cache)));

    // Gateway
    let gateway = Arc::new(GatewayHandle::<VirtualGateway>::new());
    match config.gateway.mode {
        GatewayMode::Virtual => {
            let session = GatewaySession::new(
                VirtualConnector::new(config.gateway.virtual_gateway.clone()),
                JsonFileCredentialStore::new(config.gateway.credentials_file.clone()),
                config.gateway.security_code.clone(),
            );
            tokio::spawn(connect_gateway(session, events_tx, Arc::clone(&gateway)));
        }
        GatewayMode::Disabled => {
            tracing::warn!("gateway disabled, light commands will be rejected");
            drop(events_tx);
        }
    }

    // Services
    let command_service = CommandService::new(Arc::clone(&cache), Arc::clone(&usage), gateway);
    let query_service = QueryService::new(cache, usage);

    // HTTP
    let state = AppState::new(command_service, query_service);
    let app =
        lumohub_adapter_http_axum::router::build(state, config.server.static_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "lumohubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("lumohubd stopped");
    Ok(())
}

/// Establish the gateway session and install the connection once it is up.
///
/// Failures are logged and leave the handle empty; the process keeps serving.
async fn connect_gateway(
    session: VirtualSession,
    events: EventSender,
    handle: Arc<GatewayHandle<VirtualGateway>>,
) {
    match session.establish(events).await {
        Ok(Some(connection)) => handle.install(connection),
        Ok(None) => {}
        Err(err) => {
            tracing::error!(
                error = %err,
                source = ?std::error::Error::source(&err),
                "gateway session failed, light commands will be rejected"
            );
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
