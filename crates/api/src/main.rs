use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_api::authz::AllowAll;
use quill_api::config::ServerConfig;
use quill_api::router::build_app_router;
use quill_api::state::AppState;
use quill_store::MemoryStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Collaborators ---
    // In-memory store and allow-all enforcer; a deployment swaps in its own
    // implementations of ContentStore / Enforcer here.
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        enforcer: Arc::new(AllowAll),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
