mod config;
mod error;
mod infra;
mod inspector;
mod routes;
mod shared;
mod tools;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "security_toolbox_app=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ring is the only crypto provider compiled in.
    rustls::crypto::ring::default_provider().install_default().ok();

    let config = config::Config::from_env();
    tracing::info!("Starting Security Toolbox backend on port {}", config.port);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/inspect", post(routes::inspect::inspect_certificate))
        .route("/api/tools/jwt", post(routes::tools::decode_jwt))
        .route("/api/tools/hash", post(routes::tools::generate_hash))
        .fallback(routes::static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
