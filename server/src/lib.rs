//! Roadmap Backend
//!
//! Layered architecture:
//! - repository: Data access abstractions and the in-memory feature store
//! - routes: axum handlers for `/api/features`
//! - config / error: CLI configuration and HTTP error mapping
//!
//! Domain entities live in the shared `roadmap-domain` crate.

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod repository;
pub mod routes;

pub use config::ServerConfig;
use repository::FeatureRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub features: Arc<FeatureRepository>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            features: Arc::new(FeatureRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Full application router: API, health check, optional static UI
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = routes::api_router()
        .route("/health", get(health))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        // Unknown paths fall back to index.html so the client can route.
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("shutdown signal received");
}

/// Initialize logging, bind, and serve until Ctrl-C
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let mut logger = rolling_logger::LoggerBuilder::new("roadmap").level(&config.log_level);
    if let Some(dir) = &config.log_dir {
        logger = logger.log_dir(dir);
    }
    logger.init().context("failed to init rolling logger")?;

    let addr = config.bind_addr()?;
    let app = build_router(AppState::new(), &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        started = %chrono::Local::now().format("%H:%M:%S%.3f"),
        static_dir = ?config.static_dir,
        "roadmap server listening"
    );
    let _ = rolling_logger::info(&format!("Serving on http://{}", addr));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        let _ = rolling_logger::error(&format!("Server stopped with error: {}", e));
        return Err(e).context("server error");
    }

    tracing::info!("server stopped");
    Ok(())
}
