pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use problem_core::ProblemStore;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::models::HealthResponse;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProblemStore>,
}

impl AppState {
    pub fn new(problems_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(ProblemStore::new(problems_dir)),
        }
    }
}

/// Build the full router: JSON API, browsing UI and static files.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(routes::ui::index))
        .route("/health", get(health_check))
        // Problem routes
        .route("/api/problems", get(routes::problems::list))
        .route("/api/problems/:slug", get(routes::problems::get))
        // Summary routes
        .route("/api/stats", get(routes::stats::stats))
        .route("/api/tags", get(routes::stats::tags))
        // Write routes
        .route("/api/upload", post(routes::upload::upload))
        .route("/api/editor/save", post(routes::upload::editor_save))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tokio::fs::create_dir_all(&config.problems_dir)
        .await
        .with_context(|| format!("failed to create {}", config.problems_dir.display()))?;
    tracing::info!("Serving problems from {}", config.problems_dir.display());

    let state = AppState::new(&config.problems_dir);
    let app = build_router(state, &config.static_dir);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}
