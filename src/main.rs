//! Solobooks API server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use solobooks::adapters::ai::{GeminiConfig, GeminiTextGenerator};
use solobooks::adapters::http::{api_router, AppState};
use solobooks::adapters::postgres::{
    PostgresProfileRepository, PostgresTaskRepository, PostgresTransactionRepository,
};
use solobooks::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration first: a missing secret must stop the process here,
    // never surface per-request.
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting solobooks v{}", env!("CARGO_PKG_VERSION"));

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("database pool ready");

    let generator = GeminiTextGenerator::new(
        GeminiConfig::new(config.ai.gemini_api_key.clone())
            .with_model(config.ai.model.clone())
            .with_timeout(config.ai.timeout()),
    );

    let state = AppState {
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        transactions: Arc::new(PostgresTransactionRepository::new(pool.clone())),
        tasks: Arc::new(PostgresTaskRepository::new(pool)),
        generator: Arc::new(generator),
        webhook_secret: config.payment.stripe_webhook_secret.clone(),
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(build_cors_layer(&config));

    let addr = config.server.socket_addr();
    info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS from configured origins; permissive when none are configured
/// (development default, matches the original deployment).
fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers(Any)
    }
}
