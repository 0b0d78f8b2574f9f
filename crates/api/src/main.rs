//! Fan Fleet API Server

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fan_fleet=debug".parse()?)
                .add_directive("api=debug".parse()?),
        )
        .init();

    info!("🎬 Starting Fan Fleet API");

    // Load configuration
    let config = common::Config::from_env();

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), pool));

    // Build API router with state
    let api_router = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/donors/:email", get(routes::donors::get))
        .route("/api/donors/:email/stats", get(routes::donors::stats))
        .route(
            "/api/donors/:email/profile",
            put(routes::donors::update_profile),
        )
        .route(
            "/api/donors/:email/pledges",
            post(routes::pledges::create),
        )
        .route("/api/leaderboard", get(routes::leaderboard::global))
        .route("/api/ranks", get(routes::ranks::list))
        .route("/api/activity", post(routes::activity::create))
        .route("/api/recalculate", post(routes::recalc::trigger))
        .with_state(state);

    // Build full router with static file serving and SPA fallback
    // Serve static files, but fall back to index.html for SPA routing
    let static_service = ServeDir::new("static")
        .append_index_html_on_directories(true)
        .fallback(tower_http::services::ServeFile::new("static/index.html"));

    let app = api_router
        .fallback_service(static_service)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
