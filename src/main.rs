use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod controllers;
mod db;
mod models;
mod routers;

use config::Config;
use db::Database;
use routers::{health_check_route, root_route, song_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load `.env` before the subscriber so RUST_LOG from the file is seen;
    // report the outcome once logging is up.
    let dotenv = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    match &dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(_) => info!("No .env file found, using process environment"),
    }

    let config = Config::from_env()?;

    let database = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations")
        .run(database.pool())
        .await
        .context("failed to run database migrations")?;
    info!("Database migrations completed");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .nest("/songs", song_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(database);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Song service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
