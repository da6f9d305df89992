// Main entry point for the DevEvent API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::kernel::{BaseMailer, CloudinaryClient, NoopMailer, ResendMailer, ServerDeps};
use server_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DevEvent API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Build collaborators
    let image_store = Arc::new(CloudinaryClient::new(
        config.cloudinary_cloud_name.clone(),
        config.cloudinary_api_key.clone(),
        config.cloudinary_api_secret.clone(),
    )?);

    let mailer: Arc<dyn BaseMailer> = match config.resend_api_key.clone() {
        Some(api_key) => Arc::new(ResendMailer::new(api_key, config.email_from.clone())?),
        None => {
            tracing::warn!("RESEND_API_KEY not set; booking confirmations will not be sent");
            Arc::new(NoopMailer)
        }
    };

    let deps = ServerDeps::new(pool, image_store, mailer);

    // Build application
    let app = build_app(deps, config.cors_allowed_origin.as_deref())?;

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
