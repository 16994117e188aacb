use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use password_trainer::{routes, AppState, Bootstrap, Config, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "password_trainer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Password Trainer Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    if config.seed_default_admin && config.environment == "production" {
        anyhow::bail!("SEED_DEFAULT_ADMIN must not be enabled in production");
    }

    // Open database; schema and seed data are created here
    let store = Store::open(
        &config.database_path,
        Bootstrap {
            seed_default_admin: config.seed_default_admin,
        },
    )
    .await?;

    let state =
        AppState::new(store.clone(), config.clone()).map_err(|e| anyhow::anyhow!(e))?;
    let app = routes::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
