//! # Clientele Server
//!
//! Main entry point for the Clientele application.
//!
//! The customer store backend is selected by configuration at startup:
//! - **memory**: In-memory store seeded with demo customers
//! - **mysql**: Relational store backed by a MySQL connection pool

use clientele_config::{ConfigLoader, StoreBackend};
use clientele_core::{ClienteleError, ClienteleResult, StoreHealth};
use clientele_repository::{create_pool, MemoryCustomerRepository, MySqlCustomerRepository};
use clientele_rest::{create_router, AppState};
use clientele_security::PasswordHasher;
use clientele_service::{CustomerService, CustomerServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    init_logging();

    info!("Starting Clientele Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ClienteleResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);
    info!("Store backend: {}", config.store.backend);

    let password_hasher = Arc::new(PasswordHasher::with_cost(
        config.security.password_hash_cost,
    ));

    // Construct the customer store the configuration asks for
    let (customer_service, store_health): (Arc<dyn CustomerService>, Arc<dyn StoreHealth>) =
        match config.store.backend {
            StoreBackend::Memory => {
                let repository = Arc::new(MemoryCustomerRepository::seeded());
                (
                    Arc::new(CustomerServiceImpl::new(repository.clone(), password_hasher)),
                    repository,
                )
            }
            StoreBackend::MySql => {
                let db_pool = create_pool(&config.database).await?;
                db_pool.run_migrations().await?;

                let repository = Arc::new(MySqlCustomerRepository::new(db_pool.clone()));
                (
                    Arc::new(CustomerServiceImpl::new(repository, password_hasher)),
                    db_pool,
                )
            }
        };

    let app_state = AppState::new(customer_service, store_health);
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ClienteleError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClienteleError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,clientele=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
