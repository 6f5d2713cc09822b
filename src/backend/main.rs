/**
 * Favourites API Server Entry Point
 *
 * Loads configuration, connects the credential store and serves the API.
 * The process exits with status 1 if configuration is invalid or the store
 * cannot be reached.
 */

use favourites_api::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded configuration: {:?}", config);

    let app = match create_app(&config).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Unable to start the server: {}", e);
            std::process::exit(1);
        }
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API listening on: {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
