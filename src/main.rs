use orders_api::{create_app, AppConfig, AppState, Database, PasswordHasher, TokenConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Values from a .env file are only defaults; the real environment wins
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orders_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting orders API server");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let database = match Database::connect(&config.database).await {
        Ok(database) => database,
        Err(e) => {
            error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = database.init_schema().await {
        error!("Failed to create tables: {}", e);
        std::process::exit(1);
    }

    // Dependencies are built here and passed explicitly through the router state
    let app_state = AppState::new(
        database.clone(),
        TokenConfig::new(config.secret_key.clone(), config.token_expiration_minutes),
        PasswordHasher::new(config.bcrypt_cost),
    );
    let app = create_app(app_state);

    let listener = match tokio::net::TcpListener::bind(config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %config.bind_address, "Failed to bind: {}", e);
            std::process::exit(1);
        }
    };
    info!("Server running on http://{}", config.bind_address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    database.close().await;
    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
