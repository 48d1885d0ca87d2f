use axum::Router;
use std::time::Duration;

use orders_api::{
    create_app, AppState, Database, DatabaseConfig, PasswordHasher, TokenConfig,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestSetup {
    pub app: Router,
    pub state: AppState,
}

pub struct TestSetupBuilder {
    database_config: DatabaseConfig,
    token_expiration_minutes: i64,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            database_config: DatabaseConfig::in_memory(),
            token_expiration_minutes: 30,
        }
    }

    /// Shortens how long a request waits for a free session
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.database_config.acquire_timeout = timeout;
        self
    }

    /// Lets several requests hold a session on the shared in-memory database at once
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.database_config.max_connections = max_connections;
        self
    }

    pub fn with_token_expiration_minutes(mut self, minutes: i64) -> Self {
        self.token_expiration_minutes = minutes;
        self
    }

    pub async fn build(self) -> TestSetup {
        let database = Database::connect(&self.database_config).await.unwrap();
        database.init_schema().await.unwrap();

        let state = AppState::new(
            database,
            TokenConfig::new(TEST_SECRET.to_string(), self.token_expiration_minutes),
            PasswordHasher::new(4),
        );

        TestSetup {
            app: create_app(state.clone()),
            state,
        }
    }
}
