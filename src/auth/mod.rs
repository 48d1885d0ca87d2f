// Public API - what other modules can use
pub use handlers::{auth_home, create_account, login};
pub use middleware::optional_jwt_auth;
pub use types::AccessClaims;

// Internal modules
mod handlers;
mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;
pub mod types;
