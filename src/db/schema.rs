use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::shared::AppError;

/// Table definitions, applied in order. `AUTOINCREMENT` keeps ids from ever being reused.
const CREATE_TABLES: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS usuarios (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        senha TEXT NOT NULL,
        ativo BOOLEAN NOT NULL DEFAULT 1,
        admin BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS pedidos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        status TEXT NOT NULL DEFAULT 'PENDING',
        usuario INTEGER NOT NULL REFERENCES usuarios(id),
        preco REAL NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS itens_pedido (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        quantidade INTEGER NOT NULL,
        sabor TEXT NOT NULL,
        tamanho TEXT NOT NULL,
        preco_unitario REAL NOT NULL,
        pedido INTEGER NOT NULL REFERENCES pedidos(id)
    )",
];

pub(super) async fn create_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            warn!(error = %e, "Failed to create table");
            AppError::DatabaseError(e.to_string())
        })?;
    }

    debug!(tables = CREATE_TABLES.len(), "Schema ready");
    Ok(())
}
