use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the usuarios table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: i64,
    #[sqlx(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "senha")]
    pub password_hash: String,
    #[sqlx(rename = "ativo")]
    pub active: bool,
    pub admin: bool,
}

/// A user that has not been persisted yet (no id assigned)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub active: bool,
    pub admin: bool,
}

impl NewUser {
    pub fn into_model(self, id: i64) -> UserModel {
        UserModel {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            active: self.active,
            admin: self.admin,
        }
    }
}
