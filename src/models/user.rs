//! Modelo de User y Role Flag
//!
//! El perfil de usuario registra el rol resuelto al crear la cuenta.
//! El role flag es un registro separado cuya mera existencia habilita el
//! acceso a la aplicación; su ausencia bloquea todo, sin importar role_id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Perfil de usuario - mapea a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    // NULL cuando el perfil quedó sin rol; reparado por el resolver
    pub role_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Role flag - mapea a la tabla role_flags
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleFlag {
    pub user_id: Uuid,
    pub role: String,
    pub name: String,
    pub access_scope: String,
    pub created_at: DateTime<Utc>,
}
