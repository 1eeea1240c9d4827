//! DTOs de autenticación y registro

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

/// Request de registro de cuenta
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    // Clave compartida opcional; si es correcta la cuenta es fleet-manager
    pub admin_key: Option<String>,
}

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub user: Option<UserResponse>,
}

impl LoginResponse {
    pub fn success(token: String, user: UserResponse) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            user: Some(user),
        }
    }
}

/// Perfil de usuario para la API (sin password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role_id: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            full_name: user.full_name,
            role_id: user.role_id,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Response de sesión: perfil + rol efectivo + capacidades resueltas
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserResponse,
    pub role: String,
    pub capabilities: Vec<String>,
}
