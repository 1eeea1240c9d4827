//! Repositorio de usuarios y role flags

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::auth::Role;
use crate::models::user::{RoleFlag, User};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        full_name: String,
        role: Role,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, full_name, role_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .bind(role.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating user: {}", e)))?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding user: {}", e)))?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding user by email: {}", e)))?;

        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking email: {}", e)))?;

        Ok(result.0)
    }

    /// Reasignar el rol del perfil (usado por la reparación de sesión)
    pub async fn set_role(&self, user_id: Uuid, role: Role) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET role_id = $2 WHERE id = $1")
            .bind(user_id)
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error updating user role: {}", e)))?;

        Ok(())
    }

    pub async fn find_role_flag(&self, user_id: Uuid) -> Result<Option<RoleFlag>, AppError> {
        let flag = sqlx::query_as::<_, RoleFlag>("SELECT * FROM role_flags WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding role flag: {}", e)))?;

        Ok(flag)
    }

    /// Crear o reconstruir el role flag de un usuario (idempotente)
    pub async fn upsert_role_flag(&self, user_id: Uuid, role: Role) -> Result<RoleFlag, AppError> {
        let flag = sqlx::query_as::<_, RoleFlag>(
            r#"
            INSERT INTO role_flags (user_id, role, name, access_scope, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id)
            DO UPDATE SET role = EXCLUDED.role, name = EXCLUDED.name, access_scope = EXCLUDED.access_scope
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(role.as_str())
        .bind(role.display_name())
        .bind(role.access_scope())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error upserting role flag: {}", e)))?;

        Ok(flag)
    }
}
