//! Controller de autenticación y resolución de roles
//!
//! El registro resuelve el rol (clave de administrador > palabras clave
//! del email > dispatcher por defecto) y escribe perfil + role flag en
//! dos escrituras secuenciales. La carga de sesión repara role flags
//! faltantes de forma idempotente.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, SessionResponse, UserResponse};
use crate::dto::common::ApiResponse;
use crate::models::auth::Role;
use crate::repositories::user_repository::UserRepository;
use crate::services::role_service::resolve_role;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        config: &EnvironmentConfig,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        // Condición de duplicado distinguible para el cliente
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let role = resolve_role(&request.email, request.admin_key.as_deref(), &config.fleet_admin_key);

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self
            .repository
            .create(request.email, password_hash, request.full_name, role)
            .await?;

        // Segunda escritura: el role flag habilita el acceso a la app
        if let Err(e) = self.repository.upsert_role_flag(user.id, role).await {
            // Perfil creado sin flag: la reparación de sesión lo reconstruye
            tracing::warn!(
                "⚠️ Registro parcial: usuario {} creado sin role flag ({})",
                user.id,
                e
            );
        }

        tracing::info!("👤 Usuario registrado: {} con rol {}", user.email, role.as_str());

        Ok(ApiResponse::success_with_message(
            user.into(),
            "Cuenta creada exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        config: &EnvironmentConfig,
        request: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let role = user.role_id.as_deref().and_then(Role::from_str).unwrap_or(Role::Dispatcher);

        let token = generate_token(user.id, &user.email, role.as_str(), &JwtConfig::from(config))?;

        Ok(LoginResponse::success(token, user.into()))
    }

    /// Cargar la sesión del usuario, reparando el role flag si falta
    ///
    /// Reparación idempotente: si el perfil existe sin role flag, se
    /// reconstruye desde role_id (dispatcher por defecto cuando role_id
    /// también falta), escribiendo el rol por defecto de vuelta al perfil.
    pub async fn session(&self, user_id: Uuid) -> Result<SessionResponse, AppError> {
        let mut user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let role = match self.repository.find_role_flag(user_id).await? {
            Some(flag) => Role::from_str(&flag.role).unwrap_or(Role::Dispatcher),
            None => {
                let role = user
                    .role_id
                    .as_deref()
                    .and_then(Role::from_str)
                    .unwrap_or(Role::Dispatcher);

                tracing::warn!(
                    "🔧 Role flag faltante para usuario {}; reconstruyendo con rol {}",
                    user.id,
                    role.as_str()
                );

                self.repository.upsert_role_flag(user.id, role).await?;

                if user.role_id.is_none() {
                    self.repository.set_role(user.id, role).await?;
                    user.role_id = Some(role.as_str().to_string());
                }

                role
            }
        };

        Ok(SessionResponse {
            user: user.into(),
            role: role.as_str().to_string(),
            capabilities: role
                .capabilities()
                .iter()
                .map(|c| format!("{:?}", c))
                .collect(),
        })
    }
}
