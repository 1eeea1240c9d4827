//! Middleware de autenticación
//!
//! Valida el JWT y verifica la existencia del role flag: sin ese registro
//! el acceso queda bloqueado aunque el token declare un rol válido. El
//! usuario autenticado se inyecta como extensión del request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::auth::{AuthUser, Role};
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Jwt("Subject del token inválido".to_string()))?;

    // La autorización real es la existencia del role flag, no el claim
    let repository = UserRepository::new(state.pool.clone());
    let flag = repository
        .find_role_flag(user_id)
        .await?
        .ok_or_else(|| AppError::Forbidden("La cuenta no tiene acceso habilitado".to_string()))?;

    let role = Role::from_str(&flag.role)
        .ok_or_else(|| AppError::Forbidden(format!("Rol desconocido: '{}'", flag.role)))?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        email: claims.email,
        role,
    });

    Ok(next.run(request).await)
}
