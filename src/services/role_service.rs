//! Resolución de roles
//!
//! Dado un email y una clave de administrador opcional, resuelve
//! exactamente un rol. El orden importa: la primera regla que coincide
//! gana.

use crate::models::auth::{AuthUser, Capability, Role};
use crate::utils::errors::AppError;

/// Resolver el rol de una cuenta nueva
///
/// Orden de resolución:
/// 1. clave de administrador correcta -> fleet-manager
/// 2. email con "safety"/"compliance" -> safety-officer
/// 3. email con "finance"/"audit"/"account" -> financial-analyst
/// 4. por defecto -> dispatcher
pub fn resolve_role(email: &str, admin_key: Option<&str>, fleet_admin_key: &str) -> Role {
    if let Some(key) = admin_key {
        // Comparación sensible a mayúsculas, tras recortar espacios
        if key.trim() == fleet_admin_key {
            return Role::FleetManager;
        }
    }

    let email = email.to_lowercase();

    if email.contains("safety") || email.contains("compliance") {
        return Role::SafetyOfficer;
    }

    if email.contains("finance") || email.contains("audit") || email.contains("account") {
        return Role::FinancialAnalyst;
    }

    Role::Dispatcher
}

/// Verificar que el usuario autenticado tiene una capacidad
pub fn require_capability(user: &AuthUser, capability: Capability) -> Result<(), AppError> {
    if user.role.has_capability(capability) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "El rol '{}' no tiene permiso para esta operación",
            user.role.as_str()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const KEY: &str = "clave-maestra-flota";

    #[test]
    fn test_admin_key_wins_over_keywords() {
        // La clave correcta gana aunque el email contenga "finance"
        let role = resolve_role("finance@fleet.co", Some(KEY), KEY);
        assert_eq!(role, Role::FleetManager);
    }

    #[test]
    fn test_admin_key_is_trimmed_and_case_sensitive() {
        assert_eq!(
            resolve_role("ops@fleet.co", Some("  clave-maestra-flota  "), KEY),
            Role::FleetManager
        );
        assert_eq!(
            resolve_role("ops@fleet.co", Some("CLAVE-MAESTRA-FLOTA"), KEY),
            Role::Dispatcher
        );
    }

    #[test]
    fn test_safety_keywords() {
        assert_eq!(resolve_role("Safety.Lead@co.com", None, KEY), Role::SafetyOfficer);
        assert_eq!(resolve_role("compliance@co.com", None, KEY), Role::SafetyOfficer);
    }

    #[test]
    fn test_finance_keywords() {
        // Escenario del dominio: jane.finance sin clave -> financial-analyst
        assert_eq!(
            resolve_role("jane.finance@co.com", None, KEY),
            Role::FinancialAnalyst
        );
        assert_eq!(resolve_role("audit@co.com", None, KEY), Role::FinancialAnalyst);
        assert_eq!(resolve_role("accounting@co.com", None, KEY), Role::FinancialAnalyst);
    }

    #[test]
    fn test_safety_beats_finance_when_both_present() {
        // "safety" se evalúa antes que "account"
        assert_eq!(
            resolve_role("safety.accounts@co.com", None, KEY),
            Role::SafetyOfficer
        );
    }

    #[test]
    fn test_default_is_dispatcher() {
        assert_eq!(resolve_role("jose@co.com", None, KEY), Role::Dispatcher);
        assert_eq!(resolve_role("jose@co.com", Some("incorrecta"), KEY), Role::Dispatcher);
    }

    #[test]
    fn test_require_capability() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
            email: "d@co.com".to_string(),
            role: Role::Dispatcher,
        };
        assert!(require_capability(&user, Capability::DispatchTrips).is_ok());
        assert!(require_capability(&user, Capability::ManageVehicles).is_err());
    }
}
