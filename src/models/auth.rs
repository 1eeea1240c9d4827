//! Roles y capacidades del sistema
//!
//! Este módulo define los cuatro roles operativos y la resolución de
//! capacidades: cada pantalla/endpoint consulta una única función
//! `Role::capabilities()` en lugar de comparar strings de rol dispersos.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    FleetManager,
    Dispatcher,
    SafetyOfficer,
    FinancialAnalyst,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::FleetManager => "fleet-manager",
            Role::Dispatcher => "dispatcher",
            Role::SafetyOfficer => "safety-officer",
            Role::FinancialAnalyst => "financial-analyst",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fleet-manager" => Some(Role::FleetManager),
            "dispatcher" => Some(Role::Dispatcher),
            "safety-officer" => Some(Role::SafetyOfficer),
            "financial-analyst" => Some(Role::FinancialAnalyst),
            _ => None,
        }
    }

    /// Nombre legible del rol, almacenado en el role flag
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::FleetManager => "Fleet Manager",
            Role::Dispatcher => "Dispatcher",
            Role::SafetyOfficer => "Safety Officer",
            Role::FinancialAnalyst => "Financial Analyst",
        }
    }

    /// Alcance de acceso registrado en el role flag
    pub fn access_scope(&self) -> &'static str {
        match self {
            Role::FleetManager => "full",
            Role::Dispatcher => "operations",
            Role::SafetyOfficer => "compliance",
            Role::FinancialAnalyst => "financials",
        }
    }

    /// Resolución de capacidades: única fuente de verdad para autorización
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::FleetManager => &[
                Capability::ManageVehicles,
                Capability::ManageDrivers,
                Capability::DispatchTrips,
                Capability::AdvanceTrips,
                Capability::RecordExpenses,
                Capability::RecordMaintenance,
                Capability::ViewFinancials,
                Capability::ViewInsights,
            ],
            Role::Dispatcher => &[
                Capability::DispatchTrips,
                Capability::AdvanceTrips,
                Capability::RecordExpenses,
            ],
            Role::SafetyOfficer => &[
                Capability::ManageDrivers,
                Capability::RecordMaintenance,
            ],
            Role::FinancialAnalyst => &[
                Capability::RecordExpenses,
                Capability::ViewFinancials,
                Capability::ViewInsights,
            ],
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// Operaciones permitidas en el sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    ManageVehicles,
    ManageDrivers,
    DispatchTrips,
    AdvanceTrips,
    RecordExpenses,
    RecordMaintenance,
    ViewFinancials,
    ViewInsights,
}

/// Usuario autenticado, inyectado por el middleware de auth
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [
            Role::FleetManager,
            Role::Dispatcher,
            Role::SafetyOfficer,
            Role::FinancialAnalyst,
        ] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("admin"), None);
    }

    #[test]
    fn test_fleet_manager_has_all_capabilities() {
        for cap in [
            Capability::ManageVehicles,
            Capability::ManageDrivers,
            Capability::DispatchTrips,
            Capability::AdvanceTrips,
            Capability::RecordExpenses,
            Capability::RecordMaintenance,
            Capability::ViewFinancials,
            Capability::ViewInsights,
        ] {
            assert!(Role::FleetManager.has_capability(cap));
        }
    }

    #[test]
    fn test_dispatcher_cannot_manage_vehicles() {
        assert!(!Role::Dispatcher.has_capability(Capability::ManageVehicles));
        assert!(Role::Dispatcher.has_capability(Capability::DispatchTrips));
    }

    #[test]
    fn test_safety_officer_capabilities() {
        assert!(Role::SafetyOfficer.has_capability(Capability::ManageDrivers));
        assert!(Role::SafetyOfficer.has_capability(Capability::RecordMaintenance));
        assert!(!Role::SafetyOfficer.has_capability(Capability::ViewInsights));
    }

    #[test]
    fn test_financial_analyst_capabilities() {
        assert!(Role::FinancialAnalyst.has_capability(Capability::ViewFinancials));
        assert!(Role::FinancialAnalyst.has_capability(Capability::ViewInsights));
        assert!(!Role::FinancialAnalyst.has_capability(Capability::DispatchTrips));
    }
}
