//! Validación de despacho de viajes
//!
//! Precondiciones puras del despacho, separadas del almacenamiento para
//! que ningún cliente pueda eludir la verificación de capacidad o de
//! disponibilidad. Cada rechazo produce un error distinguible.

use rust_decimal::Decimal;

use crate::models::driver::{Driver, DriverStatus};
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

/// Validar las precondiciones de creación de un viaje
///
/// Todas deben cumplirse; la primera que falla rechaza el despacho sin
/// escribir nada.
pub fn validate_dispatch(
    cargo_weight_kg: Decimal,
    vehicle: &Vehicle,
    driver: &Driver,
) -> Result<(), AppError> {
    if cargo_weight_kg <= Decimal::ZERO {
        return Err(AppError::ValidationError(
            "El peso de la carga debe ser mayor que cero".to_string(),
        ));
    }

    if cargo_weight_kg > vehicle.max_capacity_kg {
        // Sobrecarga: la condición de rechazo "payload overload"
        return Err(AppError::ValidationError(format!(
            "Sobrecarga: la carga de {} kg excede la capacidad máxima de {} kg del vehículo '{}'",
            cargo_weight_kg, vehicle.max_capacity_kg, vehicle.id
        )));
    }

    if vehicle.status_enum() != Some(VehicleStatus::Available) {
        return Err(AppError::ValidationError(format!(
            "El vehículo '{}' no está disponible (estado actual: {})",
            vehicle.id, vehicle.status
        )));
    }

    if driver.status_enum() != Some(DriverStatus::Available) {
        return Err(AppError::ValidationError(format!(
            "El conductor '{}' no está disponible (estado actual: {})",
            driver.id, driver.status
        )));
    }

    Ok(())
}

/// Paso resultante de avanzar un viaje una etapa
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceStep {
    /// El viaje ya está Completed: no hay nada que escribir
    NoOp,
    /// Transición a una etapa intermedia
    Transition(TripStatus),
    /// Cierre: estampar completion_date y liberar los recursos asociados
    Complete(TripClosure),
}

/// Recursos que vuelven a "Available" al completar un viaje
#[derive(Debug, Clone, PartialEq)]
pub struct TripClosure {
    pub vehicle_id: String,
    pub driver_id: String,
}

/// Decidir el paso de avance para el estado actual del viaje
///
/// Sin saltos ni retrocesos; sobre un viaje Completed es un no-op.
pub fn advance_step(trip: &Trip) -> Result<AdvanceStep, AppError> {
    let current = trip.status_enum().ok_or_else(|| {
        AppError::Internal(format!("Estado de viaje corrupto: '{}'", trip.status))
    })?;

    match current.next() {
        None => Ok(AdvanceStep::NoOp),
        Some(TripStatus::Completed) => Ok(AdvanceStep::Complete(TripClosure {
            vehicle_id: trip.vehicle_id.clone(),
            driver_id: trip.driver_id.clone(),
        })),
        Some(next) => Ok(AdvanceStep::Transition(next)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn vehicle(status: &str, max_capacity: i64) -> Vehicle {
        Vehicle {
            id: "ab-123-cd".to_string(),
            name: "Camión Norte".to_string(),
            model: "Actros".to_string(),
            vehicle_type: "Truck".to_string(),
            license_plate: "AB-123-CD".to_string(),
            max_capacity_kg: Decimal::from(max_capacity),
            odometer_km: Decimal::from(120_000),
            acquisition_cost: Decimal::from(80_000),
            status: status.to_string(),
            region: Some("Norte".to_string()),
            created_at: Utc::now(),
        }
    }

    fn driver(status: &str) -> Driver {
        Driver {
            id: "DRV-000001".to_string(),
            name: "María Pérez".to_string(),
            license_number: "LIC-555".to_string(),
            license_category: "C".to_string(),
            license_expiry_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            accidents: 0,
            total_trips: 10,
            completed_trips: 10,
            completion_rate: Decimal::from(100),
            safety_score: 100,
            duty_status: "On Duty".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    fn trip(status: &str) -> Trip {
        Trip {
            id: "TRP-000042".to_string(),
            vehicle_id: "ab-123-cd".to_string(),
            driver_id: "DRV-000001".to_string(),
            cargo_weight_kg: Decimal::from(1_000),
            origin: "Bilbao".to_string(),
            destination: "Sevilla".to_string(),
            revenue: Decimal::from(3_000),
            start_odometer_km: Decimal::from(120_000),
            status: status.to_string(),
            dispatch_date: Utc::now(),
            completion_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_dispatch_passes() {
        let result = validate_dispatch(Decimal::from(10_000), &vehicle("Available", 15_000), &driver("Available"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_payload_overload_rejected() {
        // Escenario: capacidad 15000, carga 20000 -> rechazado
        let result = validate_dispatch(Decimal::from(20_000), &vehicle("Available", 15_000), &driver("Available"));
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("Sobrecarga")));
    }

    #[test]
    fn test_cargo_at_exact_capacity_passes() {
        let result = validate_dispatch(Decimal::from(15_000), &vehicle("Available", 15_000), &driver("Available"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_positive_cargo_rejected() {
        for weight in [Decimal::ZERO, Decimal::from(-5)] {
            let result = validate_dispatch(weight, &vehicle("Available", 15_000), &driver("Available"));
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[test]
    fn test_unavailable_vehicle_rejected() {
        for status in ["On Trip", "In Shop", "Retired"] {
            let result = validate_dispatch(Decimal::from(100), &vehicle(status, 15_000), &driver("Available"));
            let err = result.unwrap_err();
            assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("vehículo")));
        }
    }

    #[test]
    fn test_unavailable_driver_rejected() {
        for status in ["On Trip", "Suspended", "Off Duty"] {
            let result = validate_dispatch(Decimal::from(100), &vehicle("Available", 15_000), &driver(status));
            let err = result.unwrap_err();
            assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("conductor")));
        }
    }

    #[test]
    fn test_intermediate_stages_transition_in_order() {
        assert_eq!(
            advance_step(&trip("Scheduled")).unwrap(),
            AdvanceStep::Transition(TripStatus::Dispatched)
        );
        assert_eq!(
            advance_step(&trip("Dispatched")).unwrap(),
            AdvanceStep::Transition(TripStatus::InTransit)
        );
    }

    #[test]
    fn test_in_transit_closes_trip_and_releases_resources() {
        // Avanzar desde In Transit cierra el viaje: completion_date y
        // liberación del vehículo y el conductor del viaje
        let t = trip("In Transit");
        let step = advance_step(&t).unwrap();

        assert_eq!(
            step,
            AdvanceStep::Complete(TripClosure {
                vehicle_id: t.vehicle_id.clone(),
                driver_id: t.driver_id.clone(),
            })
        );
    }

    #[test]
    fn test_completed_trip_advance_is_noop() {
        assert_eq!(advance_step(&trip("Completed")).unwrap(), AdvanceStep::NoOp);
    }

    #[test]
    fn test_corrupt_status_is_internal_error() {
        let result = advance_step(&trip("Cancelled"));
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
