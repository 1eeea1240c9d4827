//! Agregación de gastos y combustible por viaje
//!
//! Un registro con trip_id explícito se atribuye solo por igualdad de id.
//! Los registros históricos sin trip_id caen en la heurística de
//! vehículo + rango de fechas [dispatch_date, completion_date o infinito).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::expense::{Expense, FuelLog};
use crate::models::trip::Trip;

/// Costos totales atribuidos a un viaje
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripCosts {
    pub fuel_cost: Decimal,
    pub misc_cost: Decimal,
    pub total_cost: Decimal,
}

/// ¿Pertenece este registro al viaje?
fn matches_trip(
    trip: &Trip,
    record_trip_id: Option<&str>,
    record_vehicle_id: &str,
    record_date: DateTime<Utc>,
) -> bool {
    match record_trip_id {
        // Asociación explícita: gana siempre, en ambas direcciones
        Some(trip_id) => trip_id == trip.id,
        None => {
            record_vehicle_id == trip.vehicle_id
                && record_date >= trip.dispatch_date
                && trip.completion_date.map_or(true, |end| record_date <= end)
        }
    }
}

/// Calcular los costos de combustible y gastos varios de un viaje
pub fn trip_costs(trip: &Trip, expenses: &[Expense], fuel_logs: &[FuelLog]) -> TripCosts {
    let fuel_cost: Decimal = fuel_logs
        .iter()
        .filter(|log| matches_trip(trip, log.trip_id.as_deref(), &log.vehicle_id, log.log_date))
        .map(|log| log.cost)
        .sum();

    let misc_cost: Decimal = expenses
        .iter()
        .filter(|exp| matches_trip(trip, exp.trip_id.as_deref(), &exp.vehicle_id, exp.expense_date))
        .map(|exp| exp.amount)
        .sum();

    TripCosts {
        fuel_cost,
        misc_cost,
        total_cost: fuel_cost + misc_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
    }

    fn trip(id: &str, vehicle_id: &str, start_day: u32, end_day: Option<u32>) -> Trip {
        Trip {
            id: id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            driver_id: "DRV-000001".to_string(),
            cargo_weight_kg: Decimal::from(1000),
            origin: "Lyon".to_string(),
            destination: "Madrid".to_string(),
            revenue: Decimal::from(2500),
            start_odometer_km: Decimal::from(100_000),
            status: "Completed".to_string(),
            dispatch_date: dt(start_day, 8),
            completion_date: end_day.map(|d| dt(d, 20)),
            created_at: dt(start_day, 8),
        }
    }

    fn expense(trip_id: Option<&str>, vehicle_id: &str, day: u32, amount: i64) -> Expense {
        Expense {
            id: format!("EXP-{:06}", day),
            vehicle_id: vehicle_id.to_string(),
            trip_id: trip_id.map(str::to_string),
            amount: Decimal::from(amount),
            category: "Tolls".to_string(),
            description: None,
            expense_date: dt(day, 12),
            created_at: dt(day, 12),
        }
    }

    fn fuel_log(trip_id: Option<&str>, vehicle_id: &str, day: u32, cost: i64) -> FuelLog {
        FuelLog {
            id: format!("FUEL-{:06}", day),
            vehicle_id: vehicle_id.to_string(),
            trip_id: trip_id.map(str::to_string),
            liters: Decimal::from(80),
            cost: Decimal::from(cost),
            odometer_km: Decimal::from(100_500),
            log_date: dt(day, 12),
            created_at: dt(day, 12),
        }
    }

    #[test]
    fn test_explicit_trip_id_match() {
        let t = trip("TRP-000001", "ab-123-cd", 10, Some(12));
        let costs = trip_costs(
            &t,
            &[expense(Some("TRP-000001"), "otro-vehiculo", 25, 40)],
            &[fuel_log(Some("TRP-000001"), "otro-vehiculo", 25, 150)],
        );
        // El trip_id explícito atribuye aunque el vehículo y la fecha no coincidan
        assert_eq!(costs.fuel_cost, Decimal::from(150));
        assert_eq!(costs.misc_cost, Decimal::from(40));
        assert_eq!(costs.total_cost, Decimal::from(190));
    }

    #[test]
    fn test_explicit_trip_id_excludes_other_trips() {
        // Un registro asociado a otro viaje no se atribuye por rango de fechas
        let t = trip("TRP-000001", "ab-123-cd", 10, Some(12));
        let costs = trip_costs(
            &t,
            &[expense(Some("TRP-000099"), "ab-123-cd", 11, 40)],
            &[],
        );
        assert_eq!(costs.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_legacy_record_matches_by_vehicle_and_date_range() {
        let t = trip("TRP-000001", "ab-123-cd", 10, Some(12));
        let costs = trip_costs(
            &t,
            &[
                expense(None, "ab-123-cd", 11, 30),  // dentro del rango
                expense(None, "ab-123-cd", 15, 99),  // fuera del rango
                expense(None, "otro-vehiculo", 11, 99), // otro vehículo
            ],
            &[fuel_log(None, "ab-123-cd", 12, 120)],
        );
        assert_eq!(costs.misc_cost, Decimal::from(30));
        assert_eq!(costs.fuel_cost, Decimal::from(120));
    }

    #[test]
    fn test_open_ended_trip_matches_any_later_date() {
        // Viaje sin completion_date: el rango es abierto hacia adelante
        let t = trip("TRP-000001", "ab-123-cd", 10, None);
        let costs = trip_costs(&t, &[expense(None, "ab-123-cd", 28, 55)], &[]);
        assert_eq!(costs.misc_cost, Decimal::from(55));
    }

    #[test]
    fn test_record_before_dispatch_not_attributed() {
        let t = trip("TRP-000001", "ab-123-cd", 10, None);
        let costs = trip_costs(&t, &[expense(None, "ab-123-cd", 5, 55)], &[]);
        assert_eq!(costs.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_empty_sets_zero_costs() {
        let t = trip("TRP-000001", "ab-123-cd", 10, Some(12));
        let costs = trip_costs(&t, &[], &[]);
        assert_eq!(costs.total_cost, Decimal::ZERO);
    }
}
