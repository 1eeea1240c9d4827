//! Controller del generador de insights
//!
//! Arma los dos arrays JSON (operación/ingresos y desempeño) a partir de
//! la ventana reciente de datos y delega en el servicio externo.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::dto::insights_dto::{GenerateInsightsRequest, InsightsResponse};
use crate::models::driver::Driver;
use crate::models::expense::FuelLog;
use crate::models::trip::Trip;
use crate::models::vehicle::Vehicle;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::insights_service::InsightsService;
use crate::utils::errors::AppError;

const DEFAULT_WINDOW_DAYS: i64 = 90;
const MAX_WINDOW_DAYS: i64 = 365;

pub struct InsightsController {
    trips: TripRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    expenses: ExpenseRepository,
    service: Arc<InsightsService>,
}

impl InsightsController {
    pub fn new(pool: PgPool, service: Arc<InsightsService>) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool),
            service,
        }
    }

    pub async fn generate(
        &self,
        request: GenerateInsightsRequest,
    ) -> Result<InsightsResponse, AppError> {
        let days = request.days.unwrap_or(DEFAULT_WINDOW_DAYS);
        if !(1..=MAX_WINDOW_DAYS).contains(&days) {
            return Err(AppError::ValidationError(format!(
                "La ventana debe estar entre 1 y {} días",
                MAX_WINDOW_DAYS
            )));
        }

        let since = Utc::now() - Duration::days(days);

        let trips = self.trips.list_since(since).await?;
        let fuel_logs = self.expenses.list_fuel_logs(None).await?;
        let vehicles = self.vehicles.list(None, None).await?;
        let drivers = self.drivers.list(None).await?;

        let sales_data = sales_records(&trips);
        let performance_data = performance_records(&vehicles, &drivers, &fuel_logs, since);

        let report = self.service.generate(&sales_data, &performance_data).await?;

        Ok(report.into())
    }
}

/// Array de operación/ingresos: un objeto por viaje reciente
fn sales_records(trips: &[Trip]) -> serde_json::Value {
    json!(trips
        .iter()
        .map(|t| {
            json!({
                "trip_id": t.id,
                "vehicle_id": t.vehicle_id,
                "driver_id": t.driver_id,
                "origin": t.origin,
                "destination": t.destination,
                "revenue": t.revenue,
                "cargo_weight_kg": t.cargo_weight_kg,
                "status": t.status,
                "dispatch_date": t.dispatch_date.to_rfc3339(),
            })
        })
        .collect::<Vec<_>>())
}

/// Array de desempeño: registros heterogéneos etiquetados por record_type
fn performance_records(
    vehicles: &[Vehicle],
    drivers: &[Driver],
    fuel_logs: &[FuelLog],
    since: DateTime<Utc>,
) -> serde_json::Value {
    let mut records = Vec::new();

    for v in vehicles {
        records.push(json!({
            "record_type": "vehicle",
            "vehicle_id": v.id,
            "status": v.status,
            "odometer_km": v.odometer_km,
            "region": v.region,
        }));
    }

    for d in drivers {
        records.push(json!({
            "record_type": "driver",
            "driver_id": d.id,
            "safety_score": d.safety_score,
            "completion_rate": d.completion_rate,
            "accidents": d.accidents,
            "status": d.status,
        }));
    }

    // Solo las cargas dentro de la ventana analizada
    for f in fuel_logs.iter().filter(|f| f.log_date >= since) {
        records.push(json!({
            "record_type": "fuel_log",
            "vehicle_id": f.vehicle_id,
            "liters": f.liters,
            "cost": f.cost,
            "log_date": f.log_date.to_rfc3339(),
        }));
    }

    json!(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn dt(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap()
    }

    fn trip() -> Trip {
        Trip {
            id: "TRP-000007".to_string(),
            vehicle_id: "ab-123-cd".to_string(),
            driver_id: "DRV-000001".to_string(),
            cargo_weight_kg: Decimal::from(1_200),
            origin: "Burgos".to_string(),
            destination: "Valencia".to_string(),
            revenue: Decimal::from(2_400),
            start_odometer_km: Decimal::from(90_000),
            status: "Completed".to_string(),
            dispatch_date: dt(10),
            completion_date: Some(dt(12)),
            created_at: dt(10),
        }
    }

    fn vehicle() -> Vehicle {
        Vehicle {
            id: "ab-123-cd".to_string(),
            name: "Camión Norte".to_string(),
            model: "Actros".to_string(),
            vehicle_type: "Truck".to_string(),
            license_plate: "AB-123-CD".to_string(),
            max_capacity_kg: Decimal::from(15_000),
            odometer_km: Decimal::from(92_000),
            acquisition_cost: Decimal::from(80_000),
            status: "Available".to_string(),
            region: Some("Norte".to_string()),
            created_at: dt(1),
        }
    }

    fn driver() -> Driver {
        Driver {
            id: "DRV-000001".to_string(),
            name: "María Pérez".to_string(),
            license_number: "LIC-555".to_string(),
            license_category: "C".to_string(),
            license_expiry_date: chrono::NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            accidents: 1,
            total_trips: 40,
            completed_trips: 38,
            completion_rate: Decimal::from(95),
            safety_score: 85,
            duty_status: "On Duty".to_string(),
            status: "Available".to_string(),
            created_at: dt(1),
        }
    }

    fn fuel_log(day: u32) -> FuelLog {
        FuelLog {
            id: format!("FUEL-{:06}", day),
            vehicle_id: "ab-123-cd".to_string(),
            trip_id: None,
            liters: Decimal::from(80),
            cost: Decimal::from(140),
            odometer_km: Decimal::from(91_000),
            log_date: dt(day),
            created_at: dt(day),
        }
    }

    #[test]
    fn test_sales_records_is_an_array_of_trips() {
        let records = sales_records(&[trip()]);

        let array = records.as_array().expect("debe ser un array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["trip_id"], "TRP-000007");
        assert_eq!(array[0]["status"], "Completed");
    }

    #[test]
    fn test_performance_records_is_a_flat_tagged_array() {
        let records = performance_records(&[vehicle()], &[driver()], &[fuel_log(15)], dt(5));

        let array = records.as_array().expect("debe ser un array");
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["record_type"], "vehicle");
        assert_eq!(array[1]["record_type"], "driver");
        assert_eq!(array[2]["record_type"], "fuel_log");
    }

    #[test]
    fn test_performance_records_filters_fuel_outside_window() {
        let records = performance_records(&[], &[], &[fuel_log(3), fuel_log(20)], dt(5));

        let array = records.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["log_date"], dt(20).to_rfc3339());
    }

    #[test]
    fn test_empty_inputs_produce_empty_arrays() {
        assert_eq!(sales_records(&[]), json!([]));
        assert_eq!(performance_records(&[], &[], &[], dt(1)), json!([]));
    }
}
