//! DTOs de viajes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::driver_dto::DriverResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::trip::Trip;
use crate::services::expense_aggregation::TripCosts;

/// Request para despachar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(length(min = 1))]
    pub driver_id: String,

    pub cargo_weight_kg: Decimal,

    #[validate(length(min = 2, max = 100))]
    pub origin: String,

    #[validate(length(min = 2, max = 100))]
    pub destination: String,

    pub revenue: Option<Decimal>,
}

/// Filtros para listar viajes
#[derive(Debug, Deserialize)]
pub struct TripFilters {
    pub status: Option<String>,
}

/// Response de viaje para la API
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub cargo_weight_kg: Decimal,
    pub origin: String,
    pub destination: String,
    pub revenue: Decimal,
    pub start_odometer_km: Decimal,
    pub status: String,
    pub dispatch_date: String,
    pub completion_date: Option<String>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            driver_id: trip.driver_id,
            cargo_weight_kg: trip.cargo_weight_kg,
            origin: trip.origin,
            destination: trip.destination,
            revenue: trip.revenue,
            start_odometer_km: trip.start_odometer_km,
            status: trip.status,
            dispatch_date: trip.dispatch_date.to_rfc3339(),
            completion_date: trip.completion_date.map(|d| d.to_rfc3339()),
        }
    }
}

/// Recursos seleccionables para despachar: solo vehículos y conductores
/// en estado Available
#[derive(Debug, Serialize)]
pub struct AvailableResourcesResponse {
    pub vehicles: Vec<VehicleResponse>,
    pub drivers: Vec<DriverResponse>,
}

/// Costos atribuidos a un viaje
#[derive(Debug, Serialize)]
pub struct TripCostsResponse {
    pub trip_id: String,
    pub fuel_cost: Decimal,
    pub misc_cost: Decimal,
    pub total_cost: Decimal,
}

impl TripCostsResponse {
    pub fn new(trip_id: String, costs: TripCosts) -> Self {
        Self {
            trip_id,
            fuel_cost: costs.fuel_cost,
            misc_cost: costs.misc_cost,
            total_cost: costs.total_cost,
        }
    }
}
