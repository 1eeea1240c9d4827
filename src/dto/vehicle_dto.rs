//! DTOs de vehículos

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: String,

    #[validate(length(min = 4, max = 20))]
    pub license_plate: String,

    pub max_capacity_kg: Decimal,

    pub odometer_km: Option<Decimal>,

    pub acquisition_cost: Option<Decimal>,

    #[validate(length(min = 2, max = 50))]
    pub region: Option<String>,
}

/// Request para actualizar un vehículo existente (semántica de merge)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: Option<String>,

    pub max_capacity_kg: Option<Decimal>,

    pub odometer_km: Option<Decimal>,

    pub acquisition_cost: Option<Decimal>,

    pub status: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub region: Option<String>,
}

/// Request para cambiar solo el estado del vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: String,
}

/// Filtros para listar vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<String>,
    pub region: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub name: String,
    pub model: String,
    pub vehicle_type: String,
    pub license_plate: String,
    pub max_capacity_kg: Decimal,
    pub odometer_km: Decimal,
    pub acquisition_cost: Decimal,
    pub status: String,
    pub region: Option<String>,
    pub created_at: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            vehicle_type: vehicle.vehicle_type,
            license_plate: vehicle.license_plate,
            max_capacity_kg: vehicle.max_capacity_kg,
            odometer_km: vehicle.odometer_km,
            acquisition_cost: vehicle.acquisition_cost,
            status: vehicle.status,
            region: vehicle.region,
            created_at: vehicle.created_at.to_rfc3339(),
        }
    }
}
