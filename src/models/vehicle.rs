//! Modelo de Vehicle
//!
//! Mapea a la tabla vehicles. El id de texto se deriva de la matrícula
//! slugificada; la primary key garantiza la unicidad de la matrícula.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InShop,
    Retired,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On Trip",
            VehicleStatus::InShop => "In Shop",
            VehicleStatus::Retired => "Retired",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(VehicleStatus::Available),
            "On Trip" => Some(VehicleStatus::OnTrip),
            "In Shop" => Some(VehicleStatus::InShop),
            "Retired" => Some(VehicleStatus::Retired),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn status_enum(&self) -> Option<VehicleStatus> {
        VehicleStatus::from_str(&self.status)
    }
}
