//! DTOs de conductores
//!
//! Los campos derivados (completion_rate, safety_score, status) nunca se
//! aceptan del cliente: siempre los calcula el evaluador de cumplimiento.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::driver::Driver;

/// Request para dar de alta un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    pub license_number: String,

    #[validate(length(min = 1, max = 10))]
    pub license_category: String,

    pub license_expiry_date: NaiveDate,

    #[validate(range(min = 0))]
    pub accidents: i32,

    #[validate(range(min = 0))]
    pub total_trips: i32,

    #[validate(range(min = 0))]
    pub completed_trips: i32,

    // "On Duty" u "Off Duty"
    pub duty_status: String,
}

/// Request para modificar un conductor (semántica de merge)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 3, max = 50))]
    pub license_number: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub license_category: Option<String>,

    pub license_expiry_date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub accidents: Option<i32>,

    #[validate(range(min = 0))]
    pub total_trips: Option<i32>,

    #[validate(range(min = 0))]
    pub completed_trips: Option<i32>,

    pub duty_status: Option<String>,
}

/// Filtros para listar conductores
#[derive(Debug, Deserialize)]
pub struct DriverFilters {
    pub status: Option<String>,
}

/// Response de conductor para la API
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: String,
    pub name: String,
    pub license_number: String,
    pub license_category: String,
    pub license_expiry_date: NaiveDate,
    pub accidents: i32,
    pub total_trips: i32,
    pub completed_trips: i32,
    pub completion_rate: Decimal,
    pub safety_score: i32,
    pub duty_status: String,
    pub status: String,
    pub created_at: String,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            license_number: driver.license_number,
            license_category: driver.license_category,
            license_expiry_date: driver.license_expiry_date,
            accidents: driver.accidents,
            total_trips: driver.total_trips,
            completed_trips: driver.completed_trips,
            completion_rate: driver.completion_rate,
            safety_score: driver.safety_score,
            duty_status: driver.duty_status,
            status: driver.status,
            created_at: driver.created_at.to_rfc3339(),
        }
    }
}
