//! DTOs de mantenimiento

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::maintenance::MaintenanceLog;

/// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(length(min = 2, max = 100))]
    pub service_type: String,

    pub service_date: NaiveDate,

    pub cost: Decimal,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Response de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: String,
    pub vehicle_id: String,
    pub service_type: String,
    pub service_date: NaiveDate,
    pub cost: Decimal,
    pub notes: Option<String>,
    pub status: String,
}

impl From<MaintenanceLog> for MaintenanceResponse {
    fn from(log: MaintenanceLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            service_type: log.service_type,
            service_date: log.service_date,
            cost: log.cost,
            notes: log.notes,
            status: log.status,
        }
    }
}
