//! Modelo de Maintenance Log
//!
//! Crear un registro de mantenimiento fuerza al vehículo asociado al
//! estado "In Shop" como efecto secundario.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maintenance log - mapea a la tabla maintenance_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceLog {
    pub id: String,
    pub vehicle_id: String,
    pub service_type: String,
    pub service_date: NaiveDate,
    pub cost: Decimal,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
