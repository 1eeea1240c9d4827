//! Modelos de Expense y Fuel Log
//!
//! Registros de costos asociados a un vehículo y, opcionalmente, a un
//! viaje. trip_id es opcional a nivel de fila para soportar registros
//! históricos sin asociación explícita; el agregador aplica la heurística
//! de rango de fechas solo a esas filas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Expense - mapea a la tabla expenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: String,
    pub vehicle_id: String,
    pub trip_id: Option<String>,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub expense_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fuel log - mapea a la tabla fuel_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelLog {
    pub id: String,
    pub vehicle_id: String,
    pub trip_id: Option<String>,
    pub liters: Decimal,
    pub cost: Decimal,
    pub odometer_km: Decimal,
    pub log_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
