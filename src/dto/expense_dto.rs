//! DTOs de gastos y combustible

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::expense::{Expense, FuelLog};

/// Request para registrar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    // Asociación explícita al viaje; si viene, debe existir
    pub trip_id: Option<String>,

    pub amount: Decimal,

    #[validate(length(min = 2, max = 50))]
    pub category: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    pub expense_date: DateTime<Utc>,
}

/// Request para registrar una carga de combustible
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    pub trip_id: Option<String>,

    pub liters: Decimal,

    pub cost: Decimal,

    pub odometer_km: Decimal,

    pub log_date: DateTime<Utc>,
}

/// Filtros por vehículo
#[derive(Debug, Deserialize)]
pub struct LedgerFilters {
    pub vehicle_id: Option<String>,
}

/// Response de gasto
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub vehicle_id: String,
    pub trip_id: Option<String>,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub expense_date: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            vehicle_id: expense.vehicle_id,
            trip_id: expense.trip_id,
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
            expense_date: expense.expense_date.to_rfc3339(),
        }
    }
}

/// Response de carga de combustible
#[derive(Debug, Serialize)]
pub struct FuelLogResponse {
    pub id: String,
    pub vehicle_id: String,
    pub trip_id: Option<String>,
    pub liters: Decimal,
    pub cost: Decimal,
    pub odometer_km: Decimal,
    pub log_date: String,
}

impl From<FuelLog> for FuelLogResponse {
    fn from(log: FuelLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            trip_id: log.trip_id,
            liters: log.liters,
            cost: log.cost,
            odometer_km: log.odometer_km,
            log_date: log.log_date.to_rfc3339(),
        }
    }
}
