//! Repositorio de gastos y cargas de combustible

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::expense::{Expense, FuelLog};
use crate::utils::errors::AppError;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_expense(
        &self,
        id: String,
        vehicle_id: String,
        trip_id: Option<String>,
        amount: Decimal,
        category: String,
        description: Option<String>,
        expense_date: DateTime<Utc>,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (id, vehicle_id, trip_id, amount, category, description,
                                  expense_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(trip_id)
        .bind(amount)
        .bind(category)
        .bind(description)
        .bind(expense_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating expense: {}", e)))?;

        Ok(expense)
    }

    pub async fn list_expenses(&self, vehicle_id: Option<&str>) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE ($1::text IS NULL OR vehicle_id = $1)
            ORDER BY expense_date DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing expenses: {}", e)))?;

        Ok(expenses)
    }

    /// Superconjunto de gastos candidatos para un viaje; el agregador puro
    /// aplica la regla de atribución exacta sobre este resultado.
    pub async fn expenses_for_trip(
        &self,
        trip_id: &str,
        vehicle_id: &str,
    ) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE trip_id = $1 OR vehicle_id = $2",
        )
        .bind(trip_id)
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing trip expenses: {}", e)))?;

        Ok(expenses)
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting expense: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Expense '{}' not found", id)));
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_fuel_log(
        &self,
        id: String,
        vehicle_id: String,
        trip_id: Option<String>,
        liters: Decimal,
        cost: Decimal,
        odometer_km: Decimal,
        log_date: DateTime<Utc>,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO fuel_logs (id, vehicle_id, trip_id, liters, cost, odometer_km,
                                   log_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(trip_id)
        .bind(liters)
        .bind(cost)
        .bind(odometer_km)
        .bind(log_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating fuel log: {}", e)))?;

        Ok(log)
    }

    pub async fn list_fuel_logs(&self, vehicle_id: Option<&str>) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM fuel_logs
            WHERE ($1::text IS NULL OR vehicle_id = $1)
            ORDER BY log_date DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing fuel logs: {}", e)))?;

        Ok(logs)
    }

    pub async fn fuel_logs_for_trip(
        &self,
        trip_id: &str,
        vehicle_id: &str,
    ) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            "SELECT * FROM fuel_logs WHERE trip_id = $1 OR vehicle_id = $2",
        )
        .bind(trip_id)
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing trip fuel logs: {}", e)))?;

        Ok(logs)
    }
}
