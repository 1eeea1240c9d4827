//! Repositorio de registros de mantenimiento

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::maintenance::MaintenanceLog;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        id: String,
        vehicle_id: String,
        service_type: String,
        service_date: NaiveDate,
        cost: Decimal,
        notes: Option<String>,
        status: String,
    ) -> Result<MaintenanceLog, AppError> {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (id, vehicle_id, service_type, service_date, cost,
                                          notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(service_type)
        .bind(service_date)
        .bind(cost)
        .bind(notes)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating maintenance log: {}", e)))?;

        Ok(log)
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs ORDER BY service_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing maintenance logs: {}", e)))?;

        Ok(logs)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs WHERE vehicle_id = $1 ORDER BY service_date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing vehicle maintenance: {}", e)))?;

        Ok(logs)
    }
}
