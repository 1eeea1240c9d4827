//! Repositorio de conductores

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::driver::{Driver, DriverStatus};
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        id: String,
        name: String,
        license_number: String,
        license_category: String,
        license_expiry_date: NaiveDate,
        accidents: i32,
        total_trips: i32,
        completed_trips: i32,
        completion_rate: Decimal,
        safety_score: i32,
        duty_status: String,
        status: String,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, name, license_number, license_category, license_expiry_date,
                                 accidents, total_trips, completed_trips, completion_rate,
                                 safety_score, duty_status, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(license_number)
        .bind(license_category)
        .bind(license_expiry_date)
        .bind(accidents)
        .bind(total_trips)
        .bind(completed_trips)
        .bind(completion_rate)
        .bind(safety_score)
        .bind(duty_status)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating driver: {}", e)))?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding driver: {}", e)))?;

        Ok(driver)
    }

    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing drivers: {}", e)))?;

        Ok(drivers)
    }

    pub async fn list_by_status(&self, status: DriverStatus) -> Result<Vec<Driver>, AppError> {
        self.list(Some(status.as_str())).await
    }

    /// Persistir una modificación completa con los campos derivados ya evaluados
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: &str,
        name: String,
        license_number: String,
        license_category: String,
        license_expiry_date: NaiveDate,
        accidents: i32,
        total_trips: i32,
        completed_trips: i32,
        completion_rate: Decimal,
        safety_score: i32,
        duty_status: String,
        status: String,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = $2, license_number = $3, license_category = $4, license_expiry_date = $5,
                accidents = $6, total_trips = $7, completed_trips = $8, completion_rate = $9,
                safety_score = $10, duty_status = $11, status = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(license_number)
        .bind(license_category)
        .bind(license_expiry_date)
        .bind(accidents)
        .bind(total_trips)
        .bind(completed_trips)
        .bind(completion_rate)
        .bind(safety_score)
        .bind(duty_status)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating driver: {}", e)))?;

        Ok(driver)
    }

    pub async fn update_status(&self, id: &str, status: DriverStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE drivers SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error updating driver status: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Driver '{}' not found", id)));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting driver: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Driver '{}' not found", id)));
        }

        Ok(())
    }
}
