//! Repositorio de viajes

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::trip::{Trip, TripStatus};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        id: String,
        vehicle_id: String,
        driver_id: String,
        cargo_weight_kg: Decimal,
        origin: String,
        destination: String,
        revenue: Decimal,
        start_odometer_km: Decimal,
    ) -> Result<Trip, AppError> {
        let now = Utc::now();
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, vehicle_id, driver_id, cargo_weight_kg, origin, destination,
                               revenue, start_odometer_km, status, dispatch_date, completion_date,
                               created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'Scheduled', $9, NULL, $10)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(cargo_weight_kg)
        .bind(origin)
        .bind(destination)
        .bind(revenue)
        .bind(start_odometer_km)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating trip: {}", e)))?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding trip: {}", e)))?;

        Ok(trip)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM trips WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error checking trip: {}", e)))?;

        Ok(result.0)
    }

    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY dispatch_date DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing trips: {}", e)))?;

        Ok(trips)
    }

    /// Viajes despachados desde una fecha (para el reporte de insights)
    pub async fn list_since(&self, since: DateTime<Utc>) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE dispatch_date >= $1 ORDER BY dispatch_date DESC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing recent trips: {}", e)))?;

        Ok(trips)
    }

    pub async fn update_status(&self, id: &str, status: TripStatus) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            "UPDATE trips SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating trip status: {}", e)))?;

        Ok(trip)
    }

    /// Marcar un viaje como completado estampando la fecha de finalización
    pub async fn complete(&self, id: &str, completion_date: DateTime<Utc>) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = 'Completed', completion_date = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(completion_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error completing trip: {}", e)))?;

        Ok(trip)
    }
}
