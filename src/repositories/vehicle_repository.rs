//! Repositorio de vehículos

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        id: String,
        name: String,
        model: String,
        vehicle_type: String,
        license_plate: String,
        max_capacity_kg: Decimal,
        odometer_km: Decimal,
        acquisition_cost: Decimal,
        region: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, name, model, vehicle_type, license_plate, max_capacity_kg,
                                  odometer_km, acquisition_cost, status, region, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'Available', $9, $10)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(model)
        .bind(vehicle_type)
        .bind(license_plate)
        .bind(max_capacity_kg)
        .bind(odometer_km)
        .bind(acquisition_cost)
        .bind(region)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking vehicle: {}", e)))?;

        Ok(result.0)
    }

    pub async fn list(
        &self,
        status: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR region = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .bind(region)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn list_by_status(&self, status: VehicleStatus) -> Result<Vec<Vehicle>, AppError> {
        self.list(Some(status.as_str()), None).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: &str,
        name: Option<String>,
        model: Option<String>,
        vehicle_type: Option<String>,
        max_capacity_kg: Option<Decimal>,
        odometer_km: Option<Decimal>,
        acquisition_cost: Option<Decimal>,
        status: Option<String>,
        region: Option<String>,
    ) -> Result<Vehicle, AppError> {
        // Semántica de merge: los campos ausentes conservan su valor
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle '{}' not found", id)))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, model = $3, vehicle_type = $4, max_capacity_kg = $5,
                odometer_km = $6, acquisition_cost = $7, status = $8, region = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(model.unwrap_or(current.model))
        .bind(vehicle_type.unwrap_or(current.vehicle_type))
        .bind(max_capacity_kg.unwrap_or(current.max_capacity_kg))
        .bind(odometer_km.unwrap_or(current.odometer_km))
        .bind(acquisition_cost.unwrap_or(current.acquisition_cost))
        .bind(status.unwrap_or(current.status))
        .bind(region.or(current.region))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn update_status(&self, id: &str, status: VehicleStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE vehicles SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error updating vehicle status: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vehicle '{}' not found", id)));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting vehicle: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vehicle '{}' not found", id)));
        }

        Ok(())
    }
}
