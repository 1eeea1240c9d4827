//! Controller del registro de flota

use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, UpdateVehicleStatusRequest, VehicleFilters,
    VehicleResponse,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::ids::slugify;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        if request.max_capacity_kg <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "La capacidad máxima debe ser mayor que cero".to_string(),
            ));
        }

        // El id es la matrícula slugificada; la PK garantiza unicidad
        let id = slugify(&request.license_plate);
        if id.is_empty() {
            return Err(AppError::ValidationError("Matrícula inválida".to_string()));
        }

        if self.repository.exists(&id).await? {
            return Err(AppError::Conflict(format!(
                "La matrícula '{}' ya está registrada",
                request.license_plate
            )));
        }

        let vehicle = self
            .repository
            .create(
                id,
                request.name,
                request.model,
                request.vehicle_type,
                request.license_plate,
                request.max_capacity_kg,
                request.odometer_km.unwrap_or(Decimal::ZERO),
                request.acquisition_cost.unwrap_or(Decimal::ZERO),
                request.region,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if VehicleStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado de vehículo desconocido: '{}'",
                    status
                )));
            }
        }

        let vehicles = self
            .repository
            .list(filters.status.as_deref(), filters.region.as_deref())
            .await?;

        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        if let Some(capacity) = request.max_capacity_kg {
            if capacity <= Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "La capacidad máxima debe ser mayor que cero".to_string(),
                ));
            }
        }

        if let Some(ref status) = request.status {
            if VehicleStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado de vehículo desconocido: '{}'",
                    status
                )));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.model,
                request.vehicle_type,
                request.max_capacity_kg,
                request.odometer_km,
                request.acquisition_cost,
                request.status,
                request.region,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateVehicleStatusRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let status = VehicleStatus::from_str(&request.status).ok_or_else(|| {
            AppError::ValidationError(format!("Estado de vehículo desconocido: '{}'", request.status))
        })?;

        self.repository.update_status(id, status).await?;

        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Estado del vehículo actualizado".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
