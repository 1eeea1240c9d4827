//! Controller de mantenimiento
//!
//! Registrar un mantenimiento fuerza al vehículo a "In Shop" como efecto
//! secundario (escritura secuencial, sin rollback). Completar el registro
//! no restaura el estado del vehículo automáticamente.

use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct MaintenanceController {
    maintenance: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            maintenance: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        request.validate()?;

        if request.cost < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El costo no puede ser negativo".to_string(),
            ));
        }

        if !self.vehicles.exists(&request.vehicle_id).await? {
            return Err(AppError::NotFound(format!(
                "Vehículo '{}' no encontrado",
                request.vehicle_id
            )));
        }

        let vehicle_id = request.vehicle_id.clone();

        let log = self
            .maintenance
            .create(
                generate_id("MNT"),
                request.vehicle_id,
                request.service_type,
                request.service_date,
                request.cost,
                request.notes,
                "Scheduled".to_string(),
            )
            .await?;

        // Efecto secundario: el vehículo entra al taller
        if let Err(e) = self.vehicles.update_status(&vehicle_id, VehicleStatus::InShop).await {
            tracing::warn!(
                "⚠️ Mantenimiento {} registrado pero el vehículo {} no pasó a 'In Shop' ({})",
                log.id,
                vehicle_id,
                e
            );
        }

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Mantenimiento registrado; vehículo enviado al taller".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceResponse>, AppError> {
        let logs = self.maintenance.list().await?;
        Ok(logs.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<MaintenanceResponse>, AppError> {
        let logs = self.maintenance.list_by_vehicle(vehicle_id).await?;
        Ok(logs.into_iter().map(Into::into).collect())
    }
}
