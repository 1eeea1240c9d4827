//! Controller del registro de conductores
//!
//! Toda alta o modificación pasa por el evaluador de cumplimiento: los
//! campos derivados se calculan aquí, del lado del servidor, y el cliente
//! no puede fijar un estado que eluda la suspensión.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest};
use crate::models::driver::{DriverStatus, DutyStatus};
use crate::repositories::driver_repository::DriverRepository;
use crate::services::compliance_service::evaluate_compliance;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate()?;

        let duty_status = DutyStatus::from_str(&request.duty_status).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Estado de servicio desconocido: '{}'",
                request.duty_status
            ))
        })?;

        if request.completed_trips > request.total_trips {
            return Err(AppError::ValidationError(
                "Los viajes completados no pueden superar los totales".to_string(),
            ));
        }

        let result = evaluate_compliance(
            request.accidents,
            request.total_trips,
            request.completed_trips,
            request.license_expiry_date,
            duty_status,
            Utc::now().date_naive(),
        );

        let completion_rate = Decimal::from_f64_retain(result.completion_rate)
            .unwrap_or(Decimal::ZERO)
            .round_dp(2);

        let driver = self
            .repository
            .create(
                generate_id("DRV"),
                request.name,
                request.license_number,
                request.license_category,
                request.license_expiry_date,
                request.accidents,
                request.total_trips,
                request.completed_trips,
                completion_rate,
                result.safety_score,
                duty_status.as_str().to_string(),
                result.status.as_str().to_string(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        Ok(driver.into())
    }

    pub async fn list(&self, filters: DriverFilters) -> Result<Vec<DriverResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if DriverStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado de conductor desconocido: '{}'",
                    status
                )));
            }
        }

        let drivers = self.repository.list(filters.status.as_deref()).await?;
        Ok(drivers.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        // Merge de campos editables sobre el registro actual
        let name = request.name.unwrap_or_else(|| current.name.clone());
        let license_number = request
            .license_number
            .unwrap_or_else(|| current.license_number.clone());
        let license_category = request
            .license_category
            .unwrap_or_else(|| current.license_category.clone());
        let license_expiry_date = request
            .license_expiry_date
            .unwrap_or(current.license_expiry_date);
        let accidents = request.accidents.unwrap_or(current.accidents);
        let total_trips = request.total_trips.unwrap_or(current.total_trips);
        let completed_trips = request.completed_trips.unwrap_or(current.completed_trips);

        if completed_trips > total_trips {
            return Err(AppError::ValidationError(
                "Los viajes completados no pueden superar los totales".to_string(),
            ));
        }

        let duty_status = match request.duty_status {
            Some(ref s) => DutyStatus::from_str(s).ok_or_else(|| {
                AppError::ValidationError(format!("Estado de servicio desconocido: '{}'", s))
            })?,
            None => current.duty_status_enum().unwrap_or(DutyStatus::OffDuty),
        };

        let result = evaluate_compliance(
            accidents,
            total_trips,
            completed_trips,
            license_expiry_date,
            duty_status,
            Utc::now().date_naive(),
        );

        // Un conductor en viaje conserva "On Trip" salvo que quede suspendido
        let status = if current.status_enum() == Some(DriverStatus::OnTrip)
            && result.status != DriverStatus::Suspended
        {
            DriverStatus::OnTrip
        } else {
            result.status
        };

        let completion_rate = Decimal::from_f64_retain(result.completion_rate)
            .unwrap_or(Decimal::ZERO)
            .round_dp(2);

        let driver = self
            .repository
            .update(
                id,
                name,
                license_number,
                license_category,
                license_expiry_date,
                accidents,
                total_trips,
                completed_trips,
                completion_rate,
                result.safety_score,
                duty_status.as_str().to_string(),
                status.as_str().to_string(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
