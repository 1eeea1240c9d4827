//! Controller del despachador de viajes
//!
//! El despacho es una única operación de servicio que realiza las tres
//! escrituras en secuencia: crear el viaje, marcar el vehículo "On Trip"
//! y marcar el conductor "On Trip". No hay rollback; un fallo posterior
//! a la creación del viaje se registra como inconsistencia parcial en el
//! log en lugar de perderse en silencio.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::trip_dto::{
    AvailableResourcesResponse, CreateTripRequest, TripCostsResponse, TripFilters, TripResponse,
};
use crate::models::driver::DriverStatus;
use crate::models::trip::TripStatus;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::expense_aggregation::trip_costs;
use crate::services::trip_lifecycle::{advance_step, validate_dispatch, AdvanceStep};
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct TripController {
    trips: TripRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    expenses: ExpenseRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool),
        }
    }

    /// Recursos seleccionables: solo vehículos y conductores disponibles
    pub async fn available_resources(&self) -> Result<AvailableResourcesResponse, AppError> {
        let vehicles = self.vehicles.list_by_status(VehicleStatus::Available).await?;
        let drivers = self.drivers.list_by_status(DriverStatus::Available).await?;

        Ok(AvailableResourcesResponse {
            vehicles: vehicles.into_iter().map(Into::into).collect(),
            drivers: drivers.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn dispatch(
        &self,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .trips_vehicle(&request.vehicle_id)
            .await?;

        let driver = self
            .drivers
            .find_by_id(&request.driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        // Precondiciones puras: ninguna escritura antes de este punto
        validate_dispatch(request.cargo_weight_kg, &vehicle, &driver)?;

        let trip = self
            .trips
            .create(
                generate_id("TRP"),
                vehicle.id.clone(),
                driver.id.clone(),
                request.cargo_weight_kg,
                request.origin,
                request.destination,
                request.revenue.unwrap_or(Decimal::ZERO),
                // El odómetro actual del vehículo queda registrado como inicio
                vehicle.odometer_km,
            )
            .await?;

        tracing::info!(
            "🚚 Viaje {} despachado: vehículo {} / conductor {}",
            trip.id,
            vehicle.id,
            driver.id
        );

        // Escrituras dependientes, secuenciales y sin rollback
        if let Err(e) = self.vehicles.update_status(&vehicle.id, VehicleStatus::OnTrip).await {
            tracing::warn!(
                "⚠️ Despacho parcial: viaje {} creado pero el vehículo {} no pasó a 'On Trip' ({})",
                trip.id,
                vehicle.id,
                e
            );
        }

        if let Err(e) = self.drivers.update_status(&driver.id, DriverStatus::OnTrip).await {
            tracing::warn!(
                "⚠️ Despacho parcial: viaje {} creado pero el conductor {} no pasó a 'On Trip' ({})",
                trip.id,
                driver.id,
                e
            );
        }

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Viaje despachado exitosamente".to_string(),
        ))
    }

    async fn trips_vehicle(&self, vehicle_id: &str) -> Result<crate::models::vehicle::Vehicle, AppError> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<TripResponse, AppError> {
        let trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(trip.into())
    }

    pub async fn list(&self, filters: TripFilters) -> Result<Vec<TripResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if TripStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado de viaje desconocido: '{}'",
                    status
                )));
            }
        }

        let trips = self.trips.list(filters.status.as_deref()).await?;
        Ok(trips.into_iter().map(Into::into).collect())
    }

    /// Avanzar el viaje a la siguiente etapa del ciclo de vida
    ///
    /// Sin saltos ni retrocesos; sobre un viaje Completed es un no-op.
    /// Al llegar a Completed se estampa completion_date y se liberan el
    /// vehículo y el conductor.
    pub async fn advance(&self, id: &str) -> Result<ApiResponse<TripResponse>, AppError> {
        let trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        match advance_step(&trip)? {
            AdvanceStep::NoOp => Ok(ApiResponse::success_with_message(
                trip.into(),
                "El viaje ya está completado".to_string(),
            )),

            AdvanceStep::Transition(next) => {
                let updated = self.trips.update_status(id, next).await?;

                Ok(ApiResponse::success_with_message(
                    updated.into(),
                    format!("Viaje avanzado a '{}'", next.as_str()),
                ))
            }

            AdvanceStep::Complete(closure) => {
                let completed = self.trips.complete(id, Utc::now()).await?;

                tracing::info!("🏁 Viaje {} completado", completed.id);

                // Liberar recursos: de vuelta a Available, sin rollback
                if let Err(e) = self
                    .vehicles
                    .update_status(&closure.vehicle_id, VehicleStatus::Available)
                    .await
                {
                    tracing::warn!(
                        "⚠️ Cierre parcial: viaje {} completado pero el vehículo {} no se liberó ({})",
                        completed.id,
                        closure.vehicle_id,
                        e
                    );
                }

                if let Err(e) = self
                    .drivers
                    .update_status(&closure.driver_id, DriverStatus::Available)
                    .await
                {
                    tracing::warn!(
                        "⚠️ Cierre parcial: viaje {} completado pero el conductor {} no se liberó ({})",
                        completed.id,
                        closure.driver_id,
                        e
                    );
                }

                Ok(ApiResponse::success_with_message(
                    completed.into(),
                    format!("Viaje avanzado a '{}'", TripStatus::Completed.as_str()),
                ))
            }
        }
    }

    /// Costos de combustible y gastos varios atribuidos al viaje
    pub async fn costs(&self, id: &str) -> Result<TripCostsResponse, AppError> {
        let trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let expenses = self.expenses.expenses_for_trip(&trip.id, &trip.vehicle_id).await?;
        let fuel_logs = self.expenses.fuel_logs_for_trip(&trip.id, &trip.vehicle_id).await?;

        let costs = trip_costs(&trip, &expenses, &fuel_logs);

        Ok(TripCostsResponse::new(trip.id, costs))
    }
}
