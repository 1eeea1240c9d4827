//! Controller del libro de gastos y combustible

use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::expense_dto::{
    CreateExpenseRequest, CreateFuelLogRequest, ExpenseResponse, FuelLogResponse, LedgerFilters,
};
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct ExpenseController {
    expenses: ExpenseRepository,
    trips: TripRepository,
    vehicles: VehicleRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Validaciones comunes a ambos tipos de registro
    async fn check_references(
        &self,
        vehicle_id: &str,
        trip_id: Option<&str>,
    ) -> Result<(), AppError> {
        if !self.vehicles.exists(vehicle_id).await? {
            return Err(AppError::NotFound(format!(
                "Vehículo '{}' no encontrado",
                vehicle_id
            )));
        }

        // trip_id explícito: debe referenciar un viaje real
        if let Some(trip_id) = trip_id {
            if !self.trips.exists(trip_id).await? {
                return Err(AppError::ValidationError(format!(
                    "El viaje asociado '{}' no existe",
                    trip_id
                )));
            }
        }

        Ok(())
    }

    pub async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, AppError> {
        request.validate()?;

        if request.amount <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El monto debe ser mayor que cero".to_string(),
            ));
        }

        self.check_references(&request.vehicle_id, request.trip_id.as_deref())
            .await?;

        let expense = self
            .expenses
            .create_expense(
                generate_id("EXP"),
                request.vehicle_id,
                request.trip_id,
                request.amount,
                request.category,
                request.description,
                request.expense_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            expense.into(),
            "Gasto registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_expenses(&self, filters: LedgerFilters) -> Result<Vec<ExpenseResponse>, AppError> {
        let expenses = self.expenses.list_expenses(filters.vehicle_id.as_deref()).await?;
        Ok(expenses.into_iter().map(Into::into).collect())
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), AppError> {
        self.expenses.delete_expense(id).await?;
        Ok(())
    }

    pub async fn create_fuel_log(
        &self,
        request: CreateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLogResponse>, AppError> {
        request.validate()?;

        if request.cost <= Decimal::ZERO || request.liters <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El costo y los litros deben ser mayores que cero".to_string(),
            ));
        }

        self.check_references(&request.vehicle_id, request.trip_id.as_deref())
            .await?;

        let log = self
            .expenses
            .create_fuel_log(
                generate_id("FUEL"),
                request.vehicle_id,
                request.trip_id,
                request.liters,
                request.cost,
                request.odometer_km,
                request.log_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Carga de combustible registrada exitosamente".to_string(),
        ))
    }

    pub async fn list_fuel_logs(&self, filters: LedgerFilters) -> Result<Vec<FuelLogResponse>, AppError> {
        let logs = self.expenses.list_fuel_logs(filters.vehicle_id.as_deref()).await?;
        Ok(logs.into_iter().map(Into::into).collect())
    }
}
