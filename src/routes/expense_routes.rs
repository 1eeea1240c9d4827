//! Rutas del libro de gastos y combustible

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post},
    Extension, Json, Router,
};

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::common::ApiResponse;
use crate::dto::expense_dto::{
    CreateExpenseRequest, CreateFuelLogRequest, ExpenseResponse, FuelLogResponse, LedgerFilters,
};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{AuthUser, Capability};
use crate::services::role_service::require_capability;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_expense))
        .route("/", get(list_expenses))
        .route("/:id", delete(delete_expense))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

pub fn create_fuel_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_fuel_log))
        .route("/", get(list_fuel_logs))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_expense(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, AppError> {
    require_capability(&auth, Capability::RecordExpenses)?;
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create_expense(request).await?;
    Ok(Json(response))
}

async fn list_expenses(
    State(state): State<AppState>,
    Query(filters): Query<LedgerFilters>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list_expenses(filters).await?;
    Ok(Json(response))
}

async fn delete_expense(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_capability(&auth, Capability::RecordExpenses)?;
    let controller = ExpenseController::new(state.pool.clone());
    controller.delete_expense(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Gasto eliminado exitosamente"
    })))
}

async fn create_fuel_log(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLogResponse>>, AppError> {
    require_capability(&auth, Capability::RecordExpenses)?;
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create_fuel_log(request).await?;
    Ok(Json(response))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    Query(filters): Query<LedgerFilters>,
) -> Result<Json<Vec<FuelLogResponse>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list_fuel_logs(filters).await?;
    Ok(Json(response))
}
