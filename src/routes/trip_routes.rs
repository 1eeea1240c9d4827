//! Rutas del despachador de viajes
//!
//! El avance de etapa es un endpoint propio: el estado del viaje nunca se
//! escribe directamente desde el cliente.

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::common::ApiResponse;
use crate::dto::trip_dto::{
    AvailableResourcesResponse, CreateTripRequest, TripCostsResponse, TripFilters, TripResponse,
};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{AuthUser, Capability};
use crate::services::role_service::require_capability;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(dispatch_trip))
        .route("/", get(list_trips))
        .route("/available-resources", get(available_resources))
        .route("/:id", get(get_trip))
        .route("/:id/advance", post(advance_trip))
        .route("/:id/costs", get(trip_costs))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn available_resources(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<AvailableResourcesResponse>, AppError> {
    require_capability(&auth, Capability::DispatchTrips)?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.available_resources().await?;
    Ok(Json(response))
}

async fn dispatch_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    require_capability(&auth, Capability::DispatchTrips)?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.dispatch(request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(filters): Query<TripFilters>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn advance_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    require_capability(&auth, Capability::AdvanceTrips)?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.advance(&id).await?;
    Ok(Json(response))
}

async fn trip_costs(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<TripCostsResponse>, AppError> {
    require_capability(&auth, Capability::ViewFinancials)?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.costs(&id).await?;
    Ok(Json(response))
}
