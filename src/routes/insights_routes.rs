//! Rutas del generador de insights

use axum::{extract::State, middleware, routing::post, Extension, Json, Router};

use crate::controllers::insights_controller::InsightsController;
use crate::dto::insights_dto::{GenerateInsightsRequest, InsightsResponse};
use crate::middleware::auth_middleware::auth_middleware;
use crate::models::auth::{AuthUser, Capability};
use crate::services::role_service::require_capability;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_insights_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_insights))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn generate_insights(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<GenerateInsightsRequest>,
) -> Result<Json<InsightsResponse>, AppError> {
    require_capability(&auth, Capability::ViewInsights)?;
    let controller = InsightsController::new(state.pool.clone(), state.insights.clone());
    let response = controller.generate(request).await?;
    Ok(Json(response))
}
