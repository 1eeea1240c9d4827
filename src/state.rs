//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::insights_service::InsightsService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub insights: Arc<InsightsService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let insights = Arc::new(InsightsService::new(
            config.insights_api_url.clone(),
            config.insights_api_key.clone(),
            config.insights_model.clone(),
        ));

        Self {
            pool,
            config,
            insights,
        }
    }
}
