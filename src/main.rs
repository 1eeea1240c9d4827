use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_ops::config::environment::EnvironmentConfig;
use fleet_ops::database::DatabaseConnection;
use fleet_ops::middleware::cors::cors_middleware;
use fleet_ops::routes;
use fleet_ops::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fleet Ops - Backend de gestión de flota");
    info!("==========================================");

    let environment = EnvironmentConfig::from_env();

    // Inicializar base de datos (incluye migraciones)
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    let app_state = AppState::new(pool, environment.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(app_state.clone()))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router(app_state.clone()))
        .nest("/api/driver", routes::driver_routes::create_driver_router(app_state.clone()))
        .nest("/api/trip", routes::trip_routes::create_trip_router(app_state.clone()))
        .nest("/api/expense", routes::expense_routes::create_expense_router(app_state.clone()))
        .nest("/api/fuel", routes::expense_routes::create_fuel_router(app_state.clone()))
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router(app_state.clone()))
        .nest("/api/insights", routes::insights_routes::create_insights_router(app_state.clone()))
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", environment.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Sesión actual");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   PATCH /api/vehicle/:id/status - Cambiar estado");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("🧑 Endpoints - Driver:");
    info!("   POST /api/driver - Registrar conductor");
    info!("   GET  /api/driver - Listar conductores");
    info!("   GET  /api/driver/:id - Obtener conductor");
    info!("   PUT  /api/driver/:id - Actualizar conductor");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("🚚 Endpoints - Trip:");
    info!("   POST /api/trip - Despachar viaje");
    info!("   GET  /api/trip - Listar viajes");
    info!("   GET  /api/trip/available-resources - Recursos disponibles");
    info!("   GET  /api/trip/:id - Obtener viaje");
    info!("   POST /api/trip/:id/advance - Avanzar etapa");
    info!("   GET  /api/trip/:id/costs - Costos del viaje");
    info!("💰 Endpoints - Expense / Fuel:");
    info!("   POST /api/expense - Registrar gasto");
    info!("   GET  /api/expense - Listar gastos");
    info!("   DELETE /api/expense/:id - Eliminar gasto");
    info!("   POST /api/fuel - Registrar combustible");
    info!("   GET  /api/fuel - Listar cargas");
    info!("🔧 Endpoints - Maintenance:");
    info!("   POST /api/maintenance - Registrar mantenimiento");
    info!("   GET  /api/maintenance - Listar mantenimientos");
    info!("   GET  /api/maintenance/vehicle/:vehicle_id - Por vehículo");
    info!("🤖 Endpoints - Insights:");
    info!("   POST /api/insights/generate - Generar reporte");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet_ops",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
