//! Rutas de la API

pub mod auth_routes;
pub mod driver_routes;
pub mod expense_routes;
pub mod insights_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;
