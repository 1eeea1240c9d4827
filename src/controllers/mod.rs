//! Controllers de la API

pub mod auth_controller;
pub mod driver_controller;
pub mod expense_controller;
pub mod insights_controller;
pub mod maintenance_controller;
pub mod trip_controller;
pub mod vehicle_controller;
