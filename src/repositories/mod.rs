//! Repositorios de acceso a datos

pub mod driver_repository;
pub mod expense_repository;
pub mod maintenance_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
