//! DTOs de la API
//!
//! Requests con validación y responses sin campos sensibles.

pub mod auth_dto;
pub mod common;
pub mod driver_dto;
pub mod expense_dto;
pub mod insights_dto;
pub mod maintenance_dto;
pub mod trip_dto;
pub mod vehicle_dto;
