//! Servicios del dominio
//!
//! Lógica de negocio pura (evaluador de cumplimiento, precondiciones de
//! despacho, agregación de costos, resolución de roles) y clientes de
//! servicios externos.

pub mod compliance_service;
pub mod expense_aggregation;
pub mod insights_service;
pub mod role_service;
pub mod trip_lifecycle;
