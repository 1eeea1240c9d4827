//! Modelos del dominio
//!
//! Structs que mapean a las tablas PostgreSQL y enums de estado.

pub mod auth;
pub mod driver;
pub mod expense;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
