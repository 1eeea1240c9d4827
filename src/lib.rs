//! Fleet Ops - backend de gestión de flota
//!
//! Los módulos se exponen como librería para que el binario y los tests
//! de integración monten los mismos routers.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
