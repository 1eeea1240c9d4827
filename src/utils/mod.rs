//! Utilidades compartidas

pub mod errors;
pub mod ids;
pub mod jwt;
