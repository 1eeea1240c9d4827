//! Modelo de Trip
//!
//! Mapea a la tabla trips. El estado avanza en orden estricto sobre las
//! cuatro etapas del ciclo de vida, sin saltos ni retrocesos.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Etapas del ciclo de vida de un viaje, en orden estricto
pub const TRIP_STAGES: [TripStatus; 4] = [
    TripStatus::Scheduled,
    TripStatus::Dispatched,
    TripStatus::InTransit,
    TripStatus::Completed,
];

/// Estado del viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Scheduled,
    Dispatched,
    InTransit,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Scheduled => "Scheduled",
            TripStatus::Dispatched => "Dispatched",
            TripStatus::InTransit => "In Transit",
            TripStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Scheduled" => Some(TripStatus::Scheduled),
            "Dispatched" => Some(TripStatus::Dispatched),
            "In Transit" => Some(TripStatus::InTransit),
            "Completed" => Some(TripStatus::Completed),
            _ => None,
        }
    }

    /// Siguiente etapa en el ciclo de vida; None cuando ya está Completed
    pub fn next(&self) -> Option<TripStatus> {
        let position = TRIP_STAGES.iter().position(|s| s == self)?;
        TRIP_STAGES.get(position + 1).copied()
    }

    pub fn is_terminal(&self) -> bool {
        *self == TripStatus::Completed
    }
}

/// Trip principal - mapea a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub cargo_weight_kg: Decimal,
    pub origin: String,
    pub destination: String,
    pub revenue: Decimal,
    pub start_odometer_km: Decimal,
    pub status: String,
    pub dispatch_date: DateTime<Utc>,
    pub completion_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    pub fn status_enum(&self) -> Option<TripStatus> {
        TripStatus::from_str(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_monotonic() {
        assert_eq!(TripStatus::Scheduled.next(), Some(TripStatus::Dispatched));
        assert_eq!(TripStatus::Dispatched.next(), Some(TripStatus::InTransit));
        assert_eq!(TripStatus::InTransit.next(), Some(TripStatus::Completed));
        assert_eq!(TripStatus::Completed.next(), None);
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(TripStatus::Completed.is_terminal());
        assert!(!TripStatus::InTransit.is_terminal());
    }

    #[test]
    fn test_status_roundtrip() {
        for stage in TRIP_STAGES {
            assert_eq!(TripStatus::from_str(stage.as_str()), Some(stage));
        }
        assert_eq!(TripStatus::from_str("Cancelled"), None);
    }
}
