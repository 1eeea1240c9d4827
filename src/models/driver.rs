//! Modelo de Driver
//!
//! Mapea a la tabla drivers. Los campos completion_rate, safety_score y
//! status son derivados por el evaluador de cumplimiento y se persisten
//! en cada alta/modificación.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de servicio elegido manualmente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DutyStatus {
    OnDuty,
    OffDuty,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OnDuty => "On Duty",
            DutyStatus::OffDuty => "Off Duty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "On Duty" => Some(DutyStatus::OnDuty),
            "Off Duty" => Some(DutyStatus::OffDuty),
            _ => None,
        }
    }
}

/// Estado derivado del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    Available,
    OnTrip,
    Suspended,
    OffDuty,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "Available",
            DriverStatus::OnTrip => "On Trip",
            DriverStatus::Suspended => "Suspended",
            DriverStatus::OffDuty => "Off Duty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(DriverStatus::Available),
            "On Trip" => Some(DriverStatus::OnTrip),
            "Suspended" => Some(DriverStatus::Suspended),
            "Off Duty" => Some(DriverStatus::OffDuty),
            _ => None,
        }
    }
}

/// Driver principal - mapea a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub license_number: String,
    pub license_category: String,
    pub license_expiry_date: NaiveDate,
    pub accidents: i32,
    pub total_trips: i32,
    pub completed_trips: i32,
    pub completion_rate: Decimal,
    pub safety_score: i32,
    pub duty_status: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn status_enum(&self) -> Option<DriverStatus> {
        DriverStatus::from_str(&self.status)
    }

    pub fn duty_status_enum(&self) -> Option<DutyStatus> {
        DutyStatus::from_str(&self.duty_status)
    }
}
