//! Evaluador de cumplimiento de conductores
//!
//! Función pura e independiente del almacenamiento: toma los datos crudos
//! del conductor y devuelve los campos derivados. Ningún cliente puede
//! eludir la suspensión porque el alta/modificación siempre pasa por aquí.

use chrono::NaiveDate;

use crate::models::driver::{DriverStatus, DutyStatus};

/// Resultado del evaluador
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceResult {
    pub completion_rate: f64,
    pub safety_score: i32,
    pub status: DriverStatus,
}

/// Evaluar cumplimiento de un conductor
///
/// - completion_rate = completados / totales x 100 (0 si no hay viajes)
/// - safety_score = 100 - accidentes x 20, +5 de bono si la tasa supera 90,
///   acotado a [0, 100]; con 5 o más accidentes el puntaje es 0 sin bono
/// - status forzado a Suspended si la licencia venció o el puntaje es 0
pub fn evaluate_compliance(
    accidents: i32,
    total_trips: i32,
    completed_trips: i32,
    license_expiry_date: NaiveDate,
    duty_status: DutyStatus,
    today: NaiveDate,
) -> ComplianceResult {
    let completion_rate = if total_trips > 0 {
        f64::from(completed_trips) / f64::from(total_trips) * 100.0
    } else {
        0.0
    };

    let base = 100 - accidents.max(0) * 20;
    let safety_score = if base <= 0 {
        // El bono de completitud no rescata un puntaje agotado
        0
    } else {
        let bonus = if completion_rate > 90.0 { 5 } else { 0 };
        (base + bonus).clamp(0, 100)
    };

    // Comparación a precisión de día
    let is_expired = license_expiry_date < today;

    let status = if is_expired || safety_score == 0 {
        DriverStatus::Suspended
    } else if duty_status == DutyStatus::OnDuty {
        DriverStatus::Available
    } else {
        DriverStatus::OffDuty
    };

    ComplianceResult {
        completion_rate,
        safety_score,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: fn() -> NaiveDate = || date(2026, 8, 24);

    #[test]
    fn test_clean_driver_with_high_completion() {
        // 0 accidentes, 95/100 viajes: tasa 95, puntaje 100+5 acotado a 100
        let result = evaluate_compliance(0, 100, 95, date(2030, 1, 1), DutyStatus::OnDuty, TODAY());
        assert_eq!(result.completion_rate, 95.0);
        assert_eq!(result.safety_score, 100);
        assert_eq!(result.status, DriverStatus::Available);
    }

    #[test]
    fn test_status_follows_duty_status_when_compliant() {
        let result = evaluate_compliance(1, 50, 40, date(2030, 1, 1), DutyStatus::OffDuty, TODAY());
        assert_eq!(result.safety_score, 80);
        assert_eq!(result.status, DriverStatus::OffDuty);
    }

    #[test]
    fn test_expired_license_forces_suspension() {
        // Licencia vencida suspende aunque el puntaje sea 100
        let result = evaluate_compliance(0, 10, 10, date(2026, 8, 23), DutyStatus::OnDuty, TODAY());
        assert_eq!(result.safety_score, 100);
        assert_eq!(result.status, DriverStatus::Suspended);
    }

    #[test]
    fn test_license_expiring_today_is_not_expired() {
        let result = evaluate_compliance(0, 10, 10, TODAY(), DutyStatus::OnDuty, TODAY());
        assert_eq!(result.status, DriverStatus::Available);
    }

    #[test]
    fn test_zero_score_forces_suspension() {
        // Puntaje 0 suspende aunque la licencia esté vigente
        let result = evaluate_compliance(5, 100, 100, date(2030, 1, 1), DutyStatus::OnDuty, TODAY());
        assert_eq!(result.safety_score, 0);
        assert_eq!(result.status, DriverStatus::Suspended);
    }

    #[test]
    fn test_five_or_more_accidents_zero_score_despite_bonus() {
        // Con >= 5 accidentes el bono de completitud no aplica
        for accidents in [5, 6, 10] {
            let result =
                evaluate_compliance(accidents, 100, 95, date(2030, 1, 1), DutyStatus::OnDuty, TODAY());
            assert_eq!(result.safety_score, 0, "accidents={}", accidents);
            assert_eq!(result.status, DriverStatus::Suspended);
        }
    }

    #[test]
    fn test_bonus_applies_over_90_only() {
        let with_bonus = evaluate_compliance(2, 100, 91, date(2030, 1, 1), DutyStatus::OnDuty, TODAY());
        assert_eq!(with_bonus.safety_score, 65);

        let without_bonus =
            evaluate_compliance(2, 100, 90, date(2030, 1, 1), DutyStatus::OnDuty, TODAY());
        assert_eq!(without_bonus.safety_score, 60);
    }

    #[test]
    fn test_no_trips_means_zero_rate() {
        let result = evaluate_compliance(0, 0, 0, date(2030, 1, 1), DutyStatus::OnDuty, TODAY());
        assert_eq!(result.completion_rate, 0.0);
        assert_eq!(result.safety_score, 100);
        assert_eq!(result.status, DriverStatus::Available);
    }

    #[test]
    fn test_both_suspension_conditions_can_overlap() {
        // Licencia vencida y puntaje 0 a la vez: sigue siendo Suspended
        let result = evaluate_compliance(7, 10, 5, date(2020, 1, 1), DutyStatus::OffDuty, TODAY());
        assert_eq!(result.safety_score, 0);
        assert_eq!(result.status, DriverStatus::Suspended);
    }
}
