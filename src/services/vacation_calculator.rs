//! Cálculo de períodos de férias (regime CLT)
//!
//! Período aquisitivo n: de `admissão + (n-1) anos` hasta
//! `admissão + n anos + 1 dia`. El concessivo empieza al final del
//! aquisitivo y dura 12 meses. Todo es aritmética de fechas pura; `today`
//! siempre llega como parámetro.

use chrono::{Duration, Months, NaiveDate};
use thiserror::Error;

use crate::models::vacation::{VacationPeriod, VacationPeriodStatus, VacationRequest};
use crate::utils::errors::{validation_error, AppError};

/// Días de férias de un período sin faltas
pub const BASE_VACATION_DAYS: i32 = 30;
/// Máximo de fracciones por período
pub const MAX_FRACTIONS: usize = 3;
/// Una de las fracciones debe tener al menos estos días
pub const LONG_FRACTION_DAYS: i32 = 14;
/// Ninguna fracción puede ser menor
pub const MIN_FRACTION_DAYS: i32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VacationError {
    #[error("La fecha de admisión {0} está en el futuro")]
    HireDateInFuture(NaiveDate),

    #[error("Fecha fuera de rango al calcular el período {0}")]
    DateOverflow(i32),

    #[error("El período {0} no existe para este colaborador")]
    UnknownPeriod(i32),

    #[error("El período {0} todavía no fue adquirido")]
    PeriodNotAcquired(i32),

    #[error("Las férias deben caer dentro del período concessivo ({start} a {end})")]
    OutsideConcessionWindow { start: NaiveDate, end: NaiveDate },

    #[error("Máximo de 3 fracciones por período")]
    TooManyFractions,

    #[error("Cada fracción debe tener al menos 5 días")]
    FractionTooShort,

    #[error("Una de las fracciones debe tener al menos 14 días")]
    MissingLongFraction,

    #[error("Se pueden vender como máximo {0} días (1/3 del derecho)")]
    TooManySoldDays(i32),

    #[error("Total de {requested} días supera el derecho de {entitled} días")]
    ExceedsEntitlement { requested: i32, entitled: i32 },

    #[error("Las férias se superponen con otra programación")]
    Overlaps,
}

/// Parámetros configurables del cálculo
#[derive(Debug, Clone, Copy)]
pub struct VacationPolicy {
    /// Antelación con la que un concessivo se marca como "a vencer"
    pub warning_days: i64,
}

impl Default for VacationPolicy {
    fn default() -> Self {
        Self { warning_days: 60 }
    }
}

/// Nueva programación a validar
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest {
    pub period_number: i32,
    pub start_date: NaiveDate,
    pub days: i32,
    pub sold_days: i32,
}

impl BookingRequest {
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(i64::from(self.days.max(1)) - 1)
    }
}

/// Días de derecho según faltas injustificadas en el período aquisitivo
pub fn entitlement_for_absences(unjustified_absences: i32) -> i32 {
    match unjustified_absences {
        i32::MIN..=5 => BASE_VACATION_DAYS,
        6..=14 => 24,
        15..=23 => 18,
        24..=32 => 12,
        _ => 0,
    }
}

fn add_years(date: NaiveDate, years: i32, period: i32) -> Result<NaiveDate, VacationError> {
    date.checked_add_months(Months::new(12 * years as u32))
        .ok_or(VacationError::DateOverflow(period))
}

/// Calcular todos los períodos desde la admisión hasta el que está corriendo hoy
pub fn compute_periods(
    hire_date: NaiveDate,
    today: NaiveDate,
    bookings: &[VacationRequest],
    unjustified_absences: &[NaiveDate],
    policy: &VacationPolicy,
) -> Result<Vec<VacationPeriod>, VacationError> {
    if hire_date > today {
        return Err(VacationError::HireDateInFuture(hire_date));
    }

    let mut periods = Vec::new();
    let mut number = 1;

    loop {
        let acquisition_start = add_years(hire_date, number - 1, number)?;
        if acquisition_start > today {
            break;
        }

        let anniversary = add_years(hire_date, number, number)?;
        let acquisition_end = anniversary + Duration::days(1);
        let concession_start = acquisition_end;
        let concession_end = add_years(concession_start, 1, number)?;

        let absences = unjustified_absences
            .iter()
            .filter(|d| **d >= acquisition_start && **d < acquisition_end)
            .count() as i32;
        let entitled_days = entitlement_for_absences(absences);

        let period_bookings: Vec<&VacationRequest> = bookings
            .iter()
            .filter(|b| b.is_active() && b.period_number == number)
            .collect();

        let (mut scheduled_days, mut taken_days, mut sold_days) = (0, 0, 0);
        for booking in &period_bookings {
            if booking.end_date() < today {
                taken_days += booking.days;
            } else {
                scheduled_days += booking.days;
            }
            sold_days += booking.sold_days;
        }

        let acquired = today >= acquisition_end;
        let used = taken_days + sold_days;

        let status = if acquired && used >= entitled_days {
            VacationPeriodStatus::Completed
        } else if today > concession_end {
            VacationPeriodStatus::Expired
        } else if !period_bookings.is_empty() {
            VacationPeriodStatus::Scheduled
        } else {
            VacationPeriodStatus::Pending
        };

        let days_until_concession_end = (concession_end - today).num_days();
        let is_expiring =
            (0..=policy.warning_days).contains(&days_until_concession_end);

        periods.push(VacationPeriod {
            number,
            acquisition_start,
            acquisition_end,
            concession_start,
            concession_end,
            entitled_days,
            unjustified_absences: absences,
            scheduled_days,
            taken_days,
            sold_days,
            remaining_days: (entitled_days - used - scheduled_days).max(0),
            acquired,
            status,
            is_expiring,
            days_until_concession_end,
        });

        number += 1;
    }

    Ok(periods)
}

/// Validar una nueva programación contra el período y las existentes.
///
/// `existing` son todas las programaciones del colaborador; las canceladas
/// se ignoran.
pub fn validate_booking(
    periods: &[VacationPeriod],
    existing: &[VacationRequest],
    booking: &BookingRequest,
) -> Result<(), VacationError> {
    let period = periods
        .iter()
        .find(|p| p.number == booking.period_number)
        .ok_or(VacationError::UnknownPeriod(booking.period_number))?;

    if !period.acquired {
        return Err(VacationError::PeriodNotAcquired(period.number));
    }

    if booking.start_date < period.concession_start || booking.end_date() > period.concession_end {
        return Err(VacationError::OutsideConcessionWindow {
            start: period.concession_start,
            end: period.concession_end,
        });
    }

    if booking.days < MIN_FRACTION_DAYS {
        return Err(VacationError::FractionTooShort);
    }

    let active: Vec<&VacationRequest> = existing.iter().filter(|b| b.is_active()).collect();

    let overlaps = active
        .iter()
        .any(|b| booking.start_date <= b.end_date() && b.start_date <= booking.end_date());
    if overlaps {
        return Err(VacationError::Overlaps);
    }

    let same_period: Vec<&&VacationRequest> = active
        .iter()
        .filter(|b| b.period_number == booking.period_number)
        .collect();

    if same_period.len() + 1 > MAX_FRACTIONS {
        return Err(VacationError::TooManyFractions);
    }

    let max_sold = period.entitled_days / 3;
    let sold = same_period.iter().map(|b| b.sold_days).sum::<i32>() + booking.sold_days;
    if sold > max_sold {
        return Err(VacationError::TooManySoldDays(max_sold));
    }

    let rest_days = same_period.iter().map(|b| b.days).sum::<i32>() + booking.days;
    let requested = rest_days + sold;
    if requested > period.entitled_days {
        return Err(VacationError::ExceedsEntitlement {
            requested,
            entitled: period.entitled_days,
        });
    }

    // Si ya no queda espacio para una fracción larga, alguna debe serlo
    let has_long = booking.days >= LONG_FRACTION_DAYS
        || same_period.iter().any(|b| b.days >= LONG_FRACTION_DAYS);
    let left = period.entitled_days - requested;
    if !has_long && left < LONG_FRACTION_DAYS {
        return Err(VacationError::MissingLongFraction);
    }

    Ok(())
}

impl From<VacationError> for AppError {
    fn from(error: VacationError) -> Self {
        let field = match &error {
            VacationError::DateOverflow(_) => return AppError::Internal(error.to_string()),
            VacationError::HireDateInFuture(_) => "hire_date",
            VacationError::UnknownPeriod(_) | VacationError::PeriodNotAcquired(_) => "period_number",
            VacationError::OutsideConcessionWindow { .. } | VacationError::Overlaps => "start_date",
            VacationError::TooManySoldDays(_) => "sold_days",
            VacationError::TooManyFractions
            | VacationError::FractionTooShort
            | VacationError::MissingLongFraction
            | VacationError::ExceedsEntitlement { .. } => "days",
        };
        validation_error(field, error.to_string())
    }
}
