//! Modelos de férias
//!
//! `VacationRequest` y `EmployeeAbsence` se persisten; `VacationPeriod` se
//! calcula en `services::vacation_calculator`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de una programación de férias - mapea al ENUM vacation_request_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vacation_request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VacationRequestStatus {
    Scheduled,
    Canceled,
}

/// Programación de férias - tabla vacation_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacationRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub period_number: i32,
    pub start_date: NaiveDate,
    pub days: i32,
    pub sold_days: i32,
    pub status: VacationRequestStatus,
    pub created_at: DateTime<Utc>,
}

impl VacationRequest {
    /// Último día de descanso (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(i64::from(self.days.max(1)) - 1)
    }

    pub fn is_active(&self) -> bool {
        self.status == VacationRequestStatus::Scheduled
    }
}

/// Falta registrada - tabla employee_absences
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeAbsence {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub absence_date: NaiveDate,
    pub justified: bool,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Estado calculado de un período aquisitivo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VacationPeriodStatus {
    Pending,
    Scheduled,
    Completed,
    Expired,
}

/// Período aquisitivo/concessivo calculado a partir de la fecha de admisión
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VacationPeriod {
    pub number: i32,
    pub acquisition_start: NaiveDate,
    pub acquisition_end: NaiveDate,
    pub concession_start: NaiveDate,
    pub concession_end: NaiveDate,
    /// Días a que el colaborador tiene derecho tras descontar faltas
    pub entitled_days: i32,
    pub unjustified_absences: i32,
    pub scheduled_days: i32,
    pub taken_days: i32,
    pub sold_days: i32,
    pub remaining_days: i32,
    pub acquired: bool,
    pub status: VacationPeriodStatus,
    pub is_expiring: bool,
    pub days_until_concession_end: i64,
}
