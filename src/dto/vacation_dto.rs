use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vacation::VacationPeriod;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PreviewPeriodsRequest {
    pub hire_date: NaiveDate,
    /// Fecha de referencia; por defecto hoy
    pub today: Option<NaiveDate>,
}

// Request para programar férias
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVacationRequest {
    #[validate(range(min = 1))]
    pub period_number: i32,
    pub start_date: NaiveDate,
    #[validate(range(min = 1, max = 30))]
    pub days: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 10))]
    pub sold_days: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAbsenceRequest {
    pub absence_date: NaiveDate,
    #[serde(default)]
    pub justified: bool,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

// Colaborador con un período a vencer
#[derive(Debug, Serialize)]
pub struct ExpiringVacation {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub department_id: Option<Uuid>,
    pub period: VacationPeriod,
}
