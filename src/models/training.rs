//! Modelos de la matriz de treinamentos

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de requisito - mapea al ENUM training_kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "training_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrainingKind {
    Training,
    Procedure,
}

/// Training - mapea exactamente a la tabla trainings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub kind: TrainingKind,
    pub description: Option<String>,
    pub validity_months: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Requisito de un cargo - tabla position_trainings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PositionTraining {
    pub job_position_id: Uuid,
    pub training_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Conclusión de un colaborador - tabla employee_trainings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeTraining {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub training_id: Uuid,
    pub completed_at: NaiveDate,
    pub expires_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Estado de una celda de la matriz
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Expired,
    Missing,
}
