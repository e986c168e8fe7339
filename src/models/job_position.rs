//! Modelo de JobPosition (cargo y plan salarial)
//!
//! El estado sigue una tabla de transiciones cerrada; la revisión es un
//! `Decimal` con un dígito fraccionario.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, Type};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Estado del cargo - mapea al ENUM job_position_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "job_position_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobPositionStatus {
    Draft,
    InReview,
    Approved,
    Distributed,
}

impl JobPositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobPositionStatus::Draft => "draft",
            JobPositionStatus::InReview => "in_review",
            JobPositionStatus::Approved => "approved",
            JobPositionStatus::Distributed => "distributed",
        }
    }

    /// Estados alcanzables desde `self` mediante `transition`.
    /// `revise` es una operación aparte y no aparece aquí.
    pub fn allowed_transitions(&self) -> &'static [JobPositionStatus] {
        use JobPositionStatus::*;
        match self {
            Draft => &[InReview],
            InReview => &[Approved, Draft],
            Approved => &[Distributed, InReview],
            Distributed => &[],
        }
    }

    pub fn can_transition_to(&self, target: JobPositionStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Sólo se revisa un cargo ya aprobado o distribuido
    pub fn can_revise(&self) -> bool {
        matches!(self, JobPositionStatus::Approved | JobPositionStatus::Distributed)
    }
}

impl std::fmt::Display for JobPositionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nivel del cargo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PositionLevel {
    Junior,
    Mid,
    Senior,
}

/// Perfil de un nivel (junior/pleno/sênior) del cargo
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LevelProfile {
    #[serde(default)]
    pub responsibilities: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub trainings: Option<String>,
    #[serde(default)]
    pub salary_min: Option<Decimal>,
    #[serde(default)]
    pub salary_max: Option<Decimal>,
}

impl LevelProfile {
    /// El rango salarial es válido cuando min <= max y ambos son positivos
    pub fn salary_range_is_valid(&self) -> bool {
        let positive = |v: &Option<Decimal>| v.map_or(true, |v| v > Decimal::ZERO);
        if !positive(&self.salary_min) || !positive(&self.salary_max) {
            return false;
        }
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// JobPosition - mapea exactamente a la tabla job_positions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosition {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub department_id: Option<Uuid>,
    pub description: Option<String>,
    pub revision: Decimal,
    pub status: JobPositionStatus,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub junior: Json<LevelProfile>,
    pub mid: Json<LevelProfile>,
    pub senior: Json<LevelProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosition {
    pub fn level(&self, level: PositionLevel) -> &LevelProfile {
        match level {
            PositionLevel::Junior => &self.junior.0,
            PositionLevel::Mid => &self.mid.0,
            PositionLevel::Senior => &self.senior.0,
        }
    }
}

/// Cambio de estado a persistir junto con la metadata de aprobación
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub status: JobPositionStatus,
    pub revision: Decimal,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl JobPosition {
    /// Calcular el cambio de estado. Aprobar registra aprobador y fecha;
    /// volver a borrador o revisión limpia la aprobación.
    pub fn transition_to(
        &self,
        target: JobPositionStatus,
        actor: Uuid,
        now: DateTime<Utc>,
    ) -> Result<StatusChange, AppError> {
        if !self.status.can_transition_to(target) {
            return Err(AppError::InvalidTransition {
                entity: "JobPosition",
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }

        let (approved_by, approved_at) = match target {
            JobPositionStatus::Approved => (Some(actor), Some(now)),
            JobPositionStatus::Distributed => (self.approved_by, self.approved_at),
            JobPositionStatus::Draft | JobPositionStatus::InReview => (None, None),
        };

        Ok(StatusChange {
            status: target,
            revision: self.revision,
            approved_by,
            approved_at,
        })
    }

    /// Nueva revisión: +0.1, vuelve a borrador sin aprobación
    pub fn revised(&self) -> Result<StatusChange, AppError> {
        if !self.status.can_revise() {
            return Err(AppError::InvalidTransition {
                entity: "JobPosition",
                from: self.status.to_string(),
                to: "revision".to_string(),
            });
        }

        Ok(StatusChange {
            status: JobPositionStatus::Draft,
            revision: next_revision(self.revision),
            approved_by: None,
            approved_at: None,
        })
    }
}

/// Incremento de revisión: 0.1 exacto
pub fn revision_step() -> Decimal {
    Decimal::new(1, 1)
}

/// Revisión siguiente, con una sola cifra decimal
pub fn next_revision(current: Decimal) -> Decimal {
    (current + revision_step()).round_dp(1)
}
