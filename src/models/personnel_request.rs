//! Modelo de PersonnelRequest (solicitudes de movimentação de pessoal)
//!
//! Tipos y estados son enumeraciones cerradas. Las transiciones válidas
//! están en `PersonnelRequestStatus::allowed_transitions`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de movimentação - mapea al ENUM movement_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "movement_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Admission,
    Termination,
    SalaryRaise,
    Promotion,
    Transfer,
    DepartmentChange,
    PositionChange,
    ScheduleChange,
    Vacation,
    LeaveOfAbsence,
    ReturnFromLeave,
    Overtime,
    Bonus,
    DisciplinaryWarning,
    Suspension,
    ContractRenewal,
    InternshipConversion,
}

impl MovementType {
    pub const ALL: [MovementType; 17] = [
        MovementType::Admission,
        MovementType::Termination,
        MovementType::SalaryRaise,
        MovementType::Promotion,
        MovementType::Transfer,
        MovementType::DepartmentChange,
        MovementType::PositionChange,
        MovementType::ScheduleChange,
        MovementType::Vacation,
        MovementType::LeaveOfAbsence,
        MovementType::ReturnFromLeave,
        MovementType::Overtime,
        MovementType::Bonus,
        MovementType::DisciplinaryWarning,
        MovementType::Suspension,
        MovementType::ContractRenewal,
        MovementType::InternshipConversion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Admission => "Admissão",
            MovementType::Termination => "Desligamento",
            MovementType::SalaryRaise => "Aumento salarial",
            MovementType::Promotion => "Promoção",
            MovementType::Transfer => "Transferência",
            MovementType::DepartmentChange => "Mudança de departamento",
            MovementType::PositionChange => "Mudança de cargo",
            MovementType::ScheduleChange => "Mudança de horário",
            MovementType::Vacation => "Férias",
            MovementType::LeaveOfAbsence => "Afastamento",
            MovementType::ReturnFromLeave => "Retorno de afastamento",
            MovementType::Overtime => "Horas extras",
            MovementType::Bonus => "Bonificação",
            MovementType::DisciplinaryWarning => "Advertência",
            MovementType::Suspension => "Suspensão",
            MovementType::ContractRenewal => "Renovação de contrato",
            MovementType::InternshipConversion => "Efetivação de estagiário",
        }
    }

    /// Módulo que recibe la tarea de seguimiento al aprobar la solicitud
    pub fn target_module(&self) -> &'static str {
        match self {
            MovementType::Admission | MovementType::InternshipConversion => "onboarding",
            MovementType::Termination => "offboarding",
            MovementType::SalaryRaise
            | MovementType::Promotion
            | MovementType::Overtime
            | MovementType::Bonus => "payroll",
            MovementType::Transfer
            | MovementType::DepartmentChange
            | MovementType::PositionChange
            | MovementType::ScheduleChange
            | MovementType::ContractRenewal => "employees",
            MovementType::Vacation => "vacations",
            MovementType::LeaveOfAbsence | MovementType::ReturnFromLeave => "leaves",
            MovementType::DisciplinaryWarning | MovementType::Suspension => "compliance",
        }
    }

    /// Claves obligatorias en `details` según el tipo
    pub fn required_details(&self) -> &'static [&'static str] {
        match self {
            MovementType::Admission => &["candidate_name", "job_position_id", "start_date"],
            MovementType::Termination => &["termination_date", "reason"],
            MovementType::SalaryRaise => &["new_salary", "effective_date"],
            MovementType::Promotion => &["job_position_id", "new_salary", "effective_date"],
            MovementType::Transfer => &["department_id", "effective_date"],
            MovementType::DepartmentChange => &["department_id", "effective_date"],
            MovementType::PositionChange => &["job_position_id", "effective_date"],
            MovementType::ScheduleChange => &["new_schedule", "effective_date"],
            MovementType::Vacation => &["start_date", "days"],
            MovementType::LeaveOfAbsence => &["start_date", "reason"],
            MovementType::ReturnFromLeave => &["return_date"],
            MovementType::Overtime => &["date", "hours"],
            MovementType::Bonus => &["amount", "reason"],
            MovementType::DisciplinaryWarning => &["occurrence_date", "reason"],
            MovementType::Suspension => &["start_date", "days", "reason"],
            MovementType::ContractRenewal => &["end_date"],
            MovementType::InternshipConversion => &["job_position_id", "start_date"],
        }
    }

    /// Claves numéricas que deben ser positivas
    pub fn positive_details(&self) -> &'static [&'static str] {
        match self {
            MovementType::SalaryRaise | MovementType::Promotion => &["new_salary"],
            MovementType::Vacation | MovementType::Suspension => &["days"],
            MovementType::Overtime => &["hours"],
            MovementType::Bonus => &["amount"],
            _ => &[],
        }
    }

    /// Los tipos que no son admisión se refieren a un colaborador existente
    pub fn requires_employee(&self) -> bool {
        !matches!(self, MovementType::Admission)
    }
}

/// Estado de la solicitud - mapea al ENUM personnel_request_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "personnel_request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersonnelRequestStatus {
    New,
    ManagerApproval,
    InAnalysis,
    Pending,
    InApproval,
    Approved,
    Rejected,
    Canceled,
}

impl PersonnelRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelRequestStatus::New => "new",
            PersonnelRequestStatus::ManagerApproval => "manager_approval",
            PersonnelRequestStatus::InAnalysis => "in_analysis",
            PersonnelRequestStatus::Pending => "pending",
            PersonnelRequestStatus::InApproval => "in_approval",
            PersonnelRequestStatus::Approved => "approved",
            PersonnelRequestStatus::Rejected => "rejected",
            PersonnelRequestStatus::Canceled => "canceled",
        }
    }

    pub fn allowed_transitions(&self) -> &'static [PersonnelRequestStatus] {
        use PersonnelRequestStatus::*;
        match self {
            New => &[ManagerApproval, Canceled],
            ManagerApproval => &[InAnalysis, Rejected, Canceled],
            InAnalysis => &[InApproval, Pending, Rejected, Canceled],
            Pending => &[InAnalysis, Canceled],
            InApproval => &[Approved, Rejected, Pending],
            Approved | Rejected | Canceled => &[],
        }
    }

    pub fn can_transition_to(&self, target: PersonnelRequestStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Transiciones que exigen rol de gestor o RH
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            PersonnelRequestStatus::Approved
                | PersonnelRequestStatus::Rejected
                | PersonnelRequestStatus::InAnalysis
        )
    }

    /// Sólo se eliminan borradores o solicitudes canceladas
    pub fn is_deletable(&self) -> bool {
        matches!(self, PersonnelRequestStatus::New | PersonnelRequestStatus::Canceled)
    }
}

impl std::fmt::Display for PersonnelRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PersonnelRequest - mapea exactamente a la tabla personnel_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonnelRequest {
    pub id: Uuid,
    pub request_type: MovementType,
    pub status: PersonnelRequestStatus,
    pub employee_id: Option<Uuid>,
    pub requested_by: Uuid,
    pub justification: Option<String>,
    pub details: serde_json::Value,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entrada del histórico - tabla personnel_request_history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonnelRequestHistory {
    pub id: Uuid,
    pub request_id: Uuid,
    pub from_status: Option<PersonnelRequestStatus>,
    pub to_status: PersonnelRequestStatus,
    pub actor_id: Uuid,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Tarea de seguimiento creada al aprobar - tabla hr_tasks
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HrTask {
    pub id: Uuid,
    pub module: String,
    pub title: String,
    pub description: Option<String>,
    pub reference_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Solicitud a insertar
#[derive(Debug, Clone, PartialEq)]
pub struct NewPersonnelRequest {
    pub id: Uuid,
    pub request_type: MovementType,
    pub status: PersonnelRequestStatus,
    pub employee_id: Option<Uuid>,
    pub requested_by: Uuid,
    pub justification: Option<String>,
    pub details: serde_json::Value,
}

/// Entrada de histórico a insertar
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryEntry {
    pub request_id: Uuid,
    pub from_status: Option<PersonnelRequestStatus>,
    pub to_status: PersonnelRequestStatus,
    pub actor_id: Uuid,
    pub comment: Option<String>,
}

/// Tarea a insertar
#[derive(Debug, Clone, PartialEq)]
pub struct NewHrTask {
    pub module: String,
    pub title: String,
    pub description: Option<String>,
    pub reference_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
}

/// Filtros para búsqueda de solicitudes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonnelRequestFilters {
    pub status: Option<PersonnelRequestStatus>,
    #[serde(rename = "type")]
    pub request_type: Option<MovementType>,
    pub employee_id: Option<Uuid>,
}
