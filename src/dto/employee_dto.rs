use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::department::Department;
use crate::models::employee::{Dependent, DependentRelationship, DocumentKind, Employee, EmployeeDocument, EmployeeStatus};
use crate::models::job_position::JobPosition;
use crate::models::training::ComplianceStatus;
use crate::models::vacation::VacationPeriod;
use crate::utils::validation::{validate_cpf, validate_not_empty, validate_not_future, validate_phone, validate_positive};

fn validate_salary(value: &Decimal) -> Result<(), ValidationError> {
    validate_positive(*value)
}

fn validate_birth_date(value: &NaiveDate) -> Result<(), ValidationError> {
    validate_not_future(*value, Utc::now().date_naive())
}

// Dependiente enviado junto con el colaborador
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DependentInput {
    #[serde(default)]
    #[validate(length(min = 1, max = 150), custom = "validate_not_empty")]
    pub name: String,
    pub relationship: DependentRelationship,
    #[validate(custom = "validate_birth_date")]
    pub birth_date: Option<NaiveDate>,
}

// Request para crear un colaborador
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub last_name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[validate(custom = "validate_cpf")]
    pub cpf: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    #[validate(custom = "validate_birth_date")]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 300))]
    pub address: Option<String>,
    pub department_id: Option<Uuid>,
    pub job_position_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
    pub status: Option<EmployeeStatus>,
    #[validate(required)]
    pub hire_date: Option<NaiveDate>,
    #[validate(custom = "validate_salary")]
    pub salary: Option<Decimal>,
    #[serde(default)]
    #[validate]
    pub dependents: Vec<DependentInput>,
}

// Request para actualizar un colaborador (campos ausentes no cambian)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom = "validate_cpf")]
    pub cpf: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    #[validate(custom = "validate_birth_date")]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 300))]
    pub address: Option<String>,
    pub department_id: Option<Uuid>,
    pub job_position_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
    pub hire_date: Option<NaiveDate>,
    #[validate(custom = "validate_salary")]
    pub salary: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetStatusRequest {
    pub status: EmployeeStatus,
}

// Request para adjuntar un documento o foto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachDocumentRequest {
    pub kind: DocumentKind,
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub content_type: String,
    #[serde(default)]
    #[validate(url)]
    pub url: String,
}

// Treinamento obrigatório en el prontuário
#[derive(Debug, Serialize)]
pub struct DossierTraining {
    pub training_id: Uuid,
    pub code: String,
    pub title: String,
    pub status: ComplianceStatus,
    pub completed_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
}

// Prontuário completo del colaborador
#[derive(Debug, Serialize)]
pub struct EmployeeDossier {
    pub employee: Employee,
    pub department: Option<Department>,
    pub job_position: Option<JobPosition>,
    pub manager: Option<Employee>,
    pub dependents: Vec<Dependent>,
    pub documents: Vec<EmployeeDocument>,
    pub vacation_periods: Vec<VacationPeriod>,
    pub trainings: Vec<DossierTraining>,
}
