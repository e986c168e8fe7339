//! Modelo de Employee
//!
//! Este módulo contiene el struct Employee, sus dependientes y documentos.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del colaborador - mapea al ENUM employee_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "employee_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
}

/// Parentesco del dependiente - mapea al ENUM dependent_relationship
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "dependent_relationship", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DependentRelationship {
    Spouse,
    Child,
    Parent,
    Other,
}

/// Tipo de archivo adjunto - mapea al ENUM document_kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "document_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Photo,
    Document,
}

/// Employee principal - mapea exactamente a la tabla employees
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub department_id: Option<Uuid>,
    pub job_position_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    pub salary: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Se alcanzó el máximo de fotos permitidas por colaborador
pub fn photo_limit_reached(current_photos: i64, max_photos: i64) -> bool {
    current_photos >= max_photos
}

/// Dependiente - tabla dependents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dependent {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub name: String,
    pub relationship: DependentRelationship,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Dependent {
    pub fn new(
        employee_id: Uuid,
        name: String,
        relationship: DependentRelationship,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            name: name.trim().to_string(),
            relationship,
            birth_date,
            created_at: Utc::now(),
        }
    }
}

/// Documento o foto adjunta - tabla employee_documents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeDocument {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub kind: DocumentKind,
    pub file_name: String,
    pub content_type: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl EmployeeDocument {
    pub fn new(employee_id: Uuid, kind: DocumentKind, file_name: String, content_type: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            kind,
            file_name,
            content_type,
            url,
            created_at: Utc::now(),
        }
    }
}

/// Filtros para búsqueda de colaboradores
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilters {
    pub status: Option<EmployeeStatus>,
    pub department_id: Option<Uuid>,
    pub job_position_id: Option<Uuid>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl EmployeeFilters {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 200)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}
