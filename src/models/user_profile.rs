//! Modelo de UserProfile
//!
//! Perfil de la cuenta del proveedor de identidad: rol y módulo de
//! actuación, usados para autorización y destinatarios de notificaciones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Rol del usuario - mapea al ENUM user_role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Employee,
    Manager,
    HrAdmin,
    Recruiter,
}

impl UserRole {
    /// Interpretar el rol que viene en el token (valores desconocidos = employee)
    pub fn from_claim(value: Option<&str>) -> Self {
        match value {
            Some("manager") => UserRole::Manager,
            Some("hr_admin") => UserRole::HrAdmin,
            Some("recruiter") => UserRole::Recruiter,
            _ => UserRole::Employee,
        }
    }

    /// Puede aprobar/rechazar solicitudes y aprobar cargos
    pub fn can_approve(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::HrAdmin)
    }

    /// Puede gestionar el proceso de selección
    pub fn can_recruit(&self) -> bool {
        matches!(self, UserRole::Recruiter | UserRole::HrAdmin)
    }
}

/// UserProfile - mapea exactamente a la tabla user_profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub module: Option<String>,
    pub employee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
