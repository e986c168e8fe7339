use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::personnel_request::{MovementType, PersonnelRequest, PersonnelRequestHistory, PersonnelRequestStatus};

// Request para crear una solicitud de movimentação
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePersonnelRequest {
    #[serde(rename = "type")]
    pub request_type: MovementType,
    pub employee_id: Option<Uuid>,
    #[validate(length(max = 2000))]
    pub justification: Option<String>,
    #[serde(default = "empty_details")]
    pub details: serde_json::Value,
    /// Guardar como borrador (`new`) sin enviar a aprobación
    #[serde(default)]
    pub draft: bool,
}

fn empty_details() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransitionPersonnelRequest {
    pub status: PersonnelRequestStatus,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

// Solicitud con su histórico
#[derive(Debug, Serialize)]
pub struct PersonnelRequestDetail {
    #[serde(flatten)]
    pub request: PersonnelRequest,
    pub type_label: &'static str,
    pub allowed_transitions: &'static [PersonnelRequestStatus],
    pub history: Vec<PersonnelRequestHistory>,
}

impl PersonnelRequestDetail {
    pub fn new(request: PersonnelRequest, history: Vec<PersonnelRequestHistory>) -> Self {
        Self {
            type_label: request.request_type.label(),
            allowed_transitions: request.status.allowed_transitions(),
            request,
            history,
        }
    }
}
