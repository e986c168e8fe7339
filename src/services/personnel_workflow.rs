//! Flujo de aprobación de solicitudes de movimentação
//!
//! Las funciones de este módulo sólo deciden qué escribir (estado,
//! histórico, notificaciones, tarea). El repositorio persiste el plan en
//! una única transacción.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::models::notification::NewNotification;
use crate::models::personnel_request::{
    MovementType, NewHistoryEntry, NewHrTask, NewPersonnelRequest, PersonnelRequest, PersonnelRequestStatus,
};
use crate::models::user_profile::UserRole;
use crate::services::personnel_details::validate_request;
use crate::utils::errors::{forbidden_error, AppError, AppResult};

/// Módulo de los destinatarios de las notificaciones de aprobación
pub const PERSONNEL_MODULE: &str = "personnel";

/// Quién ejecuta la acción
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Datos de una nueva solicitud
#[derive(Debug, Clone)]
pub struct SubmittedRequest {
    pub request_type: MovementType,
    pub employee_id: Option<Uuid>,
    pub justification: Option<String>,
    pub details: Value,
    pub draft: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreationPlan {
    pub request: NewPersonnelRequest,
    pub history: NewHistoryEntry,
    pub notifications: Vec<NewNotification>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub from: PersonnelRequestStatus,
    pub to: PersonnelRequestStatus,
    pub decided_at: Option<DateTime<Utc>>,
    pub history: NewHistoryEntry,
    pub task: Option<NewHrTask>,
    pub notifications: Vec<NewNotification>,
}

fn approver_notifications(request_id: Uuid, movement: MovementType, approvers: &[Uuid], actor: Uuid) -> Vec<NewNotification> {
    approvers
        .iter()
        .filter(|id| **id != actor)
        .map(|user_id| NewNotification {
            user_id: *user_id,
            title: format!("Nova solicitação: {}", movement.label()),
            message: "Uma solicitação de movimentação aguarda aprovação".to_string(),
            module: PERSONNEL_MODULE.to_string(),
            reference_id: Some(request_id),
        })
        .collect()
}

/// Planificar la creación. `approvers` son los perfiles manager/hr_admin
/// del módulo de pessoal; sólo se notifican si la solicitud no es borrador.
pub fn plan_creation(submitted: SubmittedRequest, requester: Uuid, approvers: &[Uuid]) -> AppResult<CreationPlan> {
    validate_request(submitted.request_type, submitted.employee_id, &submitted.details)?;

    let id = Uuid::new_v4();
    let status = if submitted.draft {
        PersonnelRequestStatus::New
    } else {
        PersonnelRequestStatus::ManagerApproval
    };

    let notifications = if submitted.draft {
        Vec::new()
    } else {
        approver_notifications(id, submitted.request_type, approvers, requester)
    };

    Ok(CreationPlan {
        history: NewHistoryEntry {
            request_id: id,
            from_status: None,
            to_status: status,
            actor_id: requester,
            comment: None,
        },
        request: NewPersonnelRequest {
            id,
            request_type: submitted.request_type,
            status,
            employee_id: submitted.employee_id,
            requested_by: requester,
            justification: submitted.justification.filter(|j| !j.trim().is_empty()),
            details: submitted.details,
        },
        notifications,
    })
}

/// Planificar una transición de estado.
///
/// Decisiones (análisis, aprobación, rechazo) exigen manager o hr_admin;
/// el resto (enviar, pedir información, cancelar) sólo el solicitante o un
/// aprobador.
pub fn plan_transition(
    request: &PersonnelRequest,
    target: PersonnelRequestStatus,
    actor: Actor,
    comment: Option<String>,
    approvers: &[Uuid],
    now: DateTime<Utc>,
) -> AppResult<TransitionPlan> {
    if !request.status.can_transition_to(target) {
        return Err(AppError::InvalidTransition {
            entity: "PersonnelRequest",
            from: request.status.to_string(),
            to: target.to_string(),
        });
    }

    if target.is_decision() && !actor.role.can_approve() {
        return Err(forbidden_error(
            "decide personnel request",
            "manager or hr_admin role required",
        ));
    }

    if !target.is_decision() && actor.user_id != request.requested_by && !actor.role.can_approve() {
        return Err(forbidden_error(
            "move personnel request",
            "only the requester or an approver can change this request",
        ));
    }

    let mut notifications = Vec::new();
    let mut task = None;

    match target {
        PersonnelRequestStatus::ManagerApproval => {
            notifications = approver_notifications(request.id, request.request_type, approvers, actor.user_id);
        }
        PersonnelRequestStatus::Approved => {
            task = Some(NewHrTask {
                module: request.request_type.target_module().to_string(),
                title: request.request_type.label().to_string(),
                description: request.justification.clone(),
                reference_id: Some(request.id),
                employee_id: request.employee_id,
            });
            notifications.push(NewNotification {
                user_id: request.requested_by,
                title: format!("Solicitação aprovada: {}", request.request_type.label()),
                message: "Sua solicitação foi aprovada".to_string(),
                module: PERSONNEL_MODULE.to_string(),
                reference_id: Some(request.id),
            });
        }
        PersonnelRequestStatus::Rejected | PersonnelRequestStatus::Pending => {
            let message = match target {
                PersonnelRequestStatus::Rejected => "Sua solicitação foi rejeitada",
                _ => "Sua solicitação precisa de informações adicionais",
            };
            notifications.push(NewNotification {
                user_id: request.requested_by,
                title: format!("Solicitação {}: {}", target, request.request_type.label()),
                message: comment.clone().unwrap_or_else(|| message.to_string()),
                module: PERSONNEL_MODULE.to_string(),
                reference_id: Some(request.id),
            });
        }
        _ => {}
    }

    // El actor no se notifica a sí mismo
    notifications.retain(|n| n.user_id != actor.user_id);

    Ok(TransitionPlan {
        from: request.status,
        to: target,
        decided_at: target.is_terminal().then_some(now),
        history: NewHistoryEntry {
            request_id: request.id,
            from_status: Some(request.status),
            to_status: target,
            actor_id: actor.user_id,
            comment: comment.filter(|c| !c.trim().is_empty()),
        },
        task,
        notifications,
    })
}
