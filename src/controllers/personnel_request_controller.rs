use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::personnel_request_dto::{
    CreatePersonnelRequest, PersonnelRequestDetail, TransitionPersonnelRequest,
};
use crate::dto::ApiResponse;
use crate::models::personnel_request::{
    PersonnelRequest, PersonnelRequestFilters, PersonnelRequestHistory, PersonnelRequestStatus,
};
use crate::repositories::{PersonnelRequestRepository, UserProfileRepository};
use crate::services::personnel_details::validate_request;
use crate::services::personnel_workflow::{plan_creation, plan_transition, Actor, SubmittedRequest, PERSONNEL_MODULE};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct PersonnelRequestController {
    requests: Arc<dyn PersonnelRequestRepository>,
    profiles: Arc<dyn UserProfileRepository>,
}

impl PersonnelRequestController {
    pub fn new(requests: Arc<dyn PersonnelRequestRepository>, profiles: Arc<dyn UserProfileRepository>) -> Self {
        Self { requests, profiles }
    }

    async fn find(&self, id: Uuid) -> AppResult<PersonnelRequest> {
        self.requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("PersonnelRequest", &id.to_string()))
    }

    async fn approvers(&self) -> AppResult<Vec<Uuid>> {
        let profiles = self.profiles.find_approvers(PERSONNEL_MODULE).await?;
        Ok(profiles.into_iter().map(|p| p.user_id).collect())
    }

    pub async fn create(
        &self,
        request: CreatePersonnelRequest,
        actor: Actor,
    ) -> AppResult<ApiResponse<PersonnelRequest>> {
        request.validate()?;

        let submitted = SubmittedRequest {
            request_type: request.request_type,
            employee_id: request.employee_id,
            justification: request.justification,
            details: request.details,
            draft: request.draft,
        };
        // Los detalles se validan antes de consultar aprobadores
        validate_request(submitted.request_type, submitted.employee_id, &submitted.details)?;

        let approvers = if submitted.draft { Vec::new() } else { self.approvers().await? };
        let plan = plan_creation(submitted, actor.user_id, &approvers)?;
        let saved = self.requests.create(&plan).await?;

        info!(
            "📝 Solicitud {} creada ({}), {} aprobadores notificados",
            saved.id,
            saved.request_type.label(),
            plan.notifications.len()
        );
        Ok(ApiResponse::success_with_message(saved, "Solicitação criada"))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ApiResponse<PersonnelRequestDetail>> {
        let request = self.find(id).await?;
        let history = self.requests.history(id).await?;
        Ok(ApiResponse::success(PersonnelRequestDetail::new(request, history)))
    }

    pub async fn list(&self, filters: PersonnelRequestFilters) -> AppResult<ApiResponse<Vec<PersonnelRequest>>> {
        Ok(ApiResponse::success(self.requests.list(&filters).await?))
    }

    pub async fn history(&self, id: Uuid) -> AppResult<ApiResponse<Vec<PersonnelRequestHistory>>> {
        self.find(id).await?;
        Ok(ApiResponse::success(self.requests.history(id).await?))
    }

    pub async fn transition(
        &self,
        id: Uuid,
        request: TransitionPersonnelRequest,
        actor: Actor,
    ) -> AppResult<ApiResponse<PersonnelRequest>> {
        request.validate()?;
        let current = self.find(id).await?;

        let approvers = if request.status == PersonnelRequestStatus::ManagerApproval {
            self.approvers().await?
        } else {
            Vec::new()
        };

        let plan = plan_transition(&current, request.status, actor, request.comment, &approvers, Utc::now())?;
        let saved = self
            .requests
            .apply_transition(id, &plan)
            .await?
            .ok_or_else(|| AppError::InvalidTransition {
                entity: "PersonnelRequest",
                from: current.status.to_string(),
                to: request.status.to_string(),
            })?;

        info!("🔄 Solicitud {}: {} -> {}", id, plan.from, plan.to);
        if let Some(task) = &plan.task {
            info!("📌 Tarea creada para el módulo {}", task.module);
        }

        Ok(ApiResponse::success(saved))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        let current = self.find(id).await?;
        if !current.status.is_deletable() || !self.requests.delete(id).await? {
            return Err(AppError::InvalidTransition {
                entity: "PersonnelRequest",
                from: current.status.to_string(),
                to: "deleted".to_string(),
            });
        }
        Ok(ApiResponse::message("Solicitação excluída"))
    }
}
