use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::types::Json;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::job_position_dto::{
    CreateJobPositionRequest, JobPositionFilters, JobPositionTransitionRequest, UpdateJobPositionRequest,
};
use crate::dto::ApiResponse;
use crate::models::job_position::{JobPosition, JobPositionStatus, StatusChange};
use crate::repositories::JobPositionRepository;
use crate::services::personnel_workflow::Actor;
use crate::utils::errors::{forbidden_error, not_found_error, AppError, AppResult};

pub struct JobPositionController {
    positions: Arc<dyn JobPositionRepository>,
}

impl JobPositionController {
    pub fn new(positions: Arc<dyn JobPositionRepository>) -> Self {
        Self { positions }
    }

    async fn find(&self, id: Uuid) -> AppResult<JobPosition> {
        self.positions
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("JobPosition", &id.to_string()))
    }

    pub async fn create(&self, request: CreateJobPositionRequest) -> AppResult<ApiResponse<JobPosition>> {
        request.validate()?;

        let now = Utc::now();
        let position = JobPosition {
            id: Uuid::new_v4(),
            code: request.code.trim().to_uppercase(),
            title: request.title.trim().to_string(),
            department_id: request.department_id,
            description: request.description,
            revision: Decimal::new(10, 1),
            status: JobPositionStatus::Draft,
            approved_by: None,
            approved_at: None,
            junior: Json(request.junior),
            mid: Json(request.mid),
            senior: Json(request.senior),
            created_at: now,
            updated_at: now,
        };

        let saved = self.positions.create(&position).await?;
        info!("📋 Cargo creado: {} rev {}", saved.code, saved.revision);
        Ok(ApiResponse::success_with_message(saved, "Cargo creado"))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ApiResponse<JobPosition>> {
        Ok(ApiResponse::success(self.find(id).await?))
    }

    pub async fn list(&self, filters: JobPositionFilters) -> AppResult<ApiResponse<Vec<JobPosition>>> {
        Ok(ApiResponse::success(self.positions.list(&filters).await?))
    }

    pub async fn update(&self, id: Uuid, request: UpdateJobPositionRequest) -> AppResult<ApiResponse<JobPosition>> {
        request.validate()?;
        let mut position = self.find(id).await?;

        if let Some(code) = request.code {
            position.code = code.trim().to_uppercase();
        }
        if let Some(title) = request.title {
            position.title = title.trim().to_string();
        }
        if request.department_id.is_some() {
            position.department_id = request.department_id;
        }
        if request.description.is_some() {
            position.description = request.description;
        }
        if let Some(junior) = request.junior {
            position.junior = Json(junior);
        }
        if let Some(mid) = request.mid {
            position.mid = Json(mid);
        }
        if let Some(senior) = request.senior {
            position.senior = Json(senior);
        }

        let saved = self.positions.update(&position).await?;
        Ok(ApiResponse::success_with_message(saved, "Cargo actualizado"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.positions.delete(id).await? {
            return Err(not_found_error("JobPosition", &id.to_string()));
        }
        Ok(ApiResponse::message("Cargo eliminado"))
    }

    pub async fn transition(
        &self,
        id: Uuid,
        request: JobPositionTransitionRequest,
        actor: Actor,
    ) -> AppResult<ApiResponse<JobPosition>> {
        if request.status == JobPositionStatus::Approved && !actor.role.can_approve() {
            return Err(forbidden_error("approve job position", "requires manager or hr_admin role"));
        }

        let position = self.find(id).await?;
        let change = position.transition_to(request.status, actor.user_id, Utc::now())?;
        let saved = self.apply(&position, &change).await?;

        info!("📋 Cargo {} {} -> {}", saved.code, position.status, saved.status);
        Ok(ApiResponse::success(saved))
    }

    /// Nueva revisión de un cargo aprobado o distribuido
    pub async fn revise(&self, id: Uuid) -> AppResult<ApiResponse<JobPosition>> {
        let position = self.find(id).await?;
        let change = position.revised()?;
        let saved = self.apply(&position, &change).await?;

        info!("📋 Cargo {} revisado: rev {}", saved.code, saved.revision);
        Ok(ApiResponse::success_with_message(saved, "Nueva revisión creada"))
    }

    async fn apply(&self, position: &JobPosition, change: &StatusChange) -> AppResult<JobPosition> {
        self.positions
            .apply_status_change(position.id, position.status, change)
            .await?
            .ok_or_else(|| AppError::InvalidTransition {
                entity: "JobPosition",
                from: position.status.to_string(),
                to: change.status.to_string(),
            })
    }
}
