use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::training_dto::{
    CreateTrainingRequest, MatrixQuery, RecordCompletionRequest, RequirementRequest, UpdateTrainingRequest,
};
use crate::dto::ApiResponse;
use crate::models::training::{EmployeeTraining, PositionTraining, Training};
use crate::repositories::{EmployeeRepository, JobPositionRepository, TrainingRepository};
use crate::services::training_matrix::{build_matrix, expiry_for, TrainingMatrix};
use crate::utils::errors::{not_found_error, AppResult};

pub struct TrainingController {
    trainings: Arc<dyn TrainingRepository>,
    employees: Arc<dyn EmployeeRepository>,
    positions: Arc<dyn JobPositionRepository>,
}

impl TrainingController {
    pub fn new(
        trainings: Arc<dyn TrainingRepository>,
        employees: Arc<dyn EmployeeRepository>,
        positions: Arc<dyn JobPositionRepository>,
    ) -> Self {
        Self {
            trainings,
            employees,
            positions,
        }
    }

    async fn find(&self, id: Uuid) -> AppResult<Training> {
        self.trainings
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Training", &id.to_string()))
    }

    pub async fn create(&self, request: CreateTrainingRequest) -> AppResult<ApiResponse<Training>> {
        request.validate()?;

        let training = Training {
            id: Uuid::new_v4(),
            code: request.code.trim().to_uppercase(),
            title: request.title.trim().to_string(),
            kind: request.kind,
            description: request.description,
            validity_months: request.validity_months,
            created_at: Utc::now(),
        };

        let saved = self.trainings.create(&training).await?;
        info!("🎓 Treinamento creado: {} - {}", saved.code, saved.title);
        Ok(ApiResponse::success_with_message(saved, "Treinamento criado"))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ApiResponse<Training>> {
        Ok(ApiResponse::success(self.find(id).await?))
    }

    pub async fn list(&self) -> AppResult<ApiResponse<Vec<Training>>> {
        Ok(ApiResponse::success(self.trainings.list().await?))
    }

    pub async fn update(&self, id: Uuid, request: UpdateTrainingRequest) -> AppResult<ApiResponse<Training>> {
        request.validate()?;
        let mut training = self.find(id).await?;

        if let Some(code) = request.code {
            training.code = code.trim().to_uppercase();
        }
        if let Some(title) = request.title {
            training.title = title.trim().to_string();
        }
        if let Some(kind) = request.kind {
            training.kind = kind;
        }
        if request.description.is_some() {
            training.description = request.description;
        }
        if request.validity_months.is_some() {
            training.validity_months = request.validity_months;
        }

        let saved = self.trainings.update(&training).await?;
        Ok(ApiResponse::success_with_message(saved, "Treinamento atualizado"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.trainings.delete(id).await? {
            return Err(not_found_error("Training", &id.to_string()));
        }
        Ok(ApiResponse::message("Treinamento excluído"))
    }

    pub async fn require(&self, request: RequirementRequest) -> AppResult<ApiResponse<PositionTraining>> {
        self.find(request.training_id).await?;
        self.positions
            .find_by_id(request.job_position_id)
            .await?
            .ok_or_else(|| not_found_error("JobPosition", &request.job_position_id.to_string()))?;

        let saved = self
            .trainings
            .add_requirement(request.job_position_id, request.training_id)
            .await?;
        Ok(ApiResponse::success_with_message(saved, "Requisito adicionado"))
    }

    pub async fn remove_requirement(&self, request: RequirementRequest) -> AppResult<ApiResponse<()>> {
        if !self
            .trainings
            .remove_requirement(request.job_position_id, request.training_id)
            .await?
        {
            return Err(not_found_error(
                "PositionTraining",
                &format!("{}/{}", request.job_position_id, request.training_id),
            ));
        }
        Ok(ApiResponse::message("Requisito removido"))
    }

    pub async fn list_requirements(&self, query: MatrixQuery) -> AppResult<ApiResponse<Vec<PositionTraining>>> {
        Ok(ApiResponse::success(self.trainings.requirements(query.job_position_id).await?))
    }

    /// Registra la conclusión; el vencimiento sale de la validez del treinamento
    pub async fn record_completion(&self, request: RecordCompletionRequest) -> AppResult<ApiResponse<EmployeeTraining>> {
        let training = self.find(request.training_id).await?;
        self.employees
            .find_by_id(request.employee_id)
            .await?
            .ok_or_else(|| not_found_error("Employee", &request.employee_id.to_string()))?;

        let completion = EmployeeTraining {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            training_id: training.id,
            completed_at: request.completed_at,
            expires_at: expiry_for(request.completed_at, training.validity_months),
            created_at: Utc::now(),
        };

        let saved = self.trainings.record_completion(&completion).await?;
        info!("✅ {} concluyó {} el {}", saved.employee_id, training.code, saved.completed_at);
        Ok(ApiResponse::success_with_message(saved, "Conclusão registrada"))
    }

    pub async fn list_completions(&self, employee_id: Option<Uuid>) -> AppResult<ApiResponse<Vec<EmployeeTraining>>> {
        Ok(ApiResponse::success(self.trainings.completions(employee_id).await?))
    }

    /// Matriz de conformidad, opcionalmente restringida a un cargo
    pub async fn matrix(&self, query: MatrixQuery) -> AppResult<ApiResponse<TrainingMatrix>> {
        let (trainings, requirements, employees, completions) = futures::try_join!(
            self.trainings.list(),
            self.trainings.requirements(query.job_position_id),
            self.employees.list_current(),
            self.trainings.completions(None)
        )?;

        let employees: Vec<_> = match query.job_position_id {
            Some(position_id) => employees
                .into_iter()
                .filter(|e| e.job_position_id == Some(position_id))
                .collect(),
            None => employees,
        };
        let pairs: Vec<(Uuid, Uuid)> = requirements
            .iter()
            .map(|r| (r.job_position_id, r.training_id))
            .collect();

        let matrix = build_matrix(&trainings, &pairs, &employees, &completions, Utc::now().date_naive());
        Ok(ApiResponse::success(matrix))
    }
}
