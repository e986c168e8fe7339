use std::sync::Arc;

use chrono::Utc;
use sqlx::types::Json;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::recruitment_dto::{
    CandidateFilters, CreateCandidateRequest, CreateJobOpeningRequest, OpeningFilters, SubmitAssessmentRequest,
    UpdateCandidateRequest, UpdateJobOpeningRequest,
};
use crate::dto::ApiResponse;
use crate::models::recruitment::{
    Candidate, CandidateAssessment, CandidateStatus, JobOpening, OpeningStatus,
};
use crate::repositories::RecruitmentRepository;
use crate::services::disc_scoring::score_answers;
use crate::services::resume_analysis::{ResumeAnalyzer, ResumeInput};
use crate::utils::errors::{bad_request_error, not_found_error, validation_error, AppResult};

pub struct RecruitmentController {
    recruitment: Arc<dyn RecruitmentRepository>,
    analyzer: Arc<dyn ResumeAnalyzer>,
}

impl RecruitmentController {
    pub fn new(recruitment: Arc<dyn RecruitmentRepository>, analyzer: Arc<dyn ResumeAnalyzer>) -> Self {
        Self { recruitment, analyzer }
    }

    async fn find_opening(&self, id: Uuid) -> AppResult<JobOpening> {
        self.recruitment
            .find_opening(id)
            .await?
            .ok_or_else(|| not_found_error("JobOpening", &id.to_string()))
    }

    async fn find_candidate(&self, id: Uuid) -> AppResult<Candidate> {
        self.recruitment
            .find_candidate(id)
            .await?
            .ok_or_else(|| not_found_error("Candidate", &id.to_string()))
    }

    async fn ensure_accepts_candidates(&self, opening_id: Uuid) -> AppResult<()> {
        let opening = self.find_opening(opening_id).await?;
        if !opening.status.accepts_candidates() {
            return Err(validation_error("job_opening_id", "La vaga no acepta candidatos"));
        }
        Ok(())
    }

    // Vagas

    pub async fn create_opening(&self, request: CreateJobOpeningRequest) -> AppResult<ApiResponse<JobOpening>> {
        request.validate()?;

        let now = Utc::now();
        let opening = JobOpening {
            id: Uuid::new_v4(),
            job_position_id: request.job_position_id,
            department_id: request.department_id,
            title: request.title.trim().to_string(),
            description: request.description,
            vacancies: request.vacancies,
            status: OpeningStatus::Open,
            closed_at: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.recruitment.create_opening(&opening).await?;
        info!("📢 Vaga aberta: {} ({} vagas)", saved.title, saved.vacancies);
        Ok(ApiResponse::success_with_message(saved, "Vaga criada"))
    }

    pub async fn get_opening(&self, id: Uuid) -> AppResult<ApiResponse<JobOpening>> {
        Ok(ApiResponse::success(self.find_opening(id).await?))
    }

    pub async fn list_openings(&self, filters: OpeningFilters) -> AppResult<ApiResponse<Vec<JobOpening>>> {
        Ok(ApiResponse::success(self.recruitment.list_openings(filters.status).await?))
    }

    pub async fn update_opening(&self, id: Uuid, request: UpdateJobOpeningRequest) -> AppResult<ApiResponse<JobOpening>> {
        request.validate()?;
        let mut opening = self.find_opening(id).await?;

        if request.job_position_id.is_some() {
            opening.job_position_id = request.job_position_id;
        }
        if request.department_id.is_some() {
            opening.department_id = request.department_id;
        }
        if let Some(title) = request.title {
            opening.title = title.trim().to_string();
        }
        if request.description.is_some() {
            opening.description = request.description;
        }
        if let Some(vacancies) = request.vacancies {
            opening.vacancies = vacancies;
        }
        if let Some(status) = request.status {
            opening.closed_at = match (status.is_closed(), opening.closed_at) {
                (true, Some(closed_at)) => Some(closed_at),
                (true, None) => Some(Utc::now()),
                (false, _) => None,
            };
            opening.status = status;
        }

        let saved = self.recruitment.update_opening(&opening).await?;
        Ok(ApiResponse::success_with_message(saved, "Vaga atualizada"))
    }

    pub async fn delete_opening(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.recruitment.delete_opening(id).await? {
            return Err(not_found_error("JobOpening", &id.to_string()));
        }
        Ok(ApiResponse::message("Vaga excluída"))
    }

    // Candidatos

    pub async fn create_candidate(&self, request: CreateCandidateRequest) -> AppResult<ApiResponse<Candidate>> {
        request.validate()?;

        if let Some(opening_id) = request.job_opening_id {
            self.ensure_accepts_candidates(opening_id).await?;
        }

        let now = Utc::now();
        let candidate = Candidate {
            id: Uuid::new_v4(),
            job_opening_id: request.job_opening_id,
            full_name: request.full_name.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            phone: request.phone,
            resume_url: request.resume_url,
            resume_text: request.resume_text,
            status: CandidateStatus::Applied,
            ai_score: None,
            ai_summary: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.recruitment.create_candidate(&candidate).await?;
        info!("🧑‍💼 Candidato registrado: {}", saved.id);
        Ok(ApiResponse::success_with_message(saved, "Candidato cadastrado"))
    }

    pub async fn get_candidate(&self, id: Uuid) -> AppResult<ApiResponse<Candidate>> {
        Ok(ApiResponse::success(self.find_candidate(id).await?))
    }

    pub async fn list_candidates(&self, filters: CandidateFilters) -> AppResult<ApiResponse<Vec<Candidate>>> {
        Ok(ApiResponse::success(self.recruitment.list_candidates(&filters).await?))
    }

    pub async fn update_candidate(&self, id: Uuid, request: UpdateCandidateRequest) -> AppResult<ApiResponse<Candidate>> {
        request.validate()?;
        let mut candidate = self.find_candidate(id).await?;

        if let Some(opening_id) = request.job_opening_id {
            if candidate.job_opening_id != Some(opening_id) {
                self.ensure_accepts_candidates(opening_id).await?;
            }
            candidate.job_opening_id = Some(opening_id);
        }
        if let Some(full_name) = request.full_name {
            candidate.full_name = full_name.trim().to_string();
        }
        if let Some(email) = request.email {
            candidate.email = email.trim().to_lowercase();
        }
        if request.phone.is_some() {
            candidate.phone = request.phone;
        }
        if request.resume_url.is_some() {
            candidate.resume_url = request.resume_url;
        }
        if request.resume_text.is_some() {
            candidate.resume_text = request.resume_text;
        }
        if let Some(status) = request.status {
            candidate.status = status;
        }

        let saved = self.recruitment.update_candidate(&candidate).await?;
        Ok(ApiResponse::success_with_message(saved, "Candidato atualizado"))
    }

    pub async fn delete_candidate(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.recruitment.delete_candidate(id).await? {
            return Err(not_found_error("Candidate", &id.to_string()));
        }
        Ok(ApiResponse::message("Candidato excluído"))
    }

    /// Envía el currículo a la función de análisis y guarda nota y resumen
    pub async fn analyze_resume(&self, id: Uuid) -> AppResult<ApiResponse<Candidate>> {
        let candidate = self.find_candidate(id).await?;

        let has_text = candidate.resume_text.as_deref().is_some_and(|t| !t.trim().is_empty());
        if !has_text && candidate.resume_url.is_none() {
            return Err(bad_request_error("El candidato no tiene currículo para analizar"));
        }

        let opening = match candidate.job_opening_id {
            Some(opening_id) => self.recruitment.find_opening(opening_id).await?,
            None => None,
        };

        let input = ResumeInput {
            candidate_name: candidate.full_name.clone(),
            resume_text: candidate.resume_text.clone(),
            resume_url: candidate.resume_url.clone(),
            job_title: opening.as_ref().map(|o| o.title.clone()),
            job_description: opening.and_then(|o| o.description),
        };

        let analysis = self.analyzer.analyze(&input).await.map_err(|e| {
            warn!("⚠️ Falló el análisis del currículo de {}: {}", id, e);
            e
        })?;

        let saved = self
            .recruitment
            .save_analysis(id, &analysis)
            .await?
            .ok_or_else(|| not_found_error("Candidate", &id.to_string()))?;

        info!("🤖 Currículo de {} analizado: nota {}", id, analysis.score);
        Ok(ApiResponse::success(saved))
    }

    // Avaliações DISC

    pub async fn submit_assessment(
        &self,
        candidate_id: Uuid,
        request: SubmitAssessmentRequest,
    ) -> AppResult<ApiResponse<CandidateAssessment>> {
        request.validate()?;
        self.find_candidate(candidate_id).await?;

        let result = score_answers(&request.answers)?;
        let assessment = CandidateAssessment {
            id: Uuid::new_v4(),
            candidate_id,
            answers: Json(request.answers),
            scores: Json(result.scores),
            primary_profile: result.primary.letter().to_string(),
            secondary_profile: result.secondary.letter().to_string(),
            created_at: Utc::now(),
        };

        let saved = self.recruitment.create_assessment(&assessment).await?;
        info!(
            "🧭 DISC de {}: perfil {}{}",
            candidate_id, saved.primary_profile, saved.secondary_profile
        );
        Ok(ApiResponse::success_with_message(saved, "Avaliação registrada"))
    }

    pub async fn list_assessments(&self, candidate_id: Uuid) -> AppResult<ApiResponse<Vec<CandidateAssessment>>> {
        self.find_candidate(candidate_id).await?;
        Ok(ApiResponse::success(self.recruitment.list_assessments(candidate_id).await?))
    }
}
