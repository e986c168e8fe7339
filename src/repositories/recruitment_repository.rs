use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::recruitment_dto::CandidateFilters;
use crate::models::recruitment::{Candidate, CandidateAssessment, JobOpening, OpeningStatus, ResumeAnalysis};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait RecruitmentRepository: Send + Sync {
    async fn create_opening(&self, opening: &JobOpening) -> AppResult<JobOpening>;
    async fn find_opening(&self, id: Uuid) -> AppResult<Option<JobOpening>>;
    async fn list_openings(&self, status: Option<OpeningStatus>) -> AppResult<Vec<JobOpening>>;
    async fn update_opening(&self, opening: &JobOpening) -> AppResult<JobOpening>;
    async fn delete_opening(&self, id: Uuid) -> AppResult<bool>;

    async fn create_candidate(&self, candidate: &Candidate) -> AppResult<Candidate>;
    async fn find_candidate(&self, id: Uuid) -> AppResult<Option<Candidate>>;
    async fn list_candidates(&self, filters: &CandidateFilters) -> AppResult<Vec<Candidate>>;
    async fn update_candidate(&self, candidate: &Candidate) -> AppResult<Candidate>;
    async fn save_analysis(&self, id: Uuid, analysis: &ResumeAnalysis) -> AppResult<Option<Candidate>>;
    async fn delete_candidate(&self, id: Uuid) -> AppResult<bool>;

    async fn create_assessment(&self, assessment: &CandidateAssessment) -> AppResult<CandidateAssessment>;
    async fn list_assessments(&self, candidate_id: Uuid) -> AppResult<Vec<CandidateAssessment>>;
}

pub struct PgRecruitmentRepository {
    pool: PgPool,
}

impl PgRecruitmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecruitmentRepository for PgRecruitmentRepository {
    async fn create_opening(&self, opening: &JobOpening) -> AppResult<JobOpening> {
        let result = sqlx::query_as::<_, JobOpening>(
            r#"
            INSERT INTO hr_job_openings (
                id, job_position_id, department_id, title, description, vacancies, status,
                closed_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(opening.id)
        .bind(opening.job_position_id)
        .bind(opening.department_id)
        .bind(&opening.title)
        .bind(&opening.description)
        .bind(opening.vacancies)
        .bind(opening.status)
        .bind(opening.closed_at)
        .bind(opening.created_at)
        .bind(opening.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_opening(&self, id: Uuid) -> AppResult<Option<JobOpening>> {
        let result = sqlx::query_as::<_, JobOpening>("SELECT * FROM hr_job_openings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn list_openings(&self, status: Option<OpeningStatus>) -> AppResult<Vec<JobOpening>> {
        let result = sqlx::query_as::<_, JobOpening>(
            "SELECT * FROM hr_job_openings WHERE ($1::opening_status IS NULL OR status = $1) ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn update_opening(&self, opening: &JobOpening) -> AppResult<JobOpening> {
        let result = sqlx::query_as::<_, JobOpening>(
            r#"
            UPDATE hr_job_openings
            SET job_position_id = $2, department_id = $3, title = $4, description = $5,
                vacancies = $6, status = $7, closed_at = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(opening.id)
        .bind(opening.job_position_id)
        .bind(opening.department_id)
        .bind(&opening.title)
        .bind(&opening.description)
        .bind(opening.vacancies)
        .bind(opening.status)
        .bind(opening.closed_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete_opening(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM hr_job_openings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_candidate(&self, candidate: &Candidate) -> AppResult<Candidate> {
        let result = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (
                id, job_opening_id, full_name, email, phone, resume_url, resume_text, status,
                ai_score, ai_summary, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(candidate.id)
        .bind(candidate.job_opening_id)
        .bind(&candidate.full_name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.resume_url)
        .bind(&candidate.resume_text)
        .bind(candidate.status)
        .bind(candidate.ai_score)
        .bind(&candidate.ai_summary)
        .bind(candidate.created_at)
        .bind(candidate.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_candidate(&self, id: Uuid) -> AppResult<Option<Candidate>> {
        let result = sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn list_candidates(&self, filters: &CandidateFilters) -> AppResult<Vec<Candidate>> {
        let result = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT * FROM candidates
            WHERE ($1::uuid IS NULL OR job_opening_id = $1)
              AND ($2::candidate_status IS NULL OR status = $2)
            ORDER BY ai_score DESC NULLS LAST, created_at
            "#,
        )
        .bind(filters.job_opening_id)
        .bind(filters.status)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn update_candidate(&self, candidate: &Candidate) -> AppResult<Candidate> {
        let result = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET job_opening_id = $2, full_name = $3, email = $4, phone = $5, resume_url = $6,
                resume_text = $7, status = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(candidate.id)
        .bind(candidate.job_opening_id)
        .bind(&candidate.full_name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.resume_url)
        .bind(&candidate.resume_text)
        .bind(candidate.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn save_analysis(&self, id: Uuid, analysis: &ResumeAnalysis) -> AppResult<Option<Candidate>> {
        let result = sqlx::query_as::<_, Candidate>(
            "UPDATE candidates SET ai_score = $2, ai_summary = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(analysis.score)
        .bind(&analysis.summary)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete_candidate(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_assessment(&self, assessment: &CandidateAssessment) -> AppResult<CandidateAssessment> {
        let result = sqlx::query_as::<_, CandidateAssessment>(
            r#"
            INSERT INTO candidate_assessments (
                id, candidate_id, answers, scores, primary_profile, secondary_profile, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(assessment.id)
        .bind(assessment.candidate_id)
        .bind(&assessment.answers)
        .bind(&assessment.scores)
        .bind(&assessment.primary_profile)
        .bind(&assessment.secondary_profile)
        .bind(assessment.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn list_assessments(&self, candidate_id: Uuid) -> AppResult<Vec<CandidateAssessment>> {
        let result = sqlx::query_as::<_, CandidateAssessment>(
            "SELECT * FROM candidate_assessments WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}
