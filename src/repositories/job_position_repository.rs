use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::job_position_dto::JobPositionFilters;
use crate::models::job_position::{JobPosition, JobPositionStatus, StatusChange};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait JobPositionRepository: Send + Sync {
    async fn create(&self, position: &JobPosition) -> AppResult<JobPosition>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobPosition>>;
    async fn list(&self, filters: &JobPositionFilters) -> AppResult<Vec<JobPosition>>;
    async fn update(&self, position: &JobPosition) -> AppResult<JobPosition>;
    /// Aplica el cambio sólo si el estado sigue siendo `expected`
    async fn apply_status_change(
        &self,
        id: Uuid,
        expected: JobPositionStatus,
        change: &StatusChange,
    ) -> AppResult<Option<JobPosition>>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct PgJobPositionRepository {
    pool: PgPool,
}

impl PgJobPositionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobPositionRepository for PgJobPositionRepository {
    async fn create(&self, position: &JobPosition) -> AppResult<JobPosition> {
        let result = sqlx::query_as::<_, JobPosition>(
            r#"
            INSERT INTO job_positions (
                id, code, title, department_id, description, revision, status,
                approved_by, approved_at, junior, mid, senior, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(position.id)
        .bind(&position.code)
        .bind(&position.title)
        .bind(position.department_id)
        .bind(&position.description)
        .bind(position.revision)
        .bind(position.status)
        .bind(position.approved_by)
        .bind(position.approved_at)
        .bind(&position.junior)
        .bind(&position.mid)
        .bind(&position.senior)
        .bind(position.created_at)
        .bind(position.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobPosition>> {
        let result = sqlx::query_as::<_, JobPosition>("SELECT * FROM job_positions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn list(&self, filters: &JobPositionFilters) -> AppResult<Vec<JobPosition>> {
        let result = sqlx::query_as::<_, JobPosition>(
            r#"
            SELECT * FROM job_positions
            WHERE ($1::job_position_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR department_id = $2)
            ORDER BY code
            "#,
        )
        .bind(filters.status)
        .bind(filters.department_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn update(&self, position: &JobPosition) -> AppResult<JobPosition> {
        let result = sqlx::query_as::<_, JobPosition>(
            r#"
            UPDATE job_positions
            SET code = $2, title = $3, department_id = $4, description = $5,
                junior = $6, mid = $7, senior = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(position.id)
        .bind(&position.code)
        .bind(&position.title)
        .bind(position.department_id)
        .bind(&position.description)
        .bind(&position.junior)
        .bind(&position.mid)
        .bind(&position.senior)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn apply_status_change(
        &self,
        id: Uuid,
        expected: JobPositionStatus,
        change: &StatusChange,
    ) -> AppResult<Option<JobPosition>> {
        let result = sqlx::query_as::<_, JobPosition>(
            r#"
            UPDATE job_positions
            SET status = $3, revision = $4, approved_by = $5, approved_at = $6, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected)
        .bind(change.status)
        .bind(change.revision)
        .bind(change.approved_by)
        .bind(change.approved_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM job_positions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
