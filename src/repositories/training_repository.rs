use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::training::{EmployeeTraining, PositionTraining, Training};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait TrainingRepository: Send + Sync {
    async fn create(&self, training: &Training) -> AppResult<Training>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Training>>;
    async fn list(&self) -> AppResult<Vec<Training>>;
    async fn update(&self, training: &Training) -> AppResult<Training>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn add_requirement(&self, job_position_id: Uuid, training_id: Uuid) -> AppResult<PositionTraining>;
    async fn remove_requirement(&self, job_position_id: Uuid, training_id: Uuid) -> AppResult<bool>;
    /// Pares (cargo, treinamento); filtrados por cargo si se indica
    async fn requirements(&self, job_position_id: Option<Uuid>) -> AppResult<Vec<PositionTraining>>;

    /// Registra o reemplaza la conclusión del colaborador
    async fn record_completion(&self, completion: &EmployeeTraining) -> AppResult<EmployeeTraining>;
    async fn completions(&self, employee_id: Option<Uuid>) -> AppResult<Vec<EmployeeTraining>>;
}

pub struct PgTrainingRepository {
    pool: PgPool,
}

impl PgTrainingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainingRepository for PgTrainingRepository {
    async fn create(&self, training: &Training) -> AppResult<Training> {
        let result = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (id, code, title, kind, description, validity_months, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(training.id)
        .bind(&training.code)
        .bind(&training.title)
        .bind(training.kind)
        .bind(&training.description)
        .bind(training.validity_months)
        .bind(training.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Training>> {
        let result = sqlx::query_as::<_, Training>("SELECT * FROM trainings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn list(&self) -> AppResult<Vec<Training>> {
        let result = sqlx::query_as::<_, Training>("SELECT * FROM trainings ORDER BY code")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    async fn update(&self, training: &Training) -> AppResult<Training> {
        let result = sqlx::query_as::<_, Training>(
            r#"
            UPDATE trainings
            SET code = $2, title = $3, kind = $4, description = $5, validity_months = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(training.id)
        .bind(&training.code)
        .bind(&training.title)
        .bind(training.kind)
        .bind(&training.description)
        .bind(training.validity_months)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM trainings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_requirement(&self, job_position_id: Uuid, training_id: Uuid) -> AppResult<PositionTraining> {
        let result = sqlx::query_as::<_, PositionTraining>(
            r#"
            INSERT INTO position_trainings (job_position_id, training_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (job_position_id, training_id) DO UPDATE SET created_at = position_trainings.created_at
            RETURNING *
            "#,
        )
        .bind(job_position_id)
        .bind(training_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn remove_requirement(&self, job_position_id: Uuid, training_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM position_trainings WHERE job_position_id = $1 AND training_id = $2")
            .bind(job_position_id)
            .bind(training_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn requirements(&self, job_position_id: Option<Uuid>) -> AppResult<Vec<PositionTraining>> {
        let result = sqlx::query_as::<_, PositionTraining>(
            "SELECT * FROM position_trainings WHERE ($1::uuid IS NULL OR job_position_id = $1)",
        )
        .bind(job_position_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn record_completion(&self, completion: &EmployeeTraining) -> AppResult<EmployeeTraining> {
        let result = sqlx::query_as::<_, EmployeeTraining>(
            r#"
            INSERT INTO employee_trainings (id, employee_id, training_id, completed_at, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (employee_id, training_id)
            DO UPDATE SET completed_at = EXCLUDED.completed_at, expires_at = EXCLUDED.expires_at
            RETURNING *
            "#,
        )
        .bind(completion.id)
        .bind(completion.employee_id)
        .bind(completion.training_id)
        .bind(completion.completed_at)
        .bind(completion.expires_at)
        .bind(completion.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn completions(&self, employee_id: Option<Uuid>) -> AppResult<Vec<EmployeeTraining>> {
        let result = sqlx::query_as::<_, EmployeeTraining>(
            "SELECT * FROM employee_trainings WHERE ($1::uuid IS NULL OR employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}
