use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::notification::NewNotification;
use crate::models::personnel_request::{
    HrTask, NewHistoryEntry, PersonnelRequest, PersonnelRequestFilters, PersonnelRequestHistory,
};
use crate::services::personnel_workflow::{CreationPlan, TransitionPlan};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait PersonnelRequestRepository: Send + Sync {
    /// Solicitud, histórico inicial y notificaciones en una transacción
    async fn create(&self, plan: &CreationPlan) -> AppResult<PersonnelRequest>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PersonnelRequest>>;
    async fn list(&self, filters: &PersonnelRequestFilters) -> AppResult<Vec<PersonnelRequest>>;
    /// Aplica el plan si el estado actual sigue siendo `plan.from`;
    /// `None` si otra transición llegó antes
    async fn apply_transition(&self, id: Uuid, plan: &TransitionPlan) -> AppResult<Option<PersonnelRequest>>;
    async fn history(&self, id: Uuid) -> AppResult<Vec<PersonnelRequestHistory>>;
    async fn tasks(&self, id: Uuid) -> AppResult<Vec<HrTask>>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct PgPersonnelRequestRepository {
    pool: PgPool,
}

impl PgPersonnelRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_history(tx: &mut Transaction<'_, Postgres>, entry: &NewHistoryEntry) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO personnel_request_history (id, request_id, from_status, to_status, actor_id, comment, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry.request_id)
    .bind(entry.from_status)
    .bind(entry.to_status)
    .bind(entry.actor_id)
    .bind(&entry.comment)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

pub(crate) async fn insert_notifications(
    tx: &mut Transaction<'_, Postgres>,
    notifications: &[NewNotification],
) -> AppResult<()> {
    for notification in notifications {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, title, message, module, reference_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(notification.user_id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.module)
        .bind(notification.reference_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl PersonnelRequestRepository for PgPersonnelRequestRepository {
    async fn create(&self, plan: &CreationPlan) -> AppResult<PersonnelRequest> {
        let mut tx = self.pool.begin().await?;
        let request = &plan.request;

        let created = sqlx::query_as::<_, PersonnelRequest>(
            r#"
            INSERT INTO personnel_requests (
                id, request_type, status, employee_id, requested_by, justification, details,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(request.id)
        .bind(request.request_type)
        .bind(request.status)
        .bind(request.employee_id)
        .bind(request.requested_by)
        .bind(&request.justification)
        .bind(&request.details)
        .fetch_one(&mut *tx)
        .await?;

        insert_history(&mut tx, &plan.history).await?;
        insert_notifications(&mut tx, &plan.notifications).await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PersonnelRequest>> {
        let result = sqlx::query_as::<_, PersonnelRequest>("SELECT * FROM personnel_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn list(&self, filters: &PersonnelRequestFilters) -> AppResult<Vec<PersonnelRequest>> {
        let result = sqlx::query_as::<_, PersonnelRequest>(
            r#"
            SELECT * FROM personnel_requests
            WHERE ($1::personnel_request_status IS NULL OR status = $1)
              AND ($2::movement_type IS NULL OR request_type = $2)
              AND ($3::uuid IS NULL OR employee_id = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filters.status)
        .bind(filters.request_type)
        .bind(filters.employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn apply_transition(&self, id: Uuid, plan: &TransitionPlan) -> AppResult<Option<PersonnelRequest>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, PersonnelRequest>(
            r#"
            UPDATE personnel_requests
            SET status = $3, decided_at = COALESCE($4, decided_at), updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plan.from)
        .bind(plan.to)
        .bind(plan.decided_at)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Ok(None);
        };

        insert_history(&mut tx, &plan.history).await?;

        if let Some(task) = &plan.task {
            sqlx::query(
                r#"
                INSERT INTO hr_tasks (id, module, title, description, reference_id, employee_id, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, 'open', NOW())
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&task.module)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.reference_id)
            .bind(task.employee_id)
            .execute(&mut *tx)
            .await?;
        }

        insert_notifications(&mut tx, &plan.notifications).await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn history(&self, id: Uuid) -> AppResult<Vec<PersonnelRequestHistory>> {
        let result = sqlx::query_as::<_, PersonnelRequestHistory>(
            "SELECT * FROM personnel_request_history WHERE request_id = $1 ORDER BY created_at, id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn tasks(&self, id: Uuid) -> AppResult<Vec<HrTask>> {
        let result = sqlx::query_as::<_, HrTask>(
            "SELECT * FROM hr_tasks WHERE reference_id = $1 ORDER BY created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM personnel_requests WHERE id = $1 AND status IN ('new', 'canceled')",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
