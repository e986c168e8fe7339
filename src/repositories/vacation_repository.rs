use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vacation::{EmployeeAbsence, VacationRequest};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VacationRepository: Send + Sync {
    async fn bookings_for(&self, employee_id: Uuid) -> AppResult<Vec<VacationRequest>>;
    /// Programaciones activas de todos los colaboradores
    async fn all_active_bookings(&self) -> AppResult<Vec<VacationRequest>>;
    async fn create_booking(&self, booking: &VacationRequest) -> AppResult<VacationRequest>;
    /// `None` si no existe o ya estaba cancelada
    async fn cancel_booking(&self, id: Uuid) -> AppResult<Option<VacationRequest>>;

    async fn absences_for(&self, employee_id: Uuid) -> AppResult<Vec<EmployeeAbsence>>;
    /// Fechas de faltas injustificadas de todos los colaboradores
    async fn all_unjustified_absences(&self) -> AppResult<Vec<(Uuid, NaiveDate)>>;
    async fn record_absence(&self, absence: &EmployeeAbsence) -> AppResult<EmployeeAbsence>;
}

pub struct PgVacationRepository {
    pool: PgPool,
}

impl PgVacationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacationRepository for PgVacationRepository {
    async fn bookings_for(&self, employee_id: Uuid) -> AppResult<Vec<VacationRequest>> {
        let result = sqlx::query_as::<_, VacationRequest>(
            "SELECT * FROM vacation_requests WHERE employee_id = $1 ORDER BY start_date",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn all_active_bookings(&self) -> AppResult<Vec<VacationRequest>> {
        let result = sqlx::query_as::<_, VacationRequest>(
            "SELECT * FROM vacation_requests WHERE status = 'scheduled' ORDER BY employee_id, start_date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn create_booking(&self, booking: &VacationRequest) -> AppResult<VacationRequest> {
        let result = sqlx::query_as::<_, VacationRequest>(
            r#"
            INSERT INTO vacation_requests (id, employee_id, period_number, start_date, days, sold_days, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.employee_id)
        .bind(booking.period_number)
        .bind(booking.start_date)
        .bind(booking.days)
        .bind(booking.sold_days)
        .bind(booking.status)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn cancel_booking(&self, id: Uuid) -> AppResult<Option<VacationRequest>> {
        let result = sqlx::query_as::<_, VacationRequest>(
            "UPDATE vacation_requests SET status = 'canceled' WHERE id = $1 AND status = 'scheduled' RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn absences_for(&self, employee_id: Uuid) -> AppResult<Vec<EmployeeAbsence>> {
        let result = sqlx::query_as::<_, EmployeeAbsence>(
            "SELECT * FROM employee_absences WHERE employee_id = $1 ORDER BY absence_date",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn all_unjustified_absences(&self) -> AppResult<Vec<(Uuid, NaiveDate)>> {
        let result: Vec<(Uuid, NaiveDate)> = sqlx::query_as(
            "SELECT employee_id, absence_date FROM employee_absences WHERE NOT justified",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn record_absence(&self, absence: &EmployeeAbsence) -> AppResult<EmployeeAbsence> {
        let result = sqlx::query_as::<_, EmployeeAbsence>(
            r#"
            INSERT INTO employee_absences (id, employee_id, absence_date, justified, reason, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(absence.id)
        .bind(absence.employee_id)
        .bind(absence.absence_date)
        .bind(absence.justified)
        .bind(&absence.reason)
        .bind(absence.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
