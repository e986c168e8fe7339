use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::employee::{
    photo_limit_reached, Dependent, DocumentKind, Employee, EmployeeDocument, EmployeeFilters, EmployeeStatus,
};
use crate::utils::errors::{not_found_error, AppResult};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserta el colaborador y sus dependientes en una transacción
    async fn create(&self, employee: &Employee, dependents: &[Dependent]) -> AppResult<Employee>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;
    async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool>;
    async fn list(&self, filters: &EmployeeFilters) -> AppResult<(Vec<Employee>, i64)>;
    /// Colaboradores que no están inactivos
    async fn list_current(&self) -> AppResult<Vec<Employee>>;
    async fn update(&self, employee: &Employee) -> AppResult<Employee>;
    async fn set_status(&self, id: Uuid, status: EmployeeStatus) -> AppResult<Option<Employee>>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn list_dependents(&self, employee_id: Uuid) -> AppResult<Vec<Dependent>>;
    async fn add_dependent(&self, dependent: &Dependent) -> AppResult<Dependent>;
    async fn remove_dependent(&self, employee_id: Uuid, dependent_id: Uuid) -> AppResult<bool>;

    async fn list_documents(&self, employee_id: Uuid) -> AppResult<Vec<EmployeeDocument>>;
    /// `None` si el documento es una foto y ya se alcanzó `max_photos`
    async fn add_document(&self, document: &EmployeeDocument, max_photos: i64) -> AppResult<Option<EmployeeDocument>>;
    async fn remove_document(&self, employee_id: Uuid, document_id: Uuid) -> AppResult<bool>;
}

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_DEPENDENT: &str = r#"
    INSERT INTO dependents (id, employee_id, name, relationship, birth_date, created_at)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING *
"#;

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, employee: &Employee, dependents: &[Dependent]) -> AppResult<Employee> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (
                id, first_name, last_name, email, cpf, phone, birth_date, address,
                department_id, job_position_id, manager_id, status, hire_date, salary,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.cpf)
        .bind(&employee.phone)
        .bind(employee.birth_date)
        .bind(&employee.address)
        .bind(employee.department_id)
        .bind(employee.job_position_id)
        .bind(employee.manager_id)
        .bind(employee.status)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        for dependent in dependents {
            sqlx::query(INSERT_DEPENDENT)
                .bind(dependent.id)
                .bind(created.id)
                .bind(&dependent.name)
                .bind(dependent.relationship)
                .bind(dependent.birth_date)
                .bind(dependent.created_at)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let result = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE lower(email) = lower($1) AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn list(&self, filters: &EmployeeFilters) -> AppResult<(Vec<Employee>, i64)> {
        let search = filters
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s));

        const WHERE: &str = r#"
            WHERE ($1::employee_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR department_id = $2)
              AND ($3::uuid IS NULL OR job_position_id = $3)
              AND ($4::text IS NULL
                   OR first_name ILIKE $4
                   OR last_name ILIKE $4
                   OR email ILIKE $4
                   OR cpf ILIKE $4)
        "#;

        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT * FROM employees {} ORDER BY first_name, last_name LIMIT $5 OFFSET $6",
            WHERE
        ))
        .bind(filters.status)
        .bind(filters.department_id)
        .bind(filters.job_position_id)
        .bind(&search)
        .bind(filters.limit())
        .bind(filters.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM employees {}", WHERE))
            .bind(filters.status)
            .bind(filters.department_id)
            .bind(filters.job_position_id)
            .bind(&search)
            .fetch_one(&self.pool)
            .await?;

        Ok((employees, total))
    }

    async fn list_current(&self) -> AppResult<Vec<Employee>> {
        let result = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE status <> 'inactive' ORDER BY first_name, last_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn update(&self, employee: &Employee) -> AppResult<Employee> {
        let result = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, cpf = $5, phone = $6,
                birth_date = $7, address = $8, department_id = $9, job_position_id = $10,
                manager_id = $11, hire_date = $12, salary = $13, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.cpf)
        .bind(&employee.phone)
        .bind(employee.birth_date)
        .bind(&employee.address)
        .bind(employee.department_id)
        .bind(employee.job_position_id)
        .bind(employee.manager_id)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn set_status(&self, id: Uuid, status: EmployeeStatus) -> AppResult<Option<Employee>> {
        let result = sqlx::query_as::<_, Employee>(
            "UPDATE employees SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_dependents(&self, employee_id: Uuid) -> AppResult<Vec<Dependent>> {
        let result = sqlx::query_as::<_, Dependent>(
            "SELECT * FROM dependents WHERE employee_id = $1 ORDER BY name",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn add_dependent(&self, dependent: &Dependent) -> AppResult<Dependent> {
        let result = sqlx::query_as::<_, Dependent>(INSERT_DEPENDENT)
            .bind(dependent.id)
            .bind(dependent.employee_id)
            .bind(&dependent.name)
            .bind(dependent.relationship)
            .bind(dependent.birth_date)
            .bind(dependent.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(result)
    }

    async fn remove_dependent(&self, employee_id: Uuid, dependent_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM dependents WHERE id = $1 AND employee_id = $2")
            .bind(dependent_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_documents(&self, employee_id: Uuid) -> AppResult<Vec<EmployeeDocument>> {
        let result = sqlx::query_as::<_, EmployeeDocument>(
            "SELECT * FROM employee_documents WHERE employee_id = $1 ORDER BY created_at",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn add_document(&self, document: &EmployeeDocument, max_photos: i64) -> AppResult<Option<EmployeeDocument>> {
        let mut tx = self.pool.begin().await?;

        // Bloquear al colaborador serializa adjuntos concurrentes
        let locked: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM employees WHERE id = $1 FOR UPDATE")
            .bind(document.employee_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(not_found_error("Employee", &document.employee_id.to_string()));
        }

        if document.kind == DocumentKind::Photo {
            let photos: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM employee_documents WHERE employee_id = $1 AND kind = 'photo'",
            )
            .bind(document.employee_id)
            .fetch_one(&mut *tx)
            .await?;

            if photo_limit_reached(photos, max_photos) {
                return Ok(None);
            }
        }

        let created = sqlx::query_as::<_, EmployeeDocument>(
            r#"
            INSERT INTO employee_documents (id, employee_id, kind, file_name, content_type, url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(document.id)
        .bind(document.employee_id)
        .bind(document.kind)
        .bind(&document.file_name)
        .bind(&document.content_type)
        .bind(&document.url)
        .bind(document.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(created))
    }

    async fn remove_document(&self, employee_id: Uuid, document_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employee_documents WHERE id = $1 AND employee_id = $2")
            .bind(document_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
