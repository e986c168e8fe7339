use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::department::Department;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, department: &Department) -> AppResult<Department>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>>;
    async fn list(&self) -> AppResult<Vec<Department>>;
    async fn update(&self, department: &Department) -> AppResult<Department>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn create(&self, department: &Department) -> AppResult<Department> {
        let result = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (id, name, code, parent_id, manager_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(department.id)
        .bind(&department.name)
        .bind(&department.code)
        .bind(department.parent_id)
        .bind(department.manager_id)
        .bind(department.created_at)
        .bind(department.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        let result = sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn list(&self) -> AppResult<Vec<Department>> {
        let result = sqlx::query_as::<_, Department>("SELECT * FROM departments ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    async fn update(&self, department: &Department) -> AppResult<Department> {
        let result = sqlx::query_as::<_, Department>(
            r#"
            UPDATE departments
            SET name = $2, code = $3, parent_id = $4, manager_id = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(department.id)
        .bind(&department.name)
        .bind(&department.code)
        .bind(department.parent_id)
        .bind(department.manager_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
