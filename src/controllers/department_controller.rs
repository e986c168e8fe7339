use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::dto::ApiResponse;
use crate::models::department::Department;
use crate::repositories::{DepartmentRepository, EmployeeRepository};
use crate::services::org_chart::{build_org_chart, OrgChart};
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct DepartmentController {
    departments: Arc<dyn DepartmentRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl DepartmentController {
    pub fn new(departments: Arc<dyn DepartmentRepository>, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { departments, employees }
    }

    async fn find(&self, id: Uuid) -> AppResult<Department> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Department", &id.to_string()))
    }

    pub async fn create(&self, request: CreateDepartmentRequest) -> AppResult<ApiResponse<Department>> {
        request.validate()?;
        if let Some(parent_id) = request.parent_id {
            self.find(parent_id).await?;
        }

        let now = Utc::now();
        let department = Department {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            code: request.code.trim().to_uppercase(),
            parent_id: request.parent_id,
            manager_id: request.manager_id,
            created_at: now,
            updated_at: now,
        };

        let saved = self.departments.create(&department).await?;
        info!("🏢 Departamento creado: {} ({})", saved.name, saved.code);
        Ok(ApiResponse::success_with_message(saved, "Departamento creado"))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ApiResponse<Department>> {
        Ok(ApiResponse::success(self.find(id).await?))
    }

    pub async fn list(&self) -> AppResult<ApiResponse<Vec<Department>>> {
        Ok(ApiResponse::success(self.departments.list().await?))
    }

    pub async fn update(&self, id: Uuid, request: UpdateDepartmentRequest) -> AppResult<ApiResponse<Department>> {
        request.validate()?;
        let mut department = self.find(id).await?;

        if let Some(parent_id) = request.parent_id {
            if parent_id == id {
                return Err(validation_error("parent_id", "Un departamento no puede ser su propio padre"));
            }
            self.find(parent_id).await?;
            department.parent_id = Some(parent_id);
        }
        if let Some(name) = request.name {
            department.name = name.trim().to_string();
        }
        if let Some(code) = request.code {
            department.code = code.trim().to_uppercase();
        }
        if request.manager_id.is_some() {
            department.manager_id = request.manager_id;
        }

        let saved = self.departments.update(&department).await?;
        Ok(ApiResponse::success_with_message(saved, "Departamento actualizado"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.departments.delete(id).await? {
            return Err(not_found_error("Department", &id.to_string()));
        }
        Ok(ApiResponse::message("Departamento eliminado"))
    }

    /// Organograma de departamentos y colaboradores activos
    pub async fn org_chart(&self) -> AppResult<ApiResponse<OrgChart>> {
        let (departments, employees) = futures::try_join!(self.departments.list(), self.employees.list_current())?;
        Ok(ApiResponse::success(build_org_chart(departments, &employees)))
    }
}
