use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::employee_dto::{
    AttachDocumentRequest, CreateEmployeeRequest, DependentInput, SetStatusRequest, UpdateEmployeeRequest,
};
use crate::dto::{ApiResponse, Page};
use crate::models::employee::{Dependent, Employee, EmployeeDocument, EmployeeFilters, EmployeeStatus};
use crate::repositories::EmployeeRepository;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppResult};

pub struct EmployeeController {
    employees: Arc<dyn EmployeeRepository>,
    max_photos: i64,
}

impl EmployeeController {
    pub fn new(employees: Arc<dyn EmployeeRepository>, max_photos: i64) -> Self {
        Self { employees, max_photos }
    }

    async fn find(&self, id: Uuid) -> AppResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Employee", &id.to_string()))
    }

    pub async fn create(&self, request: CreateEmployeeRequest) -> AppResult<ApiResponse<Employee>> {
        request.validate()?;
        let hire_date = request
            .hire_date
            .ok_or_else(|| validation_error("hire_date", "La fecha de admisión es requerida"))?;

        let email = request.email.trim().to_lowercase();
        if self.employees.email_exists(&email, None).await? {
            return Err(conflict_error("Employee", "email", &email));
        }

        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email,
            cpf: request.cpf.map(|c| c.chars().filter(char::is_ascii_digit).collect()),
            phone: request.phone,
            birth_date: request.birth_date,
            address: request.address,
            department_id: request.department_id,
            job_position_id: request.job_position_id,
            manager_id: request.manager_id,
            status: request.status.unwrap_or(EmployeeStatus::Active),
            hire_date,
            salary: request.salary,
            created_at: now,
            updated_at: now,
        };

        let dependents: Vec<Dependent> = request
            .dependents
            .into_iter()
            .map(|d| Dependent::new(employee.id, d.name, d.relationship, d.birth_date))
            .collect();

        let saved = self.employees.create(&employee, &dependents).await?;
        info!("👤 Colaborador creado: {} ({} dependientes)", saved.id, dependents.len());

        Ok(ApiResponse::success_with_message(saved, "Colaborador creado"))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ApiResponse<Employee>> {
        Ok(ApiResponse::success(self.find(id).await?))
    }

    pub async fn list(&self, filters: EmployeeFilters) -> AppResult<ApiResponse<Page<Employee>>> {
        let (items, total) = self.employees.list(&filters).await?;
        Ok(ApiResponse::success(Page {
            items,
            total,
            limit: filters.limit(),
            offset: filters.offset(),
        }))
    }

    pub async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> AppResult<ApiResponse<Employee>> {
        request.validate()?;
        let mut employee = self.find(id).await?;

        if request.manager_id == Some(id) {
            return Err(validation_error("manager_id", "Un colaborador no puede ser su propio gestor"));
        }

        if let Some(email) = request.email {
            let email = email.trim().to_lowercase();
            if email != employee.email && self.employees.email_exists(&email, Some(id)).await? {
                return Err(conflict_error("Employee", "email", &email));
            }
            employee.email = email;
        }
        if let Some(first_name) = request.first_name {
            employee.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = request.last_name {
            employee.last_name = last_name.trim().to_string();
        }
        if let Some(cpf) = request.cpf {
            employee.cpf = Some(cpf.chars().filter(char::is_ascii_digit).collect());
        }
        if request.phone.is_some() {
            employee.phone = request.phone;
        }
        if request.birth_date.is_some() {
            employee.birth_date = request.birth_date;
        }
        if request.address.is_some() {
            employee.address = request.address;
        }
        if request.department_id.is_some() {
            employee.department_id = request.department_id;
        }
        if request.job_position_id.is_some() {
            employee.job_position_id = request.job_position_id;
        }
        if request.manager_id.is_some() {
            employee.manager_id = request.manager_id;
        }
        if let Some(hire_date) = request.hire_date {
            employee.hire_date = hire_date;
        }
        if request.salary.is_some() {
            employee.salary = request.salary;
        }

        let saved = self.employees.update(&employee).await?;
        Ok(ApiResponse::success_with_message(saved, "Colaborador actualizado"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.employees.delete(id).await? {
            return Err(not_found_error("Employee", &id.to_string()));
        }
        info!("🗑️ Colaborador eliminado: {}", id);
        Ok(ApiResponse::message("Colaborador eliminado"))
    }

    pub async fn set_status(&self, id: Uuid, request: SetStatusRequest) -> AppResult<ApiResponse<Employee>> {
        let employee = self
            .employees
            .set_status(id, request.status)
            .await?
            .ok_or_else(|| not_found_error("Employee", &id.to_string()))?;
        Ok(ApiResponse::success(employee))
    }

    pub async fn list_dependents(&self, id: Uuid) -> AppResult<ApiResponse<Vec<Dependent>>> {
        self.find(id).await?;
        Ok(ApiResponse::success(self.employees.list_dependents(id).await?))
    }

    pub async fn add_dependent(&self, id: Uuid, request: DependentInput) -> AppResult<ApiResponse<Dependent>> {
        request.validate()?;
        self.find(id).await?;

        let dependent = Dependent::new(id, request.name, request.relationship, request.birth_date);
        let saved = self.employees.add_dependent(&dependent).await?;
        Ok(ApiResponse::success_with_message(saved, "Dependiente agregado"))
    }

    pub async fn remove_dependent(&self, id: Uuid, dependent_id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.employees.remove_dependent(id, dependent_id).await? {
            return Err(not_found_error("Dependent", &dependent_id.to_string()));
        }
        Ok(ApiResponse::message("Dependiente eliminado"))
    }

    pub async fn list_documents(&self, id: Uuid) -> AppResult<ApiResponse<Vec<EmployeeDocument>>> {
        self.find(id).await?;
        Ok(ApiResponse::success(self.employees.list_documents(id).await?))
    }

    pub async fn attach_document(
        &self,
        id: Uuid,
        request: AttachDocumentRequest,
    ) -> AppResult<ApiResponse<EmployeeDocument>> {
        request.validate()?;
        self.find(id).await?;

        let document = EmployeeDocument::new(
            id,
            request.kind,
            request.file_name.trim().to_string(),
            request.content_type,
            request.url,
        );

        let saved = self
            .employees
            .add_document(&document, self.max_photos)
            .await?
            .ok_or_else(|| {
                validation_error(
                    "kind",
                    format!("El colaborador ya tiene el máximo de {} fotos", self.max_photos),
                )
            })?;

        info!("📎 Documento {:?} adjuntado al colaborador {}", saved.kind, id);
        Ok(ApiResponse::success_with_message(saved, "Documento adjuntado"))
    }

    pub async fn remove_document(&self, id: Uuid, document_id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.employees.remove_document(id, document_id).await? {
            return Err(not_found_error("EmployeeDocument", &document_id.to_string()));
        }
        Ok(ApiResponse::message("Documento eliminado"))
    }
}
