use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::controllers::vacation_controller::employee_periods;
use crate::dto::employee_dto::{DossierTraining, EmployeeDossier};
use crate::dto::ApiResponse;
use crate::repositories::{
    DepartmentRepository, EmployeeRepository, JobPositionRepository, TrainingRepository, VacationRepository,
};
use crate::services::training_matrix::cell_status;
use crate::services::vacation_calculator::VacationPolicy;
use crate::utils::errors::{not_found_error, AppResult};

/// Prontuário: datos personales, cargo, dependientes, documentos,
/// períodos de férias y conformidad de treinamentos en una sola respuesta
pub struct DossierController {
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
    positions: Arc<dyn JobPositionRepository>,
    vacations: Arc<dyn VacationRepository>,
    trainings: Arc<dyn TrainingRepository>,
    policy: VacationPolicy,
}

impl DossierController {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
        positions: Arc<dyn JobPositionRepository>,
        vacations: Arc<dyn VacationRepository>,
        trainings: Arc<dyn TrainingRepository>,
        policy: VacationPolicy,
    ) -> Self {
        Self {
            employees,
            departments,
            positions,
            vacations,
            trainings,
            policy,
        }
    }

    pub async fn dossier(&self, id: Uuid) -> AppResult<ApiResponse<EmployeeDossier>> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Employee", &id.to_string()))?;

        let (department, job_position, manager) = futures::try_join!(
            async {
                match employee.department_id {
                    Some(department_id) => self.departments.find_by_id(department_id).await,
                    None => Ok(None),
                }
            },
            async {
                match employee.job_position_id {
                    Some(position_id) => self.positions.find_by_id(position_id).await,
                    None => Ok(None),
                }
            },
            async {
                match employee.manager_id {
                    Some(manager_id) => self.employees.find_by_id(manager_id).await,
                    None => Ok(None),
                }
            }
        )?;

        let (dependents, documents, bookings, absences, catalog, completions) = futures::try_join!(
            self.employees.list_dependents(id),
            self.employees.list_documents(id),
            self.vacations.bookings_for(id),
            self.vacations.absences_for(id),
            self.trainings.list(),
            self.trainings.completions(Some(id))
        )?;

        let requirements = match employee.job_position_id {
            Some(position_id) => self.trainings.requirements(Some(position_id)).await?,
            None => Vec::new(),
        };

        let today = Utc::now().date_naive();
        let unjustified: Vec<_> = absences.iter().filter(|a| !a.justified).map(|a| a.absence_date).collect();
        let vacation_periods = employee_periods(&employee, &bookings, &unjustified, today, &self.policy)?;

        let done: HashMap<Uuid, _> = completions.iter().map(|c| (c.training_id, c)).collect();
        let mut trainings: Vec<DossierTraining> = catalog
            .iter()
            .filter(|t| requirements.iter().any(|r| r.training_id == t.id))
            .map(|t| {
                let completion = done.get(&t.id).copied();
                DossierTraining {
                    training_id: t.id,
                    code: t.code.clone(),
                    title: t.title.clone(),
                    status: cell_status(completion, today),
                    completed_at: completion.map(|c| c.completed_at),
                    expires_at: completion.and_then(|c| c.expires_at),
                }
            })
            .collect();
        trainings.sort_by(|a, b| a.code.cmp(&b.code));

        debug!(
            "📁 Prontuário de {}: {} dependientes, {} documentos, {} períodos",
            id,
            dependents.len(),
            documents.len(),
            vacation_periods.len()
        );

        Ok(ApiResponse::success(EmployeeDossier {
            employee,
            department,
            job_position,
            manager,
            dependents,
            documents,
            vacation_periods,
            trainings,
        }))
    }
}
