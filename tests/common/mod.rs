#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use hr_admin::config::database::DatabaseConfig;
use hr_admin::config::EnvironmentConfig;
use hr_admin::dto::job_position_dto::JobPositionFilters;
use hr_admin::dto::recruitment_dto::CandidateFilters;
use hr_admin::models::department::Department;
use hr_admin::models::employee::{
    photo_limit_reached, Dependent, DocumentKind, Employee, EmployeeDocument, EmployeeFilters, EmployeeStatus,
};
use hr_admin::models::job_position::{JobPosition, JobPositionStatus, StatusChange};
use hr_admin::models::personnel_request::{
    HrTask, PersonnelRequest, PersonnelRequestFilters, PersonnelRequestHistory,
};
use hr_admin::models::recruitment::{Candidate, CandidateAssessment, JobOpening, OpeningStatus, ResumeAnalysis};
use hr_admin::models::training::{EmployeeTraining, PositionTraining, Training};
use hr_admin::models::user_profile::{UserProfile, UserRole};
use hr_admin::models::vacation::{EmployeeAbsence, VacationRequest, VacationRequestStatus};
use hr_admin::repositories::{
    DepartmentRepository, EmployeeRepository, JobPositionRepository, PersonnelRequestRepository,
    RecruitmentRepository, Repositories, TrainingRepository, UserProfileRepository, VacationRepository,
};
use hr_admin::services::personnel_workflow::{CreationPlan, TransitionPlan};
use hr_admin::services::{HttpResumeAnalyzer, ResumeAnalyzer, ResumeInput};
use hr_admin::state::AppState;
use hr_admin::utils::errors::AppResult;

pub const JWT_SECRET: &str = "test-secret-for-hr-admin";

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        database_url: "postgres://hr:hr@localhost:5432/hr_admin_test".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_audience: None,
        cors_origins: vec!["http://localhost:5173".to_string()],
        rate_limit_requests: 1000,
        rate_limit_window: 60,
        log_level: "debug".to_string(),
        vacation_warning_days: 60,
        max_employee_photos: 3,
        ai_analysis_url: None,
        ai_analysis_key: None,
    }
}

/// Estado con pool perezoso y repositorios en memoria donde los tests los necesitan
pub fn test_state(profiles: Vec<UserProfile>) -> (AppState, Arc<InMemoryEmployees>) {
    let config = test_config();
    let pool = DatabaseConfig::new(config.database_url.clone())
        .create_lazy_pool()
        .expect("lazy pool");

    let employees = Arc::new(InMemoryEmployees::default());
    let mut repositories = Repositories::postgres(pool);
    repositories.employees = employees.clone();
    repositories.user_profiles = Arc::new(InMemoryProfiles::new(profiles));

    let analyzer = HttpResumeAnalyzer::from_config(&config).expect("analyzer");
    (AppState::from_parts(config, repositories, Arc::new(analyzer)), employees)
}

pub fn profile(role: UserRole) -> UserProfile {
    UserProfile {
        user_id: Uuid::new_v4(),
        full_name: "Perfil de Teste".to_string(),
        email: format!("{}@empresa.com", Uuid::new_v4()),
        role,
        module: Some("personnel".to_string()),
        employee_id: None,
        created_at: Utc::now(),
    }
}

pub fn employee(first_name: &str, hire_date: NaiveDate) -> Employee {
    let now = Utc::now();
    Employee {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Almeida".to_string(),
        email: format!("{}.almeida@empresa.com", first_name.to_lowercase()),
        cpf: None,
        phone: None,
        birth_date: None,
        address: None,
        department_id: None,
        job_position_id: None,
        manager_id: None,
        status: EmployeeStatus::Active,
        hire_date,
        salary: None,
        created_at: now,
        updated_at: now,
    }
}

// ---------------------------------------------------------------------------
// Colaboradores
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryEmployees {
    pub employees: Mutex<Vec<Employee>>,
    pub dependents: Mutex<Vec<Dependent>>,
    pub documents: Mutex<Vec<EmployeeDocument>>,
    pub creates: AtomicUsize,
}

impl InMemoryEmployees {
    pub fn with(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Default::default()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn create(&self, employee: &Employee, dependents: &[Dependent]) -> AppResult<Employee> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.employees.lock().unwrap().push(employee.clone());
        self.dependents.lock().unwrap().extend_from_slice(dependents);
        Ok(employee.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        Ok(self.employees.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.email == email && Some(e.id) != exclude))
    }

    async fn list(&self, filters: &EmployeeFilters) -> AppResult<(Vec<Employee>, i64)> {
        let all: Vec<Employee> = self
            .employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| filters.status.map_or(true, |s| e.status == s))
            .cloned()
            .collect();
        let total = all.len() as i64;
        let page = all
            .into_iter()
            .skip(filters.offset() as usize)
            .take(filters.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_current(&self) -> AppResult<Vec<Employee>> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.status != EmployeeStatus::Inactive)
            .cloned()
            .collect())
    }

    async fn update(&self, employee: &Employee) -> AppResult<Employee> {
        let mut employees = self.employees.lock().unwrap();
        if let Some(slot) = employees.iter_mut().find(|e| e.id == employee.id) {
            *slot = employee.clone();
        }
        Ok(employee.clone())
    }

    async fn set_status(&self, id: Uuid, status: EmployeeStatus) -> AppResult<Option<Employee>> {
        let mut employees = self.employees.lock().unwrap();
        Ok(employees.iter_mut().find(|e| e.id == id).map(|e| {
            e.status = status;
            e.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok(employees.len() < before)
    }

    async fn list_dependents(&self, employee_id: Uuid) -> AppResult<Vec<Dependent>> {
        Ok(self
            .dependents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn add_dependent(&self, dependent: &Dependent) -> AppResult<Dependent> {
        self.dependents.lock().unwrap().push(dependent.clone());
        Ok(dependent.clone())
    }

    async fn remove_dependent(&self, employee_id: Uuid, dependent_id: Uuid) -> AppResult<bool> {
        let mut dependents = self.dependents.lock().unwrap();
        let before = dependents.len();
        dependents.retain(|d| !(d.employee_id == employee_id && d.id == dependent_id));
        Ok(dependents.len() < before)
    }

    async fn list_documents(&self, employee_id: Uuid) -> AppResult<Vec<EmployeeDocument>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn add_document(&self, document: &EmployeeDocument, max_photos: i64) -> AppResult<Option<EmployeeDocument>> {
        let mut documents = self.documents.lock().unwrap();
        if document.kind == DocumentKind::Photo {
            let photos = documents
                .iter()
                .filter(|d| d.employee_id == document.employee_id && d.kind == DocumentKind::Photo)
                .count() as i64;
            if photo_limit_reached(photos, max_photos) {
                return Ok(None);
            }
        }
        documents.push(document.clone());
        Ok(Some(document.clone()))
    }

    async fn remove_document(&self, employee_id: Uuid, document_id: Uuid) -> AppResult<bool> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| !(d.employee_id == employee_id && d.id == document_id));
        Ok(documents.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Perfiles
// ---------------------------------------------------------------------------

pub struct InMemoryProfiles {
    profiles: Vec<UserProfile>,
}

impl InMemoryProfiles {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryProfiles {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn find_approvers(&self, module: &str) -> AppResult<Vec<UserProfile>> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.role.can_approve() && p.module.as_deref() == Some(module))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Solicitudes de personal
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryPersonnelRequests {
    pub requests: Mutex<Vec<PersonnelRequest>>,
    pub history: Mutex<Vec<PersonnelRequestHistory>>,
    pub tasks: Mutex<Vec<HrTask>>,
    pub notified: Mutex<Vec<Uuid>>,
}

impl InMemoryPersonnelRequests {
    fn push_history(&self, entry: &hr_admin::models::personnel_request::NewHistoryEntry) {
        self.history.lock().unwrap().push(PersonnelRequestHistory {
            id: Uuid::new_v4(),
            request_id: entry.request_id,
            from_status: entry.from_status,
            to_status: entry.to_status,
            actor_id: entry.actor_id,
            comment: entry.comment.clone(),
            created_at: Utc::now(),
        });
    }
}

#[async_trait]
impl PersonnelRequestRepository for InMemoryPersonnelRequests {
    async fn create(&self, plan: &CreationPlan) -> AppResult<PersonnelRequest> {
        let now = Utc::now();
        let new = &plan.request;
        let request = PersonnelRequest {
            id: new.id,
            request_type: new.request_type,
            status: new.status,
            employee_id: new.employee_id,
            requested_by: new.requested_by,
            justification: new.justification.clone(),
            details: new.details.clone(),
            decided_at: None,
            created_at: now,
            updated_at: now,
        };
        self.requests.lock().unwrap().push(request.clone());
        self.push_history(&plan.history);
        self.notified
            .lock()
            .unwrap()
            .extend(plan.notifications.iter().map(|n| n.user_id));
        Ok(request)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PersonnelRequest>> {
        Ok(self.requests.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, _filters: &PersonnelRequestFilters) -> AppResult<Vec<PersonnelRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn apply_transition(&self, id: Uuid, plan: &TransitionPlan) -> AppResult<Option<PersonnelRequest>> {
        let updated = {
            let mut requests = self.requests.lock().unwrap();
            let Some(request) = requests.iter_mut().find(|r| r.id == id && r.status == plan.from) else {
                return Ok(None);
            };
            request.status = plan.to;
            request.decided_at = plan.decided_at;
            request.updated_at = Utc::now();
            request.clone()
        };

        self.push_history(&plan.history);
        if let Some(task) = &plan.task {
            self.tasks.lock().unwrap().push(HrTask {
                id: Uuid::new_v4(),
                module: task.module.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                reference_id: task.reference_id,
                employee_id: task.employee_id,
                status: "open".to_string(),
                created_at: Utc::now(),
            });
        }
        self.notified
            .lock()
            .unwrap()
            .extend(plan.notifications.iter().map(|n| n.user_id));
        Ok(Some(updated))
    }

    async fn history(&self, id: Uuid) -> AppResult<Vec<PersonnelRequestHistory>> {
        Ok(self
            .history
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.request_id == id)
            .cloned()
            .collect())
    }

    async fn tasks(&self, id: Uuid) -> AppResult<Vec<HrTask>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.reference_id == Some(id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut requests = self.requests.lock().unwrap();
        let before = requests.len();
        requests.retain(|r| r.id != id);
        Ok(requests.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Cargos
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryJobPositions {
    pub positions: Mutex<Vec<JobPosition>>,
}

#[async_trait]
impl JobPositionRepository for InMemoryJobPositions {
    async fn create(&self, position: &JobPosition) -> AppResult<JobPosition> {
        self.positions.lock().unwrap().push(position.clone());
        Ok(position.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobPosition>> {
        Ok(self.positions.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filters: &JobPositionFilters) -> AppResult<Vec<JobPosition>> {
        Ok(self
            .positions
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filters.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect())
    }

    async fn update(&self, position: &JobPosition) -> AppResult<JobPosition> {
        let mut positions = self.positions.lock().unwrap();
        if let Some(slot) = positions.iter_mut().find(|p| p.id == position.id) {
            *slot = position.clone();
        }
        Ok(position.clone())
    }

    async fn apply_status_change(
        &self,
        id: Uuid,
        expected: JobPositionStatus,
        change: &StatusChange,
    ) -> AppResult<Option<JobPosition>> {
        let mut positions = self.positions.lock().unwrap();
        Ok(positions
            .iter_mut()
            .find(|p| p.id == id && p.status == expected)
            .map(|p| {
                p.status = change.status;
                p.revision = change.revision;
                p.approved_by = change.approved_by;
                p.approved_at = change.approved_at;
                p.updated_at = Utc::now();
                p.clone()
            }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut positions = self.positions.lock().unwrap();
        let before = positions.len();
        positions.retain(|p| p.id != id);
        Ok(positions.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Férias
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryVacations {
    pub bookings: Mutex<Vec<VacationRequest>>,
    pub absences: Mutex<Vec<EmployeeAbsence>>,
}

#[async_trait]
impl VacationRepository for InMemoryVacations {
    async fn bookings_for(&self, employee_id: Uuid) -> AppResult<Vec<VacationRequest>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn all_active_bookings(&self) -> AppResult<Vec<VacationRequest>> {
        Ok(self.bookings.lock().unwrap().iter().filter(|b| b.is_active()).cloned().collect())
    }

    async fn create_booking(&self, booking: &VacationRequest) -> AppResult<VacationRequest> {
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking.clone())
    }

    async fn cancel_booking(&self, id: Uuid) -> AppResult<Option<VacationRequest>> {
        let mut bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter_mut()
            .find(|b| b.id == id && b.is_active())
            .map(|b| {
                b.status = VacationRequestStatus::Canceled;
                b.clone()
            }))
    }

    async fn absences_for(&self, employee_id: Uuid) -> AppResult<Vec<EmployeeAbsence>> {
        Ok(self
            .absences
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn all_unjustified_absences(&self) -> AppResult<Vec<(Uuid, NaiveDate)>> {
        Ok(self
            .absences
            .lock()
            .unwrap()
            .iter()
            .filter(|a| !a.justified)
            .map(|a| (a.employee_id, a.absence_date))
            .collect())
    }

    async fn record_absence(&self, absence: &EmployeeAbsence) -> AppResult<EmployeeAbsence> {
        self.absences.lock().unwrap().push(absence.clone());
        Ok(absence.clone())
    }
}

// ---------------------------------------------------------------------------
// Treinamentos
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryTrainings {
    pub trainings: Mutex<Vec<Training>>,
    pub requirements: Mutex<Vec<PositionTraining>>,
    pub completions: Mutex<Vec<EmployeeTraining>>,
}

#[async_trait]
impl TrainingRepository for InMemoryTrainings {
    async fn create(&self, training: &Training) -> AppResult<Training> {
        self.trainings.lock().unwrap().push(training.clone());
        Ok(training.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Training>> {
        Ok(self.trainings.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Training>> {
        Ok(self.trainings.lock().unwrap().clone())
    }

    async fn update(&self, training: &Training) -> AppResult<Training> {
        let mut trainings = self.trainings.lock().unwrap();
        if let Some(slot) = trainings.iter_mut().find(|t| t.id == training.id) {
            *slot = training.clone();
        }
        Ok(training.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut trainings = self.trainings.lock().unwrap();
        let before = trainings.len();
        trainings.retain(|t| t.id != id);
        Ok(trainings.len() < before)
    }

    async fn add_requirement(&self, job_position_id: Uuid, training_id: Uuid) -> AppResult<PositionTraining> {
        let mut requirements = self.requirements.lock().unwrap();
        if let Some(existing) = requirements
            .iter()
            .find(|r| r.job_position_id == job_position_id && r.training_id == training_id)
        {
            return Ok(existing.clone());
        }
        let requirement = PositionTraining {
            job_position_id,
            training_id,
            created_at: Utc::now(),
        };
        requirements.push(requirement.clone());
        Ok(requirement)
    }

    async fn remove_requirement(&self, job_position_id: Uuid, training_id: Uuid) -> AppResult<bool> {
        let mut requirements = self.requirements.lock().unwrap();
        let before = requirements.len();
        requirements.retain(|r| !(r.job_position_id == job_position_id && r.training_id == training_id));
        Ok(requirements.len() < before)
    }

    async fn requirements(&self, job_position_id: Option<Uuid>) -> AppResult<Vec<PositionTraining>> {
        Ok(self
            .requirements
            .lock()
            .unwrap()
            .iter()
            .filter(|r| job_position_id.map_or(true, |p| r.job_position_id == p))
            .cloned()
            .collect())
    }

    async fn record_completion(&self, completion: &EmployeeTraining) -> AppResult<EmployeeTraining> {
        let mut completions = self.completions.lock().unwrap();
        completions.retain(|c| !(c.employee_id == completion.employee_id && c.training_id == completion.training_id));
        completions.push(completion.clone());
        Ok(completion.clone())
    }

    async fn completions(&self, employee_id: Option<Uuid>) -> AppResult<Vec<EmployeeTraining>> {
        Ok(self
            .completions
            .lock()
            .unwrap()
            .iter()
            .filter(|c| employee_id.map_or(true, |e| c.employee_id == e))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Recrutamento
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryRecruitment {
    pub openings: Mutex<Vec<JobOpening>>,
    pub candidates: Mutex<Vec<Candidate>>,
    pub assessments: Mutex<Vec<CandidateAssessment>>,
}

#[async_trait]
impl RecruitmentRepository for InMemoryRecruitment {
    async fn create_opening(&self, opening: &JobOpening) -> AppResult<JobOpening> {
        self.openings.lock().unwrap().push(opening.clone());
        Ok(opening.clone())
    }

    async fn find_opening(&self, id: Uuid) -> AppResult<Option<JobOpening>> {
        Ok(self.openings.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn list_openings(&self, status: Option<OpeningStatus>) -> AppResult<Vec<JobOpening>> {
        Ok(self
            .openings
            .lock()
            .unwrap()
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    async fn update_opening(&self, opening: &JobOpening) -> AppResult<JobOpening> {
        let mut openings = self.openings.lock().unwrap();
        if let Some(slot) = openings.iter_mut().find(|o| o.id == opening.id) {
            *slot = opening.clone();
        }
        Ok(opening.clone())
    }

    async fn delete_opening(&self, id: Uuid) -> AppResult<bool> {
        let mut openings = self.openings.lock().unwrap();
        let before = openings.len();
        openings.retain(|o| o.id != id);
        Ok(openings.len() < before)
    }

    async fn create_candidate(&self, candidate: &Candidate) -> AppResult<Candidate> {
        self.candidates.lock().unwrap().push(candidate.clone());
        Ok(candidate.clone())
    }

    async fn find_candidate(&self, id: Uuid) -> AppResult<Option<Candidate>> {
        Ok(self.candidates.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn list_candidates(&self, filters: &CandidateFilters) -> AppResult<Vec<Candidate>> {
        Ok(self
            .candidates
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filters.job_opening_id.map_or(true, |o| c.job_opening_id == Some(o)))
            .filter(|c| filters.status.map_or(true, |s| c.status == s))
            .cloned()
            .collect())
    }

    async fn update_candidate(&self, candidate: &Candidate) -> AppResult<Candidate> {
        let mut candidates = self.candidates.lock().unwrap();
        if let Some(slot) = candidates.iter_mut().find(|c| c.id == candidate.id) {
            *slot = candidate.clone();
        }
        Ok(candidate.clone())
    }

    async fn save_analysis(&self, id: Uuid, analysis: &ResumeAnalysis) -> AppResult<Option<Candidate>> {
        let mut candidates = self.candidates.lock().unwrap();
        Ok(candidates.iter_mut().find(|c| c.id == id).map(|c| {
            c.ai_score = Some(analysis.score);
            c.ai_summary = Some(analysis.summary.clone());
            c.clone()
        }))
    }

    async fn delete_candidate(&self, id: Uuid) -> AppResult<bool> {
        let mut candidates = self.candidates.lock().unwrap();
        let before = candidates.len();
        candidates.retain(|c| c.id != id);
        Ok(candidates.len() < before)
    }

    async fn create_assessment(&self, assessment: &CandidateAssessment) -> AppResult<CandidateAssessment> {
        self.assessments.lock().unwrap().push(assessment.clone());
        Ok(assessment.clone())
    }

    async fn list_assessments(&self, candidate_id: Uuid) -> AppResult<Vec<CandidateAssessment>> {
        Ok(self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.candidate_id == candidate_id)
            .cloned()
            .collect())
    }
}

/// Analizador que siempre responde la misma nota
pub struct FixedAnalyzer {
    pub score: i32,
    pub seen: Mutex<Vec<ResumeInput>>,
}

impl FixedAnalyzer {
    pub fn new(score: i32) -> Self {
        Self {
            score,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ResumeAnalyzer for FixedAnalyzer {
    async fn analyze(&self, input: &ResumeInput) -> AppResult<ResumeAnalysis> {
        self.seen.lock().unwrap().push(input.clone());
        Ok(ResumeAnalysis {
            score: self.score,
            summary: format!("Perfil aderente: {}", input.candidate_name),
        })
    }
}

// ---------------------------------------------------------------------------
// Departamentos
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryDepartments {
    pub departments: Mutex<Vec<Department>>,
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartments {
    async fn create(&self, department: &Department) -> AppResult<Department> {
        self.departments.lock().unwrap().push(department.clone());
        Ok(department.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        Ok(self.departments.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Department>> {
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn update(&self, department: &Department) -> AppResult<Department> {
        let mut departments = self.departments.lock().unwrap();
        if let Some(slot) = departments.iter_mut().find(|d| d.id == department.id) {
            *slot = department.clone();
        }
        Ok(department.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut departments = self.departments.lock().unwrap();
        let before = departments.len();
        departments.retain(|d| d.id != id);
        Ok(departments.len() < before)
    }
}
