mod common;

use std::sync::Arc;

use chrono::{Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use hr_admin::controllers::department_controller::DepartmentController;
use hr_admin::controllers::employee_controller::EmployeeController;
use hr_admin::controllers::job_position_controller::JobPositionController;
use hr_admin::controllers::personnel_request_controller::PersonnelRequestController;
use hr_admin::controllers::recruitment_controller::RecruitmentController;
use hr_admin::controllers::training_controller::TrainingController;
use hr_admin::controllers::vacation_controller::VacationController;
use hr_admin::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use hr_admin::dto::employee_dto::{AttachDocumentRequest, CreateEmployeeRequest};
use hr_admin::dto::job_position_dto::{CreateJobPositionRequest, JobPositionTransitionRequest};
use hr_admin::dto::personnel_request_dto::{CreatePersonnelRequest, TransitionPersonnelRequest};
use hr_admin::dto::recruitment_dto::{
    CreateCandidateRequest, CreateJobOpeningRequest, SubmitAssessmentRequest, UpdateCandidateRequest,
    UpdateJobOpeningRequest,
};
use hr_admin::dto::training_dto::{CreateTrainingRequest, MatrixQuery, RecordCompletionRequest, RequirementRequest};
use hr_admin::dto::vacation_dto::CreateVacationRequest;
use hr_admin::models::employee::EmployeeStatus;
use hr_admin::models::job_position::JobPositionStatus;
use hr_admin::models::personnel_request::PersonnelRequestStatus;
use hr_admin::models::recruitment::{DiscAnswer, DiscFactor, OpeningStatus};
use hr_admin::models::training::ComplianceStatus;
use hr_admin::models::user_profile::UserRole;
use hr_admin::models::vacation::{VacationPeriodStatus, VacationRequestStatus};
use hr_admin::services::personnel_workflow::Actor;
use hr_admin::services::vacation_calculator::VacationPolicy;
use hr_admin::utils::errors::AppError;

use common::{
    employee, profile, FixedAnalyzer, InMemoryDepartments, InMemoryEmployees, InMemoryJobPositions,
    InMemoryPersonnelRequests, InMemoryProfiles, InMemoryRecruitment, InMemoryTrainings, InMemoryVacations,
};

fn employee_request(value: serde_json::Value) -> CreateEmployeeRequest {
    serde_json::from_value(value).unwrap()
}

fn photo(n: usize) -> AttachDocumentRequest {
    serde_json::from_value(json!({
        "kind": "photo",
        "file_name": format!("foto-{}.jpg", n),
        "content_type": "image/jpeg",
        "url": format!("https://arquivos.empresa.com/fotos/{}.jpg", n)
    }))
    .unwrap()
}

fn actor(role: UserRole) -> Actor {
    Actor {
        user_id: Uuid::new_v4(),
        role,
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn months_ago(months: u32) -> NaiveDate {
    today().checked_sub_months(Months::new(months)).unwrap()
}

// ---------------------------------------------------------------------------
// Colaboradores
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_employee_missing_names_is_rejected_before_persisting() {
    let repo = Arc::new(InMemoryEmployees::default());
    let controller = EmployeeController::new(repo.clone(), 3);

    let result = controller
        .create(employee_request(json!({
            "first_name": "  ",
            "email": "",
            "hire_date": "2020-02-01"
        })))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(repo.create_calls(), 0);
}

#[tokio::test]
async fn test_employee_duplicate_email_conflicts() {
    let repo = Arc::new(InMemoryEmployees::default());
    let controller = EmployeeController::new(repo.clone(), 3);
    let body = json!({
        "first_name": "Ana",
        "last_name": "Souza",
        "email": "ana.souza@empresa.com",
        "hire_date": "2019-08-12"
    });

    controller.create(employee_request(body.clone())).await.unwrap();
    let mut upper = body;
    upper["email"] = json!("ANA.SOUZA@empresa.com");
    let result = controller.create(employee_request(upper)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.create_calls(), 1);
}

#[tokio::test]
async fn test_fourth_photo_is_rejected() {
    let repo = Arc::new(InMemoryEmployees::default());
    let controller = EmployeeController::new(repo.clone(), 3);
    let employee = controller
        .create(employee_request(json!({
            "first_name": "Rafael",
            "last_name": "Lima",
            "email": "rafael.lima@empresa.com",
            "hire_date": "2018-01-15"
        })))
        .await
        .unwrap()
        .data
        .unwrap();

    for n in 0..3 {
        controller.attach_document(employee.id, photo(n)).await.unwrap();
    }
    let fourth = controller.attach_document(employee.id, photo(3)).await;
    assert!(matches!(fourth, Err(AppError::Validation(_))));

    // Los documentos comunes no cuentan para el límite
    let contract: AttachDocumentRequest = serde_json::from_value(json!({
        "kind": "document",
        "file_name": "contrato.pdf",
        "content_type": "application/pdf",
        "url": "https://arquivos.empresa.com/docs/contrato.pdf"
    }))
    .unwrap();
    controller.attach_document(employee.id, contract).await.unwrap();

    let documents = controller.list_documents(employee.id).await.unwrap().data.unwrap();
    assert_eq!(documents.len(), 4);
}

#[tokio::test]
async fn test_documents_for_unknown_employee_are_not_found() {
    let controller = EmployeeController::new(Arc::new(InMemoryEmployees::default()), 3);
    let result = controller.attach_document(Uuid::new_v4(), photo(0)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// ---------------------------------------------------------------------------
// Solicitudes de personal
// ---------------------------------------------------------------------------

fn salary_raise(draft: bool) -> CreatePersonnelRequest {
    serde_json::from_value(json!({
        "type": "salary_raise",
        "employee_id": Uuid::new_v4(),
        "justification": "Reajuste anual",
        "details": { "new_salary": 6500, "effective_date": "2025-03-01" },
        "draft": draft
    }))
    .unwrap()
}

fn transition(status: PersonnelRequestStatus) -> TransitionPersonnelRequest {
    TransitionPersonnelRequest { status, comment: None }
}

#[tokio::test]
async fn test_personnel_request_full_approval_flow() {
    let manager = profile(UserRole::Manager);
    let hr = profile(UserRole::HrAdmin);
    let requests = Arc::new(InMemoryPersonnelRequests::default());
    let controller = PersonnelRequestController::new(
        requests.clone(),
        Arc::new(InMemoryProfiles::new(vec![manager.clone(), hr.clone()])),
    );
    let requester = actor(UserRole::Employee);

    let created = controller.create(salary_raise(false), requester).await.unwrap().data.unwrap();
    assert_eq!(created.status, PersonnelRequestStatus::ManagerApproval);
    assert_eq!(requests.notified.lock().unwrap().len(), 2);

    // Un colaborador común no decide
    let denied = controller
        .transition(created.id, transition(PersonnelRequestStatus::InAnalysis), requester)
        .await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    let approver = Actor {
        user_id: manager.user_id,
        role: UserRole::Manager,
    };
    for status in [PersonnelRequestStatus::InAnalysis, PersonnelRequestStatus::InApproval] {
        controller.transition(created.id, transition(status), approver).await.unwrap();
    }
    let approved = controller
        .transition(created.id, transition(PersonnelRequestStatus::Approved), approver)
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(approved.status, PersonnelRequestStatus::Approved);
    assert!(approved.decided_at.is_some());
    assert_eq!(requests.tasks.lock().unwrap().len(), 1);
    assert_eq!(requests.tasks.lock().unwrap()[0].module, "payroll");

    let history = controller.history(created.id).await.unwrap().data.unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].from_status, None);

    // Terminal: ni transiciones ni eliminación
    let again = controller
        .transition(created.id, transition(PersonnelRequestStatus::Canceled), approver)
        .await;
    assert!(matches!(again, Err(AppError::InvalidTransition { .. })));
    assert!(matches!(
        controller.delete(created.id).await,
        Err(AppError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn test_draft_request_does_not_notify_and_can_be_deleted() {
    let requests = Arc::new(InMemoryPersonnelRequests::default());
    let controller = PersonnelRequestController::new(
        requests.clone(),
        Arc::new(InMemoryProfiles::new(vec![profile(UserRole::Manager)])),
    );

    let draft = controller
        .create(salary_raise(true), actor(UserRole::Employee))
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(draft.status, PersonnelRequestStatus::New);
    assert!(requests.notified.lock().unwrap().is_empty());
    controller.delete(draft.id).await.unwrap();
    assert!(requests.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_request_with_missing_details_is_not_created() {
    let requests = Arc::new(InMemoryPersonnelRequests::default());
    let controller = PersonnelRequestController::new(requests.clone(), Arc::new(InMemoryProfiles::new(Vec::new())));
    let request: CreatePersonnelRequest = serde_json::from_value(json!({
        "type": "termination",
        "employee_id": Uuid::new_v4(),
        "details": { "reason": "Pedido de demissão" }
    }))
    .unwrap();

    let result = controller.create(request, actor(UserRole::Manager)).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(requests.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_requester_can_cancel_but_stranger_cannot() {
    let controller = PersonnelRequestController::new(
        Arc::new(InMemoryPersonnelRequests::default()),
        Arc::new(InMemoryProfiles::new(Vec::new())),
    );
    let requester = actor(UserRole::Employee);
    let created = controller.create(salary_raise(false), requester).await.unwrap().data.unwrap();

    let stranger = controller
        .transition(created.id, transition(PersonnelRequestStatus::Canceled), actor(UserRole::Employee))
        .await;
    assert!(matches!(stranger, Err(AppError::Forbidden(_))));

    let canceled = controller
        .transition(created.id, transition(PersonnelRequestStatus::Canceled), requester)
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(canceled.status, PersonnelRequestStatus::Canceled);
}

#[tokio::test]
async fn test_only_requester_or_approver_submits_a_draft() {
    let manager = profile(UserRole::Manager);
    let requests = Arc::new(InMemoryPersonnelRequests::default());
    let controller = PersonnelRequestController::new(
        requests.clone(),
        Arc::new(InMemoryProfiles::new(vec![manager.clone()])),
    );
    let requester = actor(UserRole::Employee);
    let draft = controller.create(salary_raise(true), requester).await.unwrap().data.unwrap();

    let stranger = controller
        .transition(draft.id, transition(PersonnelRequestStatus::ManagerApproval), actor(UserRole::Employee))
        .await;
    assert!(matches!(stranger, Err(AppError::Forbidden(_))));
    assert!(requests.notified.lock().unwrap().is_empty());
    assert_eq!(requests.requests.lock().unwrap()[0].status, PersonnelRequestStatus::New);

    let submitted = controller
        .transition(draft.id, transition(PersonnelRequestStatus::ManagerApproval), requester)
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(submitted.status, PersonnelRequestStatus::ManagerApproval);
    assert_eq!(*requests.notified.lock().unwrap(), vec![manager.user_id]);
}

// ---------------------------------------------------------------------------
// Cargos
// ---------------------------------------------------------------------------

fn position_request() -> CreateJobPositionRequest {
    serde_json::from_value(json!({
        "code": "ana-rh",
        "title": "Analista de RH",
        "junior": { "salary_min": 3000, "salary_max": 4200 },
        "mid": { "salary_min": 4200, "salary_max": 6000 },
        "senior": { "salary_min": 6000, "salary_max": 8500 }
    }))
    .unwrap()
}

#[tokio::test]
async fn test_job_position_approval_and_revision() {
    let controller = JobPositionController::new(Arc::new(InMemoryJobPositions::default()));
    let hr = actor(UserRole::HrAdmin);

    let position = controller.create(position_request()).await.unwrap().data.unwrap();
    assert_eq!(position.code, "ANA-RH");
    assert_eq!(position.revision, Decimal::new(10, 1));
    assert_eq!(position.status, JobPositionStatus::Draft);

    // Un borrador no se revisa
    assert!(matches!(
        controller.revise(position.id).await,
        Err(AppError::InvalidTransition { .. })
    ));

    controller
        .transition(position.id, JobPositionTransitionRequest { status: JobPositionStatus::InReview }, hr)
        .await
        .unwrap();

    let denied = controller
        .transition(
            position.id,
            JobPositionTransitionRequest { status: JobPositionStatus::Approved },
            actor(UserRole::Recruiter),
        )
        .await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    let approved = controller
        .transition(position.id, JobPositionTransitionRequest { status: JobPositionStatus::Approved }, hr)
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(approved.approved_by, Some(hr.user_id));
    assert!(approved.approved_at.is_some());

    let revised = controller.revise(position.id).await.unwrap().data.unwrap();
    assert_eq!(revised.status, JobPositionStatus::Draft);
    assert_eq!(revised.revision, Decimal::new(11, 1));
    assert_eq!(revised.approved_by, None);
}

#[tokio::test]
async fn test_job_position_rejects_inverted_salary_range() {
    let controller = JobPositionController::new(Arc::new(InMemoryJobPositions::default()));
    let mut request = position_request();
    request.mid.salary_min = Some(Decimal::new(7000, 0));

    assert!(matches!(controller.create(request).await, Err(AppError::Validation(_))));
}

// ---------------------------------------------------------------------------
// Férias
// ---------------------------------------------------------------------------

fn vacation(period_number: i32, start_date: NaiveDate, days: i32) -> CreateVacationRequest {
    CreateVacationRequest {
        period_number,
        start_date,
        days,
        sold_days: 0,
    }
}

#[tokio::test]
async fn test_vacation_booking_follows_period_rules() {
    let paula = employee("Paula", months_ago(13));
    let vacations = Arc::new(InMemoryVacations::default());
    let controller = VacationController::new(
        Arc::new(InMemoryEmployees::with(vec![paula.clone()])),
        vacations.clone(),
        VacationPolicy::default(),
    );
    let start = today() + Duration::days(10);

    let booked = controller.create_booking(paula.id, vacation(1, start, 20)).await.unwrap().data.unwrap();
    assert_eq!(booked.status, VacationRequestStatus::Scheduled);

    // Superpuesta con la anterior
    let overlapping = controller
        .create_booking(paula.id, vacation(1, start + Duration::days(5), 10))
        .await;
    assert!(matches!(overlapping, Err(AppError::Validation(_))));

    // 20 + 15 supera los 30 días del período
    let exceeding = controller
        .create_booking(paula.id, vacation(1, start + Duration::days(40), 15))
        .await;
    assert!(matches!(exceeding, Err(AppError::Validation(_))));

    // El segundo período todavía no fue adquirido
    let early = controller.create_booking(paula.id, vacation(2, start, 20)).await;
    assert!(matches!(early, Err(AppError::Validation(_))));
    assert_eq!(vacations.bookings.lock().unwrap().len(), 1);

    let periods = controller.periods(paula.id).await.unwrap().data.unwrap();
    assert_eq!(periods[0].status, VacationPeriodStatus::Scheduled);
    assert_eq!(periods[0].scheduled_days, 20);
    assert_eq!(periods[0].remaining_days, 10);

    let canceled = controller.cancel_booking(booked.id).await.unwrap().data.unwrap();
    assert_eq!(canceled.status, VacationRequestStatus::Canceled);
    assert!(matches!(controller.cancel_booking(booked.id).await, Err(AppError::NotFound(_))));

    let unknown = controller.create_booking(Uuid::new_v4(), vacation(1, start, 20)).await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_expiring_lists_only_current_employees_near_deadline() {
    let bruno = employee("Bruno", months_ago(23));
    let carla = employee("Carla", months_ago(13));
    let mut diego = employee("Diego", months_ago(23));
    diego.status = EmployeeStatus::Inactive;

    let controller = VacationController::new(
        Arc::new(InMemoryEmployees::with(vec![bruno.clone(), carla, diego])),
        Arc::new(InMemoryVacations::default()),
        VacationPolicy::default(),
    );

    let expiring = controller.expiring().await.unwrap().data.unwrap();
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].employee_id, bruno.id);
    assert_eq!(expiring[0].employee_name, "Bruno Almeida");
    assert_eq!(expiring[0].period.number, 1);
    assert!(expiring[0].period.is_expiring);
}

// ---------------------------------------------------------------------------
// Treinamentos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_training_completion_expiry_and_matrix() {
    let positions = Arc::new(InMemoryJobPositions::default());
    let position = JobPositionController::new(positions.clone())
        .create(position_request())
        .await
        .unwrap()
        .data
        .unwrap();

    let mut helena = employee("Helena", months_ago(30));
    helena.job_position_id = Some(position.id);
    let mut igor = employee("Igor", months_ago(6));
    igor.job_position_id = Some(position.id);
    let julia = employee("Julia", months_ago(6));

    let controller = TrainingController::new(
        Arc::new(InMemoryTrainings::default()),
        Arc::new(InMemoryEmployees::with(vec![helena.clone(), igor.clone(), julia])),
        positions,
    );

    let create: CreateTrainingRequest = serde_json::from_value(json!({
        "code": "nr-35",
        "title": "Trabalho em altura",
        "kind": "training",
        "validity_months": 24
    }))
    .unwrap();
    let nr35 = controller.create(create).await.unwrap().data.unwrap();
    assert_eq!(nr35.code, "NR-35");

    controller
        .require(RequirementRequest {
            job_position_id: position.id,
            training_id: nr35.id,
        })
        .await
        .unwrap();

    let completed_at = months_ago(2);
    let recent = controller
        .record_completion(RecordCompletionRequest {
            employee_id: helena.id,
            training_id: nr35.id,
            completed_at,
        })
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(recent.expires_at, completed_at.checked_add_months(Months::new(24)));

    // Conclusión antigua: venció hace seis meses
    controller
        .record_completion(RecordCompletionRequest {
            employee_id: igor.id,
            training_id: nr35.id,
            completed_at: months_ago(30),
        })
        .await
        .unwrap();

    let unknown = controller
        .record_completion(RecordCompletionRequest {
            employee_id: Uuid::new_v4(),
            training_id: nr35.id,
            completed_at,
        })
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let matrix = controller
        .matrix(MatrixQuery {
            job_position_id: Some(position.id),
        })
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(matrix.rows.len(), 2);
    assert_eq!(matrix.overall_percentage, 50.0);
    assert_eq!(matrix.trainings[0].required_for, 2);
    let igor_row = matrix.rows.iter().find(|r| r.employee_id == igor.id).unwrap();
    assert_eq!(igor_row.cells[0].status, ComplianceStatus::Expired);

    // Sin filtro aparece también quien no tiene requisitos
    let all = controller.matrix(MatrixQuery::default()).await.unwrap().data.unwrap();
    assert_eq!(all.rows.len(), 3);
}

// ---------------------------------------------------------------------------
// Recrutamento
// ---------------------------------------------------------------------------

fn opening(title: &str) -> CreateJobOpeningRequest {
    serde_json::from_value(json!({ "title": title, "vacancies": 2 })).unwrap()
}

fn candidate(opening_id: Uuid) -> CreateCandidateRequest {
    serde_json::from_value(json!({
        "job_opening_id": opening_id,
        "full_name": "Beatriz Ramos",
        "email": "Beatriz.Ramos@gmail.com",
        "resume_text": "Cinco anos em departamento pessoal e folha de pagamento"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_candidates_only_join_open_openings() {
    let repo = Arc::new(InMemoryRecruitment::default());
    let controller = RecruitmentController::new(repo.clone(), Arc::new(FixedAnalyzer::new(80)));

    let open = controller.create_opening(opening("Analista de RH")).await.unwrap().data.unwrap();
    let closed = controller.create_opening(opening("Assistente administrativo")).await.unwrap().data.unwrap();
    let closed = controller
        .update_opening(
            closed.id,
            UpdateJobOpeningRequest {
                status: Some(OpeningStatus::Closed),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data
        .unwrap();
    assert!(closed.closed_at.is_some());

    let rejected = controller.create_candidate(candidate(closed.id)).await;
    assert!(matches!(rejected, Err(AppError::Validation(_))));
    assert!(repo.candidates.lock().unwrap().is_empty());

    let beatriz = controller.create_candidate(candidate(open.id)).await.unwrap().data.unwrap();
    assert_eq!(beatriz.email, "beatriz.ramos@gmail.com");

    let moved = controller
        .update_candidate(
            beatriz.id,
            UpdateCandidateRequest {
                job_opening_id: Some(closed.id),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(moved, Err(AppError::Validation(_))));
    assert_eq!(repo.candidates.lock().unwrap()[0].job_opening_id, Some(open.id));

    // Repetir la vaga actual no vuelve a validarla
    let renamed = controller
        .update_candidate(
            beatriz.id,
            UpdateCandidateRequest {
                job_opening_id: Some(open.id),
                full_name: Some("Beatriz Ramos Lima".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(renamed.full_name, "Beatriz Ramos Lima");
}

#[tokio::test]
async fn test_assessment_and_resume_analysis() {
    let repo = Arc::new(InMemoryRecruitment::default());
    let analyzer = Arc::new(FixedAnalyzer::new(87));
    let controller = RecruitmentController::new(repo.clone(), analyzer.clone());

    let open = controller.create_opening(opening("Analista de RH")).await.unwrap().data.unwrap();
    let beatriz = controller.create_candidate(candidate(open.id)).await.unwrap().data.unwrap();

    let answer = |question, most, least| DiscAnswer { question, most, least };
    let answers = vec![
        answer(1, DiscFactor::Dominance, DiscFactor::Steadiness),
        answer(2, DiscFactor::Dominance, DiscFactor::Conformity),
        answer(3, DiscFactor::Influence, DiscFactor::Steadiness),
        answer(4, DiscFactor::Dominance, DiscFactor::Steadiness),
    ];
    let assessment = controller
        .submit_assessment(beatriz.id, SubmitAssessmentRequest { answers: answers.clone() })
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(assessment.primary_profile, "D");
    assert_eq!(assessment.secondary_profile, "I");
    assert_eq!(controller.list_assessments(beatriz.id).await.unwrap().data.unwrap().len(), 1);

    let repeated = vec![answers[0].clone(), answers[0].clone()];
    let invalid = controller
        .submit_assessment(beatriz.id, SubmitAssessmentRequest { answers: repeated })
        .await;
    assert!(matches!(invalid, Err(AppError::Validation(_))));

    let unknown = controller
        .submit_assessment(Uuid::new_v4(), SubmitAssessmentRequest { answers })
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let analyzed = controller.analyze_resume(beatriz.id).await.unwrap().data.unwrap();
    assert_eq!(analyzed.ai_score, Some(87));
    assert_eq!(analyzer.seen.lock().unwrap()[0].job_title.as_deref(), Some("Analista de RH"));

    let mut empty = candidate(open.id);
    empty.resume_text = None;
    let no_resume = controller.create_candidate(empty).await.unwrap().data.unwrap();
    assert!(matches!(
        controller.analyze_resume(no_resume.id).await,
        Err(AppError::BadRequest(_))
    ));
}

// ---------------------------------------------------------------------------
// Departamentos
// ---------------------------------------------------------------------------

fn department(name: &str, code: &str, parent_id: Option<Uuid>) -> CreateDepartmentRequest {
    CreateDepartmentRequest {
        name: name.to_string(),
        code: code.to_string(),
        parent_id,
        manager_id: None,
    }
}

#[tokio::test]
async fn test_departments_and_org_chart() {
    let departments = Arc::new(InMemoryDepartments::default());
    let mut ceo = employee("Renata", months_ago(60));
    let mut lead = employee("Sergio", months_ago(40));
    let mut analyst = employee("Tania", months_ago(10));
    let loose = employee("Ulisses", months_ago(5));
    let mut former = employee("Vera", months_ago(50));

    let staff = Arc::new(InMemoryEmployees::default());
    let controller = DepartmentController::new(departments, staff.clone());

    let board = controller.create(department("Diretoria", "dir", None)).await.unwrap().data.unwrap();
    let hr = controller
        .create(department("Recursos Humanos", "rh", Some(board.id)))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(hr.code, "RH");

    let orphan = controller
        .create(department("Financeiro", "fin", Some(Uuid::new_v4())))
        .await;
    assert!(matches!(orphan, Err(AppError::NotFound(_))));

    let own_parent = controller
        .update(
            hr.id,
            UpdateDepartmentRequest {
                parent_id: Some(hr.id),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(own_parent, Err(AppError::Validation(_))));

    ceo.department_id = Some(board.id);
    lead.department_id = Some(hr.id);
    analyst.department_id = Some(hr.id);
    analyst.manager_id = Some(lead.id);
    former.department_id = Some(hr.id);
    former.status = EmployeeStatus::Inactive;
    staff
        .employees
        .lock()
        .unwrap()
        .extend([ceo, lead.clone(), analyst, loose, former]);

    let chart = controller.org_chart().await.unwrap().data.unwrap();
    assert_eq!(chart.departments.len(), 1);
    let root = &chart.departments[0];
    assert_eq!(root.item.code, "DIR");
    assert_eq!(root.item.headcount, 1);

    let hr_node = &root.children[0];
    assert_eq!(hr_node.item.headcount, 2);
    assert_eq!(hr_node.item.members.len(), 1);
    assert_eq!(hr_node.item.members[0].item.id, lead.id);
    assert_eq!(hr_node.item.members[0].children.len(), 1);
    assert_eq!(chart.unassigned.len(), 1);
}
