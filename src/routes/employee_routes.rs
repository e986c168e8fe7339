use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::dossier_controller::DossierController;
use crate::controllers::employee_controller::EmployeeController;
use crate::dto::employee_dto::{
    AttachDocumentRequest, CreateEmployeeRequest, DependentInput, EmployeeDossier, SetStatusRequest,
    UpdateEmployeeRequest,
};
use crate::dto::{ApiResponse, Page};
use crate::models::employee::{Dependent, Employee, EmployeeDocument, EmployeeFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:id", get(get_employee).put(update_employee).delete(delete_employee))
        .route("/:id/status", patch(set_status))
        .route("/:id/dependents", get(list_dependents).post(add_dependent))
        .route("/:id/dependents/:dependent_id", axum::routing::delete(remove_dependent))
        .route("/:id/documents", get(list_documents).post(attach_document))
        .route("/:id/documents/:document_id", axum::routing::delete(remove_document))
        .route("/:id/dossier", get(get_dossier))
}

fn controller(state: &AppState) -> EmployeeController {
    EmployeeController::new(state.repositories.employees.clone(), state.config.max_employee_photos)
}

async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn list_employees(
    State(state): State<AppState>,
    Query(filters): Query<EmployeeFilters>,
) -> Result<Json<ApiResponse<Page<Employee>>>, AppError> {
    Ok(Json(controller(&state).list(filters).await?))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    Ok(Json(controller(&state).get(id).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete(id).await?))
}

async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    Ok(Json(controller(&state).set_status(id, request).await?))
}

async fn list_dependents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Dependent>>>, AppError> {
    Ok(Json(controller(&state).list_dependents(id).await?))
}

async fn add_dependent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DependentInput>,
) -> Result<Json<ApiResponse<Dependent>>, AppError> {
    Ok(Json(controller(&state).add_dependent(id, request).await?))
}

async fn remove_dependent(
    State(state): State<AppState>,
    Path((id, dependent_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).remove_dependent(id, dependent_id).await?))
}

async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<EmployeeDocument>>>, AppError> {
    Ok(Json(controller(&state).list_documents(id).await?))
}

async fn attach_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AttachDocumentRequest>,
) -> Result<Json<ApiResponse<EmployeeDocument>>, AppError> {
    Ok(Json(controller(&state).attach_document(id, request).await?))
}

async fn remove_document(
    State(state): State<AppState>,
    Path((id, document_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).remove_document(id, document_id).await?))
}

async fn get_dossier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EmployeeDossier>>, AppError> {
    let repositories = &state.repositories;
    let controller = DossierController::new(
        repositories.employees.clone(),
        repositories.departments.clone(),
        repositories.job_positions.clone(),
        repositories.vacations.clone(),
        repositories.trainings.clone(),
        state.vacation_policy(),
    );
    Ok(Json(controller.dossier(id).await?))
}
