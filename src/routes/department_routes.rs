use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::department_controller::DepartmentController;
use crate::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::dto::ApiResponse;
use crate::models::department::Department;
use crate::services::org_chart::OrgChart;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_department_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route("/org-chart", get(org_chart))
        .route("/:id", get(get_department).put(update_department).delete(delete_department))
}

fn controller(state: &AppState) -> DepartmentController {
    DepartmentController::new(state.repositories.departments.clone(), state.repositories.employees.clone())
}

async fn create_department(
    State(state): State<AppState>,
    Json(request): Json<CreateDepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn list_departments(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Department>>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Department>>, AppError> {
    Ok(Json(controller(&state).get(id).await?))
}

async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete(id).await?))
}

async fn org_chart(State(state): State<AppState>) -> Result<Json<ApiResponse<OrgChart>>, AppError> {
    Ok(Json(controller(&state).org_chart().await?))
}
