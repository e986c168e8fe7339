use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vacation_controller::VacationController;
use crate::dto::vacation_dto::{CreateVacationRequest, ExpiringVacation, PreviewPeriodsRequest, RecordAbsenceRequest};
use crate::dto::ApiResponse;
use crate::models::vacation::{EmployeeAbsence, VacationPeriod, VacationRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vacation_router() -> Router<AppState> {
    Router::new()
        .route("/preview", post(preview_periods))
        .route("/expiring", get(expiring_vacations))
        .route("/bookings/:id/cancel", post(cancel_booking))
        .route("/employees/:employee_id/periods", get(vacation_periods))
        .route("/employees/:employee_id/bookings", get(list_bookings).post(create_booking))
        .route("/employees/:employee_id/absences", get(list_absences).post(record_absence))
}

fn controller(state: &AppState) -> VacationController {
    VacationController::new(
        state.repositories.employees.clone(),
        state.repositories.vacations.clone(),
        state.vacation_policy(),
    )
}

async fn vacation_periods(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<VacationPeriod>>>, AppError> {
    Ok(Json(controller(&state).periods(employee_id).await?))
}

async fn preview_periods(
    State(state): State<AppState>,
    Json(request): Json<PreviewPeriodsRequest>,
) -> Result<Json<ApiResponse<Vec<VacationPeriod>>>, AppError> {
    Ok(Json(controller(&state).preview(request)?))
}

async fn list_bookings(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<VacationRequest>>>, AppError> {
    Ok(Json(controller(&state).list_bookings(employee_id).await?))
}

async fn create_booking(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<CreateVacationRequest>,
) -> Result<Json<ApiResponse<VacationRequest>>, AppError> {
    Ok(Json(controller(&state).create_booking(employee_id, request).await?))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VacationRequest>>, AppError> {
    Ok(Json(controller(&state).cancel_booking(id).await?))
}

async fn expiring_vacations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ExpiringVacation>>>, AppError> {
    Ok(Json(controller(&state).expiring().await?))
}

async fn list_absences(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<EmployeeAbsence>>>, AppError> {
    Ok(Json(controller(&state).list_absences(employee_id).await?))
}

async fn record_absence(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<RecordAbsenceRequest>,
) -> Result<Json<ApiResponse<EmployeeAbsence>>, AppError> {
    Ok(Json(controller(&state).record_absence(employee_id, request).await?))
}
