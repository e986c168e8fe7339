use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::job_position_controller::JobPositionController;
use crate::dto::job_position_dto::{
    CreateJobPositionRequest, JobPositionFilters, JobPositionTransitionRequest, UpdateJobPositionRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::job_position::JobPosition;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_job_position_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_positions).post(create_position))
        .route("/:id", get(get_position).put(update_position).delete(delete_position))
        .route("/:id/transition", post(transition_position))
        .route("/:id/revise", post(revise_position))
}

fn controller(state: &AppState) -> JobPositionController {
    JobPositionController::new(state.repositories.job_positions.clone())
}

async fn create_position(
    State(state): State<AppState>,
    Json(request): Json<CreateJobPositionRequest>,
) -> Result<Json<ApiResponse<JobPosition>>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn list_positions(
    State(state): State<AppState>,
    Query(filters): Query<JobPositionFilters>,
) -> Result<Json<ApiResponse<Vec<JobPosition>>>, AppError> {
    Ok(Json(controller(&state).list(filters).await?))
}

async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobPosition>>, AppError> {
    Ok(Json(controller(&state).get(id).await?))
}

async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJobPositionRequest>,
) -> Result<Json<ApiResponse<JobPosition>>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete(id).await?))
}

async fn transition_position(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobPositionTransitionRequest>,
) -> Result<Json<ApiResponse<JobPosition>>, AppError> {
    Ok(Json(controller(&state).transition(id, request, user.actor()).await?))
}

async fn revise_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobPosition>>, AppError> {
    Ok(Json(controller(&state).revise(id).await?))
}
