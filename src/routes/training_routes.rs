use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::training_controller::TrainingController;
use crate::dto::training_dto::{
    CreateTrainingRequest, MatrixQuery, RecordCompletionRequest, RequirementRequest, UpdateTrainingRequest,
};
use crate::dto::ApiResponse;
use crate::models::training::{EmployeeTraining, PositionTraining, Training};
use crate::services::training_matrix::TrainingMatrix;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_training_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trainings).post(create_training))
        .route("/matrix", get(training_matrix))
        .route(
            "/requirements",
            get(list_requirements).post(require_training).delete(remove_requirement),
        )
        .route("/completions", get(list_completions).post(record_completion))
        .route("/:id", get(get_training).put(update_training).delete(delete_training))
}

#[derive(Debug, Default, Deserialize)]
struct CompletionQuery {
    employee_id: Option<Uuid>,
}

fn controller(state: &AppState) -> TrainingController {
    TrainingController::new(
        state.repositories.trainings.clone(),
        state.repositories.employees.clone(),
        state.repositories.job_positions.clone(),
    )
}

async fn create_training(
    State(state): State<AppState>,
    Json(request): Json<CreateTrainingRequest>,
) -> Result<Json<ApiResponse<Training>>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn list_trainings(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Training>>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn get_training(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Training>>, AppError> {
    Ok(Json(controller(&state).get(id).await?))
}

async fn update_training(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTrainingRequest>,
) -> Result<Json<ApiResponse<Training>>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_training(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete(id).await?))
}

async fn list_requirements(
    State(state): State<AppState>,
    Query(query): Query<MatrixQuery>,
) -> Result<Json<ApiResponse<Vec<PositionTraining>>>, AppError> {
    Ok(Json(controller(&state).list_requirements(query).await?))
}

async fn require_training(
    State(state): State<AppState>,
    Json(request): Json<RequirementRequest>,
) -> Result<Json<ApiResponse<PositionTraining>>, AppError> {
    Ok(Json(controller(&state).require(request).await?))
}

async fn remove_requirement(
    State(state): State<AppState>,
    Json(request): Json<RequirementRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).remove_requirement(request).await?))
}

async fn list_completions(
    State(state): State<AppState>,
    Query(query): Query<CompletionQuery>,
) -> Result<Json<ApiResponse<Vec<EmployeeTraining>>>, AppError> {
    Ok(Json(controller(&state).list_completions(query.employee_id).await?))
}

async fn record_completion(
    State(state): State<AppState>,
    Json(request): Json<RecordCompletionRequest>,
) -> Result<Json<ApiResponse<EmployeeTraining>>, AppError> {
    Ok(Json(controller(&state).record_completion(request).await?))
}

async fn training_matrix(
    State(state): State<AppState>,
    Query(query): Query<MatrixQuery>,
) -> Result<Json<ApiResponse<TrainingMatrix>>, AppError> {
    Ok(Json(controller(&state).matrix(query).await?))
}
